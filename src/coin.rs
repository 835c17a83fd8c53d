//! Coin types and the board that holds them.

use core::fmt;

/// Coin colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    /// The single queen coin. Either on the board or not.
    Red,
    /// Black coins.
    Black,
    /// White coins.
    White,
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "red",
            Self::Black => "black",
            Self::White => "white",
        })
    }
}

/// Coins pocketed by a single strike.
///
/// Strike kinds that do not look at coins ignore this payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pocketed {
    /// Number of black coins pocketed.
    pub black: u8,
    /// Number of white coins pocketed.
    pub white: u8,
    /// Whether the red coin was pocketed.
    pub red: bool,
}

impl Pocketed {
    /// Nothing pocketed.
    pub const NONE: Self = Self {
        black: 0,
        white: 0,
        red: false,
    };

    /// Creates a payload with the given black and white counts.
    #[must_use]
    pub const fn new(black: u8, white: u8) -> Self {
        Self {
            black,
            white,
            red: false,
        }
    }

    /// Creates a payload of black coins only.
    #[must_use]
    pub const fn black(count: u8) -> Self {
        Self::new(count, 0)
    }

    /// Creates a payload of white coins only.
    #[must_use]
    pub const fn white(count: u8) -> Self {
        Self::new(0, count)
    }

    /// Marks the red coin as pocketed.
    #[must_use]
    pub const fn with_red(mut self) -> Self {
        self.red = true;
        self
    }

    /// Returns `true` if no coin of any colour was pocketed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.black == 0 && self.white == 0 && !self.red
    }
}

/// Coins remaining on the board.
///
/// Counts never go below zero. Red is binary: any removal takes it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    red: u8,
    black: u8,
    white: u8,
}

impl Board {
    /// Red coins on a fresh board.
    pub const RED: u8 = 1;
    /// Black coins on a fresh board.
    pub const BLACK: u8 = 9;
    /// White coins on a fresh board.
    pub const WHITE: u8 = 9;

    /// Creates a board with the given coin counts.
    ///
    /// Any non-zero red count is stored as a single red coin.
    #[must_use]
    pub fn new(red: u8, black: u8, white: u8) -> Self {
        Self {
            red: u8::from(red > 0),
            black,
            white,
        }
    }

    /// Returns the number of coins of the given colour still on the board.
    #[must_use]
    pub const fn count(&self, coin: Coin) -> u8 {
        match coin {
            Coin::Red => self.red,
            Coin::Black => self.black,
            Coin::White => self.white,
        }
    }

    /// Returns the red count (0 or 1).
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the black count.
    #[must_use]
    pub const fn black(&self) -> u8 {
        self.black
    }

    /// Returns the white count.
    #[must_use]
    pub const fn white(&self) -> u8 {
        self.white
    }

    /// Returns `true` if the red coin is still in play.
    #[must_use]
    pub const fn has_red(&self) -> bool {
        self.red > 0
    }

    /// Removes up to `count` coins of the given colour.
    ///
    /// Removing more than remain empties that colour. Removing red always
    /// takes the red coin off, whatever `count` is.
    pub const fn remove(&mut self, coin: Coin, count: u8) {
        match coin {
            Coin::Red => self.red = 0,
            Coin::Black => self.black = self.black.saturating_sub(count),
            Coin::White => self.white = self.white.saturating_sub(count),
        }
    }

    /// Removes every coin in a strike payload.
    pub(crate) const fn take(&mut self, pocketed: Pocketed) {
        if pocketed.red {
            self.remove(Coin::Red, 1);
        }
        self.remove(Coin::Black, pocketed.black);
        self.remove(Coin::White, pocketed.white);
    }

    /// Returns `true` once every coin has left the board.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.red == 0 && self.black == 0 && self.white == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Self::RED, Self::BLACK, Self::WHITE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "red: {}, black: {}, white: {}",
            self.red, self.black, self.white
        )
    }
}
