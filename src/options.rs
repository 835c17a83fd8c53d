//! Table configuration options.

use crate::coin::Board;

/// Configuration options for a carrom table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use carrom::TableOptions;
///
/// let options = TableOptions::default()
///     .with_white(0)
///     .with_win_points(7);
/// assert_eq!(options.white, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Red coins at the start (stored as present or absent).
    pub red: u8,
    /// Black coins at the start.
    pub black: u8,
    /// White coins at the start. Zero plays the black-only variant.
    pub white: u8,
    /// Capacity of the strike queue. Producers wait while it is full.
    pub queue_capacity: usize,
    /// Minimum points the leader needs to win.
    pub win_points: i32,
    /// Lead over some other player the leader needs to win.
    pub win_margin: i32,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            red: Board::RED,
            black: Board::BLACK,
            white: Board::WHITE,
            queue_capacity: 1,
            win_points: 5,
            win_margin: 3,
        }
    }
}

impl TableOptions {
    /// Sets the starting red count.
    ///
    /// # Example
    ///
    /// ```
    /// use carrom::TableOptions;
    ///
    /// let options = TableOptions::default().with_red(0);
    /// assert_eq!(options.red, 0);
    /// ```
    #[must_use]
    pub const fn with_red(mut self, red: u8) -> Self {
        self.red = red;
        self
    }

    /// Sets the starting black count.
    #[must_use]
    pub const fn with_black(mut self, black: u8) -> Self {
        self.black = black;
        self
    }

    /// Sets the starting white count.
    #[must_use]
    pub const fn with_white(mut self, white: u8) -> Self {
        self.white = white;
        self
    }

    /// Sets the strike queue capacity. Values below 1 are raised to 1.
    ///
    /// # Example
    ///
    /// ```
    /// use carrom::TableOptions;
    ///
    /// let options = TableOptions::default().with_queue_capacity(0);
    /// assert_eq!(options.queue_capacity, 1);
    /// ```
    #[must_use]
    pub const fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// Sets the points needed to win.
    #[must_use]
    pub const fn with_win_points(mut self, points: i32) -> Self {
        self.win_points = points;
        self
    }

    /// Sets the lead needed to win.
    #[must_use]
    pub const fn with_win_margin(mut self, margin: i32) -> Self {
        self.win_margin = margin;
        self
    }

    /// Returns a freshly set board for these options.
    #[must_use]
    pub fn board(&self) -> Board {
        Board::new(self.red, self.black, self.white)
    }
}
