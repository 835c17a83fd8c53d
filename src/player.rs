//! Players and the ordered roster that takes turns.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::SetupError;

/// Faults a player may accrue before losing an extra point.
pub const FOUL_LIMIT: u8 = 3;

/// Consecutive empty strikes a player may make before being penalized.
pub const NO_POCKET_LIMIT: u8 = 3;

/// Minimum number of players at a table.
pub const MIN_PLAYERS: usize = 2;

/// A player seated at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    points: i32,
    fouls: u8,
    no_pockets: u8,
}

impl Player {
    /// Creates a player with a clean score sheet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: 0,
            fouls: 0,
            no_pockets: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the running point total. May be negative.
    #[must_use]
    pub const fn points(&self) -> i32 {
        self.points
    }

    /// Returns the rolling fault count.
    #[must_use]
    pub const fn fouls(&self) -> u8 {
        self.fouls
    }

    /// Returns the current streak of strikes without a pocketed coin.
    #[must_use]
    pub const fn no_pockets(&self) -> u8 {
        self.no_pockets
    }

    pub(crate) const fn score(&mut self, points: i32) {
        self.points += points;
    }

    /// Registers a fault. The third one costs an extra point and clears the count.
    pub(crate) const fn foul(&mut self) {
        self.fouls += 1;

        if self.fouls >= FOUL_LIMIT {
            self.points -= 1;
            self.fouls = 0;
        }
    }

    /// Extends the empty-strike streak. Every third one is a penalized fault.
    pub(crate) const fn miss(&mut self) {
        self.no_pockets += 1;

        if self.no_pockets >= NO_POCKET_LIMIT {
            self.points -= 1;
            self.foul();
            self.no_pockets = 0;
        }
    }
}

/// Players in turn order.
#[derive(Debug, Clone)]
pub struct Roster {
    players: Vec<Player>,
    /// Seat that takes the next turn.
    next_up: usize,
}

impl Roster {
    /// Seats the named players in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two names are given or a name repeats.
    /// Names are compared exactly, so `"p1"` and `"P1"` are distinct.
    pub fn new<I, S>(names: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut players: Vec<Player> = Vec::new();

        for name in names {
            let name = name.into();
            if players.iter().any(|p| p.name == name) {
                return Err(SetupError::DuplicateName(name));
            }
            players.push(Player::new(name));
        }

        if players.len() < MIN_PLAYERS {
            return Err(SetupError::TooFewPlayers {
                count: players.len(),
            });
        }

        Ok(Self {
            players,
            next_up: 0,
        })
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always `false`: a roster holds at least two players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns the players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in the given seat.
    #[must_use]
    pub fn get(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub(crate) fn get_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    /// Returns the seat that takes the turn when it is next passed.
    #[must_use]
    pub const fn next_up(&self) -> usize {
        self.next_up
    }

    /// Hands the turn to the next seat, wrapping at the end, and returns it.
    pub fn pass_turn(&mut self) -> usize {
        let seat = self.next_up;
        self.next_up = (seat + 1) % self.players.len();
        seat
    }

    /// Returns the first player holding the highest score.
    #[must_use]
    pub fn leader(&self) -> Option<(usize, &Player)> {
        self.players
            .iter()
            .enumerate()
            .fold(None, |best, (seat, player)| match best {
                Some((_, top)) if player.points <= top.points => best,
                _ => Some((seat, player)),
            })
    }
}
