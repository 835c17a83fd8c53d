//! Game outcome and standings types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::coin::Board;
use crate::error::StrikeError;
use crate::strike::StrikeKind;

/// A player's score in seat order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// Seat index (turn order).
    pub seat: usize,
    /// Player name.
    pub name: String,
    /// Point total.
    pub points: i32,
}

/// How a game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A player reached the winning score with a sufficient lead.
    Win {
        /// Seat of the winner.
        seat: usize,
        /// Name of the winner.
        name: String,
        /// Winning point total.
        points: i32,
    },
    /// All coins left the board without a winner.
    Draw,
}

impl Outcome {
    /// Returns the winner's name, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            Self::Win { name, .. } => Some(name),
            Self::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win { name, points, .. } => {
                write!(f, "{name:?} won the game with {points} points")
            }
            Self::Draw => f.write_str("coins exhausted with no winner, game drawn"),
        }
    }
}

/// What the engine did with one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The strike was applied to the player in `seat`.
    Applied {
        /// Seat that took the strike.
        seat: usize,
        /// Kind of strike applied.
        kind: StrikeKind,
    },
    /// The strike was rejected. The same seat plays the next event.
    Rejected {
        /// Seat that attempted the strike.
        seat: usize,
        /// Why the strike was rejected.
        error: StrikeError,
    },
    /// The event carried an unknown wire code and was dropped.
    Ignored {
        /// The unrecognized code.
        code: u8,
    },
}

impl Resolution {
    /// Returns `true` if the strike was applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Final state of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    /// How the game ended, or `None` if the queue was released first.
    pub outcome: Option<Outcome>,
    /// Final scores in seat order.
    pub standings: Vec<Standing>,
    /// Coins left on the board.
    pub board: Board,
    /// Number of events the engine took off the queue.
    pub events: u64,
}
