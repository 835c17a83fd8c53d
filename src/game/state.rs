//! Engine progress published after every event.

extern crate alloc;

use alloc::vec::Vec;

use crate::coin::Board;
use crate::result::{Outcome, Resolution, Standing};

/// State of a session after the most recent event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Events taken off the queue so far, including ignored ones.
    pub processed: u64,
    /// What happened to the most recent event.
    pub last: Option<Resolution>,
    /// Coins on the board.
    pub board: Board,
    /// Scores in seat order.
    pub standings: Vec<Standing>,
    /// Set once the game has ended.
    pub outcome: Option<Outcome>,
}

impl Snapshot {
    /// Returns `true` once the game has ended.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }
}
