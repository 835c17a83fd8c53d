//! Error types for setup, strikes, and sessions.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

use crate::coin::{Board, Coin, Pocketed};
use crate::strike::StrikeKind;

/// Errors that can occur when seating players.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Fewer than two players were named.
    #[error("at least two players are required, got {count}")]
    TooFewPlayers {
        /// Number of names given.
        count: usize,
    },
    /// The same name was given twice.
    #[error("duplicate player name {0:?}")]
    DuplicateName(String),
    /// No tokio runtime is available to run the strike engine.
    #[error("no tokio runtime to run the strike engine")]
    NoRuntime,
}

/// The rule a rejected strike broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The strike kind needs at least one pocketed coin and got none.
    NothingPocketed,
    /// More coins of one colour were claimed than remain on the board.
    ExceedsBoard {
        /// Colour that was over-claimed.
        coin: Coin,
        /// Coins claimed by the strike.
        requested: u8,
        /// Coins left on the board.
        remaining: u8,
    },
    /// The red coin was claimed but is already off the board.
    RedNotOnBoard,
    /// The strike was attributed to a seat nobody sits in.
    NoSuchSeat {
        /// Seat the strike was attributed to.
        seat: usize,
        /// Number of seated players.
        players: usize,
    },
}

/// A strike that failed validation.
///
/// Every rejection displays the same message. The fields say which rule was
/// broken and what the board looked like at the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid strike input")]
pub struct StrikeError {
    /// Kind of the rejected strike.
    pub kind: StrikeKind,
    /// Rule that was broken.
    pub violation: Violation,
    /// Payload of the rejected strike.
    pub requested: Pocketed,
    /// Board at the time of rejection. Unchanged by the strike.
    pub board: Board,
}

/// A strike wire code outside the six known kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown strike code {0}")]
pub struct UnknownStrikeCode(pub u8);

/// Errors that can occur while feeding a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The game is over and the strike queue no longer accepts events.
    #[error("strike queue is closed")]
    Closed,
    /// The strike queue is at capacity. Only returned by non-waiting sends.
    #[error("strike queue is full")]
    Full,
    /// The engine task ended without reporting.
    #[error("strike engine stopped unexpectedly")]
    EngineStopped,
}
