//! A carrom scoring engine driven by an ordered queue of strike events.
//!
//! The crate provides a [`Session`] that seats two to four players, resolves
//! strikes against a shared [`Board`] in the order they are sent, rotates the
//! turn after every applied strike, and stops once a player wins or the coins
//! run out. The synchronous pieces ([`Table`], [`TurnEngine`]) can be driven
//! directly for deterministic use.
//!
//! # Example
//!
//! ```no_run
//! use carrom::{RandomStrikes, Session, TableOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), carrom::SessionError> {
//! let mut session = Session::start(["p1", "p2"], TableOptions::default()).unwrap();
//! let outcome = session.play(RandomStrikes::new(42)).await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod coin;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod producer;
pub mod result;
pub mod session;
pub mod strike;

// Re-export main types
pub use coin::{Board, Coin, Pocketed};
pub use error::{SessionError, SetupError, StrikeError, UnknownStrikeCode, Violation};
pub use game::{Snapshot, Table, TurnEngine};
pub use options::TableOptions;
pub use player::{FOUL_LIMIT, MIN_PLAYERS, NO_POCKET_LIMIT, Player, Roster};
pub use producer::RandomStrikes;
pub use result::{GameReport, Outcome, Resolution, Standing};
pub use session::Session;
pub use strike::{StrikeEvent, StrikeKind};
