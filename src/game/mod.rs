//! Table state, strike rules, and game-over detection.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::coin::{Board, Pocketed};
use crate::error::{SetupError, StrikeError, Violation};
use crate::options::TableOptions;
use crate::player::Roster;
use crate::result::{Outcome, Standing};
use crate::strike::StrikeKind;

pub mod engine;
mod rules;
pub mod state;

pub use engine::TurnEngine;
pub use state::Snapshot;

/// A carrom table: the board, the seated players, and the rules in force.
///
/// The table itself is synchronous. [`TurnEngine`] decides whose turn it is
/// and [`Session`](crate::Session) feeds it from a queue.
#[derive(Debug, Clone)]
pub struct Table {
    board: Board,
    roster: Roster,
    options: TableOptions,
}

impl Table {
    /// Seats the named players at a freshly set board.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two names are given or a name repeats.
    ///
    /// # Example
    ///
    /// ```
    /// use carrom::{Table, TableOptions};
    ///
    /// let table = Table::new(["p1", "p2"], TableOptions::default()).unwrap();
    /// assert_eq!(table.board().black(), 9);
    /// assert!(Table::new(["p1"], TableOptions::default()).is_err());
    /// ```
    pub fn new<I, S>(names: I, options: TableOptions) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roster = Roster::new(names)?;

        Ok(Self {
            board: options.board(),
            roster,
            options,
        })
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the seated players.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the options the table was set with.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    pub(crate) const fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// Applies one strike for the player in `seat`.
    ///
    /// Rejected strikes leave the board and the player untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if `seat` is not in the roster or the strike breaks
    /// the rules of its kind.
    pub fn resolve(
        &mut self,
        seat: usize,
        kind: StrikeKind,
        pocketed: Pocketed,
    ) -> Result<(), StrikeError> {
        let players = self.roster.len();
        let Some(player) = self.roster.get_mut(seat) else {
            return Err(StrikeError {
                kind,
                violation: Violation::NoSuchSeat { seat, players },
                requested: pocketed,
                board: self.board,
            });
        };
        let board = &mut self.board;

        match kind {
            StrikeKind::Strike => board.strike(player, pocketed),
            StrikeKind::MultiStrike => board.multi_strike(player, pocketed),
            StrikeKind::RedStrike => board.red_strike(player),
            StrikeKind::StrikerStrike => {
                board.striker_strike(player);
                Ok(())
            }
            StrikeKind::Defunct => board.defunct(player, pocketed),
            StrikeKind::NoPocket => {
                board.no_pocket(player);
                Ok(())
            }
        }
    }

    /// Returns how the game ended, or `None` while it is still in play.
    ///
    /// The leader is the first player in seat order holding the top score.
    /// They win once they have at least `win_points` and lead some other
    /// player by `win_margin` or more. Otherwise the game is drawn when the
    /// board is empty.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        let TableOptions {
            win_points,
            win_margin,
            ..
        } = self.options;

        if let Some((seat, leader)) = self.roster.leader() {
            let top = leader.points();
            let clear = self
                .roster
                .players()
                .iter()
                .any(|p| top - p.points() >= win_margin);

            if clear && top >= win_points {
                return Some(Outcome::Win {
                    seat,
                    name: leader.name().into(),
                    points: top,
                });
            }
        }

        self.board.is_empty().then_some(Outcome::Draw)
    }

    /// Returns `true` once a player has won or the board is empty.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Returns every player's score in seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.roster
            .players()
            .iter()
            .enumerate()
            .map(|(seat, p)| Standing {
                seat,
                name: p.name().into(),
                points: p.points(),
            })
            .collect()
    }
}
