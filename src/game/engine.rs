//! Turn rotation and the queue consumer.

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::result::{GameReport, Resolution};
use crate::strike::StrikeEvent;

use super::{Snapshot, Table};

/// Resolves strike events in order and decides whose turn it is.
///
/// The turn passes to the next seat only after an applied strike. A rejected
/// strike keeps the same player at the board, and an unknown event changes
/// nothing.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    table: Table,
    /// Seat at the board.
    active: usize,
    /// Whether the previous strike was applied. Starts `true` so the first
    /// event goes to seat 0.
    advance: bool,
    processed: u64,
}

impl TurnEngine {
    /// Creates an engine for a freshly set table.
    #[must_use]
    pub const fn new(table: Table) -> Self {
        Self {
            table,
            active: 0,
            advance: true,
            processed: 0,
        }
    }

    /// Returns the table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the seat that played the most recent strike.
    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    /// Returns the seat that will play the next event.
    #[must_use]
    pub const fn up_next(&self) -> usize {
        if self.advance {
            self.table.roster().next_up()
        } else {
            self.active
        }
    }

    /// Returns the number of events processed so far.
    #[must_use]
    pub const fn processed(&self) -> u64 {
        self.processed
    }

    /// Resolves one event against the table.
    pub fn process(&mut self, event: StrikeEvent) -> Resolution {
        self.processed += 1;

        let kind = match event.kind() {
            Ok(kind) => kind,
            Err(err) => {
                warn!(code = event.code, %err, "ignoring strike");
                return Resolution::Ignored { code: event.code };
            }
        };

        if self.advance {
            self.active = self.table.roster_mut().pass_turn();
        }

        debug!(seat = self.active, %kind, pocketed = ?event.pocketed, "strike received");

        match self.table.resolve(self.active, kind, event.pocketed) {
            Ok(()) => {
                self.advance = true;
                Resolution::Applied {
                    seat: self.active,
                    kind,
                }
            }
            Err(error) => {
                warn!(
                    seat = self.active,
                    violation = ?error.violation,
                    board = %error.board,
                    "{error}, ignoring request"
                );
                self.advance = false;
                Resolution::Rejected {
                    seat: self.active,
                    error,
                }
            }
        }
    }

    /// Captures the current state along with the latest resolution.
    #[must_use]
    pub fn snapshot(&self, last: Option<Resolution>) -> Snapshot {
        Snapshot {
            processed: self.processed,
            last,
            board: *self.table.board(),
            standings: self.table.standings(),
            outcome: self.table.outcome(),
        }
    }

    /// Consumes the engine into a final report.
    #[must_use]
    pub fn into_report(self) -> GameReport {
        GameReport {
            outcome: self.table.outcome(),
            standings: self.table.standings(),
            board: *self.table.board(),
            events: self.processed,
        }
    }
}

/// Drains the strike queue until the game ends or every sender is gone.
///
/// Progress is published after each event. On game over the queue is closed,
/// so later sends fail.
pub(crate) async fn run(
    mut engine: TurnEngine,
    mut events: mpsc::Receiver<StrikeEvent>,
    progress: watch::Sender<Snapshot>,
) -> GameReport {
    while let Some(event) = events.recv().await {
        let resolution = engine.process(event);
        let snapshot = engine.snapshot(Some(resolution));

        // Close before publishing so a producer that sees the end cannot send.
        if let Some(outcome) = snapshot.outcome.clone() {
            info!(events = engine.processed(), "{outcome}");
            events.close();
            progress.send_replace(snapshot);
            break;
        }

        progress.send_replace(snapshot);
    }

    engine.into_report()
}
