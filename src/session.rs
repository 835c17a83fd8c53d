//! A running game fed through a bounded strike queue.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use tokio::runtime::Handle;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use crate::coin::Board;
use crate::error::{SessionError, SetupError};
use crate::game::engine::{self, TurnEngine};
use crate::game::{Snapshot, Table};
use crate::options::TableOptions;
use crate::result::{GameReport, Outcome, Resolution, Standing};
use crate::strike::StrikeEvent;

/// Handle to a game whose strikes are resolved by a background task.
///
/// All board and player state lives inside that task. The handle only
/// enqueues events and reads the progress the task publishes. Events are
/// resolved strictly in the order they are sent.
///
/// # Example
///
/// ```
/// use carrom::{Pocketed, Session, StrikeEvent, TableOptions};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), carrom::SessionError> {
/// let mut session = Session::start(["p1", "p2"], TableOptions::default()).unwrap();
/// let resolution = session.resolve(StrikeEvent::strike(Pocketed::black(1))).await?;
/// assert!(resolution.is_applied());
/// assert_eq!(session.standings()[0].points, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Session {
    events: mpsc::Sender<StrikeEvent>,
    progress: watch::Receiver<Snapshot>,
    engine: JoinHandle<GameReport>,
    sent: u64,
}

impl Session {
    /// Seats the players at a fresh board and starts the engine task.
    ///
    /// The engine task is spawned on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two names are given, a name repeats,
    /// or there is no runtime to spawn on. Nothing is started in that case.
    #[instrument(skip(names))]
    pub fn start<I, S>(names: I, options: TableOptions) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table = Table::new(names, options)?;
        let runtime = Handle::try_current().map_err(|err| {
            warn!(%err, "no runtime for strike engine");
            SetupError::NoRuntime
        })?;
        let turns = TurnEngine::new(table);

        let players: Vec<&str> = turns
            .table()
            .roster()
            .players()
            .iter()
            .map(|p| p.name())
            .collect();
        info!(?players, "players on board");

        let (progress_tx, progress) = watch::channel(turns.snapshot(None));
        let (events, events_rx) = mpsc::channel(options.queue_capacity.max(1));
        let engine = runtime.spawn(engine::run(turns, events_rx, progress_tx));

        Ok(Self {
            events,
            progress,
            engine,
            sent: 0,
        })
    }

    /// Enqueues a strike, waiting while the queue is full.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] once the game is over. The session
    /// cannot be reused after that.
    pub async fn send(&mut self, event: StrikeEvent) -> Result<(), SessionError> {
        self.events.send(event).await.map_err(|_| {
            warn!(code = event.code, "strike sent after game over");
            SessionError::Closed
        })?;
        self.sent += 1;

        Ok(())
    }

    /// Enqueues a strike only if the queue has room right now.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Full`] while the engine has not yet taken the
    /// queued events, and [`SessionError::Closed`] once the game is over.
    pub fn try_send(&mut self, event: StrikeEvent) -> Result<(), SessionError> {
        self.events.try_send(event).map_err(|err| match err {
            TrySendError::Full(_) => SessionError::Full,
            TrySendError::Closed(_) => {
                warn!(code = event.code, "strike sent after game over");
                SessionError::Closed
            }
        })?;
        self.sent += 1;

        Ok(())
    }

    /// Enqueues a strike and waits for the engine to resolve it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the game was already over or ended
    /// before this strike was taken off the queue, and
    /// [`SessionError::EngineStopped`] if the engine task is gone.
    pub async fn resolve(&mut self, event: StrikeEvent) -> Result<Resolution, SessionError> {
        self.send(event).await?;
        let sent = self.sent;

        let snapshot = self
            .progress
            .wait_for(|s| s.processed >= sent || s.is_game_over())
            .await
            .map_err(|_| SessionError::EngineStopped)?;

        if snapshot.processed < sent {
            return Err(SessionError::Closed);
        }

        snapshot.last.clone().ok_or(SessionError::EngineStopped)
    }

    /// Resolves events one at a time until the game ends or they run out.
    ///
    /// Any iterator of events works as a producer, so scripted and random
    /// feeds are interchangeable.
    ///
    /// # Errors
    ///
    /// Returns an error if the session was already closed or the engine
    /// task stopped.
    pub async fn play<I>(&mut self, events: I) -> Result<Option<Outcome>, SessionError>
    where
        I: IntoIterator<Item = StrikeEvent>,
    {
        for event in events {
            self.resolve(event).await?;

            if let Some(outcome) = self.outcome() {
                return Ok(Some(outcome));
            }
        }

        Ok(self.outcome())
    }

    /// Returns the latest progress published by the engine.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.progress.borrow().clone()
    }

    /// Returns `true` once a player has won or the board is empty.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.progress.borrow().is_game_over()
    }

    /// Returns `true` once the strike queue stops accepting events.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.events.is_closed()
    }

    /// Returns how the game ended, if it has.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.progress.borrow().outcome.clone()
    }

    /// Returns scores in seat order as of the latest resolved event.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.progress.borrow().standings.clone()
    }

    /// Returns the board as of the latest resolved event.
    #[must_use]
    pub fn board(&self) -> Board {
        self.progress.borrow().board
    }

    /// Releases the queue and waits for the engine's final report.
    ///
    /// Events still queued are resolved first unless the game ends on one
    /// of them.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EngineStopped`] if the engine task panicked
    /// or was cancelled.
    pub async fn finish(self) -> Result<GameReport, SessionError> {
        let Self { events, engine, .. } = self;
        drop(events);

        engine.await.map_err(|err| {
            warn!(%err, "strike engine task failed");
            SessionError::EngineStopped
        })
    }
}
