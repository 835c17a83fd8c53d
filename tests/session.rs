//! Session and strike queue integration tests.

use carrom::{
    Board, Outcome, Pocketed, RandomStrikes, Resolution, Session, SessionError, SetupError,
    StrikeEvent, StrikeKind, TableOptions, Violation,
};

fn start(names: &[&str]) -> Session {
    Session::start(names.iter().copied(), TableOptions::default()).unwrap()
}

fn seat(resolution: &Resolution) -> usize {
    match resolution {
        Resolution::Applied { seat, .. } | Resolution::Rejected { seat, .. } => *seat,
        Resolution::Ignored { code } => panic!("ignored {code}"),
    }
}

#[tokio::test]
async fn start_rejects_invalid_rosters() {
    assert_eq!(
        Session::start(["p1"], TableOptions::default()).unwrap_err(),
        SetupError::TooFewPlayers { count: 1 }
    );
    assert_eq!(
        Session::start(["p1", "p2", "p1"], TableOptions::default()).unwrap_err(),
        SetupError::DuplicateName("p1".into())
    );

    let session = start(&["p1", "p2"]);
    assert_eq!(session.board(), Board::default());
    assert!(session.standings().iter().all(|s| s.points == 0));
    assert!(!session.is_game_over());
    assert!(!session.is_closed());
}

#[tokio::test]
async fn win_closes_the_queue() {
    let mut session = start(&["p3", "p4"]);

    let first = session
        .resolve(StrikeEvent::multi_strike(Pocketed::black(5)))
        .await
        .unwrap();
    assert_eq!(
        first,
        Resolution::Applied {
            seat: 0,
            kind: StrikeKind::MultiStrike,
        }
    );
    session
        .resolve(StrikeEvent::strike(Pocketed::new(2, 4)))
        .await
        .unwrap();
    assert!(!session.is_game_over());
    session.resolve(StrikeEvent::red_strike()).await.unwrap();

    assert!(session.is_game_over());
    assert!(session.is_closed());
    assert_eq!(session.outcome().unwrap().winner(), Some("p3"));

    assert_eq!(
        session.send(StrikeEvent::no_pocket()).await,
        Err(SessionError::Closed)
    );
    assert_eq!(
        session.resolve(StrikeEvent::striker_strike()).await,
        Err(SessionError::Closed)
    );
    assert_eq!(
        session.try_send(StrikeEvent::no_pocket()),
        Err(SessionError::Closed)
    );

    let report = session.finish().await.unwrap();
    assert_eq!(report.events, 3);
    let scores: Vec<_> = report
        .standings
        .iter()
        .map(|s| (s.name.as_str(), s.points))
        .collect();
    assert_eq!(scores, [("p3", 5), ("p4", 1)]);
}

#[tokio::test]
async fn draw_scenario() {
    let mut session = start(&["p1", "p2"]);

    let outcome = session
        .play([
            StrikeEvent::multi_strike(Pocketed::black(5)),
            StrikeEvent::strike(Pocketed::NONE),
            StrikeEvent::red_strike(),
            StrikeEvent::striker_strike(),
            StrikeEvent::defunct(Pocketed::new(4, 9)),
            StrikeEvent::no_pocket(),
        ])
        .await
        .unwrap();

    assert_eq!(outcome, Some(Outcome::Draw));
    assert!(session.board().is_empty());

    let snapshot = session.snapshot();
    assert_eq!(snapshot.processed, 5);
    assert!(snapshot.last.as_ref().is_some_and(Resolution::is_applied));
}

#[tokio::test]
async fn unfinished_game_keeps_accepting() {
    let mut session = start(&["p3", "p4"]);

    let outcome = session
        .play([
            StrikeEvent::multi_strike(Pocketed::black(5)),
            StrikeEvent::strike(Pocketed::NONE),
            StrikeEvent::red_strike(),
        ])
        .await
        .unwrap();

    assert_eq!(outcome, None);
    assert!(!session.is_game_over());
    assert!(!session.is_closed());

    let report = session.finish().await.unwrap();
    assert_eq!(report.outcome, None);
    assert_eq!(report.events, 3);
}

#[tokio::test]
async fn rejection_keeps_the_same_player() {
    let mut session = start(&["a", "b", "c"]);

    let mut seats = Vec::new();
    for event in [
        StrikeEvent::strike(Pocketed::black(1)),
        StrikeEvent::multi_strike(Pocketed::NONE),
        StrikeEvent::multi_strike(Pocketed::NONE),
        StrikeEvent::no_pocket(),
        StrikeEvent::striker_strike(),
        StrikeEvent::strike(Pocketed::white(2)),
    ] {
        seats.push(seat(&session.resolve(event).await.unwrap()));
    }

    assert_eq!(seats, [0, 1, 1, 1, 2, 0]);
}

#[tokio::test]
async fn rejection_carries_context() {
    let mut session = start(&["a", "b"]);

    let resolution = session
        .resolve(StrikeEvent::defunct(Pocketed::NONE))
        .await
        .unwrap();
    let Resolution::Rejected { seat, error } = resolution else {
        panic!("expected a rejection, got {resolution:?}");
    };
    assert_eq!(seat, 0);
    assert_eq!(error.kind, StrikeKind::Defunct);
    assert_eq!(error.violation, Violation::NothingPocketed);
    assert_eq!(error.board, Board::default());
    assert_eq!(session.board(), Board::default());
}

#[tokio::test]
async fn unknown_codes_are_ignored() {
    let mut session = start(&["a", "b"]);

    assert_eq!(
        session
            .resolve(StrikeEvent::from_code(6, Pocketed::black(3)))
            .await
            .unwrap(),
        Resolution::Ignored { code: 6 }
    );
    let next = session
        .resolve(StrikeEvent::strike(Pocketed::black(1)))
        .await
        .unwrap();
    assert_eq!(seat(&next), 0);
    assert_eq!(session.board().black(), 8);
}

#[tokio::test]
async fn queued_events_resolve_in_order() {
    let mut session = start(&["a", "b"]);

    for _ in 0..4 {
        session
            .send(StrikeEvent::strike(Pocketed::black(1)))
            .await
            .unwrap();
    }
    session.send(StrikeEvent::striker_strike()).await.unwrap();

    let report = session.finish().await.unwrap();
    assert_eq!(report.events, 5);
    assert_eq!(report.board.black(), 5);
    let points: Vec<_> = report.standings.iter().map(|s| s.points).collect();
    assert_eq!(points, [1, 2]);
}

#[test]
fn start_outside_runtime_is_an_error() {
    assert_eq!(
        Session::start(["p1", "p2"], TableOptions::default()).unwrap_err(),
        SetupError::NoRuntime
    );
}

#[tokio::test]
async fn full_queue_holds_back_the_producer() {
    let mut session = start(&["a", "b"]);

    // The engine task cannot run until this task yields.
    session
        .try_send(StrikeEvent::strike(Pocketed::black(1)))
        .unwrap();
    assert_eq!(
        session.try_send(StrikeEvent::strike(Pocketed::black(1))),
        Err(SessionError::Full)
    );
    assert_eq!(session.snapshot().processed, 0);

    session
        .send(StrikeEvent::strike(Pocketed::black(1)))
        .await
        .unwrap();

    let report = session.finish().await.unwrap();
    assert_eq!(report.events, 2);
    assert_eq!(report.board.black(), 7);
    let points: Vec<_> = report.standings.iter().map(|s| s.points).collect();
    assert_eq!(points, [1, 1]);
}

#[tokio::test]
async fn queue_capacity_bounds_waiting_events() {
    let options = TableOptions::default().with_queue_capacity(2);
    let mut session = Session::start(["a", "b"], options).unwrap();

    session.try_send(StrikeEvent::no_pocket()).unwrap();
    session.try_send(StrikeEvent::no_pocket()).unwrap();
    assert_eq!(
        session.try_send(StrikeEvent::no_pocket()),
        Err(SessionError::Full)
    );

    let report = session.finish().await.unwrap();
    assert_eq!(report.events, 2);
}

#[tokio::test]
async fn larger_queue_still_preserves_order() {
    let options = TableOptions::default().with_queue_capacity(8);
    let mut session = Session::start(["a", "b"], options).unwrap();

    for event in [
        StrikeEvent::red_strike(),
        StrikeEvent::red_strike(),
        StrikeEvent::multi_strike(Pocketed::black(2)),
    ] {
        session.send(event).await.unwrap();
    }

    let report = session.finish().await.unwrap();
    let points: Vec<_> = report.standings.iter().map(|s| s.points).collect();
    assert_eq!(points, [3, 2]);
}

#[tokio::test]
async fn sessions_are_independent() {
    let mut first = start(&["a", "b"]);
    let mut second = start(&["a", "b"]);

    first.resolve(StrikeEvent::red_strike()).await.unwrap();
    assert_eq!(first.board().red(), 0);
    assert_eq!(second.board().red(), 1);

    second
        .resolve(StrikeEvent::strike(Pocketed::black(9)))
        .await
        .unwrap();
    assert_eq!(first.board().black(), 9);
    assert_eq!(second.board().black(), 0);
}

#[tokio::test]
async fn random_game_runs_to_completion() {
    let mut session = start(&["p1", "p2", "p3", "p4"]);

    let outcome = session
        .play(RandomStrikes::new(11).take(10_000))
        .await
        .unwrap();

    assert!(outcome.is_some());
    assert!(session.is_closed());
    let report = session.finish().await.unwrap();
    assert_eq!(report.outcome, outcome);
}
