//! Simulated carrom game fed with random strikes.

use std::time::{SystemTime, UNIX_EPOCH};

use carrom::{RandomStrikes, Session, Standing, TableOptions};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const NAMES: [&str; 4] = ["p1", "p2", "p3", "p4"];

/// Strikes fed before the simulation gives up on a game.
const MAX_STRIKES: usize = 10_000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    // Re-roll a random slice of the name pool until it seats a valid table.
    let mut session = loop {
        let start = rng.random_range(0..NAMES.len());
        let end = rng.random_range(0..=NAMES.len());
        if end < start {
            continue;
        }

        match Session::start(NAMES[start..end].iter().copied(), TableOptions::default()) {
            Ok(session) => break session,
            Err(err) => error!(%err, players = ?&NAMES[start..end], "invalid request"),
        }
    };

    let strikes = RandomStrikes::new(rng.random()).take(MAX_STRIKES);
    match session.play(strikes).await {
        Ok(Some(outcome)) => info!("{outcome}"),
        Ok(None) => info!("no result after {MAX_STRIKES} strikes"),
        Err(err) => error!(%err, "game aborted"),
    }

    match session.finish().await {
        Ok(report) => print_score(&report.standings),
        Err(err) => error!(%err, "no final report"),
    }
}

fn print_score(standings: &[Standing]) {
    println!();
    println!(" Score board");
    println!(" -----------------------");
    println!(" | Player Name | Score |");
    println!(" -----------------------");
    for standing in standings {
        println!(" | {:<11} | {:<5} |", standing.name, standing.points);
    }
}
