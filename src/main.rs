mod config;
mod console;
mod error;
mod game;
mod models;
mod utils;

use std::io;

use anyhow::Result;
use config::Config;
use console::LineConsole;
use game::GameSession;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the game on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrabble_solo=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        hand_size = config.game.hand_size,
        seeded = config.game.seed.is_some(),
        "Configuration loaded"
    );

    let mut session = GameSession::new(&config.game);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = LineConsole::new(stdin.lock(), stdout.lock());

    let summary = console::run_game(&mut session, &mut console)?;
    tracing::info!(
        state = ?session.state(),
        total_score = summary.total_score,
        words_played = summary.words_played,
        "Session finished"
    );

    Ok(())
}
