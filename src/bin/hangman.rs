use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use portfolio_tracker::console::Console;
use portfolio_tracker::hangman::{self, Game};

/// Word guessing game on the console.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_tracker=warn")),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut console = Console::stdio();
    console.println("Welcome to Hangman!")?;

    let mut game = Game::random();
    console.println(format!(
        "I picked a word. You get {} wrong guesses.",
        game.attempts_left()
    ))?;

    let outcome = hangman::play(&mut game, &mut console)?;
    info!("game finished : {:?}", outcome);

    Ok(())
}
