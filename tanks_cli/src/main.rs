use std::{io, process::ExitCode};

use tanks_core::{DomainError, GameConfig, GameResult, GameState};
use tracing::{error, info, Level};

use crate::{plot::TerminalPlot, prompt::Console};

mod plot;
mod prompt;

fn main() -> ExitCode {
    // logs go to stderr so they never land in the middle of the plot
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {}", err);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "could not run the game");
            ExitCode::FAILURE
        }
    }
}

/// Plays one game on the standard board against stdin and stdout
fn run() -> Result<(), DomainError> {
    let mut game = GameState::new(GameConfig::default())?;
    info!(config = ?game.config(), "starting game");

    let mut input = Console::new(io::stdin().lock(), io::stdout());
    let mut pause = input.clone();
    let mut plot = TerminalPlot::new(io::stdout());

    match game.play(&mut input, &mut pause, &mut plot)? {
        GameResult::Winner(winner) => {
            input.say(&format!("Congratulations player {} !", winner));
        }
        GameResult::Abandoned { turns } => {
            input.say(&format!("Game abandoned after {} turns", turns));
        }
    }

    Ok(())
}
