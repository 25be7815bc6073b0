//! tictactoe_timeline - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_timeline::{GameConfig, GameSession, Position};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Tui => tictactoe_timeline::run_tui(&config),
        Command::Replay { moves, jump, json } => run_replay(&config, &moves, jump, json),
    }
}

/// Applies `moves` to a fresh game and prints the result.
#[instrument(skip(config))]
fn run_replay(config: &GameConfig, moves: &[String], jump: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(count = moves.len(), "Replaying moves");
    let mut session = GameSession::new(config.game_options());

    for raw in moves {
        let Some(pos) = Position::from_label_or_number(raw) else {
            bail!("Not a board position: {:?} (use 0-8 or a label like \"center\")", raw);
        };
        // Refused moves are skipped, the same as clicking an occupied square.
        if let Err(e) = session.play(pos) {
            debug!(error = %e, position = %pos, "Move ignored");
        }
    }

    if let Some(move_number) = jump {
        session
            .jump_to(move_number)
            .with_context(|| format!("Cannot jump to move #{}", move_number))?;
    }

    let view = session.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", session.game().current_board().display());
        println!();
        println!("{}", view.status_text());
        for (n, label) in view.history_labels().iter().enumerate() {
            let marker = if n == *view.current_move() { ">" } else { " " };
            println!("{} {}", marker, label);
        }
    }

    Ok(())
}
