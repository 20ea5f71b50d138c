//! Turn-based terminal Tetris runner (default binary).
//!
//! Each turn draws the board, waits for one line on stdin and applies it.
//! Logs go to stderr and are off unless `RUST_LOG` asks for them.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use turn_tetris::config::GameConfig;
use turn_tetris::core::{GameState, OsRandom, RandomSource, SimpleRng};
use turn_tetris::input::LineInput;
use turn_tetris::term::{GameView, TerminalRenderer};
use turn_tetris::types::TurnOutcome;

const FAREWELL: &str = "Bye. Thank you for playing!";

fn main() -> Result<()> {
    init_tracing();

    let config = GameConfig::from_env().context("invalid configuration")?;
    info!(?config, "starting");

    let stdin = io::stdin();
    let input = LineInput::new(stdin.lock());
    let clear = config.clear_screen && io::stdout().is_tty();
    let mut term = TerminalRenderer::with_writer(io::stdout(), clear);

    match config.seed {
        Some(seed) => run(&config, SimpleRng::new(seed), input, &mut term),
        None => run(&config, OsRandom::new(), input, &mut term),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}

fn run<R, I, W>(
    config: &GameConfig,
    rng: R,
    mut input: LineInput<I>,
    term: &mut TerminalRenderer<W>,
) -> Result<()>
where
    R: RandomSource,
    I: BufRead,
    W: Write,
{
    let mut game = GameState::new(config.board_size, rng).context("failed to start a game")?;
    let view = GameView::default();

    loop {
        let snap = game.snapshot();
        term.draw(&view.render(&snap))?;
        if snap.game_over {
            info!(
                pieces = snap.pieces_spawned,
                lines = snap.lines_cleared,
                "game over"
            );
            return Ok(());
        }

        let command = input.next_command()?;
        match game.apply_command(command) {
            TurnOutcome::Quit => {
                term.print_line(FAREWELL)?;
                return Ok(());
            }
            TurnOutcome::Continue | TurnOutcome::GameOver => {}
        }
    }
}
