//! Walltris terminal runner.
//!
//! Reads key presses with crossterm, feeds them to the engine as commands and
//! redraws the framebuffer after every event. There is no gravity: a piece
//! only moves when a key is pressed.

use std::fs::File;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use walltris::core::{ApplyOutcome, GameConfig, GameState};
use walltris::input::{handle_key_event, is_confirm, should_quit};
use walltris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use walltris::types::DEFAULT_BOARD_SIZE;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "WALLTRIS_LOG";

const QUIT_PROMPT: &str = "Quit? y to confirm, any other key draws a new piece";
const GAME_OVER_PROMPT: &str = "GAME OVER  press any key";

#[derive(Debug, Parser)]
#[command(name = "walltris", version, about = "Drop pieces into a walled square board")]
struct Args {
    /// Side length of the board, walls included.
    #[arg(long, value_name = "CELLS", default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    /// Seed for the piece sequence. A random seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Write logs to this file. Filter with WALLTRIS_LOG (default "info").
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionEnd {
    Quit,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Playing,
    ConfirmQuit,
    GameOver,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = GameConfig {
        board_size: args.size,
        seed: args.seed,
    };
    // Validate before touching the terminal so errors print normally.
    let mut game = GameState::new(config).context("invalid game configuration")?;
    info!(board_size = config.board_size, seed = game.seed(), "session started");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        SessionEnd::Quit => println!(
            "Bye. {} pieces placed (seed {}).",
            game.pieces_committed(),
            game.seed()
        ),
        SessionEnd::GameOver => println!(
            "Game over: no room for the next piece after {} pieces (seed {}).",
            game.pieces_committed(),
            game.seed()
        ),
    }
    Ok(())
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    // The terminal is in raw mode on the alternate screen, so logs only go
    // to a file.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<SessionEnd> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut mode = Mode::Playing;

    game.next_piece();

    loop {
        let prompt = match mode {
            Mode::Playing => None,
            Mode::ConfirmQuit => Some(QUIT_PROMPT),
            Mode::GameOver => Some(GAME_OVER_PROMPT),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), prompt, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Any other event (resize, focus) just triggers a redraw.
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match step(game, mode, key) {
            ControlFlow::Continue(next) => mode = next,
            ControlFlow::Break(end) => return Ok(end),
        }
    }
}

/// Advance the session by one key press: the next mode, or how it ended.
fn step(game: &mut GameState, mode: Mode, key: KeyEvent) -> ControlFlow<SessionEnd, Mode> {
    match mode {
        Mode::GameOver => ControlFlow::Break(SessionEnd::GameOver),
        Mode::ConfirmQuit => {
            if is_confirm(key) {
                info!(pieces = game.pieces_committed(), "quit");
                return ControlFlow::Break(SessionEnd::Quit);
            }
            // Declining abandons the current piece for a fresh draw.
            debug!("quit declined, drawing a new piece");
            game.next_piece();
            ControlFlow::Continue(Mode::Playing)
        }
        Mode::Playing => {
            if should_quit(key) {
                return ControlFlow::Continue(Mode::ConfirmQuit);
            }
            let Some(command) = handle_key_event(key) else {
                return ControlFlow::Continue(Mode::Playing);
            };
            match game.apply(command) {
                ApplyOutcome::Committed { row } => {
                    debug!(row, "piece committed");
                    if game.next_piece().is_none() {
                        return ControlFlow::Continue(Mode::GameOver);
                    }
                }
                ApplyOutcome::GameOver => {
                    info!(pieces = game.pieces_committed(), "game over");
                    return ControlFlow::Continue(Mode::GameOver);
                }
                ApplyOutcome::NoActivePiece => {
                    game.next_piece();
                }
                ApplyOutcome::Moved(_) | ApplyOutcome::Unchanged(_) => {}
            }
            ControlFlow::Continue(Mode::Playing)
        }
    }
}
