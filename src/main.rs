use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

use serpent::config::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, THEME, TICK_INTERVAL_MS};
use serpent::game::{GameSession, SessionStatus};
use serpent::grid::Grid;
use serpent::input::{poll_input, GameInput};
use serpent::renderer;
use serpent::score::{load_high_score, save_high_score};
use serpent::terminal_runtime::TerminalSession;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Classic grid Snake for the terminal")]
struct Cli {
    /// Playfield width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Playfield height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Simulation period in milliseconds.
    #[arg(long = "tick-ms", default_value_t = TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for a reproducible food sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a log to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        WriteLogger::init(LevelFilter::Info, Config::default(), file)
            .expect("no other logger is installed before this one");
    }

    let high_score = match load_high_score() {
        Ok(score) => score,
        Err(error) => {
            warn!("could not load high score, starting from zero: {error}");
            0
        }
    };

    let grid = Grid {
        width: cli.width.max(4),
        height: cli.height.max(4),
    };
    let mut session = match cli.seed {
        Some(seed) => GameSession::with_seed(grid, high_score, seed),
        None => GameSession::new(grid, high_score),
    };

    let mut terminal = TerminalSession::enter()?;
    run(&mut terminal, &mut session, Duration::from_millis(cli.tick_ms.max(1)))?;

    Ok(())
}

fn run(
    terminal: &mut TerminalSession,
    session: &mut GameSession,
    tick_interval: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    let mut persisted_high_score = session.high_score();

    loop {
        terminal
            .terminal_mut()
            .draw(|frame| renderer::render(frame, session, &THEME))?;

        if let Some(input) = poll_input(INPUT_POLL_INTERVAL)? {
            match input {
                GameInput::Quit => break,
                GameInput::Direction(direction) => session.steer(direction),
                GameInput::StartPause => {
                    if session.status().is_startable() {
                        session.start();
                        last_tick = Instant::now();
                    } else {
                        session.toggle_pause();
                    }
                }
                GameInput::Reset => session.reset(),
            }
        }

        if session.status() == SessionStatus::Running && last_tick.elapsed() >= tick_interval {
            session.tick();
            last_tick = Instant::now();
        }

        // Persist every time the best score rises, not just at game over.
        if session.high_score() > persisted_high_score {
            persisted_high_score = session.high_score();
            match save_high_score(persisted_high_score) {
                Ok(()) => info!("high score {persisted_high_score} saved"),
                Err(error) => warn!("failed to save high score: {error}"),
            }
        }
    }

    Ok(())
}
