//! Terminal front end for the neon board.

mod input;
mod ui;

pub use input::{map_event, move_cursor};
pub use ui::{BoardCells, draw};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Instant;
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument};

use crate::app::{App, Flow};
use crate::config::NeonConfig;
use crate::effects::SeededRandom;

/// Log file used while the terminal is in raw mode.
pub const LOG_FILE: &str = "neon_tictactoe.log";

/// Runs the interactive game until the user quits.
pub async fn run_tui(config: NeonConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(LOG_FILE)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    let rng = match config.seed() {
        Some(seed) => SeededRandom::new(*seed),
        None => SeededRandom::from_entropy(),
    };
    info!(seed = rng.seed(), "Starting Neon Tic-Tac-Toe");
    let mut app = App::new(config.effect_settings(), rng);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app, config.tick()).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    info!(
        x = app.scores().x_wins(),
        o = app.scores().o_wins(),
        draws = app.scores().draws(),
        "Session finished"
    );
    res
}

/// Draw, poll, dispatch, tick.
#[instrument(skip_all)]
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    let mut cells = BoardCells::default();
    let mut last = Instant::now();

    loop {
        terminal.draw(|f| cells = draw(f, app))?;

        // Poll for input with short timeout to keep the particles moving.
        if event::poll(tick)? {
            let ev = event::read()?;
            if let Some(action) = map_event(&ev, app.input().hovered(), &cells) {
                debug!(?action, "User action");
                if app.handle(action) == Flow::Quit {
                    return Ok(());
                }
            }
        }

        let now = Instant::now();
        app.tick(now - last);
        last = now;

        sleep(Duration::from_millis(10)).await;
    }
}
