//! Neon Tic-Tac-Toe - a themed tic-tac-toe game with score tracking and
//! decorative win effects.
//!
//! # Architecture
//!
//! - **Games**: board, rules and the single-round [`GameState`]
//! - **Scores**: [`ScoreTracker`] across rounds
//! - **Effects**: the timed particle burst ([`EffectsController`])
//! - **Input**: [`InputController`] routing cell activations and hover
//! - **App**: [`App`], the root that owns all of the above
//! - **TUI**: a crossterm/ratatui front end
//!
//! # Example
//!
//! ```
//! use neon_tictactoe::{App, EffectSettings, Position, SeededRandom, UserAction};
//!
//! let mut app = App::new(EffectSettings::default(), SeededRandom::new(7));
//! for i in [0, 4, 1, 5, 2] {
//!     app.handle(UserAction::Activate(Position::from_index(i).unwrap()));
//! }
//! assert_eq!(app.status().to_string(), "Player X wins!");
//! assert_eq!(app.scores().x_wins(), 1);
//! assert_eq!(app.effects().particles().len(), 30);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app;
mod config;
mod effects;
mod games;
mod input;
mod replay;
mod scores;
mod tui;

// Crate-level exports - Application root
pub use app::{App, Flow, GameSnapshot, Status, UserAction};

// Crate-level exports - Configuration
pub use config::{ConfigError, NeonConfig};

// Crate-level exports - Effects
pub use effects::{
    DEFAULT_CLEAR_AFTER, DEFAULT_PARTICLE_COUNT, EffectSettings, EffectsController,
    MAX_PARTICLE_COUNT, Particle, ParticleBounds, RandomSource, SeededRandom,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameState, IgnoreReason, Mark, Move, Outcome, PlaceOutcome, Position, Square, WinResult,
    rules,
};

// Crate-level exports - Input and scores
pub use input::InputController;
pub use scores::ScoreTracker;

// Crate-level exports - Replay
pub use replay::{ReplayError, parse_moves, render_text, replay};

// Crate-level exports - Terminal UI
pub use tui::{BoardCells, LOG_FILE, draw, map_event, move_cursor, run_tui};
