mod action;
mod game;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{IgnoreReason, Move, PlaceOutcome};
pub use game::GameState;
pub use outcome::{Outcome, WinResult};
pub use position::Position;
pub use types::{Board, Mark, Square};
