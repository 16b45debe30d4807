//! Results of evaluating a board.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// What a board says about the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WinResult {
    /// No line is complete and empty cells remain.
    #[default]
    Undecided,
    /// `mark` owns all three cells of `line`.
    Winner {
        /// The winning mark.
        mark: Mark,
        /// The completed triple, in evaluation order.
        line: [Position; 3],
    },
    /// All nine cells are filled and no line is complete.
    Draw,
}

impl WinResult {
    /// Returns true once a winner or a draw has been reached.
    pub fn is_concluded(&self) -> bool {
        !matches!(self, WinResult::Undecided)
    }

    /// Returns the winning mark, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            WinResult::Winner { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line, if there is one.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            WinResult::Winner { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Converts a concluded result into the outcome scored for it.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            WinResult::Undecided => None,
            WinResult::Winner { mark, .. } => Some(Outcome::Winner(*mark)),
            WinResult::Draw => Some(Outcome::Draw),
        }
    }
}

/// Outcome of a finished game, as recorded by the score tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Mark),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
