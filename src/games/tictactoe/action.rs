//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They are recorded in the
//! game history and reported back to callers of [`GameState::place`](super::GameState::place).

use super::{Mark, Position, WinResult};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a placement was ignored.
///
/// Ignored placements are not errors: the board is left untouched and the
/// caller simply carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Result of asking the game to place a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The mark was placed and the game continues.
    Placed(Move),
    /// The mark was placed and ended the game.
    Concluded(Move, WinResult),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl PlaceOutcome {
    /// Returns the result if this placement concluded the game.
    pub fn conclusion(&self) -> Option<WinResult> {
        match self {
            PlaceOutcome::Concluded(_, result) => Some(*result),
            _ => None,
        }
    }
}
