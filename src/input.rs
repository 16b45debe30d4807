//! Maps cell activations onto the game and tracks the hovered cell.

use crate::games::tictactoe::{GameState, Mark, PlaceOutcome, Position};
use tracing::{debug, instrument};

/// Routes board clicks to [`GameState::place`].
///
/// The hovered cell is presentational only: it previews the next mark and
/// never changes the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputController {
    hovered: Option<Position>,
}

impl InputController {
    /// Creates a controller with nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a click (or key press) on a board cell.
    ///
    /// Occupied cells and concluded games are ignored by the game itself.
    #[instrument(skip(self, game))]
    pub fn on_cell_activated(&mut self, game: &mut GameState, pos: Position) -> PlaceOutcome {
        let outcome = game.place(pos);
        if let PlaceOutcome::Ignored(reason) = outcome {
            debug!(%reason, "Cell activation ignored");
        }
        outcome
    }

    /// Updates the hovered cell.
    pub fn hover(&mut self, pos: Option<Position>) {
        self.hovered = pos;
    }

    /// Cell currently under the pointer or keyboard cursor.
    pub fn hovered(&self) -> Option<Position> {
        self.hovered
    }

    /// The mark that would land on the hovered cell, if a click there would place one.
    pub fn preview(&self, game: &GameState) -> Option<(Position, Mark)> {
        let pos = self.hovered?;
        (!game.is_concluded() && game.board().is_empty(pos)).then(|| (pos, game.turn()))
    }
}
