//! Headless replay of a move list through the full application.

use crate::app::{App, GameSnapshot, UserAction};
use crate::effects::RandomSource;
use crate::games::tictactoe::{Board, Mark, Position, Square};
use derive_more::{Display, Error};
use tracing::{info, instrument};

/// A move argument that does not name a cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move {:?} at argument {}: expected 0-8 or a cell label", token, index)]
pub struct ReplayError {
    /// The offending argument.
    pub token: String,
    /// Its position in the argument list.
    pub index: usize,
}

/// Parses move arguments (`0`-`8` or labels such as `center`).
#[instrument]
pub fn parse_moves(tokens: &[String]) -> Result<Vec<Position>, ReplayError> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            Position::parse(token).ok_or_else(|| ReplayError {
                token: token.clone(),
                index,
            })
        })
        .collect()
}

/// Feeds every move to `app` as a cell activation and returns the final state.
///
/// Moves on occupied cells or after the round concludes are ignored, exactly
/// as clicks would be.
#[instrument(skip(app))]
pub fn replay<R: RandomSource>(app: &mut App<R>, moves: &[Position]) -> GameSnapshot {
    for pos in moves {
        app.handle(UserAction::Activate(*pos));
    }
    let snapshot = app.snapshot();
    info!(status = %snapshot.status, applied = snapshot.history.len(), "Replay finished");
    snapshot
}

/// Renders a snapshot as plain text.
pub fn render_text(snapshot: &GameSnapshot) -> String {
    let mut board = Board::new();
    for (pos, cell) in Position::ALL.iter().zip(&snapshot.board) {
        if let Some(mark) = cell {
            board.set(*pos, Square::Occupied(*mark));
        }
    }

    let mut out = board.display();
    out.push_str("\n\n");
    out.push_str(&snapshot.status.to_string());
    if let Some(line) = snapshot.result.line() {
        let cells: Vec<String> = line.iter().map(|p| p.to_index().to_string()).collect();
        out.push_str(&format!(" (line {})", cells.join("-")));
    }
    out.push_str(&format!(
        "\nScores: {} {}  Draws {}  {} {}",
        Mark::X,
        snapshot.scores.x_wins(),
        snapshot.scores.draws(),
        Mark::O,
        snapshot.scores.o_wins(),
    ));
    out
}
