//! Win detection logic for tic-tac-toe.

use super::super::{Board, Position, Square, WinResult};
use super::draw::is_full;
use tracing::instrument;

/// The eight triples that win the game, in evaluation order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Evaluates the board.
///
/// The first line in [`LINES`] whose three cells hold the same mark wins.
/// A full board with no such line is a draw; anything else is undecided.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> WinResult {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(mark) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return WinResult::Winner { mark, line };
        }
    }

    if is_full(board) {
        WinResult::Draw
    } else {
        WinResult::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Mark;
    use super::*;

    fn board_with(cells: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in cells {
            board.set(*pos, Square::Occupied(*mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), WinResult::Undecided);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(
            evaluate(&board),
            WinResult::Winner {
                mark: Mark::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomLeft, Mark::O),
        ]);
        assert_eq!(evaluate(&board).winner(), Some(Mark::O));
        assert_eq!(
            evaluate(&board).line(),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(evaluate(&board), WinResult::Undecided);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Unreachable in play, but evaluation order must be deterministic.
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::BottomLeft, Mark::X),
        ]);
        assert_eq!(
            evaluate(&board).line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X O X / O X O / O X X: diagonal 0-4-8 on a full board
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::O),
            (Position::Center, Mark::X),
            (Position::MiddleRight, Mark::O),
            (Position::BottomLeft, Mark::O),
            (Position::BottomCenter, Mark::X),
            (Position::BottomRight, Mark::X),
        ]);
        assert_eq!(evaluate(&board).winner(), Some(Mark::X));
    }
}
