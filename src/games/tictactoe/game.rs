//! Game state for a single tic-tac-toe round.

use super::action::{IgnoreReason, Move, PlaceOutcome};
use super::rules;
use super::types::{Board, Mark, Square};
use super::{Position, WinResult};
use tracing::{debug, info, instrument};

/// Board, turn and result of the current round.
///
/// Only [`GameState::place`] and [`GameState::reset`] mutate it. Once the
/// result is concluded every placement is ignored until the next reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Mark,
    result: WinResult,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            result: WinResult::Undecided,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that would be placed next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the current result.
    pub fn result(&self) -> WinResult {
        self.result
    }

    /// Returns the moves played this round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the round is won or drawn.
    pub fn is_concluded(&self) -> bool {
        self.result.is_concluded()
    }

    /// Returns the completed line if the round was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.result.line()
    }

    /// Places the current mark at `pos`.
    ///
    /// Ignored (no state change) when the square is occupied or the round is
    /// already concluded. Otherwise the mark is placed, the turn flips and the
    /// board is re-evaluated.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place(&mut self, pos: Position) -> PlaceOutcome {
        if self.result.is_concluded() {
            debug!("Ignoring placement after conclusion");
            return PlaceOutcome::Ignored(IgnoreReason::GameOver);
        }

        if !self.board.is_empty(pos) {
            debug!("Ignoring placement on occupied square");
            return PlaceOutcome::Ignored(IgnoreReason::Occupied(pos));
        }

        let mv = Move::new(self.turn, pos);
        self.board.set(pos, Square::Occupied(mv.mark));
        self.history.push(mv);
        self.turn = self.turn.opponent();
        self.result = rules::evaluate(&self.board);

        if self.result.is_concluded() {
            info!(result = ?self.result, moves = self.history.len(), "Round concluded");
            PlaceOutcome::Concluded(mv, self.result)
        } else {
            debug!(%mv, "Mark placed");
            PlaceOutcome::Placed(mv)
        }
    }

    /// Clears the board, gives X the first move and forgets the result.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game state");
        self.board.clear();
        self.turn = Mark::X;
        self.result = WinResult::Undecided;
        self.history.clear();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(indices: &[usize]) -> (GameState, Vec<PlaceOutcome>) {
        let mut game = GameState::new();
        let outcomes = indices
            .iter()
            .map(|i| game.place(Position::from_index(*i).unwrap()))
            .collect();
        (game, outcomes)
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let game = GameState::new();
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.result(), WinResult::Undecided);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = GameState::new();
        let expected = [Mark::X, Mark::O, Mark::X, Mark::O];
        let positions = [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ];
        for (pos, mark) in positions.into_iter().zip(expected) {
            assert_eq!(game.turn(), mark);
            assert_eq!(game.place(pos), PlaceOutcome::Placed(Move::new(mark, pos)));
        }
        assert_eq!(game.turn(), Mark::X);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut game = GameState::new();
        game.place(Position::TopLeft);
        let before = game.clone();

        let outcome = game.place(Position::TopLeft);

        assert_eq!(
            outcome,
            PlaceOutcome::Ignored(IgnoreReason::Occupied(Position::TopLeft))
        );
        assert_eq!(game, before);
        assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_top_row_win() {
        let (game, outcomes) = play(&[0, 4, 1, 5, 2]);
        let expected = WinResult::Winner {
            mark: Mark::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        };
        assert_eq!(game.result(), expected);
        assert_eq!(outcomes.last().and_then(|o| o.conclusion()), Some(expected));
        assert!(outcomes[..4].iter().all(|o| o.conclusion().is_none()));
    }

    #[test]
    fn test_placement_after_conclusion_is_ignored() {
        let (mut game, _) = play(&[0, 4, 1, 5, 2]);
        let before = game.clone();

        assert_eq!(
            game.place(Position::BottomRight),
            PlaceOutcome::Ignored(IgnoreReason::GameOver)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_draw() {
        // X O X / X O O / O X X
        let (game, outcomes) = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.result(), WinResult::Draw);
        assert_eq!(outcomes.last().and_then(|o| o.conclusion()), Some(WinResult::Draw));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let (mut game, _) = play(&[0, 4, 1, 5, 2]);
        game.reset();
        assert_eq!(game, GameState::new());
    }
}
