//! Application root: owns every piece of state and wires the control flow.

use crate::effects::{EffectSettings, EffectsController, Particle, RandomSource, SeededRandom};
use crate::games::tictactoe::{GameState, Mark, Move, PlaceOutcome, Position, WinResult};
use crate::input::InputController;
use crate::scores::ScoreTracker;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Place the current mark on a cell.
    Activate(Position),
    /// Move the pointer or cursor onto a cell, or off the board.
    Hover(Option<Position>),
    /// Start a new round, keeping scores.
    NewGame,
    /// Zero the scores and start a new round.
    ResetScores,
    /// Leave the application.
    Quit,
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Stop the loop.
    Quit,
}

/// The status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Round in progress.
    #[display("Player {}'s turn", _0)]
    Turn(Mark),
    /// Round won.
    #[display("Player {} wins!", _0)]
    Won(Mark),
    /// Round drawn.
    #[display("It's a Draw!")]
    Draw,
}

/// Serializable view of the whole application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cells in index order; `None` for empty.
    pub board: Vec<Option<Mark>>,
    /// Mark to move next.
    pub turn: Mark,
    /// Current result.
    pub result: WinResult,
    /// Status line.
    pub status: Status,
    /// Session scores.
    pub scores: ScoreTracker,
    /// Moves played this round.
    pub history: Vec<Move>,
    /// Particles on screen.
    pub particles: Vec<Particle>,
}

/// Root state owner.
///
/// Cell activations flow into [`GameState::place`]; a conclusion is recorded
/// once in the [`ScoreTracker`] and, for a winner, fires the win effect.
#[derive(Debug)]
pub struct App<R = SeededRandom> {
    game: GameState,
    scores: ScoreTracker,
    effects: EffectsController<R>,
    input: InputController,
}

impl<R: RandomSource> App<R> {
    /// Creates an application with a fresh round and zeroed scores.
    #[instrument(skip(rng))]
    pub fn new(settings: EffectSettings, rng: R) -> Self {
        info!("Creating App");
        Self {
            game: GameState::new(),
            scores: ScoreTracker::new(),
            effects: EffectsController::new(settings, rng),
            input: InputController::new(),
        }
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: UserAction) -> Flow {
        match action {
            UserAction::Activate(pos) => {
                self.activate(pos);
            }
            UserAction::Hover(pos) => self.input.hover(pos),
            UserAction::NewGame => self.new_game(),
            UserAction::ResetScores => self.reset_scores(),
            UserAction::Quit => {
                info!("Quit requested");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Activates a cell and reacts to a conclusion.
    pub fn activate(&mut self, pos: Position) -> PlaceOutcome {
        let outcome = self.input.on_cell_activated(&mut self.game, pos);
        if let Some(result) = outcome.conclusion() {
            self.conclude(result);
        }
        outcome
    }

    fn conclude(&mut self, result: WinResult) {
        let Some(outcome) = result.outcome() else {
            return;
        };
        info!(%outcome, "Recording outcome");
        self.scores.record(outcome);
        if result.winner().is_some() {
            self.effects.trigger_win_effect();
        }
    }

    /// Starts a new round. Scores are kept; any burst is cleared.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        debug!("Starting new game");
        self.game.reset();
        self.effects.reset();
    }

    /// Zeroes the scores and starts a new round.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset_scores();
        self.new_game();
    }

    /// Advances effect timers.
    pub fn tick(&mut self, elapsed: Duration) {
        self.effects.tick(elapsed);
    }

    /// Current status line.
    pub fn status(&self) -> Status {
        match self.game.result() {
            WinResult::Undecided => Status::Turn(self.game.turn()),
            WinResult::Winner { mark, .. } => Status::Won(mark),
            WinResult::Draw => Status::Draw,
        }
    }

    /// Captures the current state for display or serialization.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self
                .game
                .board()
                .squares()
                .iter()
                .map(|sq| sq.mark())
                .collect(),
            turn: self.game.turn(),
            result: self.game.result(),
            status: self.status(),
            scores: self.scores,
            history: self.game.history().to_vec(),
            particles: self.effects.particles().to_vec(),
        }
    }

    /// The current round.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Session scores.
    pub fn scores(&self) -> &ScoreTracker {
        &self.scores
    }

    /// Win effect state.
    pub fn effects(&self) -> &EffectsController<R> {
        &self.effects
    }

    /// Hover tracking.
    pub fn input(&self) -> &InputController {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(EffectSettings::default(), SeededRandom::new(11))
    }

    fn play(app: &mut App, indices: &[usize]) {
        for i in indices {
            app.handle(UserAction::Activate(Position::from_index(*i).unwrap()));
        }
    }

    #[test]
    fn test_win_records_score_and_triggers_effect() {
        let mut app = app();
        play(&mut app, &[0, 4, 1, 5, 2]);

        assert_eq!(app.status(), Status::Won(Mark::X));
        assert_eq!(app.scores().x_wins(), 1);
        assert_eq!(app.effects().particles().len(), 30);
    }

    #[test]
    fn test_draw_records_score_without_effect() {
        let mut app = app();
        play(&mut app, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(app.status(), Status::Draw);
        assert_eq!(app.scores().draws(), 1);
        assert!(!app.effects().is_active());
    }

    #[test]
    fn test_clicks_after_conclusion_do_not_score_twice() {
        let mut app = app();
        play(&mut app, &[0, 4, 1, 5, 2, 8, 7]);
        assert_eq!(app.scores().games_played(), 1);
    }

    #[test]
    fn test_new_game_keeps_scores_and_clears_effect() {
        let mut app = app();
        play(&mut app, &[0, 4, 1, 5, 2]);
        app.handle(UserAction::NewGame);

        assert_eq!(app.game(), &GameState::new());
        assert_eq!(app.scores().x_wins(), 1);
        assert!(!app.effects().is_active());
        assert_eq!(app.status(), Status::Turn(Mark::X));
    }

    #[test]
    fn test_reset_scores_also_starts_new_game() {
        let mut app = app();
        play(&mut app, &[0, 4, 1, 5, 2]);
        app.handle(UserAction::NewGame);
        play(&mut app, &[0]);
        app.handle(UserAction::ResetScores);

        assert_eq!(app.scores(), &ScoreTracker::new());
        assert_eq!(app.game(), &GameState::new());
    }

    #[test]
    fn test_effect_expires_on_tick() {
        let mut app = app();
        play(&mut app, &[0, 4, 1, 5, 2]);
        app.tick(Duration::from_secs(3));
        assert!(!app.effects().is_active());
        assert_eq!(app.scores().x_wins(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert_eq!(app.handle(UserAction::Hover(None)), Flow::Continue);
        assert_eq!(app.handle(UserAction::Quit), Flow::Quit);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Turn(Mark::O).to_string(), "Player O's turn");
        assert_eq!(Status::Won(Mark::X).to_string(), "Player X wins!");
        assert_eq!(Status::Draw.to_string(), "It's a Draw!");
    }
}
