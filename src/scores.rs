//! Cumulative score tracking across rounds.

use crate::games::tictactoe::{Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Win and draw counters for the session.
///
/// Counters only grow until [`ScoreTracker::reset_scores`] zeroes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreTracker {
    /// Creates a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one concluded round.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Winner(Mark::X) => &mut self.x_wins,
            Outcome::Winner(Mark::O) => &mut self.o_wins,
            Outcome::Draw => &mut self.draws,
        };
        *counter = counter.saturating_add(1);
        debug!(x = self.x_wins, o = self.o_wins, draws = self.draws, "Score recorded");
    }

    /// Zeroes all three counters.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        info!("Resetting scores");
        *self = Self::default();
    }

    /// Rounds won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Rounds won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Rounds drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Rounds won by `mark`.
    pub fn wins_for(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Total rounds recorded since the last reset.
    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_increments_one_counter() {
        let mut scores = ScoreTracker::new();

        scores.record(Outcome::Winner(Mark::O));
        assert_eq!((scores.x_wins(), scores.o_wins(), scores.draws()), (0, 1, 0));

        scores.record(Outcome::Draw);
        assert_eq!((scores.x_wins(), scores.o_wins(), scores.draws()), (0, 1, 1));

        scores.record(Outcome::Winner(Mark::X));
        assert_eq!((scores.x_wins(), scores.o_wins(), scores.draws()), (1, 1, 1));
        assert_eq!(scores.games_played(), 3);
    }

    #[test]
    fn test_reset_scores_zeroes_everything() {
        let mut scores = ScoreTracker::new();
        scores.record(Outcome::Winner(Mark::X));
        scores.record(Outcome::Draw);
        scores.reset_scores();
        assert_eq!(scores, ScoreTracker::new());
        assert_eq!(scores.wins_for(Mark::X), 0);
    }
}
