//! Score bookkeeping and game events shared by both games

use serde::{Deserialize, Serialize};

/// Why a game wiped itself back to its starting state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetCause {
    /// Snake head ran into its own body
    SelfCollision,
    /// A fresh block piece collided the moment it spawned
    SpawnBlocked,
}

/// Things the host may want to react to (score display, telemetry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Score or best changed; carries both so the display can be redrawn whole
    ScoreChanged { score: u32, best: u32 },
    /// The game reset itself in place
    Reset { cause: ResetCause },
}

/// Current score plus best score for the lifetime of the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u32,
    pub best: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points and lift best if beaten. Returns the event to publish, if any.
    pub fn add(&mut self, points: u32) -> Option<GameEvent> {
        if points == 0 {
            return None;
        }
        self.score = self.score.saturating_add(points);
        self.best = self.best.max(self.score);
        Some(self.changed())
    }

    /// Zero the current score. Best is never lowered.
    pub fn reset(&mut self) -> Option<GameEvent> {
        if self.score == 0 {
            return None;
        }
        self.score = 0;
        Some(self.changed())
    }

    /// Snapshot of the current values as an event
    pub fn changed(&self) -> GameEvent {
        GameEvent::ScoreChanged {
            score: self.score,
            best: self.best,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_lifts_best() {
        let mut board = Scoreboard::new();
        assert_eq!(
            board.add(40),
            Some(GameEvent::ScoreChanged { score: 40, best: 40 })
        );
        assert_eq!(board.add(0), None);
        board.reset();
        board.add(10);
        assert_eq!(board, Scoreboard { score: 10, best: 40 });
    }

    #[test]
    fn test_reset_from_zero_is_silent() {
        let mut board = Scoreboard::new();
        assert_eq!(board.reset(), None);
        board.add(1);
        assert_eq!(
            board.reset(),
            Some(GameEvent::ScoreChanged { score: 0, best: 1 })
        );
    }

    proptest! {
        #[test]
        fn prop_best_never_decreases(ops in prop::collection::vec(prop::option::of(0u32..1500), 0..64)) {
            let mut board = Scoreboard::new();
            let mut last_best = 0;
            for op in ops {
                let before = board.score;
                match op {
                    Some(points) => {
                        board.add(points);
                        prop_assert!(board.score >= before);
                    }
                    None => {
                        board.reset();
                        prop_assert_eq!(board.score, 0);
                    }
                }
                prop_assert!(board.best >= last_best);
                prop_assert!(board.best >= board.score);
                last_best = board.best;
            }
        }
    }
}
