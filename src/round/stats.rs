//! In-memory session statistics

use super::Outcome;

/// Tally of finished rounds for the current process
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// `guess_distribution[n]` counts wins on attempt `n`; index 0 is unused.
    /// Grows to the highest winning attempt seen.
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &Outcome) {
        self.rounds_played += 1;

        match outcome {
            Outcome::Won { attempts } => {
                self.rounds_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);

                if *attempts >= self.guess_distribution.len() {
                    self.guess_distribution.resize(attempts + 1, 0);
                }
                self.guess_distribution[*attempts] += 1;
            }
            Outcome::Lost { .. } => self.current_streak = 0,
        }
    }

    /// Percentage of rounds won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn lost() -> Outcome {
        Outcome::Lost {
            secret: Word::new("light").unwrap(),
        }
    }

    #[test]
    fn empty_statistics() {
        let stats = Statistics::new();
        assert_eq!(stats.rounds_played, 0);
        assert!(stats.guess_distribution.is_empty());
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn record_tracks_streaks_and_distribution() {
        let mut stats = Statistics::new();
        stats.record(&Outcome::Won { attempts: 3 });
        stats.record(&Outcome::Won { attempts: 4 });
        stats.record(&lost());
        stats.record(&Outcome::Won { attempts: 3 });

        assert_eq!(stats.rounds_played, 4);
        assert_eq!(stats.rounds_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[4], 1);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn distribution_grows_to_highest_win() {
        let mut stats = Statistics::new();
        stats.record(&Outcome::Won { attempts: 2 });
        assert_eq!(stats.guess_distribution, vec![0, 0, 1]);
    }
}
