//! Per-run win/loss statistics

use super::observer::GameEvent;

/// Counts of finished games in this run; nothing is persisted
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub games_won: usize,
    pub games_lost: usize,
}

impl Statistics {
    /// Count a finished game
    pub fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Won { .. } => self.games_won += 1,
            GameEvent::Lost { .. } => self.games_lost += 1,
            GameEvent::NewGame => {}
        }
    }

    #[must_use]
    pub const fn games_finished(&self) -> usize {
        self.games_won + self.games_lost
    }

    /// Win rate in percent, 0 when no game has finished
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_finished() == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_finished() as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats() {
        let stats = Statistics::default();
        assert_eq!(stats.games_finished(), 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn records_finished_games_only() {
        let mut stats = Statistics::default();
        stats.record(&GameEvent::NewGame);
        stats.record(&GameEvent::Won {
            word: "react".to_string(),
        });
        stats.record(&GameEvent::Lost {
            word: "rust".to_string(),
        });
        stats.record(&GameEvent::Won {
            word: "css".to_string(),
        });

        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.games_lost, 1);
        assert_eq!(stats.games_finished(), 3);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }
}
