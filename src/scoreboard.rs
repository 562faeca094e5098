//! Session-local best scores
//!
//! Tracks the top rounds of the current process run. Nothing is written
//! to disk; the table dies with the process.

use serde::{Deserialize, Serialize};

/// Maximum number of entries to keep
pub const MAX_ENTRIES: usize = 10;

/// One finished round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundScore {
    /// Rewards collected
    pub score: u32,
    /// Round length in simulation ticks
    pub duration_ticks: u64,
}

/// Best rounds of this session, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionScores {
    pub entries: Vec<RoundScore>,
}

impl SessionScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score would make the table
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Record a finished round. Returns the rank achieved (1-indexed) or
    /// None if it didn't qualify.
    pub fn add_round(&mut self, score: u32, duration_ticks: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = RoundScore {
            score,
            duration_ticks,
        };

        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_ENTRIES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score of the session (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_never_qualifies() {
        let scores = SessionScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(1));
    }

    #[test]
    fn test_ranking() {
        let mut scores = SessionScores::new();
        assert_eq!(scores.add_round(5, 100), Some(1));
        assert_eq!(scores.add_round(10, 200), Some(1));
        assert_eq!(scores.add_round(7, 150), Some(2));
        assert_eq!(scores.top_score(), Some(10));

        let listed: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(listed, vec![10, 7, 5]);
    }

    #[test]
    fn test_table_is_bounded() {
        let mut scores = SessionScores::new();
        for i in 1..=20 {
            scores.add_round(i, 0);
        }
        assert_eq!(scores.entries.len(), MAX_ENTRIES);
        assert_eq!(scores.top_score(), Some(20));
        // Scores below the cut no longer qualify
        assert!(!scores.qualifies(10));
        assert!(scores.qualifies(21));
    }
}
