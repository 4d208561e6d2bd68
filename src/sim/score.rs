//! Current and best score

use serde::{Deserialize, Serialize};

/// Score for the current run plus the best ever seen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    pub current: u32,
    pub best: u32,
}

impl ScoreTracker {
    /// Start from a best score loaded from storage
    pub fn with_best(best: u32) -> Self {
        Self { current: 0, best }
    }

    /// Count one retired pipe. Returns the new best if it went up.
    pub fn record_pass(&mut self) -> Option<u32> {
        self.current += 1;
        if self.current > self.best {
            self.best = self.current;
            Some(self.best)
        } else {
            None
        }
    }

    /// Start a new run; best is kept
    pub fn reset(&mut self) {
        self.current = 0;
    }
}
