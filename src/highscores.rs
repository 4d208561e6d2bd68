//! Best score persistence
//!
//! A single integer under one key, read once at startup and written every
//! time it goes up.

use crate::persistence::ScoreStore;

/// Storage key for the best score
pub const BEST_SCORE_KEY: &str = "best";

/// Read the best score (absent or unreadable counts as 0)
pub fn load_best(store: &dyn ScoreStore) -> u32 {
    match store.get(BEST_SCORE_KEY) {
        Some(best) => {
            log::info!("Loaded best score {}", best);
            best
        }
        None => {
            log::info!("No best score found, starting fresh");
            0
        }
    }
}

/// Persist a new best score
pub fn save_best(store: &mut dyn ScoreStore, best: u32) {
    store.set(BEST_SCORE_KEY, best);
    log::info!("Best score saved ({})", best);
}
