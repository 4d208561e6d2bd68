//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame
//! - Seeded RNG only
//! - Side effects leave as `GameEvent`s, never as direct calls
//! - No rendering, audio or storage dependencies

pub mod bird;
pub mod collision;
pub mod pipes;
pub mod score;
pub mod state;
pub mod tick;

pub use bird::Bird;
pub use collision::{Rect, circle_rect_overlap};
pub use pipes::{FieldReport, Pipe, PipeField};
pub use score::ScoreTracker;
pub use state::{GameEvent, GameMode, GameState};
pub use tick::{TickInput, autopilot, tick};
