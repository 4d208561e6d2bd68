//! Game state and core simulation types
//!
//! Everything needed to resume a run deterministically lives here.

use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pipes::PipeField;
use super::score::ScoreTracker;
use crate::consts::*;

/// Top-level phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Fresh process, nothing has happened yet
    #[default]
    NotStarted,
    /// Bird hovers at the start line, waiting for the first flap
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended; waits for a restart
    Over,
}

impl GameMode {
    /// Modes where the bird hovers in place instead of falling
    pub fn is_idle(self) -> bool {
        matches!(self, GameMode::NotStarted | GameMode::Ready)
    }

    /// Whether `self -> to` is an edge of the mode table
    pub fn can_transition_to(self, to: GameMode) -> bool {
        matches!(
            (self, to),
            (GameMode::NotStarted, GameMode::Ready)
                | (GameMode::Ready, GameMode::Playing)
                | (GameMode::Playing, GameMode::Over)
                | (GameMode::Over, GameMode::Ready)
        )
    }
}

/// Discrete things that happened during a tick, in order
///
/// Audio, rendering and storage consume these after the tick; the sim never
/// calls out to them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Controller moved to a new mode
    ModeChanged { from: GameMode, to: GameMode },
    /// Bird received an impulse
    Flapped,
    /// Bird hit a pipe while playing
    HitPipe,
    /// Bird hit the ground while playing
    HitFloor,
    /// Bird came to rest on the ground after the run already ended
    Landed,
    /// A pipe left the screen and was retired
    Scored { score: u32 },
    /// Best score went up and should be persisted
    NewBest { best: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Frame counter, advanced once per tick and never reset
    pub frames: u64,
    /// Current mode (only the controller in `tick` writes this)
    pub mode: GameMode,
    /// The player
    pub bird: Bird,
    /// Pipes in flight, oldest first
    pub pipes: PipeField,
    /// Current and best score
    pub score: ScoreTracker,
    /// Horizontal scroll of the ground strip (for rendering)
    pub ground_offset: f32,
    /// Events produced by the last tick
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and a hydrated best score
    pub fn new(seed: u64, best: u32) -> Self {
        Self {
            seed,
            frames: 0,
            mode: GameMode::NotStarted,
            bird: Bird::default(),
            pipes: PipeField::new(seed),
            score: ScoreTracker::with_best(best),
            ground_offset: 0.0,
            events: Vec::new(),
        }
    }

    /// Events emitted by the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the events emitted by the most recent tick
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Reset everything a new round starts from
    ///
    /// Clears pipes, puts the bird back at the start line and zeroes the
    /// current score. Best score and the frame counter are untouched.
    pub fn reset_round(&mut self) {
        self.pipes.reset();
        self.bird.reset();
        self.score.reset();
    }

    /// Move to `to`, recording the change. Edges outside the mode table are
    /// ignored.
    pub(crate) fn set_mode(&mut self, to: GameMode) {
        let from = self.mode;
        if !from.can_transition_to(to) {
            log::warn!("Ignoring invalid mode transition {:?} -> {:?}", from, to);
            return;
        }
        log::info!("Mode {:?} -> {:?} (frame {})", from, to, self.frames);
        self.mode = to;
        self.events.push(GameEvent::ModeChanged { from, to });
    }

    /// Scroll the ground strip one tick
    pub(crate) fn scroll_ground(&mut self) {
        self.ground_offset = (self.ground_offset - GROUND_SPEED) % (GROUND_TILE_WIDTH / 2.0);
    }
}
