//! Rendering hand-off
//!
//! Renderers never touch `GameState`; each frame they get a `Snapshot`,
//! a plain copy of everything visible.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{GameMode, GameState};

/// Bird as drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirdView {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub frame: u8,
}

/// Pipe pair as drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeView {
    pub x: f32,
    /// Top edge of the upper piece
    pub top_y: f32,
    /// Top edge of the lower piece
    pub bottom_y: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    pub mode: GameMode,
    pub bird: BirdView,
    pub pipes: Vec<PipeView>,
    pub score: u32,
    pub best: u32,
    pub ground_offset: f32,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            frame: state.frames,
            mode: state.mode,
            bird: BirdView {
                x: state.bird.pos.x,
                y: state.bird.pos.y,
                rotation: state.bird.rotation,
                frame: state.bird.frame,
            },
            pipes: state
                .pipes
                .iter()
                .map(|p| PipeView {
                    x: p.x,
                    top_y: p.y,
                    bottom_y: p.bottom_y(),
                })
                .collect(),
            score: state.score.current,
            best: state.score.best,
            ground_offset: state.ground_offset,
        }
    }

    /// Pipes with any part on screen
    pub fn visible_pipes(&self) -> impl Iterator<Item = &PipeView> {
        self.pipes
            .iter()
            .filter(|p| p.x < SCREEN_WIDTH && p.x + PIPE_WIDTH > 0.0)
    }
}

/// A frame consumer
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot);
}

/// Renderer that traces each frame to the log
#[derive(Debug, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn draw(&mut self, snapshot: &Snapshot) {
        log::trace!(
            "frame {} {:?} bird=({:.1},{:.1}) pipes={} score={}/{}",
            snapshot.frame,
            snapshot.mode,
            snapshot.bird.x,
            snapshot.bird.y,
            snapshot.visible_pipes().count(),
            snapshot.score,
            snapshot.best
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Pipe;

    #[test]
    fn test_capture() {
        let mut state = GameState::new(1, 9);
        state.pipes.pipes.push_back(Pipe { x: 100.0, y: -200.0 });
        state.pipes.pipes.push_back(Pipe { x: SCREEN_WIDTH, y: -160.0 });

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.mode, GameMode::NotStarted);
        assert_eq!(snap.best, 9);
        assert_eq!(snap.bird.x, BIRD_X);
        assert_eq!(snap.pipes.len(), 2);
        assert_eq!(snap.pipes[0].bottom_y, -200.0 + PIPE_HEIGHT + PIPE_GAP);
        // Pipe sitting exactly at the right edge is not yet visible
        assert_eq!(snap.visible_pipes().count(), 1);
    }
}
