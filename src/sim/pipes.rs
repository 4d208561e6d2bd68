//! Pipe pairs: spawning, scrolling, collision and retirement

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::collision::{Rect, circle_rect_overlap};
use super::state::GameMode;
use crate::consts::*;

/// One top/bottom pipe pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Top edge of the top piece (always negative: the piece starts above the screen)
    pub y: f32,
}

impl Pipe {
    /// Upper piece, hanging from above the screen
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, self.y, PIPE_WIDTH, PIPE_HEIGHT)
    }

    /// Lower piece, below the gap
    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x, self.bottom_y(), PIPE_WIDTH, PIPE_HEIGHT)
    }

    /// Top edge of the lower piece
    #[inline]
    pub fn bottom_y(&self) -> f32 {
        self.y + PIPE_HEIGHT + PIPE_GAP
    }

    /// Vertical centre of the gap
    #[inline]
    pub fn gap_center(&self) -> f32 {
        self.y + PIPE_HEIGHT + PIPE_GAP / 2.0
    }

    /// Right edge has left the screen
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.x + PIPE_WIDTH <= 0.0
    }

    pub fn hits(&self, bird: &Bird) -> bool {
        circle_rect_overlap(bird.pos, bird.radius, &self.top_rect())
            || circle_rect_overlap(bird.pos, bird.radius, &self.bottom_rect())
    }
}

/// What happened to the field during one update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldReport {
    /// The bird overlapped at least one pipe
    pub collided: bool,
    /// Pipes that left the screen this tick
    pub retired: u32,
}

/// All pipes in flight, oldest (leftmost) first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeField {
    pub pipes: VecDeque<Pipe>,
    /// Live ticks since the last reset. The tick that starts the round is
    /// tick 0 and never spawns; every 100th tick after it does.
    pub ticks: u64,
    rng: Pcg32,
}

impl PipeField {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }

    pub fn with_rng(rng: Pcg32) -> Self {
        Self {
            pipes: VecDeque::new(),
            ticks: 0,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.iter()
    }

    /// Drop every pipe and restart the spawn cadence. Scores nothing.
    pub fn reset(&mut self) {
        self.pipes.clear();
        self.ticks = 0;
    }

    /// Add a pipe at the right edge with a random gap height
    pub fn spawn(&mut self) {
        let y = PIPE_MAX_Y * (self.rng.random::<f32>() + 1.0);
        log::debug!("Spawning pipe at y={:.1} ({} in flight)", y, self.pipes.len());
        self.pipes.push_back(Pipe { x: SCREEN_WIDTH, y });
    }

    /// Advance one tick. Does nothing unless the round is being played.
    pub fn update(&mut self, mode: GameMode, bird: &Bird) -> FieldReport {
        let mut report = FieldReport::default();
        if mode != GameMode::Playing {
            return report;
        }

        if self.ticks > 0 && self.ticks % PIPE_SPAWN_INTERVAL == 0 {
            self.spawn();
        }
        self.ticks += 1;

        for pipe in self.pipes.iter_mut() {
            // First hit is enough; the rest still move
            if !report.collided && pipe.hits(bird) {
                report.collided = true;
            }
            pipe.x -= PIPE_SPEED;
        }

        let before = self.pipes.len();
        self.pipes.retain(|p| !p.is_offscreen());
        report.retired = (before - self.pipes.len()) as u32;
        if report.retired > 0 {
            log::debug!("Retired {} pipe(s)", report.retired);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_bird_in_gap(pipe: &Pipe) -> Bird {
        let mut bird = Bird::default();
        bird.pos.y = pipe.gap_center();
        bird
    }

    #[test]
    fn test_idle_modes_do_nothing() {
        let mut field = PipeField::new(1);
        field.spawn();
        let bird = Bird::default();
        for mode in [GameMode::NotStarted, GameMode::Ready, GameMode::Over] {
            for _ in 0..200 {
                assert_eq!(field.update(mode, &bird), FieldReport::default());
            }
        }
        assert_eq!(field.len(), 1);
        assert_eq!(field.pipes[0].x, SCREEN_WIDTH);
        assert_eq!(field.ticks, 0);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut field = PipeField::new(1);
        // Far left of every pipe, never collides
        let mut bird = Bird::default();
        bird.pos.x = -500.0;

        // Round-start tick plus 99 more: nothing yet
        for _ in 0..100 {
            field.update(GameMode::Playing, &bird);
        }
        assert!(field.is_empty());

        // 100th tick after the start
        field.update(GameMode::Playing, &bird);
        assert_eq!(field.len(), 1);
        assert_eq!(field.pipes[0].x, SCREEN_WIDTH - PIPE_SPEED);

        for _ in 0..100 {
            field.update(GameMode::Playing, &bird);
        }
        assert_eq!(field.len(), 2);
    }

    #[test]
    fn test_spawn_offsets_in_range() {
        let mut field = PipeField::new(99);
        for _ in 0..500 {
            field.spawn();
        }
        for pipe in field.iter() {
            assert!(pipe.y <= PIPE_MAX_Y);
            assert!(pipe.y > PIPE_MAX_Y * 2.0);
        }
    }

    #[test]
    fn test_same_seed_same_pipes() {
        let mut a = PipeField::new(5);
        let mut b = PipeField::new(5);
        for _ in 0..10 {
            a.spawn();
            b.spawn();
        }
        assert_eq!(a.pipes, b.pipes);
    }

    #[test]
    fn test_retirement() {
        let mut field = PipeField::new(3);
        field.pipes.push_back(Pipe { x: -PIPE_WIDTH + 3.0, y: -200.0 });
        field.pipes.push_back(Pipe { x: 150.0, y: -200.0 });
        let bird = playing_bird_in_gap(&field.pipes[0]);

        let report = field.update(GameMode::Playing, &bird);
        assert_eq!(report.retired, 0);
        let report = field.update(GameMode::Playing, &bird);
        assert_eq!(report.retired, 1);
        assert!(!report.collided);
        assert_eq!(field.len(), 1);
        assert_eq!(field.pipes[0].x, 150.0 - 2.0 * PIPE_SPEED);
    }

    #[test]
    fn test_retirement_checks_every_pipe() {
        let mut field = PipeField::new(3);
        field.pipes.push_back(Pipe { x: -PIPE_WIDTH - 10.0, y: -200.0 });
        field.pipes.push_back(Pipe { x: -PIPE_WIDTH - 5.0, y: -200.0 });
        field.pipes.push_back(Pipe { x: 200.0, y: -200.0 });
        let mut bird = Bird::default();
        bird.pos.x = -500.0;

        let report = field.update(GameMode::Playing, &bird);
        assert_eq!(report.retired, 2);
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_top_pipe_collision() {
        let mut field = PipeField::new(3);
        let pipe = Pipe { x: BIRD_X - 10.0, y: -200.0 };
        field.pipes.push_back(pipe);
        let mut bird = Bird::default();
        bird.pos.y = pipe.y + PIPE_HEIGHT - 30.0;

        let report = field.update(GameMode::Playing, &bird);
        assert!(report.collided);
        // Still scrolled
        assert_eq!(field.pipes[0].x, pipe.x - PIPE_SPEED);
    }

    #[test]
    fn test_bottom_pipe_collision() {
        let mut field = PipeField::new(3);
        let pipe = Pipe { x: BIRD_X - 10.0, y: -200.0 };
        field.pipes.push_back(pipe);
        let mut bird = Bird::default();
        bird.pos.y = pipe.bottom_y() + 5.0;

        assert!(field.update(GameMode::Playing, &bird).collided);
    }

    #[test]
    fn test_gap_is_safe() {
        let mut field = PipeField::new(3);
        let pipe = Pipe { x: BIRD_X - 10.0, y: -200.0 };
        field.pipes.push_back(pipe);
        let bird = playing_bird_in_gap(&pipe);

        assert!(!field.update(GameMode::Playing, &bird).collided);
    }

    #[test]
    fn test_reset_clears_without_scoring() {
        let mut field = PipeField::new(3);
        field.spawn();
        field.spawn();
        field.ticks = 42;
        field.reset();
        assert!(field.is_empty());
        assert_eq!(field.ticks, 0);
    }
}
