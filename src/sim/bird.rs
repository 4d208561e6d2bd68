//! The player's bird
//!
//! Falls under gravity, flaps on demand and stops at the ground.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameMode;
use crate::consts::*;

/// The bird entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Bird {
    /// Centre of the sprite (x never changes)
    pub pos: Vec2,
    /// Vertical velocity in px/tick (positive = down)
    pub vel: f32,
    /// Sprite rotation in radians (derived from velocity each tick)
    pub rotation: f32,
    /// Index into the wing animation
    pub frame: u8,
    /// Collision circle radius
    pub radius: f32,
    /// Resting on the ground
    pub grounded: bool,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BIRD_X, BIRD_IDLE_Y),
            vel: 0.0,
            rotation: 0.0,
            frame: 0,
            radius: BIRD_RADIUS,
            grounded: false,
        }
    }
}

impl Bird {
    /// Lowest centre position the bird may reach
    #[inline]
    pub fn floor_y() -> f32 {
        FLOOR_Y - BIRD_HEIGHT / 2.0
    }

    /// Launch upward. Ignored unless the round is being played.
    ///
    /// Only velocity changes; position integrates on the next update.
    pub fn flap(&mut self, mode: GameMode) -> bool {
        if mode != GameMode::Playing {
            return false;
        }
        self.vel = -FLAP_IMPULSE;
        true
    }

    /// Back to the start line, motionless
    pub fn reset(&mut self) {
        self.pos.y = BIRD_IDLE_Y;
        self.vel = 0.0;
        self.rotation = 0.0;
        self.grounded = false;
    }

    /// Advance one tick. Returns true when the bird is on the ground.
    pub fn update(&mut self, mode: GameMode, frames: u64) -> bool {
        // Wings beat slowly while waiting, fast once moving
        let period = if mode.is_idle() {
            IDLE_FLAP_PERIOD
        } else {
            FLAP_PERIOD
        };
        if frames % period == 0 {
            self.frame = (self.frame + 1) % BIRD_ANIMATION_FRAMES;
        }

        if mode.is_idle() {
            self.pos.y = BIRD_IDLE_Y;
            self.rotation = 0.0;
            return false;
        }

        self.vel += GRAVITY;
        self.pos.y += self.vel;

        let on_floor = self.pos.y + BIRD_HEIGHT / 2.0 >= FLOOR_Y;
        if on_floor {
            self.pos.y = Self::floor_y();
        }
        self.grounded = on_floor;

        // Nose dives once falling faster than a flap can lift
        if self.vel >= FLAP_IMPULSE {
            self.rotation = NOSE_DOWN;
            self.frame = 1;
        } else {
            self.rotation = NOSE_UP;
        }

        on_floor
    }
}
