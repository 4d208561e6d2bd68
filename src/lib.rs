//! Flap Sim - a side-scrolling flap-through-the-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, scoring, game mode)
//! - `renderer`: Read-only snapshot handed to whatever draws the frame
//! - `platform`: Input mapping and the fixed-timestep session loop
//! - `persistence`: Key/value stores for the best score
//! - `audio`: Sound cue mapping and playback

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use platform::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per display refresh at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Degrees to radians
    pub const DEGREE: f32 = std::f32::consts::PI / 180.0;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 320.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    /// Scrolling ground strip at the bottom of the screen
    pub const GROUND_HEIGHT: f32 = 112.0;
    pub const GROUND_TILE_WIDTH: f32 = 224.0;
    pub const GROUND_SPEED: f32 = 2.0;

    /// Bird defaults
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_IDLE_Y: f32 = 150.0;
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 26.0;
    pub const BIRD_RADIUS: f32 = 12.0;
    /// Added to vertical velocity every tick (px/tick²)
    pub const GRAVITY: f32 = 0.15;
    /// Upward speed set by a flap (px/tick)
    pub const FLAP_IMPULSE: f32 = 4.0;
    pub const BIRD_ANIMATION_FRAMES: u8 = 4;
    pub const IDLE_FLAP_PERIOD: u64 = 10;
    pub const FLAP_PERIOD: u64 = 5;
    pub const NOSE_UP: f32 = -25.0 * DEGREE;
    pub const NOSE_DOWN: f32 = 90.0 * DEGREE;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 53.0;
    pub const PIPE_HEIGHT: f32 = 400.0;
    pub const PIPE_GAP: f32 = 120.0;
    /// Highest (least negative) top-pipe offset; spawns land in (2x, 1x]
    pub const PIPE_MAX_Y: f32 = -150.0;
    pub const PIPE_SPEED: f32 = 2.0;
    pub const PIPE_SPAWN_INTERVAL: u64 = 100;

    /// Top of the ground strip
    pub const FLOOR_Y: f32 = SCREEN_HEIGHT - GROUND_HEIGHT;
}
