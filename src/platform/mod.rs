//! Platform glue
//!
//! Handles everything between the pure sim and the outside world:
//! - Input events -> abstract actions
//! - Fixed-timestep frame loop
//! - Dispatching sim events to audio and storage

pub mod input;
pub mod session;

pub use input::{Action, InputEvent, InputMapper, Key, RestartButton};
pub use session::Session;
