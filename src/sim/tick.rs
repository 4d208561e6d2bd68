//! Fixed timestep simulation tick
//!
//! Holds the mode controller: applies actions, then runs the bird and the
//! pipe field with the mode it decided on, then books collisions and scores.

use super::state::{GameEvent, GameMode, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap / start (click, tap or space)
    pub primary: bool,
    /// Start a new round after game over
    pub restart: bool,
    /// Idle/demo mode - the bird flies itself
    pub idle_mode: bool,
}

/// Advance the game state by one tick
///
/// Events from the previous tick are discarded; read `state.events()` after
/// this returns.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    let input = if input.idle_mode {
        autopilot(state)
    } else {
        input.clone()
    };

    apply_actions(state, &input);

    // Bird
    let mode = state.mode;
    let was_grounded = state.bird.grounded;
    if state.bird.update(mode, state.frames) {
        match mode {
            GameMode::Playing => {
                state.events.push(GameEvent::HitFloor);
                state.set_mode(GameMode::Over);
            }
            GameMode::Over if !was_grounded => {
                state.events.push(GameEvent::Landed);
            }
            _ => {}
        }
    }

    if state.mode == GameMode::Playing {
        state.scroll_ground();
    }

    // Pipes
    let report = state.pipes.update(state.mode, &state.bird);
    if report.collided && state.mode == GameMode::Playing {
        state.events.push(GameEvent::HitPipe);
        state.set_mode(GameMode::Over);
    }
    for _ in 0..report.retired {
        let new_best = state.score.record_pass();
        state.events.push(GameEvent::Scored {
            score: state.score.current,
        });
        if let Some(best) = new_best {
            log::info!("New best score: {}", best);
            state.events.push(GameEvent::NewBest { best });
        }
    }

    state.frames += 1;
}

/// Resolve this tick's actions against the current mode
fn apply_actions(state: &mut GameState, input: &TickInput) {
    match state.mode {
        GameMode::NotStarted | GameMode::Over => {
            if input.primary || input.restart {
                state.reset_round();
                state.set_mode(GameMode::Ready);
            }
        }
        GameMode::Ready => {
            if input.primary {
                state.set_mode(GameMode::Playing);
            }
        }
        GameMode::Playing => {
            if input.primary && state.bird.flap(state.mode) {
                state.events.push(GameEvent::Flapped);
            }
        }
    }
}

/// Pick inputs for demo mode
///
/// Starts and restarts immediately, then aims for the middle of the next gap
/// and flaps whenever the bird sinks below it.
pub fn autopilot(state: &GameState) -> TickInput {
    let bird = &state.bird;
    let primary = match state.mode {
        GameMode::NotStarted | GameMode::Ready | GameMode::Over => true,
        GameMode::Playing => {
            let target = state
                .pipes
                .iter()
                .find(|p| p.x + PIPE_WIDTH >= bird.pos.x - bird.radius)
                .map(|p| p.gap_center() + PIPE_GAP / 6.0)
                .unwrap_or(FLOOR_Y / 2.0);
            bird.pos.y > target && bird.vel >= 0.0
        }
    };

    TickInput {
        primary,
        restart: false,
        idle_mode: false,
    }
}
