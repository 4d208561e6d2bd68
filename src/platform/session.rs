//! Fixed-timestep game session
//!
//! Owns the sim plus its collaborators. The host calls `advance` once per
//! display refresh; every tick's events are played and persisted before the
//! next tick runs.

use super::input::{Action, InputEvent, InputMapper};
use crate::audio::AudioManager;
use crate::consts::*;
use crate::highscores;
use crate::persistence::ScoreStore;
use crate::renderer::{Renderer, Snapshot};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// A running game with its store and audio
pub struct Session<S: ScoreStore> {
    state: GameState,
    store: S,
    audio: AudioManager,
    mapper: InputMapper,
    input: TickInput,
    accumulator: f32,
}

impl<S: ScoreStore> Session<S> {
    /// Hydrate the best score from `store` and set up a fresh game
    pub fn new(settings: &Settings, store: S, audio: AudioManager) -> Self {
        let best = highscores::load_best(&store);
        let seed = settings.seed.unwrap_or_else(|| rand::random());
        log::info!("Session seed {}", seed);

        Self {
            state: GameState::new(seed, best),
            store,
            audio,
            mapper: InputMapper::from_settings(settings),
            input: TickInput {
                idle_mode: settings.autopilot,
                ..Default::default()
            },
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Feed a raw platform event
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Some(action) = self.mapper.map(event, self.state.mode) {
            self.queue(action);
        }
    }

    /// Queue an action for the next tick
    pub fn queue(&mut self, action: Action) {
        match action {
            Action::Primary => self.input.primary = true,
            Action::Restart => self.input.restart = true,
        }
    }

    pub fn set_autopilot(&mut self, on: bool) {
        self.input.idle_mode = on;
    }

    /// Run exactly one tick and dispatch its events
    pub fn step(&mut self) -> Vec<GameEvent> {
        tick(&mut self.state, &self.input);

        // Clear one-shot inputs after processing
        self.input.primary = false;
        self.input.restart = false;

        let events = self.state.drain_events();
        self.dispatch(&events);
        events
    }

    /// Run as many ticks as `dt` seconds of wall time cover
    pub fn advance(&mut self, dt: f32) -> Vec<GameEvent> {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(self.step());
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.draw(&self.snapshot());
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        self.audio.handle_events(events);
        for event in events {
            if let GameEvent::NewBest { best } = event {
                highscores::save_best(&mut self.store, *best);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LogOutput;
    use crate::highscores::BEST_SCORE_KEY;
    use crate::persistence::MemoryStore;
    use crate::sim::{GameMode, Pipe};

    fn manual_settings() -> Settings {
        Settings {
            seed: Some(11),
            autopilot: false,
            ..Default::default()
        }
    }

    fn session_with_best(best: Option<u32>) -> Session<MemoryStore> {
        let mut store = MemoryStore::new();
        if let Some(best) = best {
            store.set(BEST_SCORE_KEY, best);
        }
        let audio = AudioManager::new(Box::new(LogOutput));
        Session::new(&manual_settings(), store, audio)
    }

    #[test]
    fn test_hydrates_best() {
        assert_eq!(session_with_best(None).state().score.best, 0);
        assert_eq!(session_with_best(Some(31)).state().score.best, 31);
    }

    #[test]
    fn test_queued_action_is_one_shot() {
        let mut session = session_with_best(None);
        session.queue(Action::Primary);
        session.step();
        assert_eq!(session.state().mode, GameMode::Ready);
        session.step();
        assert_eq!(session.state().mode, GameMode::Ready);
    }

    #[test]
    fn test_new_best_is_persisted() {
        let mut session = session_with_best(Some(1));
        session.queue(Action::Primary);
        session.step();
        session.queue(Action::Primary);
        session.step();
        assert_eq!(session.state().mode, GameMode::Playing);
        let writes = session.store().writes();

        for offset in [1.0, 2.0] {
            session.state.pipes.pipes.push_back(Pipe {
                x: -PIPE_WIDTH + offset,
                y: -200.0,
            });
            session.step();
        }

        assert_eq!(session.state().score.current, 2);
        assert_eq!(session.store().get(BEST_SCORE_KEY), Some(2));
        // Only the second pass raised the best
        assert_eq!(session.store().writes(), writes + 1);
    }

    #[test]
    fn test_pointer_restart_needs_button() {
        let mut session = session_with_best(None);
        session.queue(Action::Primary);
        session.step();
        session.queue(Action::Primary);
        session.step();
        while session.state().mode == GameMode::Playing {
            session.step();
        }

        session.handle_input(InputEvent::Pointer { x: 1.0, y: 1.0 });
        session.step();
        assert_eq!(session.state().mode, GameMode::Over);

        session.handle_input(InputEvent::Pointer { x: 150.0, y: 270.0 });
        session.step();
        assert_eq!(session.state().mode, GameMode::Ready);
    }

    #[test]
    fn test_advance_fixed_timestep() {
        let mut session = session_with_best(None);

        // Less than a tick: nothing runs, input stays queued
        session.queue(Action::Primary);
        session.advance(SIM_DT * 0.5);
        assert_eq!(session.state().frames, 0);

        session.advance(SIM_DT * 0.6);
        assert_eq!(session.state().frames, 1);
        assert_eq!(session.state().mode, GameMode::Ready);

        // Huge frame gaps are clamped
        session.advance(5.0);
        assert!(session.state().frames <= 1 + MAX_SUBSTEPS as u64);
        assert!(session.state().frames >= 6);
    }
}
