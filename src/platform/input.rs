//! Input mapping
//!
//! Turns raw keyboard/pointer events into the two actions the sim knows.

use crate::Settings;
use crate::sim::GameMode;

/// What the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Flap / start
    Primary,
    /// Start over after the run ended
    Restart,
}

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Other,
}

/// Raw input from the platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(Key),
    /// Click or tap, in screen coordinates
    Pointer { x: f32, y: f32 },
}

/// On-screen start button shown on the game-over panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestartButton {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Default for RestartButton {
    fn default() -> Self {
        Self {
            x: 120.0,
            y: 263.0,
            w: 83.0,
            h: 29.0,
        }
    }
}

impl RestartButton {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
    }
}

/// Maps events to actions for the current mode
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    /// When set, pointer restarts must land inside this button
    pub restart_button: Option<RestartButton>,
}

impl InputMapper {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            restart_button: settings
                .restart_requires_button
                .then(RestartButton::default),
        }
    }

    pub fn map(&self, event: InputEvent, mode: GameMode) -> Option<Action> {
        match (event, mode) {
            (InputEvent::Key(Key::Other), _) => None,
            (InputEvent::Key(Key::Space), GameMode::Over) => Some(Action::Restart),
            (InputEvent::Pointer { x, y }, GameMode::Over) => match &self.restart_button {
                Some(button) if !button.contains(x, y) => None,
                _ => Some(Action::Restart),
            },
            _ => Some(Action::Primary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(x: f32, y: f32) -> InputEvent {
        InputEvent::Pointer { x, y }
    }

    #[test]
    fn test_primary_outside_game_over() {
        let mapper = InputMapper::from_settings(&Settings::default());
        for mode in [GameMode::NotStarted, GameMode::Ready, GameMode::Playing] {
            assert_eq!(mapper.map(InputEvent::Key(Key::Space), mode), Some(Action::Primary));
            assert_eq!(mapper.map(click(5.0, 5.0), mode), Some(Action::Primary));
            assert_eq!(mapper.map(InputEvent::Key(Key::Other), mode), None);
        }
    }

    #[test]
    fn test_restart_button_gate() {
        let mapper = InputMapper::from_settings(&Settings::default());
        assert_eq!(mapper.map(click(5.0, 5.0), GameMode::Over), None);
        assert_eq!(mapper.map(click(150.0, 270.0), GameMode::Over), Some(Action::Restart));
        assert_eq!(
            mapper.map(InputEvent::Key(Key::Space), GameMode::Over),
            Some(Action::Restart)
        );
    }

    #[test]
    fn test_any_click_restarts_without_button() {
        let mapper = InputMapper::default();
        assert_eq!(mapper.map(click(5.0, 5.0), GameMode::Over), Some(Action::Restart));
    }

    #[test]
    fn test_button_edges_inclusive() {
        let button = RestartButton::default();
        assert!(button.contains(120.0, 263.0));
        assert!(button.contains(203.0, 292.0));
        assert!(!button.contains(203.5, 292.0));
    }
}
