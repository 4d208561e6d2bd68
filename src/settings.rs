//! Game settings and preferences
//!
//! Native builds read a JSON file; the browser build uses LocalStorage.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence everything
    pub muted: bool,

    // === Input ===
    /// While the run is over, pointer presses only restart inside the
    /// restart button (keyboard always restarts)
    pub restart_requires_button: bool,

    // === Simulation ===
    /// Fixed pipe seed; random per run when unset
    pub seed: Option<u64>,
    /// Let the bird fly itself
    pub autopilot: bool,
    /// Ticks to simulate in the headless runner
    pub demo_ticks: u32,

    // === Storage ===
    /// Where the native build keeps the best score
    pub best_score_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            restart_requires_button: true,

            seed: None,
            autopilot: true,
            demo_ticks: 60 * 60,

            best_score_path: "flap_sim_scores.json".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON, falling back to defaults on bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Settings file path (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub const FILE_NAME: &'static str = "flap_sim_settings.json";

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "flap_sim_settings";

    /// Load settings from a JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(Self::FILE_NAME)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage
            && let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY)
        {
            log::info!("Loaded settings from LocalStorage");
            return Self::from_json(&json);
        }

        log::info!("Using default settings");
        Self::default()
    }
}
