//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web; read from a JSON file natively.

use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, MIN_FIELD_HEIGHT, MIN_FIELD_WIDTH, PADDLE_STEP};
use crate::platform::{InputAdapter, KeyBindings};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Field width in game units (also the canvas width in CSS pixels)
    pub field_width: f32,
    /// Field height in game units
    pub field_height: f32,

    // === Controls ===
    /// Distance a paddle moves per key press
    pub paddle_step: f32,
    /// Key names for each paddle control
    pub controls: KeyBindings,

    // === Simulation ===
    /// Fixed RNG seed for reproducible runs (random when unset)
    pub seed: Option<u64>,
    /// Frames to run in native headless mode
    pub headless_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            paddle_step: PADDLE_STEP,
            controls: KeyBindings::default(),
            seed: None,
            headless_frames: 3600,
        }
    }
}

impl Settings {
    /// Environment variable naming a native settings file
    pub const PATH_ENV: &'static str = "PADDLE_PONG_SETTINGS";

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "paddle_pong_settings";

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace values the simulation cannot run with by their defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if !at_least(self.field_width, MIN_FIELD_WIDTH)
            || !at_least(self.field_height, MIN_FIELD_HEIGHT)
        {
            log::warn!(
                "Field size {}x{} is below the {}x{} minimum, using {}x{}",
                self.field_width,
                self.field_height,
                MIN_FIELD_WIDTH,
                MIN_FIELD_HEIGHT,
                defaults.field_width,
                defaults.field_height
            );
            self.field_width = defaults.field_width;
            self.field_height = defaults.field_height;
        }

        if !is_positive(self.paddle_step) {
            log::warn!("Invalid paddle step {}, using {}", self.paddle_step, defaults.paddle_step);
            self.paddle_step = defaults.paddle_step;
        }

        self
    }

    /// Input adapter configured from these settings
    pub fn input_adapter(&self) -> InputAdapter {
        InputAdapter::new(self.controls.clone(), self.paddle_step)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings.validated();
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            return;
        };
        match serde_json::to_string(self) {
            Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Failed to save settings: {:?}", e),
            },
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }

    /// Load settings from the file named by `PADDLE_PONG_SETTINGS`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::PATH_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read settings {}: {}", path.to_string_lossy(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.to_string_lossy());
                settings.validated()
            }
            Err(e) => {
                log::warn!("Ignoring settings {}: {}", path.to_string_lossy(), e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

fn is_positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn at_least(v: f32, min: f32) -> bool {
    v.is_finite() && v >= min
}
