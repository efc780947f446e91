//! Game settings and preferences
//!
//! Read from an optional JSON file on native builds; the browser build uses
//! the defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_TIME_BUDGET, MAX_TIME_BUDGET, MIN_TIME_BUDGET, TIME_BUDGET_STEP};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Round length shown on the menu at startup (seconds)
    pub time_budget_secs: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all cues
    pub muted: bool,
    /// Directory holding bounce.wav, swish.wav and buzzer.wav
    pub sound_dir: PathBuf,

    /// Fixed seed for the wind RNG (random per launch of the program if unset)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_budget_secs: DEFAULT_TIME_BUDGET,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            sound_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::normalized)
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Clamp values into their valid ranges
    ///
    /// The time budget is snapped down to a multiple of the menu step so the
    /// Up/Down keys land on the same values the menu offers.
    pub fn normalized(mut self) -> Self {
        let budget = self.time_budget_secs.clamp(MIN_TIME_BUDGET, MAX_TIME_BUDGET);
        self.time_budget_secs = budget - budget % TIME_BUDGET_STEP;
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.time_budget_secs, 60);
        assert_eq!(s.sound_dir, PathBuf::from("."));
        assert!(s.seed.is_none());
        assert!(!s.muted);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{"muted": true, "seed": 7}"#).unwrap();
        assert!(s.muted);
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.time_budget_secs, 60);
        assert_eq!(s.master_volume, 0.8);
    }

    #[test]
    fn test_time_budget_is_clamped_and_snapped() {
        let s = Settings::from_json(r#"{"time_budget_secs": 500}"#).unwrap();
        assert_eq!(s.time_budget_secs, 120);
        let s = Settings::from_json(r#"{"time_budget_secs": 3}"#).unwrap();
        assert_eq!(s.time_budget_secs, 10);
        let s = Settings::from_json(r#"{"time_budget_secs": 45}"#).unwrap();
        assert_eq!(s.time_budget_secs, 40);
    }

    #[test]
    fn test_volumes_are_clamped() {
        let s = Settings::from_json(r#"{"master_volume": 3.0, "sfx_volume": -1.0}"#).unwrap();
        assert_eq!(s.master_volume, 1.0);
        assert_eq!(s.sfx_volume, 0.0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_missing_file_names_the_path() {
        let err = Settings::load(std::path::Path::new("/no/such/hoop-shot.json")).unwrap_err();
        assert!(format!("{err:#}").contains("hoop-shot.json"));
    }
}
