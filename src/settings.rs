//! Game settings and preferences
//!
//! Read-only configuration: gameplay tuning, feedback preferences and an
//! optional fixed seed. Loaded from JSON where every field is optional;
//! nothing here is ever written back.

use serde::{Deserialize, Serialize};

use crate::persistence::StoreError;
use crate::tuning::Tuning;

/// Feedback preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackSettings {
    /// Play sound cues
    pub sound: bool,
    /// Vibrate on cues (where the host supports it)
    pub haptics: bool,
    /// Master volume (0.0 - 1.0)
    pub volume: f32,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            sound: true,
            haptics: true,
            volume: 0.8,
        }
    }
}

impl FeedbackSettings {
    /// Whether any cue should reach the sink
    pub fn enabled(&self) -> bool {
        (self.sound && self.volume > 0.0) || self.haptics
    }
}

/// Game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tuning: Tuning,
    pub feedback: FeedbackSettings,
    /// Fixed RNG seed (random per process when absent)
    pub seed: Option<u64>,
    /// Let the computer play
    pub autopilot: bool,
}

impl Settings {
    /// Environment variable naming a JSON settings file (native)
    pub const CONFIG_ENV: &'static str = "DINO_RUNNER_CONFIG";

    /// Parse settings JSON, rejecting unplayable tuning
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.feedback.volume = settings.feedback.volume.clamp(0.0, 1.0);
        settings
            .tuning
            .validate()
            .map_err(|reason| StoreError::Invalid(format!("tuning: {reason}")))?;
        Ok(settings)
    }

    /// Load from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by [`Self::CONFIG_ENV`], falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::CONFIG_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };
        let path = std::path::PathBuf::from(path);
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Parse settings handed over by the page, falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                log::warn!("Ignoring settings: {e}");
                Self::default()
            }
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.feedback.enabled());
        assert!(!settings.autopilot);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_nested_overrides() {
        let settings = Settings::from_json(
            r#"{
                "seed": 99,
                "autopilot": true,
                "feedback": { "sound": false, "volume": 3.0 },
                "tuning": { "initial_speed": 6.5 }
            }"#,
        )
        .unwrap();
        assert_eq!(settings.seed, Some(99));
        assert!(settings.autopilot);
        assert!(!settings.feedback.sound);
        assert!(settings.feedback.haptics);
        assert_eq!(settings.feedback.volume, 1.0);
        assert_eq!(settings.tuning.initial_speed, 6.5);
        assert_eq!(settings.tuning.gravity, crate::consts::GRAVITY);
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let err = Settings::from_json(r#"{ "tuning": { "gravity": 0.0 } }"#).unwrap_err();
        assert!(err.to_string().contains("gravity"));
        assert!(Settings::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_feedback_disabled() {
        let feedback = FeedbackSettings {
            sound: false,
            haptics: false,
            volume: 1.0,
        };
        assert!(!feedback.enabled());
        let muted = FeedbackSettings {
            sound: true,
            haptics: false,
            volume: 0.0,
        };
        assert!(!muted.enabled());
    }
}
