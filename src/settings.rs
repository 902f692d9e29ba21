//! User preferences
//!
//! Loaded from a small JSON file next to the binary (or wherever
//! `RAMPBALL_CONFIG` points). A missing or unreadable file means
//! defaults; the demo never requires a config to exist.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How the frame loop advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pacing {
    /// Block on one keypress per frame
    #[default]
    Keypress,
    /// Sleep a fixed 1/FPS per frame instead of waiting for input
    Clock,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Enable the mirrored right-hand ramp
    pub second_ramp: bool,
    /// Frame pacing mode
    pub pacing: Pacing,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            second_ramp: false,
            pacing: Pacing::Keypress,
        }
    }
}

impl Settings {
    const DEFAULT_PATH: &'static str = "rampball.json";

    /// Config file location, overridable via `RAMPBALL_CONFIG`
    pub fn path() -> PathBuf {
        std::env::var_os("RAMPBALL_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH))
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
            Err(err) => {
                log::warn!("could not read {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Write settings to disk
    pub fn save(&self) -> io::Result<()> {
        self.save_to(&Self::path())
    }

    fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(!s.second_ramp);
        assert_eq!(s.pacing, Pacing::Keypress);
    }

    #[test]
    fn test_json_roundtrip() {
        let s = Settings {
            second_ramp: true,
            pacing: Pacing::Clock,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert!(back.second_ramp);
        assert_eq!(back.pacing, Pacing::Clock);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let back: Settings = serde_json::from_str(r#"{"second_ramp": true}"#).unwrap();
        assert!(back.second_ramp);
        assert_eq!(back.pacing, Pacing::Keypress);
    }

    #[test]
    fn test_save_then_load_from_disk() {
        let path = std::env::temp_dir().join("rampball-settings-roundtrip.json");
        let s = Settings {
            second_ramp: true,
            pacing: Pacing::Clock,
        };
        s.save_to(&path).unwrap();

        let back = Settings::load_from(&path);
        assert!(back.second_ramp);
        assert_eq!(back.pacing, Pacing::Clock);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let path = std::env::temp_dir().join("rampball-settings-does-not-exist.json");
        let back = Settings::load_from(&path);
        assert!(!back.second_ramp);
        assert_eq!(back.pacing, Pacing::Keypress);
    }

    #[test]
    fn test_load_malformed_file_is_default() {
        let path = std::env::temp_dir().join("rampball-settings-malformed.json");
        std::fs::write(&path, "{not json").unwrap();
        let back = Settings::load_from(&path);
        assert!(!back.second_ramp);
        assert_eq!(back.pacing, Pacing::Keypress);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_pacing_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Pacing::Keypress).unwrap(), "\"keypress\"");
        assert_eq!(serde_json::to_string(&Pacing::Clock).unwrap(), "\"clock\"");
    }
}
