// SPDX-License-Identifier: MPL-2.0
//! This module handles the controller's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use playback_overlay::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.skip_seconds = 5.0;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.skip_seconds, 5.0);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::ui::{DoubleTapWindow, DwellTime};
use crate::domain::video::{PollInterval, SkipClampPolicy, SkipStep, VolumeLevel};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PlaybackOverlay";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub center_dwell_ms: u32,
    pub skip_dwell_ms: u32,
    pub double_tap_window_ms: u32,
    pub skip_seconds: f64,
    /// Clamp forward skips to the media duration instead of overshooting.
    pub strict_skip_clamp: bool,
    pub initial_volume: u8,
    pub poll_interval_ms: u32,
    /// Enter fullscreen on landscape and leave it on portrait.
    pub auto_rotate_fullscreen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            center_dwell_ms: DEFAULT_CENTER_DWELL_MS,
            skip_dwell_ms: DEFAULT_SKIP_DWELL_MS,
            double_tap_window_ms: DEFAULT_DOUBLE_TAP_WINDOW_MS,
            skip_seconds: DEFAULT_SKIP_SECS,
            strict_skip_clamp: false,
            initial_volume: DEFAULT_VOLUME_LEVEL,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            auto_rotate_fullscreen: true,
        }
    }
}

impl Config {
    /// Validates raw values into the typed settings used by the controller.
    #[must_use]
    pub fn settings(&self) -> ControllerSettings {
        ControllerSettings {
            center_dwell: DwellTime::new(self.center_dwell_ms),
            skip_dwell: DwellTime::new(self.skip_dwell_ms),
            double_tap_window: DoubleTapWindow::new(self.double_tap_window_ms),
            skip_step: SkipStep::new(self.skip_seconds),
            skip_clamp: if self.strict_skip_clamp {
                SkipClampPolicy::Strict
            } else {
                SkipClampPolicy::Overshoot
            },
            initial_volume: VolumeLevel::new(self.initial_volume),
            poll_interval: PollInterval::new(self.poll_interval_ms),
            auto_rotate_fullscreen: self.auto_rotate_fullscreen,
        }
    }
}

/// Typed, range-checked controller settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    pub center_dwell: DwellTime,
    pub skip_dwell: DwellTime,
    pub double_tap_window: DoubleTapWindow,
    pub skip_step: SkipStep,
    pub skip_clamp: SkipClampPolicy,
    pub initial_volume: VolumeLevel,
    pub poll_interval: PollInterval,
    pub auto_rotate_fullscreen: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Config::default().settings()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), "invalid settings, using defaults: {err}");
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_values() {
        let config = Config {
            skip_seconds: 5.0,
            strict_skip_clamp: true,
            initial_volume: 80,
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "skip_seconds = 15.0\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.skip_seconds, 15.0);
        assert_eq!(loaded.center_dwell_ms, DEFAULT_CENTER_DWELL_MS);
        assert!(loaded.auto_rotate_fullscreen);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn settings_clamp_out_of_range_values() {
        let config = Config {
            center_dwell_ms: 0,
            skip_seconds: 1_000.0,
            initial_volume: 250,
            strict_skip_clamp: true,
            ..Config::default()
        };
        let settings = config.settings();
        assert_eq!(settings.center_dwell.value(), MIN_DWELL_MS);
        assert_eq!(settings.skip_step.value(), MAX_SKIP_SECS);
        assert_eq!(settings.initial_volume.value(), MAX_VOLUME_LEVEL);
        assert_eq!(settings.skip_clamp, SkipClampPolicy::Strict);
    }

    #[test]
    fn default_settings_match_widget_timings() {
        let settings = ControllerSettings::default();
        assert_eq!(settings.center_dwell.value(), 300);
        assert_eq!(settings.skip_dwell.value(), 500);
        assert_eq!(settings.double_tap_window.value(), 300);
        assert_eq!(settings.skip_clamp, SkipClampPolicy::Overshoot);
    }
}
