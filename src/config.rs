//! Configuration loader/writer plus strongly typed settings structures.
//!
//! Deserializes the single TOML config we ship, resolves the data
//! directory (POKERDECK_DIR overrides ~/.pokerdeck), and writes the
//! embedded default back out on first launch so users have a file to edit.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// Embedded default configuration, written to disk on first launch.
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Top-level configuration object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI tuning knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Built-in theme name ("dark", "light", "high-contrast").
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Target frames per second for the render/animation tick.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u16,

    /// Duration of the tap-to-scroll / snap animation in milliseconds.
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,

    /// Enable mouse capture (dot clicks, card drags, scroll wheel).
    #[serde(default = "default_true")]
    pub mouse_enabled: bool,

    /// Width of one indicator dot in cells, padding included.
    #[serde(default = "default_indicator_width")]
    pub indicator_width: u16,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_frame_rate() -> u16 {
    60
}

fn default_animation_ms() -> u64 {
    350
}

fn default_true() -> bool {
    true
}

fn default_indicator_width() -> u16 {
    5
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            frame_rate: default_frame_rate(),
            animation_ms: default_animation_ms(),
            mouse_enabled: default_true(),
            indicator_width: default_indicator_width(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Data directory: POKERDECK_DIR if set, otherwise ~/.pokerdeck.
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("POKERDECK_DIR") {
            return Ok(PathBuf::from(dir));
        }
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".pokerdeck"))
    }

    /// Load config from the data directory, creating it from the embedded
    /// default on first launch.
    pub fn load() -> Result<Config> {
        let dir = Self::base_dir()?;
        let path = dir.join("config.toml");

        if !path.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create data directory {:?}", dir))?;
            fs::write(&path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write default config to {:?}", path))?;
            tracing::info!("Wrote default config to {:?}", path);
        }

        Self::load_from_path(&path)
    }

    /// Load config from an explicit file path.
    pub fn load_from_path(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let mut config: Config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        config.ui.frame_rate = config.ui.frame_rate.clamp(1, 240);
        tracing::debug!(?path, "Loaded configuration");
        Ok(config)
    }

    /// Persist the current settings back to the data directory.
    pub fn save(&self) -> Result<()> {
        let dir = Self::base_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {:?}", dir))?;
        let path = dir.join("config.toml");
        let serialized =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(&path, serialized)
            .with_context(|| format!("Failed to write config file {:?}", path))?;
        Ok(())
    }

    /// Interval between render/animation ticks.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.ui.frame_rate.clamp(1, 240) as u64)
    }

    /// Duration of the animated scroll.
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.ui.animation_ms)
    }
}
