// src/config/config_load.rs
//
// loading config.toml and resolving it into Settings

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use super::{
    AnimationConfig, ConfigError, Palette, Settings, StyleConfig, Style, Timing, WindowConfig,
};
use crate::animation::scale::PARTS;

const CONFIG_FILE: &str = "config.toml";

// Smallest step that still moves scale near 1.0 in f32; a leg takes at most 10k ticks.
pub const MIN_STEP_SIZE: f32 = 1e-4;
pub const MAX_STEP_SIZE: f32 = 1.0;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub animation: AnimationConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, then the working directory.
    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                let content = fs::read_to_string(&path)?;
                Self::from_toml_str(&content)
            }
            None => {
                log::info!("No {} found, using defaults", CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn find_config_file() -> Option<PathBuf> {
        let exe_config = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join(CONFIG_FILE)));

        exe_config
            .into_iter()
            .chain(std::iter::once(PathBuf::from(CONFIG_FILE)))
            .find(|path| path.exists())
    }

    /// Validates the raw values and builds the immutable Settings.
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        let style = &self.style;
        for (name, value) in [
            ("size_factor", style.size_factor),
            ("rect_factor", style.rect_factor),
            ("stroke_factor", style.stroke_factor),
            ("base_gap", self.animation.base_gap),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive(name, value));
            }
        }
        if !style.rotation_degrees.is_finite() {
            return Err(ConfigError::NotFinite(
                "rotation_degrees",
                style.rotation_degrees,
            ));
        }
        if self.animation.delay_ms == 0 {
            return Err(ConfigError::NonPositive("delay_ms", 0.0));
        }

        let step_size = self.animation.base_gap / PARTS as f32;
        if !(MIN_STEP_SIZE..=MAX_STEP_SIZE).contains(&step_size) {
            return Err(ConfigError::StepSizeOutOfRange(
                step_size,
                MIN_STEP_SIZE,
                MAX_STEP_SIZE,
            ));
        }

        Ok(Settings {
            window: self.window.clone(),
            style: Style {
                palette: Palette::from_hex(&style.palette)?,
                background: super::parse_hex_color(&style.background)?,
                size_factor: style.size_factor,
                rect_factor: style.rect_factor,
                stroke_factor: style.stroke_factor,
                rotation_degrees: style.rotation_degrees,
            },
            timing: Timing {
                step_size,
                delay: Duration::from_millis(self.animation.delay_ms),
            },
        })
    }
}
