// src/config/config_types.rs
//
// Config types for the app, as they appear in config.toml

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "squarerotpath".to_string(),
            width: 720,
            height: 1280,
            fullscreen: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    pub palette: Vec<String>,  // one "#RRGGBB" entry per node
    pub background: String,    // "#RRGGBB"
    pub size_factor: f32,      // shape size = min(w, h) / size_factor
    pub rect_factor: f32,      // corner rect size = min(w, h) / rect_factor
    pub stroke_factor: f32,    // stroke width = min(w, h) / stroke_factor
    pub rotation_degrees: f32, // sweep of the rotating arm at full progress
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            palette: ["#F44336", "#009688", "#FF5722", "#673AB7", "#00BCD4"]
                .iter()
                .map(|hex| hex.to_string())
                .collect(),
            background: "#BDBDBD".to_string(),
            size_factor: 2.9,
            rect_factor: 5.6,
            stroke_factor: 90.0,
            rotation_degrees: 90.0,
        }
    }
}

/************************* Animation Configs ********************/
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub base_gap: f32, // progress per tick before splitting into parts
    pub delay_ms: u64, // time between ticks
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            base_gap: 0.02,
            delay_ms: 20,
        }
    }
}
