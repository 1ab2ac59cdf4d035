// src/config/settings.rs
//
// Validated, immutable settings shared by the whole process

use nannou::color::{rgb8, Rgb8};
use std::time::Duration;

use super::{Palette, WindowConfig};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub window: WindowConfig,
    pub style: Style,
    pub timing: Timing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub palette: Palette,
    pub background: Rgb8,
    pub size_factor: f32,
    pub rect_factor: f32,
    pub stroke_factor: f32,
    pub rotation_degrees: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            background: rgb8(0xBD, 0xBD, 0xBD),
            size_factor: 2.9,
            rect_factor: 5.6,
            stroke_factor: 90.0,
            rotation_degrees: 90.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub step_size: f32, // scale change per tick
    pub delay: Duration, // interval between ticks
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            step_size: 0.02 / 4.0,
            delay: Duration::from_millis(20),
        }
    }
}
