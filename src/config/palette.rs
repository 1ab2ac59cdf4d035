// src/config/palette.rs
//
// The fixed node palette. One color per node in the chain.

use nannou::color::{rgb8, Rgb8};
use once_cell::sync::Lazy;
use regex::Regex;

use super::ConfigError;

pub const PALETTE_SIZE: usize = 5;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$").expect("valid regex")
});

/// Parses a "#RRGGBB" string.
pub fn parse_hex_color(hex: &str) -> Result<Rgb8, ConfigError> {
    let caps = HEX_COLOR
        .captures(hex.trim())
        .ok_or_else(|| ConfigError::InvalidColor(hex.to_string()))?;

    let channel = |i: usize| {
        u8::from_str_radix(&caps[i], 16).map_err(|_| ConfigError::InvalidColor(hex.to_string()))
    };

    Ok(rgb8(channel(1)?, channel(2)?, channel(3)?))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    colors: [Rgb8; PALETTE_SIZE],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [
                rgb8(0xF4, 0x43, 0x36),
                rgb8(0x00, 0x96, 0x88),
                rgb8(0xFF, 0x57, 0x22),
                rgb8(0x67, 0x3A, 0xB7),
                rgb8(0x00, 0xBC, 0xD4),
            ],
        }
    }
}

impl Palette {
    pub fn from_hex<S: AsRef<str>>(entries: &[S]) -> Result<Self, ConfigError> {
        if entries.len() != PALETTE_SIZE {
            return Err(ConfigError::PaletteSize {
                expected: PALETTE_SIZE,
                found: entries.len(),
            });
        }

        let mut colors = Self::default().colors;
        for (slot, hex) in colors.iter_mut().zip(entries) {
            *slot = parse_hex_color(hex.as_ref())?;
        }
        Ok(Self { colors })
    }

    // node indices are always < PALETTE_SIZE, the chain is built from this palette
    pub fn color(&self, index: usize) -> Rgb8 {
        self.colors[index % PALETTE_SIZE]
    }
}
