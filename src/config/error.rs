//! Config error types
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
    #[error("Palette must have {expected} colors, found {found}")]
    PaletteSize { expected: usize, found: usize },
    #[error("{0} must be positive, got {1}")]
    NonPositive(&'static str, f32),
    #[error("{0} must be finite, got {1}")]
    NotFinite(&'static str, f32),
    #[error("Step size {0} out of range, expected {1} to {2}")]
    StepSizeOutOfRange(f32, f32, f32),
}
