pub mod config_load;
pub mod config_types;
pub mod error;
pub mod palette;
pub mod settings;

pub use config_load::Config;
pub use config_types::{AnimationConfig, StyleConfig, WindowConfig};
pub use error::ConfigError;
pub use palette::{parse_hex_color, Palette, PALETTE_SIZE};
pub use settings::{Settings, Style, Timing};

use once_cell::sync::OnceCell;

static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Installs the process-wide settings. Only the first call wins; returns whether
/// this call installed them.
pub fn init(settings: Settings) -> bool {
    let installed = SETTINGS.set(settings).is_ok();
    if !installed {
        log::warn!("Settings already initialized, keeping the first ones");
    }
    installed
}

/// Process-wide settings, defaults if `init` was never called.
pub fn get() -> &'static Settings {
    SETTINGS.get_or_init(Settings::default)
}
