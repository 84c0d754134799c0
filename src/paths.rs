//! Centralized path definitions
//!
//! ```text
//! ~/.config/resolution-solver/
//! └── config.toml               # Element ids, render options
//! ```

use std::path::PathBuf;

/// Directory name under the user config dir
pub const APP_DIR: &str = "resolution-solver";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Get the global config directory.
///
/// Returns `~/.config/resolution-solver/` (or the platform equivalent).
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(APP_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
