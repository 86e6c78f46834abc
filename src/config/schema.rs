use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/setlist/config.toml` or
/// `~/.config/setlist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SETLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory where playlist files are kept.
    /// Unset means the current working directory.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Banner printed when the program starts.
    pub header_text: String,
    /// Message printed when exiting via the farewell menu choice.
    pub farewell_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "~ setlist: your songs, your order ~".to_string(),
            farewell_text: "Thanks for using setlist. Goodbye!".to_string(),
        }
    }
}
