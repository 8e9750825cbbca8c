//! Engine configuration
//!
//! - `IniSettingsConfig` - target path, backup suffix and line ending
//! - `IniSettingsConfigBuilder` - fluent construction with `~` expansion

mod types;

pub use types::{
    DEFAULT_BACKUP_EXTENSION, DEFAULT_SETTINGS_FILE, IniSettingsConfig, IniSettingsConfigBuilder,
};
