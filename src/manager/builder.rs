//! Builder for IniSettings
//!
//! This module contains [`IniSettingsBuilder`] which provides a fluent API
//! for creating an [`IniSettings`](super::IniSettings).

use crate::codec::LineEnding;
use crate::config::IniSettingsConfigBuilder;
use crate::error::Result;
use std::path::PathBuf;

use super::IniSettings;

/// Builder for creating an [`IniSettings`] with a fluent API.
///
/// # Example
///
/// ```rust,no_run
/// use iniman::{IniSettings, LineEnding};
///
/// let settings = IniSettings::builder("my-app")
///     .config_dir("~/.config/my-app")
///     .settings_file("app.ini")
///     .line_ending(LineEnding::Lf)
///     .build()?;
/// # Ok::<(), iniman::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct IniSettingsBuilder {
    config_builder: IniSettingsConfigBuilder,
}

impl IniSettingsBuilder {
    /// Create a new builder; `app_name` names the default config directory
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            config_builder: IniSettingsConfigBuilder::new(app_name),
        }
    }

    /// Set the configuration directory.
    ///
    /// Supports `~` expansion for home directory.
    pub fn config_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_builder = self.config_builder.config_dir(path);
        self
    }

    /// Set the settings filename (default: "settings.ini").
    pub fn settings_file(mut self, filename: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.settings_file(filename);
        self
    }

    /// Use an explicit file path.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_builder = self.config_builder.path(path);
        self
    }

    /// Set the backup suffix (default: "bak").
    pub fn backup_extension(mut self, extension: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.backup_extension(extension);
        self
    }

    /// Set the line terminator used when writing.
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.config_builder = self.config_builder.line_ending(line_ending);
        self
    }

    /// Build the engine.
    ///
    /// # Errors
    ///
    /// Same as [`IniSettings::create`].
    pub fn build(self) -> Result<IniSettings> {
        IniSettings::create(self.config_builder.build())
    }
}

impl IniSettings {
    /// Create a builder for `IniSettings` with a fluent API.
    pub fn builder(app_name: impl Into<String>) -> IniSettingsBuilder {
        IniSettingsBuilder::new(app_name)
    }
}
