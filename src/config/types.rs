//! Configuration for the settings engine

use crate::codec::LineEnding;
use std::path::{Path, PathBuf};

/// Default backup suffix, appended as `settings.ini` -> `settings.ini.bak`
pub const DEFAULT_BACKUP_EXTENSION: &str = "bak";

/// Default settings filename
pub const DEFAULT_SETTINGS_FILE: &str = "settings.ini";

/// Configuration for initializing [`IniSettings`](crate::IniSettings)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniSettingsConfig {
    /// Full path of the primary settings file
    pub path: PathBuf,

    /// Suffix of the backup sibling (without the leading dot)
    pub backup_extension: String,

    /// Line terminator used when writing
    pub line_ending: LineEnding,
}

impl IniSettingsConfig {
    /// Configuration for a file at `path` with default options
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: expand_home(path.into()),
            backup_extension: DEFAULT_BACKUP_EXTENSION.into(),
            line_ending: LineEnding::default(),
        }
    }

    /// Create a new builder for `IniSettingsConfig`
    ///
    /// # Example
    /// ```rust
    /// use iniman::IniSettingsConfig;
    ///
    /// let config = IniSettingsConfig::builder("my-app")
    ///     .config_dir("~/.config/my-app")
    ///     .settings_file("app.ini")
    ///     .build();
    /// assert!(config.path.ends_with("app.ini"));
    /// ```
    pub fn builder(app_name: impl Into<String>) -> IniSettingsConfigBuilder {
        IniSettingsConfigBuilder::new(app_name)
    }

    /// Path of the backup sibling: `{path}.{backup_extension}`
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".");
        name.push(&self.backup_extension);
        PathBuf::from(name)
    }
}

/// Builder for creating `IniSettingsConfig` with a fluent API
#[derive(Debug, Clone)]
pub struct IniSettingsConfigBuilder {
    app_name: String,
    config_dir: Option<PathBuf>,
    settings_file: String,
    path: Option<PathBuf>,
    backup_extension: String,
    line_ending: LineEnding,
}

impl IniSettingsConfigBuilder {
    /// Create a new builder; `app_name` names the default config directory
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            config_dir: None,
            settings_file: DEFAULT_SETTINGS_FILE.into(),
            path: None,
            backup_extension: DEFAULT_BACKUP_EXTENSION.into(),
            line_ending: LineEnding::default(),
        }
    }

    /// Set the configuration directory
    ///
    /// Supports `~` expansion for home directory.
    pub fn config_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(expand_home(path.into()));
        self
    }

    /// Set the settings filename (default: "settings.ini")
    pub fn settings_file(mut self, filename: impl Into<String>) -> Self {
        self.settings_file = filename.into();
        self
    }

    /// Use an explicit file path, ignoring `config_dir` and `settings_file`
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(expand_home(path.into()));
        self
    }

    /// Set the backup suffix (default: "bak")
    pub fn backup_extension(mut self, extension: impl Into<String>) -> Self {
        self.backup_extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Set the line terminator used when writing (default: platform native)
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Build the `IniSettingsConfig`
    ///
    /// If neither `path` nor `config_dir` is set, uses the system config
    /// directory for the app.
    pub fn build(self) -> IniSettingsConfig {
        let path = self.path.unwrap_or_else(|| {
            let dir = self.config_dir.unwrap_or_else(|| {
                dirs::config_dir()
                    .map(|d| d.join(&self.app_name))
                    .unwrap_or_else(|| PathBuf::from("."))
            });
            dir.join(&self.settings_file)
        });

        IniSettingsConfig {
            path,
            backup_extension: self.backup_extension,
            line_ending: self.line_ending,
        }
    }
}

fn expand_home(path: PathBuf) -> PathBuf {
    if path.starts_with("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(path.strip_prefix("~").unwrap_or(Path::new("")));
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic() {
        let config = IniSettingsConfig::builder("test-app")
            .config_dir("/tmp/test-app")
            .build();

        assert_eq!(config.path, PathBuf::from("/tmp/test-app/settings.ini"));
        assert_eq!(config.backup_extension, "bak");
        assert_eq!(config.line_ending, LineEnding::Native);
    }

    #[test]
    fn test_builder_with_options() {
        let config = IniSettingsConfig::builder("my-app")
            .config_dir("/tmp/my-app")
            .settings_file("app.ini")
            .backup_extension(".old")
            .line_ending(LineEnding::CrLf)
            .build();

        assert_eq!(config.path, PathBuf::from("/tmp/my-app/app.ini"));
        assert_eq!(config.backup_path(), PathBuf::from("/tmp/my-app/app.ini.old"));
        assert_eq!(config.line_ending, LineEnding::CrLf);
    }

    #[test]
    fn test_explicit_path_wins() {
        let config = IniSettingsConfig::builder("ignored")
            .config_dir("/tmp/elsewhere")
            .path("/tmp/exact/file.ini")
            .build();
        assert_eq!(config.path, PathBuf::from("/tmp/exact/file.ini"));
    }

    #[test]
    fn test_backup_path_appends_suffix() {
        let config = IniSettingsConfig::at("/data/settings.ini");
        assert_eq!(config.backup_path(), PathBuf::from("/data/settings.ini.bak"));
    }

    #[test]
    fn test_home_expansion() {
        if let Some(home) = dirs::home_dir() {
            let config = IniSettingsConfig::at("~/app/settings.ini");
            assert_eq!(config.path, home.join("app/settings.ini"));
        }
    }
}
