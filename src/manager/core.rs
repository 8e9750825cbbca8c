use crate::config::IniSettingsConfig;
use crate::error::Result;
use crate::manager::cache::SettingsCache;
use crate::manager::io;

use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File-backed settings engine mapping [`IniSection`](crate::IniSection)
/// records to one INI file.
///
/// - **Cache**: the file is parsed once and served from memory until
///   [`reload`](Self::reload) or [`invalidate_cache`](Self::invalidate_cache)
/// - **Gate**: one non-reentrant mutex per instance serializes every read,
///   write and restore; two instances on the same path do not exclude each
///   other
/// - **Backup**: every write first snapshots the existing file to
///   `{path}.bak`, which [`restore_from_backup`](Self::restore_from_backup)
///   copies back
///
/// # Example
///
/// ```rust,no_run
/// use iniman::{IniSettings, IniSettingsConfig};
///
/// let settings = IniSettings::create(IniSettingsConfig::at("~/.config/my-app/settings.ini"))?;
/// # Ok::<(), iniman::Error>(())
/// ```
pub struct IniSettings {
    /// Configuration (immutable after construction)
    pub(crate) config: IniSettingsConfig,

    /// The gate: guards the cache and every file mutation
    pub(crate) gate: Mutex<SettingsCache>,
}

impl IniSettings {
    /// Create the engine, bringing the target file into existence.
    ///
    /// Creates the parent directory and an empty file when missing, then
    /// attempts an initial load. An empty file yields an empty cache; a file
    /// that fails to parse is logged and also leaves the cache empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the file cannot be created.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use iniman::{IniSettings, IniSettingsConfig};
    ///
    /// let config = IniSettingsConfig::builder("my-app").build();
    /// let settings = IniSettings::create(config)?;
    /// # Ok::<(), iniman::Error>(())
    /// ```
    pub fn create(config: IniSettingsConfig) -> Result<Self> {
        io::ensure_file(&config.path)?;

        let mut cache = SettingsCache::new();
        match io::load_document(&config.path) {
            Ok(document) => cache.replace(document),
            Err(e) => warn!(
                "Initial load of {} failed, starting with an empty cache: {e}",
                config.path.display()
            ),
        }

        info!("Initialized iniman settings at: {}", config.path.display());

        Ok(Self {
            config,
            gate: Mutex::new(cache),
        })
    }

    /// Shorthand for `IniSettings::create(IniSettingsConfig::at(path))`
    ///
    /// # Errors
    ///
    /// Same as [`IniSettings::create`].
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::create(IniSettingsConfig::at(path))
    }

    /// Get the configuration
    pub fn config(&self) -> &IniSettingsConfig {
        &self.config
    }

    /// Path of the primary settings file
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Path of the backup sibling
    pub fn backup_path(&self) -> PathBuf {
        self.config.backup_path()
    }

    /// True if a backup file currently exists
    pub fn has_backup(&self) -> bool {
        self.backup_path().exists()
    }
}

impl std::fmt::Debug for IniSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IniSettings")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
