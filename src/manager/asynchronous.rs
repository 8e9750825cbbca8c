//! Async front-end over [`IniSettings`]
//!
//! Each call runs the blocking engine operation on tokio's blocking pool, so
//! the calling task is suspended while it waits for the gate and for file I/O.

use crate::binding::IniSection;
use crate::codec::IniDocument;
use crate::config::IniSettingsConfig;
use crate::error::{Error, Result};
use crate::manager::IniSettings;

use log::warn;
use std::path::Path;
use std::sync::Arc;

async fn run_blocking<F, R>(op: F) -> Result<R>
where
    F: FnOnce() -> Result<R> + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|e| Error::Task(e.to_string()))?
}

/// Cloneable async handle to one [`IniSettings`] instance.
///
/// Clones share the same cache and gate.
///
/// # Example
///
/// ```rust,no_run
/// use iniman::{AsyncIniSettings, IniSettingsConfig};
///
/// # async fn example() -> iniman::Result<()> {
/// let settings = AsyncIniSettings::create(IniSettingsConfig::at("settings.ini")).await?;
/// settings.restore_from_backup().await.ok();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AsyncIniSettings {
    inner: Arc<IniSettings>,
}

impl AsyncIniSettings {
    /// Async counterpart of [`IniSettings::create`]
    ///
    /// # Errors
    ///
    /// Same as [`IniSettings::create`].
    pub async fn create(config: IniSettingsConfig) -> Result<Self> {
        let inner = run_blocking(move || IniSettings::create(config)).await?;
        Ok(Self::from(inner))
    }

    /// The wrapped synchronous engine
    pub fn blocking(&self) -> &IniSettings {
        &self.inner
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Async counterpart of [`IniSettings::read`]
    ///
    /// # Errors
    ///
    /// Same as [`IniSettings::read`].
    pub async fn read<T: IniSection + Send>(&self) -> Result<T> {
        let inner = Arc::clone(&self.inner);
        run_blocking(move || inner.read::<T>()).await
    }

    /// Async counterpart of [`IniSettings::read_safe`]; never fails
    pub async fn read_safe<T: IniSection + Send>(&self) -> T {
        let inner = Arc::clone(&self.inner);
        match tokio::task::spawn_blocking(move || inner.read_safe::<T>()).await {
            Ok(record) => record,
            Err(e) => {
                warn!("read_safe task failed, using defaults: {e}");
                T::default()
            }
        }
    }

    /// Async counterpart of [`IniSettings::write`]
    ///
    /// # Errors
    ///
    /// Same as [`IniSettings::write`].
    pub async fn write<T: IniSection + Send>(&self, value: T) -> Result<()> {
        let inner = Arc::clone(&self.inner);
        run_blocking(move || inner.write(&value)).await
    }

    /// Async counterpart of [`IniSettings::read_list`]
    ///
    /// # Errors
    ///
    /// Same as [`IniSettings::read_list`].
    pub async fn read_list<T: IniSection + Send>(&self) -> Result<Vec<T>> {
        let inner = Arc::clone(&self.inner);
        run_blocking(move || inner.read_list::<T>()).await
    }

    /// Async counterpart of [`IniSettings::write_list`]
    ///
    /// # Errors
    ///
    /// Same as [`IniSettings::write_list`].
    pub async fn write_list<T: IniSection + Send>(&self, values: Vec<T>) -> Result<()> {
        let inner = Arc::clone(&self.inner);
        run_blocking(move || inner.write_list(&values)).await
    }

    /// Async counterpart of [`IniSettings::restore_from_backup`]
    ///
    /// # Errors
    ///
    /// Same as [`IniSettings::restore_from_backup`].
    pub async fn restore_from_backup(&self) -> Result<()> {
        let inner = Arc::clone(&self.inner);
        run_blocking(move || inner.restore_from_backup()).await
    }

    /// Async counterpart of [`IniSettings::reload`]
    ///
    /// # Errors
    ///
    /// Same as [`IniSettings::reload`].
    pub async fn reload(&self) -> Result<()> {
        let inner = Arc::clone(&self.inner);
        run_blocking(move || inner.reload()).await
    }

    /// Async counterpart of [`IniSettings::snapshot`]
    ///
    /// # Errors
    ///
    /// Same as [`IniSettings::snapshot`].
    pub async fn snapshot(&self) -> Result<IniDocument> {
        let inner = Arc::clone(&self.inner);
        run_blocking(move || inner.snapshot()).await
    }
}

impl From<IniSettings> for AsyncIniSettings {
    fn from(settings: IniSettings) -> Self {
        Self {
            inner: Arc::new(settings),
        }
    }
}
