use crate::binding::{IniSection, resolve};
use crate::codec::{IniDocument, is_representable, serialize_section};
use crate::error::{Error, Result};
use crate::manager::cache::SettingsCache;
use crate::manager::core::IniSettings;
use crate::manager::io;
use crate::sync::MutexExt;

use log::{debug, info, warn};

impl IniSettings {
    /// Read a `T` from its bound section.
    ///
    /// Reloads from disk first if the cache is empty. Members whose key is
    /// missing keep their `Default` value.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `T` has no section binding ([`Error::UnboundType`])
    /// - the cache is still empty after a reload, or the reload failed
    ///   ([`Error::EmptyOrUnreadable`], with the reload failure as source)
    /// - a stored value does not convert to its member type ([`Error::Coercion`])
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use iniman::*;
    /// # #[derive(Default)] struct Window { width: u32 }
    /// # impl IniSection for Window {
    /// #     fn binding() -> Binding<Self> {
    /// #         Binding::new("Window").field("Width", "width", |w: &Self| &w.width, |w: &mut Self| &mut w.width)
    /// #     }
    /// # }
    /// let settings = IniSettings::open("settings.ini")?;
    /// let window: Window = settings.read()?;
    /// # Ok::<(), iniman::Error>(())
    /// ```
    pub fn read<T: IniSection>(&self) -> Result<T> {
        let descriptor = resolve::<T>()?;
        let mut cache = self.gate.lock_recovered()?;
        let document = self.ensure_loaded(&mut cache)?;

        let mut record = T::default();
        let assigned = descriptor.populate(document, descriptor.section(), &mut record)?;
        debug!(
            "Read {} from [{}] ({assigned}/{} members)",
            descriptor.type_name(),
            descriptor.section(),
            descriptor.fields().len()
        );
        Ok(record)
    }

    /// Like [`read`](Self::read), but any failure yields `T::default()`.
    pub fn read_safe<T: IniSection>(&self) -> T {
        match self.read::<T>() {
            Ok(record) => record,
            Err(e) => {
                warn!(
                    "Falling back to defaults for {}: {e}",
                    std::any::type_name::<T>()
                );
                T::default()
            }
        }
    }

    /// Write `value` as the whole content of the settings file.
    ///
    /// An existing file is first copied to the backup path. The cache is not
    /// touched; call [`reload`](Self::reload) to observe the new content.
    ///
    /// Values are written verbatim. A value containing `=` or a line break
    /// produces a file that no longer parses (or gains extra lines); such
    /// values are written anyway and logged with `warn!`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `T` has no section binding ([`Error::UnboundType`])
    /// - the target file is read-only ([`Error::AccessDenied`]); neither the
    ///   file nor the backup is modified in that case
    /// - the backup or the write itself fails
    pub fn write<T: IniSection>(&self, value: &T) -> Result<()> {
        let descriptor = resolve::<T>()?;
        let fields = descriptor.serialize_fields(value);
        warn_unrepresentable(descriptor.section(), &fields);
        let text = serialize_section(descriptor.section(), &fields, self.config.line_ending);

        let _gate = self.gate.lock_recovered()?;
        self.commit(&text)?;

        info!(
            "Wrote {} to [{}] in {}",
            descriptor.type_name(),
            descriptor.section(),
            self.config.path.display()
        );
        Ok(())
    }

    /// Copy the backup over the primary file.
    ///
    /// Any read-only attribute on the backup is cleared first. The primary is
    /// replaced atomically, the same way [`write`](Self::write) replaces it.
    /// The cache is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BackupNotFound`] if there is no backup,
    /// [`Error::AccessDenied`] if the primary file is read-only, or an I/O
    /// error if the copy fails.
    pub fn restore_from_backup(&self) -> Result<()> {
        let _gate = self.gate.lock_recovered()?;

        let backup = self.config.backup_path();
        if !backup.exists() {
            return Err(Error::BackupNotFound { path: backup });
        }

        io::ensure_writable(&self.config.path)?;
        io::clear_read_only(&backup)?;
        let bytes = std::fs::read(&backup).map_err(|e| Error::FileRead {
            path: backup.clone(),
            source: e,
        })?;
        io::replace_contents(&self.config.path, &bytes)?;

        info!(
            "Restored {} from {}",
            self.config.path.display(),
            backup.display()
        );
        Ok(())
    }

    /// Re-read the settings file into the cache, replacing it wholesale
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed; the previous
    /// cache is kept in that case.
    pub fn reload(&self) -> Result<()> {
        let mut cache = self.gate.lock_recovered()?;
        let document = io::load_document(&self.config.path)?;
        cache.replace(document);
        debug!(
            "Reloaded {} (cache generation {})",
            self.config.path.display(),
            cache.generation()
        );
        Ok(())
    }

    /// Drop the cache so the next read goes to disk
    ///
    /// # Errors
    ///
    /// Returns an error only if the gate cannot be acquired.
    pub fn invalidate_cache(&self) -> Result<()> {
        self.gate.lock_recovered()?.invalidate();
        debug!("Settings cache invalidated");
        Ok(())
    }

    /// A copy of the cached document (empty if nothing is loaded)
    ///
    /// # Errors
    ///
    /// Returns an error only if the gate cannot be acquired.
    pub fn snapshot(&self) -> Result<IniDocument> {
        let cache = self.gate.lock_recovered()?;
        Ok(cache.document().cloned().unwrap_or_default())
    }

    /// Populate the cache from disk if it is empty and return the document
    pub(crate) fn ensure_loaded<'c>(&self, cache: &'c mut SettingsCache) -> Result<&'c IniDocument> {
        if cache.is_empty() {
            match io::load_document(&self.config.path) {
                Ok(document) => cache.replace(document),
                Err(e) => {
                    return Err(Error::EmptyOrUnreadable {
                        path: self.config.path.clone(),
                        source: Some(Box::new(e)),
                    });
                }
            }
        }

        cache.document().ok_or_else(|| Error::EmptyOrUnreadable {
            path: self.config.path.clone(),
            source: None,
        })
    }

    /// Back up the existing file, then replace it with `text`.
    ///
    /// Must be called with the gate held.
    pub(crate) fn commit(&self, text: &str) -> Result<()> {
        let path = &self.config.path;
        io::ensure_writable(path)?;

        if path.exists() {
            io::snapshot(path, &self.config.backup_path())?;
        }

        io::replace_contents(path, text.as_bytes())
    }
}

/// Log every pair that will not read back as written
pub(crate) fn warn_unrepresentable(section: &str, fields: &[(String, String)]) {
    for (key, value) in fields {
        if !is_representable(key, value) {
            warn!("[{section}] {key}={value:?} will not read back as written");
        }
    }
}
