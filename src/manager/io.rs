//! Filesystem plumbing for the settings engine
//!
//! Every function here is called with the engine's gate held.

use crate::codec::{IniDocument, LineParser};
use crate::error::{self, Error, Result};

use log::debug;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

const UTF8_BOM: char = '\u{feff}';

/// Stream-parse the file at `path` one line at a time
pub(crate) fn load_document(path: &Path) -> Result<IniDocument> {
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut parser = LineParser::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if i == 0 {
            parser.feed_line(line.trim_start_matches(UTF8_BOM))?;
        } else {
            parser.feed_line(&line)?;
        }
    }

    let lines = parser.lines_read();
    let document = parser.finish()?;
    debug!(
        "Loaded {} entries from {} lines of {}",
        document.len(),
        lines,
        path.display()
    );
    Ok(document)
}

/// Create the parent directory and an empty file if either is missing
pub(crate) fn ensure_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            error::create_dir(parent)?;
            debug!("Created settings directory {}", parent.display());
        }
    }

    if !path.exists() {
        File::create(path).map_err(|e| Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!("Created empty settings file {}", path.display());
    }
    Ok(())
}

pub(crate) fn is_read_only(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.permissions().readonly())
}

/// Fail with [`Error::AccessDenied`] if `path` exists and is read-only
pub(crate) fn ensure_writable(path: &Path) -> Result<()> {
    if is_read_only(path) {
        return Err(Error::AccessDenied {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Drop the read-only attribute of `path`, if set
#[allow(clippy::permissions_set_readonly_false)]
pub(crate) fn clear_read_only(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut perms = metadata.permissions();
    if perms.readonly() {
        perms.set_readonly(false);
        fs::set_permissions(path, perms).map_err(|e| Error::Permissions {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!("Cleared read-only attribute on {}", path.display());
    }
    Ok(())
}

/// Snapshot `primary` byte-for-byte into `backup`, overwriting any previous
/// backup
pub(crate) fn snapshot(primary: &Path, backup: &Path) -> Result<()> {
    if backup.exists() {
        clear_read_only(backup)?;
    }
    let bytes = error::copy_file(primary, backup)?;
    debug!("Backed up {} ({bytes} bytes) to {}", primary.display(), backup.display());
    Ok(())
}

/// The file a write to `path` must land in: symlinks are followed so the
/// link itself survives, a missing file resolves to `path` unchanged
pub(crate) fn resolve_target(path: &Path) -> Result<PathBuf> {
    if fs::symlink_metadata(path).is_err() {
        return Ok(path.to_path_buf());
    }
    fs::canonicalize(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Replace the whole content of `path`.
///
/// The bytes go to a temporary sibling of the resolved target first and are
/// renamed over it, so readers never observe a half-written file. Symlinks
/// keep pointing at the updated file, and permissions of an existing target
/// are carried over. Hard links to the target are split.
pub(crate) fn replace_contents(path: &Path, contents: &[u8]) -> Result<()> {
    let target = resolve_target(path)?;
    let write_err = |e: std::io::Error| Error::FileWrite {
        path: target.clone(),
        source: e,
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(contents).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;

    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(temp.path(), metadata.permissions()).map_err(|e| {
            Error::Permissions {
                path: temp.path().to_path_buf(),
                source: e,
            }
        })?;
    }

    temp.persist(&target).map_err(|e| write_err(e.error))?;
    if target.as_path() != path {
        debug!("Wrote through {} to {}", path.display(), target.display());
    }
    Ok(())
}
