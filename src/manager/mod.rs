//! Settings engine
//!
//! This module contains [`IniSettings`], the file-backed engine that owns the
//! parsed cache, the per-instance gate and the backup/restore logic.

#[cfg(feature = "async")]
mod asynchronous;
mod builder;
mod cache;
mod core;
mod io;
mod list;
mod operations;

#[cfg(feature = "async")]
pub use asynchronous::AsyncIniSettings;
pub use builder::IniSettingsBuilder;
pub use self::core::IniSettings;
pub use list::list_section_name;
