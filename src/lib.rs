//! # iniman - INI Settings Manager
//!
//! Declarative mapping between Rust records and INI files, with an in-memory
//! cache, a per-instance write gate, and backup/restore.
//!
//! ## Features
//!
//! - **INI Codec**: Line-oriented parser (streamable) and writer, no I/O
//! - **Declarative Bindings**: Map struct members to a section and keys by hand
//!   or with `#[derive(IniSection)]`
//! - **Typed Coercion**: Strings, integers, floats, booleans and unit enums
//! - **Caching**: The file is parsed once and served from memory
//! - **Backup & Restore**: Every write snapshots the previous file to `.bak`
//! - **Lists**: Collections stored as numbered sections (`Server1`, `Server2`, ...)
//! - **Async**: `AsyncIniSettings` front-end (requires `async` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use iniman::{IniEnum, IniSection, IniSettings};
//!
//! #[derive(Debug, Default, PartialEq, IniEnum)]
//! enum Quality {
//!     #[default]
//!     Low,
//!     High,
//! }
//!
//! #[derive(Debug, Default, IniSection)]
//! #[ini(section = "Graphics")]
//! struct Graphics {
//!     #[ini(key = "Width")]
//!     width: u32,
//!
//!     #[ini(key = "Quality")]
//!     quality: Quality,
//! }
//!
//! # fn example() -> iniman::Result<()> {
//! let settings = IniSettings::builder("my-app")
//!     .config_dir("~/.config/my-app")
//!     .build()?;
//!
//! settings.write(&Graphics { width: 1920, quality: Quality::High })?;
//! settings.reload()?;
//!
//! let graphics: Graphics = settings.read()?;
//! assert_eq!(graphics.quality, Quality::High);
//! # Ok(())
//! # }
//! ```
//!
//! ## File Format
//!
//! ```text
//! ; comment
//! [Graphics]
//! Width=1920
//! Quality=High
//! ```
//!
//! Lines are trimmed. Blank lines and `;` comments are skipped, `[name]` opens
//! a section, and every other line must contain exactly one `=`. Values are
//! never quoted or escaped.
//!
//! ## Cache Behavior
//!
//! Writes do **not** refresh the cache of the instance that performed them.
//! Call [`IniSettings::reload`] (or [`IniSettings::invalidate_cache`]) when a
//! read must observe a preceding write.
//!
//! ## Backup & Restore
//!
//! ```rust,no_run
//! # use iniman::*;
//! # fn example(settings: &IniSettings) -> iniman::Result<()> {
//! // settings.ini -> settings.ini.bak happens inside every write
//! settings.restore_from_backup()?;
//! settings.reload()?;
//! # Ok(())
//! # }
//! ```

// Core modules
mod error;
mod manager;
mod sync;

// Grouped modules
pub mod binding;
pub mod codec;
pub mod config;

// Re-exports from core
pub use error::{CoercionError, Error, Result};
#[cfg(feature = "async")]
pub use manager::AsyncIniSettings;
pub use manager::{IniSettings, IniSettingsBuilder, list_section_name};

// Re-exports from binding
pub use binding::{
    Binding, BindingDescriptor, FieldBinding, IniEnum, IniSection, IniValue, ValueKind,
    enum_from_ini, enum_to_ini, resolve,
};

// Re-exports from codec
pub use codec::{IniDocument, LineEnding};

// Re-exports from config
pub use config::{IniSettingsConfig, IniSettingsConfigBuilder};

// Derive macro re-exports (requires `derive` feature)
/// Derive macros for [`IniSection`] and [`IniEnum`].
///
/// # Example
///
/// ```rust,ignore
/// use iniman::IniSection;
///
/// #[derive(Default, IniSection)]
/// #[ini(section = "General")]
/// struct General {
///     #[ini(key = "TrayEnabled")]
///     tray_enabled: bool,
/// }
/// ```
#[cfg(feature = "derive")]
pub use iniman_derive::{IniEnum, IniSection};
