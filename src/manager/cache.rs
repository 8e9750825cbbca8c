//! Parsed-document cache owned by one `IniSettings` instance

use crate::codec::IniDocument;

/// The in-memory copy of the settings file.
///
/// Lives inside the engine's gate, so every access is already serialized.
/// Only ever replaced wholesale; entries are never patched in place.
#[derive(Debug, Default)]
pub(crate) struct SettingsCache {
    document: Option<IniDocument>,
    generation: u64,
}

impl SettingsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uninitialized, or loaded from an empty file
    pub fn is_empty(&self) -> bool {
        self.document.as_ref().is_none_or(IniDocument::is_empty)
    }

    pub fn document(&self) -> Option<&IniDocument> {
        self.document.as_ref().filter(|doc| !doc.is_empty())
    }

    pub fn replace(&mut self, document: IniDocument) {
        self.document = Some(document);
        self.generation += 1;
    }

    pub fn invalidate(&mut self) {
        self.document = None;
    }

    /// Number of successful loads so far
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
