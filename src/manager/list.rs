//! Numbered-section lists: `[Base1]`, `[Base2]`, ...
//!
//! A list is a positional convention over ordinary sections, not a structural
//! type. Reading visits `Base1`, `Base2`, ... and stops at the first index with
//! none of the bound keys; later sections after a gap are never reached.

use crate::binding::{IniSection, resolve};
use crate::codec::serialize_sections;
use crate::error::Result;
use crate::manager::core::IniSettings;
use crate::manager::operations::warn_unrepresentable;
use crate::sync::MutexExt;

use log::{debug, info};

/// Section name of the `index`-th list element (1-based)
pub fn list_section_name(base: &str, index: usize) -> String {
    format!("{base}{index}")
}

impl IniSettings {
    /// Read every `T` stored under `{section}1`, `{section}2`, ...
    ///
    /// # Errors
    ///
    /// Same as [`read`](Self::read); a coercion failure in any element fails
    /// the whole call.
    pub fn read_list<T: IniSection>(&self) -> Result<Vec<T>> {
        let descriptor = resolve::<T>()?;
        let mut cache = self.gate.lock_recovered()?;
        let document = self.ensure_loaded(&mut cache)?;

        let mut records = Vec::new();
        for index in 1.. {
            let section = list_section_name(descriptor.section(), index);
            if !descriptor.matches_section(document, &section) {
                break;
            }
            let mut record = T::default();
            descriptor.populate(document, &section, &mut record)?;
            records.push(record);
        }

        debug!(
            "Read {} {} records from [{}N]",
            records.len(),
            descriptor.type_name(),
            descriptor.section()
        );
        Ok(records)
    }

    /// Write `values` as `{section}1`, `{section}2`, ... separated by blank
    /// lines, replacing the whole file.
    ///
    /// Backup and cache behave as in [`write`](Self::write).
    ///
    /// # Errors
    ///
    /// Same as [`write`](Self::write).
    pub fn write_list<T: IniSection>(&self, values: &[T]) -> Result<()> {
        let descriptor = resolve::<T>()?;
        let sections: Vec<_> = values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let section = list_section_name(descriptor.section(), i + 1);
                let fields = descriptor.serialize_fields(value);
                warn_unrepresentable(&section, &fields);
                (section, fields)
            })
            .collect();
        let text = serialize_sections(&sections, self.config.line_ending);

        let _gate = self.gate.lock_recovered()?;
        self.commit(&text)?;

        info!(
            "Wrote {} {} records to {}",
            values.len(),
            descriptor.type_name(),
            self.config.path.display()
        );
        Ok(())
    }
}
