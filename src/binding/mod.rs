//! Declarative record <-> section bindings
//!
//! A record type implements [`IniSection`] (by hand or with
//! `#[derive(IniSection)]`) and returns a [`Binding`]: the section name plus an
//! ordered list of member-to-key associations. [`resolve`] turns that into an
//! immutable [`BindingDescriptor`], cached for the life of the process.
//!
//! ```rust
//! use iniman::{Binding, IniSection};
//!
//! #[derive(Default)]
//! struct Window {
//!     width: u32,
//!     title: String,
//! }
//!
//! impl IniSection for Window {
//!     fn binding() -> Binding<Self> {
//!         Binding::new("Window")
//!             .field("Width", "width", |w: &Self| &w.width, |w: &mut Self| &mut w.width)
//!             .field("Title", "title", |w: &Self| &w.title, |w: &mut Self| &mut w.title)
//!     }
//! }
//! ```

mod registry;
mod value;

pub use registry::resolve;
pub use value::{IniEnum, IniValue, ValueKind, enum_from_ini, enum_to_ini};

use crate::codec::IniDocument;
use crate::error::{CoercionError, Error, Result};

type Getter<T> = Box<dyn Fn(&T) -> String + Send + Sync>;
type Setter<T> = Box<dyn Fn(&mut T, &str) -> std::result::Result<(), CoercionError> + Send + Sync>;

/// A record type bound to an INI section
pub trait IniSection: Default + 'static {
    /// Describe the section and member keys of this type
    fn binding() -> Binding<Self>;
}

/// One member-to-key association
pub struct FieldBinding<T> {
    member: &'static str,
    key: String,
    kind: ValueKind,
    getter: Option<Getter<T>>,
    setter: Option<Setter<T>>,
}

impl<T> FieldBinding<T> {
    /// Name of the bound record member
    pub fn member(&self) -> &'static str {
        self.member
    }

    /// INI key the member is stored under
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// False for write-only members, which are never serialized
    pub fn can_serialize(&self) -> bool {
        self.getter.is_some()
    }

    /// False for read-only members, which never receive a stored value
    pub fn can_populate(&self) -> bool {
        self.setter.is_some()
    }
}

impl<T> std::fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBinding")
            .field("member", &self.member)
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("serialize", &self.can_serialize())
            .field("populate", &self.can_populate())
            .finish()
    }
}

/// Builder returned by [`IniSection::binding`]
pub struct Binding<T> {
    section: Option<String>,
    fields: Vec<FieldBinding<T>>,
}

impl<T: 'static> Binding<T> {
    /// Bind the type to `section`
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: Some(section.into()),
            fields: Vec::new(),
        }
    }

    /// A binding without a section; resolving it fails with
    /// [`Error::UnboundType`]
    pub fn unbound() -> Self {
        Self {
            section: None,
            fields: Vec::new(),
        }
    }

    /// Bind a member that is both written and populated
    pub fn field<V, G, M>(
        mut self,
        key: impl Into<String>,
        member: &'static str,
        get: G,
        get_mut: M,
    ) -> Self
    where
        V: IniValue + 'static,
        G: Fn(&T) -> &V + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut V + Send + Sync + 'static,
    {
        self.fields.push(FieldBinding {
            member,
            key: key.into(),
            kind: V::kind(),
            getter: Some(Box::new(move |record: &T| get(record).to_ini())),
            setter: Some(Box::new(
                move |record: &mut T, raw: &str| -> std::result::Result<(), CoercionError> {
                    *get_mut(record) = V::from_ini(raw)?;
                    Ok(())
                },
            )),
        });
        self
    }

    /// Bind a member that is written but never populated
    pub fn read_only<V, G>(mut self, key: impl Into<String>, member: &'static str, get: G) -> Self
    where
        V: IniValue + 'static,
        G: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.fields.push(FieldBinding {
            member,
            key: key.into(),
            kind: V::kind(),
            getter: Some(Box::new(move |record: &T| get(record).to_ini())),
            setter: None,
        });
        self
    }

    /// Bind a member that is populated but never written
    pub fn write_only<V, S>(mut self, key: impl Into<String>, member: &'static str, set: S) -> Self
    where
        V: IniValue + 'static,
        S: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.fields.push(FieldBinding {
            member,
            key: key.into(),
            kind: V::kind(),
            getter: None,
            setter: Some(Box::new(
                move |record: &mut T, raw: &str| -> std::result::Result<(), CoercionError> {
                    set(record, V::from_ini(raw)?);
                    Ok(())
                },
            )),
        });
        self
    }

    pub(crate) fn into_descriptor(self) -> Result<BindingDescriptor<T>> {
        let type_name = std::any::type_name::<T>();
        let section = self.section.ok_or(Error::UnboundType { type_name })?;
        Ok(BindingDescriptor {
            type_name,
            section,
            fields: self.fields,
        })
    }
}

/// Immutable per-type metadata: section name and bound members in
/// declaration order
pub struct BindingDescriptor<T> {
    type_name: &'static str,
    section: String,
    fields: Vec<FieldBinding<T>>,
}

impl<T> BindingDescriptor<T> {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Section name (the base name for list bindings)
    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn fields(&self) -> &[FieldBinding<T>] {
        &self.fields
    }

    /// Assign every populatable member whose key exists under `section`.
    ///
    /// Missing keys leave the member untouched. Returns how many members were
    /// assigned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`] for the first stored value that does not
    /// convert to its member type.
    pub fn populate(&self, document: &IniDocument, section: &str, record: &mut T) -> Result<usize> {
        let mut assigned = 0;
        for field in &self.fields {
            let Some(setter) = &field.setter else {
                continue;
            };
            let Some(raw) = document.get(section, &field.key) else {
                continue;
            };
            setter(record, raw).map_err(|source| Error::Coercion {
                section: section.to_string(),
                key: field.key.clone(),
                source,
            })?;
            assigned += 1;
        }
        Ok(assigned)
    }

    /// `(key, value)` pairs for every serializable member, in declaration order
    pub fn serialize_fields(&self, record: &T) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter_map(|field| {
                field
                    .getter
                    .as_ref()
                    .map(|get| (field.key.clone(), get(record)))
            })
            .collect()
    }

    /// True if any bound key is present under `section`
    pub fn matches_section(&self, document: &IniDocument, section: &str) -> bool {
        self.fields
            .iter()
            .any(|field| document.get(section, &field.key).is_some())
    }
}

impl<T> std::fmt::Debug for BindingDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingDescriptor")
            .field("type_name", &self.type_name)
            .field("section", &self.section)
            .field("fields", &self.fields)
            .finish()
    }
}
