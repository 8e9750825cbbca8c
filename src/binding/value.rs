//! Member value kinds and their textual form

use crate::codec::coerce;
use crate::error::CoercionError;
use std::fmt;
use std::path::PathBuf;

/// The closed set of member types a binding can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Boolean,
    /// Unit enum, identified by its declared variant names
    Enum(&'static [&'static str]),
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::String => f.write_str("string"),
            ValueKind::Integer => f.write_str("integer"),
            ValueKind::Float => f.write_str("float"),
            ValueKind::Boolean => f.write_str("boolean"),
            ValueKind::Enum(variants) => write!(f, "enum({})", variants.join("|")),
        }
    }
}

/// A type that can be stored as a single INI value.
///
/// Implemented for `String`, `PathBuf`, all primitive integers and floats,
/// and `bool`. Unit enums get an implementation from `#[derive(IniEnum)]`,
/// or by hand through [`enum_to_ini`] / [`enum_from_ini`].
pub trait IniValue: Sized {
    /// The kind used to pick the coercion rule
    fn kind() -> ValueKind;

    /// Textual form written after `key=`
    fn to_ini(&self) -> String;

    /// Parse the textual form
    ///
    /// # Errors
    ///
    /// Returns a [`CoercionError`] when `raw` is not a valid value of this kind.
    fn from_ini(raw: &str) -> Result<Self, CoercionError>;
}

/// A unit-only enum whose variants are written by name
pub trait IniEnum: Sized {
    /// Variant names in declaration order
    const VARIANTS: &'static [&'static str];

    /// Name of this variant
    fn variant_name(&self) -> &'static str;

    /// Variant at `index` in [`IniEnum::VARIANTS`]
    fn from_variant_index(index: usize) -> Option<Self>;
}

/// [`IniValue::to_ini`] for an [`IniEnum`]
pub fn enum_to_ini<E: IniEnum>(value: &E) -> String {
    value.variant_name().to_string()
}

/// [`IniValue::from_ini`] for an [`IniEnum`]
///
/// # Errors
///
/// Returns [`CoercionError::UnknownVariant`] unless `raw` names a variant
/// exactly (case-sensitive).
pub fn enum_from_ini<E: IniEnum>(raw: &str) -> Result<E, CoercionError> {
    let index = coerce::parse_enum(raw, E::VARIANTS)?;
    E::from_variant_index(index).ok_or_else(|| CoercionError::UnknownVariant {
        variant: raw.to_string(),
        expected: E::VARIANTS.join(", "),
    })
}

impl IniValue for String {
    fn kind() -> ValueKind {
        ValueKind::String
    }

    fn to_ini(&self) -> String {
        self.clone()
    }

    fn from_ini(raw: &str) -> Result<Self, CoercionError> {
        Ok(coerce::parse_string(raw))
    }
}

impl IniValue for PathBuf {
    fn kind() -> ValueKind {
        ValueKind::String
    }

    fn to_ini(&self) -> String {
        self.display().to_string()
    }

    fn from_ini(raw: &str) -> Result<Self, CoercionError> {
        Ok(PathBuf::from(raw))
    }
}

impl IniValue for bool {
    fn kind() -> ValueKind {
        ValueKind::Boolean
    }

    fn to_ini(&self) -> String {
        self.to_string()
    }

    fn from_ini(raw: &str) -> Result<Self, CoercionError> {
        coerce::parse_bool(raw)
    }
}

macro_rules! impl_ini_value {
    ($kind:ident, $parse:ident: $($ty:ty),+) => {
        $(
            impl IniValue for $ty {
                fn kind() -> ValueKind {
                    ValueKind::$kind
                }

                fn to_ini(&self) -> String {
                    self.to_string()
                }

                fn from_ini(raw: &str) -> Result<Self, CoercionError> {
                    coerce::$parse::<$ty>(raw)
                }
            }
        )+
    };
}

impl_ini_value!(Integer, parse_integer: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_ini_value!(Float, parse_float: f32, f64);
