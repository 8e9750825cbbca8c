//! Typed conversions from stored text
//!
//! One function per value kind, so every failure is a [`CoercionError`].

use crate::error::CoercionError;
use std::str::FromStr;

/// Strings pass through unchanged
pub fn parse_string(raw: &str) -> String {
    raw.to_string()
}

/// Integer types, using the target type's standard parse (range included)
pub fn parse_integer<N>(raw: &str) -> Result<N, CoercionError>
where
    N: FromStr<Err = std::num::ParseIntError>,
{
    raw.parse::<N>().map_err(|e| CoercionError::InvalidInteger {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Floating point types, using the target type's standard parse
pub fn parse_float<N>(raw: &str) -> Result<N, CoercionError>
where
    N: FromStr<Err = std::num::ParseFloatError>,
{
    raw.parse::<N>().map_err(|e| CoercionError::InvalidFloat {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// `true` / `false`, case-insensitive
pub fn parse_bool(raw: &str) -> Result<bool, CoercionError> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CoercionError::InvalidBoolean {
            value: raw.to_string(),
        })
    }
}

/// Exact, case-sensitive match against a declared variant list.
///
/// Returns the index of the matching variant.
pub fn parse_enum(raw: &str, variants: &[&str]) -> Result<usize, CoercionError> {
    variants
        .iter()
        .position(|v| *v == raw)
        .ok_or_else(|| CoercionError::UnknownVariant {
            variant: raw.to_string(),
            expected: variants.join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer::<i32>("42"), Ok(42));
        assert_eq!(parse_integer::<i64>("-7"), Ok(-7));
        assert!(matches!(
            parse_integer::<i32>("forty"),
            Err(CoercionError::InvalidInteger { .. })
        ));
        // out of range for the target type
        assert!(parse_integer::<u8>("300").is_err());
        assert!(parse_integer::<u32>("-1").is_err());
        assert!(parse_integer::<i32>("").is_err());
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float::<f64>("1.5"), Ok(1.5));
        assert_eq!(parse_float::<f32>("-0.25"), Ok(-0.25));
        assert_eq!(parse_float::<f64>("3"), Ok(3.0));
        assert!(matches!(
            parse_float::<f64>("1.2.3"),
            Err(CoercionError::InvalidFloat { .. })
        ));
    }

    #[test]
    fn test_parse_bool_case_insensitive() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("TRUE"), Ok(true));
        assert_eq!(parse_bool("False"), Ok(false));
        assert!(parse_bool("yes").is_err());
        assert!(parse_bool("1").is_err());
    }

    #[test]
    fn test_parse_enum_exact_match() {
        let variants = ["FirstValue", "SecondValue"];
        assert_eq!(parse_enum("SecondValue", &variants), Ok(1));

        let err = parse_enum("secondvalue", &variants).unwrap_err();
        match err {
            CoercionError::UnknownVariant { variant, expected } => {
                assert_eq!(variant, "secondvalue");
                assert_eq!(expected, "FirstValue, SecondValue");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_string_passthrough() {
        assert_eq!(parse_string("  keep  "), "  keep  ");
    }
}
