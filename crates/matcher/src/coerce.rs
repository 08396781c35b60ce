//! Text → native type coercions for criterion values.
//!
//! Each function returns `None` instead of an error; a value that cannot be
//! coerced simply never matches.

/// Base-10 `i64`, optional leading sign.
pub fn parse_phone(value: &str) -> Option<i64> {
    value.parse().ok()
}

/// Parsed straight to `f32` so the comparison happens at the stored
/// field's precision.
pub fn parse_height(value: &str) -> Option<f32> {
    value.parse().ok()
}

/// Boolean tokens: `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_parses_signed_decimal_only() {
        assert_eq!(parse_phone("5551234567"), Some(5551234567));
        assert_eq!(parse_phone("+15"), Some(15));
        assert_eq!(parse_phone("-3"), Some(-3));
        assert_eq!(parse_phone("555-1234"), None);
        assert_eq!(parse_phone("0x10"), None);
        assert_eq!(parse_phone(""), None);
    }

    #[test]
    fn height_parses_at_f32_precision() {
        assert_eq!(parse_height("5.9"), Some(5.9_f32));
        assert_eq!(parse_height("6"), Some(6.0));
        assert_eq!(parse_height("tall"), None);
    }

    #[test]
    fn bool_token_set() {
        for t in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(t), Some(true), "{t}");
        }
        for f in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(f), Some(false), "{f}");
        }
        for bad in ["yes", "no", "tRUE", " true", ""] {
            assert_eq!(parse_bool(bad), None, "{bad}");
        }
    }
}
