//! Keystroke sanitizer for numeric text fields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericMode {
    /// Digits only.
    Integer,
    /// Digits and a single decimal point.
    Decimal,
}

/// Strips everything that cannot be part of a number in `mode`.
///
/// In decimal mode the first `.` is the separator and later dots are dropped,
/// so `"10.5.2"` becomes `"10.52"`. Never fails; may return an empty string.
pub fn sanitize(input: &str, mode: NumericMode) -> String {
    match mode {
        NumericMode::Integer => input.chars().filter(char::is_ascii_digit).collect(),
        NumericMode::Decimal => {
            let mut out = String::with_capacity(input.len());
            let mut seen_dot = false;
            for c in input.chars() {
                if c.is_ascii_digit() {
                    out.push(c);
                } else if c == '.' && !seen_dot {
                    seen_dot = true;
                    out.push(c);
                }
            }
            out
        }
    }
}

/// Leading-number parse of a sanitized field; anything unparsable is zero.
pub fn parse_number(text: &str) -> f64 {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in text.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }
    text[..end].parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_mode() {
        assert_eq!(sanitize("1a2b3", NumericMode::Integer), "123");
        assert_eq!(sanitize("1.5", NumericMode::Integer), "15");
        assert_eq!(sanitize("abc", NumericMode::Integer), "");
    }

    #[test]
    fn test_decimal_mode_collapses_dots() {
        assert_eq!(sanitize("12.3.4.5", NumericMode::Decimal), "12.345");
        assert_eq!(sanitize("10.5.2", NumericMode::Decimal), "10.52");
        assert_eq!(sanitize("$1,000.50", NumericMode::Decimal), "1000.50");
        assert_eq!(sanitize("..", NumericMode::Decimal), ".");
    }

    #[test]
    fn test_non_ascii_digits_are_stripped() {
        assert_eq!(sanitize("١٢3", NumericMode::Integer), "3");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1000"), 1000.0);
        assert_eq!(parse_number("12.5"), 12.5);
        assert_eq!(parse_number("12."), 12.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("7kg"), 7.0);
    }
}
