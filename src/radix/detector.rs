// ============================================================================
// Base Detector
// Classifies a string as hex / binary / octal / decimal / scientific
// ============================================================================

use crate::error::{NumericError, NumericResult};

/// Result of classifying one input string.
///
/// Prefix-qualified variants carry the payload with the prefix already
/// stripped (`Hex("FF")` for `"0xFF"`). Decimal and scientific carry the
/// whole literal. Computed on demand per call; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    Hex(&'a str),
    Binary(&'a str),
    OctalModern(&'a str),
    OctalTraditional(&'a str),
    Decimal(&'a str),
    Scientific(&'a str),
    Invalid,
}

impl<'a> Classification<'a> {
    /// The fixed radix implied by a prefix-qualified classification.
    #[inline]
    pub fn radix(&self) -> Option<u32> {
        match self {
            Classification::Hex(_) => Some(16),
            Classification::Binary(_) => Some(2),
            Classification::OctalModern(_) | Classification::OctalTraditional(_) => Some(8),
            _ => None,
        }
    }
}

/// Classify a string using the fixed auto-detection precedence:
/// hex → binary → octal → decimal.
///
/// Each check is all-or-nothing, so a string matching one format can never
/// simultaneously be treated as another. Strings that match nothing (e.g.
/// contain alphabetic characters with no recognized prefix) are `Invalid`,
/// never silently decimal.
pub fn classify(value: &str) -> Classification<'_> {
    if let Some(payload) = hex_payload(value) {
        return Classification::Hex(payload);
    }
    if let Some(payload) = binary_payload(value) {
        return Classification::Binary(payload);
    }
    if let Some(payload) = octal_modern_payload(value) {
        return Classification::OctalModern(payload);
    }
    if let Some(payload) = octal_traditional_payload(value) {
        return Classification::OctalTraditional(payload);
    }
    if is_decimal_shaped(value) {
        if value.contains(['e', 'E']) {
            return Classification::Scientific(value);
        }
        return Classification::Decimal(value);
    }
    Classification::Invalid
}

/// `0x`/`0X` followed by one or more hex digits. Empty remainder is not hex.
#[inline]
pub fn is_hex(value: &str) -> bool {
    hex_payload(value).is_some()
}

/// `0b`/`0B` followed by one or more of `0`/`1`. Empty remainder is not binary.
#[inline]
pub fn is_binary(value: &str) -> bool {
    binary_payload(value).is_some()
}

/// Octal in either notation: modern `0o17` or traditional `017`.
///
/// Traditional octal requires exactly one leading zero: `"0123"` is octal but
/// `"000123"` has multiple leading zeros and reads as decimal instead.
#[inline]
pub fn is_octal(value: &str) -> bool {
    octal_modern_payload(value).is_some() || octal_traditional_payload(value).is_some()
}

/// Check that every character of `value` is a valid digit for `radix`.
///
/// Valid characters are the first `radix` entries of `0-9` then `A-Z`,
/// case-insensitive. The empty string is always invalid.
///
/// # Errors
/// `RadixOutOfRange` when `radix` is outside [2, 36], a programming error
/// raised before any characters are examined.
pub fn is_base(value: &str, radix: u32) -> NumericResult<bool> {
    if !(2..=36).contains(&radix) {
        return Err(NumericError::RadixOutOfRange { radix });
    }
    if value.is_empty() {
        return Ok(false);
    }
    Ok(value.bytes().all(|b| digit_value(b).is_some_and(|d| d < radix)))
}

/// Digit value of an ASCII byte in the 0-9, A-Z (case-insensitive) alphabet.
#[inline]
pub(crate) fn digit_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some((b - b'0') as u32),
        b'a'..=b'z' => Some((b - b'a') as u32 + 10),
        b'A'..=b'Z' => Some((b - b'A') as u32 + 10),
        _ => None,
    }
}

fn hex_payload(value: &str) -> Option<&str> {
    let payload = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X"))?;
    if !payload.is_empty() && payload.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(payload)
    } else {
        None
    }
}

fn binary_payload(value: &str) -> Option<&str> {
    let payload = value.strip_prefix("0b").or_else(|| value.strip_prefix("0B"))?;
    if !payload.is_empty() && payload.bytes().all(|b| b == b'0' || b == b'1') {
        Some(payload)
    } else {
        None
    }
}

fn octal_modern_payload(value: &str) -> Option<&str> {
    let payload = value.strip_prefix("0o").or_else(|| value.strip_prefix("0O"))?;
    if !payload.is_empty() && payload.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
        Some(payload)
    } else {
        None
    }
}

/// Single leading zero, length > 1, octal-digit remainder. A second leading
/// zero disqualifies the string: `00123` is decimal, not octal.
fn octal_traditional_payload(value: &str) -> Option<&str> {
    let payload = value.strip_prefix('0')?;
    if payload.is_empty() || payload.starts_with('0') {
        return None;
    }
    if payload.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
        Some(payload)
    } else {
        None
    }
}

/// Standard decimal literal grammar: optional sign, ASCII digits, at most one
/// decimal point, optional `e`/`E` exponent with its own optional sign. The
/// decimal point is always `.`, never a locale-specific separator.
pub(crate) fn is_decimal_shaped(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let mut mantissa_digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let mut exponent_digits = 0;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            exponent_digits += 1;
        }
        if exponent_digits == 0 {
            return false;
        }
    }

    i == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_detection() {
        assert!(is_hex("0xFF"));
        assert!(is_hex("0XdeadBEEF"));
        assert!(is_hex("0x0"));
        assert!(!is_hex("0x"));
        assert!(!is_hex("FF"));
        assert!(!is_hex("0xGG"));
        assert!(!is_hex("0x1.5"));
    }

    #[test]
    fn test_binary_detection() {
        assert!(is_binary("0b1010"));
        assert!(is_binary("0B0"));
        assert!(!is_binary("0b"));
        assert!(!is_binary("0b102"));
        assert!(!is_binary("1010"));
    }

    #[test]
    fn test_octal_detection() {
        assert!(is_octal("0123"));
        assert!(is_octal("0o17"));
        assert!(is_octal("0O7"));
        assert!(!is_octal("0o"));
        assert!(!is_octal("0"));
        assert!(!is_octal("0128"));
        assert!(!is_octal("123"));
    }

    #[test]
    fn test_octal_multiple_leading_zeros_is_decimal() {
        assert!(!is_octal("000123"));
        assert!(!is_octal("00123"));
        assert!(is_octal("0123"));
        assert_eq!(classify("000123"), Classification::Decimal("000123"));
        assert_eq!(classify("0123"), Classification::OctalTraditional("123"));
    }

    #[test]
    fn test_formats_are_mutually_exclusive() {
        // A hex string must never also satisfy the octal or binary checks.
        for s in ["0xFF", "0x1A", "0x0"] {
            assert!(is_hex(s));
            assert!(!is_octal(s));
            assert!(!is_binary(s));
        }
        // 0b... binary beats traditional octal's leading-zero rule.
        assert_eq!(classify("0b101"), Classification::Binary("101"));
        assert!(!is_octal("0b101"));
    }

    #[test]
    fn test_classify_precedence() {
        assert_eq!(classify("0xFF"), Classification::Hex("FF"));
        assert_eq!(classify("0b1010"), Classification::Binary("1010"));
        assert_eq!(classify("0o17"), Classification::OctalModern("17"));
        assert_eq!(classify("017"), Classification::OctalTraditional("17"));
        assert_eq!(classify("123"), Classification::Decimal("123"));
        assert_eq!(classify("1e3"), Classification::Scientific("1e3"));
        assert_eq!(classify("123abc"), Classification::Invalid);
    }

    #[test]
    fn test_decimal_grammar() {
        assert!(is_decimal_shaped("123"));
        assert!(is_decimal_shaped("-123"));
        assert!(is_decimal_shaped("+1.5"));
        assert!(is_decimal_shaped(".5"));
        assert!(is_decimal_shaped("5."));
        assert!(is_decimal_shaped("1e10"));
        assert!(is_decimal_shaped("1.5E-3"));
        assert!(!is_decimal_shaped(""));
        assert!(!is_decimal_shaped("."));
        assert!(!is_decimal_shaped("+"));
        assert!(!is_decimal_shaped("1.2.3"));
        assert!(!is_decimal_shaped("1e"));
        assert!(!is_decimal_shaped("1e+"));
        assert!(!is_decimal_shaped("1,5"));
        assert!(!is_decimal_shaped(" 1"));
    }

    #[test]
    fn test_scientific_vs_decimal() {
        assert_eq!(classify("1e3"), Classification::Scientific("1e3"));
        assert_eq!(classify("1.5E-3"), Classification::Scientific("1.5E-3"));
        assert_eq!(classify("1.5"), Classification::Decimal("1.5"));
        // 0e5 is decimal-shaped with an exponent, not traditional octal.
        assert_eq!(classify("0e5"), Classification::Scientific("0e5"));
    }

    #[test]
    fn test_alphabetic_without_prefix_is_invalid() {
        assert_eq!(classify("abc"), Classification::Invalid);
        assert_eq!(classify("123abc"), Classification::Invalid);
        assert_eq!(classify("0b12"), Classification::Invalid);
        assert_eq!(classify("0xZZ"), Classification::Invalid);
    }

    #[test]
    fn test_is_base() {
        assert_eq!(is_base("FF", 16), Ok(true));
        assert_eq!(is_base("ff", 16), Ok(true));
        assert_eq!(is_base("G1", 16), Ok(false));
        assert_eq!(is_base("777", 8), Ok(true));
        assert_eq!(is_base("778", 8), Ok(false));
        assert_eq!(is_base("Z", 36), Ok(true));
        assert_eq!(is_base("z", 36), Ok(true));
        assert_eq!(is_base("", 10), Ok(false));
        assert_eq!(is_base("-1", 10), Ok(false));
    }

    #[test]
    fn test_is_base_radix_out_of_range() {
        assert_eq!(
            is_base("1", 1),
            Err(NumericError::RadixOutOfRange { radix: 1 })
        );
        assert_eq!(
            is_base("1", 37),
            Err(NumericError::RadixOutOfRange { radix: 37 })
        );
        assert_eq!(
            is_base("", 0),
            Err(NumericError::RadixOutOfRange { radix: 0 })
        );
    }
}
