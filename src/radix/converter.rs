// ============================================================================
// Base Converter
// Maps a classified string plus its radix to the canonical decimal value
// ============================================================================

use super::detector::{classify, digit_value, is_base, Classification};
use crate::canonical::Canonical;
use crate::error::{NumericError, NumericResult};
use smallvec::SmallVec;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Convert a numeric string to its canonical decimal value.
///
/// With `radix = None` the base is auto-detected using the fixed precedence
/// hex → binary → octal → decimal. With an explicit radix (2–36) the string
/// is validated in full before conversion; a half-valid string is never
/// partially converted. A canonical prefix matching the radix (`0x` for 16,
/// `0b` for 2, `0o` for 8) is accepted and stripped.
///
/// # Errors
/// - `EmptyInput` for the empty string
/// - `InvalidFormat` when no format matches (auto) or a character is not a
///   valid digit for the radix (explicit)
/// - `RadixOutOfRange` for a radix outside [2, 36]
pub fn convert_base(value: &str, radix: Option<u32>) -> NumericResult<Canonical> {
    match radix {
        None => convert_auto(value),
        Some(radix) => convert_radix(value, radix),
    }
}

fn convert_auto(value: &str) -> NumericResult<Canonical> {
    if value.is_empty() {
        return Err(NumericError::EmptyInput);
    }

    let classification = classify(value);
    tracing::trace!(input = value, ?classification, "auto-detecting base");

    match classification {
        Classification::Hex(payload) => fold_digits(value, payload, 16),
        Classification::Binary(payload) => fold_digits(value, payload, 2),
        Classification::OctalModern(payload) | Classification::OctalTraditional(payload) => {
            fold_digits(value, payload, 8)
        },
        Classification::Decimal(literal) => parse_plain_decimal(literal),
        Classification::Scientific(literal) => parse_scientific(literal),
        Classification::Invalid => Err(NumericError::InvalidFormat {
            input: value.to_string(),
        }),
    }
}

fn convert_radix(value: &str, radix: u32) -> NumericResult<Canonical> {
    if !(2..=36).contains(&radix) {
        return Err(NumericError::RadixOutOfRange { radix });
    }
    if value.is_empty() {
        return Err(NumericError::EmptyInput);
    }

    let payload = strip_radix_prefix(value, radix);
    if !is_base(payload, radix)? {
        return Err(NumericError::InvalidFormat {
            input: value.to_string(),
        });
    }
    fold_digits(value, payload, radix)
}

/// Strip the canonical prefix when it matches the requested radix.
fn strip_radix_prefix(value: &str, radix: u32) -> &str {
    let stripped = match radix {
        16 => value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")),
        2 => value.strip_prefix("0b").or_else(|| value.strip_prefix("0B")),
        8 => value.strip_prefix("0o").or_else(|| value.strip_prefix("0O")),
        _ => None,
    };
    stripped.unwrap_or(value)
}

/// Positional digit-weighted fold. Stays in i64 while the magnitude fits the
/// native word and continues in f64 past it (no big-integer support).
fn fold_digits(original: &str, payload: &str, radix: u32) -> NumericResult<Canonical> {
    let mut int_acc: i64 = 0;
    let mut float_acc: f64 = 0.0;
    let mut spilled = false;

    for byte in payload.bytes() {
        let digit = digit_value(byte)
            .filter(|d| *d < radix)
            .ok_or_else(|| NumericError::InvalidFormat {
                input: original.to_string(),
            })?;

        if !spilled {
            match int_acc
                .checked_mul(radix as i64)
                .and_then(|v| v.checked_add(digit as i64))
            {
                Some(next) => {
                    int_acc = next;
                    continue;
                },
                None => {
                    spilled = true;
                    float_acc = int_acc as f64;
                },
            }
        }
        float_acc = float_acc * radix as f64 + digit as f64;
    }

    if spilled {
        Ok(Canonical::Float(float_acc))
    } else {
        Ok(Canonical::Int(int_acc))
    }
}

/// Plain decimal literal (no exponent): integer-typed unless it carries a
/// decimal point; magnitudes past i64 spill to float.
fn parse_plain_decimal(literal: &str) -> NumericResult<Canonical> {
    if literal.contains('.') {
        return parse_float_literal(literal);
    }
    match literal.parse::<i64>() {
        Ok(int) => Ok(Canonical::Int(int)),
        Err(_) => parse_float_literal(literal),
    }
}

/// Scientific notation always lands on the float path, even when the
/// magnitude is whole: `"1e3"` is 1000.0, not integer 1000.
fn parse_scientific(literal: &str) -> NumericResult<Canonical> {
    parse_float_literal(literal)
}

/// The literal has already passed the ASCII-only decimal grammar, so this
/// never consults locale state: `f64` parsing in Rust is locale-independent
/// by definition, and the grammar forbids anything but digits, `.`, `e`/`E`
/// and signs.
fn parse_float_literal(literal: &str) -> NumericResult<Canonical> {
    literal
        .parse::<f64>()
        .map(Canonical::Float)
        .map_err(|_| NumericError::InvalidFormat {
            input: literal.to_string(),
        })
}

/// Render a non-negative integer in the given radix, lowercase, unprefixed.
///
/// # Errors
/// - `RadixOutOfRange` outside [2, 36]
/// - `NegativeDomain` for negative input
pub fn to_base(value: i64, radix: u32) -> NumericResult<String> {
    if !(2..=36).contains(&radix) {
        return Err(NumericError::RadixOutOfRange { radix });
    }
    if value < 0 {
        return Err(NumericError::NegativeDomain {
            operation: "base conversion",
        });
    }
    if value == 0 {
        return Ok("0".to_string());
    }

    let mut digits: SmallVec<[u8; 64]> = SmallVec::new();
    let mut remaining = value as u64;
    let radix = radix as u64;
    while remaining > 0 {
        digits.push(DIGITS[(remaining % radix) as usize]);
        remaining /= radix;
    }
    digits.reverse();
    // Digits come from the ASCII table above, always valid UTF-8.
    Ok(String::from_utf8_lossy(&digits).into_owned())
}

/// Hexadecimal rendering of a non-negative integer (no `0x` prefix).
#[inline]
pub fn to_hex(value: i64) -> NumericResult<String> {
    to_base(value, 16)
}

/// Octal rendering of a non-negative integer (no `0o` prefix).
#[inline]
pub fn to_octal(value: i64) -> NumericResult<String> {
    to_base(value, 8)
}

/// Binary rendering of a non-negative integer (no `0b` prefix).
#[inline]
pub fn to_binary(value: i64) -> NumericResult<String> {
    to_base(value, 2)
}
