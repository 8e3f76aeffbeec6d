// ============================================================================
// Formatting
// Fixed, grouped and exponential rendering of the canonical value
// ============================================================================

use super::numeric_value::NumericValue;
use crate::canonical::Canonical;
use rust_decimal::{Decimal, RoundingStrategy};

impl NumericValue {
    /// Render with a fixed number of decimals, an explicit decimal-point
    /// string and a thousands separator (groups of three).
    ///
    /// Rounding is half-away-from-zero performed in decimal arithmetic, so
    /// values like `0.125` round the way a reader expects instead of
    /// following the nearest-binary artifact. Separators are caller-supplied;
    /// nothing here consults process locale. NaN and infinities render as
    /// their plain float forms, ungrouped.
    pub fn format(&self, decimals: u32, decimal_point: &str, thousands_separator: &str) -> String {
        let decimal = match self.value() {
            Canonical::Int(i) => Decimal::from(i),
            Canonical::Float(f) => {
                if !f.is_finite() {
                    return f.to_string();
                }
                // The shortest round-trip rendering carries the digits the
                // caller actually meant (2.345, not 2.3449999…), so rounding
                // happens on those.
                match f.to_string().parse::<Decimal>() {
                    Ok(d) => d,
                    Err(_) => return f.to_string(),
                }
            },
        };

        let rounded =
            decimal.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let rendered = rounded.abs().to_string();

        let (int_part, frac_part) = match rendered.split_once('.') {
            Some((i, f)) => (i, f),
            None => (rendered.as_str(), ""),
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&group_thousands(int_part, thousands_separator));
        if decimals > 0 {
            out.push_str(decimal_point);
            out.push_str(frac_part);
            for _ in frac_part.len()..decimals as usize {
                out.push('0');
            }
        }
        out
    }

    /// Fixed-point rendering: `.` decimal point, no grouping.
    pub fn to_fixed(&self, decimals: u32) -> String {
        self.format(decimals, ".", "")
    }

    /// Exponential rendering with the given mantissa precision.
    pub fn to_exponential(&self, decimals: u32) -> String {
        format!("{:.*e}", decimals as usize, self.as_f64())
    }
}

/// Insert the separator between groups of three digits, right to left.
fn group_thousands(digits: &str, separator: &str) -> String {
    if separator.is_empty() || digits.len() <= 3 {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + separator.len() * (digits.len() / 3));
    let lead = digits.len() % 3;
    if lead > 0 {
        out.push_str(&digits[..lead]);
    }
    for (i, chunk) in digits.as_bytes()[lead..].chunks(3).enumerate() {
        if i > 0 || lead > 0 {
            out.push_str(separator);
        }
        // Chunks of an ASCII digit string are valid UTF-8.
        out.push_str(std::str::from_utf8(chunk).unwrap_or_default());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_groups_thousands() {
        let v = NumericValue::from(1234567i64);
        assert_eq!(v.format(0, ".", ","), "1,234,567");
        assert_eq!(v.format(2, ".", ","), "1,234,567.00");
        assert_eq!(v.format(0, ".", " "), "1 234 567");
        assert_eq!(v.format(0, ".", ""), "1234567");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(NumericValue::from(0.125).to_fixed(2), "0.13");
        assert_eq!(NumericValue::from(2.345).format(2, ",", "."), "2,35");
        assert_eq!(NumericValue::from(-1234.5).format(0, ".", ","), "-1,235");
    }

    #[test]
    fn test_format_pads_decimals() {
        assert_eq!(NumericValue::from(2.5).to_fixed(3), "2.500");
        assert_eq!(NumericValue::from(42i64).to_fixed(2), "42.00");
    }

    #[test]
    fn test_format_small_numbers() {
        assert_eq!(NumericValue::from(7i64).format(0, ".", ","), "7");
        assert_eq!(NumericValue::from(999i64).format(0, ".", ","), "999");
        assert_eq!(NumericValue::from(1000i64).format(0, ".", ","), "1,000");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(NumericValue::from(f64::NAN).format(2, ".", ","), "NaN");
        assert_eq!(NumericValue::from(f64::INFINITY).format(2, ".", ","), "inf");
    }

    #[test]
    fn test_to_exponential() {
        assert_eq!(NumericValue::from(255i64).to_exponential(2), "2.55e2");
        assert_eq!(NumericValue::from(0.001).to_exponential(1), "1.0e-3");
    }
}
