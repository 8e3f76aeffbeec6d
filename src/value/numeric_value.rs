// ============================================================================
// Numeric Value
// Immutable holder of the canonical value and its operation surface
// ============================================================================

use crate::canonical::Canonical;
use crate::error::{NumericError, NumericResult};
use crate::normalize::{self, Input};
use crate::radix;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable numeric value over the canonical {integer | float}
/// representation.
///
/// Every producing operation normalizes its operand through the same funnel
/// the constructor uses, applies the underlying primitive operation and
/// returns a new instance; no instance changes after construction.
///
/// Integer operands keep integer results where the operation allows it;
/// division, roots and scientific-notation input always produce floats.
/// Integer arithmetic that overflows the native word spills to float rather
/// than failing (no big-integer support).
///
/// # Example
/// ```
/// use numeric_value::NumericValue;
///
/// let v = NumericValue::new("0xFF")?;
/// assert_eq!(v.as_i64(), Some(255));
/// let sum = v.add(1)?;
/// assert_eq!(sum.as_i64(), Some(256));
/// # Ok::<(), numeric_value::NumericError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumericValue {
    value: Canonical,
}

impl NumericValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Strict construction from any accepted input shape.
    ///
    /// # Errors
    /// Any normalization failure: `InvalidFormat`, `EmptyInput`,
    /// `WhitespaceRejected`, `UnsupportedType`.
    pub fn new(input: impl Into<Input>) -> NumericResult<Self> {
        normalize::convert_to_number(input).map(Self::from_canonical)
    }

    /// Wrap an already-canonical value.
    #[inline]
    pub fn from_canonical(value: Canonical) -> Self {
        Self { value }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The canonical value.
    #[inline]
    pub fn value(&self) -> Canonical {
        self.value
    }

    /// Magnitude as f64 regardless of representation.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.value.as_f64()
    }

    /// The underlying integer, only when stored as an integer.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_i64()
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// Representation check: stored as an integer. A float with zero
    /// fractional part is NOT integer-typed; see [`check_integer`] for
    /// mathematical wholeness.
    ///
    /// [`check_integer`]: NumericValue::check_integer
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.value.is_int()
    }

    /// Representation check: stored as a float.
    #[inline]
    pub fn is_float(&self) -> bool {
        self.value.is_float()
    }

    /// Mathematical wholeness: true for `Int(5)` and `Float(5.0)` alike,
    /// false for fractional, NaN or infinite values.
    #[inline]
    pub fn check_integer(&self) -> bool {
        self.value.is_whole()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.value.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Loose equality: numeric magnitude only, so `2` equals `2.0`.
    ///
    /// # Errors
    /// Propagates normalization failures of the operand.
    pub fn equals(&self, other: impl Into<Input>) -> NumericResult<bool> {
        let other = normalize::convert_to_number(other)?;
        Ok(self.value.loose_eq(other))
    }

    /// Strict equality: magnitude AND representation, so `2` does not equal
    /// `2.0`.
    pub fn strictly_equals(&self, other: impl Into<Input>) -> NumericResult<bool> {
        let other = normalize::convert_to_number(other)?;
        Ok(self.value.strict_eq(other))
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Addition. Integer + integer stays integer (spilling to float past the
    /// native word); any float operand produces a float.
    pub fn add(&self, other: impl Into<Input>) -> NumericResult<Self> {
        let rhs = normalize::convert_to_number(other)?;
        Ok(Self::from_canonical(int_preserving_op(
            self.value,
            rhs,
            i64::checked_add,
            |a, b| a + b,
        )))
    }

    /// Subtraction, with the same typing rules as [`add`](NumericValue::add).
    pub fn subtract(&self, other: impl Into<Input>) -> NumericResult<Self> {
        let rhs = normalize::convert_to_number(other)?;
        Ok(Self::from_canonical(int_preserving_op(
            self.value,
            rhs,
            i64::checked_sub,
            |a, b| a - b,
        )))
    }

    /// Multiplication, with the same typing rules as [`add`](NumericValue::add).
    pub fn multiply(&self, other: impl Into<Input>) -> NumericResult<Self> {
        let rhs = normalize::convert_to_number(other)?;
        Ok(Self::from_canonical(int_preserving_op(
            self.value,
            rhs,
            i64::checked_mul,
            |a, b| a * b,
        )))
    }

    /// Division always produces a float.
    ///
    /// # Errors
    /// `DivisionByZero` when the normalized operand is zero, never a silent
    /// NaN or infinity.
    pub fn divide(&self, other: impl Into<Input>) -> NumericResult<Self> {
        let rhs = normalize::convert_to_number(other)?;
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero {
                operation: "division",
            });
        }
        Ok(Self::from_canonical(Canonical::Float(
            self.as_f64() / rhs.as_f64(),
        )))
    }

    /// Remainder. Integer % integer stays integer; any float operand
    /// produces a float.
    ///
    /// # Errors
    /// `DivisionByZero` when the normalized operand is zero.
    pub fn modulo(&self, other: impl Into<Input>) -> NumericResult<Self> {
        let rhs = normalize::convert_to_number(other)?;
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero { operation: "modulo" });
        }
        Ok(Self::from_canonical(int_preserving_op(
            self.value,
            rhs,
            i64::checked_rem,
            |a, b| a % b,
        )))
    }

    /// Exponentiation. Integer base with non-negative integer exponent stays
    /// integer (spilling to float on overflow); everything else is a float.
    pub fn power(&self, exponent: impl Into<Input>) -> NumericResult<Self> {
        let exp = normalize::convert_to_number(exponent)?;
        let result = match (self.value, exp) {
            (Canonical::Int(base), Canonical::Int(e)) if e >= 0 => u32::try_from(e)
                .ok()
                .and_then(|e| base.checked_pow(e))
                .map(Canonical::Int)
                .unwrap_or_else(|| Canonical::Float((base as f64).powf(e as f64))),
            _ => Canonical::Float(self.as_f64().powf(exp.as_f64())),
        };
        Ok(Self::from_canonical(result))
    }

    /// What percentage of `other` this value is: `self / other * 100`.
    ///
    /// # Errors
    /// `DivisionByZero` when the normalized operand is zero.
    pub fn percentage_of(&self, other: impl Into<Input>) -> NumericResult<Self> {
        let rhs = normalize::convert_to_number(other)?;
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero {
                operation: "percentage-of",
            });
        }
        Ok(Self::from_canonical(Canonical::Float(
            self.as_f64() / rhs.as_f64() * 100.0,
        )))
    }

    /// Absolute value, representation-preserving (`|i64::MIN|` spills to
    /// float).
    pub fn abs(&self) -> Self {
        let result = match self.value {
            Canonical::Int(i) => i
                .checked_abs()
                .map(Canonical::Int)
                .unwrap_or_else(|| Canonical::Float(-(i as f64))),
            Canonical::Float(f) => Canonical::Float(f.abs()),
        };
        Self::from_canonical(result)
    }

    /// Negation, representation-preserving.
    pub fn negate(&self) -> Self {
        let result = match self.value {
            Canonical::Int(i) => i
                .checked_neg()
                .map(Canonical::Int)
                .unwrap_or_else(|| Canonical::Float(-(i as f64))),
            Canonical::Float(f) => Canonical::Float(-f),
        };
        Self::from_canonical(result)
    }

    // ========================================================================
    // Roots, Logarithms, Trigonometry
    // ========================================================================

    /// Square root, always a float. Negative input yields NaN, a valid float
    /// state.
    pub fn sqrt(&self) -> Self {
        Self::from_canonical(Canonical::Float(self.as_f64().sqrt()))
    }

    /// Cube root, always a float.
    pub fn cbrt(&self) -> Self {
        Self::from_canonical(Canonical::Float(self.as_f64().cbrt()))
    }

    /// Natural logarithm, always a float.
    pub fn ln(&self) -> Self {
        Self::from_canonical(Canonical::Float(self.as_f64().ln()))
    }

    /// Base-2 logarithm, always a float.
    pub fn log2(&self) -> Self {
        Self::from_canonical(Canonical::Float(self.as_f64().log2()))
    }

    /// Base-10 logarithm, always a float.
    pub fn log10(&self) -> Self {
        Self::from_canonical(Canonical::Float(self.as_f64().log10()))
    }

    /// Logarithm in an arbitrary base, always a float.
    pub fn log(&self, base: impl Into<Input>) -> NumericResult<Self> {
        let base = normalize::convert_to_number(base)?;
        Ok(Self::from_canonical(Canonical::Float(
            self.as_f64().log(base.as_f64()),
        )))
    }

    /// e^x, always a float.
    pub fn exp(&self) -> Self {
        Self::from_canonical(Canonical::Float(self.as_f64().exp()))
    }

    /// Sine (radians), always a float.
    pub fn sin(&self) -> Self {
        Self::from_canonical(Canonical::Float(self.as_f64().sin()))
    }

    /// Cosine (radians), always a float.
    pub fn cos(&self) -> Self {
        Self::from_canonical(Canonical::Float(self.as_f64().cos()))
    }

    /// Tangent (radians), always a float.
    pub fn tan(&self) -> Self {
        Self::from_canonical(Canonical::Float(self.as_f64().tan()))
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round half away from zero at `decimals` places. Integers are already
    /// exact and pass through unchanged; floats stay floats.
    pub fn round(&self, decimals: u32) -> Self {
        let result = match self.value {
            Canonical::Int(i) => Canonical::Int(i),
            Canonical::Float(f) => {
                let scale = 10f64.powi(decimals.min(f64::MAX_10_EXP as u32) as i32);
                let scaled = f * scale;
                // A magnitude that overflows the scaling has no fractional
                // part left at that many places; the value is already exact.
                if scaled.is_finite() {
                    Canonical::Float(scaled.round() / scale)
                } else {
                    Canonical::Float(f)
                }
            },
        };
        Self::from_canonical(result)
    }

    /// Smallest whole value ≥ self; representation-preserving.
    pub fn ceil(&self) -> Self {
        let result = match self.value {
            Canonical::Int(i) => Canonical::Int(i),
            Canonical::Float(f) => Canonical::Float(f.ceil()),
        };
        Self::from_canonical(result)
    }

    /// Largest whole value ≤ self; representation-preserving.
    pub fn floor(&self) -> Self {
        let result = match self.value {
            Canonical::Int(i) => Canonical::Int(i),
            Canonical::Float(f) => Canonical::Float(f.floor()),
        };
        Self::from_canonical(result)
    }

    /// Drop the fractional part, toward zero; representation-preserving.
    pub fn truncate(&self) -> Self {
        let result = match self.value {
            Canonical::Int(i) => Canonical::Int(i),
            Canonical::Float(f) => Canonical::Float(f.trunc()),
        };
        Self::from_canonical(result)
    }

    // ========================================================================
    // Domain-checked Operations
    // ========================================================================

    /// Factorial of the value's whole part (fractional magnitudes truncate
    /// toward zero first). Results past the native word spill to float.
    ///
    /// # Errors
    /// `NegativeDomain` for negative values.
    pub fn factorial(&self) -> NumericResult<Self> {
        if self.value.is_negative() {
            return Err(NumericError::NegativeDomain {
                operation: "factorial",
            });
        }
        let n = match self.value {
            Canonical::Int(i) => i as u64,
            Canonical::Float(f) => f.trunc() as u64,
        };

        let mut int_acc: i64 = 1;
        let mut float_acc: f64 = 1.0;
        let mut spilled = false;
        for k in 1..=n {
            if !spilled {
                match int_acc.checked_mul(k as i64) {
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
            float_acc *= k as f64;
        }

        Ok(Self::from_canonical(if spilled {
            Canonical::Float(float_acc)
        } else {
            Canonical::Int(int_acc)
        }))
    }

    /// The Fibonacci number at `position` (0-indexed: F(0)=0, F(1)=1).
    /// Positions past the native word spill to float.
    ///
    /// # Errors
    /// `NegativeDomain` for a negative position.
    pub fn fibonacci(position: i64) -> NumericResult<Self> {
        if position < 0 {
            return Err(NumericError::NegativeDomain {
                operation: "fibonacci position",
            });
        }

        let (mut a, mut b): (i64, i64) = (0, 1);
        let (mut fa, mut fb): (f64, f64) = (0.0, 1.0);
        let mut spilled = false;
        for _ in 0..position {
            if !spilled {
                match a.checked_add(b) {
                    Some(next) => {
                        a = b;
                        b = next;
                        continue;
                    },
                    None => {
                        spilled = true;
                        fa = a as f64;
                        fb = b as f64;
                    },
                }
            }
            let next = fa + fb;
            fa = fb;
            fb = next;
        }

        Ok(Self::from_canonical(if spilled {
            Canonical::Float(fa)
        } else {
            Canonical::Int(a)
        }))
    }

    // ========================================================================
    // Base Rendering
    // ========================================================================

    /// Render the value in the given radix (lowercase, unprefixed).
    ///
    /// # Errors
    /// - `InvalidFormat` when the magnitude is not mathematically whole, or
    ///   is a float too large for the native word to represent exactly
    /// - `NegativeDomain` for negative values
    /// - `RadixOutOfRange` outside [2, 36]
    pub fn to_base(&self, radix: u32) -> NumericResult<String> {
        let whole = self.whole_magnitude()?;
        radix::to_base(whole, radix)
    }

    /// Hexadecimal rendering, lowercase, unprefixed.
    pub fn to_hex(&self) -> NumericResult<String> {
        self.to_base(16)
    }

    /// Octal rendering, unprefixed.
    pub fn to_octal(&self) -> NumericResult<String> {
        self.to_base(8)
    }

    /// Binary rendering, unprefixed.
    pub fn to_binary(&self) -> NumericResult<String> {
        self.to_base(2)
    }

    fn whole_magnitude(&self) -> NumericResult<i64> {
        // 2^63 as f64. Whole floats at or past this bound do not fit the
        // native word and `as i64` would saturate instead of failing.
        const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
        match self.value {
            Canonical::Int(i) => Ok(i),
            Canonical::Float(f)
                if f.is_finite() && f.fract() == 0.0 && f >= -I64_BOUND && f < I64_BOUND =>
            {
                Ok(f as i64)
            },
            Canonical::Float(_) => Err(NumericError::InvalidFormat {
                input: self.to_string(),
            }),
        }
    }
}

/// Apply a binary operation, keeping the integer representation when both
/// operands are integers and the checked operation fits the native word.
fn int_preserving_op(
    lhs: Canonical,
    rhs: Canonical,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Canonical {
    match (lhs, rhs) {
        (Canonical::Int(a), Canonical::Int(b)) => int_op(a, b)
            .map(Canonical::Int)
            .unwrap_or_else(|| Canonical::Float(float_op(a as f64, b as f64))),
        _ => Canonical::Float(float_op(lhs.as_f64(), rhs.as_f64())),
    }
}

impl From<i64> for NumericValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_canonical(Canonical::Int(value))
    }
}

impl From<f64> for NumericValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::from_canonical(Canonical::Float(value))
    }
}

impl TryFrom<&str> for NumericValue {
    type Error = NumericError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::str::FromStr for NumericValue {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialOrd for NumericValue {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
