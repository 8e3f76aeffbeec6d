// ============================================================================
// Canonical Value
// The normalized {integer | float} representation all stages agree on
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The canonical numeric representation.
///
/// Every stage of the pipeline (detector → converter → normalizer → value)
/// produces or consumes exactly this. Invariant: a magnitude with no
/// fractional part that was not produced by an explicitly float-producing
/// operation (division, sqrt, scientific-notation parse) is `Int`. NaN and
/// ±infinity are valid `Float` states and never integers.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Canonical {
    Int(i64),
    Float(f64),
}

impl Canonical {
    /// Numeric magnitude as f64, regardless of representation.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Canonical::Int(i) => i as f64,
            Canonical::Float(f) => f,
        }
    }

    /// The underlying integer, only when stored as an integer.
    #[inline]
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Canonical::Int(i) => Some(i),
            Canonical::Float(_) => None,
        }
    }

    /// Representation check: stored as an integer.
    #[inline]
    pub fn is_int(self) -> bool {
        matches!(self, Canonical::Int(_))
    }

    /// Representation check: stored as a float.
    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, Canonical::Float(_))
    }

    /// Mathematical wholeness: an integer, or a finite float with zero
    /// fractional part. Distinct from the representation check.
    #[inline]
    pub fn is_whole(self) -> bool {
        match self {
            Canonical::Int(_) => true,
            Canonical::Float(f) => f.is_finite() && f.fract() == 0.0,
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Canonical::Int(i) => i == 0,
            Canonical::Float(f) => f == 0.0,
        }
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        match self {
            Canonical::Int(i) => i < 0,
            Canonical::Float(f) => f < 0.0,
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        match self {
            Canonical::Int(i) => i > 0,
            Canonical::Float(f) => f > 0.0,
        }
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        matches!(self, Canonical::Float(f) if f.is_nan())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        match self {
            Canonical::Int(_) => true,
            Canonical::Float(f) => f.is_finite(),
        }
    }

    /// Loose equality: compares numeric magnitude across representations,
    /// so `Int(2)` equals `Float(2.0)`. NaN compares unequal to everything.
    #[inline]
    pub fn loose_eq(self, other: Canonical) -> bool {
        self.as_f64() == other.as_f64()
    }

    /// Strict equality: magnitude AND representation must match.
    #[inline]
    pub fn strict_eq(self, other: Canonical) -> bool {
        match (self, other) {
            (Canonical::Int(a), Canonical::Int(b)) => a == b,
            (Canonical::Float(a), Canonical::Float(b)) => a == b,
            _ => false,
        }
    }
}

// PartialEq follows strict semantics; loose comparison is an explicit call.
impl PartialEq for Canonical {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(*other)
    }
}

impl PartialOrd for Canonical {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.as_f64().partial_cmp(&other.as_f64())
    }
}

impl From<i64> for Canonical {
    #[inline]
    fn from(value: i64) -> Self {
        Canonical::Int(value)
    }
}

impl From<f64> for Canonical {
    #[inline]
    fn from(value: f64) -> Self {
        Canonical::Float(value)
    }
}

impl fmt::Display for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Canonical::Int(i) => write!(f, "{}", i),
            Canonical::Float(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wholeness_vs_representation() {
        assert!(Canonical::Int(5).is_whole());
        assert!(Canonical::Float(5.0).is_whole());
        assert!(!Canonical::Float(5.5).is_whole());

        assert!(Canonical::Int(5).is_int());
        assert!(!Canonical::Float(5.0).is_int());
    }

    #[test]
    fn test_nan_and_infinity_are_floats_not_whole() {
        assert!(!Canonical::Float(f64::NAN).is_whole());
        assert!(!Canonical::Float(f64::INFINITY).is_whole());
        assert!(Canonical::Float(f64::NAN).is_nan());
        assert!(!Canonical::Float(f64::INFINITY).is_finite());
    }

    #[test]
    fn test_loose_vs_strict_equality() {
        assert!(Canonical::Int(2).loose_eq(Canonical::Float(2.0)));
        assert!(!Canonical::Int(2).strict_eq(Canonical::Float(2.0)));
        assert_ne!(Canonical::Int(2), Canonical::Float(2.0));
        assert_eq!(Canonical::Int(2), Canonical::Int(2));
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Canonical::Int(-1).is_negative());
        assert!(Canonical::Float(0.5).is_positive());
        assert!(Canonical::Int(0).is_zero());
        assert!(Canonical::Float(0.0).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Canonical::Int(255).to_string(), "255");
        assert_eq!(Canonical::Float(2.5).to_string(), "2.5");
        assert_eq!(Canonical::Float(1000.0).to_string(), "1000");
    }
}
