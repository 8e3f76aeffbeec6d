// ============================================================================
// Numeric Value Library
// Locale-independent parsing, base conversion and arithmetic
// ============================================================================

//! # numeric-value
//!
//! A locale-independent numeric value abstraction: strict base detection
//! and conversion for hexadecimal, binary, octal (traditional and modern),
//! decimal and scientific notation, a single normalization funnel from any
//! accepted input shape to a canonical {integer | float}, and an immutable
//! [`NumericValue`] exposing arithmetic, statistics and formatting on top.
//!
//! ## Features
//!
//! - **Deterministic base detection** with fixed precedence
//!   (hex → binary → octal → decimal) and zero false positives
//! - **Strict and lenient normalization**: raise a typed error, or pass
//!   the original input through unchanged
//! - **Locale independence by construction**: parsing accepts only ASCII
//!   digits, `.`, `e`/`E` and signs; no global locale state is ever touched,
//!   so concurrent use is safe without serialization
//! - **Immutable values**: every operation returns a new instance
//!
//! ## Example
//!
//! ```rust
//! use numeric_value::prelude::*;
//!
//! let v = NumericValue::new("0xFF")?;
//! assert_eq!(v.as_i64(), Some(255));
//!
//! // Scientific notation always lands on the float path.
//! let e = NumericValue::new("1e3")?;
//! assert!(!e.is_integer());
//! assert_eq!(e.as_f64(), 1000.0);
//!
//! // Lenient preview passes unconvertible input through unchanged.
//! assert_eq!(convert_value(" 42"), Input::Str(" 42".to_string()));
//!
//! // Arithmetic normalizes its operands through the same funnel.
//! let total = v.add("0b1")?.multiply(2)?;
//! assert_eq!(total.as_i64(), Some(512));
//! # Ok::<(), NumericError>(())
//! ```

pub mod canonical;
pub mod error;
pub mod normalize;
pub mod radix;
pub mod value;

pub use canonical::Canonical;
pub use error::{NumericError, NumericResult};
pub use normalize::{convert_to_number, convert_value, Input};
pub use value::NumericValue;

// Re-exports for convenience
pub mod prelude {
    pub use crate::canonical::Canonical;
    pub use crate::error::{NumericError, NumericResult};
    pub use crate::normalize::{convert_to_number, convert_value, try_normalize, Input};
    pub use crate::radix::{
        classify, convert_base, is_base, is_binary, is_hex, is_octal, to_base, Classification,
    };
    pub use crate::value::stats;
    pub use crate::value::NumericValue;
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::NumericValue;

    #[test]
    fn test_value_round_trips_through_json() {
        let v = NumericValue::new("0xFF").unwrap();
        let json = serde_json::to_string(&v).unwrap();
        let back: NumericValue = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);

        let f = NumericValue::new("1e3").unwrap();
        let json = serde_json::to_string(&f).unwrap();
        let back: NumericValue = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }
}
