// ============================================================================
// Normalizer
// The single funnel from any accepted input shape to the canonical value
// ============================================================================
//
// Two public policies over one internal routine:
// - convert_to_number: strict, every failure is raised
// - convert_value: lenient, failures pass the original input through
//
// The strict constructor (`NumericValue::new`) uses the same funnel, so a
// string accepted anywhere is accepted everywhere.

mod input;

pub use input::Input;

use crate::canonical::Canonical;
use crate::error::{NumericError, NumericResult};
use crate::radix;

/// Normalize any accepted input shape into the canonical value.
///
/// Coercion policy: booleans become 1/0, null becomes 0, numeric primitives
/// pass through, an already-canonical value is unwrapped. Unsupported shapes
/// are rejected here: the constructor path never substitutes 0 for a value
/// it cannot interpret, so programmer errors stay visible.
pub fn try_normalize(input: &Input) -> NumericResult<Canonical> {
    match input {
        Input::Str(s) => normalize_str(s),
        Input::Int(i) => Ok(Canonical::Int(*i)),
        Input::Float(f) => Ok(Canonical::Float(*f)),
        Input::Bool(b) => Ok(Canonical::Int(if *b { 1 } else { 0 })),
        Input::Null => Ok(Canonical::Int(0)),
        Input::Value(v) => Ok(v.value()),
        Input::Unsupported(tag) => Err(NumericError::UnsupportedType {
            type_name: tag.to_string(),
        }),
    }
}

/// Strict conversion: always a numeric primitive, or a typed error.
pub fn convert_to_number(input: impl Into<Input>) -> NumericResult<Canonical> {
    let input = input.into();
    match try_normalize(&input) {
        Ok(canonical) => {
            tracing::trace!(?input, ?canonical, "normalized");
            Ok(canonical)
        },
        Err(err) => {
            tracing::debug!(?input, %err, "strict normalization failed");
            Err(err)
        },
    }
}

/// Lenient preview: the original input is returned unchanged whenever it
/// cannot be converted. This is the only place failures are suppressed.
///
/// Whitespace-padded strings are always passed through unchanged; the
/// parser never guesses intent around padding, so `" 42"` stays `" 42"`.
pub fn convert_value(input: impl Into<Input>) -> Input {
    let input = input.into();
    match try_normalize(&input) {
        Ok(canonical) => Input::from(canonical),
        Err(err) => {
            tracing::debug!(?input, %err, "lenient conversion passing input through");
            input
        },
    }
}

/// String policy, checked in order: empty, whitespace padding, then the
/// detector/converter pipeline. Scientific notation lands on the float path
/// even for whole magnitudes; plain decimals are integer-typed unless they
/// carry a decimal point.
fn normalize_str(s: &str) -> NumericResult<Canonical> {
    if s.is_empty() {
        return Err(NumericError::EmptyInput);
    }
    if s.trim() != s {
        return Err(NumericError::WhitespaceRejected {
            input: s.to_string(),
        });
    }
    radix::convert_base(s, None)
}
