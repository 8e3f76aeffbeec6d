// ============================================================================
// Value Module
// The consumer-facing NumericValue and its statistics/formatting surface
// ============================================================================
//
// This module provides:
// - NumericValue: immutable wrapper over the canonical value with the
//   arithmetic, predicate, comparison and rendering surface
// - stats: mean / median / mode / standard_deviation / midrange over
//   sequences of anything the normalizer accepts
// - format / random: display and RNG conveniences on NumericValue

mod format;
mod numeric_value;
mod random;
pub mod stats;

pub use numeric_value::NumericValue;
