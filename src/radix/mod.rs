// ============================================================================
// Radix Module
// Base detection and conversion between numeral notations
// ============================================================================
//
// This module provides:
// - Classification: tagged result of auto-detecting a string's notation
// - is_hex / is_binary / is_octal / is_base: all-or-nothing format checks
// - convert_base: radix → canonical decimal value (auto or explicit radix)
// - to_base / to_hex / to_octal / to_binary: rendering back out
//
// Detection precedence is fixed: hex → binary → octal → decimal. The
// traditional-octal carve-out (a second leading zero makes the string
// decimal) is part of the contract, not an implementation detail.

mod converter;
mod detector;

pub use converter::{convert_base, to_base, to_binary, to_hex, to_octal};
pub use detector::{classify, is_base, is_binary, is_hex, is_octal, Classification};
