// ============================================================================
// Numeric Errors
// Closed error taxonomy for detection, conversion and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during classification, conversion or arithmetic.
///
/// Every failure is raised synchronously at the point of detection. Parsing is
/// deterministic, so none of these are retryable. The lenient entry point
/// (`normalize::convert_value`) is the only place a failure is converted into
/// a pass-through of the original input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string matches no supported numeric notation
    InvalidFormat { input: String },
    /// Empty string where a non-empty numeric string is required
    EmptyInput,
    /// String content is numeric but padded with leading/trailing whitespace
    WhitespaceRejected { input: String },
    /// Input is a container or handle type with no numeric interpretation
    UnsupportedType { type_name: String },
    /// Requested radix outside the supported [2, 36] range
    RadixOutOfRange { radix: u32 },
    /// Division, modulo or percentage-of by a zero-valued operand
    DivisionByZero { operation: &'static str },
    /// Operation requiring a non-negative argument given a negative one
    NegativeDomain { operation: &'static str },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidFormat { input } => {
                write!(f, "invalid numeric format: {:?}", input)
            },
            NumericError::EmptyInput => {
                write!(f, "empty string is not a valid numeric input")
            },
            NumericError::WhitespaceRejected { input } => write!(
                f,
                "whitespace-padded input rejected: {:?} (trim before converting)",
                input
            ),
            NumericError::UnsupportedType { type_name } => {
                write!(f, "unsupported input type: {}", type_name)
            },
            NumericError::RadixOutOfRange { radix } => {
                write!(f, "radix {} outside supported range [2, 36]", radix)
            },
            NumericError::DivisionByZero { operation } => {
                write!(f, "{} by zero", operation)
            },
            NumericError::NegativeDomain { operation } => {
                write!(f, "{} requires a non-negative argument", operation)
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
