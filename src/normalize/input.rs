// ============================================================================
// Input Sum Type
// Closed set of dynamic shapes accepted by the normalization funnel
// ============================================================================

use crate::canonical::Canonical;
use crate::value::NumericValue;

/// Every shape the normalizer accepts, as a closed sum type.
///
/// The original surface took "anything" and branched on runtime type; here
/// each accepted shape is a variant and handling is exhaustive. `Unsupported`
/// stands in for container/handle types with no numeric interpretation and
/// carries a type tag so diagnostics can name what was passed.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    Value(NumericValue),
    Unsupported(&'static str),
}

impl Input {
    /// Mark a value as having no numeric interpretation, keeping a type tag
    /// for the error message (e.g. `Input::unsupported("array")`).
    #[inline]
    pub fn unsupported(type_name: &'static str) -> Self {
        Input::Unsupported(type_name)
    }

    /// Human-readable tag of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Input::Str(_) => "string",
            Input::Int(_) => "integer",
            Input::Float(_) => "float",
            Input::Bool(_) => "boolean",
            Input::Null => "null",
            Input::Value(_) => "numeric value",
            Input::Unsupported(tag) => tag,
        }
    }
}

impl From<&str> for Input {
    #[inline]
    fn from(value: &str) -> Self {
        Input::Str(value.to_string())
    }
}

impl From<String> for Input {
    #[inline]
    fn from(value: String) -> Self {
        Input::Str(value)
    }
}

impl From<i64> for Input {
    #[inline]
    fn from(value: i64) -> Self {
        Input::Int(value)
    }
}

impl From<i32> for Input {
    #[inline]
    fn from(value: i32) -> Self {
        Input::Int(value as i64)
    }
}

impl From<u32> for Input {
    #[inline]
    fn from(value: u32) -> Self {
        Input::Int(value as i64)
    }
}

impl From<f64> for Input {
    #[inline]
    fn from(value: f64) -> Self {
        Input::Float(value)
    }
}

impl From<f32> for Input {
    #[inline]
    fn from(value: f32) -> Self {
        Input::Float(value as f64)
    }
}

impl From<bool> for Input {
    #[inline]
    fn from(value: bool) -> Self {
        Input::Bool(value)
    }
}

impl From<NumericValue> for Input {
    #[inline]
    fn from(value: NumericValue) -> Self {
        Input::Value(value)
    }
}

impl From<Canonical> for Input {
    #[inline]
    fn from(value: Canonical) -> Self {
        match value {
            Canonical::Int(i) => Input::Int(i),
            Canonical::Float(f) => Input::Float(f),
        }
    }
}

/// `None` is the null/absence shape; `Some` defers to the inner conversion.
impl<T: Into<Input>> From<Option<T>> for Input {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Input::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Input::from(42i64), Input::Int(42));
        assert_eq!(Input::from(2.5f64), Input::Float(2.5));
        assert_eq!(Input::from("0xFF"), Input::Str("0xFF".to_string()));
        assert_eq!(Input::from(true), Input::Bool(true));
        assert_eq!(Input::from(None::<i64>), Input::Null);
        assert_eq!(Input::from(Some(7i64)), Input::Int(7));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Input::from("x").type_name(), "string");
        assert_eq!(Input::Null.type_name(), "null");
        assert_eq!(Input::unsupported("array").type_name(), "array");
    }
}
