//! Coercion error type.

use thiserror::Error;

/// Error type for value coercion operations.
///
/// Coercions never panic on malformed input; the failing input comes back
/// to the caller through one of these variants.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A string literal did not parse as the requested target type.
    #[error("cannot parse {input:?} as {target}")]
    Parse {
        input: String,
        target: &'static str,
    },
    /// The input variant has no conversion rule for the requested target.
    #[error("cannot convert {from} to {target}")]
    UnsupportedType {
        from: &'static str,
        target: &'static str,
    },
    /// The value contains a component JSON cannot represent.
    #[error("value not representable in JSON: {0}")]
    Structural(&'static str),
    /// JSON serialization failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub(crate) fn parse(input: &str, target: &'static str) -> Self {
        ConvertError::Parse {
            input: input.to_owned(),
            target,
        }
    }

    pub(crate) fn unsupported(from: &'static str, target: &'static str) -> Self {
        ConvertError::UnsupportedType { from, target }
    }
}
