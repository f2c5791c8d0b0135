//! Record codec error type.

use thiserror::Error;

/// Error type for binary record encoding/decoding.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Record shorter than the 5-byte header, or the declared length does
    /// not match the actual payload size.
    #[error("malformed record: header/length inconsistent with payload")]
    MalformedRecord,
    /// The tag byte maps to no known decode rule.
    #[error("unknown type tag {0}")]
    UnknownTag(u8),
    /// The destination slot's type is incompatible with the record's tag.
    #[error("record holds {actual}, destination expects {expected}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    /// The payload violates its tag's encoding rule.
    #[error("invalid payload: {0}")]
    InvalidPayload(&'static str),
    /// The payload does not fit the 32-bit length field.
    #[error("payload exceeds the u32 length field")]
    Oversize,
    /// JSON payload serialization/deserialization failed.
    #[error("JSON payload error: {0}")]
    Json(#[from] serde_json::Error),
}
