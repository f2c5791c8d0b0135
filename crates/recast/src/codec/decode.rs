//! [`Decode`] — per-type payload decode rules.

use recast_buffers::Reader;

use crate::Value;

use super::{CodecError, TypeTag};

/// A type that can be reconstructed from a record payload.
///
/// Each implementation validates that the record's tag matches the
/// destination type (a mismatch is [`CodecError::TypeMismatch`], never a
/// silent coercion) and then decodes the payload under that tag's rule.
pub trait Decode: Sized {
    /// Reconstructs a value from a validated record's tag and payload.
    fn decode_record(tag: TypeTag, payload: &[u8]) -> Result<Self, CodecError>;
}

fn expect_tag(expected: TypeTag, actual: TypeTag) -> Result<(), CodecError> {
    if expected == actual {
        Ok(())
    } else {
        Err(CodecError::TypeMismatch {
            expected: expected.name(),
            actual: actual.name(),
        })
    }
}

fn decode_i64(payload: &[u8]) -> Result<i64, CodecError> {
    if payload.len() != 8 {
        return Err(CodecError::InvalidPayload("integer payload must be 8 bytes"));
    }
    let mut reader = Reader::new(payload);
    reader
        .i64()
        .map_err(|_| CodecError::InvalidPayload("integer payload must be 8 bytes"))
}

fn decode_f64(payload: &[u8]) -> Result<f64, CodecError> {
    if payload.len() != 8 {
        return Err(CodecError::InvalidPayload("float payload must be 8 bytes"));
    }
    let mut reader = Reader::new(payload);
    reader
        .f64()
        .map_err(|_| CodecError::InvalidPayload("float payload must be 8 bytes"))
}

fn decode_bool(payload: &[u8]) -> Result<bool, CodecError> {
    match payload {
        b"true" => Ok(true),
        b"false" => Ok(false),
        _ => Err(CodecError::InvalidPayload("unrecognized boolean literal")),
    }
}

fn decode_str(payload: &[u8]) -> Result<String, CodecError> {
    let mut reader = Reader::new(payload);
    reader
        .utf8(payload.len())
        .map(str::to_owned)
        .map_err(|_| CodecError::InvalidPayload("invalid UTF-8 in string payload"))
}

impl Decode for i64 {
    fn decode_record(tag: TypeTag, payload: &[u8]) -> Result<Self, CodecError> {
        expect_tag(TypeTag::Int, tag)?;
        decode_i64(payload)
    }
}

impl Decode for f64 {
    fn decode_record(tag: TypeTag, payload: &[u8]) -> Result<Self, CodecError> {
        expect_tag(TypeTag::Float, tag)?;
        decode_f64(payload)
    }
}

impl Decode for bool {
    fn decode_record(tag: TypeTag, payload: &[u8]) -> Result<Self, CodecError> {
        expect_tag(TypeTag::Bool, tag)?;
        decode_bool(payload)
    }
}

impl Decode for String {
    fn decode_record(tag: TypeTag, payload: &[u8]) -> Result<Self, CodecError> {
        expect_tag(TypeTag::Str, tag)?;
        decode_str(payload)
    }
}

impl Decode for Vec<u8> {
    fn decode_record(tag: TypeTag, payload: &[u8]) -> Result<Self, CodecError> {
        expect_tag(TypeTag::Bytes, tag)?;
        Ok(payload.to_vec())
    }
}

/// [`Value`] accepts every tag, reconstructing the matching variant.
impl Decode for Value {
    fn decode_record(tag: TypeTag, payload: &[u8]) -> Result<Self, CodecError> {
        match tag {
            TypeTag::Null => {
                if payload.is_empty() {
                    Ok(Value::Null)
                } else {
                    Err(CodecError::InvalidPayload("null payload must be empty"))
                }
            }
            TypeTag::Bool => Ok(Value::Bool(decode_bool(payload)?)),
            TypeTag::Int => Ok(Value::Int(decode_i64(payload)?)),
            TypeTag::Float => Ok(Value::Float(decode_f64(payload)?)),
            TypeTag::Str => Ok(Value::Str(decode_str(payload)?)),
            TypeTag::Bytes => Ok(Value::Bytes(payload.to_vec())),
            TypeTag::Json => {
                let json: serde_json::Value = serde_json::from_slice(payload)?;
                Ok(Value::from_json_value(&json))
            }
        }
    }
}
