//! Tagged binary record codec.
//!
//! Wire format: `[TypeTag:1][Length:4][Payload:Length]` — one tag byte,
//! a big-endian unsigned 32-bit payload length, then exactly `Length`
//! payload bytes. Total record length is `5 + Length`.
//!
//! ```
//! use recast::{codec, Value};
//!
//! let record = codec::encode(&Value::Str("abc".into())).unwrap();
//! assert_eq!(record, vec![4, 0, 0, 0, 3, 97, 98, 99]);
//!
//! let mut slot = String::new();
//! codec::decode(&record, &mut slot).unwrap();
//! assert_eq!(slot, "abc");
//! ```

mod decode;
mod error;
mod tag;

use recast_buffers::{Reader, Writer};

use crate::Value;

pub use decode::Decode;
pub use error::CodecError;
pub use tag::TypeTag;

/// Size of the tag + length header in bytes.
pub const HEADER_SIZE: usize = 5;

/// Encodes a value into a self-describing tagged record.
///
/// The tag is selected from the value's runtime variant; the payload uses
/// that tag's canonical byte rule (fixed-width big-endian for numerics,
/// raw UTF-8 for strings, ASCII `true`/`false` for booleans, structural
/// JSON for composites).
pub fn encode(value: &Value) -> Result<Vec<u8>, CodecError> {
    let (tag, payload) = match value {
        Value::Null => (TypeTag::Null, Vec::new()),
        Value::Bool(b) => (
            TypeTag::Bool,
            if *b { b"true".to_vec() } else { b"false".to_vec() },
        ),
        Value::Int(i) => (TypeTag::Int, i.to_be_bytes().to_vec()),
        Value::Float(f) => (TypeTag::Float, f.to_be_bytes().to_vec()),
        Value::Str(s) => (TypeTag::Str, s.as_bytes().to_vec()),
        Value::Bytes(b) => (TypeTag::Bytes, b.clone()),
        Value::Array(_) | Value::Object(_) => {
            let json = value
                .to_json_value()
                .ok_or(CodecError::InvalidPayload("non-finite float"))?;
            (TypeTag::Json, serde_json::to_vec(&json)?)
        }
    };
    let length = u32::try_from(payload.len()).map_err(|_| CodecError::Oversize)?;
    let mut writer = Writer::with_capacity(HEADER_SIZE + payload.len());
    writer.u8(tag as u8);
    writer.u32(length);
    writer.buf(&payload);
    Ok(writer.flush())
}

/// Decodes a record into the caller-supplied destination slot.
///
/// The header is validated before anything else: the record must be at
/// least [`HEADER_SIZE`] bytes and the declared length must equal the
/// remaining byte count exactly, otherwise
/// [`CodecError::MalformedRecord`] — truncated input never causes an
/// out-of-bounds read. The tag then dispatches to the slot type's decode
/// rule; an incompatible slot is a [`CodecError::TypeMismatch`].
pub fn decode<T: Decode>(bytes: &[u8], slot: &mut T) -> Result<(), CodecError> {
    if bytes.len() < HEADER_SIZE {
        return Err(CodecError::MalformedRecord);
    }
    let mut reader = Reader::new(bytes);
    let tag_byte = reader.u8().map_err(|_| CodecError::MalformedRecord)?;
    let length = reader.u32().map_err(|_| CodecError::MalformedRecord)? as usize;
    if reader.size() != length {
        return Err(CodecError::MalformedRecord);
    }
    let tag = TypeTag::from_u8(tag_byte)?;
    let payload = reader.buf(length).map_err(|_| CodecError::MalformedRecord)?;
    *slot = T::decode_record(tag, payload)?;
    Ok(())
}
