//! Coercion engine: one conversion operation per target type.
//!
//! Every function is a pattern match over [`Value`] with an explicit
//! unsupported arm. Failures are reported through
//! [`ConvertError`] rather than panicking; callers that want the
//! zero-value-on-failure convention use `.unwrap_or_default()`.

mod error;

use std::sync::mpsc;

use crate::Value;

pub use error::ConvertError;

/// The boolean string literals accepted by [`to_bool`].
///
/// Exact matches only; `"1"`/`"0"` and the cased spellings of
/// true/false. Numeric strings like `"123"` or `"0.0"` are not booleans.
const TRUE_LITERALS: [&str; 6] = ["1", "t", "T", "TRUE", "true", "True"];
const FALSE_LITERALS: [&str; 6] = ["0", "f", "F", "FALSE", "false", "False"];

/// Coerces a value to `bool`.
///
/// Booleans pass through. Strings must match one of the recognized
/// boolean literals exactly. There is no numeric truthiness: numbers,
/// and every other variant, fail with an error.
pub fn to_bool(value: &Value) -> Result<bool, ConvertError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Str(s) => {
            if TRUE_LITERALS.contains(&s.as_str()) {
                Ok(true)
            } else if FALSE_LITERALS.contains(&s.as_str()) {
                Ok(false)
            } else {
                Err(ConvertError::parse(s, "bool"))
            }
        }
        other => Err(ConvertError::unsupported(other.type_name(), "bool")),
    }
}

/// Coerces a value to `i64`.
///
/// Floats truncate toward zero. Strings parse as base-10 signed integer
/// literals. Booleans are NOT coerced to 0/1.
pub fn to_int(value: &Value) -> Result<i64, ConvertError> {
    match value {
        Value::Int(i) => Ok(*i),
        Value::Float(f) => Ok(*f as i64),
        Value::Str(s) => s.parse::<i64>().map_err(|_| ConvertError::parse(s, "int")),
        other => Err(ConvertError::unsupported(other.type_name(), "int")),
    }
}

/// Coerces a value to `f64`.
///
/// Strings parse with standard float literal rules (leading sign, omitted
/// integer part such as `-.11`, exponent notation such as `1.23e3`). The
/// empty string is a parse failure, not zero.
pub fn to_float(value: &Value) -> Result<f64, ConvertError> {
    match value {
        Value::Float(f) => Ok(*f),
        Value::Int(i) => Ok(*i as f64),
        Value::Str(s) => s
            .parse::<f64>()
            .map_err(|_| ConvertError::parse(s, "float")),
        other => Err(ConvertError::unsupported(other.type_name(), "float")),
    }
}

/// Renders a value as text. Total: never fails.
///
/// See the [`std::fmt::Display`] impl on [`Value`] for the exact rules.
/// Re-stringifying a string returns it unchanged.
pub fn to_string(value: &Value) -> String {
    value.to_string()
}

/// Serializes a value as JSON text.
///
/// Object keys render in ascending lexicographic order. Fails if the
/// value contains a component JSON cannot represent (non-finite floats).
pub fn to_json(value: &Value) -> Result<String, ConvertError> {
    let json = value
        .to_json_value()
        .ok_or(ConvertError::Structural("non-finite float"))?;
    Ok(serde_json::to_string(&json)?)
}

/// Coerces a value to its canonical byte representation.
///
/// Integers and floats become their 8-byte big-endian encodings, strings
/// their raw UTF-8 bytes, byte sequences themselves, and booleans the
/// ASCII bytes of `"true"`/`"false"`. Null and composites fail.
pub fn to_bytes(value: &Value) -> Result<Vec<u8>, ConvertError> {
    match value {
        Value::Int(i) => Ok(i.to_be_bytes().to_vec()),
        Value::Float(f) => Ok(f.to_be_bytes().to_vec()),
        Value::Str(s) => Ok(s.as_bytes().to_vec()),
        Value::Bytes(b) => Ok(b.clone()),
        Value::Bool(b) => Ok(if *b { b"true".to_vec() } else { b"false".to_vec() }),
        other => Err(ConvertError::unsupported(other.type_name(), "bytes")),
    }
}

/// Splits a string into its sequence of characters.
///
/// Every character position is its own element, spaces included. The
/// empty string yields an empty sequence.
pub fn to_char(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Returns an owning boxed copy of the input.
///
/// Convenience for taking the address of a literal or expression result;
/// the box is exclusively owned by the caller.
pub fn to_pointer<T: Clone>(value: &T) -> Box<T> {
    Box::new(value.clone())
}

/// Produces a receiver pre-loaded with every element of the input, in order.
///
/// The sending half is dropped before returning, so draining the receiver
/// yields the elements FIFO and then reports end-of-stream instead of
/// blocking.
pub fn to_channel<T>(items: Vec<T>) -> mpsc::Receiver<T> {
    let (tx, rx) = mpsc::channel();
    for item in items {
        // Receiver is alive, send cannot fail.
        let _ = tx.send(item);
    }
    rx
}
