//! Value coercion and tagged binary record codec.
//!
//! Two cooperating pieces:
//!
//! - [`convert`] — coerces a dynamically-typed [`Value`] into a requested
//!   target type (bool, int, float, string, bytes, JSON text, chars,
//!   pointer, channel) under deterministic, explicitly-failing rules.
//! - [`codec`] — serializes a [`Value`] into a compact self-describing
//!   `[tag][length][payload]` record and reconstructs it into a
//!   caller-supplied destination slot.
//!
//! # Example
//!
//! ```
//! use recast::{codec, convert, Value};
//!
//! assert_eq!(convert::to_int(&Value::from("123")).unwrap(), 123);
//! assert_eq!(convert::to_string(&Value::from(1.23)), "1.23");
//!
//! let record = codec::encode(&Value::from("abc")).unwrap();
//! let mut slot = String::new();
//! codec::decode(&record, &mut slot).unwrap();
//! assert_eq!(slot, "abc");
//! ```

pub mod codec;
pub mod convert;
mod value;

pub use codec::{CodecError, Decode, TypeTag};
pub use convert::ConvertError;
pub use value::Value;
