//! Record type tag.

use std::fmt;

use super::CodecError;

/// Discriminator identifying which decode rule applies to a record payload.
///
/// Tag values are stable wire constants; do not renumber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// Empty payload.
    Null = 0,
    /// ASCII `true` / `false`.
    Bool = 1,
    /// 8-byte big-endian two's complement.
    Int = 2,
    /// 8-byte big-endian IEEE-754.
    Float = 3,
    /// Raw UTF-8 text.
    Str = 4,
    /// Raw bytes.
    Bytes = 5,
    /// JSON text of a composite value, object keys in ascending order.
    Json = 6,
}

impl TypeTag {
    /// Parses a wire byte into a tag.
    pub fn from_u8(byte: u8) -> Result<TypeTag, CodecError> {
        match byte {
            0 => Ok(TypeTag::Null),
            1 => Ok(TypeTag::Bool),
            2 => Ok(TypeTag::Int),
            3 => Ok(TypeTag::Float),
            4 => Ok(TypeTag::Str),
            5 => Ok(TypeTag::Bytes),
            6 => Ok(TypeTag::Json),
            other => Err(CodecError::UnknownTag(other)),
        }
    }

    /// Stable lowercase name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Null => "null",
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Str => "string",
            TypeTag::Bytes => "bytes",
            TypeTag::Json => "json",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
