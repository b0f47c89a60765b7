//! Encoded widths of the fixed-size basic types.

use crate::Error;
use core::{fmt, str::FromStr};

/// A basic type with a fixed encoded width.
///
/// Dynamic-size types (e.g. `bytes`, lists) are deliberately absent: their width depends
/// on the value and is recorded on the wire by a length prefix instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BasicType {
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint256,
    Bytes1,
    Bytes2,
    Bytes4,
    Bytes8,
    Bytes20,
    Bytes32,
}

impl BasicType {
    /// All basic types, in declaration order.
    pub const ALL: [BasicType; 11] = [
        BasicType::Uint8,
        BasicType::Uint16,
        BasicType::Uint32,
        BasicType::Uint64,
        BasicType::Uint256,
        BasicType::Bytes1,
        BasicType::Bytes2,
        BasicType::Bytes4,
        BasicType::Bytes8,
        BasicType::Bytes20,
        BasicType::Bytes32,
    ];

    /// Returns the schema name of the type.
    pub const fn name(&self) -> &'static str {
        match self {
            BasicType::Uint8 => "uint8",
            BasicType::Uint16 => "uint16",
            BasicType::Uint32 => "uint32",
            BasicType::Uint64 => "uint64",
            BasicType::Uint256 => "uint256",
            BasicType::Bytes1 => "bytes1",
            BasicType::Bytes2 => "bytes2",
            BasicType::Bytes4 => "bytes4",
            BasicType::Bytes8 => "bytes8",
            BasicType::Bytes20 => "bytes20",
            BasicType::Bytes32 => "bytes32",
        }
    }

    /// Returns the number of bytes required to encode the type.
    pub const fn size(&self) -> usize {
        match self {
            BasicType::Uint8 | BasicType::Bytes1 => 1,
            BasicType::Uint16 | BasicType::Bytes2 => 2,
            BasicType::Uint32 | BasicType::Bytes4 => 4,
            BasicType::Uint64 | BasicType::Bytes8 => 8,
            BasicType::Bytes20 => 20,
            BasicType::Uint256 | BasicType::Bytes32 => 32,
        }
    }
}

impl FromStr for BasicType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BasicType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| Error::UnknownOrDynamicType(s.to_string()))
    }
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the number of bytes required to encode the basic type named `ssz_type`.
///
/// Fails with [Error::UnknownOrDynamicType] if the name is dynamic-size or not an SSZ
/// type at all.
pub fn ssz_type_size(ssz_type: &str) -> Result<usize, Error> {
    Ok(ssz_type.parse::<BasicType>()?.size())
}
