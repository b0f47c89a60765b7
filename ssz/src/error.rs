//! Error types for SSZ operations

use thiserror::Error;

/// Error type for SSZ operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("insufficient buffer space: have {available}, require {needed}")]
    InsufficientBuffer { needed: usize, available: usize },
    #[error("insufficient input: have {available}, require {needed}")]
    InsufficientInput { needed: usize, available: usize },
    #[error("invalid 'uintn' format: uint{0} not a multiple of 8")]
    InvalidWidth(u32),
    #[error("invalid boolean value {value}")]
    InvalidBoolean { value: u8, offset: usize },
    #[error("ssz type {0} is either dynamic-size or not a valid type")]
    UnknownOrDynamicType(String),
    #[error("invalid element size: {0}")]
    InvalidElementSize(usize),
    #[error("invalid length: {0}")]
    InvalidLength(usize),
    #[error("length {0} does not fit in a u32 prefix")]
    LengthOverflow(usize),
    #[error("size mismatch: declared {expected}, wrote {written}")]
    SizeMismatch { expected: usize, written: usize },
    #[error("invalid data in {0}: {1}")]
    Invalid(&'static str, &'static str), // context, message
}

impl Error {
    /// Returns the offset at which decoding may resume after a recoverable
    /// format violation.
    ///
    /// Only [Error::InvalidBoolean] is recoverable: the offending byte has
    /// already been consumed.
    pub fn resume_offset(&self) -> Option<usize> {
        match self {
            Error::InvalidBoolean { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Returns the best-effort value of a rejected boolean byte.
    ///
    /// Any byte other than `0` decodes as `true`, so callers that choose to
    /// tolerate [Error::InvalidBoolean] observe the same value a lenient
    /// decoder would have produced.
    pub fn best_effort_bool(&self) -> Option<bool> {
        match self {
            Error::InvalidBoolean { .. } => Some(true),
            _ => None,
        }
    }
}
