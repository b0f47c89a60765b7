//! Self-describing objects and the envelope used to embed them.
//!
//! An [SszObject] knows its own encoded size and how to encode and decode itself. To
//! embed a possibly-absent object inside a larger encoding, [ssz_encode] writes a
//! big-endian `u32` size prefix (`0` when absent) followed by the object's own encoding.

use crate::{
    cursor::{require, reserve, PREFIX_SIZE},
    primitives::{decode_u32, encode_u32},
    Error,
};
use bytes::{Bytes, BytesMut};
use tracing::trace;

/// A recursively-structured value that can size, encode and decode itself.
pub trait SszObject: Sized {
    /// Returns the exact number of bytes written by [SszObject::encode_ssz].
    fn ssz_size(&self) -> u32;

    /// Encodes the value at the start of `buf`, returning the number of bytes written.
    fn encode_ssz(&self, buf: &mut [u8]) -> Result<usize, Error>;

    /// Decodes a value from the whole of `buf`.
    fn decode_ssz(buf: &[u8]) -> Result<Self, Error>;

    /// Encodes the value into a newly allocated buffer of exactly [SszObject::ssz_size] bytes.
    ///
    /// Fails with [Error::SizeMismatch] if `encode_ssz` writes a different number of bytes
    /// than declared.
    ///
    /// (Provided method).
    fn to_ssz_bytes(&self) -> Result<Bytes, Error> {
        let expected = self.ssz_size() as usize;
        let mut buf = BytesMut::zeroed(expected);
        let written = self.encode_ssz(&mut buf)?;
        if written != expected {
            return Err(Error::SizeMismatch { expected, written });
        }
        Ok(buf.freeze())
    }
}

/// Returns the encoded size of `obj`, treating an absent object as size `0`.
pub fn ssz_size<T: SszObject>(obj: Option<&T>) -> u32 {
    match obj {
        Some(obj) => obj.ssz_size(),
        None => 0,
    }
}

/// Writes `obj` at the start of `buf`, prefixed by its encoded size.
///
/// An absent object (or one reporting size `0`) is written as a zero size prefix and
/// nothing else. Returns the offset just past the written bytes.
pub fn ssz_encode<T: SszObject>(buf: &mut [u8], obj: Option<&T>) -> Result<usize, Error> {
    let size = ssz_size(obj);
    let offset = encode_u32(buf, 0, size)?;
    let obj = match obj {
        Some(obj) if size > 0 => obj,
        _ => {
            trace!("encoded absent object");
            return Ok(offset);
        }
    };

    let end = reserve(buf.len(), offset, size as usize)?;
    let written = obj.encode_ssz(&mut buf[offset..end])?;
    Ok(offset + written)
}

/// Reads an object written by [ssz_encode] from the start of `buf`.
///
/// A zero size prefix decodes as `None`. Returns the offset just past the object.
pub fn ssz_decode<T: SszObject>(buf: &[u8]) -> Result<(Option<T>, usize), Error> {
    let (size, offset) = decode_u32(buf, 0)?;
    if size == 0 {
        return Ok((None, offset));
    }

    let end = require(buf.len(), offset, size as usize)?;
    let obj = T::decode_ssz(&buf[offset..end])?;
    Ok((Some(obj), end))
}

/// Returns the number of bytes [ssz_encode] writes for `obj`.
pub fn ssz_encode_size<T: SszObject>(obj: Option<&T>) -> usize {
    PREFIX_SIZE + ssz_size(obj) as usize
}
