//! Byte-sequence codec.
//!
//! Fixed-length byte strings are copied in place with no framing. Variable-length byte
//! strings are prefixed by their length as a big-endian `u32`.

use crate::{
    cursor::{require, reserve, PREFIX_SIZE},
    primitives::{decode_u32, encode_u32},
    Error, RangeCfg,
};
use bytes::Bytes;

/// Copies `data` into `buf` at `offset` with no length prefix.
///
/// The caller must track the length of `data` externally to decode it again.
pub fn encode_bytes_without_length_prefix(
    buf: &mut [u8],
    offset: usize,
    data: &[u8],
) -> Result<usize, Error> {
    let end = reserve(buf.len(), offset, data.len())?;
    buf[offset..end].copy_from_slice(data);
    Ok(end)
}

/// Writes `data` at `offset`, prefixed by its length as a big-endian `u32`.
pub fn encode_bytes_with_length_prefix(
    buf: &mut [u8],
    offset: usize,
    data: &[u8],
) -> Result<usize, Error> {
    let len = u32::try_from(data.len()).map_err(|_| Error::LengthOverflow(data.len()))?;

    // Check the prefix and payload together so a failure writes nothing
    let total = PREFIX_SIZE
        .checked_add(data.len())
        .ok_or(Error::LengthOverflow(data.len()))?;
    reserve(buf.len(), offset, total)?;

    let offset = encode_u32(buf, offset, len)?;
    encode_bytes_without_length_prefix(buf, offset, data)
}

/// Reads a length-prefixed byte string at `offset` into a newly allocated [Bytes].
pub fn decode_bytes_x(buf: &[u8], offset: usize) -> Result<(Bytes, usize), Error> {
    decode_bytes_x_cfg(buf, offset, &RangeCfg::unbounded())
}

/// Reads a length-prefixed byte string at `offset`, rejecting a declared length outside
/// of `range` before copying anything.
pub fn decode_bytes_x_cfg(
    buf: &[u8],
    offset: usize,
    range: &RangeCfg,
) -> Result<(Bytes, usize), Error> {
    let (len, offset) = decode_u32(buf, offset)?;
    let len = range.check(len as usize)?;
    let end = require(buf.len(), offset, len)?;
    Ok((Bytes::copy_from_slice(&buf[offset..end]), end))
}

/// Copies `dest.len()` bytes at `offset` into `dest`.
///
/// This is the inverse of [encode_bytes_without_length_prefix]: no prefix is read and
/// nothing is allocated.
pub fn decode_bytes_n(buf: &[u8], offset: usize, dest: &mut [u8]) -> Result<usize, Error> {
    let end = require(buf.len(), offset, dest.len())?;
    dest.copy_from_slice(&buf[offset..end]);
    Ok(end)
}
