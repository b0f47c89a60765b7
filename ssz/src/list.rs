//! List-of-`u32` codec.
//!
//! A list is prefixed by its length in bytes (not elements) as a big-endian `u32`,
//! followed by the big-endian elements.

use crate::{
    cursor::{require, reserve, PREFIX_SIZE},
    primitives::{decode_u32, encode_u32},
    Error, RangeCfg,
};
use tracing::debug;

/// Encoded size of a single element.
const ELEMENT_SIZE: usize = std::mem::size_of::<u32>();

/// Writes `values` at `offset`, prefixed by their total length in bytes.
pub fn encode_list_u32(buf: &mut [u8], offset: usize, values: &[u32]) -> Result<usize, Error> {
    let byte_len = values
        .len()
        .checked_mul(ELEMENT_SIZE)
        .ok_or(Error::LengthOverflow(values.len()))?;
    let prefix = u32::try_from(byte_len).map_err(|_| Error::LengthOverflow(byte_len))?;
    let total = PREFIX_SIZE
        .checked_add(byte_len)
        .ok_or(Error::LengthOverflow(byte_len))?;
    reserve(buf.len(), offset, total)?;

    let mut offset = encode_u32(buf, offset, prefix)?;
    for value in values {
        offset = encode_u32(buf, offset, *value)?;
    }
    Ok(offset)
}

/// Reads a byte-length-prefixed list of big-endian `u32`s at `offset`.
///
/// The element count is `byte_len / element_size` and that many `u32`s are read back to
/// back. A byte length that is not a multiple of `element_size` keeps the floor of the
/// division. Bytes left unread are skipped: the returned offset points just past the
/// declared byte length.
pub fn decode_list_u32(
    buf: &[u8],
    offset: usize,
    element_size: usize,
) -> Result<(Vec<u32>, usize), Error> {
    decode_list_u32_cfg(buf, offset, element_size, &RangeCfg::unbounded())
}

/// Reads a list like [decode_list_u32], rejecting an element count outside of `range`
/// before allocating.
pub fn decode_list_u32_cfg(
    buf: &[u8],
    offset: usize,
    element_size: usize,
    range: &RangeCfg,
) -> Result<(Vec<u32>, usize), Error> {
    // Elements are read as u32s, so each must occupy at least 4 bytes
    if element_size < ELEMENT_SIZE {
        return Err(Error::InvalidElementSize(element_size));
    }

    let (byte_len, offset) = decode_u32(buf, offset)?;
    let byte_len = byte_len as usize;
    let end = require(buf.len(), offset, byte_len)?;

    let count = range.check(byte_len / element_size)?;
    let remainder = byte_len % element_size;
    if remainder != 0 {
        debug!(byte_len, element_size, remainder, "dropping misaligned list tail");
    }

    let mut values = Vec::with_capacity(count);
    let mut cursor = offset;
    for _ in 0..count {
        let (value, next) = decode_u32(buf, cursor)?;
        values.push(value);
        cursor = next;
    }
    Ok((values, end))
}
