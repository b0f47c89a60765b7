//! Arbitrary-width unsigned integer codec.
//!
//! Integers of `bits` bits (a multiple of 8) occupy exactly `bits / 8` bytes and are
//! written big-endian. Values backed by [BigUint] may be arbitrarily large: encoding a
//! value wider than the field keeps only its low `bits` bits (no error is returned).

use crate::{
    cursor::{require, reserve},
    Error,
};
use num_bigint::BigUint;
use tracing::trace;

/// Returns the number of bytes occupied by a `bits`-bit integer.
pub fn width_in_bytes(bits: u32) -> Result<usize, Error> {
    if bits % 8 != 0 {
        return Err(Error::InvalidWidth(bits));
    }
    Ok((bits / 8) as usize)
}

/// Writes `value` as a `bits`-bit big-endian integer at `offset`.
///
/// Values shorter than the field are zero-padded on the left. Values longer than the
/// field are truncated from the most significant end.
pub fn encode_uint_n(
    buf: &mut [u8],
    offset: usize,
    bits: u32,
    value: &BigUint,
) -> Result<usize, Error> {
    let width = width_in_bytes(bits)?;
    let end = reserve(buf.len(), offset, width)?;
    let field = &mut buf[offset..end];

    let raw = value.to_bytes_be();
    if raw.len() <= width {
        let pad = width - raw.len();
        field[..pad].fill(0);
        field[pad..].copy_from_slice(&raw);
    } else {
        let excess = raw.len() - width;
        trace!(bits, excess, "truncating uint to field width");
        field.copy_from_slice(&raw[excess..]);
    }
    Ok(end)
}

/// Reads a `bits`-bit big-endian integer at `offset`.
pub fn decode_uint_n(buf: &[u8], offset: usize, bits: u32) -> Result<(BigUint, usize), Error> {
    let width = width_in_bytes(bits)?;
    let end = require(buf.len(), offset, width)?;
    Ok((BigUint::from_bytes_be(&buf[offset..end]), end))
}
