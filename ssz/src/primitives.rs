//! Fixed-width scalar codec.
//!
//! Every function takes the buffer and an explicit offset and returns the offset just
//! past the bytes it touched. Encoders check capacity before writing anything, so a
//! failed encode leaves the buffer untouched.
//!
//! # Wire format
//!
//! * `u8`, `u16`, `u32` and `u64` are written big-endian.
//! * 24-bit integers are packed least significant byte first (see [crate::cursor::put_u24]).
//! * `bool` is a single byte that must be `0` or `1`.

use crate::{
    cursor::{get_u24, put_u24, require, reserve, U24_SIZE},
    Error,
};
use paste::paste;

macro_rules! impl_fixed {
    ($type:ty) => {
        paste! {
            /// Writes a big-endian unsigned integer at `offset`.
            #[inline]
            pub fn [<encode_ $type>](
                buf: &mut [u8],
                offset: usize,
                value: $type,
            ) -> Result<usize, Error> {
                let end = reserve(buf.len(), offset, std::mem::size_of::<$type>())?;
                buf[offset..end].copy_from_slice(&value.to_be_bytes());
                Ok(end)
            }

            /// Reads a big-endian unsigned integer at `offset`.
            #[inline]
            pub fn [<decode_ $type>](buf: &[u8], offset: usize) -> Result<($type, usize), Error> {
                const SIZE: usize = std::mem::size_of::<$type>();
                let end = require(buf.len(), offset, SIZE)?;
                let mut raw = [0u8; SIZE];
                raw.copy_from_slice(&buf[offset..end]);
                Ok((<$type>::from_be_bytes(raw), end))
            }
        }
    };
}

impl_fixed!(u8);
impl_fixed!(u16);
impl_fixed!(u32);
impl_fixed!(u64);

/// Writes the low 24 bits of `value` at `offset`.
pub fn encode_u24(buf: &mut [u8], offset: usize, value: u32) -> Result<usize, Error> {
    let end = reserve(buf.len(), offset, U24_SIZE)?;
    let mut raw = [0u8; U24_SIZE];
    put_u24(&mut raw, value);
    buf[offset..end].copy_from_slice(&raw);
    Ok(end)
}

/// Reads a 24-bit integer at `offset`.
pub fn decode_u24(buf: &[u8], offset: usize) -> Result<(u32, usize), Error> {
    let end = require(buf.len(), offset, U24_SIZE)?;
    let mut raw = [0u8; U24_SIZE];
    raw.copy_from_slice(&buf[offset..end]);
    Ok((get_u24(&raw), end))
}

/// Writes `value` as a single `0` or `1` byte at `offset`.
pub fn encode_bool(buf: &mut [u8], offset: usize, value: bool) -> Result<usize, Error> {
    encode_u8(buf, offset, u8::from(value))
}

/// Reads a boolean at `offset`.
///
/// A byte other than `0` or `1` fails with [Error::InvalidBoolean]. The byte is still
/// consumed: the error carries the advanced offset (see [Error::resume_offset]) and the
/// lenient reading of the byte (see [Error::best_effort_bool]).
pub fn decode_bool(buf: &[u8], offset: usize) -> Result<(bool, usize), Error> {
    let (value, end) = decode_u8(buf, offset)?;
    match value {
        0 => Ok((false, end)),
        1 => Ok((true, end)),
        value => Err(Error::InvalidBoolean { value, offset: end }),
    }
}
