//! Bounds-checked offset arithmetic shared by every codec in this crate.
//!
//! Offsets are plain values: each helper takes the buffer length, the current offset,
//! and the number of bytes about to be touched, and returns the offset just past them.

use crate::Error;

/// Number of bytes in a 24-bit integer.
pub const U24_SIZE: usize = 3;

/// Number of bytes in a length or size prefix.
pub const PREFIX_SIZE: usize = 4;

/// Returns `offset + width` if a write of `width` bytes at `offset` fits in a buffer of
/// `buf_len` bytes.
#[inline]
pub fn reserve(buf_len: usize, offset: usize, width: usize) -> Result<usize, Error> {
    match offset.checked_add(width) {
        Some(end) if end <= buf_len => Ok(end),
        end => Err(Error::InsufficientBuffer {
            needed: end.unwrap_or(usize::MAX),
            available: buf_len,
        }),
    }
}

/// Returns `offset + width` if a read of `width` bytes at `offset` fits in a buffer of
/// `buf_len` bytes.
#[inline]
pub fn require(buf_len: usize, offset: usize, width: usize) -> Result<usize, Error> {
    match offset.checked_add(width) {
        Some(end) if end <= buf_len => Ok(end),
        end => Err(Error::InsufficientInput {
            needed: end.unwrap_or(usize::MAX),
            available: buf_len,
        }),
    }
}

/// Packs the low 24 bits of `value` into `dst`, least significant byte first.
///
/// Bits above the 24th are discarded.
#[inline]
pub fn put_u24(dst: &mut [u8; U24_SIZE], value: u32) {
    dst[0] = value as u8;
    dst[1] = (value >> 8) as u8;
    dst[2] = (value >> 16) as u8;
}

/// Unpacks a 24-bit integer written by [put_u24].
#[inline]
pub fn get_u24(src: &[u8; U24_SIZE]) -> u32 {
    u32::from(src[0]) | u32::from(src[1]) << 8 | u32::from(src[2]) << 16
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(4, 0, 4 => Ok(4); "exact fit")]
    #[test_case(4, 1, 4 => Err(Error::InsufficientBuffer { needed: 5, available: 4 }); "one past end")]
    #[test_case(0, 0, 0 => Ok(0); "empty write into empty buffer")]
    #[test_case(8, usize::MAX, 1 => Err(Error::InsufficientBuffer { needed: usize::MAX, available: 8 }); "overflowing offset")]
    fn test_reserve(buf_len: usize, offset: usize, width: usize) -> Result<usize, Error> {
        reserve(buf_len, offset, width)
    }

    #[test]
    fn test_require() {
        assert_eq!(require(10, 2, 8), Ok(10));
        assert_eq!(
            require(10, 3, 8),
            Err(Error::InsufficientInput {
                needed: 11,
                available: 10
            })
        );
    }

    #[test]
    fn test_u24_layout() {
        let mut dst = [0u8; U24_SIZE];
        put_u24(&mut dst, 0x00ab_cdef);
        assert_eq!(dst, [0xef, 0xcd, 0xab]);
        assert_eq!(get_u24(&dst), 0x00ab_cdef);

        // Bits above 24 are dropped
        put_u24(&mut dst, 0xff12_3456);
        assert_eq!(dst, [0x56, 0x34, 0x12]);
        assert_eq!(get_u24(&dst), 0x0012_3456);
    }
}
