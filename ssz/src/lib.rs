//! Encode and decode SSZ primitives at explicit buffer offsets.
//!
//! # Overview
//!
//! The primitive layer of a simple-serialize (SSZ) style format:
//! - Fixed-width big-endian integers (`u8`, `u16`, `u32`, `u64`), 24-bit integers and booleans
//! - Arbitrary-width unsigned integers backed by [num_bigint::BigUint]
//! - Fixed-length and `u32` length-prefixed byte strings
//! - Byte-length-prefixed lists of `u32`
//! - A size table for the fixed-width basic types
//! - An envelope for embedding optional, self-describing objects ([SszObject])
//!
//! Buffers are owned by the caller and never resized. Every operation takes an explicit
//! offset and returns the offset just past the bytes it touched, so successive calls are
//! chained by threading the returned offset into the next call.
//!
//! # Example
//!
//! ```
//! use commonware_ssz::{
//!     decode_bool, decode_bytes_x, decode_u64, encode_bool, encode_bytes_with_length_prefix,
//!     encode_u64, ssz_decode, ssz_encode, Error, SszObject,
//! };
//!
//! // Define a custom struct
//! #[derive(Debug, Clone, PartialEq)]
//! struct Deposit {
//!     amount: u64,
//!     pubkey: Vec<u8>,
//!     active: bool,
//! }
//!
//! // Compose the primitives into an object
//! impl SszObject for Deposit {
//!     fn ssz_size(&self) -> u32 {
//!         (8 + 4 + self.pubkey.len() + 1) as u32
//!     }
//!
//!     fn encode_ssz(&self, buf: &mut [u8]) -> Result<usize, Error> {
//!         let offset = encode_u64(buf, 0, self.amount)?;
//!         let offset = encode_bytes_with_length_prefix(buf, offset, &self.pubkey)?;
//!         encode_bool(buf, offset, self.active)
//!     }
//!
//!     fn decode_ssz(buf: &[u8]) -> Result<Self, Error> {
//!         let (amount, offset) = decode_u64(buf, 0)?;
//!         let (pubkey, offset) = decode_bytes_x(buf, offset)?;
//!         let (active, _) = decode_bool(buf, offset)?;
//!         Ok(Self { amount, pubkey: pubkey.to_vec(), active })
//!     }
//! }
//!
//! let deposit = Deposit { amount: 32, pubkey: vec![0xAB; 48], active: true };
//! let mut buf = vec![0u8; 4 + deposit.ssz_size() as usize];
//! let end = ssz_encode(&mut buf, Some(&deposit)).unwrap();
//! assert_eq!(end, buf.len());
//!
//! let (decoded, _) = ssz_decode::<Deposit>(&buf).unwrap();
//! assert_eq!(decoded, Some(deposit));
//! ```

pub mod byte_string;
pub mod config;
pub mod cursor;
pub mod error;
pub mod list;
pub mod object;
pub mod primitives;
pub mod types;
pub mod uint;

// Re-export main types and functions
pub use byte_string::{
    decode_bytes_n, decode_bytes_x, decode_bytes_x_cfg, encode_bytes_with_length_prefix,
    encode_bytes_without_length_prefix,
};
pub use config::RangeCfg;
pub use error::Error;
pub use list::{decode_list_u32, decode_list_u32_cfg, encode_list_u32};
pub use object::{ssz_decode, ssz_encode, ssz_encode_size, ssz_size, SszObject};
pub use primitives::{
    decode_bool, decode_u16, decode_u24, decode_u32, decode_u64, decode_u8, encode_bool,
    encode_u16, encode_u24, encode_u32, encode_u64, encode_u8,
};
pub use types::{ssz_type_size, BasicType};
pub use uint::{decode_uint_n, encode_uint_n};
