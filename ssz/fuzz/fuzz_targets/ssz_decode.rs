#![no_main]

use arbitrary::Arbitrary;
use commonware_ssz::{
    decode_bool, decode_bytes_x, decode_list_u32, decode_u24, decode_u64, decode_uint_n,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    offset: u16,
    bits: u16,
    element_size: u8,
    data: &'a [u8],
}

// Decoding untrusted input must fail cleanly rather than panic
fuzz_target!(|input: Input<'_>| {
    let offset = input.offset as usize;
    let _ = decode_u24(input.data, offset);
    let _ = decode_u64(input.data, offset);
    let _ = decode_uint_n(input.data, offset, input.bits as u32);
    let _ = decode_bytes_x(input.data, offset);
    let _ = decode_list_u32(input.data, offset, input.element_size as usize);
    if let Err(err) = decode_bool(input.data, offset) {
        if let Some(resume) = err.resume_offset() {
            assert_eq!(resume, offset + 1);
        }
    }
});
