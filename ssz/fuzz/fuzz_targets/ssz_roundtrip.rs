#![no_main]

use arbitrary::Arbitrary;
use commonware_ssz::{
    decode_bool, decode_bytes_n, decode_bytes_x, decode_list_u32, decode_u16, decode_u24,
    decode_u32, decode_u64, decode_u8, decode_uint_n, encode_bool, encode_bytes_with_length_prefix,
    encode_bytes_without_length_prefix, encode_list_u32, encode_u16, encode_u24, encode_u32,
    encode_u64, encode_u8, encode_uint_n,
};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

#[derive(Arbitrary, Debug)]
enum Value {
    U8(u8),
    U16(u16),
    U24(u32),
    U32(u32),
    U64(u64),
    Bool(bool),
    UintN { bytes: u8, raw: Vec<u8> },
    Fixed(Vec<u8>),
    Prefixed(Vec<u8>),
    List(Vec<u32>),
}

#[derive(Arbitrary, Debug)]
struct Input {
    slack: u8,
    values: Vec<Value>,
}

fn encoded_len(value: &Value) -> usize {
    match value {
        Value::U8(_) | Value::Bool(_) => 1,
        Value::U16(_) => 2,
        Value::U24(_) => 3,
        Value::U32(_) => 4,
        Value::U64(_) => 8,
        Value::UintN { bytes, .. } => *bytes as usize,
        Value::Fixed(data) => data.len(),
        Value::Prefixed(data) => 4 + data.len(),
        Value::List(values) => 4 + 4 * values.len(),
    }
}

fn fuzz(input: Input) {
    let total: usize = input.values.iter().map(encoded_len).sum();
    let mut buf = vec![0u8; total + input.slack as usize];

    // Encode everything back to back
    let mut offset = 0;
    for value in &input.values {
        offset = match value {
            Value::U8(v) => encode_u8(&mut buf, offset, *v),
            Value::U16(v) => encode_u16(&mut buf, offset, *v),
            Value::U24(v) => encode_u24(&mut buf, offset, *v),
            Value::U32(v) => encode_u32(&mut buf, offset, *v),
            Value::U64(v) => encode_u64(&mut buf, offset, *v),
            Value::Bool(v) => encode_bool(&mut buf, offset, *v),
            Value::UintN { bytes, raw } => {
                let bits = *bytes as u32 * 8;
                encode_uint_n(&mut buf, offset, bits, &BigUint::from_bytes_be(raw))
            }
            Value::Fixed(data) => encode_bytes_without_length_prefix(&mut buf, offset, data),
            Value::Prefixed(data) => encode_bytes_with_length_prefix(&mut buf, offset, data),
            Value::List(values) => encode_list_u32(&mut buf, offset, values),
        }
        .expect("encode must fit in a buffer sized for it");
    }
    assert_eq!(offset, total);

    // Decode them in the same order
    let mut offset = 0;
    for value in &input.values {
        offset = match value {
            Value::U8(v) => {
                let (decoded, next) = decode_u8(&buf, offset).unwrap();
                assert_eq!(decoded, *v);
                next
            }
            Value::U16(v) => {
                let (decoded, next) = decode_u16(&buf, offset).unwrap();
                assert_eq!(decoded, *v);
                next
            }
            Value::U24(v) => {
                let (decoded, next) = decode_u24(&buf, offset).unwrap();
                assert_eq!(decoded, *v & 0xFF_FFFF);
                next
            }
            Value::U32(v) => {
                let (decoded, next) = decode_u32(&buf, offset).unwrap();
                assert_eq!(decoded, *v);
                next
            }
            Value::U64(v) => {
                let (decoded, next) = decode_u64(&buf, offset).unwrap();
                assert_eq!(decoded, *v);
                next
            }
            Value::Bool(v) => {
                let (decoded, next) = decode_bool(&buf, offset).unwrap();
                assert_eq!(decoded, *v);
                next
            }
            Value::UintN { bytes, raw } => {
                let bits = *bytes as u32 * 8;
                let (decoded, next) = decode_uint_n(&buf, offset, bits).unwrap();
                let modulus = BigUint::from(1u8) << bits;
                assert_eq!(decoded, BigUint::from_bytes_be(raw) % modulus);
                next
            }
            Value::Fixed(data) => {
                let mut dest = vec![0u8; data.len()];
                let next = decode_bytes_n(&buf, offset, &mut dest).unwrap();
                assert_eq!(&dest, data);
                next
            }
            Value::Prefixed(data) => {
                let (decoded, next) = decode_bytes_x(&buf, offset).unwrap();
                assert_eq!(decoded.as_ref(), &data[..]);
                next
            }
            Value::List(values) => {
                let (decoded, next) = decode_list_u32(&buf, offset, 4).unwrap();
                assert_eq!(&decoded, values);
                next
            }
        };
    }
    assert_eq!(offset, total);
}

fuzz_target!(|input: Input| {
    fuzz(input);
});
