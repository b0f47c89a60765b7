//! Objects composed from the primitives, embedded through the size-prefixed envelope.

use commonware_ssz::{
    decode_bool, decode_bytes_n, decode_bytes_x_cfg, decode_list_u32, decode_u24, decode_u8,
    decode_uint_n, encode_bool, encode_bytes_with_length_prefix,
    encode_bytes_without_length_prefix, encode_list_u32, encode_u24, encode_u8, encode_uint_n,
    ssz_decode, ssz_encode, ssz_encode_size, ssz_type_size, Error, RangeCfg, SszObject,
};
use num_bigint::BigUint;

const MAX_MEMO: usize = 64;

#[derive(Debug, Clone, PartialEq)]
struct Account {
    address: [u8; 20],
    balance: BigUint,
}

impl SszObject for Account {
    fn ssz_size(&self) -> u32 {
        (ssz_type_size("bytes20").unwrap() + ssz_type_size("uint256").unwrap()) as u32
    }

    fn encode_ssz(&self, buf: &mut [u8]) -> Result<usize, Error> {
        let offset = encode_bytes_without_length_prefix(buf, 0, &self.address)?;
        encode_uint_n(buf, offset, 256, &self.balance)
    }

    fn decode_ssz(buf: &[u8]) -> Result<Self, Error> {
        let mut address = [0u8; 20];
        let offset = decode_bytes_n(buf, 0, &mut address)?;
        let (balance, _) = decode_uint_n(buf, offset, 256)?;
        Ok(Self { address, balance })
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Transfer {
    version: u8,
    height: u32,
    urgent: bool,
    memo: Vec<u8>,
    shards: Vec<u32>,
    sender: Option<Account>,
}

impl SszObject for Transfer {
    fn ssz_size(&self) -> u32 {
        let size = 1 + 3 + 1 + (4 + self.memo.len()) + (4 + 4 * self.shards.len());
        (size + ssz_encode_size(self.sender.as_ref())) as u32
    }

    fn encode_ssz(&self, buf: &mut [u8]) -> Result<usize, Error> {
        let offset = encode_u8(buf, 0, self.version)?;
        let offset = encode_u24(buf, offset, self.height)?;
        let offset = encode_bool(buf, offset, self.urgent)?;
        let offset = encode_bytes_with_length_prefix(buf, offset, &self.memo)?;
        let offset = encode_list_u32(buf, offset, &self.shards)?;
        let written = ssz_encode(&mut buf[offset..], self.sender.as_ref())?;
        Ok(offset + written)
    }

    fn decode_ssz(buf: &[u8]) -> Result<Self, Error> {
        let (version, offset) = decode_u8(buf, 0)?;
        let (height, offset) = decode_u24(buf, offset)?;
        let (urgent, offset) = decode_bool(buf, offset)?;
        let (memo, offset) = decode_bytes_x_cfg(buf, offset, &RangeCfg::new(..=MAX_MEMO))?;
        let (shards, offset) = decode_list_u32(buf, offset, 4)?;
        let (sender, offset) = ssz_decode::<Account>(&buf[offset..])
            .map(|(sender, consumed)| (sender, offset + consumed))?;
        if offset != buf.len() {
            return Err(Error::Invalid("Transfer", "trailing bytes"));
        }
        Ok(Self {
            version,
            height,
            urgent,
            memo: memo.to_vec(),
            shards,
            sender,
        })
    }
}

fn transfer(sender: Option<Account>) -> Transfer {
    Transfer {
        version: 1,
        height: 0x00_0A_0B_0C,
        urgent: true,
        memo: b"rent".to_vec(),
        shards: vec![3, 1, 4],
        sender,
    }
}

fn account() -> Account {
    Account {
        address: [0x42; 20],
        balance: BigUint::from(10u64).pow(30),
    }
}

#[test]
fn test_nested_round_trip() {
    for sender in [None, Some(account())] {
        let original = transfer(sender);
        let mut buf = vec![0u8; ssz_encode_size(Some(&original))];
        let end = ssz_encode(&mut buf, Some(&original)).unwrap();
        assert_eq!(end, buf.len());

        let (decoded, offset) = ssz_decode::<Transfer>(&buf).unwrap();
        assert_eq!(decoded, Some(original));
        assert_eq!(offset, buf.len());
    }
}

#[test]
fn test_wire_layout() {
    let original = transfer(None);
    let encoded = original.to_ssz_bytes().unwrap();
    assert_eq!(
        encoded.as_ref(),
        &[
            0x01, // version
            0x0C, 0x0B, 0x0A, // height (24-bit)
            0x01, // urgent
            0x00, 0x00, 0x00, 0x04, b'r', b'e', b'n', b't', // memo
            0x00, 0x00, 0x00, 0x0C, // shards byte length
            0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x04, // shards
            0x00, 0x00, 0x00, 0x00, // absent sender
        ][..]
    );
}

#[test]
fn test_absent_object_is_only_a_prefix() {
    let mut buf = [0xFFu8; 6];
    assert_eq!(ssz_encode::<Transfer>(&mut buf, None), Ok(4));
    assert_eq!(buf, [0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF]);
}

#[test]
fn test_memo_limit_enforced() {
    let mut original = transfer(None);
    original.memo = vec![0; MAX_MEMO + 1];
    let encoded = original.to_ssz_bytes().unwrap();
    assert_eq!(
        Transfer::decode_ssz(&encoded),
        Err(Error::InvalidLength(MAX_MEMO + 1))
    );
}

#[test]
fn test_invalid_boolean_surfaces() {
    let original = transfer(None);
    let mut encoded = original.to_ssz_bytes().unwrap().to_vec();
    encoded[4] = 2;
    let err = Transfer::decode_ssz(&encoded).unwrap_err();
    assert_eq!(err, Error::InvalidBoolean { value: 2, offset: 5 });
    assert_eq!(err.resume_offset(), Some(5));
}

#[test]
fn test_truncated_input() {
    let original = transfer(Some(account()));
    let encoded = original.to_ssz_bytes().unwrap();
    for len in 0..encoded.len() {
        assert!(Transfer::decode_ssz(&encoded[..len]).is_err());
    }
}
