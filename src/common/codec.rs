use std::cmp::min;

use super::bit_utils::BitStream;
use super::error::{QrError, QrResult};
use super::metadata::Version;

// Byte mode is the only mode emitted; every payload is encoded as raw bytes
pub const MODE_INDICATOR: u8 = 0b0100;

pub const MODE_INDICATOR_BIT_LEN: usize = 4;

pub static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];

// Encoder
//------------------------------------------------------------------------------

pub fn encode(data: &[u8]) -> QrResult<(BitStream, Version)> {
    let ver = Version::fit(data.len())?;
    let bs = encode_with_version(data, ver)?;
    Ok((bs, ver))
}

pub fn encode_with_version(data: &[u8], ver: Version) -> QrResult<BitStream> {
    if data.len() > ver.data_codewords() {
        return Err(QrError::DataTooLong);
    }

    let bcap = ver.data_bit_capacity();
    let mut bs = BitStream::new(bcap);
    push_header(data.len(), ver, &mut bs);
    push_byte_data(data, &mut bs);
    push_terminator(&mut bs);
    pad_remaining_capacity(&mut bs);

    debug_assert!(
        bs.len() == bcap,
        "Encoded stream must fill the data capacity: Len {}, Capacity {bcap}",
        bs.len()
    );

    Ok(bs)
}

// Writer for encoded data
//------------------------------------------------------------------------------

fn push_header(char_cnt: usize, ver: Version, out: &mut BitStream) {
    out.push_bits(MODE_INDICATOR, MODE_INDICATOR_BIT_LEN);
    let len_bits = ver.char_count_bit_len();
    debug_assert!(
        char_cnt < (1 << len_bits),
        "Char count exceeds bit length: Char count {char_cnt}, Char count bits {len_bits}"
    );
    out.push_bits(char_cnt as u16, len_bits);
}

// Payload bits past the capacity are cut. Byte-count fitting admits payloads
// whose header displaces their final bits, and those keep their version
fn push_byte_data(data: &[u8], out: &mut BitStream) {
    for &b in data {
        let remaining = out.capacity() - out.len();
        if remaining == 0 {
            break;
        }
        if remaining < 8 {
            out.push_bits(b >> (8 - remaining), remaining);
            break;
        }
        out.push_bits(b, 8);
    }
}

fn push_terminator(out: &mut BitStream) {
    let bit_len = out.len();
    let bit_capacity = out.capacity();
    if bit_len < bit_capacity {
        let term_len = min(4, bit_capacity - bit_len);
        out.push_bits(0, term_len);
    }
}

fn pad_remaining_capacity(out: &mut BitStream) {
    push_padding_bits(out);
    push_padding_codewords(out);
}

fn push_padding_bits(out: &mut BitStream) {
    let offset = out.len() & 7;
    if offset > 0 {
        let padding_bits_len = 8 - offset;
        out.push_bits(0, padding_bits_len);
    }
}

fn push_padding_codewords(out: &mut BitStream) {
    let offset = out.len() & 7;
    debug_assert!(offset == 0, "Bit offset should be zero before padding codewords: {offset}");

    let remain_byte_capacity = (out.capacity() - out.len()) >> 3;
    PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
        out.push_bits(pc, 8);
    });
}


#[cfg(test)]
mod encode_tests {
    use super::{encode, encode_with_version};
    use crate::common::error::QrError;
    use crate::common::metadata::Version;

    #[test]
    fn test_encode_empty() {
        let (bs, ver) = encode(b"").unwrap();
        assert_eq!(ver, Version::new(1).unwrap());
        assert_eq!(bs.len(), 72);
        assert_eq!(bs.data(), [0x40, 0x00, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC]);
    }

    #[test]
    fn test_encode_hello() {
        let (bs, ver) = encode(b"HELLO").unwrap();
        assert_eq!(ver, Version::new(1).unwrap());
        assert_eq!(bs.data(), [0x40, 0x54, 0x84, 0x54, 0xC4, 0xC4, 0xF0, 0xEC, 0x11]);
    }

    // 8 bytes fit version 1 by byte count; the 12-bit header pushes the
    // last nibble of the payload past the 72-bit boundary
    #[test]
    fn test_encode_boundary_payload() {
        let (bs, ver) = encode(b"WOLFFLOW").unwrap();
        assert_eq!(ver, Version::new(1).unwrap());
        assert_eq!(bs.len(), 72);
        assert_eq!(bs.data(), [0x40, 0x85, 0x74, 0xF4, 0xC4, 0x64, 0x64, 0xC4, 0xF5]);
    }

    #[test]
    fn test_encode_capacity_exact_payload() {
        let (bs, ver) = encode(&[b'A'; 9]).unwrap();
        assert_eq!(ver, Version::new(1).unwrap());
        assert_eq!(bs.len(), 72);
        assert_eq!(bs.data(), [0x40, 0x94, 0x14, 0x14, 0x14, 0x14, 0x14, 0x14, 0x14]);
    }

    #[test]
    fn test_encode_two_hundred_bytes() {
        let (bs, ver) = encode(&[b'x'; 200]).unwrap();
        assert_eq!(ver, Version::new(15).unwrap());
        assert_eq!(bs.len(), 223 << 3);
        assert_eq!(&bs.data()[..3], [0x40, 0x0C, 0x87]);
    }

    #[test]
    fn test_encode_overflow() {
        assert_eq!(encode(&[0; 386]).unwrap_err(), QrError::DataTooLong);
    }

    #[test]
    fn test_encode_with_version_overflow() {
        let ver = Version::new(1).unwrap();
        assert_eq!(encode_with_version(&[0; 10], ver).unwrap_err(), QrError::DataTooLong);
    }

    #[test]
    fn test_encode_with_version_pads_to_capacity() {
        for v in 1..=20 {
            let ver = Version::new(v).unwrap();
            let bs = encode_with_version(b"pad", ver).unwrap();
            assert_eq!(bs.len(), ver.data_bit_capacity(), "Version {v}");
        }
    }
}
