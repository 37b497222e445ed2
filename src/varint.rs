//! Variable-length integer reader for the flexible polyline alphabet.
//!
//! Each character carries 6 bits: the low 5 bits are payload and `0x20`
//! marks that more groups follow. Groups are little-endian.

use crate::DecodeError;

/// URL-safe 64-symbol alphabet, indexed by 6-bit value.
pub const ENCODING_TABLE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

const INVALID: u8 = 0xFF;
const PAYLOAD_MASK: u8 = 0x1F;
const CONTINUATION_BIT: u8 = 0x20;
const GROUP_BITS: u32 = 5;

/// ASCII code to 6-bit value. Anything outside the alphabet maps to `INVALID`.
static DECODING_TABLE: [u8; 128] = build_decoding_table();

const fn build_decoding_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut value = 0;
    while value < ENCODING_TABLE.len() {
        table[ENCODING_TABLE[value] as usize] = value as u8;
        value += 1;
    }
    table
}

/// Looks up the 6-bit value of `c`, or `None` if it is not in the alphabet.
#[inline]
pub fn decode_char(c: char) -> Option<u8> {
    let code = c as u32;
    if code >= 128 {
        return None;
    }
    match DECODING_TABLE[code as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Iterator over the unsigned integers packed into an encoded string.
///
/// Yields `Err` once and then stops if a character is outside the alphabet,
/// the string ends mid-integer, or an integer does not fit in 64 bits.
#[derive(Debug, Clone)]
pub struct VarintReader<'a> {
    chars: std::str::CharIndices<'a>,
    failed: bool,
}

impl<'a> VarintReader<'a> {
    pub fn new(encoded: &'a str) -> Self {
        Self {
            chars: encoded.char_indices(),
            failed: false,
        }
    }

    fn fail(&mut self, err: DecodeError) -> Option<Result<u64, DecodeError>> {
        self.failed = true;
        Some(Err(err))
    }
}

impl Iterator for VarintReader<'_> {
    type Item = Result<u64, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut result: u64 = 0;
        let mut shift: u32 = 0;

        loop {
            let Some((position, character)) = self.chars.next() else {
                if shift > 0 {
                    return self.fail(DecodeError::TruncatedVarint);
                }
                return None;
            };

            let Some(value) = decode_char(character) else {
                return self.fail(DecodeError::MalformedCharacter { character, position });
            };

            let chunk = u64::from(value & PAYLOAD_MASK);
            if shift >= u64::BITS || (chunk << shift) >> shift != chunk {
                return self.fail(DecodeError::Overflow);
            }
            result |= chunk << shift;

            if value & CONTINUATION_BIT == 0 {
                return Some(Ok(result));
            }
            shift += GROUP_BITS;
        }
    }
}

/// Decodes every unsigned integer in `encoded`, failing on the first error.
pub fn decode_unsigned_values(encoded: &str) -> Result<Vec<u64>, DecodeError> {
    VarintReader::new(encoded).collect()
}

/// Zigzag decoding: 0 -> 0, 1 -> -1, 2 -> 1, 3 -> -2, ...
#[inline]
pub fn to_signed(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
