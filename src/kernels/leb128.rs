//! This module contains the pure, stateless kernel for LEB128 (Little-Endian
//! Base 128) variable-length integer encoding.
//!
//! Every length prefix on the wire (strings, opaque byte buffers) is written
//! with this kernel. Each output byte carries 7 value bits in its low bits and
//! a continuation flag in its high bit, least-significant group first.

use num_traits::{AsPrimitive, PrimInt, Unsigned, Zero};

/// Largest number of bytes a `u64` can occupy once encoded.
pub const MAX_ENCODED_LEN_U64: usize = 10;

const PAYLOAD_MASK: u8 = 0x7F;
const CONTINUATION_BIT: u8 = 0x80;

/// Encodes a single unsigned integer into a LEB128 byte sequence, appending to `buffer`.
///
/// `0` encodes as the single byte `0x00`.
pub fn encode_one<T>(value: T, buffer: &mut Vec<u8>)
where
    T: PrimInt + Unsigned + AsPrimitive<u8>,
{
    let mut current_value = value;
    loop {
        let byte: u8 = current_value.as_() & PAYLOAD_MASK;
        current_value = current_value >> 7;
        if current_value.is_zero() {
            buffer.push(byte);
            return;
        }
        buffer.push(byte | CONTINUATION_BIT);
    }
}

/// Returns how many bytes `encode_one` emits for `value`: `ceil(bitlen / 7)`,
/// and 1 for zero.
pub fn encoded_len(value: u64) -> usize {
    let bit_len = (u64::BITS - value.leading_zeros()) as usize;
    bit_len.div_ceil(7).max(1)
}
