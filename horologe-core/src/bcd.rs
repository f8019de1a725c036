//! Packed binary-coded decimal codec
//!
//! Every DS3231 time register stores two decimal digits in one byte:
//! tens in bits 7-4, units in bits 3-0. Each digit is rebuilt from (or
//! packed into) its nibble by binary-weight accumulation.

use crate::error::{InvalidBcd, RangeError};

/// Nibble bit weights, most significant first
const WEIGHTS: [u8; 4] = [8, 4, 2, 1];

/// Largest value two BCD digits can hold
pub const MAX_VALUE: u8 = 99;

/// Sum the binary weights of the set bits in the low nibble
const fn nibble_value(nibble: u8) -> u8 {
    let mut out = 0;
    let mut i = 0;
    while i < WEIGHTS.len() {
        if nibble & WEIGHTS[i] != 0 {
            out += WEIGHTS[i];
        }
        i += 1;
    }
    out
}

/// Pack one decimal digit into a nibble, greedily by weight
///
/// Digits above 15 saturate to 0xF.
const fn digit_nibble(digit: u8) -> u8 {
    let mut rest = digit;
    let mut nibble = 0;
    let mut i = 0;
    while i < WEIGHTS.len() {
        if rest >= WEIGHTS[i] {
            nibble |= WEIGHTS[i];
            rest -= WEIGHTS[i];
        }
        i += 1;
    }
    nibble
}

/// Decode a packed BCD byte
///
/// # Errors
/// Returns [`InvalidBcd`] if either nibble is above 9. A correctly wired
/// chip never produces such a byte.
pub const fn decode(bcd: u8) -> Result<u8, InvalidBcd> {
    if bcd >> 4 > 9 || bcd & 0x0F > 9 {
        return Err(InvalidBcd(bcd));
    }
    Ok(decode_unchecked(bcd))
}

/// Decode a packed BCD byte without checking the nibbles
///
/// Nibbles above 9 are weighted as-is, so the result is not a decimal
/// reading of the byte: `0xAF` decodes to `10 * 10 + 15 = 115`.
pub const fn decode_unchecked(bcd: u8) -> u8 {
    nibble_value(bcd >> 4) * 10 + nibble_value(bcd & 0x0F)
}

/// Encode a value in `0..=99` as packed BCD
///
/// Values above 99 are not rejected: the tens digit is packed into the
/// high nibble as far as it fits, giving a meaningless byte. Range-check
/// before calling, or use [`try_encode`].
pub const fn encode(value: u8) -> u8 {
    (digit_nibble(value / 10) << 4) | digit_nibble(value % 10)
}

/// Encode a value, rejecting anything above 99
pub const fn try_encode(value: u8) -> Result<u8, RangeError> {
    if value > MAX_VALUE {
        return Err(RangeError {
            field: "bcd",
            value,
        });
    }
    Ok(encode(value))
}
