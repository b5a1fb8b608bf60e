//! Conversion between binary strings and bit vectors.
//!
//! The encoders exchange data with their callers as ASCII strings of
//! `'0'`/`'1'` characters. This module owns that boundary: parsing such a
//! string into a [`BitVec`] working buffer, formatting a buffer back, and a
//! small presentation helper for callers that start from text.

use crate::ecc::Result;
use crate::error::Error;
use bitvec::prelude::*;

/// Parses a binary string into a bit vector, one bit per character in
/// original order.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if any character is not `'0'` or `'1'`.
pub fn parse_bits(s: &str) -> Result<BitVec<u8, Msb0>> {
    let mut bits = BitVec::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '0' => bits.push(false),
            '1' => bits.push(true),
            _ => {
                return Err(Error::InvalidInput(format!(
                    "unexpected character {c:?}, only '0' and '1' are accepted"
                )))
            }
        }
    }
    Ok(bits)
}

/// Formats a bit slice as a binary string, one character per bit.
///
/// Exact inverse of [`parse_bits`]: `format_bits(&parse_bits(s)?) == s` for
/// every valid `s`.
pub fn format_bits(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
}

/// Expands text into a binary string, eight big-endian bits per byte.
///
/// Convenience for callers whose payload is text rather than an already
/// bit-oriented message; the output is a valid input to both encoders.
pub fn ascii_to_bits(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 8);
    for byte in text.bytes() {
        for i in (0..8).rev() {
            out.push(if byte & (1 << i) != 0 { '1' } else { '0' });
        }
    }
    out
}
