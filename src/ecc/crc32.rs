//! CRC-32 codeword generation by mod-2 polynomial division.
//!
//! The message is treated as a polynomial over GF(2), zero-extended by 32
//! bits, and divided by the standard CRC-32 generator polynomial
//! `0x04C11DB7` (degree 32, leading coefficient implicit). The 32-bit
//! remainder is appended to the message to form the codeword.
//!
//! This is the "pure" division variant: no lookup table, no initial value,
//! no final complement, no bit reflection. The remainder it produces is
//! deliberately NOT the IEEE 802.3 checksum; changing that would change
//! the wire-visible value the receiving peer checks against.

use crate::ecc::bits::{format_bits, parse_bits};
use crate::ecc::Result;
use bitvec::prelude::*;
use log::trace;

/// Low 32 bits of the generator polynomial
/// `x^32 + x^26 + x^23 + x^22 + x^16 + x^12 + x^11 + x^10 + x^8 + x^7 + x^5 + x^4 + x^2 + x + 1`.
pub const CRC32_POLYNOMIAL: u32 = 0x04C11DB7;

/// Width of the emitted remainder in bits.
const CRC_WIDTH: usize = 32;

/// Length of the full generator, including the implicit leading term.
const GENERATOR_LEN: usize = CRC_WIDTH + 1;

/// The 33-bit generator, index 0 holding the degree-32 coefficient.
/// Process-wide constant; nothing ever rebuilds or mutates it.
static GENERATOR: [bool; GENERATOR_LEN] = generator_bits();

const fn generator_bits() -> [bool; GENERATOR_LEN] {
    let mut g = [false; GENERATOR_LEN];
    g[0] = true;
    let mut i = 0;
    while i < CRC_WIDTH {
        g[1 + i] = (CRC32_POLYNOMIAL >> (31 - i)) & 1 == 1;
        i += 1;
    }
    g
}

/// Outcome of a CRC-32 computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrcResult {
    /// The 32-bit remainder, formatted as a binary string
    pub remainder: String,
    /// The original message followed by the remainder
    pub codeword: String,
}

/// Reduces `work` in place to its mod-2 remainder against [`GENERATOR`].
///
/// Left-to-right elimination: whenever the cursor sits on a set bit, the
/// generator is XOR-ed into the 33-bit window starting there; zero bits are
/// skipped without XOR-ing. On return every position that could serve as a
/// leading term is zero, leaving the remainder in the final 32 bits.
fn mod2_divide(work: &mut BitSlice<u8, Msb0>) {
    let len = work.len();
    if len < GENERATOR_LEN {
        return;
    }
    let last_start = len - GENERATOR_LEN;

    let mut i = 0;
    while i <= last_start {
        if work[i] {
            for (j, &coeff) in GENERATOR.iter().enumerate() {
                if coeff {
                    let idx = i + j;
                    let bit = work[idx];
                    work.set(idx, !bit);
                }
            }
        }
        i += 1;
        while i <= last_start && !work[i] {
            i += 1;
        }
    }
}

/// Computes the pure-variant CRC-32 remainder and codeword for a message.
///
/// The empty message is accepted as a degenerate case: its dividend is 32
/// zero bits, so the remainder is all zeros.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `message_bits` contains a character
/// other than `'0'`/`'1'`.
///
/// [`Error::InvalidInput`]: crate::error::Error::InvalidInput
pub fn crc32_compute_pure(message_bits: &str) -> Result<CrcResult> {
    let mut work = parse_bits(message_bits)?;
    work.resize(work.len() + CRC_WIDTH, false);

    mod2_divide(&mut work);
    let remainder = format_bits(&work[work.len() - CRC_WIDTH..]);

    trace!(
        "crc32 pure: {} message bits, remainder {remainder}",
        message_bits.len()
    );

    Ok(CrcResult {
        codeword: format!("{message_bits}{remainder}"),
        remainder,
    })
}

/// Computes the full codeword (message plus remainder) for a message.
pub fn crc32_codeword(message_bits: &str) -> Result<String> {
    Ok(crc32_compute_pure(message_bits)?.codeword)
}
