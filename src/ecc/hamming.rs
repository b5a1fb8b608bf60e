//! Hamming block-code encoder.
//!
//! Hamming codes are a family of linear error-correcting codes developed by
//! Richard Hamming in 1950. A block of length `n` carries `r` parity bits at
//! the power-of-two positions and `m = n - r` data bits everywhere else;
//! a compliant receiver can locate and correct any single flipped bit per
//! block by recomputing the parities.
//!
//! This implementation provides:
//! - Encoding of arbitrary-length binary strings with a caller-chosen block
//!   length `n`
//! - Zero-padding of the final data chunk, with the padding count reported
//!   back to the caller for framing purposes
//!
//! Only the transmitter-side transform lives here; decoding and correction
//! belong to the receiving peer.

use crate::ecc::bits::{format_bits, parse_bits};
use crate::ecc::Result;
use crate::error::Error;
use bitvec::prelude::*;
use log::debug;

/// Represents a Hamming code block configuration.
///
/// Constructed from the total block length `n`; the parity-bit count `r` is
/// the smallest integer with `2^r >= n + 1` and the data capacity is
/// `m = n - r`. The only hard validation is `m > 0`: lengths other than the
/// full `2^r - 1` Hamming lengths are accepted and encoded as-is, even
/// though the classical sizing rule does not hold for all of them. Callers
/// that want textbook parameters only can check [`is_standard_length`]
/// before encoding.
///
/// [`is_standard_length`]: HammingCode::is_standard_length
#[derive(Debug, Clone, Copy)]
pub struct HammingCode {
    /// Total bits per block (data + parity)
    total_bits: usize,
    /// Number of parity bits per block
    parity_bits: usize,
    /// Number of data bits per block
    data_bits: usize,
}

/// Outcome of a Hamming encoding call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeResult {
    /// Concatenation of all emitted codeword blocks, in chunk order
    pub encoded_bits: String,
    /// Zero bits appended to the final data chunk, always in `[0, m - 1]`
    pub padding_zeros: usize,
}

impl HammingCode {
    /// Creates a Hamming code configuration for block length `n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BlockSizeTooSmall`] if the derived data capacity
    /// `n - r` is zero, i.e. the block cannot host a single data bit.
    pub fn new(n: usize) -> Result<Self> {
        // Smallest r with 2^r >= n + 1
        let mut parity_bits = 0;
        while (1 << parity_bits) < n + 1 {
            parity_bits += 1;
        }

        if n <= parity_bits {
            return Err(Error::BlockSizeTooSmall(format!(
                "block length {n} leaves no room for data after {parity_bits} parity bits"
            )));
        }

        Ok(HammingCode {
            total_bits: n,
            parity_bits,
            data_bits: n - parity_bits,
        })
    }

    /// Gets the total block length `n`
    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    /// Gets the parity-bit count `r`
    pub fn parity_bits(&self) -> usize {
        self.parity_bits
    }

    /// Gets the data capacity `m` per block
    pub fn data_bits(&self) -> usize {
        self.data_bits
    }

    /// Reports whether `n` is a full Hamming length, `2^r - 1`.
    ///
    /// Other lengths are still encoded, but only the full lengths carry the
    /// classical sizing guarantee. Opt-in check; `encode` never enforces it.
    pub fn is_standard_length(&self) -> bool {
        self.total_bits == (1 << self.parity_bits) - 1
    }

    /// Encodes a binary string into concatenated Hamming blocks.
    ///
    /// The data is zero-padded to a multiple of `m`, split into `m`-bit
    /// chunks, and each chunk is embedded into an `n`-bit codeword with
    /// parity bits at the power-of-two positions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `data_bits` is empty or contains
    /// a character other than `'0'`/`'1'`.
    pub fn encode(&self, data_bits: &str) -> Result<EncodeResult> {
        if data_bits.is_empty() {
            return Err(Error::InvalidInput(
                "message must contain at least one bit".to_string(),
            ));
        }
        let data = parse_bits(data_bits)?;

        let m = self.data_bits;
        let padding_zeros = (m - data.len() % m) % m;

        let mut padded = data;
        padded.resize(padded.len() + padding_zeros, false);
        let blocks = padded.len() / m;

        debug!(
            "hamming encode: {} data bits into {} block(s) of {} bits, {} padding zero(s)",
            data_bits.len(),
            blocks,
            self.total_bits,
            padding_zeros
        );

        let mut encoded = bitvec![u8, Msb0; 0; blocks * self.total_bits];
        for block_idx in 0..blocks {
            let input_start = block_idx * m;
            let output_start = block_idx * self.total_bits;
            self.encode_block(
                &padded[input_start..input_start + m],
                &mut encoded[output_start..output_start + self.total_bits],
            );
        }

        Ok(EncodeResult {
            encoded_bits: format_bits(&encoded),
            padding_zeros,
        })
    }

    /// Encodes a single `m`-bit chunk into an `n`-bit codeword.
    fn encode_block(&self, chunk: &BitSlice<u8, Msb0>, output: &mut BitSlice<u8, Msb0>) {
        // Data bits go to the non-power-of-two positions, in ascending
        // position order (positions are 1-indexed).
        let mut data_idx = 0;
        for pos in 1..=self.total_bits {
            if !pos.is_power_of_two() {
                output.set(pos - 1, chunk[data_idx]);
                data_idx += 1;
            }
        }

        // Parity bit 2^i covers every position whose index has bit i set.
        // All data positions are final at this point; the parity position
        // itself is still zero, so its own membership does not perturb the
        // XOR.
        for i in 0..self.parity_bits {
            let p = 1 << i;
            let mut parity = false;
            for pos in 1..=self.total_bits {
                if pos & p != 0 && output[pos - 1] {
                    parity = !parity;
                }
            }
            output.set(p - 1, parity);
        }
    }
}

/// Encodes a binary string with a Hamming code of block length `n`.
pub fn hamming_encode(data_bits: &str, n: usize) -> Result<EncodeResult> {
    HammingCode::new(n)?.encode(data_bits)
}
