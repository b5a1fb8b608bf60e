//! Link-layer error-control encoders.
//!
//! This module provides the encode-side transforms of two classic
//! error-control schemes:
//! - Parameterized Hamming block codes (single-error-correcting layout)
//! - CRC-32 codeword generation by explicit mod-2 polynomial division
//!
//! Both encoders consume and produce ASCII strings of `'0'`/`'1'`
//! characters, the interchange format of the surrounding transmitter.
//! Framing, transport, and all receiver-side correction logic live with
//! the caller.
//!
//! # Examples
//!
//! ```rust
//! use linkcode::ecc::{crc32_compute_pure, hamming_encode};
//!
//! let block = hamming_encode("1011", 7).unwrap();
//! assert_eq!(block.encoded_bits, "0110011");
//!
//! let crc = crc32_compute_pure("110101").unwrap();
//! assert_eq!(crc.codeword.len(), 38);
//! ```

use crate::error::Error;

/// Result type for encoder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Binary-string parsing and formatting primitives
pub mod bits;
pub use bits::{ascii_to_bits, format_bits, parse_bits};

/// Parameterized Hamming block encoder
pub mod hamming;
pub use hamming::{hamming_encode, EncodeResult, HammingCode};

/// Pure-variant CRC-32 codeword generator
pub mod crc32;
pub use crc32::{crc32_codeword, crc32_compute_pure, CrcResult, CRC32_POLYNOMIAL};
