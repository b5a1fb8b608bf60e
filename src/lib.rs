pub mod ecc;
pub mod error;

pub use ecc::{crc32, hamming};
pub use error::{Error, Result};
