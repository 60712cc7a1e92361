//! Errors reported by the block layer.

use core::fmt;

/// Parameter validation failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Key length in bytes is not 16, 24 or 32.
    InvalidKeySize(usize),
    /// Block length in bytes is not 16, 24 or 32, or does not match the schedule.
    InvalidBlockSize(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeySize(len) => {
                write!(f, "invalid key size: {len} bytes (expected 16, 24 or 32)")
            }
            Self::InvalidBlockSize(len) => {
                write!(f, "invalid block size: {len} bytes (expected 16, 24 or 32)")
            }
        }
    }
}

impl std::error::Error for Error {}
