//! Errors returned by the public encryption API.

use core::fmt;

/// Failures reported at the public operation boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Key length in bytes is not 16, 24 or 32.
    InvalidKeySize(usize),
    /// Block length in bytes is not 16, 24 or 32.
    InvalidBlockSize(usize),
    /// CBC was requested without an IV of exactly one block.
    InvalidIvLength {
        /// Required IV length (the block size).
        expected: usize,
        /// Supplied IV length, zero when no IV was given.
        actual: usize,
    },
    /// Data is not a whole number of blocks and no padding can fix it.
    UnalignedInput {
        /// Length of the offending buffer.
        len: usize,
        /// Block size in bytes.
        block_size: usize,
    },
    /// The trailing count byte of a counted padding scheme is out of range.
    InvalidPadding,
    /// Hex text could not be decoded.
    Hex(hex::FromHexError),
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
            Self::InvalidIvLength { expected, actual } => {
                write!(f, "invalid IV length: {actual} bytes (expected {expected})")
            }
            Self::UnalignedInput { len, block_size } => write!(
                f,
                "input of {len} bytes is not a multiple of the {block_size}-byte block size"
            ),
            Self::InvalidPadding => write!(f, "invalid padding"),
            Self::Hex(err) => write!(f, "hex decode error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Hex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rijndael_core::Error> for Error {
    fn from(err: rijndael_core::Error) -> Self {
        match err {
            rijndael_core::Error::InvalidKeySize(len) => Self::InvalidKeySize(len),
            rijndael_core::Error::InvalidBlockSize(len) => Self::InvalidBlockSize(len),
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Self::Hex(err)
    }
}
