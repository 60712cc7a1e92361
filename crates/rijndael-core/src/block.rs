//! Block sizes and block-level helpers.

use core::convert::TryFrom;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported Rijndael block lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlockSize {
    /// 16-byte block (AES).
    Bits128,
    /// 24-byte block.
    Bits192,
    /// 32-byte block.
    Bits256,
}

impl BlockSize {
    /// All block sizes, smallest first.
    pub const ALL: [BlockSize; 3] = [Self::Bits128, Self::Bits192, Self::Bits256];

    /// Block length in bytes.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Bits128 => 16,
            Self::Bits192 => 24,
            Self::Bits256 => 32,
        }
    }

    /// Number of 4-byte state columns (`Nb`).
    #[inline]
    pub const fn columns(self) -> usize {
        self.bytes() / 4
    }

    /// Position of this size in [`BlockSize::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Bits128 => 0,
            Self::Bits192 => 1,
            Self::Bits256 => 2,
        }
    }
}

impl TryFrom<usize> for BlockSize {
    type Error = Error;

    /// Accepts a byte count only; bit counts such as `128` are rejected.
    fn try_from(bytes: usize) -> Result<Self, Self::Error> {
        match bytes {
            16 => Ok(Self::Bits128),
            24 => Ok(Self::Bits192),
            32 => Ok(Self::Bits256),
            other => Err(Error::InvalidBlockSize(other)),
        }
    }
}

/// XORs `rhs` into `dst` byte by byte.
#[inline]
pub fn xor_in_place(dst: &mut [u8], rhs: &[u8]) {
    debug_assert_eq!(dst.len(), rhs.len());
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
