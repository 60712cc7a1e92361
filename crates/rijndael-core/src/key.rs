//! Key types and the expanded round-key schedule.

use core::convert::TryFrom;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::BlockSize;
use crate::error::Error;

/// Supported Rijndael key lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeySize {
    /// 16-byte key.
    Bits128,
    /// 24-byte key.
    Bits192,
    /// 32-byte key.
    Bits256,
}

impl KeySize {
    /// Key length in bytes.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Bits128 => 16,
            Self::Bits192 => 24,
            Self::Bits256 => 32,
        }
    }
}

impl TryFrom<usize> for KeySize {
    type Error = Error;

    fn try_from(bytes: usize) -> Result<Self, Self::Error> {
        match bytes {
            16 => Ok(Self::Bits128),
            24 => Ok(Self::Bits192),
            32 => Ok(Self::Bits256),
            other => Err(Error::InvalidKeySize(other)),
        }
    }
}

/// Number of rounds for a (key, block) combination.
///
/// | key \ block | 128 | 192 | 256 |
/// |-------------|-----|-----|-----|
/// | 128         | 10  | 12  | 14  |
/// | 192         | 12  | 12  | 14  |
/// | 256         | 14  | 14  | 14  |
pub const fn round_count(key: KeySize, block: BlockSize) -> usize {
    const ROUNDS: [[usize; 3]; 3] = [[10, 12, 14], [12, 12, 14], [14, 14, 14]];
    let row = match key {
        KeySize::Bits128 => 0,
        KeySize::Bits192 => 1,
        KeySize::Bits256 => 2,
    };
    ROUNDS[row][block.index()]
}

/// Validated cipher key of 16, 24 or 32 bytes.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "zeroize", derive(Zeroize, ZeroizeOnDrop))]
pub struct Key {
    bytes: [u8; 32],
    #[cfg_attr(feature = "zeroize", zeroize(skip))]
    size: KeySize,
}

impl Key {
    /// Copies `bytes` into a new key, rejecting unsupported lengths.
    pub fn new(bytes: &[u8]) -> Result<Self, Error> {
        let size = KeySize::try_from(bytes.len())?;
        let mut buf = [0u8; 32];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self { bytes: buf, size })
    }

    /// Key length class.
    #[inline]
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.size.bytes()]
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Expanded round keys: `rounds + 1` consecutive block-length slices.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "zeroize", derive(Zeroize, ZeroizeOnDrop))]
pub struct RoundKeys {
    bytes: Vec<u8>,
    #[cfg_attr(feature = "zeroize", zeroize(skip))]
    block_size: BlockSize,
    #[cfg_attr(feature = "zeroize", zeroize(skip))]
    rounds: usize,
}

impl RoundKeys {
    pub(crate) fn from_parts(bytes: Vec<u8>, block_size: BlockSize, rounds: usize) -> Self {
        debug_assert_eq!(bytes.len(), block_size.bytes() * (rounds + 1));
        Self {
            bytes,
            block_size,
            rounds,
        }
    }

    /// Returns the round key at the requested index (`0..=rounds`).
    ///
    /// # Panics
    ///
    /// Panics if `round > self.rounds()`.
    #[inline]
    pub fn get(&self, round: usize) -> &[u8] {
        let len = self.block_size.bytes();
        &self.bytes[round * len..(round + 1) * len]
    }

    /// Block size this schedule was expanded for.
    #[inline]
    pub fn block_size(&self) -> BlockSize {
        self.block_size
    }

    /// Number of rounds.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// The full schedule.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys")
            .field("block_size", &self.block_size)
            .field("rounds", &self.rounds)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unsupported_key_lengths() {
        for len in [0usize, 15, 17, 20, 31, 33, 64] {
            let bytes = vec![0u8; len];
            assert_eq!(Key::new(&bytes), Err(Error::InvalidKeySize(len)));
        }
    }

    #[test]
    fn keeps_raw_bytes() {
        let bytes: Vec<u8> = (0..24).collect();
        let key = Key::new(&bytes).unwrap();
        assert_eq!(key.size(), KeySize::Bits192);
        assert_eq!(key.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn round_table_is_max_of_columns_plus_six() {
        for (k, key) in [KeySize::Bits128, KeySize::Bits192, KeySize::Bits256]
            .into_iter()
            .enumerate()
        {
            for block in BlockSize::ALL {
                let nk = 4 + 2 * k;
                assert_eq!(round_count(key, block), nk.max(block.columns()) + 6);
            }
        }
    }

    #[test]
    fn debug_hides_key_material() {
        let key = Key::new(&[0xaa; 16]).unwrap();
        let shown = format!("{key:?}");
        assert!(!shown.contains("170"));
        assert!(!shown.to_lowercase().contains("aa"));
    }
}
