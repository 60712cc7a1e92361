//! Plaintext padding schemes.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rijndael_core::BlockSize;

use crate::Error;

/// How plaintext is extended to a whole number of blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Padding {
    /// No padding; data must already be block aligned.
    None,
    /// Zero bytes up to the next boundary, nothing when already aligned.
    ///
    /// Unpadding strips up to one block of trailing zeros, so plaintext that
    /// itself ends in zero bytes does not survive a round trip.
    #[default]
    Zero,
    /// `n` bytes of value `n`.
    Pkcs7,
    /// `n - 1` zero bytes followed by `n`.
    AnsiX923,
    /// `n - 1` random bytes followed by `n`.
    Iso10126,
}

fn counted_len(len: usize, block_size: usize) -> usize {
    block_size - len % block_size
}

impl Padding {
    /// Pads `data` to a multiple of `block_size`, drawing ISO 10126 filler from the OS RNG.
    pub fn pad(&self, data: &[u8], block_size: BlockSize) -> Result<Vec<u8>, Error> {
        self.pad_with_rng(data, block_size, &mut OsRng)
    }

    /// Pads `data` to a multiple of `block_size`.
    ///
    /// `rng` is only consulted for [`Padding::Iso10126`].
    pub fn pad_with_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        data: &[u8],
        block_size: BlockSize,
        rng: &mut R,
    ) -> Result<Vec<u8>, Error> {
        let bs = block_size.bytes();
        let mut out = Vec::with_capacity(data.len() + bs);
        out.extend_from_slice(data);

        match self {
            Self::None => {
                if data.len() % bs != 0 {
                    return Err(Error::UnalignedInput {
                        len: data.len(),
                        block_size: bs,
                    });
                }
            }
            Self::Zero => {
                let n = (bs - data.len() % bs) % bs;
                out.resize(data.len() + n, 0);
            }
            Self::Pkcs7 => {
                let n = counted_len(data.len(), bs);
                out.resize(data.len() + n, n as u8);
            }
            Self::AnsiX923 => {
                let n = counted_len(data.len(), bs);
                out.resize(data.len() + n - 1, 0);
                out.push(n as u8);
            }
            Self::Iso10126 => {
                let n = counted_len(data.len(), bs);
                out.resize(data.len() + n - 1, 0);
                rng.fill_bytes(&mut out[data.len()..]);
                out.push(n as u8);
            }
        }

        Ok(out)
    }

    /// Removes padding added by [`Padding::pad`].
    ///
    /// The counted schemes read the pad length from the final byte; a count of
    /// zero, one larger than a block, or one larger than the data is rejected.
    pub fn unpad(&self, mut data: Vec<u8>, block_size: BlockSize) -> Result<Vec<u8>, Error> {
        let bs = block_size.bytes();
        match self {
            Self::None => {
                if data.len() % bs != 0 {
                    return Err(Error::UnalignedInput {
                        len: data.len(),
                        block_size: bs,
                    });
                }
            }
            Self::Zero => {
                let zeros = data.iter().rev().take(bs).take_while(|&&b| b == 0).count();
                data.truncate(data.len() - zeros);
            }
            Self::Pkcs7 | Self::AnsiX923 | Self::Iso10126 => {
                let n = usize::from(*data.last().ok_or(Error::InvalidPadding)?);
                if n == 0 || n > bs || n > data.len() {
                    return Err(Error::InvalidPadding);
                }
                data.truncate(data.len() - n);
            }
        }
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    const COUNTED: [Padding; 3] = [Padding::Pkcs7, Padding::AnsiX923, Padding::Iso10126];

    fn sample(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8 + 1).collect()
    }

    #[test]
    fn counted_schemes_round_trip_every_length() {
        let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
        for padding in COUNTED {
            for size in BlockSize::ALL {
                let bs = size.bytes();
                for len in 0..=3 * bs {
                    let data = sample(len);
                    let padded = padding.pad_with_rng(&data, size, &mut rng).unwrap();
                    assert_eq!(padded.len() % bs, 0);
                    assert!(padded.len() > data.len(), "{padding:?} always pads");
                    assert_eq!(padding.unpad(padded, size).unwrap(), data);
                }
            }
        }
    }

    #[test]
    fn zero_round_trips_when_plaintext_has_no_trailing_zero() {
        for size in BlockSize::ALL {
            let bs = size.bytes();
            for len in 0..=3 * bs {
                let data = sample(len);
                let padded = Padding::Zero.pad(&data, size).unwrap();
                assert_eq!(padded.len(), len.div_ceil(bs) * bs);
                assert_eq!(Padding::Zero.unpad(padded, size).unwrap(), data);
            }
        }
    }

    #[test]
    fn zero_unpad_loses_trailing_zero_plaintext() {
        let data = vec![1, 2, 3, 0];
        let padded = Padding::Zero.pad(&data, BlockSize::Bits128).unwrap();
        assert_eq!(
            Padding::Zero.unpad(padded, BlockSize::Bits128).unwrap(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn zero_unpad_strips_at_most_one_block() {
        let data = vec![0u8; 48];
        let out = Padding::Zero.unpad(data, BlockSize::Bits128).unwrap();
        assert_eq!(out.len(), 32);
    }

    #[test]
    fn none_requires_alignment() {
        let size = BlockSize::Bits192;
        assert_eq!(Padding::None.pad(&[0u8; 48], size).unwrap().len(), 48);
        assert_eq!(
            Padding::None.pad(&[0u8; 47], size),
            Err(Error::UnalignedInput {
                len: 47,
                block_size: 24
            })
        );
        assert_eq!(Padding::None.unpad(vec![7u8; 24], size).unwrap(), vec![7u8; 24]);
    }

    #[test]
    fn pad_layouts() {
        let size = BlockSize::Bits128;
        let data = [0xaau8; 12];

        let pkcs7 = Padding::Pkcs7.pad(&data, size).unwrap();
        assert_eq!(&pkcs7[12..], &[4, 4, 4, 4]);

        let ansi = Padding::AnsiX923.pad(&data, size).unwrap();
        assert_eq!(&ansi[12..], &[0, 0, 0, 4]);

        let iso = Padding::Iso10126.pad(&data, size).unwrap();
        assert_eq!(iso.len(), 16);
        assert_eq!(iso[15], 4);

        let aligned = Padding::Pkcs7.pad(&[0u8; 16], size).unwrap();
        assert_eq!(aligned.len(), 32);
        assert!(aligned[16..].iter().all(|&b| b == 16));
    }

    #[test]
    fn counted_unpad_rejects_bad_counts() {
        let size = BlockSize::Bits128;
        for padding in COUNTED {
            let mut zero_count = vec![1u8; 16];
            zero_count[15] = 0;
            assert_eq!(padding.unpad(zero_count, size), Err(Error::InvalidPadding));

            let mut too_large = vec![1u8; 16];
            too_large[15] = 17;
            assert_eq!(padding.unpad(too_large, size), Err(Error::InvalidPadding));

            assert_eq!(padding.unpad(vec![5u8; 3], size), Err(Error::InvalidPadding));
            assert_eq!(padding.unpad(Vec::new(), size), Err(Error::InvalidPadding));
        }
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Padding::default(), Padding::Zero);
    }
}
