//! ECB and CBC chaining over whole-block buffers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rijndael_core::{decrypt_block, encrypt_block, xor_in_place, RoundKeys};

use crate::Error;

/// Block cipher mode of operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Electronic codebook: every block is independent.
    Ecb,
    /// Cipher block chaining with a one-block IV.
    Cbc,
}

/// Checks that `data` is block aligned and that CBC has a one-block IV.
///
/// Returns the IV to chain from; ECB ignores any IV it is given.
fn validate<'a>(
    data: &[u8],
    round_keys: &RoundKeys,
    mode: Mode,
    iv: Option<&'a [u8]>,
) -> Result<Option<&'a [u8]>, Error> {
    let bs = round_keys.block_size().bytes();
    if data.len() % bs != 0 {
        return Err(Error::UnalignedInput {
            len: data.len(),
            block_size: bs,
        });
    }
    match mode {
        Mode::Ecb => Ok(None),
        Mode::Cbc => match iv {
            Some(iv) if iv.len() == bs => Ok(Some(iv)),
            other => Err(Error::InvalidIvLength {
                expected: bs,
                actual: other.map_or(0, <[u8]>::len),
            }),
        },
    }
}

/// Encrypts `data` in place.
///
/// `data` must be a whole number of blocks; padding happens upstream.
pub fn encrypt(
    data: &mut [u8],
    round_keys: &RoundKeys,
    mode: Mode,
    iv: Option<&[u8]>,
) -> Result<(), Error> {
    let bs = round_keys.block_size().bytes();
    match validate(data, round_keys, mode, iv)? {
        None => {
            for block in data.chunks_exact_mut(bs) {
                encrypt_block(block, round_keys)?;
            }
        }
        Some(iv) => {
            let mut chain = [0u8; 32];
            chain[..bs].copy_from_slice(iv);
            for block in data.chunks_exact_mut(bs) {
                xor_in_place(block, &chain[..bs]);
                encrypt_block(block, round_keys)?;
                chain[..bs].copy_from_slice(block);
            }
        }
    }
    Ok(())
}

/// Decrypts `data` in place.
///
/// CBC runs in two passes: every block goes through the inverse cipher on its
/// own, then the result is XORed with the ciphertext shifted one block to the
/// right (IV first).
pub fn decrypt(
    data: &mut [u8],
    round_keys: &RoundKeys,
    mode: Mode,
    iv: Option<&[u8]>,
) -> Result<(), Error> {
    let bs = round_keys.block_size().bytes();
    let chain = validate(data, round_keys, mode, iv)?;

    let previous = match chain {
        Some(iv) if !data.is_empty() => {
            let mut shifted = Vec::with_capacity(data.len());
            shifted.extend_from_slice(iv);
            shifted.extend_from_slice(&data[..data.len() - bs]);
            Some(shifted)
        }
        _ => None,
    };

    for block in data.chunks_exact_mut(bs) {
        decrypt_block(block, round_keys)?;
    }

    if let Some(previous) = previous {
        xor_in_place(data, &previous);
    }
    Ok(())
}
