//! Keyed cipher binding a key, a mode and a padding scheme.

use std::sync::OnceLock;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rijndael_core::{expand_key, BlockSize, Key, KeySize, RoundKeys};

use crate::mode::{self, Mode};
use crate::padding::Padding;
use crate::Error;

/// Rijndael encryptor/decryptor with a fixed key, mode and padding.
///
/// Round keys are expanded on first use for each block size and reused
/// afterwards.
#[derive(Debug)]
pub struct Cipher {
    key: Key,
    mode: Mode,
    padding: Padding,
    schedules: [OnceLock<RoundKeys>; 3],
}

impl Cipher {
    /// Creates a cipher with the default [`Padding::Zero`] scheme.
    pub fn new(key: &[u8], mode: Mode) -> Result<Self, Error> {
        Self::with_padding(key, mode, Padding::default())
    }

    /// Creates a cipher with an explicit padding scheme.
    pub fn with_padding(key: &[u8], mode: Mode, padding: Padding) -> Result<Self, Error> {
        Ok(Self {
            key: Key::new(key)?,
            mode,
            padding,
            schedules: Default::default(),
        })
    }

    /// Key length class.
    pub fn key_size(&self) -> KeySize {
        self.key.size()
    }

    /// Mode of operation.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Padding scheme.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Round keys for `block_size`, expanded once and cached.
    pub fn round_keys(&self, block_size: BlockSize) -> &RoundKeys {
        self.schedules[block_size.index()].get_or_init(|| expand_key(&self.key, block_size))
    }

    /// Pads and encrypts `data` with `block_size`-byte blocks.
    ///
    /// `iv` must be exactly one block long in CBC mode and is ignored in ECB.
    pub fn encrypt(
        &self,
        data: &[u8],
        block_size: usize,
        iv: Option<&[u8]>,
    ) -> Result<Vec<u8>, Error> {
        self.encrypt_with_rng(data, block_size, iv, &mut OsRng)
    }

    /// Like [`Cipher::encrypt`], drawing ISO 10126 filler bytes from `rng`.
    pub fn encrypt_with_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        data: &[u8],
        block_size: usize,
        iv: Option<&[u8]>,
        rng: &mut R,
    ) -> Result<Vec<u8>, Error> {
        let size = BlockSize::try_from(block_size)?;
        check_iv(self.mode, size, iv)?;

        let mut buf = self.padding.pad_with_rng(data, size, rng)?;
        mode::encrypt(&mut buf, self.round_keys(size), self.mode, iv)?;
        Ok(buf)
    }

    /// Decrypts `data` and strips padding.
    pub fn decrypt(
        &self,
        data: &[u8],
        block_size: usize,
        iv: Option<&[u8]>,
    ) -> Result<Vec<u8>, Error> {
        let size = BlockSize::try_from(block_size)?;
        check_iv(self.mode, size, iv)?;

        let mut buf = data.to_vec();
        mode::decrypt(&mut buf, self.round_keys(size), self.mode, iv)?;
        self.padding.unpad(buf, size)
    }
}

fn check_iv(mode: Mode, size: BlockSize, iv: Option<&[u8]>) -> Result<(), Error> {
    if mode == Mode::Ecb {
        return Ok(());
    }
    let actual = iv.map_or(0, <[u8]>::len);
    if actual != size.bytes() {
        return Err(Error::InvalidIvLength {
            expected: size.bytes(),
            actual,
        });
    }
    Ok(())
}
