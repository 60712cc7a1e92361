//! Rijndael encryption of byte buffers in ECB and CBC modes.
//!
//! [`Cipher`] binds a 128, 192 or 256-bit key to a [`Mode`] and a
//! [`Padding`] scheme. Each call picks the block size (16, 24 or 32 bytes),
//! pads the plaintext, and chains the block cipher from `rijndael-core` over
//! it:
//!
//! ```
//! use rijndael::{Cipher, Mode, Padding};
//!
//! let cipher = Cipher::with_padding(b"abcdefabcdefabcd", Mode::Cbc, Padding::Pkcs7)?;
//! let iv = [0u8; 32];
//! let ct = cipher.encrypt(b"attack at dawn", 32, Some(&iv))?;
//! assert_eq!(ct.len(), 32);
//! assert_eq!(cipher.decrypt(&ct, 32, Some(&iv))?, b"attack at dawn");
//! # Ok::<(), rijndael::Error>(())
//! ```
//!
//! Nothing here is authenticated or constant time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod encoding;
mod error;
pub mod mode;
mod padding;

pub use crate::cipher::Cipher;
pub use crate::encoding::{from_hex, to_hex};
pub use crate::error::Error;
pub use crate::mode::Mode;
pub use crate::padding::Padding;
pub use rijndael_core::{BlockSize, Key, KeySize, RoundKeys};
