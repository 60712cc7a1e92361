//! Reference Rijndael implementation covering 128, 192 and 256-bit blocks and keys.
//!
//! This crate follows the original Rijndael proposal (AES is the 128-bit-block
//! subset) and provides:
//! - Compile-time S-box, inverse S-box and GF(2^8) multiplication tables.
//! - The key schedule for all nine (key, block) size combinations.
//! - Single-block encryption and decryption.
//!
//! The implementation is table-driven and aims for clarity and testability
//! rather than constant-time guarantees; it should not be treated as
//! side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod round;
pub mod tables;

pub use crate::block::{xor_in_place, BlockSize};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::error::Error;
pub use crate::key::{round_count, Key, KeySize, RoundKeys};
