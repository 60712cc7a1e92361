//! Rijndael key schedule and single-block encryption/decryption.

use crate::block::BlockSize;
use crate::error::Error;
use crate::key::{round_count, Key, KeySize, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::tables::{rcon, sbox};

fn rot_sub_word(word: [u8; 4], step: usize) -> [u8; 4] {
    [
        sbox(word[1]) ^ rcon(step),
        sbox(word[2]),
        sbox(word[3]),
        sbox(word[0]),
    ]
}

fn sub_word(word: [u8; 4]) -> [u8; 4] {
    word.map(sbox)
}

/// Expands `key` into `round_count + 1` round keys of `block_size` bytes each.
pub fn expand_key(key: &Key, block_size: BlockSize) -> RoundKeys {
    let nk = key.size().bytes();
    let rounds = round_count(key.size(), block_size);
    let total = block_size.bytes() * (rounds + 1);

    let mut w = vec![0u8; total];
    w[..nk].copy_from_slice(key.as_bytes());

    let mut step = 0;
    for i in (nk..total).step_by(4) {
        let mut temp = [w[i - 4], w[i - 3], w[i - 2], w[i - 1]];
        if i % nk == 0 {
            temp = rot_sub_word(temp, step);
            step += 1;
        } else if key.size() == KeySize::Bits256 && i % nk == 16 {
            temp = sub_word(temp);
        }
        for j in 0..4 {
            w[i + j] = w[i - nk + j] ^ temp[j];
        }
    }

    RoundKeys::from_parts(w, block_size, rounds)
}

fn check_block(block: &[u8], round_keys: &RoundKeys) -> Result<BlockSize, Error> {
    let size = round_keys.block_size();
    if block.len() != size.bytes() {
        return Err(Error::InvalidBlockSize(block.len()));
    }
    Ok(size)
}

/// Encrypts one block in place.
///
/// The block must be exactly as long as the schedule's block size; nothing is
/// padded at this layer.
pub fn encrypt_block(block: &mut [u8], round_keys: &RoundKeys) -> Result<(), Error> {
    let size = check_block(block, round_keys)?;
    let rounds = round_keys.rounds();

    add_round_key(block, round_keys.get(0));

    for round in 1..rounds {
        sub_bytes(block);
        shift_rows(block, size);
        mix_columns(block);
        add_round_key(block, round_keys.get(round));
    }

    sub_bytes(block);
    shift_rows(block, size);
    add_round_key(block, round_keys.get(rounds));

    Ok(())
}

/// Decrypts one block in place.
pub fn decrypt_block(block: &mut [u8], round_keys: &RoundKeys) -> Result<(), Error> {
    let size = check_block(block, round_keys)?;
    let rounds = round_keys.rounds();

    add_round_key(block, round_keys.get(rounds));
    inv_shift_rows(block, size);
    inv_sub_bytes(block);

    for round in (1..rounds).rev() {
        add_round_key(block, round_keys.get(round));
        inv_mix_columns(block);
        inv_shift_rows(block, size);
        inv_sub_bytes(block);
    }

    add_round_key(block, round_keys.get(0));

    Ok(())
}
