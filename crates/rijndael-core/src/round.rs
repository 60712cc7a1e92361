//! Rijndael round transformations over 16, 24 or 32-byte states.
//!
//! The state is stored column-major: byte `c * 4 + r` sits in row `r`,
//! column `c`. All functions here assume the caller already validated the
//! state length.

use crate::block::{xor_in_place, BlockSize};
use crate::tables::{gf_mul11, gf_mul13, gf_mul14, gf_mul2, gf_mul3, gf_mul9, inv_sbox, sbox};

/// Builds the ShiftRows gather table: output byte `i` comes from input byte `table[i]`.
const fn shift_table<const N: usize>(offsets: [usize; 4]) -> [usize; N] {
    let columns = N / 4;
    let mut table = [0usize; N];
    let mut c = 0;
    while c < columns {
        let mut r = 0;
        while r < 4 {
            table[c * 4 + r] = ((c + offsets[r]) % columns) * 4 + r;
            r += 1;
        }
        c += 1;
    }
    table
}

const fn invert_permutation<const N: usize>(table: [usize; N]) -> [usize; N] {
    let mut inverse = [0usize; N];
    let mut i = 0;
    while i < N {
        inverse[table[i]] = i;
        i += 1;
    }
    inverse
}

// Row offsets: 0,1,2,3 for Nb = 4 and 6; 0,1,3,4 for Nb = 8.
const SHIFT_128: [usize; 16] = shift_table([0, 1, 2, 3]);
const SHIFT_192: [usize; 24] = shift_table([0, 1, 2, 3]);
const SHIFT_256: [usize; 32] = shift_table([0, 1, 3, 4]);
const INV_SHIFT_128: [usize; 16] = invert_permutation(SHIFT_128);
const INV_SHIFT_192: [usize; 24] = invert_permutation(SHIFT_192);
const INV_SHIFT_256: [usize; 32] = invert_permutation(SHIFT_256);

fn shift_permutation(size: BlockSize) -> &'static [usize] {
    match size {
        BlockSize::Bits128 => &SHIFT_128,
        BlockSize::Bits192 => &SHIFT_192,
        BlockSize::Bits256 => &SHIFT_256,
    }
}

fn inv_shift_permutation(size: BlockSize) -> &'static [usize] {
    match size {
        BlockSize::Bits128 => &INV_SHIFT_128,
        BlockSize::Bits192 => &INV_SHIFT_192,
        BlockSize::Bits256 => &INV_SHIFT_256,
    }
}

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut [u8]) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut [u8]) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

fn permute(state: &mut [u8], table: &[usize]) {
    let mut tmp = [0u8; 32];
    let len = state.len();
    for (dst, &src) in tmp[..len].iter_mut().zip(table.iter()) {
        *dst = state[src];
    }
    state.copy_from_slice(&tmp[..len]);
}

/// Performs ShiftRows in place.
#[inline]
pub fn shift_rows(state: &mut [u8], size: BlockSize) {
    permute(state, shift_permutation(size));
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows(state: &mut [u8], size: BlockSize) {
    permute(state, inv_shift_permutation(size));
}

fn mix_single_column(col: &mut [u8]) {
    let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
    col[0] = gf_mul2(a0) ^ gf_mul3(a1) ^ a2 ^ a3;
    col[1] = a0 ^ gf_mul2(a1) ^ gf_mul3(a2) ^ a3;
    col[2] = a0 ^ a1 ^ gf_mul2(a2) ^ gf_mul3(a3);
    col[3] = gf_mul3(a0) ^ a1 ^ a2 ^ gf_mul2(a3);
}

fn inv_mix_single_column(col: &mut [u8]) {
    let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
    col[0] = gf_mul14(a0) ^ gf_mul11(a1) ^ gf_mul13(a2) ^ gf_mul9(a3);
    col[1] = gf_mul9(a0) ^ gf_mul14(a1) ^ gf_mul11(a2) ^ gf_mul13(a3);
    col[2] = gf_mul13(a0) ^ gf_mul9(a1) ^ gf_mul14(a2) ^ gf_mul11(a3);
    col[3] = gf_mul11(a0) ^ gf_mul13(a1) ^ gf_mul9(a2) ^ gf_mul14(a3);
}

/// MixColumns over every column of the state.
#[inline]
pub fn mix_columns(state: &mut [u8]) {
    for column in state.chunks_exact_mut(4) {
        mix_single_column(column);
    }
}

/// Inverse MixColumns over every column of the state.
#[inline]
pub fn inv_mix_columns(state: &mut [u8]) {
    for column in state.chunks_exact_mut(4) {
        inv_mix_single_column(column);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut [u8], round_key: &[u8]) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_rows_128_matches_aes_layout() {
        let mut state: Vec<u8> = (0..16).collect();
        shift_rows(&mut state, BlockSize::Bits128);
        assert_eq!(
            state,
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
    }

    #[test]
    fn shift_rows_256_uses_wider_offsets() {
        let mut state: Vec<u8> = (0..32).collect();
        shift_rows(&mut state, BlockSize::Bits256);
        // Column 0 gathers rows from columns 0, 1, 3 and 4.
        assert_eq!(&state[..4], &[0, 5, 14, 19]);
    }

    #[test]
    fn inverse_shift_undoes_shift_for_all_sizes() {
        for size in BlockSize::ALL {
            let original: Vec<u8> = (0..size.bytes() as u8).collect();
            let mut state = original.clone();
            shift_rows(&mut state, size);
            assert_ne!(state, original);
            inv_shift_rows(&mut state, size);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn mix_columns_matches_known_column() {
        let mut col = [0xdb, 0x13, 0x53, 0x45];
        mix_columns(&mut col);
        assert_eq!(col, [0x8e, 0x4d, 0xa1, 0xbc]);
        inv_mix_columns(&mut col);
        assert_eq!(col, [0xdb, 0x13, 0x53, 0x45]);
    }
}
