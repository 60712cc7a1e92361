//! Precomputed substitution and GF(2^8) multiplication tables.
//!
//! Every table is evaluated at compile time and lives in read-only memory, so
//! concurrent readers never need synchronization.

/// Round constants for the key schedule, `x^(i)` in GF(2^8).
///
/// Thirty entries cover the longest schedule (128-bit key, 256-bit block).
const RCON: [u8; 30] = [
    0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36, 0x6c, 0xd8, 0xab, 0x4d, 0x9a,
    0x2f, 0x5e, 0xbc, 0x63, 0xc6, 0x97, 0x35, 0x6a, 0xd4, 0xb3, 0x7d, 0xfa, 0xef, 0xc5, 0x91,
];

const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
        i += 1;
    }
    product
}

/// Multiplicative inverse as `a^254`; maps 0 to 0.
const fn ginv(a: u8) -> u8 {
    let mut result = 1u8;
    let mut base = a;
    let mut exp = 254u8;
    while exp != 0 {
        if exp & 1 != 0 {
            result = gmul(result, base);
        }
        base = gmul(base, base);
        exp >>= 1;
    }
    if a == 0 {
        0
    } else {
        result
    }
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let b = ginv(i as u8);
        table[i] = b
            ^ b.rotate_left(1)
            ^ b.rotate_left(2)
            ^ b.rotate_left(3)
            ^ b.rotate_left(4)
            ^ 0x63;
        i += 1;
    }
    table
}

const fn invert(table: &[u8; 256]) -> [u8; 256] {
    let mut inverse = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inverse[table[i] as usize] = i as u8;
        i += 1;
    }
    inverse
}

const fn mul_table(factor: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = gmul(i as u8, factor);
        i += 1;
    }
    table
}

static SBOX: [u8; 256] = build_sbox();
static INV_SBOX: [u8; 256] = invert(&build_sbox());
static MUL2: [u8; 256] = mul_table(2);
static MUL3: [u8; 256] = mul_table(3);
static MUL9: [u8; 256] = mul_table(9);
static MUL11: [u8; 256] = mul_table(11);
static MUL13: [u8; 256] = mul_table(13);
static MUL14: [u8; 256] = mul_table(14);

/// Forward S-box lookup.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Inverse S-box lookup.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}

/// Multiplication by 2 in GF(2^8).
#[inline]
pub fn gf_mul2(byte: u8) -> u8 {
    MUL2[byte as usize]
}

/// Multiplication by 3 in GF(2^8).
#[inline]
pub fn gf_mul3(byte: u8) -> u8 {
    MUL3[byte as usize]
}

/// Multiplication by 9 in GF(2^8).
#[inline]
pub fn gf_mul9(byte: u8) -> u8 {
    MUL9[byte as usize]
}

/// Multiplication by 11 in GF(2^8).
#[inline]
pub fn gf_mul11(byte: u8) -> u8 {
    MUL11[byte as usize]
}

/// Multiplication by 13 in GF(2^8).
#[inline]
pub fn gf_mul13(byte: u8) -> u8 {
    MUL13[byte as usize]
}

/// Multiplication by 14 in GF(2^8).
#[inline]
pub fn gf_mul14(byte: u8) -> u8 {
    MUL14[byte as usize]
}

/// Round constant for key-schedule step `index` (0-based).
///
/// # Panics
///
/// Panics if `index` is past the longest schedule any supported
/// (key, block) combination needs.
#[inline]
pub fn rcon(index: usize) -> u8 {
    RCON[index]
}
