//! Hex text conversion helpers.

use crate::Error;

/// Encodes bytes as lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes hex text in either case.
///
/// Fails on odd-length input or any non-hex character.
pub fn from_hex(text: &str) -> Result<Vec<u8>, Error> {
    Ok(hex::decode(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn round_trips_random_bytes() {
        let mut rng = rand::thread_rng();
        for len in 0..64 {
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);
            assert_eq!(from_hex(&to_hex(&bytes)).unwrap(), bytes);
        }
    }

    #[test]
    fn accepts_both_cases() {
        assert_eq!(from_hex("0EDD33d3").unwrap(), [0x0e, 0xdd, 0x33, 0xd3]);
        assert_eq!(to_hex(&[0x0e, 0xdd]), "0edd");
    }

    #[test]
    fn rejects_odd_length_and_non_hex() {
        assert_eq!(
            from_hex("abc"),
            Err(Error::Hex(hex::FromHexError::OddLength))
        );
        assert!(matches!(from_hex("zz"), Err(Error::Hex(_))));
        assert_eq!(from_hex("").unwrap(), Vec::<u8>::new());
    }
}
