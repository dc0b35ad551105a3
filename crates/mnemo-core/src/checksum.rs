//! Truncated SHA-256 checksum appended to the entropy before word splitting.

use sha2::{Digest, Sha256};

use crate::bits::BitBuf;
use crate::constants::checksum_len_bits;

/// First CS bits of SHA-256(entropy), where CS = entropy bits / 32.
pub fn checksum_bits(entropy: &[u8]) -> BitBuf {
    let digest = Sha256::digest(entropy);
    BitBuf::from_bytes(&digest).truncated(checksum_len_bits(entropy.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_entropy_checksum() {
        // SHA-256 of 16 zero bytes starts with 0x37 = 0011 0111.
        let cs = checksum_bits(&[0u8; 16]);
        assert_eq!(cs.len(), 4);
        assert_eq!(cs.to_string(), "0011");
    }

    #[test]
    fn checksum_length_scales_with_entropy() {
        for (len, cs) in [(16, 4), (20, 5), (24, 6), (28, 7), (32, 8)] {
            assert_eq!(checksum_bits(&vec![0xAB; len]).len(), cs);
        }
    }

    #[test]
    fn full_byte_checksum_matches_digest_prefix() {
        let entropy = [0x7Fu8; 32];
        let digest = Sha256::digest(entropy);
        assert_eq!(checksum_bits(&entropy).to_bytes().unwrap(), vec![digest[0]]);
    }

    #[test]
    fn deterministic() {
        let entropy = [0x11u8; 20];
        assert_eq!(checksum_bits(&entropy), checksum_bits(&entropy));
    }
}
