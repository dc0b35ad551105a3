//! Entropy to mnemonic encoding.

use crate::bits::BitBuf;
use crate::checksum::checksum_bits;
use crate::constants::is_valid_entropy_len;
use crate::entropy::Entropy;
use crate::error::MnemonicError;
use crate::wordlist::Wordlist;

/// Encode entropy as a space-separated mnemonic drawn from `wordlist`.
///
/// The entropy bits are followed by the checksum bits and the result is cut
/// into 11-bit word indices.
///
/// # Examples
///
/// ```
/// use mnemo_core::{Wordlist, entropy_to_mnemonic};
/// let phrase = entropy_to_mnemonic(&[0u8; 16], Wordlist::english()).unwrap();
/// assert_eq!(
///     phrase,
///     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
/// );
/// ```
pub fn entropy_to_mnemonic(entropy: &[u8], wordlist: &Wordlist) -> Result<String, MnemonicError> {
    if !is_valid_entropy_len(entropy.len()) {
        return Err(MnemonicError::InvalidEntropyLength(entropy.len()));
    }

    let mut bits = BitBuf::from_bytes(entropy);
    bits.extend_from(&checksum_bits(entropy));

    let words: Vec<&str> = bits
        .to_word_indices()?
        .into_iter()
        .map(|index| wordlist.word_at(index))
        .collect();

    tracing::debug!(
        entropy_bits = entropy.len() * 8,
        words = words.len(),
        language = ?wordlist.language(),
        "encoded mnemonic"
    );
    Ok(words.join(" "))
}

/// Encode an [`Entropy`] value. Cannot fail on length.
pub fn encode(entropy: &Entropy, wordlist: &Wordlist) -> Result<String, MnemonicError> {
    entropy_to_mnemonic(entropy.as_bytes(), wordlist)
}

/// Encode entropy given as a hex string.
pub fn entropy_hex_to_mnemonic(
    hex_str: &str,
    wordlist: &Wordlist,
) -> Result<String, MnemonicError> {
    let entropy = Entropy::from_hex(hex_str)?;
    encode(&entropy, wordlist)
}
