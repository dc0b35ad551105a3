//! Mnemonic decoding and checksum verification.

use zeroize::Zeroizing;

use crate::bits::BitBuf;
use crate::checksum::checksum_bits;
use crate::constants::{ENTROPY_BITS_PER_CHECKSUM_BIT, is_valid_word_count};
use crate::entropy::Entropy;
use crate::error::MnemonicError;
use crate::wordlist::Wordlist;

/// Recover the entropy encoded by `mnemonic`, verifying its checksum.
///
/// Words are separated by single ASCII spaces; any other spacing yields an
/// empty or unknown word. The caller chooses the wordlist; there is no
/// language detection.
///
/// # Errors
///
/// - [`MnemonicError::InvalidWordCount`] unless there are 12, 15, 18, 21 or 24 words
/// - [`MnemonicError::WordNotInList`] naming the first unknown word
/// - [`MnemonicError::ChecksumMismatch`] if the embedded checksum is wrong
pub fn mnemonic_to_entropy(mnemonic: &str, wordlist: &Wordlist) -> Result<Entropy, MnemonicError> {
    let words: Vec<&str> = mnemonic.split(' ').collect();
    if !is_valid_word_count(words.len()) {
        return Err(MnemonicError::InvalidWordCount(words.len()));
    }

    let indices = words
        .iter()
        .map(|word| {
            wordlist
                .index_of(word)
                .ok_or_else(|| MnemonicError::WordNotInList((*word).to_string()))
        })
        .collect::<Result<Vec<u16>, _>>()?;

    let bits = BitBuf::from_word_indices(&indices);
    let divider = bits.len() / (ENTROPY_BITS_PER_CHECKSUM_BIT + 1) * ENTROPY_BITS_PER_CHECKSUM_BIT;
    let (entropy_bits, checksum) = bits.split_at(divider);

    let candidate = Zeroizing::new(entropy_bits.to_bytes()?);
    if checksum_bits(&candidate) != checksum {
        return Err(MnemonicError::ChecksumMismatch);
    }
    Entropy::from_bytes(&candidate)
}

/// [`mnemonic_to_entropy`] rendered as lowercase hex.
pub fn mnemonic_to_entropy_hex(
    mnemonic: &str,
    wordlist: &Wordlist,
) -> Result<String, MnemonicError> {
    mnemonic_to_entropy(mnemonic, wordlist).map(|entropy| entropy.to_hex())
}

/// `true` if `mnemonic` decodes against `wordlist` with a valid checksum.
///
/// Every failure collapses to `false`; call [`mnemonic_to_entropy`] to learn
/// why. A [`MnemonicError::MalformedBitLength`] here means the codec itself
/// is broken, so it is logged at error level before returning `false`.
pub fn validate_mnemonic(mnemonic: &str, wordlist: &Wordlist) -> bool {
    match mnemonic_to_entropy(mnemonic, wordlist) {
        Ok(_) => true,
        Err(MnemonicError::MalformedBitLength { len, chunk }) => {
            tracing::error!(len, chunk, "bit codec invariant violated while validating mnemonic");
            false
        }
        Err(_) => {
            tracing::debug!(words = mnemonic.split(' ').count(), "mnemonic failed validation");
            false
        }
    }
}
