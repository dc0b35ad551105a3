//! Random mnemonic generation.

use async_trait::async_trait;
use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::constants::{DEFAULT_STRENGTH_BITS, is_valid_entropy_len};
use crate::encoder::entropy_to_mnemonic;
use crate::error::{MnemonicError, RandomError};
use crate::wordlist::Wordlist;

/// Provider of cryptographically strong random bytes.
///
/// Implementations must return exactly `len` bytes or an error. Failures
/// are passed through to the caller unchanged; nothing is retried.
#[async_trait]
pub trait RandomSource: Send + Sync {
    /// Produce `len` random bytes.
    async fn random_bytes(&self, len: usize) -> Result<Vec<u8>, RandomError>;
}

/// Random source backed by the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

#[async_trait]
impl RandomSource for OsRandom {
    async fn random_bytes(&self, len: usize) -> Result<Vec<u8>, RandomError> {
        let mut bytes = vec![0u8; len];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| RandomError::Unavailable(e.to_string()))?;
        Ok(bytes)
    }
}

/// Generate a new mnemonic from `strength_bits` of fresh entropy.
///
/// `strength_bits` defaults to 128 and must be 128, 160, 192, 224 or 256.
/// A wordlist is required; passing `None` fails with
/// [`MnemonicError::MissingWordlist`] rather than falling back to English.
pub async fn generate_mnemonic<R>(
    strength_bits: Option<usize>,
    rng: &R,
    wordlist: Option<&Wordlist>,
) -> Result<String, MnemonicError>
where
    R: RandomSource + ?Sized,
{
    let strength = strength_bits.unwrap_or(DEFAULT_STRENGTH_BITS);
    if strength % 8 != 0 || !is_valid_entropy_len(strength / 8) {
        return Err(MnemonicError::InvalidEntropyLength(strength.div_ceil(8)));
    }
    let len = strength / 8;

    let entropy = Zeroizing::new(rng.random_bytes(len).await?);
    if entropy.len() != len {
        return Err(RandomError::ShortRead {
            requested: len,
            got: entropy.len(),
        }
        .into());
    }

    let wordlist = wordlist.ok_or(MnemonicError::MissingWordlist)?;
    let phrase = entropy_to_mnemonic(&entropy, wordlist)?;
    tracing::debug!(strength, language = ?wordlist.language(), "generated mnemonic");
    Ok(phrase)
}
