//! Wordlist-bound façade.
//!
//! The free functions take the wordlist on every call. [`Bip39`] binds one
//! list up front so an application can pick its default once and pass the
//! bound codec around instead of relying on a global.

use crate::decoder;
use crate::encoder;
use crate::entropy::Entropy;
use crate::error::MnemonicError;
use crate::generator::{self, RandomSource};
use crate::seed::{self, Seed};
use crate::wordlist::{Language, Wordlist};

/// Mnemonic operations against a fixed wordlist.
///
/// # Examples
///
/// ```
/// use mnemo_core::{Bip39, Wordlist};
/// let bip39 = Bip39::with_default_wordlist(Wordlist::english());
/// let phrase = bip39.entropy_to_mnemonic(&[0xFF; 16]).unwrap();
/// assert!(bip39.validate_mnemonic(&phrase));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Bip39<'w> {
    wordlist: &'w Wordlist,
}

impl<'w> Bip39<'w> {
    /// Bind `wordlist` as the list for every operation.
    pub fn with_default_wordlist(wordlist: &'w Wordlist) -> Self {
        Self { wordlist }
    }

    /// The bound wordlist.
    pub fn wordlist(&self) -> &'w Wordlist {
        self.wordlist
    }

    /// See [`encoder::entropy_to_mnemonic`].
    pub fn entropy_to_mnemonic(&self, entropy: &[u8]) -> Result<String, MnemonicError> {
        encoder::entropy_to_mnemonic(entropy, self.wordlist)
    }

    /// See [`encoder::entropy_hex_to_mnemonic`].
    pub fn entropy_hex_to_mnemonic(&self, hex_str: &str) -> Result<String, MnemonicError> {
        encoder::entropy_hex_to_mnemonic(hex_str, self.wordlist)
    }

    /// See [`decoder::mnemonic_to_entropy`].
    pub fn mnemonic_to_entropy(&self, mnemonic: &str) -> Result<Entropy, MnemonicError> {
        decoder::mnemonic_to_entropy(mnemonic, self.wordlist)
    }

    /// See [`decoder::validate_mnemonic`].
    pub fn validate_mnemonic(&self, mnemonic: &str) -> bool {
        decoder::validate_mnemonic(mnemonic, self.wordlist)
    }

    /// See [`generator::generate_mnemonic`]. The bound list is always supplied.
    pub async fn generate_mnemonic<R>(
        &self,
        strength_bits: Option<usize>,
        rng: &R,
    ) -> Result<String, MnemonicError>
    where
        R: RandomSource + ?Sized,
    {
        generator::generate_mnemonic(strength_bits, rng, Some(self.wordlist)).await
    }

    /// Verify `mnemonic` against the bound list, then derive its seed.
    ///
    /// Unlike [`seed::mnemonic_to_seed`], a phrase with an unknown word or a
    /// bad checksum is rejected before any key stretching happens.
    pub async fn mnemonic_to_seed(
        &self,
        mnemonic: &str,
        passphrase: &str,
    ) -> Result<Seed, MnemonicError> {
        decoder::mnemonic_to_entropy(mnemonic, self.wordlist)?;
        seed::mnemonic_to_seed(mnemonic, passphrase).await
    }
}

impl Bip39<'static> {
    /// Codec over the built-in list for `language`.
    pub fn for_language(language: Language) -> Self {
        Self::with_default_wordlist(Wordlist::builtin(language))
    }
}
