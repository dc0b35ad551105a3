//! Mnemonic generation defaults.
//!
//! Provides [`MnemonicConfig`], the application-level choice of wordlist and
//! entropy strength. The core never reads it implicitly; callers turn it into
//! a [`Bip39`] codec or pass its fields to the free functions.

use serde::{Deserialize, Serialize};

use crate::codec::Bip39;
use crate::constants::{DEFAULT_STRENGTH_BITS, is_valid_entropy_len};
use crate::error::MnemonicError;
use crate::wordlist::{Language, Wordlist};

/// Application defaults for mnemonic generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MnemonicConfig {
    /// Entropy strength in bits: 128, 160, 192, 224 or 256.
    pub strength_bits: usize,
    /// Built-in wordlist to encode and decode with.
    pub language: Language,
}

impl Default for MnemonicConfig {
    fn default() -> Self {
        Self {
            strength_bits: DEFAULT_STRENGTH_BITS,
            language: Language::English,
        }
    }
}

impl MnemonicConfig {
    /// Preset producing 24-word mnemonics.
    pub fn high_strength() -> Self {
        Self {
            strength_bits: 256,
            ..Self::default()
        }
    }

    /// Check that the strength is one BIP-39 allows.
    pub fn validate(&self) -> Result<(), MnemonicError> {
        if self.strength_bits % 8 != 0 || !is_valid_entropy_len(self.strength_bits / 8) {
            return Err(MnemonicError::InvalidEntropyLength(self.strength_bits.div_ceil(8)));
        }
        Ok(())
    }

    /// The configured built-in wordlist.
    pub fn wordlist(&self) -> &'static Wordlist {
        Wordlist::builtin(self.language)
    }

    /// Codec bound to the configured wordlist.
    pub fn codec(&self) -> Bip39<'static> {
        Bip39::for_language(self.language)
    }

    /// Number of words a mnemonic generated with this config will have.
    pub fn word_count(&self) -> usize {
        self.strength_bits * 33 / 32 / 11
    }
}
