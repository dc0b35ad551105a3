//! Length-checked entropy container.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::is_valid_entropy_len;
use crate::error::MnemonicError;

/// Raw secret bytes encoded by a mnemonic: 16, 20, 24, 28 or 32 bytes.
///
/// Secret material is zeroized on drop and redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    bytes: Vec<u8>,
}

impl Entropy {
    /// Wrap `bytes`, rejecting any length outside the BIP-39 set.
    ///
    /// # Examples
    ///
    /// ```
    /// use mnemo_core::{Entropy, MnemonicError};
    /// assert!(Entropy::from_bytes(&[0u8; 16]).is_ok());
    /// assert_eq!(
    ///     Entropy::from_bytes(&[0u8; 15]).unwrap_err(),
    ///     MnemonicError::InvalidEntropyLength(15),
    /// );
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MnemonicError> {
        if !is_valid_entropy_len(bytes.len()) {
            return Err(MnemonicError::InvalidEntropyLength(bytes.len()));
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Decode entropy from a hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, MnemonicError> {
        let mut bytes = hex::decode(hex_str)
            .map_err(|e| MnemonicError::InvalidHex(e.to_string()))?;
        let entropy = Self::from_bytes(&bytes);
        bytes.zeroize();
        entropy
    }

    /// Raw entropy bytes. Handle with care.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Entropy length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; entropy is at least 16 bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Entropy strength in bits (ENT).
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("len", &self.bytes.len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
