//! Seed derivation from a mnemonic and passphrase.
//!
//! seed = PBKDF2-HMAC-SHA512(password = mnemonic, salt = "mnemonic" ‖ NFKD(passphrase),
//! 2048 rounds, 64 bytes).
//!
//! The mnemonic text is used byte-for-byte; it is not validated or
//! normalized here. Only the passphrase goes through NFKD.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::constants::{PBKDF2_ROUNDS, SALT_PREFIX, SEED_LEN};
use crate::error::MnemonicError;
use crate::wordlist::nfkd;

/// A 64-byte BIP-39 seed.
///
/// Secret material is zeroized on drop and redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    bytes: [u8; SEED_LEN],
}

impl Seed {
    /// Create a seed from raw bytes.
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self { bytes }
    }

    /// Get the raw seed bytes. Handle with care.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.bytes
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Derive the seed on the current thread.
///
/// Runs 2048 HMAC-SHA512 rounds; inside an async runtime prefer
/// [`mnemonic_to_seed`].
pub fn mnemonic_to_seed_blocking(mnemonic: &str, passphrase: &str) -> Seed {
    let mut salt = Zeroizing::new(String::with_capacity(SALT_PREFIX.len() + passphrase.len()));
    salt.push_str(SALT_PREFIX);
    salt.push_str(&nfkd(passphrase));

    let mut seed = Seed {
        bytes: [0u8; SEED_LEN],
    };
    pbkdf2_hmac::<Sha512>(mnemonic.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed.bytes);
    seed
}

/// Derive the seed without stalling the async executor.
///
/// Inside a tokio runtime the key stretching runs on the blocking pool, so
/// other tasks keep running while it completes. Under any other executor
/// there is no pool to hand off to and the derivation runs inline on the
/// polling thread.
///
/// The call is not cancellable: dropping the future leaves an offloaded
/// derivation to finish in the background and its result is discarded.
pub async fn mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> Result<Seed, MnemonicError> {
    tracing::debug!(mnemonic_len = mnemonic.len(), "deriving seed");
    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        return Ok(mnemonic_to_seed_blocking(mnemonic, passphrase));
    };

    let mnemonic = Zeroizing::new(mnemonic.to_owned());
    let passphrase = Zeroizing::new(passphrase.to_owned());
    handle
        .spawn_blocking(move || mnemonic_to_seed_blocking(&mnemonic, &passphrase))
        .await
        .map_err(|e| MnemonicError::Kdf(e.to_string()))
}

/// [`mnemonic_to_seed`] rendered as lowercase hex.
pub async fn mnemonic_to_seed_hex(
    mnemonic: &str,
    passphrase: &str,
) -> Result<String, MnemonicError> {
    mnemonic_to_seed(mnemonic, passphrase)
        .await
        .map(|seed| seed.to_hex())
}
