//! # mnemo-core — BIP-39 mnemonic codec and seed derivation.
//!
//! Converts between random entropy and human-transcribable word sequences,
//! verifies the embedded checksum, and derives the 64-byte wallet seed from
//! a mnemonic and passphrase with PBKDF2-HMAC-SHA512.
//!
//! # Modules
//!
//! - [`error`] — `MnemonicError` enum
//! - [`constants`] — BIP-39 sizes and KDF parameters
//! - [`bits`] — Packed bit buffer and 11-bit word index chunking
//! - [`checksum`] — Truncated SHA-256 checksum bits
//! - [`wordlist`] — 2048-word vocabularies and built-in languages
//! - [`entropy`] — Length-checked, zeroizing entropy container
//! - [`encoder`] — Entropy to mnemonic
//! - [`decoder`] — Mnemonic to entropy, checksum verification
//! - [`seed`] — PBKDF2 seed derivation
//! - [`generator`] — Random mnemonic generation
//! - [`codec`] — Wordlist-bound façade over the above
//! - [`config`] — Generation defaults

pub mod bits;
pub mod checksum;
pub mod codec;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod seed;
pub mod wordlist;

// Re-exports for convenient access
pub use codec::Bip39;
pub use config::MnemonicConfig;
pub use decoder::{mnemonic_to_entropy, mnemonic_to_entropy_hex, validate_mnemonic};
pub use encoder::{entropy_hex_to_mnemonic, entropy_to_mnemonic};
pub use entropy::Entropy;
pub use error::{MnemonicError, RandomError};
pub use generator::{OsRandom, RandomSource, generate_mnemonic};
pub use seed::{Seed, mnemonic_to_seed, mnemonic_to_seed_blocking, mnemonic_to_seed_hex};
pub use wordlist::{Language, Wordlist};
