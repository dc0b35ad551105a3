//! Integration and adversarial test suite for mnemo.
//!
//! The `tests/` directory checks the published BIP-39 vectors end to end and
//! attacks the decoder with randomized, malformed and cross-wordlist input.

pub mod helpers;
