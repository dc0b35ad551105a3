//! Mnemonic error types.

use thiserror::Error;

/// Failure reported by a [`RandomSource`](crate::generator::RandomSource).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// The underlying generator could not produce bytes.
    #[error("random source unavailable: {0}")]
    Unavailable(String),

    /// The source returned fewer (or more) bytes than requested.
    #[error("random source returned {got} bytes, requested {requested}")]
    ShortRead {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes actually returned.
        got: usize,
    },
}

/// Errors that can occur while encoding, decoding or deriving from a mnemonic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    /// Entropy byte count outside {16, 20, 24, 28, 32}.
    #[error("invalid entropy length: {0} bytes")]
    InvalidEntropyLength(usize),

    /// Mnemonic word count outside {12, 15, 18, 21, 24}.
    #[error("invalid word count: {0}")]
    InvalidWordCount(usize),

    /// A mnemonic word is absent from the chosen wordlist.
    #[error("word not in wordlist: {0:?}")]
    WordNotInList(String),

    /// Recomputed checksum disagrees with the checksum embedded in the words.
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// A bit buffer could not be split into whole chunks.
    ///
    /// Unreachable through the public encode/decode paths; seeing it means
    /// an internal invariant was broken.
    #[error("malformed bit length: {len} bits is not a multiple of {chunk}")]
    MalformedBitLength {
        /// Length of the buffer in bits.
        len: usize,
        /// Requested chunk width in bits.
        chunk: usize,
    },

    /// A wordlist was required but none was supplied.
    #[error("no wordlist supplied")]
    MissingWordlist,

    /// A caller-supplied wordlist is not 2048 distinct words.
    #[error("invalid wordlist: {0}")]
    InvalidWordlist(String),

    /// Entropy given as hex could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Language name not recognised.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// The random source failed.
    #[error(transparent)]
    Random(#[from] RandomError),

    /// The key derivation task failed to complete.
    #[error("key derivation: {0}")]
    Kdf(String),
}
