//! BIP-39 constants. Bit lengths are in bits, byte lengths in bytes.

/// Entropy lengths accepted by the encoder, in bytes (ENT / 8).
pub const ENTROPY_BYTE_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// Word counts a valid mnemonic may have: (ENT + CS) / 11.
pub const MNEMONIC_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Entropy strength used when the caller does not choose one.
pub const DEFAULT_STRENGTH_BITS: usize = 128;

/// Number of bits that select one word.
pub const BITS_PER_WORD: usize = 11;

/// Entries in every wordlist (2^11).
pub const WORDLIST_LEN: usize = 1 << BITS_PER_WORD;

/// One checksum bit is appended per 32 bits of entropy.
pub const ENTROPY_BITS_PER_CHECKSUM_BIT: usize = 32;

/// PBKDF2-HMAC-SHA512 iteration count.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Length of the derived seed.
pub const SEED_LEN: usize = 64;

/// Prefix prepended to the normalized passphrase to form the PBKDF2 salt.
pub const SALT_PREFIX: &str = "mnemonic";

/// Returns `true` if `len` bytes is a valid BIP-39 entropy length.
///
/// # Examples
///
/// ```
/// use mnemo_core::constants::is_valid_entropy_len;
/// assert!(is_valid_entropy_len(16));
/// assert!(is_valid_entropy_len(32));
/// assert!(!is_valid_entropy_len(17));
/// assert!(!is_valid_entropy_len(36));
/// ```
pub fn is_valid_entropy_len(len: usize) -> bool {
    ENTROPY_BYTE_LENGTHS.contains(&len)
}

/// Returns `true` if `count` is a valid BIP-39 mnemonic word count.
pub fn is_valid_word_count(count: usize) -> bool {
    MNEMONIC_WORD_COUNTS.contains(&count)
}

/// Checksum length CS in bits for an entropy of `entropy_len` bytes.
pub fn checksum_len_bits(entropy_len: usize) -> usize {
    entropy_len * 8 / ENTROPY_BITS_PER_CHECKSUM_BIT
}
