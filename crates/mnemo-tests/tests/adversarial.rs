//! Adversarial property-based test suite for mnemo.
//!
//! These tests try to get malformed, tampered or foreign mnemonics past the
//! decoder, and check that encoding stays a bijection on valid entropy.
//!
//! Attack vectors tested:
//! - Round trip across every entropy length and built-in language
//! - Entropy of unsupported length
//! - Phrases with an unsupported word count
//! - Injected out-of-list words
//! - Checksum tampering
//! - Substituting one data word for another valid word
//! - Decoding against the wrong wordlist
//! - Arbitrary text fed to the validator
//! - Seed derivation determinism and passphrase sensitivity
//! - Malformed custom wordlists

use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;

use mnemo_core::constants::{ENTROPY_BYTE_LENGTHS, MNEMONIC_WORD_COUNTS};
use mnemo_core::{
    Language, MnemonicError, Wordlist, entropy_to_mnemonic, mnemonic_to_entropy,
    mnemonic_to_seed_blocking, validate_mnemonic,
};
use mnemo_tests::helpers::flip_checksum_bit;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn valid_entropy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(ENTROPY_BYTE_LENGTHS.to_vec())
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

fn language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

fn english_words(count: usize) -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(0u16..2048, count)
        .prop_map(|indices| {
            indices
                .into_iter()
                .map(|i| Wordlist::english().word_at(i))
                .collect()
        })
}

// ---------------------------------------------------------------------------
// Test 1: roundtrip
//
// Every supported entropy length, in every built-in language, decodes back
// to exactly the bytes it was encoded from.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn roundtrip(entropy in valid_entropy(), lang in language()) {
        let wordlist = Wordlist::builtin(lang);
        let phrase = entropy_to_mnemonic(&entropy, wordlist).unwrap();

        let expected_words = (entropy.len() * 8 + entropy.len() / 4) / 11;
        prop_assert_eq!(phrase.split(' ').count(), expected_words);
        prop_assert!(validate_mnemonic(&phrase, wordlist));

        let decoded = mnemonic_to_entropy(&phrase, wordlist).unwrap();
        prop_assert_eq!(decoded.as_bytes(), entropy.as_slice());
    }

    #[test]
    fn encoding_is_deterministic(entropy in valid_entropy()) {
        let a = entropy_to_mnemonic(&entropy, Wordlist::english()).unwrap();
        let b = entropy_to_mnemonic(&entropy, Wordlist::english()).unwrap();
        prop_assert_eq!(a, b);
    }
}

// ---------------------------------------------------------------------------
// Test 2: unsupported_entropy_length
//
// Attack vector: a caller hands the encoder a truncated or oversized buffer
// hoping for a short, brute-forceable mnemonic.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn unsupported_entropy_length(entropy in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(!ENTROPY_BYTE_LENGTHS.contains(&entropy.len()));
        prop_assert_eq!(
            entropy_to_mnemonic(&entropy, Wordlist::english()).unwrap_err(),
            MnemonicError::InvalidEntropyLength(entropy.len())
        );
    }
}

// ---------------------------------------------------------------------------
// Test 3: unsupported_word_count
//
// Attack vector: a phrase made only of valid words but with a word count
// that does not correspond to any entropy length.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn unsupported_word_count(words in (1usize..40).prop_flat_map(english_words)) {
        prop_assume!(!MNEMONIC_WORD_COUNTS.contains(&words.len()));
        let phrase = words.join(" ");
        prop_assert_eq!(
            mnemonic_to_entropy(&phrase, Wordlist::english()).unwrap_err(),
            MnemonicError::InvalidWordCount(words.len())
        );
        prop_assert!(!validate_mnemonic(&phrase, Wordlist::english()));
    }
}

// ---------------------------------------------------------------------------
// Test 4: injected_unknown_word
//
// Attack vector: one word of an otherwise valid phrase is replaced by a
// token outside the list. The decoder must name that exact token.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn injected_unknown_word(
        entropy in valid_entropy(),
        pos in any::<prop::sample::Index>(),
        bogus in "[A-Z0-9]{1,8}",
    ) {
        let phrase = entropy_to_mnemonic(&entropy, Wordlist::english()).unwrap();
        let mut words: Vec<&str> = phrase.split(' ').collect();
        let pos = pos.index(words.len());
        words[pos] = bogus.as_str();
        let tampered = words.join(" ");

        prop_assert_eq!(
            mnemonic_to_entropy(&tampered, Wordlist::english()).unwrap_err(),
            MnemonicError::WordNotInList(bogus.clone())
        );
        prop_assert!(!validate_mnemonic(&tampered, Wordlist::english()));
    }
}

// ---------------------------------------------------------------------------
// Test 5: checksum_tampering
//
// Attack vector: flipping a checksum-only bit keeps every word valid and
// the entropy unchanged; only the checksum can catch it.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn checksum_tampering(entropy in valid_entropy(), lang in language()) {
        let wordlist = Wordlist::builtin(lang);
        let phrase = entropy_to_mnemonic(&entropy, wordlist).unwrap();
        let tampered = flip_checksum_bit(&phrase, wordlist);

        prop_assert_ne!(&tampered, &phrase);
        prop_assert_eq!(
            mnemonic_to_entropy(&tampered, wordlist).unwrap_err(),
            MnemonicError::ChecksumMismatch
        );
    }
}

// ---------------------------------------------------------------------------
// Test 5b: word_substitution
//
// Attack vector: swapping a middle word of a 24-word phrase for another
// valid word changes the entropy. The new entropy matches the old 8-bit
// checksum only about once in 256 tries.
// ---------------------------------------------------------------------------

#[test]
fn word_substitution() {
    let english = Wordlist::english();
    let cases = (
        prop::collection::vec(any::<u8>(), 32),
        1usize..23,
        1u16..2048,
    );
    let mut runner = TestRunner::deterministic();
    let trials = 512;
    let mut rejected = 0;

    for _ in 0..trials {
        let (entropy, pos, delta) = cases.new_tree(&mut runner).unwrap().current();
        let phrase = entropy_to_mnemonic(&entropy, english).unwrap();
        let mut words: Vec<&str> = phrase.split(' ').collect();
        let index = english.index_of(words[pos]).unwrap();
        words[pos] = english.word_at(index + delta);
        let tampered = words.join(" ");

        match mnemonic_to_entropy(&tampered, english) {
            Ok(decoded) => assert_ne!(decoded.as_bytes(), entropy.as_slice()),
            Err(err) => {
                assert_eq!(err, MnemonicError::ChecksumMismatch);
                rejected += 1;
            }
        }
    }

    assert!(
        rejected * 100 > trials * 95,
        "only {rejected} of {trials} substitutions rejected"
    );
}

// ---------------------------------------------------------------------------
// Test 6: wrong_wordlist
//
// English and Japanese share no words, so an English phrase can never be
// accepted by the Japanese list, and vice versa.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn wrong_wordlist(entropy in valid_entropy()) {
        let english = Wordlist::english();
        let japanese = Wordlist::builtin(Language::Japanese);

        let en_phrase = entropy_to_mnemonic(&entropy, english).unwrap();
        let ja_phrase = entropy_to_mnemonic(&entropy, japanese).unwrap();
        prop_assert_ne!(&en_phrase, &ja_phrase);

        let first_en = en_phrase.split(' ').next().unwrap().to_string();
        prop_assert_eq!(
            mnemonic_to_entropy(&en_phrase, japanese).unwrap_err(),
            MnemonicError::WordNotInList(first_en)
        );
        prop_assert!(!validate_mnemonic(&ja_phrase, english));
    }
}

// ---------------------------------------------------------------------------
// Test 7: arbitrary_text
//
// The validator must never panic, and anything it accepts must decode.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn arbitrary_text(text in any::<String>()) {
        let accepted = validate_mnemonic(&text, Wordlist::english());
        prop_assert_eq!(accepted, mnemonic_to_entropy(&text, Wordlist::english()).is_ok());
    }

    #[test]
    fn whitespace_variants_rejected(entropy in valid_entropy(), sep in "(  |\t|\n| \u{3000})") {
        let phrase = entropy_to_mnemonic(&entropy, Wordlist::english()).unwrap();
        let respaced = phrase.replace(' ', &sep);
        prop_assert!(!validate_mnemonic(&respaced, Wordlist::english()));
    }
}

// ---------------------------------------------------------------------------
// Test 8: seed_derivation
//
// PBKDF2 is slow by construction, so these run fewer cases.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn seed_is_deterministic(entropy in valid_entropy(), passphrase in "\\PC{0,16}") {
        let phrase = entropy_to_mnemonic(&entropy, Wordlist::english()).unwrap();
        let a = mnemonic_to_seed_blocking(&phrase, &passphrase);
        let b = mnemonic_to_seed_blocking(&phrase, &passphrase);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn passphrase_changes_seed(entropy in valid_entropy(), a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        prop_assume!(a != b);
        let phrase = entropy_to_mnemonic(&entropy, Wordlist::english()).unwrap();
        prop_assert_ne!(
            mnemonic_to_seed_blocking(&phrase, &a),
            mnemonic_to_seed_blocking(&phrase, &b)
        );
    }
}

// ---------------------------------------------------------------------------
// Test 9: malformed_wordlist
//
// Custom lists must be exactly 2048 distinct, non-empty words.
// ---------------------------------------------------------------------------

fn numbered_words() -> Vec<String> {
    (0..2048).map(|i| format!("w{i:04}")).collect()
}

#[test]
fn wordlist_wrong_size_rejected() {
    for len in [0usize, 1, 2047, 2049] {
        let words: Vec<String> = (0..len).map(|i| format!("w{i:04}")).collect();
        assert!(matches!(
            Wordlist::from_words(&words),
            Err(MnemonicError::InvalidWordlist(_))
        ));
    }
}

#[test]
fn wordlist_duplicates_rejected() {
    let mut words = numbered_words();
    words[2047] = words[0].clone();
    assert!(matches!(
        Wordlist::from_words(&words),
        Err(MnemonicError::InvalidWordlist(_))
    ));
}

#[test]
fn wordlist_normalized_duplicates_rejected() {
    let mut words = numbered_words();
    words[10] = "caf\u{e9}".to_string();
    words[11] = "cafe\u{301}".to_string();
    assert!(matches!(
        Wordlist::from_words(&words),
        Err(MnemonicError::InvalidWordlist(_))
    ));
}

#[test]
fn wordlist_whitespace_entry_rejected() {
    let mut words = numbered_words();
    words[5] = "two words".to_string();
    assert!(matches!(
        Wordlist::from_words(&words),
        Err(MnemonicError::InvalidWordlist(_))
    ));
}

#[test]
fn custom_wordlist_roundtrip() {
    let text = numbered_words().join("\n");
    let custom = Wordlist::parse(&text).unwrap();
    assert_eq!(custom.language(), None);

    let phrase = entropy_to_mnemonic(&[0xA5; 20], &custom).unwrap();
    assert!(phrase.split(' ').all(|w| w.starts_with('w')));
    assert_eq!(mnemonic_to_entropy(&phrase, &custom).unwrap().as_bytes(), &[0xA5; 20]);
    assert!(!validate_mnemonic(&phrase, Wordlist::english()));
}
