//! BIP-39 wordlists.
//!
//! A [`Wordlist`] is exactly 2048 distinct words; a word's position is its
//! 11-bit index. Entries are NFKD-normalized when the list is built, and
//! lookups apply the same normalization to the queried word, so a word
//! typed in composed form still matches.
//!
//! Built-in lists come from the `bip39` crate's static data and are built
//! once on first use. Anything else can be loaded with [`Wordlist::parse`]
//! or [`Wordlist::from_words`].

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::constants::WORDLIST_LEN;
use crate::error::MnemonicError;

/// Languages with a built-in wordlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, the BIP-39 reference list.
    #[default]
    English,
    /// Spanish.
    Spanish,
    /// French.
    French,
    /// Japanese.
    Japanese,
    /// Portuguese.
    Portuguese,
}

impl Language {
    /// Every built-in language.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Japanese,
        Language::Portuguese,
    ];

    /// Lowercase language name.
    pub fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Spanish => "spanish",
            Self::French => "french",
            Self::Japanese => "japanese",
            Self::Portuguese => "portuguese",
        }
    }

    fn source(self) -> bip39::Language {
        match self {
            Self::English => bip39::Language::English,
            Self::Spanish => bip39::Language::Spanish,
            Self::French => bip39::Language::French,
            Self::Japanese => bip39::Language::Japanese,
            Self::Portuguese => bip39::Language::Portuguese,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts full names in any case plus the short codes `EN`, `SP`, `FR`,
/// `JS` and `PT`. `default` maps to English.
///
/// # Examples
///
/// ```
/// use mnemo_core::Language;
/// assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
/// assert_eq!("Spanish".parse::<Language>().unwrap(), Language::Spanish);
/// assert!("klingon".parse::<Language>().is_err());
/// ```
impl FromStr for Language {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" | "default" => Ok(Self::English),
            "spanish" | "sp" | "es" => Ok(Self::Spanish),
            "french" | "fr" => Ok(Self::French),
            "japanese" | "js" | "ja" => Ok(Self::Japanese),
            "portuguese" | "pt" => Ok(Self::Portuguese),
            _ => Err(MnemonicError::UnknownLanguage(s.to_string())),
        }
    }
}

/// An ordered vocabulary of 2048 distinct, NFKD-normalized words.
#[derive(Clone)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, u16>,
    language: Option<Language>,
}

impl Wordlist {
    /// Build a wordlist from exactly 2048 distinct words.
    ///
    /// Words are NFKD-normalized first; two entries that normalize to the
    /// same string count as duplicates.
    pub fn from_words<I, S>(words: I) -> Result<Self, MnemonicError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| nfkd(w.as_ref()).into_owned())
            .collect();
        if words.len() != WORDLIST_LEN {
            return Err(MnemonicError::InvalidWordlist(format!(
                "expected {WORDLIST_LEN} words, got {}",
                words.len()
            )));
        }

        let mut index = HashMap::with_capacity(WORDLIST_LEN);
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() || word.contains(char::is_whitespace) {
                return Err(MnemonicError::InvalidWordlist(format!(
                    "entry {i} is empty or contains whitespace"
                )));
            }
            // i < 2048, so it fits in u16.
            if index.insert(word.clone(), i as u16).is_some() {
                return Err(MnemonicError::InvalidWordlist(format!(
                    "duplicate word {word:?} at index {i}"
                )));
            }
        }

        Ok(Self {
            words,
            index,
            language: None,
        })
    }

    /// Parse newline-separated text, one word per line. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, MnemonicError> {
        Self::from_words(text.lines().map(str::trim).filter(|line| !line.is_empty()))
    }

    /// The shared built-in list for `language`.
    pub fn builtin(language: Language) -> &'static Wordlist {
        static ENGLISH: OnceLock<Wordlist> = OnceLock::new();
        static SPANISH: OnceLock<Wordlist> = OnceLock::new();
        static FRENCH: OnceLock<Wordlist> = OnceLock::new();
        static JAPANESE: OnceLock<Wordlist> = OnceLock::new();
        static PORTUGUESE: OnceLock<Wordlist> = OnceLock::new();

        let cell = match language {
            Language::English => &ENGLISH,
            Language::Spanish => &SPANISH,
            Language::French => &FRENCH,
            Language::Japanese => &JAPANESE,
            Language::Portuguese => &PORTUGUESE,
        };
        cell.get_or_init(|| Self::from_static(language))
    }

    /// Shorthand for `Wordlist::builtin(Language::English)`.
    pub fn english() -> &'static Wordlist {
        Self::builtin(Language::English)
    }

    fn from_static(language: Language) -> Self {
        let words: Vec<String> = language
            .source()
            .word_list()
            .iter()
            .map(|w| nfkd(w).into_owned())
            .collect();
        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i as u16))
            .collect();
        Self {
            words,
            index,
            language: Some(language),
        }
    }

    /// The word at `index`, if `index < 2048`.
    pub fn word(&self, index: u16) -> Option<&str> {
        self.words.get(usize::from(index)).map(String::as_str)
    }

    /// The word at the low 11 bits of `index`.
    pub fn word_at(&self, index: u16) -> &str {
        &self.words[usize::from(index) & (WORDLIST_LEN - 1)]
    }

    /// Position of `word`, compared after NFKD normalization. Exact match:
    /// no case folding and no trimming.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(&*nfkd(word)).copied()
    }

    /// `true` if `word` is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_some()
    }

    /// Built-in language this list came from, `None` for custom lists.
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Number of words (always 2048).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; a wordlist cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl PartialEq for Wordlist {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Wordlist {}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
            .field("language", &self.language)
            .field("len", &self.words.len())
            .finish_non_exhaustive()
    }
}

pub(crate) fn nfkd(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.nfkd().collect())
    }
}
