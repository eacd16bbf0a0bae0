//! Password generation.
//!
//! Three modes: Friendly (word pair plus separator and number), Strong
//! (uniform draws from the enabled character classes) and Mnemonic
//! (BIP39-style word phrase). Every batch element is generated
//! independently; element 0 is the active password the UI displays and
//! scores.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::random::RandomSource;
use crate::wordlist::{WordList, Wordlists};

/// Character class alphabets, pooled in this fixed order.
pub const UPPER_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBER_CHARS: &str = "0123456789";
pub const SPECIAL_CHARS: &str = "!$%^&*()-=+[]{};#:@~,./<>?";

/// Separator symbols for friendly passwords.
pub const SEPARATORS: [char; 10] = ['-', '_', '.', '!', '@', '#', '$', '%', '&', '*'];

pub const MIN_BATCH_COUNT: usize = 1;
pub const MAX_BATCH_COUNT: usize = 20;
pub const MIN_MNEMONIC_WORDS: usize = 3;
pub const MAX_MNEMONIC_WORDS: usize = 24;

/// Generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Friendly,
    Strong,
    Mnemonic,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Friendly, Mode::Strong, Mode::Mnemonic];

    /// Stable identifier used in persisted records.
    pub fn id(&self) -> &'static str {
        match self {
            Mode::Friendly => "friendly",
            Mode::Strong => "strong",
            Mode::Mnemonic => "mnemonic",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Character pool is empty: enable at least one character class")]
    EmptyCharacterPool,
    #[error("Password length must be at least 1")]
    InvalidLength,
    #[error("Batch count must be between {MIN_BATCH_COUNT} and {MAX_BATCH_COUNT}, got {0}")]
    InvalidBatchCount(usize),
    #[error(
        "Mnemonic word count must be a multiple of 3 between {MIN_MNEMONIC_WORDS} and {MAX_MNEMONIC_WORDS}, got {0}"
    )]
    InvalidWordCount(usize),
    #[error("Mnemonic wordlist is not loaded")]
    WordlistUnavailable,
}

/// Generator settings, persisted alongside the rest of the UI state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorSettings {
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_number: bool,
    pub include_special: bool,
    pub length: usize,
    pub mode: Mode,
    pub mnemonic_word_count: usize,
    pub batch_count: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            include_upper: true,
            include_lower: true,
            include_number: true,
            include_special: true,
            length: 16,
            mode: Mode::Friendly,
            mnemonic_word_count: 12,
            batch_count: 1,
        }
    }
}

impl GeneratorSettings {
    /// Builds the Strong-mode character pool by concatenating the enabled
    /// class alphabets in fixed order: upper, lower, number, special.
    pub fn character_pool(&self) -> String {
        let mut pool = String::new();
        if self.include_upper {
            pool.push_str(UPPER_CHARS);
        }
        if self.include_lower {
            pool.push_str(LOWER_CHARS);
        }
        if self.include_number {
            pool.push_str(NUMBER_CHARS);
        }
        if self.include_special {
            pool.push_str(SPECIAL_CHARS);
        }
        pool
    }
}

/// One generation call's output. Element 0 is the active password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBatch {
    passwords: Vec<String>,
}

impl GeneratedBatch {
    /// The password shown and scored by the caller.
    pub fn active(&self) -> &str {
        &self.passwords[0]
    }

    pub fn passwords(&self) -> &[String] {
        &self.passwords
    }

    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }
}

/// Generates a batch of passwords according to the settings.
///
/// All inputs are validated before any random draw, so a failed call
/// never consumes randomness or produces a partial batch.
///
/// # Errors
///
/// - `InvalidBatchCount` if `batch_count` is outside `[1, 20]`
/// - `EmptyCharacterPool` / `InvalidLength` in Strong mode
/// - `InvalidWordCount` / `WordlistUnavailable` in Mnemonic mode
pub fn generate<R: RandomSource>(
    settings: &GeneratorSettings,
    wordlists: &Wordlists,
    rng: &mut R,
) -> Result<GeneratedBatch, GenerateError> {
    if !(MIN_BATCH_COUNT..=MAX_BATCH_COUNT).contains(&settings.batch_count) {
        return Err(GenerateError::InvalidBatchCount(settings.batch_count));
    }

    let mut passwords = Vec::with_capacity(settings.batch_count);

    match settings.mode {
        Mode::Friendly => {
            for _ in 0..settings.batch_count {
                passwords.push(friendly_password(wordlists.friendly(), rng));
            }
        }
        Mode::Strong => {
            let pool: Vec<char> = settings.character_pool().chars().collect();
            if pool.is_empty() {
                return Err(GenerateError::EmptyCharacterPool);
            }
            if settings.length == 0 {
                return Err(GenerateError::InvalidLength);
            }
            for _ in 0..settings.batch_count {
                passwords.push(strong_password(&pool, settings.length, rng));
            }
        }
        Mode::Mnemonic => {
            let count = settings.mnemonic_word_count;
            if count < MIN_MNEMONIC_WORDS || count > MAX_MNEMONIC_WORDS || count % 3 != 0 {
                return Err(GenerateError::InvalidWordCount(count));
            }
            let list = wordlists
                .mnemonic()
                .filter(|l| !l.is_empty())
                .ok_or(GenerateError::WordlistUnavailable)?;
            for _ in 0..settings.batch_count {
                passwords.push(mnemonic_password(list, count, rng));
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generated batch: mode={} count={}",
        settings.mode.id(),
        passwords.len()
    );

    Ok(GeneratedBatch { passwords })
}

/// `word1 + separator + word2 + NN` with NN uniform in [10, 99].
fn friendly_password<R: RandomSource>(words: &WordList, rng: &mut R) -> String {
    let list = words.words();
    let word1 = &list[rng.uniform_index(list.len())];
    let word2 = &list[rng.uniform_index(list.len())];
    let separator = SEPARATORS[rng.uniform_index(SEPARATORS.len())];
    let number = 10 + rng.uniform_index(90);
    format!("{word1}{separator}{word2}{number}")
}

fn strong_password<R: RandomSource>(pool: &[char], length: usize, rng: &mut R) -> String {
    (0..length).map(|_| pool[rng.uniform_index(pool.len())]).collect()
}

/// Independent draws, repeats allowed, joined by single spaces.
fn mnemonic_password<R: RandomSource>(list: &WordList, count: usize, rng: &mut R) -> String {
    let words = list.words();
    let phrase: Vec<&str> = (0..count)
        .map(|_| words[rng.uniform_index(words.len())].as_str())
        .collect();
    phrase.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ThreadRngSource;
    use crate::wordlist::WordList;

    fn strong_settings() -> GeneratorSettings {
        GeneratorSettings {
            mode: Mode::Strong,
            ..Default::default()
        }
    }

    fn lists_with_mnemonic(words: &[&str]) -> Wordlists {
        let mut lists = Wordlists::new();
        lists.set_mnemonic(WordList::parse(&words.join("\n")).unwrap());
        lists
    }

    #[test]
    fn test_character_pool_fixed_order() {
        let settings = GeneratorSettings::default();
        let expected = format!("{UPPER_CHARS}{LOWER_CHARS}{NUMBER_CHARS}{SPECIAL_CHARS}");
        assert_eq!(settings.character_pool(), expected);
    }

    #[test]
    fn test_strong_length_and_alphabet() {
        let settings = GeneratorSettings {
            length: 32,
            ..strong_settings()
        };
        let pool = settings.character_pool();
        let batch = generate(&settings, &Wordlists::new(), &mut ThreadRngSource).unwrap();

        assert_eq!(batch.active().chars().count(), 32);
        assert!(batch.active().chars().all(|c| pool.contains(c)));
    }

    #[test]
    fn test_strong_numbers_only() {
        let settings = GeneratorSettings {
            include_upper: false,
            include_lower: false,
            include_special: false,
            length: 6,
            ..strong_settings()
        };
        let batch = generate(&settings, &Wordlists::new(), &mut ThreadRngSource).unwrap();

        assert_eq!(batch.active().len(), 6);
        assert!(batch.active().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_strong_empty_pool() {
        let settings = GeneratorSettings {
            include_upper: false,
            include_lower: false,
            include_number: false,
            include_special: false,
            ..strong_settings()
        };
        let result = generate(&settings, &Wordlists::new(), &mut ThreadRngSource);
        assert_eq!(result.unwrap_err(), GenerateError::EmptyCharacterPool);
    }

    #[test]
    fn test_strong_zero_length() {
        let settings = GeneratorSettings {
            length: 0,
            ..strong_settings()
        };
        let result = generate(&settings, &Wordlists::new(), &mut ThreadRngSource);
        assert_eq!(result.unwrap_err(), GenerateError::InvalidLength);
    }

    #[test]
    fn test_batch_count_bounds() {
        for bad in [0, 21, 100] {
            let settings = GeneratorSettings {
                batch_count: bad,
                ..Default::default()
            };
            let result = generate(&settings, &Wordlists::new(), &mut ThreadRngSource);
            assert_eq!(result.unwrap_err(), GenerateError::InvalidBatchCount(bad));
        }
    }

    #[test]
    fn test_batch_size() {
        let settings = GeneratorSettings {
            batch_count: 5,
            ..Default::default()
        };
        let batch = generate(&settings, &Wordlists::new(), &mut ThreadRngSource).unwrap();
        assert_eq!(batch.len(), 5);
    }

    #[test]
    fn test_friendly_shape() {
        let friendly = WordList::friendly();
        let batch = generate(
            &GeneratorSettings::default(),
            &Wordlists::new(),
            &mut ThreadRngSource,
        )
        .unwrap();

        for password in batch.passwords() {
            // Trailing two-digit number in [10, 99].
            let (body, digits) = password.split_at(password.len() - 2);
            let number: u32 = digits.parse().expect("trailing number");
            assert!((10..=99).contains(&number), "number {number} out of range");

            // Words are purely alphabetic, so the single non-letter is the separator.
            let sep_pos = body
                .find(|c: char| !c.is_ascii_alphabetic())
                .expect("separator");
            let separator = body[sep_pos..].chars().next().unwrap();
            assert!(SEPARATORS.contains(&separator));

            let word1 = &body[..sep_pos];
            let word2 = &body[sep_pos + separator.len_utf8()..];
            assert!(friendly.contains(word1), "unknown word {word1}");
            assert!(friendly.contains(word2), "unknown word {word2}");
        }
    }

    #[test]
    fn test_mnemonic_token_count_and_membership() {
        let lists = lists_with_mnemonic(&["abandon", "ability", "able", "about"]);
        let settings = GeneratorSettings {
            mode: Mode::Mnemonic,
            mnemonic_word_count: 12,
            ..Default::default()
        };
        let batch = generate(&settings, &lists, &mut ThreadRngSource).unwrap();

        let tokens: Vec<&str> = batch.active().split(' ').collect();
        assert_eq!(tokens.len(), 12);
        for token in tokens {
            assert!(lists.mnemonic().unwrap().contains(token));
        }
    }

    #[test]
    fn test_mnemonic_before_load() {
        let settings = GeneratorSettings {
            mode: Mode::Mnemonic,
            ..Default::default()
        };
        let result = generate(&settings, &Wordlists::new(), &mut ThreadRngSource);
        assert_eq!(result.unwrap_err(), GenerateError::WordlistUnavailable);
    }

    #[test]
    fn test_mnemonic_invalid_word_counts() {
        let lists = lists_with_mnemonic(&["abandon", "ability"]);
        for bad in [0, 2, 4, 25, 27] {
            let settings = GeneratorSettings {
                mode: Mode::Mnemonic,
                mnemonic_word_count: bad,
                ..Default::default()
            };
            let result = generate(&settings, &lists, &mut ThreadRngSource);
            assert_eq!(result.unwrap_err(), GenerateError::InvalidWordCount(bad));
        }
    }

    #[test]
    fn test_mode_ids() {
        assert_eq!(Mode::Friendly.id(), "friendly");
        assert_eq!(Mode::Strong.id(), "strong");
        assert_eq!(Mode::Mnemonic.id(), "mnemonic");
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = GeneratorSettings {
            mode: Mode::Mnemonic,
            mnemonic_word_count: 24,
            batch_count: 3,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: GeneratorSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
