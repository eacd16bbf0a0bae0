//! Word list loading and access.
//!
//! Two lists feed the generator: a compiled-in friendly list and an
//! externally loaded BIP39-style mnemonic list. The mnemonic list is
//! absent until a load succeeds; mnemonic generation is guarded against
//! that state instead of indexing past the end.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Built-in word list for friendly passwords.
const FRIENDLY_WORDS: [&str; 26] = [
    "apple",
    "banana",
    "cherry",
    "dragon",
    "elephant",
    "flamingo",
    "giraffe",
    "honey",
    "iguana",
    "jelly",
    "koala",
    "lemon",
    "mango",
    "ninja",
    "orange",
    "panda",
    "quokka",
    "rainbow",
    "sunshine",
    "tiger",
    "unicorn",
    "volcano",
    "watermelon",
    "xylophone",
    "yellow",
    "zebra",
];

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// Returns the mnemonic wordlist file path.
///
/// Priority:
/// 1. Environment variable `PWD_ARCADE_WORDLIST_PATH`
/// 2. Default path `./assets/english.txt`
pub fn wordlist_path() -> PathBuf {
    std::env::var("PWD_ARCADE_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/english.txt"))
}

/// Immutable ordered sequence of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Returns the compiled-in friendly word list.
    pub fn friendly() -> Self {
        Self {
            words: FRIENDLY_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Parses a newline-delimited word file body.
    ///
    /// Lines are trimmed and empty lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns `EmptyFile` if no words remain after parsing.
    pub fn parse(content: &str) -> Result<Self, WordlistError> {
        let words: Vec<String> = content
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();

        if words.is_empty() {
            return Err(WordlistError::EmptyFile);
        }

        Ok(Self { words })
    }

    /// Loads a wordlist from a file, blocking the calling thread.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File contains no words
    pub fn load_sync<P: AsRef<Path>>(path: P) -> Result<Self, WordlistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Wordlist load FAILED: FileNotFound {:?}", path);
            return Err(WordlistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let list = Self::parse(&content)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Wordlist loaded: {} words from {:?}", list.len(), path);

        Ok(list)
    }

    /// Loads a wordlist from a file asynchronously.
    ///
    /// Same error conditions as [`WordList::load_sync`].
    #[cfg(feature = "async")]
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordlistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Wordlist load FAILED: FileNotFound {:?}", path);
            return Err(WordlistError::FileNotFound(path.to_path_buf()));
        }

        let content = tokio::fs::read_to_string(path).await?;
        let list = Self::parse(&content)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Wordlist loaded: {} words from {:?}", list.len(), path);

        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// The word lists available to the generator.
///
/// The friendly list is always present; the mnemonic list is `None`
/// until a load completes.
#[derive(Debug, Clone)]
pub struct Wordlists {
    friendly: WordList,
    mnemonic: Option<WordList>,
}

impl Wordlists {
    pub fn new() -> Self {
        Self {
            friendly: WordList::friendly(),
            mnemonic: None,
        }
    }

    pub fn friendly(&self) -> &WordList {
        &self.friendly
    }

    /// Returns the mnemonic list, or `None` if it has not been loaded.
    pub fn mnemonic(&self) -> Option<&WordList> {
        self.mnemonic.as_ref()
    }

    pub fn set_mnemonic(&mut self, list: WordList) {
        self.mnemonic = Some(list);
    }
}

impl Default for Wordlists {
    fn default() -> Self {
        Self::new()
    }
}
