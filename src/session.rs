//! Session facade: one user's generator, saved passwords and progression.
//!
//! The UI layer calls into this type and renders its outputs. Control
//! flow per generation: generate a batch, classify the active password,
//! record the event, hand everything back.

use crate::classifier::{StrengthTier, classify};
use crate::generator::{GenerateError, GeneratedBatch, GeneratorSettings, generate};
use crate::progression::{Achievement, GenerationOutcome, ProgressionEngine, ProgressionStats};
use crate::random::RandomSource;
use crate::store::{PersistenceStore, SAVED_PASSWORDS_KEY};
use crate::wordlist::{WordList, Wordlists};

#[cfg(feature = "async")]
use crate::wordlist::WordlistError;
#[cfg(feature = "async")]
use std::path::Path;

/// Fixed filename for the saved-password export artifact.
pub const EXPORT_FILENAME: &str = "arcade-passwords.txt";

/// Outcome of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub batch: GeneratedBatch,
    /// Tier of the active password (batch element 0).
    pub tier: StrengthTier,
    pub progress: GenerationOutcome,
}

/// Outcome of saving the current batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveBatchResult {
    /// How many batch entries were actually appended. Zero means every
    /// entry was already saved.
    pub saved_count: usize,
    pub newly_unlocked: Vec<Achievement>,
}

pub struct ArcadeSession<S: PersistenceStore, R: RandomSource> {
    settings: GeneratorSettings,
    wordlists: Wordlists,
    engine: ProgressionEngine,
    saved: Vec<String>,
    batch: Option<GeneratedBatch>,
    store: S,
    rng: R,
}

impl<S: PersistenceStore, R: RandomSource> ArcadeSession<S, R> {
    /// Opens a session over the store, restoring progression and saved
    /// passwords. Missing or corrupt records yield empty defaults.
    pub fn new(store: S, rng: R) -> Self {
        let engine = ProgressionEngine::load(&store);
        let saved = match store.get(SAVED_PASSWORDS_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(saved) => saved,
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Saved-password record corrupt, starting empty: {}", _e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Self {
            settings: GeneratorSettings::default(),
            wordlists: Wordlists::new(),
            engine,
            saved,
            batch: None,
            store,
            rng,
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut GeneratorSettings {
        &mut self.settings
    }

    pub fn set_mnemonic_wordlist(&mut self, list: WordList) {
        self.wordlists.set_mnemonic(list);
    }

    /// Loads the mnemonic wordlist from a file. On failure the list stays
    /// absent and mnemonic generation keeps returning
    /// [`GenerateError::WordlistUnavailable`]; the session itself is
    /// unaffected and the load can be retried.
    #[cfg(feature = "async")]
    pub async fn load_mnemonic_wordlist<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<usize, WordlistError> {
        let list = WordList::load(path).await?;
        let count = list.len();
        self.wordlists.set_mnemonic(list);
        Ok(count)
    }

    /// Generates a batch per the current settings, classifies the active
    /// password and records the event.
    pub fn generate(&mut self) -> Result<GenerationResult, GenerateError> {
        let batch = generate(&self.settings, &self.wordlists, &mut self.rng)?;
        let tier = classify(batch.active());
        let progress = self.engine.record_generation(
            tier,
            self.settings.mode,
            batch.len(),
            &mut self.store,
        );
        self.batch = Some(batch.clone());
        Ok(GenerationResult {
            batch,
            tier,
            progress,
        })
    }

    /// The active password, verbatim, for clipboard use.
    pub fn current_password(&self) -> Option<&str> {
        self.batch.as_ref().map(|b| b.active())
    }

    pub fn batch(&self) -> Option<&GeneratedBatch> {
        self.batch.as_ref()
    }

    /// Appends the current batch to the saved list, skipping entries that
    /// are already saved, and records the save.
    pub fn save_batch(&mut self) -> SaveBatchResult {
        let new_passwords: Vec<String> = match &self.batch {
            Some(batch) => batch
                .passwords()
                .iter()
                .filter(|p| !self.saved.contains(p))
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        if new_passwords.is_empty() {
            return SaveBatchResult {
                saved_count: 0,
                newly_unlocked: Vec::new(),
            };
        }

        let saved_count = new_passwords.len();
        self.saved.extend(new_passwords);
        self.persist_saved();
        let outcome = self.engine.record_save(saved_count, &mut self.store);

        SaveBatchResult {
            saved_count,
            newly_unlocked: outcome.newly_unlocked,
        }
    }

    pub fn saved_passwords(&self) -> &[String] {
        &self.saved
    }

    /// Removes one saved password by position.
    pub fn remove_saved(&mut self, index: usize) -> Option<String> {
        if index >= self.saved.len() {
            return None;
        }
        let removed = self.saved.remove(index);
        self.persist_saved();
        Some(removed)
    }

    /// Clears the saved-password list only. Progression stats, level and
    /// achievements persist across this call; use
    /// [`ArcadeSession::reset_progress`] for a full reset.
    pub fn clear_saved(&mut self) {
        self.saved.clear();
        if let Err(_e) = self.store.remove(SAVED_PASSWORDS_KEY) {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to clear saved-password record: {}", _e);
        }
    }

    /// Full progression reset: totals, level and achievements.
    pub fn reset_progress(&mut self) {
        self.engine.reset(&mut self.store);
    }

    /// Export body: all saved passwords separated by a blank line. The
    /// caller writes it out under [`EXPORT_FILENAME`].
    pub fn export(&self) -> String {
        self.saved.join("\n\n")
    }

    pub fn stats(&self) -> &ProgressionStats {
        self.engine.stats()
    }

    pub fn achievements(&self) -> Vec<(Achievement, bool)> {
        self.engine.achievements()
    }

    fn persist_saved(&mut self) {
        match serde_json::to_string(&self.saved) {
            Ok(json) => {
                if let Err(_e) = self.store.set(SAVED_PASSWORDS_KEY, &json) {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Failed to persist saved passwords: {}", _e);
                }
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to encode saved passwords: {}", _e);
            }
        }
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::generator::Mode;
    use crate::random::ThreadRngSource;
    use crate::store::MemoryStore;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_load_mnemonic_wordlist() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for word in ["abandon", "ability", "able", "about"] {
            writeln!(temp_file, "{}", word).expect("Failed to write");
        }

        let mut session = ArcadeSession::new(MemoryStore::new(), ThreadRngSource);
        let count = session
            .load_mnemonic_wordlist(temp_file.path())
            .await
            .unwrap();
        assert_eq!(count, 4);

        session.settings_mut().mode = Mode::Mnemonic;
        assert!(session.generate().is_ok());
    }

    #[tokio::test]
    async fn test_failed_load_leaves_session_usable() {
        let mut session = ArcadeSession::new(MemoryStore::new(), ThreadRngSource);
        let result = session.load_mnemonic_wordlist("/nonexistent/english.txt").await;
        assert!(result.is_err());

        // Friendly generation still works.
        assert!(session.generate().is_ok());
    }
}
