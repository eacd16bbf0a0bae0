//! Arcade-style password generator core.
//!
//! This library provides password generation in three modes (friendly
//! word pairs, random character soup, BIP39-style mnemonic phrases),
//! strength-tier classification, and a progression engine that tracks
//! cumulative usage, levels and achievements, persisted through a
//! key-value store. The UI layer is an external collaborator that calls
//! into this core and renders its outputs.
//!
//! # Features
//!
//! - `async` (default): Enables async wordlist loading via tokio
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_ARCADE_WORDLIST_PATH`: Custom path to the mnemonic wordlist
//!   file (default: `./assets/english.txt`)
//!
//! # Randomness
//!
//! The default [`RandomSource`] is a non-cryptographic PRNG. The trait
//! contract is source-agnostic, so a CSPRNG-backed source can be swapped
//! in without API changes.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_arcade::{ArcadeSession, MemoryStore, Mode, ThreadRngSource};
//!
//! let mut session = ArcadeSession::new(MemoryStore::new(), ThreadRngSource);
//! session.settings_mut().mode = Mode::Friendly;
//!
//! let result = session.generate().expect("generation failed");
//! println!("{} ({})", result.batch.active(), result.tier);
//! if result.progress.leveled_up {
//!     println!("Level up! Now level {}", result.progress.new_level);
//! }
//! for achievement in &result.progress.newly_unlocked {
//!     println!("{} {}", achievement.icon, achievement.title);
//! }
//! ```

// Internal modules
mod classifier;
mod generator;
mod progression;
mod random;
mod session;
mod store;
mod wordlist;

// Public API
pub use classifier::{StrengthTier, classify};
pub use generator::{
    GenerateError, GeneratedBatch, GeneratorSettings, LOWER_CHARS, MAX_BATCH_COUNT,
    MAX_MNEMONIC_WORDS, MIN_BATCH_COUNT, MIN_MNEMONIC_WORDS, Mode, NUMBER_CHARS, SEPARATORS,
    SPECIAL_CHARS, UPPER_CHARS, generate,
};
pub use progression::{
    Achievement, CATALOG, GenerationOutcome, LEVEL_THRESHOLDS, MAX_LEVEL, ProgressionEngine,
    ProgressionStats, SaveOutcome, level_for, next_threshold,
};
pub use random::{RandomSource, ThreadRngSource};
pub use session::{ArcadeSession, EXPORT_FILENAME, GenerationResult, SaveBatchResult};
pub use store::{
    FileStore, LEGACY_LEVEL_KEY, MemoryStore, PersistenceStore, SAVED_PASSWORDS_KEY, STATS_KEY,
    StoreError,
};
pub use wordlist::{WordList, WordlistError, Wordlists, wordlist_path};
