//! Progression tracking: cumulative statistics, levels and achievements.
//!
//! The engine is an explicitly constructed instance owning its stats;
//! nothing here is process-global. Loading and saving go through a
//! [`PersistenceStore`] handed in by the caller, so tests run against
//! isolated in-memory stores.

mod achievements;
mod levels;

pub use achievements::{Achievement, CATALOG};
pub use levels::{LEVEL_THRESHOLDS, MAX_LEVEL, level_for, next_threshold};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::classifier::StrengthTier;
use crate::generator::Mode;
use crate::store::{LEGACY_LEVEL_KEY, PersistenceStore, STATS_KEY};

/// Cumulative usage statistics. Counters only grow, except through an
/// explicit [`ProgressionEngine::reset`]. Field names match the persisted
/// JSON record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressionStats {
    pub total_passwords: u64,
    pub weak_passwords: u64,
    /// Strong tier or better, Impossible included.
    pub strong_passwords: u64,
    pub mnemonic_phrases: u64,
    pub friendly_passwords: u64,
    pub impossible_passwords: u64,
    pub saved_passwords: u64,
    pub max_batch_size: u64,
    pub used_modes: BTreeSet<String>,
    pub achievements: BTreeSet<String>,
    pub highest_level: u32,
}

impl Default for ProgressionStats {
    fn default() -> Self {
        Self {
            total_passwords: 0,
            weak_passwords: 0,
            strong_passwords: 0,
            mnemonic_phrases: 0,
            friendly_passwords: 0,
            impossible_passwords: 0,
            saved_passwords: 0,
            max_batch_size: 0,
            used_modes: BTreeSet::new(),
            achievements: BTreeSet::new(),
            highest_level: 1,
        }
    }
}

/// What a generation event changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub new_level: u32,
    /// True exactly on the call where the level first exceeds the
    /// previous highest.
    pub leveled_up: bool,
    pub next_threshold: Option<u64>,
    pub newly_unlocked: Vec<Achievement>,
}

/// What a save event changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub newly_unlocked: Vec<Achievement>,
}

/// State machine over [`ProgressionStats`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressionEngine {
    stats: ProgressionStats,
}

impl ProgressionEngine {
    /// Engine with fresh stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads stats from the store, falling back to defaults on a missing
    /// or corrupt record.
    ///
    /// If the stats record is absent but the legacy level record parses,
    /// the highest level is seeded from it. The legacy record is never
    /// written back.
    pub fn load<S: PersistenceStore>(store: &S) -> Self {
        let stats = match store.get(STATS_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(stats) => stats,
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Progression record corrupt, using defaults: {}", _e);
                    Self::migrate_legacy(store)
                }
            },
            None => Self::migrate_legacy(store),
        };
        Self { stats }
    }

    fn migrate_legacy<S: PersistenceStore>(store: &S) -> ProgressionStats {
        let mut stats = ProgressionStats::default();
        if let Some(level) = store.get(LEGACY_LEVEL_KEY).and_then(|v| v.parse().ok()) {
            stats.highest_level = stats.highest_level.max(level);
            #[cfg(feature = "tracing")]
            tracing::info!("Migrated legacy level record: level {}", level);
        }
        stats
    }

    /// Writes the stats record. A failed write is logged, not fatal.
    pub fn save<S: PersistenceStore>(&self, store: &mut S) {
        match serde_json::to_string(&self.stats) {
            Ok(json) => {
                if let Err(_e) = store.set(STATS_KEY, &json) {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Failed to persist progression stats: {}", _e);
                }
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to encode progression stats: {}", _e);
            }
        }
    }

    pub fn stats(&self) -> &ProgressionStats {
        &self.stats
    }

    pub fn level(&self) -> u32 {
        self.stats.highest_level
    }

    /// Records one generation event and persists the updated stats.
    ///
    /// `batch_size` is the size of the batch the event produced; the
    /// event itself counts once regardless of batch size.
    pub fn record_generation<S: PersistenceStore>(
        &mut self,
        tier: StrengthTier,
        mode: Mode,
        batch_size: usize,
        store: &mut S,
    ) -> GenerationOutcome {
        let stats = &mut self.stats;
        stats.total_passwords += 1;
        if tier == StrengthTier::Weak {
            stats.weak_passwords += 1;
        }
        if tier >= StrengthTier::Strong {
            stats.strong_passwords += 1;
        }
        if tier == StrengthTier::Impossible {
            stats.impossible_passwords += 1;
        }
        match mode {
            Mode::Friendly => stats.friendly_passwords += 1,
            Mode::Mnemonic => stats.mnemonic_phrases += 1,
            Mode::Strong => {}
        }
        stats.max_batch_size = stats.max_batch_size.max(batch_size as u64);
        stats.used_modes.insert(mode.id().to_string());

        let new_level = level_for(stats.total_passwords);
        let leveled_up = new_level > stats.highest_level;
        stats.highest_level = stats.highest_level.max(new_level);

        #[cfg(feature = "tracing")]
        if leveled_up {
            tracing::info!("Level up: {}", new_level);
        }

        let newly_unlocked = self.unlock_achievements();
        self.save(store);

        GenerationOutcome {
            new_level,
            leveled_up,
            next_threshold: next_threshold(new_level),
            newly_unlocked,
        }
    }

    /// Records `count` newly saved passwords and persists.
    pub fn record_save<S: PersistenceStore>(&mut self, count: usize, store: &mut S) -> SaveOutcome {
        self.stats.saved_passwords += count as u64;
        let newly_unlocked = self.unlock_achievements();
        self.save(store);
        SaveOutcome { newly_unlocked }
    }

    /// The full catalog with each entry's unlocked flag.
    pub fn achievements(&self) -> Vec<(Achievement, bool)> {
        CATALOG
            .iter()
            .map(|a| (*a, self.stats.achievements.contains(a.id)))
            .collect()
    }

    /// Clears all progression: totals, level, achievements. Distinct from
    /// clearing saved passwords, which leaves progression untouched.
    pub fn reset<S: PersistenceStore>(&mut self, store: &mut S) {
        self.stats = ProgressionStats::default();
        self.save(store);
    }

    /// Unlocks every satisfied achievement not already unlocked.
    /// Idempotent; unlocks are permanent.
    fn unlock_achievements(&mut self) -> Vec<Achievement> {
        let mut unlocked = Vec::new();
        for achievement in &CATALOG {
            if self.stats.achievements.contains(achievement.id) {
                continue;
            }
            if achievements::satisfied(achievement.id, &self.stats) {
                self.stats.achievements.insert(achievement.id.to_string());
                unlocked.push(*achievement);
                #[cfg(feature = "tracing")]
                tracing::info!("Achievement unlocked: {}", achievement.id);
            }
        }
        unlocked
    }
}
