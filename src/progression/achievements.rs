//! Achievement catalog and unlock predicates.

use super::ProgressionStats;
use crate::generator::Mode;

/// One milestone in the static catalog. The unlocked state lives in
/// [`ProgressionStats::achievements`], keyed by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirement: Option<u64>,
}

pub const CATALOG: [Achievement; 10] = [
    Achievement {
        id: "beginner",
        title: "Password Apprentice",
        description: "Generate your first password",
        icon: "🎮",
        requirement: None,
    },
    Achievement {
        id: "weak_master",
        title: "Master of Weakness",
        description: "Generate 10 weak passwords",
        icon: "🎯",
        requirement: Some(10),
    },
    Achievement {
        id: "strong_master",
        title: "Security Expert",
        description: "Generate 20 strong passwords",
        icon: "🛡️",
        requirement: Some(20),
    },
    Achievement {
        id: "mnemonic_master",
        title: "Crypto Wizard",
        description: "Generate 5 mnemonic phrases",
        icon: "🔐",
        requirement: Some(5),
    },
    Achievement {
        id: "collector",
        title: "Password Collector",
        description: "Save 50 passwords",
        icon: "💾",
        requirement: Some(50),
    },
    Achievement {
        id: "batch_hero",
        title: "Batch Hero",
        description: "Generate 10 passwords in a single batch",
        icon: "📦",
        requirement: Some(10),
    },
    Achievement {
        id: "impossible_legend",
        title: "Impossible Legend",
        description: "Generate 5 impossible-tier passwords",
        icon: "🏆",
        requirement: Some(5),
    },
    Achievement {
        id: "friendly_face",
        title: "Friendly Face",
        description: "Generate 20 friendly passwords",
        icon: "🤝",
        requirement: Some(20),
    },
    Achievement {
        id: "veteran",
        title: "Arcade Veteran",
        description: "Reach level 5",
        icon: "⭐",
        requirement: Some(5),
    },
    Achievement {
        id: "mode_explorer",
        title: "Mode Explorer",
        description: "Use all three generation modes",
        icon: "🧭",
        requirement: None,
    },
];

/// Whether the stats satisfy the achievement's predicate. Unknown ids
/// never unlock.
pub(super) fn satisfied(id: &str, stats: &ProgressionStats) -> bool {
    match id {
        "beginner" => stats.total_passwords >= 1,
        "weak_master" => stats.weak_passwords >= 10,
        "strong_master" => stats.strong_passwords >= 20,
        "mnemonic_master" => stats.mnemonic_phrases >= 5,
        "collector" => stats.saved_passwords >= 50,
        "batch_hero" => stats.max_batch_size >= 10,
        "impossible_legend" => stats.impossible_passwords >= 5,
        "friendly_face" => stats.friendly_passwords >= 20,
        "veteran" => stats.highest_level >= 5,
        "mode_explorer" => stats.used_modes.len() >= Mode::ALL.len(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate achievement id {}", a.id);
            }
        }
    }

    #[test]
    fn test_every_catalog_entry_has_a_predicate() {
        let mut stats = ProgressionStats::default();
        stats.total_passwords = 1000;
        stats.weak_passwords = 1000;
        stats.strong_passwords = 1000;
        stats.mnemonic_phrases = 1000;
        stats.friendly_passwords = 1000;
        stats.impossible_passwords = 1000;
        stats.saved_passwords = 1000;
        stats.max_batch_size = 20;
        stats.highest_level = 10;
        for mode in Mode::ALL {
            stats.used_modes.insert(mode.id().to_string());
        }

        for achievement in &CATALOG {
            assert!(
                satisfied(achievement.id, &stats),
                "no predicate satisfied for {}",
                achievement.id
            );
        }
    }

    #[test]
    fn test_unknown_id_never_unlocks() {
        let stats = ProgressionStats::default();
        assert!(!satisfied("no_such_achievement", &stats));
    }

    #[test]
    fn test_fresh_stats_satisfy_nothing() {
        let stats = ProgressionStats::default();
        for achievement in &CATALOG {
            assert!(!satisfied(achievement.id, &stats));
        }
    }
}
