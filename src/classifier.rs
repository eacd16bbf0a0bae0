//! Password strength classification.
//!
//! The tier rule is a nested sufficiency test, not a score: a password
//! must contain all four character classes before length matters at all.
//! A 30-character password missing a digit is still Weak.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete strength tier, ordered by security level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
    VeryStrong,
    Impossible,
}

impl StrengthTier {
    /// Display label shown next to the password field.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
            StrengthTier::Impossible => "Impossible",
        }
    }

    /// Fixed display color for the tier.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "#dc3545",
            StrengthTier::Medium => "#ffc107",
            StrengthTier::Strong => "#0dcaf0",
            StrengthTier::VeryStrong => "#198754",
            StrengthTier::Impossible => "#6f42c1",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a password into a strength tier.
///
/// Requires at least one ASCII lowercase letter, one ASCII uppercase
/// letter, one digit and one character outside `[A-Za-z0-9]`; given all
/// four, the tier is decided by character count alone (>= 24 Impossible,
/// >= 16 Very Strong, >= 12 Strong, >= 6 Medium). Anything else is Weak,
/// including the empty string.
///
/// Pure and deterministic: the same input always yields the same tier.
pub fn classify(password: &str) -> StrengthTier {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    if !(has_lower && has_upper && has_digit && has_special) {
        return StrengthTier::Weak;
    }

    match password.chars().count() {
        len if len >= 24 => StrengthTier::Impossible,
        len if len >= 16 => StrengthTier::VeryStrong,
        len if len >= 12 => StrengthTier::Strong,
        len if len >= 6 => StrengthTier::Medium,
        _ => StrengthTier::Weak,
    }
}
