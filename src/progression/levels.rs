//! Level thresholds.

/// Cumulative generation counts required for each level, ascending.
/// `LEVEL_THRESHOLDS[i]` is the count needed to hold level `i + 1`.
pub const LEVEL_THRESHOLDS: [u64; 10] = [0, 5, 15, 30, 50, 75, 105, 140, 180, 225];

pub const MAX_LEVEL: u32 = LEVEL_THRESHOLDS.len() as u32;

/// Level for a cumulative generation count: the number of thresholds the
/// count has reached, capped at [`MAX_LEVEL`].
pub fn level_for(total_passwords: u64) -> u32 {
    LEVEL_THRESHOLDS
        .iter()
        .filter(|&&threshold| total_passwords >= threshold)
        .count() as u32
}

/// Count needed to reach the next level, or `None` at the cap.
pub fn next_threshold(current_level: u32) -> Option<u64> {
    LEVEL_THRESHOLDS.get(current_level as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_fresh_stats() {
        assert_eq!(level_for(0), 1);
        assert_eq!(level_for(4), 1);
    }

    #[test]
    fn test_level_for_threshold_boundaries() {
        assert_eq!(level_for(5), 2);
        assert_eq!(level_for(14), 2);
        assert_eq!(level_for(15), 3);
        assert_eq!(level_for(225), 10);
    }

    #[test]
    fn test_level_for_caps_at_max() {
        assert_eq!(level_for(10_000), MAX_LEVEL);
    }

    #[test]
    fn test_next_threshold() {
        assert_eq!(next_threshold(1), Some(5));
        assert_eq!(next_threshold(9), Some(225));
        assert_eq!(next_threshold(10), None);
    }
}
