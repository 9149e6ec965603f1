//! Ranking result and sort statistics

use rosterank_core::StudentRecord;

use crate::direction::Direction;

/// Work accounting for one ranking run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingStats {
    /// Full comparison sweeps performed, counting the sweep that detected
    /// the sequence was fully ordered.
    pub passes: u64,
    /// Adjacent-element exchanges performed.
    pub swaps: u64,
}

impl RankingStats {
    /// Statistics for a run that did no work (zero or one record).
    pub const ZERO: RankingStats = RankingStats { passes: 0, swaps: 0 };

    /// Returns true when the input was already in order.
    ///
    /// At most one sweep ran and it exchanged nothing.
    pub fn was_presorted(&self) -> bool {
        self.swaps == 0
    }
}

/// The outcome of one ranking run: the reordered records plus statistics.
///
/// Ephemeral by design. A result is recomputed on demand and holds the same
/// record multiset as its input; it is never stored in the core, and callers
/// discard it once the roster mutates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingResult {
    /// The records, reordered for the requested direction.
    pub ranked: Vec<StudentRecord>,
    /// The direction this ranking was computed for.
    pub direction: Direction,
    /// Sort work accounting.
    pub stats: RankingStats,
}

impl RankingResult {
    /// Returns the number of ranked records.
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Returns true when the ranking holds no records.
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_stats() {
        assert_eq!(RankingStats::ZERO.passes, 0);
        assert_eq!(RankingStats::ZERO.swaps, 0);
        assert!(RankingStats::ZERO.was_presorted());
    }

    #[test]
    fn test_presorted_detection() {
        let worked = RankingStats { passes: 3, swaps: 2 };
        assert!(!worked.was_presorted());

        let clean = RankingStats { passes: 1, swaps: 0 };
        assert!(clean.was_presorted());
    }
}
