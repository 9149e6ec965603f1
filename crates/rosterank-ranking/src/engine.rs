//! The adjacent-pair exchange ranking engine

use rosterank_core::StudentRecord;

use crate::direction::Direction;
use crate::stats::{RankingResult, RankingStats};

/// Ranks a snapshot of records by score.
///
/// Runs a classic bubble sort over a copy of the input; the input slice is
/// never mutated. Each outer sweep compares every remaining adjacent pair and
/// exchanges the pair when it is out of order for the requested direction; a
/// sweep that exchanges nothing proves the sequence is ordered and terminates
/// the sort early. `passes` counts every sweep including the terminating one,
/// `swaps` counts every exchange.
///
/// Exchanges fire on strict inequality only, so records with equal scores
/// keep their relative input order.
///
/// Zero- and one-record inputs return unchanged with zero passes and swaps.
/// The output is deterministic for a given input sequence and direction.
pub fn rank(records: &[StudentRecord], direction: Direction) -> RankingResult {
    let mut ranked = records.to_vec();
    let n = ranked.len();
    let mut stats = RankingStats::ZERO;

    for sweep in 0..n.saturating_sub(1) {
        let mut swapped = false;
        stats.passes += 1;

        for j in 0..n - sweep - 1 {
            if direction.out_of_order(ranked[j].score(), ranked[j + 1].score()) {
                ranked.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    RankingResult {
        ranked,
        direction,
        stats,
    }
}
