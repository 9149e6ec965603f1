//! Rosterank Ranking - On-demand ranking with sort statistics
//!
//! Ranks a snapshot of student records by score using an adjacent-pair
//! exchange sort and reports how much work the sort performed:
//! - `passes`: full comparison sweeps, including the sweep that detects
//!   completion
//! - `swaps`: adjacent-element exchanges
//!
//! The input is never mutated and the result is never stored; callers
//! recompute on demand and discard stale results after roster mutations.
//!
//! # Examples
//!
//! ```
//! use rosterank_core::validate;
//! use rosterank_ranking::{rank, Direction};
//!
//! let roster = vec![
//!     validate("Alice", "90").unwrap(),
//!     validate("Bob", "70").unwrap(),
//!     validate("Cara", "85").unwrap(),
//! ];
//!
//! let result = rank(&roster, Direction::Descending);
//! let names: Vec<_> = result.ranked.iter().map(|r| r.name()).collect();
//! assert_eq!(names, ["Alice", "Cara", "Bob"]);
//! assert_eq!(result.stats.passes, 2);
//! assert_eq!(result.stats.swaps, 1);
//! ```

pub mod direction;
pub mod engine;
pub mod stats;

pub use direction::{Direction, DirectionParseError};
pub use engine::rank;
pub use stats::{RankingResult, RankingStats};
