//! Ranking direction

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Ordering criterion for a ranking.
///
/// `Descending` (high score first) is the default, matching the roster's
/// primary "top of the class" view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    /// Low score first.
    #[cfg_attr(feature = "serde", serde(alias = "asc"))]
    Ascending,
    /// High score first.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "desc"))]
    Descending,
}

impl Direction {
    /// Returns true when an adjacent pair is out of order for this direction.
    ///
    /// Strict inequality only: equal scores are never out of order, which
    /// keeps the exchange sort stable.
    pub fn out_of_order(&self, left: f64, right: f64) -> bool {
        match self {
            Direction::Ascending => left > right,
            Direction::Descending => left < right,
        }
    }

    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Returns the user-facing order label.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Ascending => "Low → High",
            Direction::Descending => "High → Low",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "ascending"),
            Direction::Descending => write!(f, "descending"),
        }
    }
}

/// Error returned when a direction string is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown direction '{0}', expected 'asc' or 'desc'")]
pub struct DirectionParseError(pub String);

impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            other => Err(DirectionParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_descending() {
        assert_eq!(Direction::default(), Direction::Descending);
    }

    #[test]
    fn test_out_of_order() {
        assert!(Direction::Ascending.out_of_order(2.0, 1.0));
        assert!(!Direction::Ascending.out_of_order(1.0, 2.0));
        assert!(Direction::Descending.out_of_order(1.0, 2.0));
        assert!(!Direction::Descending.out_of_order(2.0, 1.0));
    }

    #[test]
    fn test_equal_scores_never_out_of_order() {
        assert!(!Direction::Ascending.out_of_order(5.0, 5.0));
        assert!(!Direction::Descending.out_of_order(5.0, 5.0));
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Direction::Ascending.toggled(), Direction::Descending);
        assert_eq!(Direction::Descending.toggled(), Direction::Ascending);
    }

    #[test]
    fn test_parse() {
        assert_eq!("asc".parse::<Direction>().unwrap(), Direction::Ascending);
        assert_eq!(
            "Descending".parse::<Direction>().unwrap(),
            Direction::Descending
        );
        assert_eq!(
            " DESC ".parse::<Direction>().unwrap(),
            Direction::Descending
        );
        assert!("sideways".parse::<Direction>().is_err());
    }
}
