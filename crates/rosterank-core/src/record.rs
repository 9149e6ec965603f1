//! Student record and identity types

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Opaque unique identifier for a [`StudentRecord`].
///
/// Generated once at record creation and immutable afterwards. The id is the
/// sole identity key for removal; names carry no uniqueness guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudentId(Uuid);

impl StudentId {
    pub(crate) fn generate() -> Self {
        StudentId(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for StudentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Uuid>().map(StudentId)
    }
}

/// An immutable student entry in the roster.
///
/// Records are only constructed through [`crate::validate`], which guarantees
/// the trimmed-name and score-range invariants for every stored record. There
/// is no in-place mutation; corrections require removal and re-addition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudentRecord {
    id: StudentId,
    name: String,
    score: f64,
    created_at: DateTime<Utc>,
}

impl StudentRecord {
    pub(crate) fn new(name: String, score: f64) -> Self {
        StudentRecord {
            id: StudentId::generate(),
            name,
            score,
            created_at: Utc::now(),
        }
    }

    /// Returns the record's unique id.
    pub fn id(&self) -> StudentId {
        self.id
    }

    /// Returns the trimmed, non-empty name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the score, always within [0, 100].
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns the creation timestamp.
    ///
    /// Informational only; insertion-order tie-breaking comes from the store's
    /// ordering, not from this field.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
