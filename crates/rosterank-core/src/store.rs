//! The in-memory roster store

use crate::error::RosterError;
use crate::record::{StudentId, StudentRecord};

/// Insertion-order-preserving collection of student records.
///
/// The store is the only shared mutable state in the core and assumes a
/// single-threaded caller. It never reorders its contents: ranking operates on
/// a snapshot and leaves the store untouched.
///
/// Every mutating operation bumps the [`revision`](RosterStore::revision)
/// counter. Collaborators that hold a previously computed ranking compare
/// revisions to detect that the ranking is stale and must be discarded; the
/// store never recomputes rankings on their behalf.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    records: Vec<StudentRecord>,
    revision: u64,
}

impl RosterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the end of the roster.
    ///
    /// Names are not checked for uniqueness; only ids are unique, guaranteed
    /// by construction through the validator.
    pub fn append(&mut self, record: StudentRecord) {
        debug_assert!(
            self.records.iter().all(|r| r.id() != record.id()),
            "duplicate id appended to roster"
        );
        self.records.push(record);
        self.revision += 1;
    }

    /// Removes the record with the given id and returns it.
    ///
    /// The store is left unchanged when no record matches.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when the id is absent.
    pub fn remove_by_id(&mut self, id: StudentId) -> Result<StudentRecord, RosterError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(RosterError::NotFound(id))?;
        let removed = self.records.remove(index);
        self.revision += 1;
        Ok(removed)
    }

    /// Empties the roster unconditionally.
    ///
    /// Clearing an already-empty store is a no-op, not an error, and does not
    /// invalidate anything.
    pub fn clear(&mut self) {
        if !self.records.is_empty() {
            self.records.clear();
            self.revision += 1;
        }
    }

    /// Returns the current ordered contents as a shared view.
    pub fn all(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Returns an iterator over the records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the roster holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the mutation counter.
    ///
    /// Strictly increases with every append, successful removal, and clear of
    /// a non-empty store.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
