//! Rosterank Core - Records, validation, and the roster store
//!
//! This crate provides the fundamental types for Rosterank:
//! - `StudentRecord` and its opaque `StudentId`
//! - The entity validator, the only code path that constructs records
//! - `RosterStore`, the insertion-order-preserving in-memory collection
//!
//! # Examples
//!
//! ```
//! use rosterank_core::{validate, RosterStore};
//!
//! let student = validate("Ada Lovelace", "97").unwrap();
//! assert_eq!(student.name(), "Ada Lovelace");
//!
//! let mut roster = RosterStore::new();
//! roster.append(student);
//! assert_eq!(roster.len(), 1);
//! ```

pub mod error;
pub mod record;
pub mod store;
pub mod validate;

pub use error::{RosterError, ValidationError};
pub use record::{StudentId, StudentRecord};
pub use store::RosterStore;
pub use validate::{validate, validate_score};
