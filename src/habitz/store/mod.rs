//! # Storage Layer
//!
//! This module defines the storage abstraction for habitz. The [`HabitStore`]
//! trait lets the command layer load and persist a [`Repository`] without
//! knowing where it lives.
//!
//! ## Whole-Document Persistence
//!
//! The store holds a single JSON document. Every command loads it fresh,
//! mutates the in-memory [`Repository`], and (only on success) saves the whole
//! document back. There are no partial or append writes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store backed by one JSON file.
//!   - Missing file loads as an empty repository, so there is no init step.
//!   - Saves go through a temp file + rename.
//! - [`memory::InMemoryStore`]: For testing command logic without filesystem I/O.
//!
//! ## Document Format
//!
//! See [`codec`] and [`crate::model`]:
//!
//! ```text
//! { "habits": [ { "name", "shortName", "datesTracked", "reminderInfo" }, ... ] }
//! ```
//!
//! ## Concurrency
//!
//! habitz assumes exclusive, single-process access to the store for the
//! duration of one command. There is no locking.

use crate::error::Result;
use crate::model::Repository;

pub mod codec;
pub mod fs;
pub mod memory;

/// Abstract interface for habit storage.
pub trait HabitStore {
    /// Load the full repository. A store that has never been written is empty.
    fn load(&self) -> Result<Repository>;

    /// Replace the stored repository in full.
    fn save(&mut self, repo: &Repository) -> Result<()>;
}
