//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all habitz operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: raw reference strings become [`HabitRef`]s, date
//!   strings (`YYYY-MM-DD`, `today`, `yesterday`) become [`TrackedDate`]s
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no printing and no prompting.
//!
//! ## Generic Over HabitStore
//!
//! `HabitzApi<S: HabitStore>` is generic over the storage backend:
//! - Production: `HabitzApi<FileStore>`
//! - Testing: `HabitzApi<InMemoryStore>`
//!
//! "Today" is captured when the API is built and can be pinned with
//! [`HabitzApi::with_today`], so date defaults are testable.

use crate::commands;
use crate::error::Result;
use crate::model::TrackedDate;
use crate::reference::{parse_refs, HabitRef};
use crate::store::HabitStore;
use std::path::Path;

pub use crate::commands::{CmdMessage, CmdResult, IndexedHabit, MessageLevel};
pub use crate::repository::HabitUpdate;

/// The main API facade for habitz operations.
pub struct HabitzApi<S: HabitStore> {
    store: S,
    today: TrackedDate,
    auto_short_name: bool,
}

impl<S: HabitStore> HabitzApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            today: TrackedDate::today(),
            auto_short_name: false,
        }
    }

    pub fn with_today(mut self, today: TrackedDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_auto_short_name(mut self, enabled: bool) -> Self {
        self.auto_short_name = enabled;
        self
    }

    pub fn today(&self) -> TrackedDate {
        self.today
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_habit(&mut self, name: &str, short_name: Option<&str>) -> Result<CmdResult> {
        commands::add::run(&mut self.store, name, short_name, self.auto_short_name)
    }

    pub fn mark_done<I: AsRef<str>>(
        &mut self,
        references: &[I],
        date: Option<&str>,
    ) -> Result<CmdResult> {
        let refs = parse_refs(references)?;
        let date = self.parse_date(date)?;
        commands::done::run(&mut self.store, &refs, date)
    }

    pub fn unmark(&mut self, reference: &str, date: Option<&str>) -> Result<CmdResult> {
        let reference: HabitRef = reference.parse()?;
        let date = self.parse_date(date)?;
        commands::undo::run(&mut self.store, &reference, date)
    }

    pub fn edit_habit(&mut self, reference: &str, update: HabitUpdate) -> Result<CmdResult> {
        let reference: HabitRef = reference.parse()?;
        commands::edit::run(&mut self.store, &reference, update)
    }

    /// The habit `delete_habit` would remove, for confirmation prompts.
    pub fn delete_preview(&self, reference: &str) -> Result<IndexedHabit> {
        let reference: HabitRef = reference.parse()?;
        commands::delete::preview(&self.store, &reference)
    }

    pub fn delete_habit(&mut self, reference: &str) -> Result<CmdResult> {
        let reference: HabitRef = reference.parse()?;
        commands::delete::run(&mut self.store, &reference)
    }

    pub fn list_habits(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn show_habit(&self, reference: &str) -> Result<CmdResult> {
        let reference: HabitRef = reference.parse()?;
        commands::show::run(&self.store, &reference, self.today)
    }

    pub fn export_habits(&self, path: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn import_habits(&mut self, path: &Path) -> Result<CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    fn parse_date(&self, date: Option<&str>) -> Result<TrackedDate> {
        match date {
            Some(text) => TrackedDate::parse_relative(text, self.today),
            None => Ok(self.today),
        }
    }
}
