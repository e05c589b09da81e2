//! # Command Layer
//!
//! One module per user-facing verb. Each `run` function:
//!
//! 1. loads the repository from the [`HabitStore`],
//! 2. applies the operation through the [`crate::repository`] methods,
//! 3. saves the whole repository back **only if the operation succeeded**,
//! 4. returns a [`CmdResult`] describing what happened.
//!
//! Commands never print, prompt, or exit. Confirmation for destructive
//! operations is the caller's job: see [`delete::preview`].

use crate::error::Result;
use crate::model::{Habit, Repository};
use crate::store::HabitStore;
use crate::streak::HabitStats;

pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod show;
pub mod undo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A habit together with its 1-based display index at the time of the command.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedHabit {
    pub index: usize,
    pub habit: Habit,
}

impl IndexedHabit {
    pub fn new(position: usize, habit: Habit) -> Self {
        Self {
            index: position + 1,
            habit,
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_habits: Vec<IndexedHabit>,
    pub listed_habits: Vec<IndexedHabit>,
    /// Filled by `show`, paired with the first listed habit.
    pub stats: Option<HabitStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_habits(mut self, habits: Vec<IndexedHabit>) -> Self {
        self.affected_habits = habits;
        self
    }

    pub fn with_listed_habits(mut self, habits: Vec<IndexedHabit>) -> Self {
        self.listed_habits = habits;
        self
    }

    pub fn with_stats(mut self, stats: HabitStats) -> Self {
        self.stats = Some(stats);
        self
    }
}

/// Loads, applies `op`, and saves only if `op` succeeded.
pub(crate) fn mutate<S, T, F>(store: &mut S, op: F) -> Result<T>
where
    S: HabitStore,
    F: FnOnce(&mut Repository) -> Result<T>,
{
    let mut repo = store.load()?;
    let out = op(&mut repo)?;
    store.save(&repo)?;
    Ok(out)
}

/// Warnings for short names that cannot be used as intended: names shared by
/// several habits (the first match wins) and names no reference can reach.
pub(crate) fn short_name_warnings(repo: &Repository) -> Vec<CmdMessage> {
    let mut warnings = Vec::new();

    let collisions = repo.short_name_collisions();
    if !collisions.is_empty() {
        warnings.push(CmdMessage::warning(format!(
            "Short name(s) used by more than one habit: {}. References resolve to the first match; rename with `habitz edit <index> --short <name>`.",
            collisions.join(", ")
        )));
    }

    let unreachable = repo.unreachable_short_names();
    if !unreachable.is_empty() {
        let quoted: Vec<String> = unreachable.iter().map(|s| format!("\"{}\"", s)).collect();
        warnings.push(CmdMessage::warning(format!(
            "Short name(s) that are numeric or contain whitespace cannot be referenced: {}. Use the index, or rename with `habitz edit <index> --short <name>`.",
            quoted.join(", ")
        )));
    }

    warnings
}
