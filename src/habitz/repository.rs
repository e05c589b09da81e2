//! In-memory habit operations on a loaded [`Repository`].
//!
//! Nothing here touches the filesystem; the command layer loads a repository,
//! calls these methods, and saves the result only if they succeed.

use crate::error::{HabitzError, Result};
use crate::model::{Habit, Repository, TrackedDate};
use crate::reference::{is_numeric, HabitRef};
use std::collections::HashMap;

/// Outcome of [`Repository::mark_done`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    Recorded,
    AlreadyTracked,
}

/// Sparse field update for [`Repository::edit`]. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitUpdate {
    pub name: Option<String>,
    /// `Some("")` clears the short name.
    pub short_name: Option<String>,
}

impl HabitUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.short_name.is_none()
    }
}

impl Repository {
    /// Appends a new habit and returns it.
    pub fn add(&mut self, name: &str, short_name: Option<&str>) -> Result<&Habit> {
        let name = validate_name(name)?;
        let short_name = match short_name {
            Some(s) => self.validate_short_name(s, None)?,
            None => String::new(),
        };
        self.habits.push(Habit::new(name).with_short_name(short_name));
        Ok(&self.habits[self.habits.len() - 1])
    }

    /// Resolves a reference to a 0-based position.
    ///
    /// Short-name collisions resolve to the first match in list order.
    pub fn resolve(&self, reference: &HabitRef) -> Result<usize> {
        match reference {
            HabitRef::Index(n) => {
                if *n >= 1 && *n <= self.habits.len() {
                    Ok(n - 1)
                } else if self.habits.is_empty() {
                    Err(HabitzError::NotFound(format!(
                        "index {} (there are no habits yet)",
                        n
                    )))
                } else {
                    Err(HabitzError::NotFound(format!(
                        "index {} (valid range is 1-{})",
                        n,
                        self.habits.len()
                    )))
                }
            }
            HabitRef::ShortName(name) => self
                .habits
                .iter()
                .position(|h| h.has_short_name() && &h.short_name == name)
                .ok_or_else(|| HabitzError::NotFound(format!("short name \"{}\"", name))),
        }
    }

    /// Parses and resolves a raw reference string.
    pub fn resolve_str(&self, reference: &str) -> Result<usize> {
        self.resolve(&reference.parse()?)
    }

    pub fn get(&self, reference: &HabitRef) -> Result<&Habit> {
        let pos = self.resolve(reference)?;
        Ok(&self.habits[pos])
    }

    /// Records `date` for the habit unless it is already tracked.
    pub fn mark_done(&mut self, reference: &HabitRef, date: TrackedDate) -> Result<MarkOutcome> {
        let pos = self.resolve(reference)?;
        let habit = &mut self.habits[pos];
        if habit.is_tracked_on(date) {
            return Ok(MarkOutcome::AlreadyTracked);
        }
        habit.dates_tracked.push(date);
        Ok(MarkOutcome::Recorded)
    }

    /// Removes `date` from the habit. Returns whether anything was removed.
    pub fn unmark(&mut self, reference: &HabitRef, date: TrackedDate) -> Result<bool> {
        let pos = self.resolve(reference)?;
        let dates = &mut self.habits[pos].dates_tracked;
        let before = dates.len();
        dates.retain(|d| *d != date);
        Ok(dates.len() != before)
    }

    /// Applies a sparse update. Tracked dates and reminder info are never touched.
    pub fn edit(&mut self, reference: &HabitRef, update: HabitUpdate) -> Result<&Habit> {
        if update.is_empty() {
            return Err(HabitzError::Validation(
                "Nothing to edit: pass --name and/or --short".to_string(),
            ));
        }
        let pos = self.resolve(reference)?;

        // Validate everything before mutating anything.
        let name = update.name.as_deref().map(validate_name).transpose()?;
        let short_name = update
            .short_name
            .as_deref()
            .map(|s| self.validate_short_name(s, Some(pos)))
            .transpose()?;

        let habit = &mut self.habits[pos];
        if let Some(name) = name {
            habit.name = name;
        }
        if let Some(short_name) = short_name {
            habit.short_name = short_name;
        }
        Ok(&self.habits[pos])
    }

    /// Removes the habit; every later habit moves down one index.
    pub fn remove(&mut self, reference: &HabitRef) -> Result<Habit> {
        let pos = self.resolve(reference)?;
        Ok(self.habits.remove(pos))
    }

    /// Appends habits verbatim, without de-duplication. Returns how many were added.
    pub fn append_all(&mut self, habits: Vec<Habit>) -> usize {
        let count = habits.len();
        self.habits.extend(habits);
        count
    }

    /// Short names used by more than one habit, in first-seen order.
    pub fn short_name_collisions(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for habit in self.habits.iter().filter(|h| h.has_short_name()) {
            let count = counts.entry(habit.short_name.as_str()).or_insert(0);
            if *count == 1 {
                order.push(habit.short_name.clone());
            }
            *count += 1;
        }
        order
    }

    /// Short names no reference can reach: numeric ones parse as indexes and
    /// ones with whitespace never match a single argument. Only imported or
    /// hand-edited files can contain them.
    pub fn unreachable_short_names(&self) -> Vec<String> {
        self.habits
            .iter()
            .map(|h| h.short_name.as_str())
            .filter(|s| is_numeric(s) || s.chars().any(char::is_whitespace))
            .map(str::to_string)
            .collect()
    }

    /// Derives an unused short name from the initials of `name`.
    ///
    /// `"Read Before Bed"` becomes `rbb`; if taken, `rbb2`, `rbb3` and so on.
    pub fn next_short_name(&self, name: &str) -> String {
        let initials: String = name
            .split_whitespace()
            .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
            .flat_map(|c| c.to_lowercase())
            .collect();
        let base = if initials.is_empty() || is_numeric(&initials) {
            format!("h{}", initials)
        } else {
            initials
        };

        let mut candidate = base.clone();
        let mut suffix = 2;
        while self.short_name_taken(&candidate, None) {
            candidate = format!("{}{}", base, suffix);
            suffix += 1;
        }
        candidate
    }

    fn short_name_taken(&self, short_name: &str, except: Option<usize>) -> bool {
        self.habits
            .iter()
            .enumerate()
            .any(|(i, h)| Some(i) != except && h.short_name == short_name)
    }

    fn validate_short_name(&self, short_name: &str, except: Option<usize>) -> Result<String> {
        let short_name = short_name.trim();
        if short_name.is_empty() {
            return Ok(String::new());
        }
        if is_numeric(short_name) {
            return Err(HabitzError::Validation(format!(
                "Short name \"{}\" is numeric and would be read as an index",
                short_name
            )));
        }
        if short_name.chars().any(char::is_whitespace) {
            return Err(HabitzError::Validation(format!(
                "Short name \"{}\" must not contain whitespace",
                short_name
            )));
        }
        if self.short_name_taken(short_name, except) {
            return Err(HabitzError::Validation(format!(
                "Short name \"{}\" is already in use",
                short_name
            )));
        }
        Ok(short_name.to_string())
    }
}

fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(HabitzError::Validation(
            "Habit name cannot be empty".to_string(),
        ));
    }
    Ok(name.to_string())
}
