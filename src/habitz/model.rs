//! Core data types: [`Habit`], the [`Repository`] document and [`TrackedDate`].
//!
//! The serde shape of these types *is* the on-disk format:
//!
//! ```json
//! {
//!   "habits": [
//!     {
//!       "name": "Read before bed",
//!       "shortName": "read",
//!       "datesTracked": ["2023-01-01", "2023-01-02"],
//!       "reminderInfo": {}
//!     }
//!   ]
//! }
//! ```
//!
//! `reminderInfo` is opaque to habitz and is carried through verbatim.

use crate::error::{HabitzError, Result};
use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar day on which a habit was done, always in canonical `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackedDate(NaiveDate);

impl TrackedDate {
    /// The current local calendar date.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parses a strict `YYYY-MM-DD` string.
    ///
    /// Non-padded forms such as `2023-1-1` and surrounding whitespace are
    /// rejected so that the stored text is always canonical. This is also the
    /// deserialization path for `datesTracked`.
    pub fn parse(text: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| {
            HabitzError::Validation(format!("'{}' is not a YYYY-MM-DD date", text))
        })?;
        if date.format(DATE_FORMAT).to_string() != text {
            return Err(HabitzError::Validation(format!(
                "'{}' is not a YYYY-MM-DD date",
                text
            )));
        }
        Ok(Self(date))
    }

    /// Parses user input, also accepting `today` and `yesterday` relative to `today`.
    ///
    /// Surrounding whitespace is ignored here, unlike [`TrackedDate::parse`].
    pub fn parse_relative(text: &str, today: TrackedDate) -> Result<Self> {
        let text = text.trim();
        match text.to_ascii_lowercase().as_str() {
            "today" => Ok(today),
            "yesterday" => Ok(today.pred()),
            _ => Self::parse(text),
        }
    }

    /// The previous calendar day.
    pub fn pred(&self) -> Self {
        Self(self.0 - Duration::days(1))
    }

    /// Whole days from `self` to `later` (negative if `later` is earlier).
    pub fn days_until(&self, later: TrackedDate) -> i64 {
        (later.0 - self.0).num_days()
    }
}

impl fmt::Display for TrackedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl TryFrom<String> for TrackedDate {
    type Error = HabitzError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TrackedDate> for String {
    fn from(value: TrackedDate) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub short_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dates_tracked: Vec<TrackedDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reminder_info: Map<String, Value>,
}

impl Habit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: String::new(),
            dates_tracked: Vec::new(),
            reminder_info: Map::new(),
        }
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    pub fn has_short_name(&self) -> bool {
        !self.short_name.is_empty()
    }

    pub fn is_tracked_on(&self, date: TrackedDate) -> bool {
        self.dates_tracked.contains(&date)
    }
}

/// The root document: every habit, in user-visible order.
///
/// Position in `habits` is the habit's identity for index references, so the
/// order must survive save/load untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub habits: Vec<Habit>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}

impl From<Vec<Habit>> for Repository {
    fn from(habits: Vec<Habit>) -> Self {
        Self { habits }
    }
}

// Older data files store empty collections as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
