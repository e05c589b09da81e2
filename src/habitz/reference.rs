//! # Habit References
//!
//! Commands that act on a single habit take a *reference*, a string the user
//! typed on the command line. There are two forms:
//!
//! - **Index**: `1`, `2`, ... the 1-based position of the habit as shown by `habitz list`.
//! - **Short name**: any other string, matched exactly (case-sensitive) against `shortName`.
//!
//! A string made only of ASCII digits is always an index. This is why short
//! names may not be purely numeric: they could never be referenced.
//!
//! ## Index Stability
//!
//! Indexes are positions, not identities. Deleting habit 2 renumbers habit 3 to
//! 2, and so on. An index is only meaningful within a single load/mutate/save
//! cycle; scripts should prefer short names.
//!
//! ## Short-Name Collisions
//!
//! `add` and `edit` refuse duplicate short names, but an import (or a hand
//! edited data file) can still introduce them. Resolution is then deterministic:
//! the first habit in list order wins.

use crate::error::HabitzError;
use std::fmt;
use std::str::FromStr;

/// A parsed user reference to one habit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HabitRef {
    Index(usize),
    ShortName(String),
}

impl fmt::Display for HabitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HabitRef::Index(i) => write!(f, "{}", i),
            HabitRef::ShortName(name) => write!(f, "\"{}\"", name),
        }
    }
}

impl FromStr for HabitRef {
    type Err = HabitzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(HabitzError::Validation(
                "Habit reference cannot be empty".to_string(),
            ));
        }
        if is_numeric(s) {
            // Digits that overflow usize can never be in range anyway.
            let index = s.parse().unwrap_or(usize::MAX);
            return Ok(HabitRef::Index(index));
        }
        Ok(HabitRef::ShortName(s.to_string()))
    }
}

pub(crate) fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Parses a list of raw references, failing on the first invalid one.
pub fn parse_refs<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<HabitRef>, HabitzError> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_parse_as_index() {
        assert_eq!("1".parse::<HabitRef>().unwrap(), HabitRef::Index(1));
        assert_eq!(" 42 ".parse::<HabitRef>().unwrap(), HabitRef::Index(42));
        assert_eq!("0".parse::<HabitRef>().unwrap(), HabitRef::Index(0));
    }

    #[test]
    fn anything_else_is_a_short_name() {
        assert_eq!(
            "run".parse::<HabitRef>().unwrap(),
            HabitRef::ShortName("run".into())
        );
        assert_eq!(
            "-1".parse::<HabitRef>().unwrap(),
            HabitRef::ShortName("-1".into())
        );
        assert_eq!(
            "p1".parse::<HabitRef>().unwrap(),
            HabitRef::ShortName("p1".into())
        );
    }

    #[test]
    fn huge_index_saturates() {
        let r: HabitRef = "99999999999999999999999999".parse().unwrap();
        assert_eq!(r, HabitRef::Index(usize::MAX));
    }

    #[test]
    fn empty_reference_is_rejected() {
        assert!("".parse::<HabitRef>().is_err());
        assert!("   ".parse::<HabitRef>().is_err());
    }

    #[test]
    fn display_quotes_short_names() {
        assert_eq!(HabitRef::Index(3).to_string(), "3");
        assert_eq!(HabitRef::ShortName("gym".into()).to_string(), "\"gym\"");
    }

    #[test]
    fn parse_refs_collects_all() {
        let refs = parse_refs(&["1", "gym"]).unwrap();
        assert_eq!(
            refs,
            vec![HabitRef::Index(1), HabitRef::ShortName("gym".into())]
        );
        assert!(parse_refs(&["1", ""]).is_err());
    }
}
