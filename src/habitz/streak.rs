//! Streak and history statistics for a single habit.
//!
//! A *streak* is a run of consecutive calendar days on which the habit was
//! done. The current streak is still alive if today has not been tracked yet
//! but yesterday was: it only breaks once a full day has been missed.

use crate::model::{Habit, TrackedDate};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitStats {
    /// Distinct days tracked.
    pub total: usize,
    pub current_streak: usize,
    pub longest_streak: usize,
    pub last_done: Option<TrackedDate>,
    pub done_today: bool,
}

impl HabitStats {
    pub fn compute(habit: &Habit, today: TrackedDate) -> Self {
        let days: BTreeSet<TrackedDate> = habit.dates_tracked.iter().copied().collect();

        let mut longest = 0;
        let mut run = 0;
        let mut prev: Option<TrackedDate> = None;
        for day in &days {
            run = match prev {
                Some(p) if p.days_until(*day) == 1 => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            prev = Some(*day);
        }

        let done_today = days.contains(&today);
        let mut cursor = if done_today { today } else { today.pred() };
        let mut current = 0;
        while days.contains(&cursor) {
            current += 1;
            cursor = cursor.pred();
        }

        Self {
            total: days.len(),
            current_streak: current,
            longest_streak: longest,
            last_done: days.iter().next_back().copied(),
            done_today,
        }
    }
}
