use crate::commands::{CmdResult, IndexedHabit};
use crate::error::Result;
use crate::model::TrackedDate;
use crate::reference::HabitRef;
use crate::store::HabitStore;
use crate::streak::HabitStats;

/// Looks up one habit and computes its statistics relative to `today`.
pub fn run<S: HabitStore>(store: &S, reference: &HabitRef, today: TrackedDate) -> Result<CmdResult> {
    let repo = store.load()?;
    let pos = repo.resolve(reference)?;
    let habit = &repo.habits[pos];
    let stats = HabitStats::compute(habit, today);

    Ok(CmdResult::default()
        .with_listed_habits(vec![IndexedHabit::new(pos, habit.clone())])
        .with_stats(stats))
}
