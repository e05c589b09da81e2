use crate::commands::{mutate, CmdMessage, CmdResult, IndexedHabit};
use crate::error::Result;
use crate::model::TrackedDate;
use crate::reference::HabitRef;
use crate::store::HabitStore;

/// Removes `date` from a habit's history.
pub fn run<S: HabitStore>(
    store: &mut S,
    reference: &HabitRef,
    date: TrackedDate,
) -> Result<CmdResult> {
    let (indexed, removed) = mutate(store, |repo| {
        let pos = repo.resolve(reference)?;
        let removed = repo.unmark(reference, date)?;
        Ok((IndexedHabit::new(pos, repo.habits[pos].clone()), removed))
    })?;

    let mut result = CmdResult::default();
    if removed {
        result.add_message(CmdMessage::success(format!(
            "Unmarked ({}): {} on {}",
            indexed.index, indexed.habit.name, date
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Not tracked ({}): {} on {}",
            indexed.index, indexed.habit.name, date
        )));
    }
    Ok(result.with_affected_habits(vec![indexed]))
}
