use crate::commands::{mutate, CmdMessage, CmdResult, IndexedHabit};
use crate::error::Result;
use crate::reference::HabitRef;
use crate::repository::HabitUpdate;
use crate::store::HabitStore;

pub fn run<S: HabitStore>(
    store: &mut S,
    reference: &HabitRef,
    update: HabitUpdate,
) -> Result<CmdResult> {
    let indexed = mutate(store, |repo| {
        let pos = repo.resolve(reference)?;
        let habit = repo.edit(reference, update)?.clone();
        Ok(IndexedHabit::new(pos, habit))
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Habit updated ({}): {}",
        indexed.index, indexed.habit.name
    )));
    Ok(result.with_affected_habits(vec![indexed]))
}
