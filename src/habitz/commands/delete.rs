use crate::commands::{mutate, CmdMessage, CmdResult, IndexedHabit};
use crate::error::Result;
use crate::reference::HabitRef;
use crate::store::HabitStore;

/// Resolves the habit a delete would remove, without changing anything.
///
/// Callers use this to ask for confirmation before calling [`run`].
pub fn preview<S: HabitStore>(store: &S, reference: &HabitRef) -> Result<IndexedHabit> {
    let repo = store.load()?;
    let pos = repo.resolve(reference)?;
    Ok(IndexedHabit::new(pos, repo.habits[pos].clone()))
}

/// Removes the habit. Habits after it move up by one index.
pub fn run<S: HabitStore>(store: &mut S, reference: &HabitRef) -> Result<CmdResult> {
    let (removed, remaining) = mutate(store, |repo| {
        let pos = repo.resolve(reference)?;
        let habit = repo.remove(reference)?;
        Ok((IndexedHabit::new(pos, habit), repo.len()))
    })?;

    tracing::info!(index = removed.index, name = %removed.habit.name, "deleted habit");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Habit deleted ({}): {}",
        removed.index, removed.habit.name
    )));
    if removed.index <= remaining {
        result.add_message(CmdMessage::info(format!(
            "Habits after {} have moved up by one index.",
            removed.index
        )));
    }
    Ok(result.with_affected_habits(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HabitzError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn preview_changes_nothing() {
        let store = StoreFixture::new().with_habits(2).build();
        let target = preview(&store, &HabitRef::Index(2)).unwrap();
        assert_eq!(target.index, 2);
        assert_eq!(target.habit.name, "Test Habit 2");
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn deletes_and_shifts_indexes() {
        let mut store = StoreFixture::new().with_habits(3).build();
        let result = run(&mut store, &HabitRef::Index(1)).unwrap();
        assert_eq!(result.affected_habits[0].habit.name, "Test Habit 1");
        assert_eq!(result.messages.len(), 2);

        let repo = store.load().unwrap();
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.habits[0].name, "Test Habit 2");
    }

    #[test]
    fn deleting_last_has_no_shift_notice() {
        let mut store = StoreFixture::new().with_habits(2).build();
        let result = run(&mut store, &HabitRef::ShortName("th2".into())).unwrap();
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn missing_habit() {
        let mut store = StoreFixture::new().with_habits(1).build();
        let err = run(&mut store, &HabitRef::ShortName("nope".into())).unwrap_err();
        assert!(matches!(err, HabitzError::NotFound(_)));
        assert_eq!(store.save_count(), 0);
    }
}
