use crate::commands::{short_name_warnings, CmdResult, IndexedHabit};
use crate::error::Result;
use crate::store::HabitStore;

pub fn run<S: HabitStore>(store: &S) -> Result<CmdResult> {
    let repo = store.load()?;
    let listed = repo
        .habits
        .iter()
        .enumerate()
        .map(|(pos, habit)| IndexedHabit::new(pos, habit.clone()))
        .collect();

    let mut result = CmdResult::default().with_listed_habits(listed);
    for warning in short_name_warnings(&repo) {
        result.add_message(warning);
    }
    Ok(result)
}
