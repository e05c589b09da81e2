use crate::commands::{mutate, CmdMessage, CmdResult, IndexedHabit};
use crate::error::Result;
use crate::store::HabitStore;

/// Creates a habit at the end of the list.
///
/// With `auto_short_name`, a habit added without an explicit short name gets
/// one derived from its initials.
pub fn run<S: HabitStore>(
    store: &mut S,
    name: &str,
    short_name: Option<&str>,
    auto_short_name: bool,
) -> Result<CmdResult> {
    let added = mutate(store, |repo| {
        let derived;
        let short_name = match short_name {
            Some(s) => Some(s),
            None if auto_short_name => {
                derived = repo.next_short_name(name);
                Some(derived.as_str())
            }
            None => None,
        };
        let habit = repo.add(name, short_name)?.clone();
        Ok(IndexedHabit::new(repo.len() - 1, habit))
    })?;

    tracing::info!(index = added.index, name = %added.habit.name, "added habit");

    let mut result = CmdResult::default();
    let label = if added.habit.has_short_name() {
        format!("{} [{}]", added.habit.name, added.habit.short_name)
    } else {
        added.habit.name.clone()
    };
    result.add_message(CmdMessage::success(format!(
        "Habit added ({}): {}",
        added.index, label
    )));
    Ok(result.with_affected_habits(vec![added]))
}
