use crate::commands::{mutate, short_name_warnings, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{codec, HabitStore};
use std::path::Path;

/// Appends every habit found in `path` to the store.
///
/// No de-duplication happens: importing the same file twice adds its habits
/// twice. The import file must exist and parse; otherwise nothing changes.
pub fn run<S: HabitStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let incoming = codec::load_existing(path)?;

    let (count, warnings) = mutate(store, |repo| {
        let count = repo.append_all(incoming.habits);
        Ok((count, short_name_warnings(repo)))
    })?;

    tracing::info!(count, path = %path.display(), "imported habits");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} habit(s) from {}",
        count,
        path.display()
    )));
    for warning in warnings {
        result.add_message(warning);
    }
    Ok(result)
}
