use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{codec, HabitStore};
use std::path::Path;

/// Writes the whole repository to `path` in the data-file format.
///
/// An existing file at `path` is replaced. The store itself is not touched.
pub fn run<S: HabitStore>(store: &S, path: &Path) -> Result<CmdResult> {
    let repo = store.load()?;
    codec::save(path, &repo)?;

    tracing::info!(count = repo.len(), path = %path.display(), "exported habits");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} habit(s) to {}",
        repo.len(),
        path.display()
    )));
    Ok(result)
}
