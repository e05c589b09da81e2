//! JSON document codec: converts between the on-disk store file and a
//! [`Repository`].
//!
//! Decoding happens in two stages so that the two failure modes stay distinct:
//! text that is not JSON at all is a [`HabitzError::Decode`], while valid JSON
//! of the wrong shape is a [`HabitzError::Schema`].

use crate::error::{HabitzError, Result};
use crate::model::Repository;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use uuid::Uuid;

/// Loads a repository, treating a missing file as empty.
pub fn load(path: &Path) -> Result<Repository> {
    match fs::read_to_string(path) {
        Ok(text) => decode(path, &text),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "store file missing, starting empty");
            Ok(Repository::new())
        }
        Err(source) => Err(HabitzError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads a repository that must already exist (e.g. an import source).
pub fn load_existing(path: &Path) -> Result<Repository> {
    let text = fs::read_to_string(path).map_err(|source| HabitzError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode(path, &text)
}

/// Decodes document text. `path` is only used for error messages.
pub fn decode(path: &Path, text: &str) -> Result<Repository> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|source| HabitzError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    if !value.is_object() {
        return Err(HabitzError::Schema {
            path: path.to_path_buf(),
            message: "expected a JSON object with a \"habits\" array".to_string(),
        });
    }

    let repo: Repository = serde_json::from_value(value).map_err(|e| HabitzError::Schema {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), habits = repo.len(), "loaded store");
    Ok(repo)
}

/// Encodes a repository as pretty-printed JSON.
pub fn encode(repo: &Repository) -> serde_json::Result<String> {
    serde_json::to_string_pretty(repo)
}

/// Replaces the file at `path` with the encoded repository.
///
/// The document is written to a temporary sibling first and then renamed over
/// the target, so a crash mid-write never leaves a truncated store behind.
pub fn save(path: &Path, repo: &Repository) -> Result<()> {
    let write_err = |source| HabitzError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(write_err)?;
    }

    let text = encode(repo).map_err(|e| write_err(std::io::Error::other(e)))?;
    let tmp_path = dir.join(format!(".habitz-{}.tmp", Uuid::new_v4()));
    fs::write(&tmp_path, text).map_err(write_err)?;
    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_err(source));
    }

    tracing::debug!(path = %path.display(), habits = repo.len(), "saved store");
    Ok(())
}
