use super::{codec, HabitStore};
use crate::error::Result;
use crate::model::Repository;
use std::path::{Path, PathBuf};

/// Store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HabitStore for FileStore {
    fn load(&self) -> Result<Repository> {
        codec::load(&self.path)
    }

    fn save(&mut self, repo: &Repository) -> Result<()> {
        codec::save(&self.path, repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HabitzError;
    use crate::model::{Habit, TrackedDate};
    use crate::test_utils::TestEnv;

    fn sample() -> Repository {
        let mut first = Habit::new("Test Habit 1").with_short_name("th1");
        first.dates_tracked = vec![
            TrackedDate::parse("2023-01-01").unwrap(),
            TrackedDate::parse("2023-01-02").unwrap(),
        ];
        let mut second = Habit::new("Test Habit 2").with_short_name("th2");
        second.dates_tracked = vec![TrackedDate::parse("2023-01-01").unwrap()];
        Repository::from(vec![first, second])
    }

    #[test]
    fn missing_file_is_empty() {
        let env = TestEnv::new();
        let repo = env.store.load().unwrap();
        assert!(repo.is_empty());
        assert!(!env.data_file.exists());
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let mut env = TestEnv::new();
        let repo = sample();
        env.store.save(&repo).unwrap();
        let loaded = env.store.load().unwrap();
        assert_eq!(loaded, repo);
        assert_eq!(loaded.habits[0].name, "Test Habit 1");
        assert_eq!(loaded.habits[1].name, "Test Habit 2");
    }

    #[test]
    fn save_replaces_previous_content() {
        let mut env = TestEnv::new();
        env.store.save(&sample()).unwrap();
        env.store.save(&Repository::new()).unwrap();
        assert!(env.store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_parent_dirs_and_leaves_no_temp_files() {
        let env = TestEnv::new();
        let nested = env.root.join("a").join("b").join("habits.json");
        let mut store = FileStore::new(&nested);
        store.save(&sample()).unwrap();
        assert!(nested.exists());

        let leftovers: Vec<_> = std::fs::read_dir(nested.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn malformed_file_names_path() {
        let env = TestEnv::new();
        std::fs::write(&env.data_file, "{{{").unwrap();
        let err = env.store.load().unwrap_err();
        assert!(matches!(err, HabitzError::Decode { .. }));
        assert!(err.to_string().contains("habits.json"));
    }

    #[test]
    fn unwritable_path_is_write_error() {
        let env = TestEnv::new();
        // A directory cannot be replaced by a file.
        let dir_as_file = env.root.join("occupied");
        std::fs::create_dir_all(dir_as_file.join("child")).unwrap();
        let mut store = FileStore::new(&dir_as_file);
        let err = store.save(&sample()).unwrap_err();
        assert!(matches!(err, HabitzError::Write { .. }));
    }
}
