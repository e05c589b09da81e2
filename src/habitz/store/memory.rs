use super::HabitStore;
use crate::error::{HabitzError, Result};
use crate::model::Repository;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    repo: Repository,
    saves: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(repo: Repository) -> Self {
        Self {
            repo,
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }
}

impl HabitStore for InMemoryStore {
    fn load(&self) -> Result<Repository> {
        Ok(self.repo.clone())
    }

    fn save(&mut self, repo: &Repository) -> Result<()> {
        if self.simulate_write_error {
            return Err(HabitzError::Write {
                path: PathBuf::from("memory://habits"),
                source: std::io::Error::other("simulated write error"),
            });
        }
        self.repo = repo.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Habit, TrackedDate};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_habits(mut self, count: usize) -> Self {
            for i in 0..count {
                let habit =
                    Habit::new(format!("Test Habit {}", i + 1)).with_short_name(format!("th{}", i + 1));
                self.store.repo.habits.push(habit);
            }
            self
        }

        pub fn with_habit(mut self, name: &str, short_name: &str) -> Self {
            self.store
                .repo
                .habits
                .push(Habit::new(name).with_short_name(short_name));
            self
        }

        /// Adds a habit tracked on each of `dates` (`YYYY-MM-DD`).
        pub fn with_tracked_habit(mut self, name: &str, short_name: &str, dates: &[&str]) -> Self {
            let mut habit = Habit::new(name).with_short_name(short_name);
            habit.dates_tracked = dates
                .iter()
                .filter_map(|d| TrackedDate::parse(d).ok())
                .collect();
            self.store.repo.habits.push(habit);
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
