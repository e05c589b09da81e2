use crate::commands::{mutate, CmdMessage, CmdResult, IndexedHabit};
use crate::error::Result;
use crate::model::TrackedDate;
use crate::reference::HabitRef;
use crate::repository::MarkOutcome;
use crate::store::HabitStore;

/// Marks each referenced habit as done on `date`.
///
/// All references are resolved before anything is saved: if one of them is
/// unknown, none of the habits are marked.
pub fn run<S: HabitStore>(
    store: &mut S,
    refs: &[HabitRef],
    date: TrackedDate,
) -> Result<CmdResult> {
    let outcomes = mutate(store, |repo| {
        let mut outcomes = Vec::with_capacity(refs.len());
        for reference in refs {
            let pos = repo.resolve(reference)?;
            let outcome = repo.mark_done(reference, date)?;
            outcomes.push((IndexedHabit::new(pos, repo.habits[pos].clone()), outcome));
        }
        Ok(outcomes)
    })?;

    let mut result = CmdResult::default();
    for (indexed, outcome) in outcomes {
        match outcome {
            MarkOutcome::Recorded => {
                tracing::debug!(index = indexed.index, %date, "marked done");
                result.add_message(CmdMessage::success(format!(
                    "Done ({}): {} on {}",
                    indexed.index, indexed.habit.name, date
                )));
            }
            MarkOutcome::AlreadyTracked => result.add_message(CmdMessage::info(format!(
                "Already done ({}): {} on {}",
                indexed.index, indexed.habit.name, date
            ))),
        }
        result.affected_habits.push(indexed);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HabitzError;
    use crate::store::memory::fixtures::StoreFixture;

    fn date(s: &str) -> TrackedDate {
        TrackedDate::parse(s).unwrap()
    }

    #[test]
    fn marks_by_index_and_short_name() {
        let mut store = StoreFixture::new().with_habits(2).build();
        run(
            &mut store,
            &[HabitRef::Index(1), HabitRef::ShortName("th2".into())],
            date("2023-01-01"),
        )
        .unwrap();

        let repo = store.load().unwrap();
        assert_eq!(repo.habits[0].dates_tracked, vec![date("2023-01-01")]);
        assert_eq!(repo.habits[1].dates_tracked, vec![date("2023-01-01")]);
    }

    #[test]
    fn failed_save_records_nothing() {
        let mut store = StoreFixture::new().with_habits(1).build();
        store.set_simulate_write_error(true);

        let err = run(&mut store, &[HabitRef::Index(1)], date("2023-01-01")).unwrap_err();
        assert!(matches!(err, HabitzError::Write { .. }));
        assert_eq!(store.save_count(), 0);
        assert!(store.repository().habits[0].dates_tracked.is_empty());
    }

    #[test]
    fn twice_on_same_day_keeps_one_entry() {
        let mut store = StoreFixture::new().with_habits(1).build();
        run(&mut store, &[HabitRef::Index(1)], date("2023-01-01")).unwrap();
        let second = run(&mut store, &[HabitRef::Index(1)], date("2023-01-01")).unwrap();

        assert!(second.messages[0].content.starts_with("Already done"));
        let repo = store.load().unwrap();
        assert_eq!(repo.habits[0].dates_tracked, vec![date("2023-01-01")]);
    }

    #[test]
    fn unknown_reference_marks_nothing() {
        let mut store = StoreFixture::new().with_habits(1).build();
        let err = run(
            &mut store,
            &[HabitRef::Index(1), HabitRef::Index(5)],
            date("2023-01-01"),
        )
        .unwrap_err();
        assert!(matches!(err, HabitzError::NotFound(_)));
        assert_eq!(store.save_count(), 0);
        assert!(store.load().unwrap().habits[0].dates_tracked.is_empty());
    }
}
