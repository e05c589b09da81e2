use habitz::api::{HabitUpdate, HabitzApi};
use habitz::error::HabitzError;
use habitz::model::{Habit, Repository, TrackedDate};
use habitz::store::fs::FileStore;
use habitz::store::{codec, HabitStore};
use tempfile::TempDir;

fn date(s: &str) -> TrackedDate {
    TrackedDate::parse(s).unwrap()
}

fn habit(name: &str, short: &str, dates: &[&str]) -> Habit {
    let mut habit = Habit::new(name).with_short_name(short);
    habit.dates_tracked = dates.iter().map(|d| date(d)).collect();
    habit
}

fn seeded(habits: Vec<Habit>) -> (TempDir, HabitzApi<FileStore>) {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("habits.json"));
    store.save(&Repository::from(habits)).unwrap();
    let api = HabitzApi::new(store).with_today(date("2023-06-15"));
    (dir, api)
}

#[test]
fn test_load_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("habits.json"));
    let repo = Repository::from(vec![
        habit("Test Habit 1", "th1", &["2023-01-01", "2023-01-02"]),
        habit("Test Habit 2", "th2", &["2023-01-01"]),
    ]);

    store.save(&repo).unwrap();
    assert_eq!(store.load().unwrap(), repo);
}

#[test]
fn test_missing_file_is_empty_and_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested").join("habits.json"));
    assert!(store.load().unwrap().is_empty());
    assert!(!store.path().exists());
}

#[test]
fn test_add_habit() {
    let (_dir, mut api) = seeded(vec![]);
    api.add_habit("Test Habit", None).unwrap();

    let repo = api.store().load().unwrap();
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.habits[0].name, "Test Habit");
}

#[test]
fn test_mark_habit_done_today() {
    let (_dir, mut api) = seeded(vec![habit("Test Habit", "th", &[])]);
    api.mark_done(&["1"], None).unwrap();

    let repo = api.store().load().unwrap();
    assert_eq!(repo.habits[0].dates_tracked, vec![date("2023-06-15")]);
}

#[test]
fn test_remove_habit() {
    let (_dir, mut api) = seeded(vec![
        habit("Test Habit 1", "th1", &[]),
        habit("Test Habit 2", "th2", &[]),
    ]);
    api.delete_habit("1").unwrap();

    let repo = api.store().load().unwrap();
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.habits[0].name, "Test Habit 2");
}

#[test]
fn test_edit_habit() {
    let (_dir, mut api) = seeded(vec![habit("Test Habit", "th", &[])]);
    let update = HabitUpdate {
        name: Some("Edited Test Habit".to_string()),
        short_name: None,
    };
    api.edit_habit("1", update).unwrap();
    assert_eq!(api.store().load().unwrap().habits[0].name, "Edited Test Habit");
}

#[test]
fn test_import_export() {
    let (dir, mut api) = seeded(vec![
        habit("Test Habit 1", "th1", &["2023-01-01"]),
        habit("Test Habit 2", "th2", &["2023-01-02"]),
    ]);
    let export = dir.path().join("export.json");
    api.export_habits(&export).unwrap();

    std::fs::remove_file(api.store().path()).unwrap();
    assert!(api.store().load().unwrap().is_empty());

    api.import_habits(&export).unwrap();
    assert_eq!(api.store().load().unwrap().len(), 2);

    api.import_habits(&export).unwrap();
    let repo = api.store().load().unwrap();
    assert_eq!(repo.len(), 4);
    // Duplicated short names resolve to the first habit.
    assert_eq!(repo.resolve_str("th1").unwrap(), 0);
}

#[test]
fn test_unknown_fields_and_reminder_order_survive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("habits.json");
    std::fs::write(
        &path,
        r#"{"habits":[{"name":"Walk","datesTracked":null,"reminderInfo":{"z":1,"a":{"at":"08:00"}}}]}"#,
    )
    .unwrap();

    let mut store = FileStore::new(&path);
    let repo = store.load().unwrap();
    assert_eq!(repo.habits[0].short_name, "");
    assert!(repo.habits[0].dates_tracked.is_empty());

    store.save(&repo).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let z = text.find("\"z\"").unwrap();
    let a = text.find("\"a\"").unwrap();
    assert!(z < a);
}

#[test]
fn test_schema_error_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("habits.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = codec::load(&path).unwrap_err();
    assert!(matches!(err, HabitzError::Schema { .. }));
    assert!(err.to_string().contains("habits.json"));
}
