//! End-to-end tests for the habit-tracker binary

use assert_cmd::cargo;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn habit_tracker(store: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("habit-tracker"));
    cmd.env_remove("HABIT_TRACKER_FILE")
        .env_remove("RUST_LOG")
        .arg("--file")
        .arg(store);
    cmd
}

fn store_in(dir: &TempDir) -> PathBuf {
    dir.path().join("habits.toml")
}

#[test]
fn test_list_seeds_fresh_store() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    habit_tracker(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0. Exercise (daily) | streak: "))
        .stdout(predicate::str::contains("4. Clean House (weekly) | streak: "));

    assert!(store.exists());
}

#[test]
fn test_add_and_filter_by_periodicity() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    habit_tracker(&store)
        .args(["add", "  Journal  ", "Weekly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Journal' (weekly)"));

    habit_tracker(&store)
        .args(["list", "--periodicity", "weekly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Call Family\nClean House\nJournal"));

    habit_tracker(&store)
        .args(["list", "--periodicity", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits found"));
}

#[test]
fn test_add_rejects_invalid_periodicity() {
    let dir = TempDir::new().unwrap();

    habit_tracker(&store_in(&dir))
        .args(["add", "Yoga", "monthly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid periodicity 'monthly'"));
}

#[test]
fn test_complete_new_habit_with_date() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    habit_tracker(&store)
        .args(["add", "Stretch", "daily"])
        .assert()
        .success();

    habit_tracker(&store)
        .args(["complete", "5", "--date", "2020-02-29"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed. Current streak: 0"));

    let content = std::fs::read_to_string(&store).unwrap();
    assert!(content.contains("2020-02-29T00:00:00"));

    habit_tracker(&store)
        .args(["complete", "5", "--date", "29/02/2020"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date '29/02/2020'"));
}

#[test]
fn test_delete_and_index_errors() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    habit_tracker(&store)
        .args(["delete", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 'Exercise'"));

    habit_tracker(&store)
        .args(["streak", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    habit_tracker(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0. Read (daily)"));
}

#[test]
fn test_interactive_session_over_stdin() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    habit_tracker(&store)
        .write_stdin("1\nYoga\nmonthly\n1\nYoga\ndaily\n5\n1\ndaily\n3\n42\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid periodicity 'monthly'"))
        .stdout(predicate::str::contains("Added 'Yoga' (daily)"))
        .stdout(predicate::str::contains("Exercise\nRead\nMeditate\nYoga"))
        .stdout(predicate::str::contains("Error: Habit index 42 is out of range"));
}

#[test]
fn test_interactive_session_ends_at_end_of_input() {
    let dir = TempDir::new().unwrap();

    habit_tracker(&store_in(&dir))
        .arg("interactive")
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 Add | 2 Complete"));
}
