//! Integration tests for task store persistence
//!
//! These exercise the store through its public API only, reopening the file
//! between steps the way separate CLI invocations would.

use std::fs;

use todo_board::task::{Priority, TaskStore};

fn ids(store: &TaskStore) -> Vec<u64> {
    store.list_tasks().iter().map(|t| t.id).collect()
}

#[test]
fn test_reopen_yields_identical_listing() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("tasks.csv");

    let mut store = TaskStore::open(&path).unwrap();
    store.add_task("Pay rent", "before the 5th", "High").unwrap();
    store.add_task("Call mom", "", "medium").unwrap();
    store.add_task("Sort photos", "2019 only", "whenever").unwrap();
    store.add_task("Book dentist", "", "HIGH").unwrap();
    assert!(store.delete_task(2).unwrap());
    store.add_task("Fix bike, rear wheel", "spokes \"and\" tube", "Medium").unwrap();

    let before: Vec<_> = store.list_tasks().into_iter().cloned().collect();
    drop(store);

    let reopened = TaskStore::open(&path).unwrap();
    let after: Vec<_> = reopened.list_tasks().into_iter().cloned().collect();
    assert_eq!(before, after);
    assert_eq!(ids(&reopened), vec![1, 4, 5, 3]);
    assert_eq!(reopened.get(3).map(|t| t.priority), Some(Priority::Low));
}

#[test]
fn test_ids_never_reused_within_one_store() {
    let temp = tempfile::TempDir::new().unwrap();
    let mut store = TaskStore::open(temp.path().join("tasks.csv")).unwrap();

    let mut seen = Vec::new();
    for round in 0..5 {
        let id = store.add_task(&format!("task {}", round), "", "Low").unwrap();
        if let Some(last) = seen.last() {
            assert!(id > *last);
        }
        seen.push(id);
        assert!(store.delete_task(id).unwrap());
    }

    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    assert!(store.is_empty());
}

#[test]
fn test_reopen_after_deleting_highest_id_restarts_from_max() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("tasks.csv");

    let mut store = TaskStore::open(&path).unwrap();
    store.add_task("a", "", "Low").unwrap();
    store.add_task("b", "", "Low").unwrap();
    store.delete_task(2).unwrap();
    drop(store);

    let store = TaskStore::open(&path).unwrap();
    assert_eq!(store.next_id(), 2);
}

#[test]
fn test_malformed_file_keeps_good_rows() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("tasks.csv");
    fs::write(
        &path,
        "id,title,description,priority\n\
         3,Water plants,balcony,Medium\n\
         7,Missing priority,oops\n\
         abc,Bad id,,High\n\
         3,Duplicate id,,High\n\
         5,Renew passport,,بالا\n",
    )
    .unwrap();

    let store = TaskStore::open(&path).unwrap();
    assert_eq!(ids(&store), vec![5, 3]);
    assert_eq!(store.next_id(), 6);
    assert_eq!(store.get(5).map(|t| t.priority), Some(Priority::High));
}

#[test]
fn test_delete_missing_id_does_not_touch_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("tasks.csv");

    let mut store = TaskStore::open(&path).unwrap();
    store.add_task("Only task", "", "Medium").unwrap();
    let before = fs::read(&path).unwrap();

    assert!(!store.delete_task(42).unwrap());
    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_empty_store_counts_are_zero() {
    let temp = tempfile::TempDir::new().unwrap();
    let store = TaskStore::open(temp.path().join("tasks.csv")).unwrap();
    let counts = store.priority_counts();
    assert_eq!(
        (counts.high, counts.medium, counts.low, counts.total()),
        (0, 0, 0, 0)
    );
}
