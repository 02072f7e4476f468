// ========================
// tests/unit/tasks_tests.rs
// ========================
use schedura_common::TaskSummary;
use schedura_lib::{error::AppError, tasks::TaskList};

#[test]
fn test_counters_follow_add_toggle_delete() {
    let mut list = TaskList::with_starter_tasks();

    let id = list.add("Write report", None).unwrap().id.clone();
    assert_eq!(
        list.summary(),
        TaskSummary {
            total: 5,
            completed: 2,
            pending: 3
        }
    );

    list.toggle(&id).unwrap();
    assert_eq!(list.summary().completed, 3);

    list.delete("2").unwrap();
    assert_eq!(
        list.summary(),
        TaskSummary {
            total: 4,
            completed: 2,
            pending: 2
        }
    );
}

#[test]
fn test_deleting_unknown_task() {
    let mut list = TaskList::with_starter_tasks();

    assert!(matches!(list.delete("42"), Err(AppError::TaskNotFound(id)) if id == "42"));
    assert_eq!(list.len(), 4);
}

#[test]
fn test_order_is_preserved() {
    let list = TaskList::with_starter_tasks();
    let ids: Vec<&str> = list.iter().map(|t| t.id.as_str()).collect();

    assert_eq!(ids, ["1", "2", "3", "4"]);
    assert!(TaskList::new().is_empty());
}
