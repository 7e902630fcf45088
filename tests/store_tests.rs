use chrono::Duration;
use rtimetracker::core::store::EntryStore;
use rtimetracker::db::log::load_log;
use rtimetracker::errors::AppError;
use rtimetracker::models::entry::EntryUpdate;

mod common;
use common::{dt, open_store, setup_test_db};

#[test]
fn test_add_then_get_returns_inputs() {
    let store = open_store("store_add_get");

    let start = dt("2024-01-01 10:00:00");
    let end = start + Duration::minutes(30);
    let id = store
        .add("Reading", start, Some(end), Some("chapter 3"))
        .expect("add");

    let e = store.get(id).expect("get").expect("entry exists");
    assert_eq!(e.id, id);
    assert_eq!(e.name, "Reading");
    assert_eq!(e.start_str(), "2024-01-01 10:00:00");
    assert_eq!(e.end_str().as_deref(), Some("2024-01-01 10:30:00"));
    assert_eq!(e.notes.as_deref(), Some("chapter 3"));
    assert!(!e.is_open());
}

#[test]
fn test_add_without_end_is_open() {
    let store = open_store("store_open_ended");

    let id = store
        .add("Gardening", dt("2024-03-10 08:15:00"), None, None)
        .expect("add");

    let e = store.get(id).unwrap().unwrap();
    assert!(e.is_open());
    assert_eq!(e.end_time, None);
    assert_eq!(e.notes, None);
}

#[test]
fn test_get_missing_id_is_none() {
    let store = open_store("store_get_missing");
    assert!(store.get(999).unwrap().is_none());
}

#[test]
fn test_ids_are_assigned_incrementally() {
    let store = open_store("store_ids");
    let a = store.add("A", dt("2024-01-01 09:00:00"), None, None).unwrap();
    let b = store.add("B", dt("2024-01-01 09:00:00"), None, None).unwrap();
    assert!(b > a);
}

#[test]
fn test_list_all_orders_by_start_desc() {
    let store = open_store("store_list_order");

    store.add("Middle", dt("2024-02-01 12:00:00"), None, None).unwrap();
    store.add("Oldest", dt("2023-12-31 23:59:59"), None, None).unwrap();
    store.add("Newest", dt("2024-05-01 07:30:00"), None, None).unwrap();

    let names: Vec<String> = store
        .list_all()
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
}

#[test]
fn test_list_all_ties_break_on_id_desc() {
    let store = open_store("store_list_ties");

    let first = store.add("First", dt("2024-01-01 10:00:00"), None, None).unwrap();
    let second = store.add("Second", dt("2024-01-01 10:00:00"), None, None).unwrap();

    let ids: Vec<i64> = store.list_all().unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn test_update_with_blank_fields_leaves_entry_unchanged() {
    let store = open_store("store_update_blank");

    let id = store
        .add(
            "Reading",
            dt("2024-01-01 10:00:00"),
            Some(dt("2024-01-01 10:30:00")),
            Some("keep me"),
        )
        .unwrap();
    let before = store.get(id).unwrap().unwrap();

    // Blank strings mean "no change", they never clear a field.
    let blanks = EntryUpdate {
        name: Some(String::new()),
        start_time: None,
        end_time: None,
        notes: Some("   ".to_string()),
    };
    let after = store.update(id, &blanks).unwrap();

    assert_eq!(after, before);
    assert_eq!(store.get(id).unwrap().unwrap(), before);

    store.update(id, &EntryUpdate::default()).unwrap();
    assert_eq!(store.get(id).unwrap().unwrap(), before);
}

#[test]
fn test_update_overwrites_only_provided_fields() {
    let store = open_store("store_update_partial");

    let id = store
        .add("Reading", dt("2024-01-01 10:00:00"), None, Some("old"))
        .unwrap();

    let changes = EntryUpdate {
        name: Some("Writing".to_string()),
        end_time: Some(dt("2024-01-01 11:00:00")),
        ..Default::default()
    };
    let e = store.update(id, &changes).unwrap();

    assert_eq!(e.name, "Writing");
    assert_eq!(e.start_str(), "2024-01-01 10:00:00");
    assert_eq!(e.end_str().as_deref(), Some("2024-01-01 11:00:00"));
    assert_eq!(e.notes.as_deref(), Some("old"));
    assert_eq!(store.get(id).unwrap().unwrap(), e);
}

#[test]
fn test_update_missing_id_fails_and_mutates_nothing() {
    let store = open_store("store_update_missing");

    let id = store.add("Reading", dt("2024-01-01 10:00:00"), None, None).unwrap();
    let before = store.list_all().unwrap();

    let changes = EntryUpdate {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };
    let err = store.update(id + 100, &changes).unwrap_err();

    assert!(matches!(err, AppError::NotFound(missing) if missing == id + 100));
    assert!(err.is_recoverable());
    assert_eq!(store.list_all().unwrap(), before);
}

#[test]
fn test_add_rejects_end_before_start() {
    let store = open_store("store_bad_range");

    let err = store
        .add(
            "Backwards",
            dt("2024-01-01 10:00:00"),
            Some(dt("2024-01-01 09:00:00")),
            None,
        )
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidRange { .. }));
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_update_rejects_start_after_existing_end() {
    let store = open_store("store_update_bad_range");

    let id = store
        .add(
            "Reading",
            dt("2024-01-01 10:00:00"),
            Some(dt("2024-01-01 10:30:00")),
            None,
        )
        .unwrap();
    let before = store.get(id).unwrap().unwrap();

    let changes = EntryUpdate {
        start_time: Some(dt("2024-01-01 12:00:00")),
        ..Default::default()
    };
    assert!(matches!(
        store.update(id, &changes),
        Err(AppError::InvalidRange { .. })
    ));
    assert_eq!(store.get(id).unwrap().unwrap(), before);
}

#[test]
fn test_add_rejects_blank_name() {
    let store = open_store("store_blank_name");
    let err = store.add("  ", dt("2024-01-01 10:00:00"), None, None).unwrap_err();
    assert!(matches!(err, AppError::EmptyName));
}

#[test]
fn test_timestamps_are_truncated_to_seconds() {
    let store = open_store("store_truncate");

    let start = dt("2024-01-01 10:00:00") + Duration::milliseconds(750);
    let id = store.add("Precise", start, None, None).unwrap();

    assert_eq!(store.get(id).unwrap().unwrap().start_time, dt("2024-01-01 10:00:00"));
}

#[test]
fn test_names_are_distinct_in_first_use_order() {
    let store = open_store("store_names");

    store.add("Reading", dt("2024-01-03 10:00:00"), None, None).unwrap();
    store.add("Coding", dt("2024-01-01 10:00:00"), None, None).unwrap();
    store.add("Reading", dt("2024-01-02 10:00:00"), None, None).unwrap();
    store.add("Running", dt("2024-01-04 10:00:00"), None, None).unwrap();

    assert_eq!(store.names().unwrap(), vec!["Reading", "Coding", "Running"]);
}

#[test]
fn test_entries_persist_across_reopen() {
    let db_path = setup_test_db("store_reopen");

    let id = {
        let store = EntryStore::open(&db_path).unwrap();
        store.add("Durable", dt("2024-06-01 08:00:00"), None, None).unwrap()
    };

    let store = EntryStore::open(&db_path).unwrap();
    assert_eq!(store.get(id).unwrap().unwrap().name, "Durable");
}

#[test]
fn test_writes_are_audited_in_log_table() {
    let store = open_store("store_audit");

    let id = store.add("Reading", dt("2024-01-01 10:00:00"), None, None).unwrap();
    store
        .update(
            id,
            &EntryUpdate {
                notes: Some("note".into()),
                ..Default::default()
            },
        )
        .unwrap();

    let rows = load_log(&store.pool().conn).unwrap();
    let ops: Vec<&str> = rows.iter().map(|(op, _, _)| op.as_str()).collect();
    assert_eq!(ops, vec!["add", "edit"]);
    assert!(rows.iter().all(|(_, target, _)| target == &format!("id={}", id)));
}

#[test]
fn test_audit_can_be_disabled() {
    let store = open_store("store_no_audit").with_audit(false);

    store.add("Quiet", dt("2024-01-01 10:00:00"), None, None).unwrap();

    assert!(load_log(&store.pool().conn).unwrap().is_empty());
}
