use rusqlite::Connection;
use stickyboard_core::store::migrations::latest_version;
use stickyboard_core::{open_store, open_store_in_memory, KeyValueStore, StoreError};

#[test]
fn in_memory_store_applies_migrations_and_starts_empty() {
    let store = open_store_in_memory().unwrap();
    let version: u32 = store
        .connection()
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();

    assert_eq!(version, latest_version());
    assert!(store.get("boards").unwrap().is_none());
}

#[test]
fn set_overwrites_existing_value() {
    let mut store = open_store_in_memory().unwrap();
    store.set("activeBoardId", "b1").unwrap();
    store.set("activeBoardId", "b2").unwrap();

    assert_eq!(store.get("activeBoardId").unwrap().as_deref(), Some("b2"));
    let rows: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn values_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stickyboard.sqlite3");

    {
        let mut store = open_store(&path).unwrap();
        store
            .set_many(&[("boards", "[]"), ("activeBoardId", "b1")])
            .unwrap();
    }

    let store = open_store(&path).unwrap();
    assert_eq!(store.get("boards").unwrap().as_deref(), Some("[]"));
    assert_eq!(store.get("activeBoardId").unwrap().as_deref(), Some("b1"));
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_store(&path) {
        Err(StoreError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        }) => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("future schema should be rejected"),
    }
}
