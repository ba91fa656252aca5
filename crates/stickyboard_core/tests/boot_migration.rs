use stickyboard_core::state::{boot, LoadStrategy};
use stickyboard_core::store::{BOARDS_KEY, LEGACY_TASKS_KEY};
use stickyboard_core::{initialize, resolve_active_board, BoardsState, KeyValueStore, MemoryStore};

const LEGACY_TASKS: &str = r##"[
    {"id":"t1","text":"buy milk","width":100,"height":100,"color":"#C7E7E6","completed":false,"createdAt":1,"x":10,"y":20},
    {"id":"t2","text":"call mom","completed":true}
]"##;

#[test]
fn empty_store_yields_one_empty_default_board() {
    let store = MemoryStore::new();
    let outcome = boot(&store);

    assert_eq!(outcome.strategy, None);
    assert!(outcome.failure.is_none());
    assert_eq!(outcome.state.len(), 1);
    let board = &outcome.state.boards()[0];
    assert_eq!(board.name, "My Board");
    assert!(board.tasks.is_empty());
}

#[test]
fn legacy_tasks_migrate_into_personal_board() {
    let store = MemoryStore::with_entries([(LEGACY_TASKS_KEY, LEGACY_TASKS)]);
    let outcome = boot(&store);

    assert_eq!(outcome.strategy, Some(LoadStrategy::LegacyTasks));
    assert_eq!(outcome.state.len(), 1);
    let board = &outcome.state.boards()[0];
    assert_eq!(board.id, "personal-board");
    assert_eq!(board.name, "Personal");
    assert_eq!(board.task_ids(), vec!["t1".to_string(), "t2".to_string()]);
    assert!(board.tasks[1].completed);
    assert!(board.tasks[1].x.is_none());
}

#[test]
fn stored_boards_take_precedence_over_legacy_tasks() {
    let boards = r#"[{"id":"b1","name":"Work","tasks":[]},{"id":"b2","name":"Home","tasks":[]}]"#;
    let store = MemoryStore::with_entries([(BOARDS_KEY, boards), (LEGACY_TASKS_KEY, LEGACY_TASKS)]);

    let state = initialize(&store);
    let names: Vec<&str> = state.boards().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Work", "Home"]);
}

#[test]
fn present_empty_boards_array_never_consults_legacy_key() {
    let store = MemoryStore::with_entries([(BOARDS_KEY, "[]"), (LEGACY_TASKS_KEY, LEGACY_TASKS)]);
    let outcome = boot(&store);

    assert_eq!(outcome.strategy, None);
    assert!(outcome.failure.is_some());
    assert_eq!(outcome.state.len(), 1);
    assert_eq!(outcome.state.boards()[0].name, "My Board");
    assert!(outcome.state.boards()[0].tasks.is_empty());
}

#[test]
fn corrupt_json_under_either_key_yields_one_default_board() {
    let cases = [
        MemoryStore::with_entries([(BOARDS_KEY, "{not json")]),
        MemoryStore::with_entries([(BOARDS_KEY, r#"{"id":"b1"}"#)]),
        MemoryStore::with_entries([(LEGACY_TASKS_KEY, "[{")]),
        MemoryStore::with_entries([(LEGACY_TASKS_KEY, "42")]),
        MemoryStore::with_entries([(BOARDS_KEY, "null"), (LEGACY_TASKS_KEY, LEGACY_TASKS)]),
    ];

    for store in cases {
        let state = initialize(&store);
        assert_eq!(state.len(), 1);
        assert_eq!(state.boards()[0].name, "My Board");
        assert!(state.boards()[0].tasks.is_empty());
    }
}

#[test]
fn empty_boards_string_counts_as_absent_and_migrates_legacy() {
    let store = MemoryStore::with_entries([(BOARDS_KEY, ""), (LEGACY_TASKS_KEY, LEGACY_TASKS)]);
    let outcome = boot(&store);

    assert_eq!(outcome.strategy, Some(LoadStrategy::LegacyTasks));
    assert_eq!(outcome.state.boards()[0].id, "personal-board");
    assert_eq!(outcome.state.boards()[0].tasks.len(), 2);
}

#[test]
fn repeated_board_ids_fall_back_to_default_board() {
    let boards = r#"[{"id":"a","name":"A","tasks":[]},{"id":"a","name":"B","tasks":[]}]"#;
    let outcome = boot(&MemoryStore::with_entries([(BOARDS_KEY, boards)]));

    assert_eq!(outcome.strategy, None);
    assert!(outcome.failure.unwrap().contains("duplicate board id"));
    assert_eq!(outcome.state.len(), 1);
    assert_eq!(outcome.state.boards()[0].name, "My Board");
}

#[test]
fn legacy_task_without_id_gets_a_fresh_one() {
    let legacy = r#"[{"id":"t1","text":"kept"},{"text":"no id"}]"#;
    let state = initialize(&MemoryStore::with_entries([(LEGACY_TASKS_KEY, legacy)]));

    let tasks = &state.boards()[0].tasks;
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, "t1");
    assert_eq!(tasks[1].text, "no id");
    assert!(!tasks[1].id.is_empty());
    assert_ne!(tasks[1].id, tasks[0].id);
}

#[test]
fn boot_never_writes_the_store() {
    let store = MemoryStore::with_entries([(LEGACY_TASKS_KEY, LEGACY_TASKS)]);
    let _ = initialize(&store);

    assert!(!store.contains(BOARDS_KEY));
    assert_eq!(
        store.get(LEGACY_TASKS_KEY).unwrap().as_deref(),
        Some(LEGACY_TASKS)
    );
}

#[test]
fn resolve_active_board_prefers_existing_last_active() {
    let state: BoardsState = serde_json::from_str(
        r#"[{"id":"b1","name":"A","tasks":[]},{"id":"b2","name":"B","tasks":[]}]"#,
    )
    .unwrap();

    assert_eq!(
        resolve_active_board(&state, Some("b2")).as_deref(),
        Some("b2")
    );
    assert_eq!(
        resolve_active_board(&state, Some("gone")).as_deref(),
        Some("b1")
    );
    assert_eq!(resolve_active_board(&state, None).as_deref(), Some("b1"));
    assert_eq!(resolve_active_board(&BoardsState::default(), Some("b1")), None);
}
