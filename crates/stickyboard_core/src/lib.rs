//! Core domain logic for StickyBoard.
//! This crate is the single source of truth for board and task invariants.

pub mod clipboard;
pub mod clock;
pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod service;
pub mod state;
pub mod store;

pub use clipboard::{Clipboard, ClipboardError, ClipboardPayload, MemoryClipboard, CLIPBOARD_TAG};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{parse_viewport, BoardConfig};
pub use layout::{
    resize_gesture_width, snap_size, tasks_by_area_desc, FixedJitter, JitterSource, RandomJitter,
    TextScale, Viewport,
};
pub use logging::{init_logging, logging_status, LogLevel, LoggingError};
pub use model::board::{Board, BoardId};
pub use model::size::{NoteSize, PaletteColor, NOTE_SIZES, PALETTE};
pub use model::task::{NewTask, Task, TaskId, TaskPatch, TaskShape};
pub use service::board_service::{BoardResult, BoardService, BoardServiceError};
pub use state::{initialize, resolve_active_board, BoardsState};
pub use store::{
    open_store, open_store_in_memory, KeyValueStore, MemoryStore, SqliteStore, StoreError,
    StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
