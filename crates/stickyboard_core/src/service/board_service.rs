//! Board use-case service.
//!
//! # Responsibility
//! - Hold the board collection, the active-board pointer and the store.
//! - Validate user input (blank text, blank names) before mutating state.
//! - Persist `boards` and `activeBoardId` together after each change.
//!
//! # Invariants
//! - The active pointer always names an existing board.
//! - Deleting the active board moves the pointer before the board is removed.
//! - A rejected or not-found mutation leaves both state and store untouched.
//! - Log lines carry ids and counts only, never task text or board names.

use crate::clipboard::{decode, encode, Clipboard, ClipboardError};
use crate::clock::{Clock, SystemClock};
use crate::config::BoardConfig;
use crate::layout::{tasks_by_area_desc, JitterSource, Placement, RandomJitter};
use crate::model::board::{Board, BoardId};
use crate::model::size::NoteSize;
use crate::model::task::{NewTask, Task, TaskId, TaskPatch};
use crate::state::{boot, resolve_active_board, BoardsState};
use crate::store::{KeyValueStore, StoreError, ACTIVE_BOARD_KEY, BOARDS_KEY};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BoardResult<T> = Result<T, BoardServiceError>;

/// Service error for board use-cases.
#[derive(Debug)]
pub enum BoardServiceError {
    /// Task text is empty after trimming.
    EmptyTaskText,
    /// Board name is empty after trimming.
    EmptyBoardName,
    /// The board collection is empty.
    NoActiveBoard,
    /// Snapshot write failed. The in-memory change is kept.
    Store(StoreError),
    /// Snapshot could not be serialized.
    Serialize(serde_json::Error),
    /// Clipboard write failed during copy.
    Clipboard(ClipboardError),
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTaskText => write!(f, "task text cannot be empty"),
            Self::EmptyBoardName => write!(f, "board name cannot be empty"),
            Self::NoActiveBoard => write!(f, "no active board"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize boards: {err}"),
            Self::Clipboard(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Clipboard(err) => Some(err),
            Self::EmptyTaskText | Self::EmptyBoardName | Self::NoActiveBoard => None,
        }
    }
}

impl From<StoreError> for BoardServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<ClipboardError> for BoardServiceError {
    fn from(value: ClipboardError) -> Self {
        Self::Clipboard(value)
    }
}

/// Stateful board session over one key-value store.
pub struct BoardService<S: KeyValueStore> {
    store: S,
    state: BoardsState,
    active_id: BoardId,
    config: BoardConfig,
    jitter: Box<dyn JitterSource>,
    clock: Box<dyn Clock>,
}

impl<S: KeyValueStore> BoardService<S> {
    /// Loads state from `store`, resolves the active board and writes the
    /// resolved snapshot back.
    ///
    /// Corrupt or missing data never fails here; only the initial write can.
    pub fn open(store: S, config: BoardConfig) -> BoardResult<Self> {
        let outcome = boot(&store);
        let last_active = match store.get(ACTIVE_BOARD_KEY) {
            Ok(value) => value,
            Err(err) => {
                warn!("event=active_board_read module=service status=error error={err}");
                None
            }
        };
        let active_id =
            resolve_active_board(&outcome.state, last_active.as_deref()).unwrap_or_default();

        let mut service = Self {
            store,
            state: outcome.state,
            active_id,
            config,
            jitter: Box::new(RandomJitter),
            clock: Box::new(SystemClock),
        };
        service.persist()?;
        info!(
            "event=service_open module=service status=ok boards={} active_restored={}",
            service.state.len(),
            last_active.as_deref() == Some(service.active_id.as_str())
        );
        Ok(service)
    }

    /// Replaces the placement jitter source.
    pub fn with_jitter(mut self, jitter: impl JitterSource + 'static) -> Self {
        self.jitter = Box::new(jitter);
        self
    }

    /// Replaces the timestamp clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn state(&self) -> &BoardsState {
        &self.state
    }

    pub fn boards(&self) -> &[Board] {
        self.state.boards()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn active_board_id(&self) -> &str {
        &self.active_id
    }

    /// The active board, falling back to the first board.
    pub fn active_board(&self) -> Option<&Board> {
        self.state
            .board(&self.active_id)
            .or_else(|| self.state.boards().first())
    }

    /// Active board tasks in stored order.
    pub fn tasks(&self) -> &[Task] {
        self.active_board()
            .map(|board| board.tasks.as_slice())
            .unwrap_or_default()
    }

    /// Active board tasks largest first, the order they are drawn in.
    pub fn sorted_tasks(&self) -> Vec<&Task> {
        tasks_by_area_desc(self.tasks())
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.active_board()?.task(task_id)
    }

    /// Makes `board_id` active. Unknown ids are ignored.
    pub fn switch_board(&mut self, board_id: &str) -> BoardResult<bool> {
        let changed = self.state.contains(board_id) && self.active_id != board_id;
        if changed {
            self.active_id = board_id.to_string();
        }
        self.commit("board_switch", changed)
    }

    /// Appends a placeholder board and makes it active.
    pub fn add_board(&mut self) -> BoardResult<BoardId> {
        let board_id = self.state.add_board();
        self.active_id = board_id.clone();
        self.commit("board_add", true)?;
        Ok(board_id)
    }

    /// Renames a board to the trimmed `name`.
    pub fn rename_board(&mut self, board_id: &str, name: &str) -> BoardResult<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BoardServiceError::EmptyBoardName);
        }
        let changed = self.state.rename_board(board_id, name);
        self.commit("board_rename", changed)
    }

    /// Deletes a board. Refuses to delete the last one.
    pub fn delete_board(&mut self, board_id: &str) -> BoardResult<bool> {
        if self.state.len() <= 1 || !self.state.contains(board_id) {
            return self.commit("board_delete", false);
        }

        if self.active_id == board_id {
            if let Some(next) = self
                .state
                .boards()
                .iter()
                .find(|board| board.id != board_id)
            {
                self.active_id = next.id.clone();
            }
        }
        let changed = self.state.delete_board(board_id);
        if !self.state.contains(&self.active_id) {
            if let Some(first) = self.state.first_id() {
                self.active_id = first.clone();
            }
        }
        self.commit("board_delete", changed)
    }

    /// Replaces the active board's task list through `updater`.
    pub fn set_tasks<F>(&mut self, updater: F) -> BoardResult<bool>
    where
        F: FnOnce(Vec<Task>) -> Vec<Task>,
    {
        let changed = self.state.update_tasks(&self.active_id, updater);
        self.commit("tasks_set", changed)
    }

    /// Adds a note sized and colored from a size bucket.
    pub fn add_task(&mut self, text: &str, size: &NoteSize) -> BoardResult<TaskId> {
        self.add_task_with(NewTask::from_size(text, size))
    }

    /// Adds a note from an explicit request. Blank text is rejected.
    pub fn add_task_with(&mut self, request: NewTask) -> BoardResult<TaskId> {
        if request.text.trim().is_empty() {
            return Err(BoardServiceError::EmptyTaskText);
        }
        let spread = self.config.add_jitter_px;
        match self.insert_task(request, spread) {
            Some(task_id) => {
                self.commit("task_add", true)?;
                Ok(task_id)
            }
            None => Err(BoardServiceError::NoActiveBoard),
        }
    }

    /// Replaces task text. Blank text is rejected and the old text kept.
    pub fn edit_task_text(&mut self, task_id: &str, text: &str) -> BoardResult<bool> {
        if text.trim().is_empty() {
            return Err(BoardServiceError::EmptyTaskText);
        }
        self.update_task(
            task_id,
            &TaskPatch {
                text: Some(text.to_string()),
                ..TaskPatch::default()
            },
        )
    }

    pub fn toggle_completed(&mut self, task_id: &str) -> BoardResult<bool> {
        let Some(completed) = self.task(task_id).map(|task| task.completed) else {
            return self.commit("task_update", false);
        };
        self.update_task(
            task_id,
            &TaskPatch {
                completed: Some(!completed),
                ..TaskPatch::default()
            },
        )
    }

    /// Sets the background color only; the text color is left as is.
    pub fn set_color(&mut self, task_id: &str, color: &str) -> BoardResult<bool> {
        self.update_task(
            task_id,
            &TaskPatch {
                color: Some(color.to_string()),
                ..TaskPatch::default()
            },
        )
    }

    pub fn update_task(&mut self, task_id: &str, patch: &TaskPatch) -> BoardResult<bool> {
        let changed = self.state.update_task(&self.active_id, task_id, patch);
        self.commit("task_update", changed)
    }

    pub fn delete_task(&mut self, task_id: &str) -> BoardResult<bool> {
        let changed = self.state.delete_task(&self.active_id, task_id);
        self.commit("task_delete", changed)
    }

    /// Applies a finished drag gesture.
    pub fn move_task(&mut self, task_id: &str, dx: f64, dy: f64) -> BoardResult<bool> {
        let changed = self.state.apply_drag_delta(&self.active_id, task_id, dx, dy);
        self.commit("task_move", changed)
    }

    /// Snaps a task to the size bucket nearest `raw_width`.
    pub fn resize_task(&mut self, task_id: &str, raw_width: f64) -> BoardResult<bool> {
        let changed = self.state.apply_resize(&self.active_id, task_id, raw_width);
        self.commit("task_resize", changed)
    }

    /// Copies one active-board task to `clipboard`.
    ///
    /// Returns `false` when the task does not exist.
    pub fn copy_task(&self, clipboard: &mut impl Clipboard, task_id: &str) -> BoardResult<bool> {
        let Some(task) = self.task(task_id) else {
            debug!("event=task_copy module=service status=noop reason=not_found");
            return Ok(false);
        };
        let encoded = encode(task)?;
        clipboard.write_text(&encoded)?;
        info!("event=task_copy module=service status=ok task_id={task_id}");
        Ok(true)
    }

    /// Pastes a task from `clipboard` onto the active board.
    ///
    /// Unreadable or foreign clipboard content is ignored.
    pub fn paste_task(&mut self, clipboard: &mut impl Clipboard) -> BoardResult<Option<TaskId>> {
        match clipboard.read_text() {
            Ok(raw) => self.paste_text(&raw),
            Err(err) => {
                debug!("event=task_paste module=service status=ignored error={err}");
                Ok(None)
            }
        }
    }

    /// Pastes a task from raw clipboard text.
    pub fn paste_text(&mut self, raw: &str) -> BoardResult<Option<TaskId>> {
        let shape = match decode(raw) {
            Ok(shape) => shape,
            Err(err) => {
                debug!("event=task_paste module=service status=ignored error={err}");
                return Ok(None);
            }
        };
        let spread = self.config.paste_jitter_px;
        let task_id = self.insert_task(NewTask::from(shape), spread);
        let changed = task_id.is_some();
        self.commit("task_paste", changed)?;
        Ok(task_id)
    }

    fn insert_task(&mut self, request: NewTask, spread: f64) -> Option<TaskId> {
        let mut placement = Placement {
            viewport: self.config.viewport,
            spread,
            jitter: self.jitter.as_mut(),
            now_ms: self.clock.now_epoch_ms(),
        };
        self.state
            .add_task(&self.active_id, request, &mut placement)
    }

    fn commit(&mut self, event: &'static str, changed: bool) -> BoardResult<bool> {
        if !changed {
            debug!("event={event} module=service status=noop");
            return Ok(false);
        }
        self.persist()?;
        debug!(
            "event={event} module=service status=ok active_board={} tasks={}",
            self.active_id,
            self.tasks().len()
        );
        Ok(true)
    }

    fn persist(&mut self) -> BoardResult<()> {
        let boards_json =
            serde_json::to_string(&self.state).map_err(BoardServiceError::Serialize)?;
        if let Err(err) = self.store.set_many(&[
            (BOARDS_KEY, boards_json.as_str()),
            (ACTIVE_BOARD_KEY, self.active_id.as_str()),
        ]) {
            warn!("event=state_persist module=service status=error error={err}");
            return Err(err.into());
        }
        Ok(())
    }
}
