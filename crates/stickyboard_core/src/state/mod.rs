//! In-memory board collection and its mutation rules.
//!
//! # Responsibility
//! - Own every board and task mutation (add/rename/delete board, task CRUD,
//!   drag and resize).
//! - Resolve state at startup, including the one-way legacy migration.
//!
//! # Invariants
//! - Task mutations only touch the board named by the caller; all other
//!   boards are left as they were.
//! - Unknown board or task ids are silent no-ops reported as `false`/`None`.
//! - The last remaining board can never be deleted.

mod boot;

pub use boot::{
    boot, initialize, resolve_active_board, BootOutcome, LoadStrategy, StrategyResult, LOAD_ORDER,
};

use crate::layout::{snap_size, Placement};
use crate::model::board::{Board, BoardId, NEW_BOARD_NAME};
use crate::model::task::{NewTask, Task, TaskId, TaskPatch};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered collection of boards.
///
/// Serializes transparently as the JSON array stored under `boards`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardsState {
    boards: Vec<Board>,
}

impl BoardsState {
    pub fn new(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    /// State holding one empty board with the given name.
    pub fn single(name: impl Into<String>) -> Self {
        Self::new(vec![Board::new(name)])
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn first_id(&self) -> Option<&BoardId> {
        self.boards.first().map(|board| &board.id)
    }

    pub fn contains(&self, board_id: &str) -> bool {
        self.board(board_id).is_some()
    }

    pub fn board(&self, board_id: &str) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == board_id)
    }

    fn board_mut(&mut self, board_id: &str) -> Option<&mut Board> {
        self.boards.iter_mut().find(|board| board.id == board_id)
    }

    pub fn task(&self, board_id: &str, task_id: &str) -> Option<&Task> {
        self.board(board_id)?.task(task_id)
    }

    /// Appends an empty placeholder-named board and returns its id.
    pub fn add_board(&mut self) -> BoardId {
        let board = Board::new(NEW_BOARD_NAME);
        let id = board.id.clone();
        self.boards.push(board);
        id
    }

    /// Replaces a board name. Accepts any string, including empty.
    pub fn rename_board(&mut self, board_id: &str, name: impl Into<String>) -> bool {
        match self.board_mut(board_id) {
            Some(board) => {
                board.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Removes the first board with `board_id` unless it is the only one
    /// left. Never leaves the collection empty.
    ///
    /// Callers holding an active-board pointer must move it off `board_id`
    /// before calling this.
    pub fn delete_board(&mut self, board_id: &str) -> bool {
        if self.boards.len() <= 1 {
            return false;
        }
        match self.boards.iter().position(|board| board.id == board_id) {
            Some(index) => {
                self.boards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces the task list of one board.
    pub fn replace_tasks(&mut self, board_id: &str, tasks: Vec<Task>) -> bool {
        self.update_tasks(board_id, |_| tasks)
    }

    /// Runs `updater` over one board's task list and stores the result.
    pub fn update_tasks<F>(&mut self, board_id: &str, updater: F) -> bool
    where
        F: FnOnce(Vec<Task>) -> Vec<Task>,
    {
        match self.board_mut(board_id) {
            Some(board) => {
                let current = std::mem::take(&mut board.tasks);
                board.tasks = updater(current);
                true
            }
            None => false,
        }
    }

    /// Creates a task on `board_id`, placed and timestamped by `placement`.
    pub fn add_task(
        &mut self,
        board_id: &str,
        request: NewTask,
        placement: &mut Placement<'_>,
    ) -> Option<TaskId> {
        let board = self.board_mut(board_id)?;
        // Notes are square; the requested width wins.
        let side = request.width;
        let (x, y) = placement.position_for(side, side);
        let task = Task {
            id: Uuid::new_v4().to_string(),
            text: request.text,
            width: side,
            height: side,
            color: request.color,
            color_text: request.color_text,
            completed: false,
            created_at: placement.now_ms,
            x: Some(x),
            y: Some(y),
        };
        let id = task.id.clone();
        board.tasks.push(task);
        Some(id)
    }

    /// Shallow-merges `patch` into one task.
    pub fn update_task(&mut self, board_id: &str, task_id: &str, patch: &TaskPatch) -> bool {
        self.with_task(board_id, task_id, |task| task.apply_patch(patch))
    }

    pub fn delete_task(&mut self, board_id: &str, task_id: &str) -> bool {
        let Some(board) = self.board_mut(board_id) else {
            return false;
        };
        let before = board.tasks.len();
        board.tasks.retain(|task| task.id != task_id);
        board.tasks.len() != before
    }

    /// Moves a task by `(dx, dy)`. A missing coordinate counts as `0`.
    pub fn apply_drag_delta(&mut self, board_id: &str, task_id: &str, dx: f64, dy: f64) -> bool {
        self.with_task(board_id, task_id, |task| {
            task.x = Some(task.x.unwrap_or(0.0) + dx);
            task.y = Some(task.y.unwrap_or(0.0) + dy);
        })
    }

    /// Snaps a task to the size bucket nearest `raw_width`.
    ///
    /// Width, height and color all come from the bucket, so any custom color
    /// is replaced.
    pub fn apply_resize(&mut self, board_id: &str, task_id: &str, raw_width: f64) -> bool {
        let bucket = snap_size(raw_width);
        self.with_task(board_id, task_id, |task| {
            task.width = bucket.size;
            task.height = bucket.size;
            task.color = bucket.color.to_string();
        })
    }

    fn with_task(&mut self, board_id: &str, task_id: &str, edit: impl FnOnce(&mut Task)) -> bool {
        match self
            .board_mut(board_id)
            .and_then(|board| board.task_mut(task_id))
        {
            Some(task) => {
                edit(task);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BoardsState;
    use crate::layout::{FixedJitter, Placement, Viewport};
    use crate::model::board::Board;
    use crate::model::task::{NewTask, TaskPatch};

    fn placement(jitter: &mut FixedJitter) -> Placement<'_> {
        Placement {
            viewport: Viewport {
                width: 800.0,
                height: 600.0,
            },
            spread: 50.0,
            jitter,
            now_ms: 1_000,
        }
    }

    fn request(text: &str) -> NewTask {
        NewTask {
            text: text.to_string(),
            width: 100.0,
            height: 100.0,
            color: "#C7E7E6".to_string(),
            color_text: None,
        }
    }

    #[test]
    fn update_tasks_leaves_other_boards_untouched() {
        let mut state = BoardsState::single("one");
        let first = state.first_id().unwrap().clone();
        let second = state.add_board();
        let mut jitter = FixedJitter::default();
        state
            .add_task(&second, request("keep"), &mut placement(&mut jitter))
            .unwrap();
        let untouched = state.board(&second).unwrap().clone();

        assert!(state.update_tasks(&first, |mut tasks| {
            tasks.clear();
            tasks
        }));
        assert_eq!(state.board(&second).unwrap(), &untouched);
        assert!(!state.replace_tasks("missing", Vec::new()));
    }

    #[test]
    fn with_task_mutations_report_not_found() {
        let mut state = BoardsState::single("one");
        let board = state.first_id().unwrap().clone();
        assert!(!state.update_task(&board, "nope", &TaskPatch::default()));
        assert!(!state.apply_drag_delta(&board, "nope", 1.0, 1.0));
        assert!(!state.apply_resize(&board, "nope", 100.0));
        assert!(!state.delete_task(&board, "nope"));
        assert!(!state.rename_board("nope", "x"));
    }

    #[test]
    fn delete_board_with_shared_id_keeps_one_board() {
        let mut state = BoardsState::new(vec![
            Board::with_id("a", "first", Vec::new()),
            Board::with_id("a", "second", Vec::new()),
        ]);

        assert!(state.delete_board("a"));
        assert_eq!(state.len(), 1);
        assert_eq!(state.boards()[0].name, "second");
        assert!(!state.delete_board("a"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn add_task_squares_a_non_square_request() {
        let mut state = BoardsState::single("one");
        let board = state.first_id().unwrap().clone();
        let mut jitter = FixedJitter::default();
        let mut tall = request("tall");
        tall.height = 300.0;

        let id = state
            .add_task(&board, tall, &mut placement(&mut jitter))
            .unwrap();
        let task = state.task(&board, &id).unwrap();
        assert_eq!(task.width, 100.0);
        assert_eq!(task.height, 100.0);
        assert_eq!(task.x, Some(350.0));
        assert_eq!(task.y, Some(250.0));
    }

    #[test]
    fn transparent_serialization_is_a_bare_array() {
        let state = BoardsState::single("one");
        let json = serde_json::to_value(&state).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["name"], "one");
    }
}
