//! Board model.
//!
//! # Responsibility
//! - Define a named, independent collection of tasks.
//!
//! # Invariants
//! - A board exclusively owns its tasks; tasks never move between boards.

use crate::model::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable string identifier of a board.
///
/// Generated boards use UUIDv4 strings; the migrated legacy board keeps a
/// fixed readable id.
pub type BoardId = String;

/// Placeholder name given to boards created via "add board".
pub const NEW_BOARD_NAME: &str = "New Board";
/// Name of the board synthesized on first run.
pub const DEFAULT_BOARD_NAME: &str = "My Board";
/// Id of the board created from legacy single-board data.
pub const LEGACY_BOARD_ID: &str = "personal-board";
/// Name of the board created from legacy single-board data.
pub const LEGACY_BOARD_NAME: &str = "Personal";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Board {
    /// Creates an empty board with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, Vec::new())
    }

    /// Creates a board with a caller-provided id and task list.
    pub fn with_id(id: impl Into<BoardId>, name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tasks,
        }
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == task_id)
    }

    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|task| task.id.clone()).collect()
    }
}
