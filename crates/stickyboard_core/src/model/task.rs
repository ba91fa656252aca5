//! Task note model.
//!
//! # Responsibility
//! - Define the persisted task record and its camelCase JSON shape.
//! - Provide partial-update and creation request types.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - Persisted records decode leniently: every field has a default, and a
//!   missing `id` gets a fresh one, so partial legacy rows still load.

use crate::model::size::{NoteSize, PALETTE};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable string identifier of a task.
pub type TaskId = String;

/// Width/height used when a stored task carries no size.
pub const DEFAULT_CARD_SIZE: f64 = 200.0;
/// Left/top offset used when a stored task carries no position.
pub const DEFAULT_CARD_OFFSET: f64 = 50.0;

fn default_card_size() -> f64 {
    DEFAULT_CARD_SIZE
}

fn fresh_task_id() -> TaskId {
    Uuid::new_v4().to_string()
}

/// One square sticky note on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default = "fresh_task_id")]
    pub id: TaskId,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_card_size")]
    pub width: f64,
    #[serde(default = "default_card_size")]
    pub height: f64,
    /// Background color. Empty means "use the palette default".
    #[serde(default)]
    pub color: String,
    /// Foreground color, when set explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_text: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl Task {
    /// Area used for the largest-first display order.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn left(&self) -> f64 {
        self.x.unwrap_or(DEFAULT_CARD_OFFSET)
    }

    pub fn top(&self) -> f64 {
        self.y.unwrap_or(DEFAULT_CARD_OFFSET)
    }

    /// Background color with the palette fallback applied.
    pub fn background(&self) -> &str {
        if self.color.is_empty() {
            PALETTE[0].value
        } else {
            self.color.as_str()
        }
    }

    /// Foreground color with the palette fallback applied.
    pub fn foreground(&self) -> &str {
        match self.color_text.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => PALETTE[0].text,
        }
    }

    /// Returns the shape-relevant fields that travel through the clipboard.
    pub fn shape(&self) -> TaskShape {
        TaskShape {
            text: self.text.clone(),
            width: self.width,
            height: self.height,
            color: self.color.clone(),
            color_text: self.color_text.clone(),
        }
    }

    /// Applies every field set in `patch`, leaving the rest untouched.
    pub fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(size) = patch.size {
            self.width = size;
            self.height = size;
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if let Some(color_text) = &patch.color_text {
            self.color_text = Some(color_text.clone());
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(x) = patch.x {
            self.x = Some(x);
        }
        if let Some(y) = patch.y {
            self.y = Some(y);
        }
    }
}

/// Identity-free task fields: what a copy carries and a paste restores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskShape {
    pub text: String,
    pub width: f64,
    pub height: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_text: Option<String>,
}

/// Creation request for a new note.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub text: String,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub color_text: Option<String>,
}

impl NewTask {
    /// Builds a request sized and colored from one size bucket.
    pub fn from_size(text: impl Into<String>, size: &NoteSize) -> Self {
        Self {
            text: text.into(),
            width: size.size,
            height: size.size,
            color: size.color.to_string(),
            color_text: None,
        }
    }
}

impl From<TaskShape> for NewTask {
    fn from(shape: TaskShape) -> Self {
        Self {
            text: shape.text,
            width: shape.width,
            height: shape.height,
            color: shape.color,
            color_text: shape.color_text,
        }
    }
}

/// Shallow partial update for a task.
///
/// `size` writes both `width` and `height` so patches cannot break the
/// square-note rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub size: Option<f64>,
    pub color: Option<String>,
    pub color_text: Option<String>,
    pub completed: Option<bool>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskPatch, DEFAULT_CARD_OFFSET, DEFAULT_CARD_SIZE};

    #[test]
    fn partial_legacy_record_decodes_with_defaults() {
        let task: Task = serde_json::from_str(r#"{"id":"t1","text":"milk"}"#).unwrap();
        assert_eq!(task.width, DEFAULT_CARD_SIZE);
        assert_eq!(task.height, DEFAULT_CARD_SIZE);
        assert!(!task.completed);
        assert!(task.x.is_none());
        assert_eq!(task.left(), DEFAULT_CARD_OFFSET);
        assert_eq!(task.background(), "#81ecec");
        assert_eq!(task.foreground(), "#2d3436");
    }

    #[test]
    fn missing_id_decodes_to_distinct_fresh_ids() {
        let first: Task = serde_json::from_str(r#"{"text":"a"}"#).unwrap();
        let second: Task = serde_json::from_str(r#"{"text":"b"}"#).unwrap();
        assert_eq!(first.id.len(), 36);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let task = Task {
            id: "t1".to_string(),
            text: "hello".to_string(),
            width: 100.0,
            height: 100.0,
            color: "#C7E7E6".to_string(),
            color_text: Some("#000000".to_string()),
            completed: true,
            created_at: 42,
            x: Some(1.0),
            y: None,
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["colorText"], "#000000");
        assert_eq!(value["createdAt"], 42);
        assert!(value.get("y").is_none());
    }

    #[test]
    fn patch_size_keeps_note_square() {
        let mut task: Task = serde_json::from_str(r#"{"id":"t1"}"#).unwrap();
        task.apply_patch(&TaskPatch {
            size: Some(260.0),
            completed: Some(true),
            ..TaskPatch::default()
        });
        assert_eq!(task.width, 260.0);
        assert_eq!(task.height, 260.0);
        assert!(task.completed);
        assert_eq!(task.text, "");
    }
}
