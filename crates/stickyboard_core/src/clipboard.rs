//! Clipboard interchange codec for copy/paste of single tasks.
//!
//! # Responsibility
//! - Encode a task's shape fields into the tagged JSON envelope.
//! - Decode and validate envelopes read back from the clipboard.
//! - Define the clipboard I/O seam.
//!
//! # Invariants
//! - Identity and layout fields (`id`, `completed`, `createdAt`, `x`, `y`)
//!   never travel; a paste always creates a fresh task.
//! - The `type` discriminant is checked before any payload field is read.
//!
//! Wire format:
//! `{"type":"task-tracker-item","data":{"text":..,"width":..,"height":..,"color":..,"colorText":..}}`

use crate::model::task::{Task, TaskShape};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Discriminant identifying task payloads.
pub const CLIPBOARD_TAG: &str = "task-tracker-item";

/// Tagged clipboard envelope. Only one variant exists today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClipboardPayload {
    #[serde(rename = "task-tracker-item")]
    TaskItem(TaskShape),
}

pub type ClipboardResult<T> = Result<T, ClipboardError>;

#[derive(Debug)]
pub enum ClipboardError {
    /// Clipboard text is not a matching envelope.
    Rejected(serde_json::Error),
    /// Envelope could not be serialized.
    Encode(serde_json::Error),
    /// Clipboard contains no text.
    Empty,
    /// Clipboard backend failed.
    Io(String),
}

impl Display for ClipboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(err) => write!(f, "clipboard payload rejected: {err}"),
            Self::Encode(err) => write!(f, "failed to encode clipboard payload: {err}"),
            Self::Empty => write!(f, "clipboard is empty"),
            Self::Io(message) => write!(f, "clipboard unavailable: {message}"),
        }
    }
}

impl Error for ClipboardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected(err) | Self::Encode(err) => Some(err),
            Self::Empty | Self::Io(_) => None,
        }
    }
}

/// Serializes a task's shape fields into the clipboard envelope.
pub fn encode(task: &Task) -> ClipboardResult<String> {
    serde_json::to_string(&ClipboardPayload::TaskItem(task.shape())).map_err(ClipboardError::Encode)
}

/// Parses clipboard text back into task shape fields.
///
/// Rejects invalid JSON, a foreign `type`, a missing `data`, and payloads
/// missing `text`, `width`, `height` or `color`.
pub fn decode(raw: &str) -> ClipboardResult<TaskShape> {
    match serde_json::from_str::<ClipboardPayload>(raw) {
        Ok(ClipboardPayload::TaskItem(shape)) => Ok(shape),
        Err(err) => Err(ClipboardError::Rejected(err)),
    }
}

/// Text clipboard backend.
pub trait Clipboard {
    fn read_text(&mut self) -> ClipboardResult<String>;
    fn write_text(&mut self, text: &str) -> ClipboardResult<()>;
}

/// Process-local clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&mut self) -> ClipboardResult<String> {
        self.contents.clone().ok_or(ClipboardError::Empty)
    }

    fn write_text(&mut self, text: &str) -> ClipboardResult<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{decode, ClipboardError};

    #[test]
    fn decode_checks_tag_before_payload() {
        let err = decode(r#"{"type":"other","data":{}}"#).unwrap_err();
        assert!(matches!(err, ClipboardError::Rejected(_)));
    }

    #[test]
    fn decode_rejects_missing_data_and_bad_json() {
        assert!(decode(r#"{"type":"task-tracker-item"}"#).is_err());
        assert!(decode("not json").is_err());
        assert!(decode("").is_err());
        assert!(decode(r#"{"type":"task-tracker-item","data":{}}"#).is_err());
    }

    #[test]
    fn decode_accepts_missing_color_text() {
        let shape = decode(
            r##"{"type":"task-tracker-item","data":{"text":"a","width":60,"height":60,"color":"#C9D2F0"}}"##,
        )
        .unwrap();
        assert_eq!(shape.width, 60.0);
        assert!(shape.color_text.is_none());
    }
}
