//! Free-form layout geometry and derived views.
//!
//! # Responsibility
//! - Snap resize gestures to the discrete size table.
//! - Place new notes near the viewport center with bounded jitter.
//! - Derive the largest-first display order.
//!
//! # Invariants
//! - Display order is derived on demand and never written back to state.
//! - Jitter stays within `[-spread, spread]` on each axis.

use crate::model::size::NoteSize;
use crate::model::task::Task;
use rand::Rng;

/// Smallest raw width a corner-drag gesture can produce.
pub const MIN_GESTURE_WIDTH: f64 = 50.0;
/// Start width assumed for a gesture on a task without a stored width.
pub const GESTURE_FALLBACK_WIDTH: f64 = 260.0;

/// Visible canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Source of per-axis placement offsets.
pub trait JitterSource {
    /// Returns an offset within `[-spread, spread]`.
    fn offset(&mut self, spread: f64) -> f64;
}

/// Uniform random jitter from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomJitter;

impl JitterSource for RandomJitter {
    fn offset(&mut self, spread: f64) -> f64 {
        if spread.is_nan() || spread <= 0.0 {
            return 0.0;
        }
        rand::rng().random_range(-spread..=spread)
    }
}

/// Replays a fixed offset sequence, clamped to the requested spread.
///
/// Cycles once the sequence is exhausted; an empty sequence yields zero.
#[derive(Debug, Default, Clone)]
pub struct FixedJitter {
    offsets: Vec<f64>,
    cursor: usize,
}

impl FixedJitter {
    pub fn new(offsets: impl Into<Vec<f64>>) -> Self {
        Self {
            offsets: offsets.into(),
            cursor: 0,
        }
    }
}

impl JitterSource for FixedJitter {
    fn offset(&mut self, spread: f64) -> f64 {
        if self.offsets.is_empty() {
            return 0.0;
        }
        let value = self.offsets[self.cursor % self.offsets.len()];
        self.cursor += 1;
        let spread = spread.max(0.0);
        value.clamp(-spread, spread)
    }
}

/// Everything needed to place and timestamp one new note.
pub struct Placement<'a> {
    pub viewport: Viewport,
    pub spread: f64,
    pub jitter: &'a mut dyn JitterSource,
    pub now_ms: i64,
}

impl Placement<'_> {
    /// Top-left corner for a `width` x `height` note centered in the
    /// viewport, offset by jitter on both axes.
    pub fn position_for(&mut self, width: f64, height: f64) -> (f64, f64) {
        let x = self.viewport.width / 2.0 - width / 2.0 + self.jitter.offset(self.spread);
        let y = self.viewport.height / 2.0 - height / 2.0 + self.jitter.offset(self.spread);
        (x, y)
    }
}

/// Nearest size bucket for a raw gesture width.
pub fn snap_size(raw_width: f64) -> &'static NoteSize {
    NoteSize::nearest(raw_width)
}

/// Raw width produced by dragging a resize corner `pointer_dx` pixels.
pub fn resize_gesture_width(start_width: Option<f64>, pointer_dx: f64) -> f64 {
    let start = start_width
        .filter(|width| *width > 0.0)
        .unwrap_or(GESTURE_FALLBACK_WIDTH);
    (start + pointer_dx).max(MIN_GESTURE_WIDTH)
}

/// Tasks ordered by descending area so smaller notes render on top.
///
/// Stable: equal-area tasks keep their stored order.
pub fn tasks_by_area_desc(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| b.area().total_cmp(&a.area()));
    ordered
}

/// Text size tier for a card of a given width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextScale {
    Tiny,
    Compact,
    Standard,
}

impl TextScale {
    pub fn for_width(width: f64) -> Self {
        if width <= 60.0 {
            Self::Tiny
        } else if width <= 100.0 {
            Self::Compact
        } else {
            Self::Standard
        }
    }

    /// CSS font size for this tier.
    pub fn css_font_size(self) -> &'static str {
        match self {
            Self::Tiny => "0.65rem",
            Self::Compact => "0.85rem",
            Self::Standard => "1rem",
        }
    }
}
