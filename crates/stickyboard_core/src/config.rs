//! Runtime configuration for board services.

use crate::layout::Viewport;

/// Placement jitter, in pixels per axis, for notes created via "add task".
pub const ADD_TASK_JITTER_PX: f64 = 50.0;
/// Placement jitter, in pixels per axis, for notes created via paste.
pub const PASTE_JITTER_PX: f64 = 20.0;

/// Tunables for one `BoardService` instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardConfig {
    /// Canvas new notes are centered in.
    pub viewport: Viewport,
    pub add_jitter_px: f64,
    pub paste_jitter_px: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            add_jitter_px: ADD_TASK_JITTER_PX,
            paste_jitter_px: PASTE_JITTER_PX,
        }
    }
}

impl BoardConfig {
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }
}

/// Parses a `WIDTHxHEIGHT` viewport string, e.g. `1440x900`.
///
/// Returns `None` unless both sides are finite positive numbers.
pub fn parse_viewport(value: &str) -> Option<Viewport> {
    let (width, height) = value.trim().split_once(['x', 'X'])?;
    let width: f64 = width.trim().parse().ok()?;
    let height: f64 = height.trim().parse().ok()?;
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Viewport { width, height })
}

#[cfg(test)]
mod tests {
    use super::parse_viewport;

    #[test]
    fn parse_viewport_accepts_width_by_height() {
        let viewport = parse_viewport(" 1440x900 ").unwrap();
        assert_eq!(viewport.width, 1440.0);
        assert_eq!(viewport.height, 900.0);
        assert!(parse_viewport("1440X900").is_some());
    }

    #[test]
    fn parse_viewport_rejects_malformed_values() {
        assert!(parse_viewport("1440").is_none());
        assert!(parse_viewport("0x900").is_none());
        assert!(parse_viewport("axb").is_none());
        assert!(parse_viewport("-5x10").is_none());
    }
}
