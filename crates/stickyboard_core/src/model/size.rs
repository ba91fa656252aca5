//! Size buckets and card palette.
//!
//! # Responsibility
//! - Provide the fixed ascending table used to discretize resize gestures.
//! - Provide the named background/text color pairs for cards.
//!
//! # Invariants
//! - `NOTE_SIZES` is sorted by strictly ascending `size`.
//! - Snapping ties resolve to the earlier (smaller) bucket.

/// One discrete note size with its associated background color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteSize {
    pub label: &'static str,
    pub size: f64,
    pub color: &'static str,
}

/// Ascending size table. Resizing always lands on one of these entries.
pub const NOTE_SIZES: [NoteSize; 5] = [
    NoteSize {
        label: "XS",
        size: 60.0,
        color: "#C9D2F0",
    },
    NoteSize {
        label: "S",
        size: 100.0,
        color: "#C7E7E6",
    },
    NoteSize {
        label: "M",
        size: 160.0,
        color: "#D6F0DD",
    },
    NoteSize {
        label: "L",
        size: 260.0,
        color: "#F5E7C3",
    },
    NoteSize {
        label: "XL",
        size: 380.0,
        color: "#F4D0D7",
    },
];

impl NoteSize {
    /// Bucket preselected for new notes (`S`).
    pub fn default_for_input() -> &'static NoteSize {
        &NOTE_SIZES[1]
    }

    /// Looks up a bucket by label, case-insensitively.
    pub fn from_label(label: &str) -> Option<&'static NoteSize> {
        let label = label.trim();
        NOTE_SIZES
            .iter()
            .find(|entry| entry.label.eq_ignore_ascii_case(label))
    }

    /// Returns the bucket nearest to `raw_width` by absolute distance.
    pub fn nearest(raw_width: f64) -> &'static NoteSize {
        let mut closest = &NOTE_SIZES[0];
        for candidate in &NOTE_SIZES[1..] {
            if (candidate.size - raw_width).abs() < (closest.size - raw_width).abs() {
                closest = candidate;
            }
        }
        closest
    }
}

/// Named background/text pair offered for card coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub value: &'static str,
    pub text: &'static str,
}

pub const PALETTE: [PaletteColor; 6] = [
    PaletteColor {
        name: "Soft Blue",
        value: "#81ecec",
        text: "#2d3436",
    },
    PaletteColor {
        name: "Soft Purple",
        value: "#a29bfe",
        text: "#2d3436",
    },
    PaletteColor {
        name: "Soft Yellow",
        value: "#ffeaa7",
        text: "#2d3436",
    },
    PaletteColor {
        name: "Off-White",
        value: "#dfe6e9",
        text: "#2d3436",
    },
    PaletteColor {
        name: "Off-Black",
        value: "#2d3436",
        text: "#dfe6e9",
    },
    PaletteColor {
        name: "Strong Red",
        value: "#d63031",
        text: "#ffffff",
    },
];

impl PaletteColor {
    /// Looks up a palette entry by display name, case-insensitively.
    pub fn from_name(name: &str) -> Option<&'static PaletteColor> {
        let name = name.trim();
        PALETTE
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteSize, PaletteColor, NOTE_SIZES};

    #[test]
    fn size_table_is_strictly_ascending() {
        for pair in NOTE_SIZES.windows(2) {
            assert!(pair[0].size < pair[1].size);
        }
    }

    #[test]
    fn nearest_picks_closest_bucket() {
        assert_eq!(NoteSize::nearest(130.0).label, "S");
        assert_eq!(NoteSize::nearest(0.0).label, "XS");
        assert_eq!(NoteSize::nearest(10_000.0).label, "XL");
        assert_eq!(NoteSize::nearest(200.0).label, "M");
    }

    #[test]
    fn nearest_breaks_ties_toward_smaller_bucket() {
        // 80 is equidistant from XS (60) and S (100).
        assert_eq!(NoteSize::nearest(80.0).label, "XS");
        // 210 is equidistant from M (160) and L (260).
        assert_eq!(NoteSize::nearest(210.0).label, "M");
    }

    #[test]
    fn labels_and_palette_names_parse_case_insensitively() {
        assert_eq!(NoteSize::from_label(" xl ").map(|s| s.size), Some(380.0));
        assert!(NoteSize::from_label("XXL").is_none());
        assert_eq!(
            PaletteColor::from_name("strong red").map(|c| c.text),
            Some("#ffffff")
        );
        assert_eq!(NoteSize::default_for_input().label, "S");
    }
}
