//! Combining-mark tables for the three glyph placements.
//!
//! The membership below is a hand-curated list, not a Unicode property query:
//! several marks were sorted by how they render rather than by their formal
//! class, and a few entries are listed twice so uniform selection over the
//! slice favours them. Only membership and multiplicity matter; order is
//! irrelevant to the encoder.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Where a combining mark renders relative to its base character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Marks stacked above the glyph.
    Top,
    /// Overlay marks drawn through the glyph.
    Middle,
    /// Marks stacked below the glyph.
    Bottom,
}

impl Placement {
    /// Every placement, top to bottom.
    pub const ALL: [Placement; 3] = [Placement::Top, Placement::Middle, Placement::Bottom];
}

/// Read-only tables of combining marks, one per [`Placement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkTables {
    top: Vec<char>,
    middle: Vec<char>,
    bottom: Vec<char>,
}

// U+034F (combining grapheme joiner) is invisible and deliberately absent.
const TOP_SINGLES: [u32; 12] = [
    0x0346, 0x034A, 0x034B, 0x034C, 0x0350, 0x0351, 0x0352, 0x0357, 0x0358, 0x035B, 0x0360,
    0x0361,
];
const BOTTOM_SINGLES: [u32; 14] = [
    0x0345, 0x0347, 0x0348, 0x0349, 0x034D, 0x034E, 0x0353, 0x0354, 0x0355, 0x0356, 0x0359,
    0x035A, 0x035C, 0x035F,
];

impl MarkTables {
    /// Builds the tables from the curated code point list.
    pub fn build() -> Self {
        let mut top: Vec<u32> = (0x0300..=0x0315).collect();
        top.extend([0x031A, 0x031B]);
        top.extend(0x033D..=0x0344);
        top.push(0x0344);
        top.extend(TOP_SINGLES);
        top.push(0x035D);
        top.push(0x035D);

        let middle: Vec<u32> = (0x0334..=0x0338).collect();

        let mut bottom: Vec<u32> = (0x0316..=0x0333)
            .filter(|cp| *cp != 0x031A && *cp != 0x031B)
            .collect();
        bottom.extend(0x0339..=0x033C);
        bottom.extend(BOTTOM_SINGLES);

        Self {
            top: to_chars(&top),
            middle: to_chars(&middle),
            bottom: to_chars(&bottom),
        }
    }

    /// Marks rendered above the base glyph.
    pub fn top(&self) -> &[char] {
        &self.top
    }

    /// Overlay marks rendered through the base glyph.
    pub fn middle(&self) -> &[char] {
        &self.middle
    }

    /// Marks rendered below the base glyph.
    pub fn bottom(&self) -> &[char] {
        &self.bottom
    }

    /// Returns the table backing `placement`.
    pub fn for_placement(&self, placement: Placement) -> &[char] {
        match placement {
            Placement::Top => &self.top,
            Placement::Middle => &self.middle,
            Placement::Bottom => &self.bottom,
        }
    }

    /// Classifies `ch`, returning `None` for anything outside the tables.
    pub fn placement_of(&self, ch: char) -> Option<Placement> {
        Placement::ALL
            .into_iter()
            .find(|placement| self.for_placement(*placement).contains(&ch))
    }

    /// Returns `true` when `ch` belongs to any of the tables.
    pub fn contains(&self, ch: char) -> bool {
        self.placement_of(ch).is_some()
    }
}

impl Default for MarkTables {
    fn default() -> Self {
        Self::build()
    }
}

/// Returns the process-wide tables, building them on first use.
pub fn marks() -> &'static MarkTables {
    static TABLES: OnceLock<MarkTables> = OnceLock::new();
    TABLES.get_or_init(MarkTables::build)
}

fn to_chars(code_points: &[u32]) -> Vec<char> {
    // Every entry lies in U+0300..=U+036F, so the conversion never fails.
    code_points.iter().filter_map(|cp| char::from_u32(*cp)).collect()
}
