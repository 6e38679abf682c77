use std::ops::AddAssign;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{diff_segment::DiffSegment, segment_kind::SegmentKind};

/// Summary of a segment sequence, counted in words (non-whitespace runs) and
/// characters so that it doesn't depend on how segments were merged.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffStats {
    pub unchanged_words: usize,
    pub added_words: usize,
    pub removed_words: usize,
    pub added_chars: usize,
    pub removed_chars: usize,
}

impl DiffStats {
    #[must_use]
    pub fn from_segments(segments: &[DiffSegment]) -> Self {
        let mut stats = DiffStats::default();

        for segment in segments {
            let text = segment.as_str();
            let words = text.split_whitespace().count();
            match segment.kind() {
                SegmentKind::Unchanged => stats.unchanged_words += words,
                SegmentKind::Added => {
                    stats.added_words += words;
                    stats.added_chars += text.chars().count();
                }
                SegmentKind::Removed => {
                    stats.removed_words += words;
                    stats.removed_chars += text.chars().count();
                }
            }
        }

        stats
    }

    #[must_use]
    pub fn has_changes(&self) -> bool { self.added_chars > 0 || self.removed_chars > 0 }
}

impl AddAssign for DiffStats {
    fn add_assign(&mut self, other: Self) {
        self.unchanged_words += other.unchanged_words;
        self.added_words += other.added_words;
        self.removed_words += other.removed_words;
        self.added_chars += other.added_chars;
        self.removed_chars += other.removed_chars;
    }
}
