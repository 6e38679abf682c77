#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a `DiffSegment` relative to the original text.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Present in both the original and the current text.
    Unchanged,
    /// Only present in the current text.
    Added,
    /// Only present in the original text.
    Removed,
}

impl SegmentKind {
    /// Whether segments of this kind are part of the original text.
    #[must_use]
    pub fn in_original(self) -> bool { !matches!(self, SegmentKind::Added) }

    /// Whether segments of this kind are part of the current text.
    #[must_use]
    pub fn in_current(self) -> bool { !matches!(self, SegmentKind::Removed) }
}
