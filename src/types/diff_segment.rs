#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{diffs::edit::Edit, types::segment_kind::SegmentKind};

/// A run of text classified as unchanged, added, or removed.
///
/// Concatenating the text of every segment that is `in_original` reproduces
/// the original input, and concatenating every segment that is `in_current`
/// reproduces the current input.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    kind: SegmentKind,
    text: String,
}

impl DiffSegment {
    #[must_use]
    pub fn new(kind: SegmentKind, text: String) -> Self { DiffSegment { kind, text } }

    #[must_use]
    pub fn kind(&self) -> SegmentKind { self.kind }

    #[must_use]
    pub fn text(&self) -> String { self.text.clone() }

    #[must_use]
    pub fn unchanged(text: impl Into<String>) -> Self { Self::new(SegmentKind::Unchanged, text.into()) }

    #[must_use]
    pub fn added(text: impl Into<String>) -> Self { Self::new(SegmentKind::Added, text.into()) }

    #[must_use]
    pub fn removed(text: impl Into<String>) -> Self { Self::new(SegmentKind::Removed, text.into()) }

    /// Borrow the text without cloning it.
    #[must_use]
    pub fn as_str(&self) -> &str { &self.text }

    #[must_use]
    pub fn is_change(&self) -> bool { self.kind != SegmentKind::Unchanged }
}

impl DiffSegment {
    /// One segment per edit, except for tokens that were matched by their
    /// normalized form but are spelled differently: those become an addition
    /// followed by a removal so both texts can still be rebuilt.
    pub(crate) fn from_edits<T>(edits: Vec<Edit<'_, T>>) -> Vec<DiffSegment>
    where
        T: PartialEq + Clone + std::fmt::Debug,
    {
        let mut segments = Vec::with_capacity(edits.len());

        for edit in edits {
            match edit {
                Edit::Equal(old, new) if old.original() == new.original() => {
                    segments.push(DiffSegment::unchanged(old.original()));
                }
                Edit::Equal(old, new) => {
                    segments.push(DiffSegment::added(new.original()));
                    segments.push(DiffSegment::removed(old.original()));
                }
                Edit::Insert(token) => segments.push(DiffSegment::added(token.original())),
                Edit::Delete(token) => segments.push(DiffSegment::removed(token.original())),
            }
        }

        segments
    }
}

/// Rebuild the original text from a segment sequence.
#[must_use]
pub fn original_text(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .filter(|segment| segment.kind.in_original())
        .map(DiffSegment::as_str)
        .collect()
}

/// Rebuild the current text from a segment sequence.
#[must_use]
pub fn current_text(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .filter(|segment| segment.kind.in_current())
        .map(DiffSegment::as_str)
        .collect()
}

/// Join consecutive segments of the same kind into one. The reconstruction
/// invariant is unaffected.
#[must_use]
pub fn merge_adjacent(segments: Vec<DiffSegment>) -> Vec<DiffSegment> {
    let mut result: Vec<DiffSegment> = Vec::with_capacity(segments.len());

    for segment in segments {
        match result.last_mut() {
            Some(last) if last.kind == segment.kind => last.text.push_str(&segment.text),
            _ => result.push(segment),
        }
    }

    result
}
