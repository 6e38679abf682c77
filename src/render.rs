#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{
    diff_segment::DiffSegment,
    rendered_span::{Pane, RenderedSpan, SpanStyle},
    segment_kind::SegmentKind,
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Skip unchanged segments. Only affects what is drawn, the diff itself
    /// is computed the same way.
    #[cfg_attr(feature = "serde", serde(default))]
    pub differences_only: bool,
}

/// Turn a segment sequence into the spans one side of a comparison shows.
///
/// The original pane shows unchanged and removed text, with the removed
/// text struck through; added text becomes an invisible placeholder so both
/// panes stay aligned. The current pane shows unchanged and added text and
/// never any removed text.
#[must_use]
pub fn render_pane(segments: &[DiffSegment], pane: Pane, options: RenderOptions) -> Vec<RenderedSpan> {
    segments
        .iter()
        .filter_map(|segment| {
            let style = span_style(segment.kind(), pane)?;
            if options.differences_only && style == SpanStyle::Plain {
                return None;
            }

            Some(RenderedSpan::new(style, segment.as_str().to_owned()))
        })
        .collect()
}

fn span_style(kind: SegmentKind, pane: Pane) -> Option<SpanStyle> {
    match (pane, kind) {
        (_, SegmentKind::Unchanged) => Some(SpanStyle::Plain),
        (Pane::Original, SegmentKind::Removed) => Some(SpanStyle::Deleted),
        (Pane::Original, SegmentKind::Added) => Some(SpanStyle::Placeholder),
        (Pane::Current, SegmentKind::Added) => Some(SpanStyle::Inserted),
        (Pane::Current, SegmentKind::Removed) => None,
    }
}
