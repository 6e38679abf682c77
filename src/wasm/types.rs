use wasm_bindgen::prelude::*;

use crate::{DiffSegment, Pane, RenderedSpan, SegmentKind, SpanStyle};

/// Segment kinds as JS strings.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsSegmentKind {
    Unchanged = "unchanged",
    Added = "added",
    Removed = "removed",
}

impl From<SegmentKind> for JsSegmentKind {
    fn from(kind: SegmentKind) -> Self {
        match kind {
            SegmentKind::Unchanged => JsSegmentKind::Unchanged,
            SegmentKind::Added => JsSegmentKind::Added,
            SegmentKind::Removed => JsSegmentKind::Removed,
        }
    }
}

/// Wrapper type to expose `DiffSegment` to JS.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsDiffSegment {
    kind: JsSegmentKind,
    text: String,
}

#[wasm_bindgen]
impl JsDiffSegment {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(kind: JsSegmentKind, text: String) -> Self { Self { kind, text } }

    #[must_use]
    pub fn kind(&self) -> JsSegmentKind { self.kind }

    #[must_use]
    pub fn text(&self) -> String { self.text.clone() }
}

impl From<DiffSegment> for JsDiffSegment {
    fn from(segment: DiffSegment) -> Self {
        JsDiffSegment {
            kind: segment.kind().into(),
            text: segment.text(),
        }
    }
}

/// Which pane of the side-by-side view to render.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsPane {
    Original = "original",
    Current = "current",
}

impl From<JsPane> for Pane {
    fn from(pane: JsPane) -> Self {
        if pane == JsPane::Original {
            Pane::Original
        } else {
            Pane::Current
        }
    }
}

#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsSpanStyle {
    Plain = "plain",
    Deleted = "deleted",
    Inserted = "inserted",
    Placeholder = "placeholder",
}

impl From<SpanStyle> for JsSpanStyle {
    fn from(style: SpanStyle) -> Self {
        match style {
            SpanStyle::Plain => JsSpanStyle::Plain,
            SpanStyle::Deleted => JsSpanStyle::Deleted,
            SpanStyle::Inserted => JsSpanStyle::Inserted,
            SpanStyle::Placeholder => JsSpanStyle::Placeholder,
        }
    }
}

/// Wrapper type to expose `RenderedSpan` to JS.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsRenderedSpan {
    style: JsSpanStyle,
    text: String,
    visible_text: String,
}

#[wasm_bindgen]
impl JsRenderedSpan {
    #[must_use]
    pub fn style(&self) -> JsSpanStyle { self.style }

    #[must_use]
    pub fn text(&self) -> String { self.text.clone() }

    /// Text to draw; placeholders are blanked out but keep their line breaks.
    #[wasm_bindgen(js_name = visibleText)]
    #[must_use]
    pub fn visible_text(&self) -> String { self.visible_text.clone() }
}

impl From<RenderedSpan> for JsRenderedSpan {
    fn from(span: RenderedSpan) -> Self {
        JsRenderedSpan {
            style: span.style().into(),
            visible_text: span.visible_text(),
            text: span.text(),
        }
    }
}
