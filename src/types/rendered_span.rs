#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which side of a side-by-side comparison is being drawn.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Original,
    Current,
}

/// How a presentation layer should draw a `RenderedSpan`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    /// Regular text.
    Plain,
    /// Struck through, only ever on the original pane.
    Deleted,
    /// Highlighted as new, only ever on the current pane.
    Inserted,
    /// Invisible text taking up the same room as `text`, keeping the original
    /// pane aligned with insertions made on the current pane.
    Placeholder,
}

/// A piece of text with the style it should be drawn with.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSpan {
    style: SpanStyle,
    text: String,
}

impl RenderedSpan {
    #[must_use]
    pub fn new(style: SpanStyle, text: String) -> Self { RenderedSpan { style, text } }

    #[must_use]
    pub fn style(&self) -> SpanStyle { self.style }

    #[must_use]
    pub fn text(&self) -> String { self.text.clone() }

    /// The text as it should appear on screen: placeholders are blanked out
    /// character by character, keeping line breaks and tabs so the layout
    /// matches.
    #[must_use]
    pub fn visible_text(&self) -> String {
        match self.style {
            SpanStyle::Placeholder => self
                .text
                .chars()
                .map(|c| if c.is_whitespace() { c } else { ' ' })
                .collect(),
            _ => self.text.clone(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.text }
}
