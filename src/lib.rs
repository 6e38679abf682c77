//! Word-level diffing of two versions of a text, built for reviewing edits to
//! job descriptions.
//!
//! The texts are split into alternating runs of whitespace and
//! non-whitespace, aligned by their longest common subsequence, and returned
//! as a sequence of unchanged, added, and removed `DiffSegment`-s that can be
//! drawn on an "original" and a "current" pane.

mod comparison;
mod diff;
mod diffs;
mod render;
mod tokenizer;
mod types;
mod utils;

pub use comparison::{
    FieldComparison, FieldContent, JobDescriptionVersion, VersionComparison, compare_fields,
    compare_versions,
};
pub use diff::{
    compute_diff, compute_diff_with_options, compute_diff_with_tokenizer, compute_list_diff,
    compute_list_diff_with_options,
};
pub use render::{RenderOptions, render_pane};
pub use tokenizer::{Tokenizer, token::Token, word_tokenizer::word_tokenizer};
pub use types::{
    diff_options::{DEFAULT_MAX_TABLE_CELLS, DiffAlgorithm, DiffOptions},
    diff_segment::{DiffSegment, current_text, merge_adjacent, original_text},
    diff_stats::DiffStats,
    rendered_span::{Pane, RenderedSpan, SpanStyle},
    segment_kind::SegmentKind,
};

#[cfg(feature = "wasm")]
pub mod wasm;
