use std::fmt::Debug;

use crate::{
    Tokenizer, diffs,
    tokenizer::word_tokenizer::word_tokenizer,
    types::{
        diff_options::DiffOptions,
        diff_segment::{DiffSegment, merge_adjacent},
    },
    utils::join_items::join_items,
};

/// Compare an `original` and a `current` text word by word.
///
/// Both inputs are split into alternating runs of whitespace and
/// non-whitespace, aligned by their longest common subsequence, and every
/// token is returned as an unchanged, added, or removed `DiffSegment`.
/// Any pair of strings is valid input and the result is deterministic.
///
/// ```
/// use revision_diff::{DiffSegment, compute_diff, current_text, original_text};
///
/// let segments = compute_diff("Monitor Patient Vitals.", "Monitor Vital Signs.");
///
/// assert_eq!(segments[0], DiffSegment::unchanged("Monitor"));
/// assert_eq!(original_text(&segments), "Monitor Patient Vitals.");
/// assert_eq!(current_text(&segments), "Monitor Vital Signs.");
/// ```
#[must_use]
pub fn compute_diff(original: &str, current: &str) -> Vec<DiffSegment> {
    compute_diff_with_options(original, current, &DiffOptions::default())
}

/// Same as `compute_diff` but with explicit `DiffOptions`.
#[must_use]
pub fn compute_diff_with_options(
    original: &str,
    current: &str,
    options: &DiffOptions,
) -> Vec<DiffSegment> {
    compute_diff_with_tokenizer(original, current, &word_tokenizer, options)
}

/// Same as `compute_diff_with_options` but splitting the inputs with a custom
/// `tokenizer`. Tokens are matched by their normalized form; matched tokens
/// whose text differs between the two sides are reported as an addition and
/// a removal, so both inputs can always be rebuilt from the result.
#[must_use]
pub fn compute_diff_with_tokenizer<T>(
    original: &str,
    current: &str,
    tokenizer: &Tokenizer<T>,
    options: &DiffOptions,
) -> Vec<DiffSegment>
where
    T: PartialEq + Clone + Debug,
{
    let original_tokens = tokenizer(original);
    let current_tokens = tokenizer(current);

    let segments = DiffSegment::from_edits(diffs::diff(&original_tokens, &current_tokens, options));

    if options.merge_adjacent {
        merge_adjacent(segments)
    } else {
        segments
    }
}

/// Compare two lists of items, such as numbered responsibilities, by joining
/// each with newlines and diffing the result like free text.
///
/// ```
/// use revision_diff::{DiffSegment, compute_list_diff};
///
/// let segments = compute_list_diff(&["Record vitals"], &["Record vitals", "Update chart"]);
///
/// assert_eq!(segments.last(), Some(&DiffSegment::added("chart")));
/// ```
#[must_use]
pub fn compute_list_diff<S>(original: &[S], current: &[S]) -> Vec<DiffSegment>
where
    S: AsRef<str>,
{
    compute_list_diff_with_options(original, current, &DiffOptions::default())
}

#[must_use]
pub fn compute_list_diff_with_options<S>(
    original: &[S],
    current: &[S],
    options: &DiffOptions,
) -> Vec<DiffSegment>
where
    S: AsRef<str>,
{
    compute_diff_with_options(&join_items(original), &join_items(current), options)
}
