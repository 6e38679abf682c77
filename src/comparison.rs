use std::{borrow::Cow, collections::BTreeMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    compute_diff_with_options,
    types::{diff_options::DiffOptions, diff_segment::DiffSegment, diff_stats::DiffStats},
    utils::join_items::join_items,
};

/// Value of a single job-description field: free text, or a list of items
/// such as essential functions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldContent {
    Text(String),
    List(Vec<String>),
}

impl FieldContent {
    /// The text the diff runs on; lists are joined with newlines.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldContent::Text(text) => Cow::Borrowed(text),
            FieldContent::List(items) => Cow::Owned(join_items(items)),
        }
    }
}

impl Default for FieldContent {
    fn default() -> Self { FieldContent::Text(String::new()) }
}

impl From<&str> for FieldContent {
    fn from(text: &str) -> Self { FieldContent::Text(text.to_owned()) }
}

impl From<Vec<String>> for FieldContent {
    fn from(items: Vec<String>) -> Self { FieldContent::List(items) }
}

/// One saved version of a job description.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobDescriptionVersion {
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub version: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: BTreeMap<String, FieldContent>,
}

impl JobDescriptionVersion {
    #[must_use]
    pub fn with_field(mut self, name: &str, content: impl Into<FieldContent>) -> Self {
        self.fields.insert(name.to_owned(), content.into());
        self
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldComparison {
    pub name: String,
    pub segments: Vec<DiffSegment>,
    pub stats: DiffStats,
}

impl FieldComparison {
    #[must_use]
    pub fn has_changes(&self) -> bool { self.stats.has_changes() }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionComparison {
    /// Every field present in either version, ordered by name.
    pub fields: Vec<FieldComparison>,
    pub stats: DiffStats,
}

impl VersionComparison {
    pub fn changed_fields(&self) -> impl Iterator<Item = &FieldComparison> {
        self.fields.iter().filter(|field| field.has_changes())
    }

    #[must_use]
    pub fn has_changes(&self) -> bool { self.stats.has_changes() }
}

/// Diff one field. A field missing from either side compares as empty text.
#[must_use]
pub fn compare_fields(
    name: &str,
    original: Option<&FieldContent>,
    current: Option<&FieldContent>,
    options: &DiffOptions,
) -> FieldComparison {
    let original = original.map(FieldContent::as_text).unwrap_or_default();
    let current = current.map(FieldContent::as_text).unwrap_or_default();

    let segments = compute_diff_with_options(&original, &current, options);
    let stats = DiffStats::from_segments(&segments);

    FieldComparison {
        name: name.to_owned(),
        segments,
        stats,
    }
}

/// Diff every field of two versions of a job description.
#[must_use]
pub fn compare_versions(
    original: &JobDescriptionVersion,
    current: &JobDescriptionVersion,
    options: &DiffOptions,
) -> VersionComparison {
    let mut names: Vec<&String> = original.fields.keys().chain(current.fields.keys()).collect();
    names.sort();
    names.dedup();

    let mut comparison = VersionComparison::default();
    for name in names {
        let field = compare_fields(
            name,
            original.fields.get(name),
            current.fields.get(name),
            options,
        );
        comparison.stats += field.stats;
        comparison.fields.push(field);
    }

    comparison
}
