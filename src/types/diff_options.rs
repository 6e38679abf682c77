#[cfg(feature = "serde")]
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest alignment table (in cells) the LCS algorithm builds before
/// switching to Myers' algorithm. At 4 bytes per cell this is 100 MB.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 25_000_000;

/// The alignment algorithm used for computing a diff.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffAlgorithm {
    /// Dynamic-programming longest common subsequence with the
    /// prefer-removal tie-break. Quadratic memory.
    #[default]
    Lcs,

    /// Myers' O((N+M)D) algorithm with linear memory. Produces a minimal diff
    /// as well, but may align ties differently than `Lcs`.
    Myers,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    #[cfg_attr(feature = "serde", serde(default))]
    pub algorithm: DiffAlgorithm,

    /// Upper bound on the LCS table size; `None` means unbounded. Inputs above
    /// the bound are diffed with `DiffAlgorithm::Myers`.
    #[cfg_attr(feature = "serde", serde(default = "default_max_table_cells"))]
    pub max_table_cells: Option<usize>,

    /// Join consecutive segments of the same kind instead of emitting one
    /// segment per token.
    #[cfg_attr(feature = "serde", serde(default))]
    pub merge_adjacent: bool,
}

#[cfg(feature = "serde")]
#[allow(clippy::unnecessary_wraps)]
fn default_max_table_cells() -> Option<usize> {
    debug!("Using default max table cells: {DEFAULT_MAX_TABLE_CELLS}");
    Some(DEFAULT_MAX_TABLE_CELLS)
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::default(),
            max_table_cells: Some(DEFAULT_MAX_TABLE_CELLS),
            merge_adjacent: false,
        }
    }
}

impl DiffOptions {
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: DiffAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn with_max_table_cells(mut self, max_table_cells: Option<usize>) -> Self {
        self.max_table_cells = max_table_cells;
        self
    }

    #[must_use]
    pub fn with_merge_adjacent(mut self, merge_adjacent: bool) -> Self {
        self.merge_adjacent = merge_adjacent;
        self
    }
}
