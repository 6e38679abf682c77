use std::fmt::Debug;

use edit::Edit;
use log::debug;

use crate::{
    tokenizer::token::Token,
    types::diff_options::{DiffAlgorithm, DiffOptions},
};

pub mod edit;
pub mod lcs;
pub mod myers;

/// Align `old` and `new` with the algorithm selected by `options`, falling
/// back to Myers' algorithm when the LCS table would be too large.
pub fn diff<'a, T>(old: &'a [Token<T>], new: &'a [Token<T>], options: &DiffOptions) -> Vec<Edit<'a, T>>
where
    T: PartialEq + Clone + Debug,
{
    match options.algorithm {
        DiffAlgorithm::Myers => myers::diff(old, new),
        DiffAlgorithm::Lcs => {
            let cells = lcs::table_cells(old, new);
            match options.max_table_cells {
                Some(max_cells) if cells > max_cells => {
                    debug!(
                        "LCS table of {cells} cells exceeds the limit of {max_cells}, using Myers' \
                         algorithm for {} x {} tokens",
                        old.len(),
                        new.len()
                    );
                    myers::diff(old, new)
                }
                _ => lcs::diff(old, new),
            }
        }
    }
}
