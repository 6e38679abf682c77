//! Longest common subsequence diff.
//!
//! * time: `O(NM)`
//! * space: `O(NM)`
//!
//! The table is filled front to back and the alignment is read by walking it
//! back from the bottom-right corner. Whenever dropping a token from either
//! side keeps the same LCS length, the old token is dropped first. As the walk
//! runs from the end, a replaced region therefore reads as its insertions
//! followed by its removals.
use std::fmt::Debug;

use super::edit::Edit;
use crate::{tokenizer::token::Token, utils::common_suffix_len::common_suffix_len};

/// LCS diff of `old` and `new`, one `Edit` per token.
pub fn diff<'a, T>(old: &'a [Token<T>], new: &'a [Token<T>]) -> Vec<Edit<'a, T>>
where
    T: PartialEq + Clone + Debug,
{
    // The walk back from (m, n) takes the diagonal for as long as the tails
    // match, so the common suffix never needs to be part of the table.
    let common_suffix_len = common_suffix_len(old, 0..old.len(), new, 0..new.len());
    let old_len = old.len() - common_suffix_len;
    let new_len = new.len() - common_suffix_len;

    let table = Table::new(&old[..old_len], &new[..new_len]);

    let mut result = Vec::with_capacity(old.len() + new.len());
    result.extend(
        old[old_len..]
            .iter()
            .zip(&new[new_len..])
            .rev()
            .map(|(old_token, new_token)| Edit::Equal(old_token, new_token)),
    );

    let (mut i, mut j) = (old_len, new_len);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            result.push(Edit::Equal(&old[i - 1], &new[j - 1]));
            i -= 1;
            j -= 1;
        } else if i > 0 && (j == 0 || table.get(i - 1, j) >= table.get(i, j - 1)) {
            result.push(Edit::Delete(&old[i - 1]));
            i -= 1;
        } else {
            result.push(Edit::Insert(&new[j - 1]));
            j -= 1;
        }
    }

    result.reverse();
    result
}

/// Number of cells the table for `old` and `new` would have if no common
/// suffix could be skipped.
pub fn table_cells<T>(old: &[Token<T>], new: &[Token<T>]) -> usize
where
    T: PartialEq + Clone + Debug,
{
    (old.len() + 1).saturating_mul(new.len() + 1)
}

/// `(m + 1) x (n + 1)` matrix where `get(i, j)` is the length of the LCS of
/// `old[..i]` and `new[..j]`, stored row-major in a flat vector.
#[derive(Debug)]
struct Table {
    width: usize,
    cells: Vec<u32>,
}

impl Table {
    fn new<T>(old: &[Token<T>], new: &[Token<T>]) -> Self
    where
        T: PartialEq + Clone + Debug,
    {
        let width = new.len() + 1;
        let mut cells = vec![0; (old.len() + 1) * width];

        for i in 1..=old.len() {
            for j in 1..=new.len() {
                cells[i * width + j] = if old[i - 1] == new[j - 1] {
                    cells[(i - 1) * width + j - 1] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + j - 1])
                };
            }
        }

        Table { width, cells }
    }

    fn get(&self, i: usize, j: usize) -> u32 { self.cells[i * self.width + j] }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::word_tokenizer;

    fn tokens(items: &[&str]) -> Vec<Token<String>> { items.iter().map(|&item| item.into()).collect() }

    fn render<T>(edits: &[Edit<'_, T>]) -> Vec<String>
    where
        T: PartialEq + Clone + Debug,
    {
        edits
            .iter()
            .map(|edit| match edit {
                Edit::Equal(token, _) => format!("={}", token.original()),
                Edit::Insert(token) => format!("+{}", token.original()),
                Edit::Delete(token) => format!("-{}", token.original()),
            })
            .collect()
    }

    /// Plain textbook version without skipping the common suffix.
    fn reference_diff<'a>(old: &'a [Token<String>], new: &'a [Token<String>]) -> Vec<Edit<'a, String>> {
        let table = Table::new(old, new);
        let mut result = Vec::new();
        let (mut i, mut j) = (old.len(), new.len());
        while i > 0 || j > 0 {
            if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
                result.push(Edit::Equal(&old[i - 1], &new[j - 1]));
                i -= 1;
                j -= 1;
            } else if i > 0 && (j == 0 || table.get(i - 1, j) >= table.get(i, j - 1)) {
                result.push(Edit::Delete(&old[i - 1]));
                i -= 1;
            } else {
                result.push(Edit::Insert(&new[j - 1]));
                j -= 1;
            }
        }
        result.reverse();
        result
    }

    #[test]
    fn test_table() {
        let table = Table::new(&tokens(&["a", "b", "c"]), &tokens(&["b", "c", "d"]));

        assert_eq!(table.width, 4);
        assert_eq!(table.cells, vec![
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 1, 1, 1, //
            0, 1, 2, 2, //
        ]);
    }

    #[test]
    fn test_empty_examples() {
        assert_eq!(render(&diff::<String>(&[], &[])), Vec::<String>::new());
        assert_eq!(render(&diff(&tokens(&["a"]), &[])), vec!["-a"]);
        assert_eq!(render(&diff(&[], &tokens(&["a"]))), vec!["+a"]);
    }

    #[test]
    fn test_tie_prefers_removal() {
        assert_eq!(render(&diff(&tokens(&["a"]), &tokens(&["b"]))), vec!["+b", "-a"]);
        assert_eq!(
            render(&diff(&word_tokenizer("X Y"), &word_tokenizer("Y X"))),
            vec!["+Y", "+ ", "=X", "- ", "-Y"]
        );
    }

    #[test]
    fn test_replacement_in_the_middle() {
        assert_eq!(
            render(&diff(
                &word_tokenizer("Monitor Patient Vitals."),
                &word_tokenizer("Monitor Vital Signs.")
            )),
            vec![
                "=Monitor", "= ", "+Vital", "-Patient", "= ", "+Signs.", "-Vitals."
            ]
        );
    }

    #[test]
    fn test_skipping_the_suffix_matches_the_full_table() {
        let cases = [
            ("a b c", "a c"),
            ("a", "a a"),
            ("a a", "a"),
            ("x a b", "a b"),
            ("the nurse and the aide", "the aide and the nurse"),
            ("one\ntwo\nthree", "zero\none\nthree"),
            ("a  b", "a b"),
            ("", "a b"),
            ("same", "same"),
        ];

        for (old, new) in cases {
            let old = word_tokenizer(old);
            let new = word_tokenizer(new);
            assert_eq!(diff(&old, &new), reference_diff(&old, &new), "{old:?} -> {new:?}");
        }
    }

    #[test]
    fn test_table_cells() {
        assert_eq!(table_cells::<String>(&[], &[]), 1);
        assert_eq!(table_cells(&tokens(&["a", "b"]), &tokens(&["c"])), 6);
    }
}
