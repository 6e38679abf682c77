//! Myers' diff algorithm, following the linear-space divide-and-conquer
//! refinement of [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf).
//! The structure is based on the implementation in
//! [similar](https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/myers.rs).
//!
//! * time: `O((N+M)D)`
//! * space: `O(N+M)`
//!
//! Used for inputs whose LCS table would not fit in memory. No heuristics are
//! applied, so two large and completely distinct inputs still cost `O(NM)`
//! time.

use std::{
    fmt::Debug,
    ops::{Index, IndexMut, Range},
};

use super::edit::Edit;
use crate::{
    tokenizer::token::Token,
    utils::{common_prefix_len::common_prefix_len, common_suffix_len::common_suffix_len},
};

/// Myers' diff of `old` and `new`, one `Edit` per token.
pub fn diff<'a, T>(old: &'a [Token<T>], new: &'a [Token<T>]) -> Vec<Edit<'a, T>>
where
    T: PartialEq + Clone + Debug,
{
    let max_d = max_d(old.len(), new.len());
    let mut vf = V::new(max_d);
    let mut vb = V::new(max_d);
    let mut result = Vec::with_capacity(old.len() + new.len());

    conquer(
        old,
        0..old.len(),
        new,
        0..new.len(),
        &mut vf,
        &mut vb,
        &mut result,
    );

    result
}

fn max_d(old_len: usize, new_len: usize) -> usize { (old_len + new_len).div_ceil(2) + 1 }

// A D-path is a path which starts at (0,0) that has exactly D non-diagonal
// edges. All D-paths consist of a (D - 1)-path followed by a non-diagonal edge
// and then a possibly empty sequence of diagonal edges called a snake.

/// Endpoints of the furthest reaching D-paths. `v[k]` holds the x coordinate
/// of the endpoint on diagonal `k`; y follows from `x - k`. Diagonals can be
/// negative so the index is shifted by `offset`.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: isize::try_from(max_d).unwrap_or(isize::MAX),
            v: vec![0; 2 * max_d + 1],
        }
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, index: isize) -> &Self::Output { &self.v[slot(index, self.offset)] }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        &mut self.v[slot(index, self.offset)]
    }
}

/// Position of diagonal `index` in the backing vector.
fn slot(index: isize, offset: isize) -> usize { usize::try_from(index + offset).unwrap_or(usize::MAX) }

/// The y coordinate of the point at `x` on diagonal `k`.
fn y_on_diagonal(x: usize, k: isize) -> usize {
    usize::try_from(isize::try_from(x).unwrap_or(isize::MAX) - k).unwrap_or(0)
}

/// Find the start of the middle snake of an optimal path from the top-left to
/// the bottom-right of the given ranges by running the search from both
/// corners at once until the two frontiers overlap.
fn find_middle_snake<T>(
    old: &[Token<T>],
    old_range: Range<usize>,
    new: &[Token<T>],
    new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
) -> Option<(usize, usize)>
where
    T: PartialEq + Clone + Debug,
{
    let n = old_range.len();
    let m = new_range.len();

    // The parity of the optimal edit script length equals the parity of delta.
    let delta = isize::try_from(n).unwrap_or(isize::MAX) - isize::try_from(m).unwrap_or(isize::MAX);
    let odd = delta & 1 == 1;

    vf[1] = 0;
    vb[1] = 0;

    let d_max = isize::try_from(max_d(n, m)).unwrap_or(isize::MAX);
    for d in 0..d_max {
        // Forward
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = y_on_diagonal(x, k);

            let (x0, y0) = (x, y);
            if x < n && y < m {
                x += common_prefix_len(
                    old,
                    old_range.start + x..old_range.end,
                    new,
                    new_range.start + y..new_range.end,
                );
            }

            vf[k] = x;

            if odd && (k - delta).abs() <= d - 1 && vf[k] + vb[-(k - delta)] >= n {
                return Some((x0 + old_range.start, y0 + new_range.start));
            }
        }

        // Backward
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = y_on_diagonal(x, k);

            if x < n && y < m {
                let advance = common_suffix_len(
                    old,
                    old_range.start..old_range.start + n - x,
                    new,
                    new_range.start..new_range.start + m - y,
                );
                x += advance;
                y += advance;
            }

            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                return Some((n - x + old_range.start, m - y + new_range.start));
            }
        }
    }

    None
}

fn conquer<'a, T>(
    old: &'a [Token<T>],
    mut old_range: Range<usize>,
    new: &'a [Token<T>],
    mut new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    result: &mut Vec<Edit<'a, T>>,
) where
    T: PartialEq + Clone + Debug,
{
    let common_prefix_len = common_prefix_len(old, old_range.clone(), new, new_range.clone());
    result.extend(
        old[old_range.start..old_range.start + common_prefix_len]
            .iter()
            .zip(&new[new_range.start..])
            .map(|(old_token, new_token)| Edit::Equal(old_token, new_token)),
    );
    old_range.start += common_prefix_len;
    new_range.start += common_prefix_len;

    let common_suffix_len = common_suffix_len(old, old_range.clone(), new, new_range.clone());
    let common_suffix_start = old_range.end - common_suffix_len;
    let new_suffix_start = new_range.end - common_suffix_len;
    old_range.end -= common_suffix_len;
    new_range.end -= common_suffix_len;

    if old_range.is_empty() || new_range.is_empty() {
        result.extend(old[old_range].iter().map(Edit::Delete));
        result.extend(new[new_range].iter().map(Edit::Insert));
    } else if let Some((x_start, y_start)) =
        find_middle_snake(old, old_range.clone(), new, new_range.clone(), vf, vb)
    {
        conquer(
            old,
            old_range.start..x_start,
            new,
            new_range.start..y_start,
            vf,
            vb,
            result,
        );
        conquer(
            old,
            x_start..old_range.end,
            new,
            y_start..new_range.end,
            vf,
            vb,
            result,
        );
    } else {
        result.extend(old[old_range].iter().map(Edit::Delete));
        result.extend(new[new_range].iter().map(Edit::Insert));
    }

    result.extend(
        old[common_suffix_start..common_suffix_start + common_suffix_len]
            .iter()
            .zip(&new[new_suffix_start..])
            .map(|(old_token, new_token)| Edit::Equal(old_token, new_token)),
    );
}
