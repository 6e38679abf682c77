use core::ops::{Index, Range};

/// Number of trailing positions at which `old[old_range]` and `new[new_range]`
/// hold equal elements.
pub fn common_suffix_len<Old, New>(
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
) -> usize
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    New::Output: PartialEq<Old::Output>,
{
    new_range
        .rev()
        .zip(old_range.rev())
        .take_while(|&(new_index, old_index)| new[new_index] == old[old_index])
        .count()
}
