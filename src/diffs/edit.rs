use std::fmt::Debug;

use crate::tokenizer::token::Token;

/// A single-token step of an alignment between two token sequences. `Equal`
/// borrows the matched token from both sequences; the two compare equal but
/// their original text may differ.
#[derive(Debug, PartialEq)]
pub enum Edit<'a, T>
where
    T: PartialEq + Clone + Debug,
{
    Equal(&'a Token<T>, &'a Token<T>),
    Insert(&'a Token<T>),
    Delete(&'a Token<T>),
}
