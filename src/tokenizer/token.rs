use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A token is the unit of comparison of the diff.
///
/// A token consists of the normalized form used for comparison, and the
/// original string that ends up in the emitted `DiffSegment`-s.
///
/// It's UTF-8 compatible.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Token<T>
where
    T: PartialEq + Clone + Debug,
{
    /// The normalized form of the token used for deriving the diff.
    normalized: T,

    /// The original string, as it appears in the compared text.
    original: String,
}

/// Trivial implementation of Token when the normalized form is the same as the
/// original string.
impl From<&str> for Token<String> {
    fn from(text: &str) -> Self { Token::new(text.to_owned(), text.to_owned()) }
}

impl<T> Token<T>
where
    T: PartialEq + Clone + Debug,
{
    #[must_use]
    pub fn new(normalized: T, original: String) -> Self {
        Token {
            normalized,
            original,
        }
    }

    #[must_use]
    pub fn original(&self) -> &str { &self.original }

}

impl<T> PartialEq for Token<T>
where
    T: PartialEq + Clone + Debug,
{
    fn eq(&self, other: &Self) -> bool { self.normalized == other.normalized }
}
