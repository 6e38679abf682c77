use token::Token;

pub mod token;
pub mod word_tokenizer;

/// A tokenizer takes a string and returns the list of tokens the diff is
/// computed over. Concatenating the original form of the returned tokens must
/// reproduce the input.
pub type Tokenizer<T> = dyn Fn(&str) -> Vec<Token<T>>;
