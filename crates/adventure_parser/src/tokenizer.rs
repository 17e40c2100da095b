//! Input tokenization.
//!
//! Splits a raw line on whitespace. Case is preserved: verbs are matched
//! exactly, and only destination names are lower-cased later on.

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Splits input into words on any Unicode whitespace.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        input.split_whitespace().map(str::to_string).collect()
    }
}
