//! Command line highlighting.
//!
//! The first word is shown bold green when it names a verb and red when it
//! does not. Arguments are left alone.

use std::borrow::Cow;
use std::collections::HashSet;

use adventure_parser::VerbRegistry;

const VERB: &str = "\x1b[1;32m";
const UNKNOWN: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// ANSI highlighter for typed commands.
#[derive(Clone, Debug)]
pub struct VerbHighlighter {
    verbs: HashSet<String>,
}

impl VerbHighlighter {
    /// Creates a highlighter that recognizes every word of the standard
    /// vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::for_vocabulary(&VerbRegistry::standard())
    }

    /// Creates a highlighter for a specific vocabulary.
    #[must_use]
    pub fn for_vocabulary(vocabulary: &VerbRegistry) -> Self {
        Self {
            verbs: vocabulary.words().into_iter().map(String::from).collect(),
        }
    }

    /// True if `word` would dispatch to a verb.
    #[must_use]
    pub fn is_verb(&self, word: &str) -> bool {
        self.verbs.contains(word)
    }

    /// Colors the verb position of `line`.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let leading = line.len() - line.trim_start().len();
        let rest = &line[leading..];
        if rest.is_empty() {
            return Cow::Borrowed(line);
        }

        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (word, tail) = rest.split_at(end);
        let color = if self.is_verb(word) { VERB } else { UNKNOWN };

        let mut result = String::with_capacity(line.len() + 12);
        result.push_str(&line[..leading]);
        result.push_str(color);
        result.push_str(word);
        result.push_str(RESET);
        result.push_str(tail);
        Cow::Owned(result)
    }
}

impl Default for VerbHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
