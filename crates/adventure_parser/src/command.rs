//! Parsed commands and interpreter responses.

use crate::tokenizer::InputTokenizer;

/// A verb word followed by its arguments, as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The first word, unresolved
    pub verb: String,
    /// Remaining words
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Splits a token list into verb and arguments. Empty input has no verb.
    #[must_use]
    pub fn from_tokens(tokens: &[String]) -> Option<Self> {
        let (verb, args) = tokens.split_first()?;
        Some(Self {
            verb: verb.clone(),
            args: args.to_vec(),
        })
    }

    /// Tokenizes and splits a raw line.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        Self::from_tokens(&InputTokenizer::tokenize(line))
    }
}

/// What the front-end should do after printing a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Read the next line.
    Continue,
    /// End the session.
    Exit,
}

/// Text to display, plus the session control signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// Text to print verbatim. May span several lines.
    pub text: String,
    /// Whether the session goes on.
    pub control: Control,
}

impl Response {
    /// A response that keeps the session going.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            control: Control::Continue,
        }
    }

    /// A response that ends the session.
    #[must_use]
    pub fn exit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            control: Control::Exit,
        }
    }

    /// True if the session should end.
    #[must_use]
    pub fn is_exit(&self) -> bool {
        self.control == Control::Exit
    }
}
