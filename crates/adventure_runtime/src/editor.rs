//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`] so tests can script input and the
//! terminal backend stays swappable.

use std::borrow::Cow;

use adventure_foundation::{Error, Result};
use adventure_parser::VerbRegistry;
use rustyline::completion::{Completer, Pair};
use rustyline::config::ColorMode;
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

use crate::config::ReplConfig;
use crate::highlight::VerbHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set the words offered when completing arguments.
    fn set_keywords(&mut self, keywords: Vec<String>);
}

#[derive(Helper, Completer, Hinter, Validator)]
struct AdventureHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: VerbHighlighter,
}

impl Highlighter for AdventureHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;36m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes verbs in the first position and known names after it.
#[derive(Clone, Debug)]
pub(crate) struct CommandCompleter {
    verbs: Vec<String>,
    keywords: Vec<String>,
}

impl CommandCompleter {
    pub(crate) fn new(vocabulary: &VerbRegistry) -> Self {
        Self {
            verbs: vocabulary.names().into_iter().map(String::from).collect(),
            keywords: Vec::new(),
        }
    }

    /// Start of the word under the cursor and the words that extend it.
    pub(crate) fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let before = &line[..pos];
        let start = before
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        let word = &before[start..];

        let pool = if before[..start].trim().is_empty() {
            &self.verbs
        } else {
            &self.keywords
        };

        let matches = pool
            .iter()
            .filter(|candidate| candidate.starts_with(word))
            .cloned()
            .collect();
        (start, matches)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(line, pos);
        let pairs = matches
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, pairs))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<AdventureHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a rustyline-based editor for the given vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if the history size is rejected or the terminal
    /// cannot be initialized.
    pub fn new(config: &ReplConfig, vocabulary: &VerbRegistry) -> Result<Self> {
        let color_mode = if config.color {
            ColorMode::Enabled
        } else {
            ColorMode::Disabled
        };

        let rl_config = Config::builder()
            .auto_add_history(false)
            .max_history_size(config.history_size)
            .map_err(|e| Error::invalid_argument(format!("history size: {e}")))?
            .color_mode(color_mode)
            .build();

        let helper = AdventureHelper {
            completer: CommandCompleter::new(vocabulary),
            hinter: HistoryHinter::new(),
            highlighter: VerbHighlighter::for_vocabulary(vocabulary),
        };

        let mut editor =
            Editor::with_config(rl_config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(ReadlineError::Io(e)) => Err(e.into()),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.keywords = keywords;
        }
    }
}
