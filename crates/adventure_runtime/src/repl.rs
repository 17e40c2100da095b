//! The interactive shell.

use std::io::{self, Write};

use adventure_foundation::{Error, Result};
use adventure_parser::{Interpreter, Response};
use adventure_world::GameState;
use tracing::debug;

use crate::banner;
use crate::config::ReplConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Reads commands, runs them, prints what comes back.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Owns the game being played.
    interpreter: Interpreter,

    config: ReplConfig,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(interpreter: Interpreter, config: ReplConfig) -> Result<Self> {
        let editor = RustylineEditor::new(&config, interpreter.vocabulary())?;
        Ok(Self::with_editor(editor, interpreter, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    ///
    /// Argument completion is seeded with every place and item name.
    pub fn with_editor(mut editor: E, interpreter: Interpreter, config: ReplConfig) -> Self {
        editor.set_keywords(known_names(interpreter.state()));
        Self {
            editor,
            interpreter,
            config,
        }
    }

    /// The interpreter, and through it the game state.
    #[must_use]
    pub const fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Runs the loop on stdout until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Runs the loop, writing game text to `out`.
    ///
    /// Ctrl+C abandons the current line. Errors from a single command are
    /// reported on stderr and the session goes on.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run_with<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.config.show_banner {
            out.write_all(banner::render(self.config.color).as_bytes())?;
            out.flush()?;
        }

        loop {
            let line = match self.editor.read_line(&self.config.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    debug!("input interrupted");
                    continue;
                }
                ReadResult::Eof => {
                    writeln!(out)?;
                    break;
                }
            };

            if !self.read_eval_print(&line, out)? {
                break;
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Handles one line. Returns `Ok(false)` once the session should end.
    fn read_eval_print<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        if line.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(line);

        match self.eval(line) {
            Ok(response) => {
                writeln!(out, "{}", response.text)?;
                out.flush()?;
                Ok(!response.is_exit())
            }
            Err(e) => {
                self.print_error(&e);
                Ok(true)
            }
        }
    }

    /// Executes one command line without printing.
    ///
    /// # Errors
    ///
    /// Propagates an interpreter error.
    pub fn eval(&mut self, line: &str) -> Result<Response> {
        self.interpreter.execute_line(line)
    }

    fn print_error(&self, error: &Error) {
        if self.config.color {
            eprintln!("\x1b[31mError: {error}\x1b[0m");
        } else {
            eprintln!("Error: {error}");
        }
    }
}

/// Place and item names from anywhere in the world, sorted and deduplicated.
fn known_names(state: &GameState) -> Vec<String> {
    let mut names: Vec<String> = state
        .catalog
        .place_names()
        .into_iter()
        .map(String::from)
        .collect();

    let places = state
        .catalog
        .places()
        .chain(std::iter::once(state.catalog.void()));
    for place in places {
        names.extend(place.items().names().map(String::from));
    }
    names.extend(state.player.items().names().map(String::from));

    names.sort_unstable();
    names.dedup();
    names
}
