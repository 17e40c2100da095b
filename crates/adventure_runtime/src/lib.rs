//! REPL and CLI for the adventure game.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop over an [`Interpreter`]
//! - [`LineEditor`] - Swappable line editing, backed by rustyline
//! - [`ReplConfig`] - Front-end settings populated from CLI flags
//! - [`init_logging`] - `tracing` subscriber setup for the binary
//!
//! [`Interpreter`]: adventure_parser::Interpreter

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod banner;
pub mod config;
pub mod editor;
pub mod highlight;
pub mod logging;
pub mod repl;

pub use config::ReplConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::VerbHighlighter;
pub use logging::init_logging;
pub use repl::Repl;
