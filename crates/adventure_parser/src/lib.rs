//! Command interpreter for Adventure.
//!
//! This crate turns a typed line like "walk forest lake" into a state
//! change and a response for the terminal to print.
//!
//! # Architecture
//!
//! ```text
//! "walk forest lake"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["walk", "forest", "lake"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → Verb::Walk   ("w" resolves the same way)
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ HANDLER         │  → rules::move_to per destination
//! │ DISPATCH        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RESPONSE        │  → "You walked to the forest\nYou are not next to ..."
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Split raw input into words
//! - [`vocabulary`] - Verbs, their single-letter aliases, and lookup
//! - [`command`] - Parsed commands and interpreter responses
//! - [`interpreter`] - Verb handlers and dispatch

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod interpreter;
pub mod tokenizer;
pub mod vocabulary;

// Re-export main types for convenience
pub use command::{Control, ParsedCommand, Response};
pub use interpreter::Interpreter;
pub use tokenizer::InputTokenizer;
pub use vocabulary::{Verb, VerbRegistry};
