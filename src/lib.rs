//! Adventure - Single-player text exploration game
//!
//! This crate re-exports all layers of the Adventure system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: adventure_runtime    — REPL, line editor, banner, CLI
//! Layer 2: adventure_parser     — Tokenizer, verb vocabulary, interpreter
//! Layer 1: adventure_world      — Places, items, player, game rules
//! Layer 0: adventure_foundation — Core types (Error, NameMap)
//! ```

pub use adventure_foundation as foundation;
pub use adventure_parser as parser;
pub use adventure_runtime as runtime;
pub use adventure_world as world;
