//! Integration tests for Layer 2: Parser
//!
//! Tests for the command pipeline:
//! - Tokenization
//! - Verb and alias lookup
//! - Dispatch through the interpreter

mod tokenizer_tests;
mod vocabulary_tests;
