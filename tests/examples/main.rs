//! End-to-end sessions.
//!
//! Each test plays a sequence of typed commands through the interpreter or
//! the REPL and checks the exact transcript.

mod playthrough;
mod transcript;
