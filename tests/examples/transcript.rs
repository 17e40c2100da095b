//! Sessions driven through the REPL with a scripted editor.

use std::collections::VecDeque;

use adventure_foundation::Result;
use adventure_parser::Interpreter;
use adventure_runtime::{LineEditor, ReadResult, Repl, ReplConfig};
use adventure_world::standard_world;

struct Script {
    lines: VecDeque<String>,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| (*l).to_string()).collect(),
        }
    }
}

impl LineEditor for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.pop_front().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn session(lines: &[&str], config: ReplConfig) -> String {
    let interpreter = Interpreter::new(standard_world().unwrap());
    let mut repl = Repl::with_editor(Script::new(lines), interpreter, config);
    let mut out = Vec::new();
    repl.run_with(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn short_session() {
    let out = session(
        &["help", "dance", "w lake", "i", "exit", "look"],
        ReplConfig::plain(),
    );
    assert_eq!(
        out,
        "You can perform the following commands:\n\
         drop, exit, help, items, look, take, teleport, use, walk\n\
         You don’t know how to do that.\n\
         You walked to the lake\n\
         You are not carrying anything.\n\
         Good bye! Player 1\n"
    );
}

#[test]
fn colored_banner_then_game() {
    let out = session(&["exit"], ReplConfig::default());
    assert!(out.starts_with("\x1b[36m"));
    assert!(out.contains("Adventure!"));
    assert!(out.ends_with("Good bye! Player 1\n"));
}

#[test]
fn end_of_input_without_exit() {
    let out = session(&["walk forest"], ReplConfig::plain());
    assert_eq!(out, "You walked to the forest\n\n");
}
