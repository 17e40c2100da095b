//! Tokenizer tests.

use adventure_parser::{InputTokenizer, ParsedCommand};

#[test]
fn splits_on_any_whitespace() {
    assert_eq!(
        InputTokenizer::tokenize("  walk\tforest \n lake "),
        vec!["walk", "forest", "lake"]
    );
}

#[test]
fn keeps_case_and_punctuation() {
    assert_eq!(InputTokenizer::tokenize("Take MAP!"), vec!["Take", "MAP!"]);
}

#[test]
fn empty_input_has_no_tokens() {
    assert!(InputTokenizer::tokenize("").is_empty());
    assert!(InputTokenizer::tokenize("   ").is_empty());
}

#[test]
fn parsed_command_splits_verb() {
    let command = ParsedCommand::parse("drop coin torch").unwrap();
    assert_eq!(command.verb, "drop");
    assert_eq!(command.args, vec!["coin", "torch"]);

    let bare = ParsedCommand::parse("look").unwrap();
    assert!(bare.args.is_empty());
}
