//! Verb handlers and dispatch.
//!
//! The interpreter owns the [`GameState`] and is the only thing that
//! mutates it. Each command runs to completion before the next one is
//! accepted.
//!
//! Every handler returns `Result<Response>`, but no handler fails in
//! practice: refused actions and rejected hooks come back as ordinary
//! response text, so the front-end always just prints what it gets.

use adventure_foundation::Result;
use adventure_world::{GameState, messages, rules};
use tracing::debug;

use crate::command::{ParsedCommand, Response};
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::{Verb, VerbRegistry};

/// Signature shared by every verb handler.
pub type Handler = fn(&mut GameState, &VerbRegistry, &[String]) -> Result<Response>;

impl Verb {
    /// The handler bound to this verb.
    #[must_use]
    pub fn handler(self) -> Handler {
        match self {
            Verb::Drop => drop,
            Verb::Exit => exit,
            Verb::Help => help,
            Verb::Items => items,
            Verb::Look => look,
            Verb::Take => take,
            Verb::Teleport => teleport,
            Verb::Use => use_item,
            Verb::Walk => walk,
        }
    }
}

/// Executes commands against a game.
pub struct Interpreter {
    state: GameState,
    vocabulary: VerbRegistry,
}

impl Interpreter {
    /// Creates an interpreter with the standard vocabulary.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self::with_vocabulary(state, VerbRegistry::standard())
    }

    /// Creates an interpreter with a custom vocabulary.
    #[must_use]
    pub fn with_vocabulary(state: GameState, vocabulary: VerbRegistry) -> Self {
        Self { state, vocabulary }
    }

    /// The game being played.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The game being played, mutably.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// The verb table.
    #[must_use]
    pub fn vocabulary(&self) -> &VerbRegistry {
        &self.vocabulary
    }

    /// Tokenizes and executes one line.
    ///
    /// # Errors
    ///
    /// Propagates a handler error. The built-in handlers never return one.
    pub fn execute_line(&mut self, line: &str) -> Result<Response> {
        self.execute(&InputTokenizer::tokenize(line))
    }

    /// Executes a pre-split command: verb followed by arguments.
    ///
    /// Unknown verbs and empty input get the generic response and change
    /// nothing.
    ///
    /// # Errors
    ///
    /// Propagates a handler error. The built-in handlers never return one.
    pub fn execute(&mut self, tokens: &[String]) -> Result<Response> {
        let Some(command) = ParsedCommand::from_tokens(tokens) else {
            return generic();
        };

        let Some(verb) = self.vocabulary.lookup(&command.verb) else {
            debug!(word = %command.verb, "unknown verb");
            return generic();
        };

        debug!(%verb, args = ?command.args, "dispatching command");
        (verb.handler())(&mut self.state, &self.vocabulary, &command.args)
    }
}

#[allow(
    clippy::unnecessary_wraps,
    reason = "handlers return Result for consistency"
)]
fn generic() -> Result<Response> {
    Ok(Response::text(messages::GENERIC))
}

#[allow(
    clippy::unnecessary_wraps,
    reason = "handlers return Result for consistency"
)]
fn help(_state: &mut GameState, vocabulary: &VerbRegistry, _args: &[String]) -> Result<Response> {
    Ok(Response::text(format!(
        "{}{}",
        messages::CAN_PERFORM,
        vocabulary.names().join(", ")
    )))
}

#[allow(
    clippy::unnecessary_wraps,
    reason = "handlers return Result for consistency"
)]
fn items(state: &mut GameState, _vocabulary: &VerbRegistry, _args: &[String]) -> Result<Response> {
    if state.player.item_count() == 0 {
        return Ok(Response::text(messages::NOT_CARRYING_ANYTHING));
    }
    Ok(Response::text(format!(
        "{}{}",
        messages::CARRYING,
        state.player.describe_items()
    )))
}

#[allow(
    clippy::unnecessary_wraps,
    reason = "handlers return Result for consistency"
)]
fn look(state: &mut GameState, _vocabulary: &VerbRegistry, _args: &[String]) -> Result<Response> {
    let hook = state.current_place().on_look().cloned();

    let Some(hook) = hook else {
        return Ok(Response::text(state.current_place().describe()));
    };

    match hook(state) {
        Ok(text) => Ok(Response::text(format!(
            "{text}\n\n{}",
            state.current_place().describe()
        ))),
        Err(err) => Ok(Response::text(rules::hook_failure(
            "look",
            state.player.position(),
            &err,
        ))),
    }
}

/// Walks to each destination in turn. Naming the current place adds an
/// "already in" line and moves on to the next destination.
#[allow(
    clippy::unnecessary_wraps,
    reason = "handlers return Result for consistency"
)]
fn walk(state: &mut GameState, _vocabulary: &VerbRegistry, args: &[String]) -> Result<Response> {
    if args.is_empty() {
        return Ok(Response::text(messages::NEED_DESTINATION));
    }

    let mut lines = Vec::with_capacity(args.len());

    for destination in args {
        let target = destination.to_lowercase();
        let here = state.current_place();

        if here.name() == target {
            lines.push(format!("You are already in the {}", here.name()));
            continue;
        }

        lines.push(rules::move_to(state, &target));
    }

    if lines.is_empty() {
        return Ok(Response::text(messages::CANT_GO));
    }
    Ok(Response::text(lines.join("\n")))
}

#[allow(
    clippy::unnecessary_wraps,
    reason = "handlers return Result for consistency"
)]
fn teleport(state: &mut GameState, _vocabulary: &VerbRegistry, args: &[String]) -> Result<Response> {
    Ok(Response::text(rules::teleport(state, args)))
}

#[allow(
    clippy::unnecessary_wraps,
    reason = "handlers return Result for consistency"
)]
fn take(state: &mut GameState, _vocabulary: &VerbRegistry, args: &[String]) -> Result<Response> {
    Ok(Response::text(rules::take(state, args)))
}

#[allow(
    clippy::unnecessary_wraps,
    reason = "handlers return Result for consistency"
)]
fn drop(state: &mut GameState, _vocabulary: &VerbRegistry, args: &[String]) -> Result<Response> {
    Ok(Response::text(rules::drop(state, args)))
}

#[allow(
    clippy::unnecessary_wraps,
    reason = "handlers return Result for consistency"
)]
fn use_item(state: &mut GameState, _vocabulary: &VerbRegistry, args: &[String]) -> Result<Response> {
    Ok(Response::text(rules::use_item(state, args)))
}

#[allow(
    clippy::unnecessary_wraps,
    reason = "handlers return Result for consistency"
)]
fn exit(_state: &mut GameState, _vocabulary: &VerbRegistry, _args: &[String]) -> Result<Response> {
    debug!("exit requested");
    Ok(Response::exit(messages::GOODBYE))
}
