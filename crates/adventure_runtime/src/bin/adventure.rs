//! Adventure CLI entry point.

use std::env;
use std::process::ExitCode;

use adventure_foundation::{Error, Result};
use adventure_parser::Interpreter;
use adventure_runtime::{Repl, ReplConfig, init_logging};
use adventure_world::standard_world;
use tracing::info;

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    repl: ReplConfig,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31m{}\x1b[0m", render_error(&e));
            ExitCode::FAILURE
        }
    }
}

/// The error line, followed by its context when there is one.
fn render_error(error: &Error) -> String {
    match &error.context {
        Some(context) => format!("Error: {error}\n{context}"),
        None => format!("Error: {error}"),
    }
}

/// Takes the value following a flag.
fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| Error::invalid_argument(format!("{flag} requires a value")))
}

fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--no-banner" => config.repl = config.repl.with_banner(false),
            "--no-color" => config.repl = config.repl.with_color(false),
            "--prompt" => {
                let prompt = flag_value(args, &mut i, "--prompt")?;
                config.repl = config.repl.with_prompt(prompt);
            }
            "--history-size" => {
                let value = flag_value(args, &mut i, "--history-size")?;
                let size = value.parse().map_err(|_| {
                    Error::invalid_argument(format!("invalid --history-size value: {value}"))
                })?;
                config.repl = config.repl.with_history_size(size);
            }
            "--log" => {
                let filter = flag_value(args, &mut i, "--log")?;
                config.repl = config.repl.with_log_filter(filter);
            }
            arg => {
                return Err(Error::invalid_argument(format!("unknown option: {arg}")));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<()> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("adventure {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.repl.log_filter.as_deref())?;

    let state = standard_world()?;
    info!(places = state.catalog.len(), items = state.item_total(), "world loaded");

    let mut repl = Repl::new(Interpreter::new(state), config.repl)?;
    repl.run()
}

fn print_help() {
    println!(
        "\x1b[1mAdventure\x1b[0m - A small text adventure

\x1b[1mUSAGE:\x1b[0m
    adventure [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    --no-banner           Skip the startup logo
    --no-color            Disable ANSI colors
    --prompt TEXT         Use TEXT as the prompt (default \"▶ \")
    --history-size N      Keep at most N history entries (default 1000)
    --log LEVEL           Diagnostic filter, e.g. debug or adventure_world=trace
                          (default: RUST_LOG, else warn)

\x1b[1mCOMMANDS:\x1b[0m
    help, h               List the verbs
    look, l               Describe where you are
    walk, w PLACE...      Walk to adjacent places
    teleport PLACE        Jump to a visited place (needs the teleporter)
    take, t ITEM...       Pick items up
    drop, d ITEM...       Put carried items down
    use, u ITEM           Use a carried item
    items, i              Show what you carry
    exit                  Leave the game
    Ctrl+D                Leave the game
    Ctrl+C                Cancel the current line"
    );
}
