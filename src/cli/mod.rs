//! CLI argument parsing for xts.
//!
//! The static part of the grammar (`-h/--help` and a `COMMAND` positional)
//! is declared with clap derive. The set of legal `COMMAND` values is not
//! known until a config is loaded, so [`command_grammar`] attaches it at
//! run time from the document's top-level keys.

use crate::config::{CommandSpec, ConfigDocument};
use crate::error::{Result, XtsError};
use clap::builder::{PossibleValue, PossibleValuesParser};
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};

/// Program name used in usage lines and hints.
pub const PROGRAM: &str = "xts";

/// Id of the `COMMAND` positional.
pub const COMMAND_ARG: &str = "command";

/// Top-level arguments that precede the command name.
///
/// Commands are read from an `.xts` file. When no file is named, the single
/// `.xts` file in the current directory is used.
#[derive(Parser, Debug)]
#[command(name = "xts")]
#[command(override_usage = "xts [CONFIG.xts] <COMMAND> [ARGS]...")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct TopLevel {
    /// Show the help information.
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// The command to run.
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,
}

/// True for the flags that request help at any level.
pub fn is_help_flag(arg: &str) -> bool {
    arg == "-h" || arg == "--help"
}

/// Build the top-level grammar for `document`.
///
/// `COMMAND` accepts exactly the document's top-level keys, in document
/// order, each carrying its `description` as help text.
pub fn command_grammar(document: &ConfigDocument) -> clap::Command {
    let values: Vec<PossibleValue> = document
        .iter()
        .map(|(name, spec)| {
            let value = PossibleValue::new(name.to_string());
            match spec.description() {
                Some(description) => value.help(description.to_string()),
                None => value,
            }
        })
        .collect();

    TopLevel::command().mut_arg(COMMAND_ARG, |arg| {
        arg.value_parser(PossibleValuesParser::new(values))
    })
}

/// Names accepted by the `COMMAND` positional of `grammar`.
pub fn accepted_commands(grammar: &clap::Command) -> Vec<String> {
    grammar
        .get_arguments()
        .find(|arg| arg.get_id() == COMMAND_ARG)
        .map(|arg| {
            arg.get_possible_values()
                .iter()
                .map(|value| value.get_name().to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Render the help text, including every command with its description.
pub fn render_help(grammar: &mut clap::Command) -> String {
    grammar.render_long_help().to_string()
}

/// Help for one level of nested commands below the top level.
///
/// `path` is the chain of section names already consumed.
pub fn section_help(path: &[String], choices: &[(String, CommandSpec)]) -> String {
    let prefix = std::iter::once(PROGRAM.to_string())
        .chain(path.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ");

    let mut command = clap::Command::new(PROGRAM)
        .override_usage(format!("{} <COMMAND> [ARGS]...", prefix))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .disable_help_subcommand(true)
        .subcommands(choices.iter().map(|(name, spec)| {
            let sub = clap::Command::new(name.clone());
            match spec.description() {
                Some(description) => sub.about(description.to_string()),
                None => sub,
            }
        }));

    command.render_help().to_string()
}

/// Parse the tokens before and including the command name.
pub fn parse_top_level<I, T>(grammar: clap::Command, tokens: I) -> Result<TopLevel>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = grammar.try_get_matches_from(tokens).map_err(usage_error)?;
    TopLevel::from_arg_matches(&matches).map_err(usage_error)
}

/// Convert a clap error into a usage error.
///
/// clap exits with 2 on usage errors, which xts reserves for ambiguous
/// configs, so its errors are never allowed to exit on their own.
fn usage_error(err: clap::Error) -> XtsError {
    let rendered = err.render().to_string();
    let message = rendered.trim_end().trim_start_matches("error: ").to_string();
    XtsError::Usage(message)
}
