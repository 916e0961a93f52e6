//! Command resolution against the loaded document.
//!
//! Resolution happens in two steps so the plugin hook can run in between:
//! [`CommandResolver::parse`] validates the command name, then
//! [`CommandResolver::finish`] builds the argument list for the runner.

use crate::cli::{self, PROGRAM, TopLevel};
use crate::config::{ConfigDocument, ResolvedSelection};
use crate::error::{Result, XtsError};

/// Flag forwarded to the runner when help was requested at the top level.
pub const HELP_FLAG: &str = "--help";

/// Outcome of validating the first argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    /// Help was requested without a command.
    Help(String),
    /// A valid command name was given.
    Command(ParsedCommand),
}

/// A validated command name plus the arguments still to be interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCommand {
    pub name: String,
    pub help: bool,
    pub rest: Vec<String>,
}

/// The selection and argument list handed to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub selection: ResolvedSelection,
    pub remaining: Vec<String>,
    pub help: bool,
}

/// Resolves the command name against `keys(document)`.
///
/// The resolver borrows a loaded document, so resolving without an active
/// config cannot be expressed.
pub struct CommandResolver<'a> {
    document: &'a ConfigDocument,
}

impl<'a> CommandResolver<'a> {
    pub fn new(document: &'a ConfigDocument) -> Self {
        Self { document }
    }

    /// The grammar derived from the current document.
    pub fn grammar(&self) -> clap::Command {
        cli::command_grammar(self.document)
    }

    /// The closed set of legal command names.
    pub fn accepted_commands(&self) -> Vec<String> {
        cli::accepted_commands(&self.grammar())
    }

    pub fn help_text(&self) -> String {
        cli::render_help(&mut self.grammar())
    }

    /// Validate the first positional argument.
    ///
    /// `args` excludes the program name and any explicit config path.
    /// Only `-h/--help` and the command name go through the generated
    /// grammar. Other flags before the command name are not ours to judge:
    /// they stay in `rest`, in order, ahead of everything after the command.
    pub fn parse(&self, args: &[String]) -> Result<Parsed> {
        let command_pos = args.iter().position(|arg| !arg.starts_with('-'));
        let (head, tail) = match command_pos {
            Some(pos) => args.split_at(pos + 1),
            None => (args, &[][..]),
        };
        let (head, mut rest): (Vec<String>, Vec<String>) = head
            .iter()
            .cloned()
            .partition(|arg| !arg.starts_with('-') || cli::is_help_flag(arg));
        rest.extend_from_slice(tail);

        let top: TopLevel = cli::parse_top_level(
            self.grammar(),
            std::iter::once(PROGRAM.to_string()).chain(head.iter().cloned()),
        )?;

        match top.command {
            Some(name) => {
                tracing::debug!(command = %name, help = top.help, "resolved command");
                Ok(Parsed::Command(ParsedCommand {
                    name,
                    help: top.help,
                    rest,
                }))
            }
            None if top.help => Ok(Parsed::Help(self.help_text())),
            None => Err(XtsError::Usage(format!(
                "a command is required\n\n{}",
                self.help_text()
            ))),
        }
    }

    /// Narrow the document and build the runner's argument list.
    ///
    /// A Leaf's name goes back to the front of the list: it was only taken
    /// off to be checked, and the runner needs it to pick the action.
    pub fn finish(&self, parsed: ParsedCommand) -> Result<Resolution> {
        let selection = self.document.select(&parsed.name).ok_or_else(|| {
            XtsError::Usage(format!(
                "unknown command '{}' (expected one of: {})",
                parsed.name,
                self.accepted_commands().join(", ")
            ))
        })?;

        let mut remaining = parsed.rest;
        if parsed.help {
            remaining.push(HELP_FLAG.to_string());
        }
        if selection.is_leaf() {
            remaining.insert(0, selection.name.clone());
        }

        Ok(Resolution {
            selection,
            remaining,
            help: parsed.help,
        })
    }
}
