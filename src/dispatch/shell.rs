//! Built-in runner that executes Leaf steps through a shell.

use super::template::{references, render_step, vars};
use super::{RunOutcome, Runner};
use crate::cli;
use crate::config::{CommandSpec, ResolvedSelection};
use crate::error::{Result, XtsError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variable naming the shell used to run steps.
pub const SHELL_ENV: &str = "XTS_SHELL";

const DEFAULT_SHELL: &str = "sh";

/// Placeholder replaced by the leaf's extra arguments, shell-quoted.
const ARGS_VAR: &str = "args";

/// Placeholder replaced by the leaf's name.
const COMMAND_VAR: &str = "command";

/// Runs the steps of a Leaf with `<shell> -c <step>`.
///
/// Steps run in order and stop at the first non-zero exit code.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
    working_dir: PathBuf,
}

/// Where walking the arguments ended up.
#[derive(Debug, PartialEq)]
enum Target {
    Help(String),
    Leaf {
        name: String,
        spec: CommandSpec,
        extra: Vec<String>,
    },
}

impl ShellRunner {
    /// A runner using `$XTS_SHELL` (default `sh`) in `working_dir`.
    pub fn new<P: AsRef<Path>>(working_dir: P) -> Self {
        let shell = std::env::var(SHELL_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SHELL.to_string());
        Self {
            shell,
            working_dir: working_dir.as_ref().to_path_buf(),
        }
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Follow `args` through the selection down to a Leaf.
    ///
    /// A selected Leaf is reached by its own name. A selected Section is
    /// entered directly, so its children are the first choices. Flags seen
    /// before the Leaf join the front of its extra arguments.
    fn walk(&self, selection: &ResolvedSelection, args: &[String]) -> Result<Target> {
        let mut choices = if selection.is_leaf() {
            vec![(selection.name.clone(), selection.spec.clone())]
        } else {
            selection.spec.children()
        };
        let mut path = if selection.is_leaf() {
            Vec::new()
        } else {
            vec![selection.name.clone()]
        };

        let mut leading = Vec::new();

        for (index, arg) in args.iter().enumerate() {
            if cli::is_help_flag(arg) {
                return Ok(Target::Help(cli::section_help(&path, &choices)));
            }
            if arg.starts_with('-') {
                leading.push(arg.clone());
                continue;
            }

            let Some((name, spec)) = choices.iter().find(|(name, _)| name == arg).cloned() else {
                return Err(XtsError::Usage(format!(
                    "unknown command '{}' (expected one of: {})",
                    arg,
                    choices
                        .iter()
                        .map(|(name, _)| name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )));
            };
            path.push(name.clone());

            if spec.is_leaf() {
                let mut extra = leading;
                extra.extend_from_slice(&args[index + 1..]);
                if extra.iter().any(|a| cli::is_help_flag(a)) {
                    return Ok(Target::Help(leaf_help(&path, &spec)));
                }
                return Ok(Target::Leaf { name, spec, extra });
            }

            choices = spec.children();
        }

        Err(XtsError::Usage(format!(
            "a subcommand is required\n\n{}",
            cli::section_help(&path, &choices)
        )))
    }

    fn execute(&self, name: &str, spec: &CommandSpec, extra: &[String]) -> Result<RunOutcome> {
        let joined = shell_words::join(extra);
        let variables = vars([(ARGS_VAR, joined.as_str()), (COMMAND_VAR, name)]);

        let mut steps = spec.steps();
        let uses_args = steps.iter().any(|step| references(step, ARGS_VAR));
        if !uses_args
            && !extra.is_empty()
            && let Some(last) = steps.last_mut()
        {
            last.push(' ');
            last.push_str(&joined);
        }

        let mut outcome = RunOutcome::default();
        for step in &steps {
            let rendered = render_step(step, &variables);
            tracing::debug!(command = name, step = %rendered, shell = %self.shell, "running step");

            let output = Command::new(&self.shell)
                .arg("-c")
                .arg(&rendered)
                .current_dir(&self.working_dir)
                .output()
                .map_err(|e| XtsError::Execution {
                    command: rendered.clone(),
                    message: format!(
                        "{}\nFix: ensure '{}' is installed and in PATH.",
                        e, self.shell
                    ),
                })?;

            let exit_code = output.status.code().unwrap_or(-1);
            outcome.push_step(
                lines(&output.stdout),
                lines(&output.stderr),
                exit_code,
            );

            if exit_code != 0 {
                tracing::debug!(command = name, exit_code, "step failed, stopping");
                break;
            }
        }

        Ok(outcome)
    }
}

impl Runner for ShellRunner {
    fn run(&self, selection: &ResolvedSelection, args: &[String]) -> Result<RunOutcome> {
        match self.walk(selection, args)? {
            Target::Help(text) => Ok(RunOutcome::message(&text)),
            Target::Leaf { name, spec, extra } => self.execute(&name, &spec, &extra),
        }
    }
}

fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

fn leaf_help(path: &[String], spec: &CommandSpec) -> String {
    let mut help = format!("Usage: xts {} [ARGS]...\n", path.join(" "));
    if let Some(description) = spec.description() {
        help.push('\n');
        help.push_str(description);
        help.push('\n');
    }
    help.push_str("\nSteps:\n");
    for step in spec.steps() {
        help.push_str("  ");
        help.push_str(&step);
        help.push('\n');
    }
    help
}
