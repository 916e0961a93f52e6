//! One xts invocation, from raw arguments to a run outcome.
//!
//! Config selection → command resolution → plugin hook → dispatch.
//! All file I/O happens before anything is dispatched, and the first error
//! ends the invocation.

use crate::config::{self, ConfigSource, has_config_suffix};
use crate::dispatch::{Dispatcher, RunOutcome, Runner, ShellRunner};
use crate::error::{Result, XtsError};
use crate::plugin::{NoopPlugin, Plugin, PluginAction};
use crate::resolver::{CommandResolver, Parsed};
use std::path::{Path, PathBuf};

/// Pick the active config.
///
/// A first argument ending in `.xts` names the config explicitly and is
/// consumed; otherwise the working directory is searched. An explicit path
/// that does not exist fails even if other configs are present.
pub fn select_config<'a>(args: &'a [String], cwd: &Path) -> Result<(ConfigSource, &'a [String])> {
    match args.split_first() {
        Some((first, rest)) if has_config_suffix(first) => {
            tracing::debug!(config = %first, "using explicit config");
            let source = ConfigSource::open(cwd.join(first)).map_err(|e| match e {
                XtsError::ConfigMissing(_) => XtsError::ConfigMissing(PathBuf::from(first)),
                other => other,
            })?;
            Ok((source, rest))
        }
        _ => Ok((config::locate(cwd)?, args)),
    }
}

/// Run a full invocation with the given collaborators.
///
/// `args` excludes the program name.
pub fn run<R, P>(args: &[String], cwd: &Path, dispatcher: &Dispatcher<R>, plugin: &P) -> Result<RunOutcome>
where
    R: Runner,
    P: Plugin + ?Sized,
{
    let (source, rest) = select_config(args, cwd)?;
    tracing::debug!(config = %source.path().display(), "active config");
    let resolver = CommandResolver::new(source.document());

    let parsed = match resolver.parse(rest)? {
        Parsed::Help(text) => return Ok(RunOutcome::message(&text)),
        Parsed::Command(parsed) => parsed,
    };

    if let PluginAction::Handled(outcome) = plugin.on_command(&parsed.name)? {
        tracing::debug!(command = %parsed.name, "plugin handled command");
        return Ok(outcome);
    }

    let resolution = resolver.finish(parsed)?;
    tracing::debug!(
        command = %resolution.selection.name,
        help = resolution.help,
        "handing off to runner"
    );
    let outcome = dispatcher.dispatch(&resolution.selection, &resolution.remaining)?;
    tracing::debug!(steps = outcome.step_count(), exit_code = outcome.exit_code(), "run finished");
    Ok(outcome)
}

/// Run from the process working directory with the built-in runner.
pub fn run_from_env(args: &[String]) -> Result<RunOutcome> {
    let cwd = std::env::current_dir().map_err(|e| {
        XtsError::ConfigAccess(format!("failed to get current working directory: {}", e))
    })?;

    let dispatcher = Dispatcher::new(ShellRunner::new(&cwd));
    run(args, &cwd, &dispatcher, &NoopPlugin)
}
