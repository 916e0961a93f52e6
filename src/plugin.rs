//! Extension point that runs once the command name is known.
//!
//! A plugin sees the validated command name before the remaining arguments
//! are interpreted. It can let the normal flow continue, or take over the
//! whole run and return its own outcome instead of the dispatcher's.

use crate::dispatch::RunOutcome;
use crate::error::Result;

/// What the invocation should do after the hook returns.
#[derive(Debug, Clone, PartialEq)]
pub enum PluginAction {
    /// Hand the resolved command to the dispatcher as usual.
    Continue,
    /// The plugin ran the command itself; skip the dispatcher.
    Handled(RunOutcome),
}

pub trait Plugin {
    fn on_command(&self, command: &str) -> Result<PluginAction>;
}

/// The installed hook: no plugins exist yet, so it always continues.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPlugin;

impl Plugin for NoopPlugin {
    fn on_command(&self, command: &str) -> Result<PluginAction> {
        tracing::trace!(command, "no plugin registered");
        Ok(PluginAction::Continue)
    }
}
