//! Handoff from a resolved command to the execution engine.
//!
//! The [`Dispatcher`] owns a [`Runner`] and forwards the selection and the
//! remaining arguments to it unchanged. [`ShellRunner`] is the built-in
//! runner; anything implementing [`Runner`] can replace it.

mod shell;
pub mod template;

pub use shell::{SHELL_ENV, ShellRunner};

use crate::config::ResolvedSelection;
use crate::error::Result;
use crate::exit_codes;

/// Per-step output of a run.
///
/// The three lists are parallel: index `i` in each belongs to the `i`-th
/// executed step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOutcome {
    pub stdout: Vec<Vec<String>>,
    pub stderr: Vec<Vec<String>>,
    pub exit_codes: Vec<i32>,
}

impl RunOutcome {
    pub fn push_step(&mut self, stdout: Vec<String>, stderr: Vec<String>, exit_code: i32) {
        self.stdout.push(stdout);
        self.stderr.push(stderr);
        self.exit_codes.push(exit_code);
    }

    /// A run consisting of one successful step that only printed `text`.
    pub fn message(text: &str) -> Self {
        let mut outcome = Self::default();
        outcome.push_step(
            text.lines().map(str::to_string).collect(),
            Vec::new(),
            exit_codes::SUCCESS,
        );
        outcome
    }

    pub fn step_count(&self) -> usize {
        self.exit_codes.len()
    }

    /// Exit code of the last executed step, or success when nothing ran.
    pub fn exit_code(&self) -> i32 {
        self.exit_codes
            .last()
            .copied()
            .unwrap_or(exit_codes::SUCCESS)
    }
}

/// An execution engine for resolved commands.
pub trait Runner {
    fn run(&self, selection: &ResolvedSelection, args: &[String]) -> Result<RunOutcome>;
}

/// Pass-through boundary between resolution and execution.
#[derive(Debug)]
pub struct Dispatcher<R> {
    runner: R,
}

impl<R: Runner> Dispatcher<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn dispatch(&self, selection: &ResolvedSelection, args: &[String]) -> Result<RunOutcome> {
        tracing::debug!(command = %selection.name, ?args, "dispatching");
        self.runner.run(selection, args)
    }
}
