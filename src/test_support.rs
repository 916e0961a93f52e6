use crate::config::ResolvedSelection;
use crate::dispatch::{RunOutcome, Runner};
use crate::error::Result;
use crate::plugin::{Plugin, PluginAction};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub(crate) fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
    path
}

/// Runner double that records every call and returns a canned outcome.
#[derive(Default)]
pub(crate) struct RecordingRunner {
    calls: RefCell<Vec<(ResolvedSelection, Vec<String>)>>,
    outcome: RunOutcome,
}

impl RecordingRunner {
    pub(crate) fn returning(outcome: RunOutcome) -> Self {
        Self {
            calls: RefCell::default(),
            outcome,
        }
    }

    pub(crate) fn calls(&self) -> Vec<(ResolvedSelection, Vec<String>)> {
        self.calls.borrow().clone()
    }
}

impl Runner for RecordingRunner {
    fn run(&self, selection: &ResolvedSelection, args: &[String]) -> Result<RunOutcome> {
        self.calls
            .borrow_mut()
            .push((selection.clone(), args.to_vec()));
        Ok(self.outcome.clone())
    }
}

/// Plugin double that records command names and optionally takes over.
#[derive(Default)]
pub(crate) struct RecordingPlugin {
    seen: RefCell<Vec<String>>,
    takeover: Option<RunOutcome>,
}

impl RecordingPlugin {
    pub(crate) fn handling(outcome: RunOutcome) -> Self {
        Self {
            seen: RefCell::default(),
            takeover: Some(outcome),
        }
    }

    pub(crate) fn seen(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

impl Plugin for RecordingPlugin {
    fn on_command(&self, command: &str) -> Result<PluginAction> {
        self.seen.borrow_mut().push(command.to_string());
        Ok(match &self.takeover {
            Some(outcome) => PluginAction::Handled(outcome.clone()),
            None => PluginAction::Continue,
        })
    }
}
