//! Discovery of `.xts` files in the working directory.

use super::source::{ConfigSource, has_config_suffix};
use crate::disambiguate;
use crate::error::{Result, XtsError};
use std::path::Path;

/// List the names of all `.xts` files directly inside `dir`, sorted.
///
/// Directories are skipped even if their name ends in `.xts`.
pub fn find_candidates<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir).map_err(|e| {
        XtsError::ConfigAccess(format!(
            "failed to list directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut candidates = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() && has_config_suffix(&path) {
            candidates.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    candidates.sort();

    Ok(candidates)
}

/// Find the single config in `dir` and load it.
///
/// Never picks between several candidates: that is left to the operator.
pub fn locate<P: AsRef<Path>>(dir: P) -> Result<ConfigSource> {
    let dir = dir.as_ref();
    let mut candidates = find_candidates(dir)?;
    tracing::debug!(dir = %dir.display(), ?candidates, "searched for xts configs");

    match candidates.len() {
        0 => Err(XtsError::ConfigNotFound),
        1 => {
            let name = candidates.remove(0);
            ConfigSource::open(dir.join(name))
        }
        _ => Err(disambiguate::ambiguous(candidates)),
    }
}
