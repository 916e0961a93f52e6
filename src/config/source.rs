//! A single on-disk `.xts` document: validation and loading.

use super::document::ConfigDocument;
use crate::error::{Result, XtsError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File extension that marks a file as an xts config.
pub const CONFIG_EXTENSION: &str = "xts";

/// Returns true if `path` follows the `.xts` naming convention.
///
/// Only the name is inspected; the file does not need to exist.
pub fn has_config_suffix<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .is_some_and(|ext| ext == CONFIG_EXTENSION)
}

/// The active config for this invocation.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    path: PathBuf,
    document: ConfigDocument,
}

impl ConfigSource {
    /// Validate and load the config at `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigSource)` - The document was fully loaded
    /// * `Err(XtsError::ConfigMissing)` - Path does not exist or is not a `.xts` file
    /// * `Err(XtsError::ConfigAccess)` - The file could not be read
    /// * `Err(XtsError::ConfigParse)` - The content is not a command document
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() || !has_config_suffix(path) {
            return Err(XtsError::ConfigMissing(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => {
                XtsError::ConfigAccess(format!("Could not read xts config: [{}]", path.display()))
            }
            _ => XtsError::ConfigAccess(format!(
                "Could not read xts config: [{}]: {}",
                path.display(),
                e
            )),
        })?;

        let document = parse_document(path, &content)?;
        tracing::debug!(
            path = %path.display(),
            commands = document.len(),
            "loaded xts config"
        );

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }
}

/// Parse YAML content into a command document.
///
/// `serde_yaml` only builds plain data, so no tags or constructors in the
/// file can run code.
pub fn parse_document(path: &Path, content: &str) -> Result<ConfigDocument> {
    let parse_error = |message: String| XtsError::ConfigParse {
        path: path.to_path_buf(),
        message,
    };

    let document: ConfigDocument =
        serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;

    if document.is_empty() {
        return Err(parse_error("config defines no commands".to_string()));
    }

    Ok(document)
}
