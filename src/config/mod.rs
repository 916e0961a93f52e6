//! Configuration model for xts.
//!
//! An `.xts` file is a YAML mapping whose top-level keys are command names.
//! Each value is either a Section (nested commands) or a Leaf (has a
//! `command` key). This module validates and loads such files, and finds
//! them in the working directory when none is named.

mod document;
mod locator;
mod source;

#[cfg(test)]
mod tests;

// Re-export public API
pub use document::{COMMAND_KEY, CommandSpec, ConfigDocument, DESCRIPTION_KEY, ResolvedSelection};
pub use locator::{find_candidates, locate};
pub use source::{CONFIG_EXTENSION, ConfigSource, has_config_suffix, parse_document};
