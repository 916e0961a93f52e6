//! Halt-and-hint handling when several configs could apply.
//!
//! xts never picks a config on the operator's behalf. Instead it prints one
//! ready-to-run command line per candidate and exits with
//! [`exit_codes::AMBIGUOUS_CONFIG`](crate::exit_codes::AMBIGUOUS_CONFIG).

use crate::error::XtsError;

/// Build the error raised when more than one candidate was discovered.
pub fn ambiguous(candidates: Vec<String>) -> XtsError {
    XtsError::ConfigAmbiguous { candidates }
}

/// One suggested invocation per candidate, e.g. `xts a.xts ...`.
pub fn invocation_hints(program: &str, candidates: &[String]) -> Vec<String> {
    candidates
        .iter()
        .map(|file| format!("{} {} ...", program, file))
        .collect()
}
