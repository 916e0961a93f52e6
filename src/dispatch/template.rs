//! Placeholder substitution for command steps.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Steps are shell text, so braces that are not a known placeholder are
//! kept verbatim: `${HOME}`, `{ a; b; }` and a lone `{` pass through.

use std::collections::HashMap;

/// Render a step by substituting known `{name}` placeholders.
pub fn render_step(template: &str, variables: &HashMap<String, String>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        result.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            result.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if tail.starts_with('{')
            && let Some((name, after)) = placeholder(tail)
            && let Some(value) = variables.get(name)
        {
            result.push_str(value);
            rest = after;
            continue;
        }

        result.push_str(&tail[..1]);
        rest = &tail[1..];
    }

    result.push_str(rest);
    result
}

/// Returns true if `template` contains the `{name}` placeholder.
pub fn references(template: &str, name: &str) -> bool {
    let mut rest = template;
    while let Some(pos) = rest.find('{') {
        let tail = &rest[pos..];
        if tail.starts_with("{{") {
            rest = &tail[2..];
            continue;
        }
        if let Some((found, _)) = placeholder(tail)
            && found == name
        {
            return true;
        }
        rest = &tail[1..];
    }
    false
}

/// Split `{name}...` into `name` and the text after the closing brace.
fn placeholder(tail: &str) -> Option<(&str, &str)> {
    let close = tail.find('}')?;
    let name = &tail[1..close];
    is_identifier(name).then(|| (name, &tail[close + 1..]))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
