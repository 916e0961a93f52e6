//! The command document model: top-level commands and their specs.

use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fmt;

/// Key that marks a spec as directly executable.
pub const COMMAND_KEY: &str = "command";

/// Optional human-readable summary shown in help output.
pub const DESCRIPTION_KEY: &str = "description";

/// An ordered mapping from command name to [`CommandSpec`].
///
/// Loaded once per invocation and never mutated afterwards. Duplicate
/// top-level names are rejected during deserialization.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    commands: IndexMap<String, CommandSpec>,
}

impl ConfigDocument {
    /// Command names in document order.
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CommandSpec)> {
        self.commands.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Narrow the document to a single command.
    pub fn select(&self, name: &str) -> Option<ResolvedSelection> {
        self.commands.get(name).map(|spec| ResolvedSelection {
            name: name.to_string(),
            spec: spec.clone(),
        })
    }
}

impl<'de> Deserialize<'de> for ConfigDocument {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = ConfigDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of command names to command specs")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut commands = IndexMap::new();
                while let Some(name) = access.next_key::<String>()? {
                    if commands.contains_key(&name) {
                        return Err(de::Error::custom(format!("duplicate command `{}`", name)));
                    }
                    let spec: CommandSpec = access.next_value().map_err(|e: A::Error| {
                        <A::Error as de::Error>::custom(format!("command `{}`: {}", name, e))
                    })?;
                    commands.insert(name, spec);
                }
                Ok(ConfigDocument { commands })
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}

/// The body of a single command: either a Section or a Leaf.
///
/// The mapping is kept as-is so that the runner sees exactly what the
/// operator wrote.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct CommandSpec(Mapping);

impl CommandSpec {
    /// A spec is a Leaf when its `command` yields at least one step.
    ///
    /// `false`, `0`, blank strings, mappings and sequences without scalar
    /// entries all leave the spec a Section.
    pub fn is_leaf(&self) -> bool {
        !self.steps().is_empty()
    }

    /// The ordered shell steps of a Leaf. Sections have none.
    pub fn steps(&self) -> Vec<String> {
        match self.0.get(COMMAND_KEY) {
            Some(Value::String(s)) if !s.trim().is_empty() => vec![s.clone()],
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => vec![n.to_string()],
            Some(Value::Bool(true)) => vec![true.to_string()],
            Some(Value::Sequence(steps)) => steps.iter().filter_map(scalar_to_string).collect(),
            _ => Vec::new(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.0.get(DESCRIPTION_KEY).and_then(Value::as_str)
    }

    /// Nested commands of a Section, in document order.
    ///
    /// Only entries with string keys and mapping values count. The
    /// `command` and `description` keys are attributes, never subcommands.
    pub fn children(&self) -> Vec<(String, CommandSpec)> {
        self.0
            .iter()
            .filter_map(|(key, value)| match (key, value) {
                (Value::String(name), _) if name == COMMAND_KEY || name == DESCRIPTION_KEY => None,
                (Value::String(name), Value::Mapping(body)) => {
                    Some((name.clone(), CommandSpec(body.clone())))
                }
                _ => None,
            })
            .collect()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A single-entry view of the document scoped to the chosen command.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSelection {
    pub name: String,
    pub spec: CommandSpec,
}

impl ResolvedSelection {
    pub fn is_leaf(&self) -> bool {
        self.spec.is_leaf()
    }
}
