// src/lists/mod.rs

//! Named list variables: ordered lists of function-call expressions such as
//! `m(e)` that the evaluator expands into a list of numbers.
//!
//! The core does not evaluate these. It only guarantees that every entry is a
//! well-formed call naming a function the registry knows.

use crate::core::{CalcError, CalcResult};
use crate::registry::FunctionRegistry;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A single parsed call expression, `function(arg, arg, ...)`.
///
/// Arguments are kept as raw trimmed text; interpreting them is up to the
/// evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    function: String,
    args: Vec<String>,
}

impl CallExpr {
    /// Parses `function(arg, ...)`. Nested calls are not supported.
    ///
    /// # Errors
    /// Returns `CalcError::InvalidDefinition` if the text is not a single flat call.
    pub fn parse(text: &str) -> CalcResult<Self> {
        let malformed = || CalcError::InvalidDefinition {
            message: format!("'{}' is not a call expression of the form name(args).", text),
        };

        let trimmed = text.trim();
        let open = trimmed.find('(').ok_or_else(malformed)?;
        let inner = trimmed[open + 1..].strip_suffix(')').ok_or_else(malformed)?;
        let function = trimmed[..open].trim();

        let valid_name = !function.is_empty() && !function.contains(char::is_whitespace);
        if !valid_name || inner.contains(['(', ')']) {
            return Err(malformed());
        }

        let args = if inner.trim().is_empty() {
            Vec::new()
        } else {
            inner.split(',').map(|arg| arg.trim().to_string()).collect()
        };

        Ok(Self { function: function.to_string(), args })
    }

    /// Name of the called function.
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Raw argument texts.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.function, self.args.join(", "))
    }
}

/// A named, ordered list of call expressions, e.g. all charged leptons' masses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedListVariable {
    name: String,
    entries: Vec<String>,
}

impl NamedListVariable {
    /// Creates a list variable from its raw entries.
    pub fn new<I, S>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { name: name.into(), entries: entries.into_iter().map(Into::into).collect() }
    }

    /// Variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw entries, in order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Parses every entry.
    pub fn calls(&self) -> CalcResult<Vec<CallExpr>> {
        self.entries.iter().map(|entry| CallExpr::parse(entry)).collect()
    }
}

/// The set of list variables offered to the evaluator.
///
/// Serializes to and from a JSON object mapping each name to an array of
/// call strings, preserving order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ListVariables {
    lists: Vec<NamedListVariable>,
}

impl ListVariables {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self { lists: Vec::new() }
    }

    /// The bundled lists: `Leptons` and `Nucleons`.
    pub fn standard() -> Self {
        Self::new()
            .with(NamedListVariable::new("Leptons", ["m(e)", "m(μ)", "m(τ)", "m(ν_e)", "m(ν_μ)", "m(ν_τ)"]))
            .with(NamedListVariable::new("Nucleons", ["m(p)", "m(n)"]))
    }

    /// Adds a list, replacing any existing list with the same name in place.
    pub fn with(mut self, list: NamedListVariable) -> Self {
        match self.lists.iter_mut().find(|existing| existing.name == list.name) {
            Some(existing) => *existing = list,
            None => self.lists.push(list),
        }
        self
    }

    /// Finds a list by name.
    pub fn get(&self, name: &str) -> Option<&NamedListVariable> {
        self.lists.iter().find(|list| list.name == name)
    }

    /// Lists in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedListVariable> {
        self.lists.iter()
    }

    /// Number of lists.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether there are no lists.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Checks that every entry parses and calls a function `registry` knows.
    ///
    /// # Errors
    /// * `CalcError::InvalidDefinition` for a malformed entry.
    /// * `CalcError::UnknownFunction` for a call to an unregistered function.
    pub fn validate(&self, registry: &FunctionRegistry) -> CalcResult<()> {
        for list in &self.lists {
            for call in list.calls()? {
                if !registry.contains(call.function()) {
                    return Err(CalcError::UnknownFunction { name: call.function().to_string() });
                }
            }
        }
        Ok(())
    }
}

impl Default for ListVariables {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Map<String, Value>> for ListVariables {
    type Error = CalcError;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut lists = ListVariables::new();
        for (name, value) in raw {
            let Value::Array(items) = value else {
                return Err(CalcError::Config { message: format!("List variable '{}' must be an array of strings.", name) });
            };
            let entries = items
                .into_iter()
                .map(|item| match item {
                    Value::String(entry) => Ok(entry),
                    other => Err(CalcError::Config {
                        message: format!("List variable '{}' has a non-string entry: {}", name, other),
                    }),
                })
                .collect::<CalcResult<Vec<String>>>()?;
            lists = lists.with(NamedListVariable::new(name, entries));
        }
        Ok(lists)
    }
}

impl From<ListVariables> for Map<String, Value> {
    fn from(lists: ListVariables) -> Self {
        lists
            .lists
            .into_iter()
            .map(|list| (list.name, Value::Array(list.entries.into_iter().map(Value::String).collect())))
            .collect()
    }
}
