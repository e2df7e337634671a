// src/core/value.rs

use std::fmt;

/// A single positional argument handed to a registered function by the
/// evaluator.
///
/// The evaluator resolves literals, constants and list variables before the
/// call. Particle identifiers arrive as `Text`, named lists as `List`.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point payloads
pub enum Argument {
    /// A plain real number.
    Number(f64),
    /// A string key, such as a particle identifier.
    Text(String),
    /// An ordered list of numbers.
    List(Vec<f64>),
}

impl Argument {
    /// The shape this argument has, for validation and error messages.
    pub fn kind(&self) -> ParamKind {
        match self {
            Argument::Number(_) => ParamKind::Number,
            Argument::Text(_) => ParamKind::Text,
            Argument::List(_) => ParamKind::List,
        }
    }

    /// Returns the number if this is a `Number` argument.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Argument::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string if this is a `Text` argument.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Argument::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the values if this is a `List` argument.
    pub fn as_list(&self) -> Option<&[f64]> {
        match self {
            Argument::List(values) => Some(values),
            _ => None,
        }
    }
}

impl From<f64> for Argument {
    fn from(v: f64) -> Self {
        Argument::Number(v)
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::Text(s.to_string())
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Argument::Text(s)
    }
}

impl From<Vec<f64>> for Argument {
    fn from(values: Vec<f64>) -> Self {
        Argument::List(values)
    }
}

impl From<&[f64]> for Argument {
    fn from(values: &[f64]) -> Self {
        Argument::List(values.to_vec())
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Number(v) => write!(f, "{}", v),
            Argument::Text(s) => write!(f, "'{}'", s),
            Argument::List(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    write!(f, "{}{}", if i > 0 { ", " } else { "" }, v)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// The shape of a declared function parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Expects `Argument::Number`.
    Number,
    /// Expects `Argument::Text`.
    Text,
    /// Expects `Argument::List`. This is how variadic inputs are passed.
    List,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::Number => write!(f, "number"),
            ParamKind::Text => write!(f, "text"),
            ParamKind::List => write!(f, "list"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_matching_variant() {
        assert_eq!(Argument::from(2.5).kind(), ParamKind::Number);
        assert_eq!(Argument::from("p").kind(), ParamKind::Text);
        assert_eq!(Argument::from(vec![1.0, 2.0]).kind(), ParamKind::List);
    }

    #[test]
    fn accessors_reject_other_variants() {
        let arg = Argument::from("μ");
        assert_eq!(arg.as_text(), Some("μ"));
        assert_eq!(arg.as_number(), None);
        assert_eq!(arg.as_list(), None);
    }

    #[test]
    fn display_formats_lists() {
        let arg = Argument::List(vec![1.0, 2.5]);
        assert_eq!(arg.to_string(), "[1, 2.5]");
        assert_eq!(Argument::from("p").to_string(), "'p'");
    }
}
