// src/registry/function.rs

//! Defines a single named, shape-checked registry function.

use crate::core::{Argument, CalcError, CalcResult, ParamKind};
use crate::masses::MassTable;
use std::fmt;

/// Evaluation rule of a registered function. Arguments have already been
/// checked against the declared parameter shape when this is called.
pub type EvalFn = fn(&MassTable, &[Argument]) -> CalcResult<f64>;

/// A function the evaluator can call by name.
///
/// Holds the parameter shape (one [`ParamKind`] per positional argument;
/// a `List` parameter carries a variadic sequence) and the evaluation rule.
/// Functions keep no state between calls. The only outside input is the mass
/// table handed in by the registry.
#[derive(Debug, Clone)]
pub struct RegisteredFunction {
    name: &'static str,
    params: &'static [ParamKind],
    summary: &'static str,
    eval: EvalFn,
}

impl RegisteredFunction {
    /// Creates a function definition.
    pub const fn new(name: &'static str, params: &'static [ParamKind], summary: &'static str, eval: EvalFn) -> Self {
        Self { name, params, summary, eval }
    }

    /// Name the evaluator calls this function by.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared parameter kinds, in positional order.
    pub fn params(&self) -> &'static [ParamKind] {
        self.params
    }

    /// Number of positional arguments.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Whether any parameter is a variadic list.
    pub fn takes_list(&self) -> bool {
        self.params.contains(&ParamKind::List)
    }

    /// One-line description.
    pub fn summary(&self) -> &'static str {
        self.summary
    }

    /// Checks argument count and kinds against the parameter shape.
    ///
    /// # Errors
    /// Returns `CalcError::InvalidArgument` on the first mismatch.
    pub fn check_args(&self, args: &[Argument]) -> CalcResult<()> {
        if args.len() != self.params.len() {
            return Err(CalcError::InvalidArgument {
                message: format!("{} expects {} argument(s), got {}.", self, self.params.len(), args.len()),
            });
        }
        for (position, (expected, arg)) in self.params.iter().zip(args).enumerate() {
            if arg.kind() != *expected {
                return Err(CalcError::InvalidArgument {
                    message: format!(
                        "Argument {} of {} must be a {}, got a {} ({}).",
                        position + 1,
                        self.name,
                        expected,
                        arg.kind(),
                        arg
                    ),
                });
            }
        }
        Ok(())
    }

    /// Validates `args` and evaluates the function against `masses`.
    pub fn invoke(&self, masses: &MassTable, args: &[Argument]) -> CalcResult<f64> {
        self.check_args(args)?;
        (self.eval)(masses, args)
    }
}

impl fmt::Display for RegisteredFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, kind) in self.params.iter().enumerate() {
            write!(f, "{}{}", if i > 0 { ", " } else { "" }, kind)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_number(_: &MassTable, args: &[Argument]) -> CalcResult<f64> {
        args[0].as_number().ok_or_else(|| CalcError::InvalidArgument { message: "number".to_string() })
    }

    const ECHO: RegisteredFunction =
        RegisteredFunction::new("echo", &[ParamKind::Number, ParamKind::List], "Returns its first argument.", first_number);

    #[test]
    fn display_shows_signature() {
        assert_eq!(ECHO.to_string(), "echo(number, list)");
        assert_eq!(ECHO.arity(), 2);
        assert!(ECHO.takes_list());
    }

    #[test]
    fn count_mismatch_is_invalid_argument() {
        let err = ECHO.invoke(&MassTable::new(), &[Argument::Number(1.0)]).unwrap_err();
        match err {
            CalcError::InvalidArgument { message } => assert!(message.contains("expects 2 argument(s), got 1"), "{message}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn kind_mismatch_is_invalid_argument() {
        let args = [Argument::Number(1.0), Argument::Number(2.0)];
        let err = ECHO.invoke(&MassTable::new(), &args).unwrap_err();
        match err {
            CalcError::InvalidArgument { message } => assert!(message.contains("Argument 2 of echo must be a list"), "{message}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn valid_arguments_reach_the_rule() {
        let args = [Argument::Number(4.5), Argument::List(vec![])];
        assert_eq!(ECHO.invoke(&MassTable::new(), &args), Ok(4.5));
    }
}
