//! Error handling logic

use thiserror::Error;

/// Error types raised while validating or evaluating registry functions,
/// resolving constants, or loading data tables.
///
/// Every variant is a deterministic input or logic failure. None of them are
/// transient, so callers should surface the message rather than retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Wrong number or kind of arguments, or an argument outside its allowed set.
    #[error("Invalid Argument: {message}")]
    InvalidArgument {
        /// InvalidArgument failure message
        message: String,
    },

    /// The requested particle is not present in the injected mass table.
    #[error("Mass for particle '{key}' not found.")]
    UnknownParticle {
        /// The identifier that was looked up
        key: String,
    },

    /// The mass table holds an entry for the particle, but it is not a finite number.
    #[error("Mass for particle '{key}' is invalid ({value}).")]
    InvalidMassValue {
        /// The identifier that was looked up
        key: String,
        /// The offending stored value
        value: f64,
    },

    /// The constant name is neither a primary nor a derived constant.
    #[error("Unknown constant '{name}'")]
    UnknownConstant {
        /// Requested constant name
        name: String,
    },

    /// Energy/momentum conservation rules out the decay (parent mass too small).
    #[error("Forbidden Decay: {message}")]
    ForbiddenDecay {
        /// ForbiddenDecay failure message
        message: String,
    },

    /// The parent mass is zero, which would divide by zero in the decay formulas.
    #[error("Zero Parent Mass: {message}")]
    ZeroParentMass {
        /// ZeroParentMass failure message
        message: String,
    },

    /// No function with this name is registered.
    #[error("Unknown function '{name}'")]
    UnknownFunction {
        /// Requested function name
        name: String,
    },

    /// A constant table or list variable definition is malformed.
    #[error("Invalid Definition: {message}")]
    InvalidDefinition {
        /// InvalidDefinition failure message
        message: String,
    },

    /// Data configuration could not be parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Config failure message
        message: String,
    },
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::Config { message: err.to_string() }
    }
}

/// Result alias used throughout the crate.
pub type CalcResult<T> = Result<T, CalcError>;
