// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod value;

// Re-export public types for convenient access via `decaycalc::core::TypeName`
pub use error::{CalcError, CalcResult};
pub use value::{Argument, ParamKind};
