// src/lib.rs

//! `decaycalc` - Particle-physics formulas and constant tables for expression evaluators
//!
//! This library provides the numeric core an evaluator calls into: a registry
//! of named, validated kinematics functions, the particle mass table those
//! functions read, and a table of physical constants whose derived entries
//! are resolved lazily and cached.

pub mod core;
pub mod constants;
pub mod kinematics;
pub mod masses;
pub mod registry;
pub mod lists;
pub mod config;

// Re-export the most common types for easier top-level use
pub use crate::core::{Argument, CalcError, CalcResult, ParamKind};
pub use crate::constants::{ConstantTable, ConstantTableBuilder};
pub use crate::kinematics::{
    decay_product_max_energy,
    triangle_fn,
    two_body_energy,
    two_particle_decay_energy,
    Product,
};
pub use crate::masses::{MassGroup, MassTable, ParticleCatalog};
pub use crate::registry::{FunctionRegistry, RegisteredFunction};
pub use crate::lists::{CallExpr, ListVariables, NamedListVariable};
pub use crate::config::DataConfig;

// Example 1: Startup injection and function calls
// Loads the bundled data into a registry, then calls functions by name the
// way an evaluator would after parsing user input.
/// ```
/// use decaycalc::{Argument, CalcError, DataConfig, FunctionRegistry};
///
/// let registry = FunctionRegistry::new();
/// DataConfig::standard().install(&registry).expect("bundled data is valid");
///
/// // m(p)
/// let proton = registry.call("m", &[Argument::from("p")]);
/// assert_eq!(proton, Ok(938.27));
///
/// // triangleFn([1, 2, 3]) = (1 + 4 + 9) - 2 * (2 + 3 + 6)
/// let tri = registry.call("triangleFn", &[Argument::from(vec![1.0, 2.0, 3.0])]);
/// assert_eq!(tri, Ok(-8.0));
///
/// // p -> Λ + π- is kinematically forbidden
/// let forbidden = registry.call(
///     "TwoParticleDecayEnergy",
///     &[Argument::Number(938.27), Argument::Number(1115.68), Argument::Number(139.57), Argument::Number(1.0)],
/// );
/// assert!(matches!(forbidden, Err(CalcError::ForbiddenDecay { .. })));
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Derived constants
// Derived constants are computed from primary ones the first time they are
// read; the cached value is returned from then on.
/// ```
/// use decaycalc::{ConstantTable, CalcError};
///
/// fn electroweak() -> Result<(), CalcError> {
///     let table = ConstantTable::standard()?;
///     assert!(!table.is_cached("gZ"));
///
///     let gz = table.get("gZ")?;
///     let theta = table.get("θw")?;
///     assert_eq!(gz, table.get("ge")? / (theta.sin() * theta.cos()));
///     assert!(table.is_cached("gZ"));
///
///     // ε0 ≈ 8.854e-12 F/m
///     let eps0 = table.get("ε0")?;
///     assert!((eps0 - 8.854e-12).abs() < 1e-14);
///     Ok(())
/// }
/// electroweak().expect("standard constants resolve");
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
