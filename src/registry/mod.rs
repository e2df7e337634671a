// src/registry/mod.rs

//! Defines the function registry an expression evaluator calls into.
//!
//! The registry maps function names to [`RegisteredFunction`]s and owns the
//! one piece of mutable state in the crate: the injected particle
//! [`MassTable`] read by `m`.

// Declare modules
mod builtins;
mod function;

// Re-export public types from submodules
pub use builtins::{DECAY_PRODUCT_MAX_ENERGY, MASS, TRIANGLE, TWO_PARTICLE_DECAY_ENERGY};
pub use function::{EvalFn, RegisteredFunction};

use crate::core::{Argument, CalcError, CalcResult};
use crate::masses::MassTable;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Named, validated physics functions plus the particle mass table they read.
///
/// A new registry starts with an empty mass table, so every `m` call fails
/// with `UnknownParticle` until [`set_masses_data`](Self::set_masses_data)
/// is called. Each call to it replaces the table wholesale. The table sits
/// behind an `RwLock<Arc<_>>`: a replacement swaps the `Arc`, so a reader
/// sees either the old table or the new one, never a mix.
///
/// # Examples
/// ```
/// # use decaycalc::{Argument, FunctionRegistry, MassTable, CalcError};
/// # fn main() -> Result<(), CalcError> {
/// let registry = FunctionRegistry::new();
/// registry.set_masses_data(MassTable::from_iter([("π+", 139.57), ("μ", 105.66)]));
///
/// let muon_energy = registry.call(
///     "TwoParticleDecayEnergy",
///     &[
///         Argument::Number(registry.m("π+")?),
///         Argument::Number(registry.m("μ")?),
///         Argument::Number(0.0),
///         Argument::Number(1.0),
///     ],
/// )?;
/// assert!((muon_energy - 109.78).abs() < 0.01);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FunctionRegistry {
    functions: HashMap<&'static str, RegisteredFunction>,
    masses: RwLock<Arc<MassTable>>,
}

impl FunctionRegistry {
    /// Creates a registry with the built-in functions and an empty mass table.
    pub fn new() -> Self {
        Self::with_masses(MassTable::new())
    }

    /// Creates a registry with the built-in functions and `masses` already injected.
    pub fn with_masses(masses: MassTable) -> Self {
        let functions = builtins::all().into_iter().map(|f| (f.name(), f)).collect();
        Self { functions, masses: RwLock::new(Arc::new(masses)) }
    }

    /// Replaces the active particle mass table. This is a wholesale
    /// replacement: identifiers missing from `masses` stop resolving.
    pub fn set_masses_data(&self, masses: MassTable) {
        let entries = masses.len();
        let mut active = self.masses.write().unwrap_or_else(PoisonError::into_inner);
        *active = Arc::new(masses);
        debug!(entries, "particle mass table replaced");
    }

    /// Snapshot of the active mass table.
    pub fn masses(&self) -> Arc<MassTable> {
        let active = self.masses.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*active)
    }

    /// Looks up a function by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredFunction> {
        self.functions.get(name)
    }

    /// Whether a function with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered function names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether no functions are registered.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Resolves `name` and invokes it positionally with `args`.
    ///
    /// # Errors
    /// * `CalcError::UnknownFunction` if `name` is not registered.
    /// * Whatever the function itself reports (see [`RegisteredFunction::invoke`]).
    pub fn call(&self, name: &str, args: &[Argument]) -> CalcResult<f64> {
        let function = self.get(name).ok_or_else(|| CalcError::UnknownFunction { name: name.to_string() })?;
        let masses = self.masses();
        function.invoke(&masses, args)
    }

    /// Typed shortcut for `m(key)`.
    pub fn m(&self, key: &str) -> CalcResult<f64> {
        self.masses().lookup(key)
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
