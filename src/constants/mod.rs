// src/constants/mod.rs

//! Physical constant tables with lazily resolved derived constants.
//!
//! A [`ConstantTable`] holds two kinds of entries:
//! - **primary** constants, stored as exact decimal literals and parsed to
//!   `f64` once when the table is built;
//! - **derived** constants, each a formula over a declared list of
//!   dependencies. A dependency must be a primary constant or a derived
//!   constant declared earlier, so the dependency graph is acyclic by
//!   construction. Values are computed on first access and cached for the
//!   lifetime of the table.

mod data;

use crate::core::{CalcError, CalcResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;
use tracing::trace;

/// Formula of a derived constant. Receives the dependency values in the
/// order the dependencies were declared.
pub type Formula = fn(&[f64]) -> f64;

/// Location of a constant inside the table, resolved once at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Primary(usize),
    Derived(usize),
}

#[derive(Debug)]
struct PrimaryConstant {
    name: String,
    literal: String,
    value: f64,
}

#[derive(Debug)]
struct DerivedConstant {
    name: String,
    deps: Vec<Slot>,
    formula: Formula,
    /// Memoized value; populated exactly once, even under concurrent first reads.
    cell: OnceLock<f64>,
}

/// Named physical constants, primary and derived.
///
/// # Examples
/// ```
/// # use decaycalc::{ConstantTable, CalcError};
/// # fn main() -> Result<(), CalcError> {
/// let table = ConstantTable::standard()?;
/// let c = table.get("c")?;
/// assert_eq!(c, 299_792_458.0);
///
/// // Derived constants are computed on first access, then cached.
/// let gw = table.get("gW")?;
/// assert_eq!(gw, table.get("ge")? / table.get("θw")?.sin());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConstantTable {
    primaries: Vec<PrimaryConstant>,
    derived: Vec<DerivedConstant>,
    index: HashMap<String, Slot>,
}

impl ConstantTable {
    /// Starts an empty builder.
    pub fn builder() -> ConstantTableBuilder {
        ConstantTableBuilder::new()
    }

    /// The bundled table: charge, speed of light, Planck constants, coupling
    /// constants and the electroweak couplings derived from them.
    pub fn standard() -> CalcResult<Self> {
        data::standard_builder().build()
    }

    /// Value of the constant `name`, computing and caching it if it is a
    /// derived constant read for the first time.
    ///
    /// # Errors
    /// Returns `CalcError::UnknownConstant` if `name` is not in the table.
    pub fn get(&self, name: &str) -> CalcResult<f64> {
        let slot = self
            .index
            .get(name)
            .copied()
            .ok_or_else(|| CalcError::UnknownConstant { name: name.to_string() })?;
        Ok(self.resolve(slot))
    }

    /// Slots were validated at build time, and a derived constant only points
    /// at earlier slots, so this recursion terminates.
    fn resolve(&self, slot: Slot) -> f64 {
        match slot {
            Slot::Primary(i) => self.primaries[i].value,
            Slot::Derived(i) => {
                let entry = &self.derived[i];
                *entry.cell.get_or_init(|| {
                    let args: Vec<f64> = entry.deps.iter().map(|dep| self.resolve(*dep)).collect();
                    let value = (entry.formula)(&args);
                    trace!(constant = %entry.name, value, "derived constant computed");
                    value
                })
            }
        }
    }

    /// The source literal of a primary constant. `None` for derived or unknown names.
    pub fn literal(&self, name: &str) -> Option<&str> {
        match self.index.get(name)? {
            Slot::Primary(i) => Some(self.primaries[*i].literal.as_str()),
            Slot::Derived(_) => None,
        }
    }

    /// Whether `name` is a derived constant.
    pub fn is_derived(&self, name: &str) -> bool {
        matches!(self.index.get(name), Some(Slot::Derived(_)))
    }

    /// Whether the value of `name` is available without computation.
    /// Always true for primaries; true for derived constants once read.
    pub fn is_cached(&self, name: &str) -> bool {
        match self.index.get(name) {
            Some(Slot::Primary(_)) => true,
            Some(Slot::Derived(i)) => self.derived[*i].cell.get().is_some(),
            None => false,
        }
    }

    /// Whether `name` is a primary or derived constant.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All names: primaries first, then derived constants, each in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.primaries
            .iter()
            .map(|p| p.name.as_str())
            .chain(self.derived.iter().map(|d| d.name.as_str()))
    }

    /// Total number of constants.
    pub fn len(&self) -> usize {
        self.primaries.len() + self.derived.len()
    }

    /// Whether the table holds no constants.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for ConstantTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Constants ({} primary, {} derived)", self.primaries.len(), self.derived.len())?;
        for p in &self.primaries {
            writeln!(f, "  {} = {}", p.name, p.literal)?;
        }
        for (i, d) in self.derived.iter().enumerate() {
            writeln!(f, "  {} = {:e}", d.name, self.resolve(Slot::Derived(i)))?;
        }
        Ok(())
    }
}

/// Collects constant definitions and validates them into a [`ConstantTable`].
///
/// # Examples
/// ```
/// # use decaycalc::{ConstantTable, CalcError};
/// let table = ConstantTable::builder()
///     .primary("a", "2")
///     .derived("b", &["a"], |v| v[0] * 10.0)
///     .derived("c", &["a", "b"], |v| v[0] + v[1])
///     .build()
///     .expect("valid definitions");
/// assert_eq!(table.get("c"), Ok(22.0));
///
/// // A formula may not refer to a constant declared after it.
/// let err = ConstantTable::builder()
///     .primary("a", "2")
///     .derived("x", &["y"], |v| v[0])
///     .derived("y", &["a"], |v| v[0])
///     .build()
///     .unwrap_err();
/// assert!(matches!(err, CalcError::InvalidDefinition { .. }));
/// ```
#[derive(Debug, Default)]
pub struct ConstantTableBuilder {
    primaries: Vec<(String, String)>,
    derived: Vec<(String, Vec<String>, Formula)>,
}

impl ConstantTableBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a primary constant from its decimal literal.
    pub fn primary(mut self, name: impl Into<String>, literal: impl Into<String>) -> Self {
        self.primaries.push((name.into(), literal.into()));
        self
    }

    /// Adds a derived constant. `deps` name the values handed to `formula`,
    /// in order.
    pub fn derived(mut self, name: impl Into<String>, deps: &[&str], formula: Formula) -> Self {
        let deps = deps.iter().map(|d| d.to_string()).collect();
        self.derived.push((name.into(), deps, formula));
        self
    }

    /// Parses primary literals and resolves derived dependencies.
    ///
    /// # Errors
    /// Returns `CalcError::InvalidDefinition` if:
    /// * a name is defined twice,
    /// * a primary literal is not a finite decimal number,
    /// * a derived constant depends on itself, on a later derived constant,
    ///   or on a name that is not defined at all.
    pub fn build(self) -> CalcResult<ConstantTable> {
        let mut index: HashMap<String, Slot> = HashMap::with_capacity(self.primaries.len() + self.derived.len());

        let mut primaries = Vec::with_capacity(self.primaries.len());
        for (name, literal) in self.primaries {
            let value = literal.trim().parse::<f64>().ok().filter(|v| v.is_finite()).ok_or_else(|| {
                CalcError::InvalidDefinition {
                    message: format!("Primary constant '{}' has an invalid literal '{}'.", name, literal),
                }
            })?;
            if index.insert(name.clone(), Slot::Primary(primaries.len())).is_some() {
                return Err(duplicate(&name));
            }
            primaries.push(PrimaryConstant { name, literal, value });
        }

        let later_names: Vec<&str> = self.derived.iter().map(|(name, _, _)| name.as_str()).collect();
        let mut derived = Vec::with_capacity(self.derived.len());
        for (position, (name, dep_names, formula)) in self.derived.iter().enumerate() {
            let mut deps = Vec::with_capacity(dep_names.len());
            for dep in dep_names {
                let slot = index.get(dep.as_str()).copied().ok_or_else(|| {
                    let message = if dep == name {
                        format!("Derived constant '{}' refers to itself.", name)
                    } else if later_names[position + 1..].contains(&dep.as_str()) {
                        format!("Derived constant '{}' refers to '{}', which is declared after it.", name, dep)
                    } else {
                        format!("Derived constant '{}' refers to unknown constant '{}'.", name, dep)
                    };
                    CalcError::InvalidDefinition { message }
                })?;
                deps.push(slot);
            }
            if index.insert(name.clone(), Slot::Derived(derived.len())).is_some() {
                return Err(duplicate(name));
            }
            derived.push(DerivedConstant {
                name: name.clone(),
                deps,
                formula: *formula,
                cell: OnceLock::new(),
            });
        }

        Ok(ConstantTable { primaries, derived, index })
    }
}

fn duplicate(name: &str) -> CalcError {
    CalcError::InvalidDefinition { message: format!("Constant '{}' is defined more than once.", name) }
}
