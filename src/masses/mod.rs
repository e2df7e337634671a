// src/masses/mod.rs

//! Particle rest masses in MeV/c².
//!
//! [`ParticleCatalog`] keeps masses in ordered, named groups for presentation.
//! The registry never sees the groups: callers flatten a catalog into a
//! [`MassTable`] and inject that.

mod data;

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// Flat mapping from particle identifier to rest mass (MeV/c²).
///
/// This is external input; entries are not validated on insertion. Lookups
/// through [`MassTable::lookup`] reject non-finite values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MassTable {
    entries: HashMap<String, f64>,
}

impl MassTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a mass. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, mass: f64) -> Option<f64> {
        self.entries.insert(key.into(), mass)
    }

    /// Raw stored value for `key`, without validation.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.get(key).copied()
    }

    /// Validated lookup.
    ///
    /// # Errors
    /// * `CalcError::UnknownParticle` if `key` is absent.
    /// * `CalcError::InvalidMassValue` if the stored value is NaN or infinite.
    pub fn lookup(&self, key: &str) -> CalcResult<f64> {
        let mass = self.get(key).ok_or_else(|| CalcError::UnknownParticle { key: key.to_string() })?;
        if mass.is_finite() {
            Ok(mass)
        } else {
            Err(CalcError::InvalidMassValue { key: key.to_string(), value: mass })
        }
    }

    /// Whether `key` has an entry (finite or not).
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(identifier, mass)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for MassTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut table = MassTable::new();
        for (key, mass) in iter {
            table.insert(key, mass);
        }
        table
    }
}

/// One presentational group of particles, e.g. "Baryons (Spin 1/2)".
#[derive(Debug, Clone, PartialEq)]
pub struct MassGroup {
    name: String,
    entries: Vec<(String, f64)>,
}

impl MassGroup {
    /// Creates an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), entries: Vec::new() }
    }

    /// Appends an entry, keeping insertion order.
    pub fn with(mut self, key: impl Into<String>, mass: f64) -> Self {
        self.entries.push((key.into(), mass));
        self
    }

    /// Group display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }
}

/// Ordered collection of [`MassGroup`]s, the grouped source form of the mass data.
///
/// Serializes to and from a JSON object of objects,
/// `{"<group>": {"<id>": <MeV>, ...}, ...}`, preserving order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ParticleCatalog {
    groups: Vec<MassGroup>,
}

impl ParticleCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// The bundled catalog of fundamental particles, baryons and mesons.
    pub fn standard() -> Self {
        data::standard_catalog()
    }

    /// Appends a group.
    pub fn with_group(mut self, group: MassGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Groups in declaration order.
    pub fn groups(&self) -> &[MassGroup] {
        &self.groups
    }

    /// Finds a group by name.
    pub fn group(&self, name: &str) -> Option<&MassGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Flattens all groups into a single [`MassTable`].
    ///
    /// Groups are walked in order. When an identifier appears more than once,
    /// the later entry wins and a warning is logged.
    pub fn flatten(&self) -> MassTable {
        let mut table = MassTable::new();
        for group in &self.groups {
            for (key, mass) in &group.entries {
                if let Some(previous) = table.insert(key.clone(), *mass) {
                    warn!(
                        particle = %key,
                        group = %group.name,
                        previous,
                        replacement = *mass,
                        "duplicate particle identifier while flattening mass catalog"
                    );
                }
            }
        }
        table
    }
}

impl Default for ParticleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Map<String, Value>> for ParticleCatalog {
    type Error = CalcError;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut catalog = ParticleCatalog::new();
        for (group_name, group_value) in raw {
            let Value::Object(entries) = group_value else {
                return Err(CalcError::Config {
                    message: format!("Mass group '{}' must be an object of particle masses.", group_name),
                });
            };
            let mut group = MassGroup::new(group_name.clone());
            for (key, mass_value) in entries {
                let mass = mass_value.as_f64().ok_or_else(|| CalcError::Config {
                    message: format!("Mass for particle '{}' in group '{}' is not a number: {}", key, group_name, mass_value),
                })?;
                group = group.with(key, mass);
            }
            catalog.groups.push(group);
        }
        Ok(catalog)
    }
}

impl From<ParticleCatalog> for Map<String, Value> {
    fn from(catalog: ParticleCatalog) -> Self {
        catalog
            .groups
            .into_iter()
            .map(|group| {
                let entries: Map<String, Value> = group
                    .entries
                    .into_iter()
                    // Non-finite masses have no JSON form and become null.
                    .map(|(key, mass)| (key, serde_json::Number::from_f64(mass).map_or(Value::Null, Value::Number)))
                    .collect();
                (group.name, Value::Object(entries))
            })
            .collect()
    }
}

impl fmt::Display for ParticleCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            writeln!(f, "{}:", group.name)?;
            for (key, mass) in &group.entries {
                writeln!(f, "  {:<6} {:>12.3} MeV/c²", key, mass)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_reports_missing_and_non_finite_entries() {
        let mut table = MassTable::new();
        table.insert("p", 938.27);
        table.insert("bad", f64::NAN);
        table.insert("huge", f64::INFINITY);

        assert_eq!(table.lookup("p"), Ok(938.27));
        assert_eq!(table.lookup("n"), Err(CalcError::UnknownParticle { key: "n".to_string() }));
        assert!(matches!(table.lookup("bad"), Err(CalcError::InvalidMassValue { .. })));
        assert!(matches!(table.lookup("huge"), Err(CalcError::InvalidMassValue { .. })));
    }

    #[test]
    fn flatten_merges_groups_and_later_entries_win() {
        let catalog = ParticleCatalog::new()
            .with_group(MassGroup::new("A").with("x", 1.0).with("y", 2.0))
            .with_group(MassGroup::new("B").with("x", 3.0));

        let table = catalog.flatten();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("x"), Some(3.0));
        assert_eq!(table.get("y"), Some(2.0));
    }

    #[test]
    fn standard_catalog_has_all_groups() {
        let catalog = ParticleCatalog::standard();
        let names: Vec<&str> = catalog.groups().iter().map(|g| g.name()).collect();
        assert_eq!(
            names,
            vec![
                "Fundamental Particles",
                "Baryons (Spin 1/2)",
                "Baryons (Spin 3/2)",
                "Pseudoscalar Mesons (Spin 0)",
                "Vector Mesons (Spin 1)",
            ]
        );
    }

    #[test]
    fn standard_catalog_spot_values() {
        let table = ParticleCatalog::standard().flatten();
        assert_eq!(table.get("p"), Some(938.27));
        assert_eq!(table.get("μ"), Some(105.66));
        assert_eq!(table.get("J/ψ"), Some(3096.90));
        assert_eq!(table.get("η'"), Some(957.78));
        assert_eq!(table.get("γ"), Some(0.0));
        assert!(table.iter().all(|(_, m)| m.is_finite()));
    }

    #[test]
    fn catalog_rejects_non_numeric_mass() {
        let raw: Map<String, Value> = serde_json::from_str(r#"{"G": {"p": "heavy"}}"#).unwrap();
        let err = ParticleCatalog::try_from(raw).unwrap_err();
        assert!(matches!(err, CalcError::Config { .. }));
    }
}
