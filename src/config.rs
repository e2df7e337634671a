// src/config.rs

//! Data configuration: the particle mass catalog and list variables, loadable
//! from JSON.
//!
//! The JSON layout mirrors the bundled data:
//!
//! ```json
//! {
//!   "masses": { "Baryons (Spin 1/2)": { "p": 938.27, "n": 939.57 } },
//!   "lists":  { "Nucleons": ["m(p)", "m(n)"] }
//! }
//! ```
//!
//! A missing section falls back to the bundled data. Group, entry and list
//! order is preserved.

use crate::core::CalcResult;
use crate::lists::ListVariables;
use crate::masses::ParticleCatalog;
use crate::registry::FunctionRegistry;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Data injected into a [`FunctionRegistry`] at startup and consumed by the evaluator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Grouped particle masses in MeV/c².
    #[serde(default)]
    pub masses: ParticleCatalog,
    /// Named lists of call expressions.
    #[serde(default)]
    pub lists: ListVariables,
}

impl DataConfig {
    /// The bundled catalog and lists.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    /// Returns `CalcError::Config` for malformed JSON, a non-numeric mass or a
    /// non-string list entry.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json_string(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the list variables against `registry`, then injects the
    /// flattened mass catalog. Nothing is injected if validation fails.
    pub fn install(&self, registry: &FunctionRegistry) -> CalcResult<()> {
        self.lists.validate(registry)?;
        let table = self.masses.flatten();
        debug!(
            groups = self.masses.groups().len(),
            particles = table.len(),
            lists = self.lists.len(),
            "installing data configuration"
        );
        registry.set_masses_data(table);
        Ok(())
    }
}
