// src/constants/data.rs

use super::ConstantTableBuilder;
use std::f64::consts::PI;

/// Bundled constant definitions.
///
/// SI units unless the name says otherwise. `α` is 1/137.035999177 and `θw`
/// is the weak mixing angle 28.76° in radians, both written out to full
/// `f64` precision.
pub(super) fn standard_builder() -> ConstantTableBuilder {
    ConstantTableBuilder::new()
        .primary("e", "1.602176634e-19")
        .primary("c", "299792458")
        .primary("h", "6.62607015e-34")
        .primary("R", "8.3144621")
        .primary("G", "6.6743e-11")
        .primary("m_e", "9.1093837015e-31")
        .primary("ℏ", "1.05457e-34")
        .primary("ℏ_MeV", "6.58212e-22")
        .primary("α", "0.0072973525643314245")
        .primary("θw", "0.5019566928735693")
        .primary("gg", "1.214")
        // Vacuum permittivity
        .derived("ε0", &["e", "α", "ℏ", "c"], |v| (v[0] * v[0]) / (v[1] * v[2] * v[3] * 4.0 * PI))
        // Electromagnetic coupling
        .derived("ge", &["α"], |v| (4.0 * PI * v[0]).sqrt())
        .derived("gW", &["ge", "θw"], |v| v[0] / v[1].sin())
        .derived("gZ", &["ge", "θw"], |v| v[0] / (v[1].sin() * v[1].cos()))
}
