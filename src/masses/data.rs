// src/masses/data.rs

use super::{MassGroup, ParticleCatalog};

/// Bundled particle masses in MeV/c².
pub(super) fn standard_catalog() -> ParticleCatalog {
    ParticleCatalog::new()
        .with_group(
            // Quarks, leptons and bosons
            MassGroup::new("Fundamental Particles")
                .with("u", 2.16)
                .with("d", 4.70)
                .with("s", 93.5)
                .with("c", 1273.0)
                .with("b", 4183.0)
                .with("t", 172520.00)
                .with("e", 0.511)
                .with("μ", 105.66)
                .with("τ", 1776.93)
                .with("ν_e", 0.0) // approx 0
                .with("ν_μ", 0.0)
                .with("ν_τ", 0.0)
                .with("γ", 0.0)
                .with("g", 0.0)
                .with("W", 80369.2)
                .with("Z", 91188.0)
                .with("H", 125200.0),
        )
        .with_group(
            MassGroup::new("Baryons (Spin 1/2)")
                // Nucleons
                .with("p", 938.27)
                .with("n", 939.57)
                .with("Λ", 1115.68)
                .with("Σ+", 1189.37)
                .with("Σ0", 1192.64)
                .with("Σ-", 1197.45)
                .with("Ξ0", 1314.86)
                .with("Ξ-", 1321.71)
                // Charmed
                .with("Λc+", 2286.46)
                // Bottom
                .with("Σb+", 5810.56)
                .with("Σb-", 5815.64),
        )
        .with_group(
            MassGroup::new("Baryons (Spin 3/2)")
                .with("Δ", 1232.0) // average
                .with("Σ*", 1385.0)
                .with("Ξ*", 1530.0)
                .with("Ω-", 1672.45),
        )
        .with_group(
            MassGroup::new("Pseudoscalar Mesons (Spin 0)")
                .with("π+", 139.57)
                .with("π-", 139.57)
                .with("π0", 134.98)
                .with("K+", 493.68)
                .with("K-", 493.68)
                .with("K0", 497.61)
                .with("η", 547.86)
                .with("η'", 957.78)
                // Heavy flavour
                .with("D+", 1869.66)
                .with("D-", 1869.66)
                .with("D0", 1864.84)
                .with("Ds", 1968.35)
                .with("B+", 5279.41)
                .with("B-", 5279.41)
                .with("B0", 5279.72),
        )
        .with_group(
            MassGroup::new("Vector Mesons (Spin 1)")
                .with("ρ", 775.26)
                .with("K*", 894.0)
                .with("ω", 782.66)
                .with("J/ψ", 3096.90) // charmonium
                .with("D*0", 2006.85)
                .with("D*+", 2010.26)
                .with("D*-", 2010.26)
                .with("Υ", 9460.40) // bottomonium
                .with("φ", 1019.46),
        )
}
