// src/registry/builtins.rs

//! The built-in registry functions and their argument adapters.

use super::function::RegisteredFunction;
use crate::core::{Argument, CalcError, CalcResult, ParamKind};
use crate::kinematics;
use crate::masses::MassTable;

/// Particle mass lookup.
pub const MASS: &str = "m";
/// Generalized triangle identity over a list.
pub const TRIANGLE: &str = "triangleFn";
/// Energy of one product of a two-body decay.
pub const TWO_PARTICLE_DECAY_ENERGY: &str = "TwoParticleDecayEnergy";
/// Maximum energy of one product of an n-body decay.
pub const DECAY_PRODUCT_MAX_ENERGY: &str = "DecayProductMaxEnergy";

/// All built-in functions.
pub(super) fn all() -> Vec<RegisteredFunction> {
    vec![
        RegisteredFunction::new(MASS, &[ParamKind::Text], "Rest mass of a particle in MeV/c².", mass),
        RegisteredFunction::new(
            TRIANGLE,
            &[ParamKind::List],
            "Σ xᵢ² − 2·Σ_{i<j} xᵢxⱼ over a list of at least two numbers.",
            triangle,
        ),
        RegisteredFunction::new(
            TWO_PARTICLE_DECAY_ENERGY,
            &[ParamKind::Number, ParamKind::Number, ParamKind::Number, ParamKind::Number],
            "Rest-frame energy of product n (1 or 2) in the decay m → m1 + m2.",
            two_particle_decay_energy,
        ),
        RegisteredFunction::new(
            DECAY_PRODUCT_MAX_ENERGY,
            &[ParamKind::Number, ParamKind::Number, ParamKind::List],
            "Maximum energy of m1 when the remaining products recoil as one mass.",
            decay_product_max_energy,
        ),
    ]
}

// --- Argument adapters ---
// The shape has been checked by `RegisteredFunction::invoke`; these still
// report a mismatch instead of panicking.

fn number(args: &[Argument], position: usize) -> CalcResult<f64> {
    args.get(position).and_then(Argument::as_number).ok_or_else(|| mismatch(position, ParamKind::Number))
}

fn text(args: &[Argument], position: usize) -> CalcResult<&str> {
    args.get(position).and_then(Argument::as_text).ok_or_else(|| mismatch(position, ParamKind::Text))
}

fn list(args: &[Argument], position: usize) -> CalcResult<&[f64]> {
    args.get(position).and_then(Argument::as_list).ok_or_else(|| mismatch(position, ParamKind::List))
}

fn mismatch(position: usize, expected: ParamKind) -> CalcError {
    CalcError::InvalidArgument { message: format!("Argument {} must be a {}.", position + 1, expected) }
}

// --- Evaluation rules ---

fn mass(masses: &MassTable, args: &[Argument]) -> CalcResult<f64> {
    masses.lookup(text(args, 0)?)
}

fn triangle(_: &MassTable, args: &[Argument]) -> CalcResult<f64> {
    kinematics::triangle_fn(list(args, 0)?)
}

fn two_particle_decay_energy(_: &MassTable, args: &[Argument]) -> CalcResult<f64> {
    kinematics::two_particle_decay_energy(number(args, 0)?, number(args, 1)?, number(args, 2)?, number(args, 3)?)
}

fn decay_product_max_energy(_: &MassTable, args: &[Argument]) -> CalcResult<f64> {
    kinematics::decay_product_max_energy(number(args, 0)?, number(args, 1)?, list(args, 2)?)
}
