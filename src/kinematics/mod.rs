// src/kinematics/mod.rs

//! Pure kinematics formulas backing the function registry.
//!
//! These take typed arguments and are generic over any `num_traits::Float`,
//! so they can be used directly without going through the registry's
//! positional [`Argument`](crate::core::Argument) calling convention.

use crate::core::{CalcError, CalcResult};
use num_traits::Float;

/// Selects which product of a two-body decay an energy refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    /// The product with mass `m1`.
    First,
    /// The product with mass `m2`.
    Second,
}

impl Product {
    /// Maps the evaluator-facing index `n` to a product: `1` is the first,
    /// `2` the second.
    ///
    /// # Errors
    /// Returns `CalcError::InvalidArgument` for any other value.
    pub fn from_index<T: Float>(n: T) -> CalcResult<Self> {
        if n == T::one() {
            Ok(Product::First)
        } else if n == two::<T>() {
            Ok(Product::Second)
        } else {
            Err(CalcError::InvalidArgument {
                message: "Argument 'n' must be 1 (for E1) or 2 (for E2).".to_string(),
            })
        }
    }
}

fn two<T: Float>() -> T {
    T::one() + T::one()
}

/// Generalized triangle identity over `n >= 2` values.
///
/// Computes `Σ xᵢ² − 2·Σ_{i<j} xᵢxⱼ`. The squares are summed in one pass and
/// the strict upper-triangular pairs in a second pass, in index order, so the
/// rounding follows the pairwise construction term by term.
///
/// # Arguments
/// * `values` - The list of numbers.
///
/// # Returns
/// * `Ok(value)` with the identity's value.
/// * `Err(CalcError::InvalidArgument)` if fewer than two values are given.
pub fn triangle_fn<T: Float>(values: &[T]) -> CalcResult<T> {
    if values.len() < 2 {
        return Err(CalcError::InvalidArgument {
            message: "triangleFn requires a list of at least two numbers.".to_string(),
        });
    }

    let n = values.len();

    let mut sum_of_squares = T::zero();
    for &x in values {
        sum_of_squares = sum_of_squares + x * x;
    }

    let mut sum_of_products = T::zero();
    for i in 0..n {
        for j in (i + 1)..n {
            sum_of_products = sum_of_products + values[i] * values[j];
        }
    }

    Ok(sum_of_squares - two::<T>() * sum_of_products)
}

/// Rejects decays that violate conservation or would divide by zero.
/// Forbidden is checked before zero mass.
fn check_decay<T: Float>(m: T, product_mass_sum: T, relation: &str) -> CalcResult<()> {
    if m < product_mass_sum {
        return Err(CalcError::ForbiddenDecay {
            message: format!("Decay is forbidden or results in zero kinetic energy ({}).", relation),
        });
    }
    if m == T::zero() {
        return Err(CalcError::ZeroParentMass {
            message: "Parent mass (m) cannot be zero for this calculation.".to_string(),
        });
    }
    Ok(())
}

/// Rest-frame energy of one product. Assumes `check_decay` passed.
fn rest_frame_energy<T: Float>(m: T, m1: T, m2: T, product: Product) -> T {
    let m_sq = m * m;
    let m1_sq = m1 * m1;
    let m2_sq = m2 * m2;

    let numerator = match product {
        Product::First => m_sq + m1_sq - m2_sq,
        Product::Second => m_sq - m1_sq + m2_sq,
    };

    numerator / (two::<T>() * m)
}

/// Energy of one product of a two-body decay in the parent's rest frame,
/// with the product chosen by the evaluator-facing index `n`.
///
/// # Arguments
/// * `m` - Parent rest mass.
/// * `m1`, `m2` - Product rest masses.
/// * `n` - `1` for the energy of `m1`, `2` for the energy of `m2`.
///
/// # Returns
/// * `Ok(energy)` in the same units as the masses.
/// * `Err(CalcError::ForbiddenDecay)` if `m < m1 + m2`.
/// * `Err(CalcError::ZeroParentMass)` if `m == 0`.
/// * `Err(CalcError::InvalidArgument)` if `n` is neither 1 nor 2.
pub fn two_particle_decay_energy<T: Float>(m: T, m1: T, m2: T, n: T) -> CalcResult<T> {
    check_decay(m, m1 + m2, "m < m1 + m2")?;
    let product = Product::from_index(n)?;
    Ok(rest_frame_energy(m, m1, m2, product))
}

/// Typed variant of [`two_particle_decay_energy`] taking a [`Product`] selector.
pub fn two_body_energy<T: Float>(m: T, m1: T, m2: T, product: Product) -> CalcResult<T> {
    check_decay(m, m1 + m2, "m < m1 + m2")?;
    Ok(rest_frame_energy(m, m1, m2, product))
}

/// Maximum energy of particle 1 in an n-body decay.
///
/// The remaining products are summed into one effective mass `M` recoiling
/// coherently against particle 1, then the two-body formula is applied to
/// `(m, m1, M)`. An empty `products` slice means `M = 0`.
///
/// # Returns
/// * `Ok(energy)` equal to `(m² + m1² − M²) / (2m)`.
/// * `Err(CalcError::ForbiddenDecay)` if `m < m1 + M`.
/// * `Err(CalcError::ZeroParentMass)` if `m == 0`.
pub fn decay_product_max_energy<T: Float>(m: T, m1: T, products: &[T]) -> CalcResult<T> {
    let recoil_mass = products.iter().fold(T::zero(), |acc, &x| acc + x);
    check_decay(m, m1 + recoil_mass, "m < m1 + M")?;
    Ok(rest_frame_energy(m, m1, recoil_mass, Product::First))
}
