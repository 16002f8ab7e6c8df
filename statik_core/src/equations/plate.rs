//! # Plate Formulas
//!
//! Simplified isotropic plate bending for rectangular slabs supported on all
//! edges, and the reinforcement estimate derived from the bending moment.
//!
//! ## Notation
//!
//! - `Lx`, `Ly` = In-plane dimensions
//! - `q` = Area load
//! - `h` = Plate thickness
//! - `ν` = Poisson's ratio
//! - `D` = Flexural rigidity Eh³ / (12(1-ν²))
//! - `z` = Internal lever arm
//! - `f_yd` = Design yield strength of the reinforcement

/// Poisson's ratio for concrete
pub const POISSON_RATIO_CONCRETE: f64 = 0.2;

/// Deflection coefficient for a plate supported on all edges
pub const PLATE_DEFLECTION_COEFFICIENT: f64 = 0.00406;

/// Moment in the secondary direction as a fraction of the governing one
pub const CROSS_DISTRIBUTION_FACTOR: f64 = 0.5;

/// Characteristic yield strength of B500 reinforcing steel (MPa)
pub const REBAR_YIELD_STRENGTH_MPA: f64 = 500.0;

/// Partial safety factor for reinforcing steel γ_s
pub const REBAR_SAFETY_FACTOR: f64 = 1.15;

/// Lever arm as a fraction of the plate thickness
pub const LEVER_ARM_RATIO: f64 = 0.9;

/// Flexural rigidity of a plate
///
/// # Formula
/// D = Eh³ / (12(1-ν²))
#[inline]
pub fn flexural_rigidity(e: f64, h: f64, nu: f64) -> f64 {
    e * h.powi(3) / (12.0 * (1.0 - nu * nu))
}

/// Moments per unit width in x and y for a uniformly loaded plate.
///
/// The shorter-or-equal direction is treated as a one-way strip (qL²/8) and the
/// other direction receives [`CROSS_DISTRIBUTION_FACTOR`] of it:
///
/// - Ly/Lx ≥ 1: m_x = q·Lx²/8, m_y = 0.5·m_x
/// - Ly/Lx < 1: m_y = q·Ly²/8, m_x = 0.5·m_y
///
/// Returns `(m_x, m_y)`.
pub fn principal_moments(q: f64, lx: f64, ly: f64) -> (f64, f64) {
    let aspect_ratio = ly / lx;
    if aspect_ratio >= 1.0 {
        let m_x = q * lx * lx / 8.0;
        (m_x, m_x * CROSS_DISTRIBUTION_FACTOR)
    } else {
        let m_y = q * ly * ly / 8.0;
        (m_y * CROSS_DISTRIBUTION_FACTOR, m_y)
    }
}

/// Maximum plate deflection
///
/// # Formula
/// w_max = k·q·Lx⁴ / D, k = 0.00406
#[inline]
pub fn plate_max_deflection(q: f64, lx: f64, d: f64) -> f64 {
    PLATE_DEFLECTION_COEFFICIENT * q * lx.powi(4) / d
}

/// Design yield strength f_yd = f_yk / γ_s
#[inline]
pub fn design_yield_strength(f_yk: f64, gamma_s: f64) -> f64 {
    f_yk / gamma_s
}

/// Lever arm z = 0.9·h
#[inline]
pub fn lever_arm(h: f64) -> f64 {
    LEVER_ARM_RATIO * h
}

/// Required tensile reinforcement A_s = M / (z·f_yd)
///
/// With M in Nmm/m, z in mm and f_yd in N/mm² the result is mm²/m.
#[inline]
pub fn required_reinforcement(m: f64, z: f64, f_yd: f64) -> f64 {
    m / (z * f_yd)
}
