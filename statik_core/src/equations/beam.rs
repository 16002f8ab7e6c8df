//! # Beam Formulas
//!
//! Closed-form equations for prismatic beams under a uniform load over the
//! full length, plus the serviceability helpers shared by every analyzer.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `w` = Uniform load intensity (force per unit length)
//! - `M` = Bending moment
//! - `V` = Shear force
//! - `δ` = Deflection
//! - `E` = Modulus of elasticity
//! - `I` = Moment of inertia
//!
//! All functions assume consistent units; the analyzers pass lengths in m,
//! loads in kN/m and E in kN/m², which yields moments in kNm, shears in kN and
//! deflections in m.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Schneider Bautabellen, Section 4 (Baustatik)

// =============================================================================
// SIMPLY-SUPPORTED BEAM, UNIFORM LOAD
// =============================================================================

/// Maximum moment for uniform load (at midspan)
///
/// # Formula
/// M_max = wL²/8
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// Maximum shear for uniform load (at the supports)
///
/// # Formula
/// V_max = wL/2
#[inline]
pub fn uniform_load_max_shear(w: f64, l: f64) -> f64 {
    w * l / 2.0
}

/// Maximum deflection for uniform load (at midspan)
///
/// # Formula
/// δ_max = 5wL⁴ / (384EI)
#[inline]
pub fn uniform_load_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    5.0 * w * l.powi(4) / (384.0 * e * i)
}

/// Shear at position x from the left support (uniform load)
///
/// # Formula
/// V(x) = w(L/2 - x)
#[inline]
pub fn uniform_load_shear_at(w: f64, l: f64, x: f64) -> f64 {
    w * (l / 2.0 - x)
}

/// Moment at position x from the left support (uniform load)
///
/// # Formula
/// M(x) = wx(L - x)/2
#[inline]
pub fn uniform_load_moment_at(w: f64, l: f64, x: f64) -> f64 {
    w * x * (l - x) / 2.0
}

/// Deflection at position x from the left support (uniform load)
///
/// # Formula
/// δ(x) = wx(L³ - 2Lx² + x³) / (24EI)
#[inline]
pub fn uniform_load_deflection_at(w: f64, l: f64, x: f64, e: f64, i: f64) -> f64 {
    w * x * (l.powi(3) - 2.0 * l * x * x + x.powi(3)) / (24.0 * e * i)
}

// =============================================================================
// CANTILEVER, UNIFORM LOAD
// Fixed at x=0, free at x=L
// =============================================================================

/// Moment at the fixed end for uniform load
///
/// # Formula
/// M_fixed = wL²/2
#[inline]
pub fn cantilever_uniform_fixed_moment(w: f64, l: f64) -> f64 {
    w * l * l / 2.0
}

/// Shear at the fixed end for uniform load
///
/// # Formula
/// V_fixed = wL
#[inline]
pub fn cantilever_uniform_max_shear(w: f64, l: f64) -> f64 {
    w * l
}

/// Deflection at the free end for uniform load
///
/// # Formula
/// δ_max = wL⁴ / (8EI)
#[inline]
pub fn cantilever_uniform_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    w * l.powi(4) / (8.0 * e * i)
}

// =============================================================================
// CONTINUITY
// =============================================================================

/// Empirical reduction applied to simple-span results of a continuous member.
///
/// | spans | factor |
/// |-------|--------|
/// | 2     | 0.70   |
/// | 3     | 0.65   |
/// | 4     | 0.60   |
///
/// This approximates the stiffening effect of continuity; it is not the result
/// of an indeterminate analysis. Returns `None` for any other span count.
#[inline]
pub fn continuity_reduction_factor(span_count: usize) -> Option<f64> {
    match span_count {
        2 => Some(0.70),
        3 => Some(0.65),
        4 => Some(0.60),
        _ => None,
    }
}

// =============================================================================
// SERVICEABILITY
// =============================================================================

/// Allowed deflection L/n, in the unit of `span`
#[inline]
pub fn deflection_limit(span: f64, divisor: f64) -> f64 {
    span / divisor
}

/// Utilization of a deflection limit in percent
///
/// Exactly 100 when `actual == limit`.
#[inline]
pub fn utilization_pct(actual: f64, limit: f64) -> f64 {
    actual / limit * 100.0
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 1e-9
    }

    #[test]
    fn test_shear_at_supports_and_midspan() {
        // 6 m beam, 5 kN/m
        let at_support = uniform_load_shear_at(5.0, 6.0, 0.0);
        assert!(approx_eq(at_support, uniform_load_max_shear(5.0, 6.0)));
        assert!(approx_eq(uniform_load_shear_at(5.0, 6.0, 3.0), 0.0));
        assert!(approx_eq(uniform_load_shear_at(5.0, 6.0, 6.0), -15.0));
    }

    #[test]
    fn test_moment_at_matches_maximum() {
        let midspan = uniform_load_moment_at(5.0, 6.0, 3.0);
        assert!(approx_eq(midspan, uniform_load_max_moment(5.0, 6.0)));
        assert!(approx_eq(uniform_load_moment_at(5.0, 6.0, 0.0), 0.0));
        assert!(approx_eq(uniform_load_moment_at(5.0, 6.0, 6.0), 0.0));
        assert!(approx_eq(uniform_load_moment_at(5.0, 6.0, 1.5), 5.0 * 1.5 * 4.5 / 2.0));
    }

    #[test]
    fn test_deflection_at_matches_maximum() {
        let mid = uniform_load_deflection_at(1.0, 10.0, 5.0, 1.0, 1.0);
        assert!(approx_eq(mid, uniform_load_max_deflection(1.0, 10.0, 1.0, 1.0)), "δ = {}", mid);
        assert!(approx_eq(uniform_load_deflection_at(1.0, 10.0, 0.0, 1.0, 1.0), 0.0));
        assert!(approx_eq(uniform_load_deflection_at(1.0, 10.0, 10.0, 1.0, 1.0), 0.0));
        // Symmetric about midspan
        let left = uniform_load_deflection_at(1.0, 10.0, 2.0, 1.0, 1.0);
        let right = uniform_load_deflection_at(1.0, 10.0, 8.0, 1.0, 1.0);
        assert!(approx_eq(left, right));
    }

    #[test]
    fn test_uniform_load_max_moment() {
        // M = 5 * 36 / 8 = 22.5 kNm
        let m = uniform_load_max_moment(5.0, 6.0);
        assert!(approx_eq(m, 22.5), "M_max = {} (expected 22.5)", m);
    }

    #[test]
    fn test_uniform_load_deflection() {
        // 10 m, 1 kN/m, EI = 1 → 5 * 10000 / 384
        let d = uniform_load_max_deflection(1.0, 10.0, 1.0, 1.0);
        assert!(approx_eq(d, 50000.0 / 384.0), "δ = {}", d);
    }

    #[test]
    fn test_cantilever_is_four_times_simple_moment() {
        let simple = uniform_load_max_moment(7.5, 4.2);
        let cantilever = cantilever_uniform_fixed_moment(7.5, 4.2);
        assert!(approx_eq(cantilever, 4.0 * simple));
    }

    #[test]
    fn test_cantilever_shear_and_deflection() {
        assert!(approx_eq(cantilever_uniform_max_shear(5.0, 3.0), 15.0));
        // wL⁴/8EI with EI = 1: 81 / 8
        assert!(approx_eq(cantilever_uniform_max_deflection(1.0, 3.0, 1.0, 1.0), 10.125));
    }

    #[test]
    fn test_continuity_factors() {
        assert_eq!(continuity_reduction_factor(2), Some(0.70));
        assert_eq!(continuity_reduction_factor(3), Some(0.65));
        assert_eq!(continuity_reduction_factor(4), Some(0.60));
        assert_eq!(continuity_reduction_factor(1), None);
        assert_eq!(continuity_reduction_factor(5), None);
    }

    #[test]
    fn test_utilization_at_limit() {
        assert_eq!(utilization_pct(20.0, 20.0), 100.0);
        assert!(approx_eq(utilization_pct(10.0, 20.0), 50.0));
        assert!(approx_eq(deflection_limit(6000.0, 300.0), 20.0));
    }
}
