//! # Portal Frame Approximations
//!
//! Coarse closed-form estimates for rigid portal frames with a uniform load
//! `q` on the horizontal member of width `B`. These replace a rigid-frame
//! analysis and are orientation values only; the coefficients are fixed and
//! reproduced as-is.

/// Roof pitch assumed for the horizontal thrust of a single-story frame (degrees)
pub const ROOF_PITCH_DEG: f64 = 30.0;

// =============================================================================
// SINGLE STORY
// =============================================================================

/// Column head moment M = qB²/12
#[inline]
pub fn single_story_column_moment(q: f64, b: f64) -> f64 {
    q * b * b / 12.0
}

/// Beam moment M = qB²/24
#[inline]
pub fn single_story_beam_moment(q: f64, b: f64) -> f64 {
    q * b * b / 24.0
}

/// Vertical reaction per column V = qB/2
#[inline]
pub fn single_story_vertical_reaction(q: f64, b: f64) -> f64 {
    q * b / 2.0
}

/// Horizontal reaction H = qB·tan(30°)/4
#[inline]
pub fn single_story_horizontal_reaction(q: f64, b: f64) -> f64 {
    q * b * ROOF_PITCH_DEG.to_radians().tan() / 4.0
}

// =============================================================================
// TWO STORY
// =============================================================================

/// Column moment M = qB²/10 (extra axial load from the upper level)
#[inline]
pub fn two_story_column_moment(q: f64, b: f64) -> f64 {
    q * b * b / 10.0
}

/// Beam moment M = qB²/20
#[inline]
pub fn two_story_beam_moment(q: f64, b: f64) -> f64 {
    q * b * b / 20.0
}

/// Vertical reaction V = qB (two levels of qB/2)
#[inline]
pub fn two_story_vertical_reaction(q: f64, b: f64) -> f64 {
    q * b
}

/// Horizontal reaction H = qB/20
#[inline]
pub fn two_story_horizontal_reaction(q: f64, b: f64) -> f64 {
    q * b / 20.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_single_story() {
        // q = 5 kN/m, B = 8 m
        assert!(approx_eq(single_story_column_moment(5.0, 8.0), 320.0 / 12.0));
        assert!(approx_eq(single_story_beam_moment(5.0, 8.0), 320.0 / 24.0));
        assert!(approx_eq(single_story_vertical_reaction(5.0, 8.0), 20.0));
        // 40 * 0.57735 / 4 = 5.7735
        assert!((single_story_horizontal_reaction(5.0, 8.0) - 5.773_502_7).abs() < 1e-6);
    }

    #[test]
    fn test_two_story() {
        assert!(approx_eq(two_story_column_moment(5.0, 8.0), 32.0));
        assert!(approx_eq(two_story_beam_moment(5.0, 8.0), 16.0));
        assert!(approx_eq(two_story_vertical_reaction(5.0, 8.0), 40.0));
        assert!(approx_eq(two_story_horizontal_reaction(5.0, 8.0), 2.0));
    }

    #[test]
    fn test_two_story_vertical_is_double_single() {
        assert!(approx_eq(
            two_story_vertical_reaction(3.5, 7.0),
            2.0 * single_story_vertical_reaction(3.5, 7.0)
        ));
    }
}
