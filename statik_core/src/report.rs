//! # Text Report
//!
//! Renders any [`CalculationResult`] as a fixed-order plain-text block. The
//! layout is consumed verbatim by report and export code, so line order and
//! number formats are part of the contract:
//!
//! - computed quantities: two decimals
//! - second moment of area: scientific notation, four significant digits
//! - elastic modulus: whole MPa
//!
//! ## Example
//!
//! ```rust
//! use statik_core::calculations::{beam::calculate_simple, CalculationResult};
//! use statik_core::report::format_result;
//!
//! let result: CalculationResult = calculate_simple(6.0, 5.0, 210_000.0, 1940e-8).unwrap().into();
//! let text = format_result(&result);
//! assert!(text.contains("Max. bending moment: 22.50 kNm"));
//! assert!(text.contains("Moment of inertia: 1.940e-5 m4"));
//! ```

use crate::calculations::{BeamResult, CalculationResult, FrameResult, SlabResult};

/// Horizontal rule framing the block
const RULE: &str = "==================================================";

/// Heading printed under the first rule
const TITLE: &str = "STRUCTURAL CALCULATION";

/// Render a result as the fixed-order text block.
#[must_use]
pub fn format_result(result: &CalculationResult) -> String {
    let mut lines = vec![RULE.to_string(), TITLE.to_string(), RULE.to_string()];

    match result {
        CalculationResult::Beam(r) => beam_lines(r, &mut lines),
        CalculationResult::Frame(r) => frame_lines(r, &mut lines),
        CalculationResult::Slab(r) => slab_lines(r, &mut lines),
    }

    lines.push(format!("Status: {}", result.status().display_name()));
    lines.push(RULE.to_string());
    lines.join("\n")
}

fn format_lengths(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.2} m", v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn beam_lines(r: &BeamResult, lines: &mut Vec<String>) {
    lines.push(format!("Beam type: {}", r.beam_type.code()));
    lines.push(format!("Spans: {}", format_lengths(&r.spans_m)));
    lines.push(format!("Total length: {:.2} m", r.length_m));
    lines.push(format!("Uniform load: {:.2} kN/m", r.load_kn_per_m));
    lines.push(format!("Elastic modulus: {:.0} MPa", r.e_mpa));
    lines.push(format!("Moment of inertia: {:.3e} m4", r.i_m4));
    lines.push(String::new());
    lines.push("Results:".to_string());
    lines.push(format!("  Max. bending moment: {:.2} kNm", r.max_moment_knm));
    lines.push(format!("  Max. shear force: {:.2} kN", r.max_shear_kn));
    lines.push(format!("  Max. deflection: {:.2} mm", r.max_deflection_mm));
    lines.push(format!("  Governing span index: {}", r.governing_span_index));
    lines.push(format!("  Limit L/300: {:.2} mm", r.limit_l300_mm));
    if let Some(limit) = r.limit_l250_mm {
        lines.push(format!("  Limit L/250: {:.2} mm", limit));
    }
    if let Some(limit) = r.limit_l200_mm {
        lines.push(format!("  Limit L/200: {:.2} mm", limit));
    }
    lines.push(String::new());
    lines.push(format!(
        "Utilization L/{:.0}: {:.2}%",
        r.beam_type.dominant_limit_divisor(),
        r.utilization_pct
    ));
}

fn frame_lines(r: &FrameResult, lines: &mut Vec<String>) {
    lines.push(format!("Frame type: {}", r.frame_type.code()));
    lines.push(format!("Width: {:.2} m", r.width_m));
    lines.push(format!("Story heights: {}", format_lengths(&r.story_heights_m)));
    lines.push(format!("Total height: {:.2} m", r.height_m));
    lines.push(format!("Uniform load: {:.2} kN/m", r.load_kn_per_m));
    lines.push(format!("Elastic modulus: {:.0} MPa", r.e_mpa));
    lines.push(format!("Moment of inertia: {:.3e} m4", r.i_m4));
    lines.push(String::new());
    lines.push("Results (approximate):".to_string());
    lines.push(format!("  Column moment: {:.2} kNm", r.column_moment_knm));
    lines.push(format!("  Beam moment: {:.2} kNm", r.beam_moment_knm));
    lines.push(format!("  Vertical reaction: {:.2} kN", r.vertical_reaction_kn));
    lines.push(format!("  Horizontal reaction: {:.2} kN", r.horizontal_reaction_kn));
    lines.push(format!("  Beam deflection: {:.2} mm", r.beam_deflection_mm));
    lines.push(format!("  Limit L/300: {:.2} mm", r.deflection_limit_mm));
    lines.push(String::new());
    lines.push(format!("Utilization: {:.2}%", r.utilization_pct));
}

fn slab_lines(r: &SlabResult, lines: &mut Vec<String>) {
    lines.push(format!("Slab type: {}", r.slab_type.code()));
    lines.push(format!("Dimensions: {:.2} x {:.2} m", r.lx_m, r.ly_m));
    lines.push(format!("Thickness: {:.0} mm", r.thickness_m * 1000.0));
    lines.push(format!("Area load: {:.2} kN/m2", r.load_kn_per_m2));
    lines.push(format!("Elastic modulus: {:.0} MPa", r.e_mpa));
    lines.push(String::new());
    lines.push("Results:".to_string());
    lines.push(format!("  Max. moment x: {:.2} kNm/m", r.moment_x_knm_per_m));
    lines.push(format!("  Max. moment y: {:.2} kNm/m", r.moment_y_knm_per_m));
    lines.push(format!("  Max. deflection: {:.2} mm", r.max_deflection_mm));
    lines.push(format!("  Reinforcement x: {:.2} cm2/m", r.reinforcement_x_cm2_per_m));
    lines.push(format!("  Reinforcement y: {:.2} cm2/m", r.reinforcement_y_cm2_per_m));
    lines.push(format!("  Limit L/250: {:.2} mm", r.deflection_limit_mm));
    lines.push(String::new());
    lines.push(format!("Utilization: {:.2}%", r.utilization_pct));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{beam, frame, slab};

    #[test]
    fn formats_simple_beam_in_fixed_order() {
        let result: CalculationResult =
            beam::calculate_simple(6.0, 5.0, 210_000.0, 1940e-8).unwrap().into();
        let text = format_result(&result);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], RULE);
        assert_eq!(lines[1], TITLE);
        assert_eq!(lines[3], "Beam type: simple");
        assert_eq!(lines[4], "Spans: 6.00 m");
        assert_eq!(lines[7], "Elastic modulus: 210000 MPa");
        assert_eq!(lines[8], "Moment of inertia: 1.940e-5 m4");
        assert!(text.contains("  Max. shear force: 15.00 kN"));
        assert!(text.contains("  Max. deflection: 20.71 mm"));
        assert!(text.contains("  Limit L/300: 20.00 mm"));
        assert!(text.contains("  Limit L/250: 24.00 mm"));
        assert!(!text.contains("L/200"));
        assert!(text.contains("Utilization L/300: 103.55%"));
        assert_eq!(*lines.last().unwrap(), RULE);
    }

    #[test]
    fn formats_cantilever_against_l200() {
        let result: CalculationResult =
            beam::calculate_cantilever(3.0, 5.0, 210_000.0, 1940e-8).unwrap().into();
        let text = format_result(&result);
        assert!(text.contains("  Limit L/200: 15.00 mm"));
        assert!(text.contains("Utilization L/200:"));
    }

    #[test]
    fn formats_continuous_spans() {
        let result: CalculationResult =
            beam::calculate_continuous(&[4.0, 5.0], 5.0, 210_000.0, 1940e-8)
                .unwrap()
                .into();
        let text = format_result(&result);
        assert!(text.contains("Spans: 4.00 m, 5.00 m"));
        assert!(text.contains("Max. bending moment: 15.6"));
        assert!(text.contains("Governing span index: 1"));
    }

    #[test]
    fn formats_frame() {
        let result: CalculationResult =
            frame::calculate_two_story(8.0, 3.5, 3.0, 5.0, 210_000.0, 8360e-8)
                .unwrap()
                .into();
        let text = format_result(&result);
        assert!(text.contains("Frame type: double"));
        assert!(text.contains("Story heights: 3.50 m, 3.00 m"));
        assert!(text.contains("Moment of inertia: 8.360e-5 m4"));
        assert!(text.contains("  Column moment: 32.00 kNm"));
        assert!(text.contains("  Vertical reaction: 40.00 kN"));
        assert!(text.contains("Status: OK"));
    }

    #[test]
    fn formats_slab() {
        let result: CalculationResult = slab::calculate_continuous(5.0, 4.0, 5.0, 33_000.0, 0.20, 3)
            .unwrap()
            .into();
        let text = format_result(&result);
        assert!(text.contains("Slab type: continuous-3"));
        assert!(text.contains("Thickness: 200 mm"));
        assert!(text.contains("  Max. moment y: 6.50 kNm/m"));
        assert!(text.contains("  Limit L/250: 20.00 mm"));
    }
}
