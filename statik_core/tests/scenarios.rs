//! Reference scenarios checked through the public API.

use approx::assert_relative_eq;

use statik_core::calculations::beam_diagram::{compare_sections, SimpleBeamDiagram};
use statik_core::calculations::{beam, frame, slab, CalculationItem, CalculationResult};
use statik_core::materials::{material_modulus, section_inertia, suggest_sections};
use statik_core::{format_result, CalcError, ServiceabilityStatus};

#[test]
fn simple_beam_ipe200_over_six_meters() {
    let e = material_modulus("Stahl (S235)");
    let i = section_inertia("IPE 200");
    let result = beam::calculate_simple(6.0, 5.0, e, i).unwrap();

    assert_relative_eq!(result.max_moment_knm, 22.5);
    assert_relative_eq!(result.max_shear_kn, 15.0);
    assert_relative_eq!(result.max_deflection_mm, 20.71, epsilon = 0.01);
    assert_relative_eq!(result.limit_l300_mm, 20.0);
    assert_relative_eq!(result.utilization_pct, 103.6, epsilon = 0.1);
}

#[test]
fn cantilever_three_meters() {
    let result = beam::calculate_cantilever(3.0, 5.0, 210_000.0, 1940e-8).unwrap();
    let expected_mm = 5.0 * 3.0_f64.powi(4) / (8.0 * 210_000.0 * 1000.0 * 1940e-8) * 1000.0;

    assert_relative_eq!(result.max_moment_knm, 22.5);
    assert_relative_eq!(result.max_shear_kn, 15.0);
    assert_relative_eq!(result.max_deflection_mm, expected_mm, max_relative = 1e-12);
    assert_relative_eq!(result.limit_l200_mm.unwrap(), 15.0);
    assert_relative_eq!(result.utilization_pct, expected_mm / 15.0 * 100.0, max_relative = 1e-12);
}

#[test]
fn continuous_beam_four_and_five_meters() {
    let result = beam::calculate_continuous(&[4.0, 5.0], 5.0, 210_000.0, 1940e-8).unwrap();
    let simple = beam::calculate_simple(5.0, 5.0, 210_000.0, 1940e-8).unwrap();

    assert_eq!(result.governing_span_index, 1);
    assert_relative_eq!(result.max_moment_knm, 15.625);
    assert_relative_eq!(
        result.max_deflection_mm,
        simple.max_deflection_mm * 0.70,
        max_relative = 1e-12
    );
}

#[test]
fn continuous_beam_with_four_spans_is_rejected() {
    let err =
        beam::calculate_continuous(&[4.0, 4.0, 4.0, 4.0], 5.0, 210_000.0, 1940e-8).unwrap_err();
    assert!(matches!(err, CalcError::UnsupportedSpanCount { count: 4, .. }));
}

#[test]
fn unknown_material_uses_default_modulus() {
    assert_relative_eq!(material_modulus("Titanium Grade 5"), 210_000.0);
}

#[test]
fn undersized_section_gets_suggestions() {
    let required = beam::required_inertia_m4(6.0, 5.0, 210_000.0).unwrap();
    // IPE 200 is about 3 % short of L/300 here, inside the 10 % tolerance
    let labels: Vec<String> = suggest_sections(required).into_iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!["IPE 200", "IPE 220", "IPE 240"]);
}

#[test]
fn frame_and_slab_through_json_requests() {
    let frame_request = r#"{
        "type": "Frame",
        "frame_type": "single",
        "width_m": 8.0,
        "story_heights_m": [4.0],
        "load_kn_per_m": 5.0,
        "e_mpa": 210000.0,
        "i_m4": 1.94e-5
    }"#;
    let item: CalculationItem = serde_json::from_str(frame_request).unwrap();
    let result = item.calculate().unwrap();
    match &result {
        CalculationResult::Frame(frame) => {
            assert_relative_eq!(frame.column_moment_knm, 5.0 * 64.0 / 12.0);
            assert_relative_eq!(frame.vertical_reaction_kn, 20.0);
        }
        other => panic!("expected a frame result, got {}", other.calc_type()),
    }
    // 8 m lintel with an IPE 200 is far beyond B/300
    assert_eq!(result.status(), ServiceabilityStatus::Exceeded);

    let e = material_modulus("Beton C30/37");
    let slab = slab::calculate_single_span(6.0, 4.0, 5.0, e, 0.20).unwrap();
    assert_relative_eq!(slab.reinforcement_y_cm2_per_m, 1.2778, epsilon = 1e-3);
    assert!(format_result(&slab.into()).contains("Reinforcement y: 1.28 cm2/m"));
}

#[test]
fn two_story_frame_reports_total_height() {
    let result = frame::calculate_two_story(6.0, 3.0, 2.8, 4.0, 210_000.0, 3890e-8).unwrap();
    assert_relative_eq!(result.height_m, 5.8);
    assert_relative_eq!(result.horizontal_reaction_kn, 1.2);
}

#[test]
fn extreme_but_valid_inputs_fail_instead_of_overflowing() {
    let long = beam::calculate_simple(1e80, 5.0, 210_000.0, 1940e-8).unwrap_err();
    assert_eq!(long.error_code(), "CALCULATION_FAILED");

    // An overflowing plate rigidity would otherwise show zero deflection
    let stiff = slab::calculate_single_span(6.0, 4.0, 5.0, 1e306, 0.2).unwrap_err();
    assert!(matches!(stiff, CalcError::CalculationFailed { .. }));
}

#[test]
fn every_result_reads_back_from_json() {
    let items = [
        r#"{"type": "Beam", "beam_type": "cantilever", "spans_m": [3.0],
            "load_kn_per_m": 5.0, "e_mpa": 210000.0, "i_m4": 1.94e-5}"#,
        r#"{"type": "Frame", "frame_type": "double", "width_m": 8.0,
            "story_heights_m": [3.5, 3.0], "load_kn_per_m": 5.0,
            "e_mpa": 210000.0, "i_m4": 8.36e-5}"#,
        r#"{"type": "Slab", "slab_type": "continuous-3", "lx_m": 5.0, "ly_m": 4.0,
            "load_kn_per_m2": 5.0, "e_mpa": 33000.0, "thickness_m": 0.2}"#,
    ];
    for request in items {
        let item: CalculationItem = serde_json::from_str(request).unwrap();
        let result = item.calculate().unwrap();
        let json = result.to_json().unwrap();
        let back: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.calc_type(), result.calc_type());
        assert_relative_eq!(back.utilization_pct(), result.utilization_pct(), max_relative = 1e-12);
    }
}

#[test]
fn simple_beam_diagram_peaks_at_midspan() {
    let diagram = SimpleBeamDiagram::new(6.0, 5.0, 210_000.0, 1940e-8).analyze().unwrap();
    let result = beam::calculate_simple(6.0, 5.0, 210_000.0, 1940e-8).unwrap();

    assert_relative_eq!(diagram.max_moment_knm, 5.0 * 36.0 / 8.0, max_relative = 1e-12);
    assert_relative_eq!(diagram.max_deflection_mm, result.max_deflection_mm, max_relative = 1e-12);
    assert_relative_eq!(diagram.max_deflection_position_m, 3.0);
}

#[test]
fn section_comparison_marks_selected_profile() {
    let comparison = compare_sections(6.0, 5.0, 210_000.0, section_inertia("IPE 240")).unwrap();
    let selected: Vec<&str> = comparison
        .iter()
        .filter(|c| c.is_current)
        .map(|c| c.label.as_str())
        .collect();
    assert_eq!(selected, vec!["IPE 240"]);

    let first_passing = comparison.iter().find(|c| c.passes()).map(|c| c.label.as_str());
    assert_eq!(first_passing, Some("IPE 220"));
}
