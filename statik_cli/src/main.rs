//! # Statik CLI Application
//!
//! Runs a single calculation from a JSON request and prints the text report
//! followed by the JSON result.
//!
//! ```text
//! statik_cli request.json
//! statik_cli < request.json
//! RUST_LOG=debug statik_cli request.json
//! ```
//!
//! A request is a tagged calculation item, e.g.
//!
//! ```json
//! { "type": "Beam", "beam_type": "simple", "spans_m": [6.0],
//!   "load_kn_per_m": 5.0, "e_mpa": 210000.0, "i_m4": 1.94e-5 }
//! ```
//!
//! Material and section names may be given instead of numbers through
//! `"material"` / `"section"` keys; they are resolved with the lookup tables.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;

use statik_core::calculations::beam::required_inertia_m4;
use statik_core::calculations::{BeamType, CalculationItem, CalculationResult};
use statik_core::materials::{material_modulus, section_inertia, suggest_sections};
use statik_core::{format_result, CalcError, CalcResult};

/// Optional named lookups accepted next to the numeric fields
#[derive(Debug, Default, Deserialize)]
struct NamedLookups {
    material: Option<String>,
    section: Option<String>,
}

fn read_request(path: Option<&str>) -> CalcResult<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CalcError::serialization(format!("cannot read '{}': {}", path, e))),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| CalcError::serialization(format!("cannot read stdin: {}", e)))?;
            Ok(buffer)
        }
    }
}

/// Replace `material` / `section` names with `e_mpa` / `i_m4` values.
fn resolve_lookups(mut request: Value) -> CalcResult<Value> {
    let lookups: NamedLookups = serde_json::from_value(request.clone())?;
    if let Some(object) = request.as_object_mut() {
        if let Some(material) = lookups.material {
            let e_mpa = material_modulus(&material);
            debug!("material '{}' -> E = {} MPa", material, e_mpa);
            object.remove("material");
            object.insert("e_mpa".to_string(), Value::from(e_mpa));
        }
        if let Some(section) = lookups.section {
            let i_m4 = section_inertia(&section);
            debug!("section '{}' -> I = {:e} m4", section, i_m4);
            object.remove("section");
            object.insert("i_m4".to_string(), Value::from(i_m4));
        }
    }
    Ok(request)
}

/// Required inertia and stiffer sections for a simple beam failing L/300.
///
/// Empty for every other result.
fn section_advice(result: &CalculationResult) -> CalcResult<Vec<String>> {
    let CalculationResult::Beam(beam) = result else {
        return Ok(Vec::new());
    };
    if beam.beam_type != BeamType::Simple || beam.passes() {
        return Ok(Vec::new());
    }

    let required = required_inertia_m4(beam.length_m, beam.load_kn_per_m, beam.e_mpa)?;
    let mut lines = vec![format!("Required I for L/300: {:.0} cm4", required * 1.0e8)];
    let suggestions = suggest_sections(required);
    if suggestions.is_empty() {
        lines.push("No IPE section in the table is stiff enough.".to_string());
    }
    for section in suggestions {
        lines.push(format!("  - {}: I = {:.0} cm4", section.label, section.inertia_cm4()));
    }
    Ok(lines)
}

fn run(path: Option<&str>) -> CalcResult<()> {
    let raw = read_request(path)?;
    let request = resolve_lookups(serde_json::from_str(&raw)?)?;
    let item: CalculationItem = serde_json::from_value(request)?;
    info!("running {} calculation", item.calc_type());

    let result = item.calculate()?;
    println!("{}", format_result(&result));
    let advice = section_advice(&result)?;
    if !advice.is_empty() {
        println!();
        println!("{}", advice.join("\n"));
    }

    println!();
    println!("JSON Output:");
    println!("{}", result.to_json()?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args().nth(1);
    match run(path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error [{}]: {}", e.error_code(), e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use statik_core::calculations::beam::{calculate_cantilever, calculate_simple};
    use statik_core::materials::DEFAULT_SECTION_INERTIA_M4;

    #[test]
    fn test_material_name_becomes_modulus() {
        let request = json!({ "type": "Slab", "material": "Beton C30/37", "lx_m": 6.0 });
        let resolved = resolve_lookups(request).unwrap();
        assert_eq!(resolved["e_mpa"], json!(33000.0));
        assert!(resolved.get("material").is_none());
        assert_eq!(resolved["lx_m"], json!(6.0));
    }

    #[test]
    fn test_unknown_section_falls_back_to_default() {
        let request = json!({ "type": "Beam", "section": "HEB 300", "i_m4": 1.0 });
        let resolved = resolve_lookups(request).unwrap();
        assert_eq!(resolved["i_m4"], json!(DEFAULT_SECTION_INERTIA_M4));
        assert!(resolved.get("section").is_none());
    }

    #[test]
    fn test_request_without_names_is_unchanged() {
        let request = json!({ "type": "Beam", "e_mpa": 70000.0 });
        assert_eq!(resolve_lookups(request.clone()).unwrap(), request);
    }

    #[test]
    fn test_request_must_be_an_object() {
        let err = resolve_lookups(json!("IPE 200")).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_resolved_request_runs() {
        let request = json!({
            "type": "Beam",
            "beam_type": "simple",
            "spans_m": [6.0],
            "load_kn_per_m": 5.0,
            "material": "Stahl (S235)",
            "section": "IPE 220"
        });
        let resolved = resolve_lookups(request).unwrap();
        let item: CalculationItem = serde_json::from_value(resolved).unwrap();
        let result = item.calculate().unwrap();
        assert!(section_advice(&result).unwrap().is_empty());
    }

    #[test]
    fn test_advice_for_failing_simple_beam() {
        let result: CalculationResult =
            calculate_simple(6.0, 5.0, 210_000.0, 1940e-8).unwrap().into();
        let lines = section_advice(&result).unwrap();
        assert_eq!(lines[0], "Required I for L/300: 2009 cm4");
        assert_eq!(lines[1], "  - IPE 200: I = 1940 cm4");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_no_advice_outside_simple_beams() {
        let result: CalculationResult =
            calculate_cantilever(6.0, 5.0, 210_000.0, 1940e-8).unwrap().into();
        assert!(section_advice(&result).unwrap().is_empty());
    }

    #[test]
    fn test_advice_when_no_section_is_stiff_enough() {
        let result: CalculationResult =
            calculate_simple(40.0, 50.0, 210_000.0, 1940e-8).unwrap().into();
        let lines = section_advice(&result).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "No IPE section in the table is stiff enough.");
    }
}
