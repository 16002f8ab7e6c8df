//! # Structural Calculations
//!
//! This module contains all structural calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Immutable calculation results (JSON-serializable)
//! - `calculate_<variant>(fields...) -> CalcResult<*Result>` - One pure function per variant
//! - `calculate(&*Input) -> CalcResult<*Result>` - Dispatch on the input's type tag
//!
//! Every function is a pure, deterministic transformation of its inputs and
//! may be called from any thread.
//!
//! ## Available Calculations
//!
//! - [`beam`] - Simple span, cantilever and continuous beams
//! - [`beam_diagram`] - V/M/δ diagrams and a section comparison for simple beams
//! - [`frame`] - Single- and two-story portal frames (approximate)
//! - [`slab`] - Single-span and continuous slabs with reinforcement estimate

pub mod beam;
pub mod beam_diagram;
pub mod fields;
pub mod frame;
pub mod slab;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use beam::{BeamInput, BeamResult, BeamType};
pub use beam_diagram::{compare_sections, DiagramResult, SectionComparison, SimpleBeamDiagram};
pub use fields::{FieldMap, FieldValue};
pub use frame::{FrameInput, FrameResult, FrameType};
pub use slab::{SlabInput, SlabResult, SlabType};

/// Utilization above which a result is reported as clearly exceeded (%)
const SLIGHT_EXCEEDANCE_PCT: f64 = 120.0;

/// Serviceability verdict derived from a utilization percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceabilityStatus {
    /// Utilization ≤ 100 %
    Passes,
    /// 100 % < utilization ≤ 120 %: review recommended
    SlightlyExceeded,
    /// Utilization > 120 %: action required
    Exceeded,
}

impl ServiceabilityStatus {
    /// Classify a utilization percentage
    pub fn from_utilization(utilization_pct: f64) -> Self {
        if utilization_pct <= 100.0 {
            ServiceabilityStatus::Passes
        } else if utilization_pct <= SLIGHT_EXCEEDANCE_PCT {
            ServiceabilityStatus::SlightlyExceeded
        } else {
            ServiceabilityStatus::Exceeded
        }
    }

    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceabilityStatus::Passes => "OK - deflection within limit",
            ServiceabilityStatus::SlightlyExceeded => "Slightly exceeded - review recommended",
            ServiceabilityStatus::Exceeded => "Exceeded - action required",
        }
    }
}

/// Enum wrapper for all calculation inputs.
///
/// ## JSON Example
///
/// ```json
/// { "type": "Beam", "beam_type": "simple", "spans_m": [6.0],
///   "load_kn_per_m": 5.0, "e_mpa": 210000.0, "i_m4": 1.94e-5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Beam calculation
    Beam(BeamInput),
    /// Portal frame calculation
    Frame(FrameInput),
    /// Slab calculation
    Slab(SlabInput),
}

impl CalculationItem {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Beam(_) => "Beam",
            CalculationItem::Frame(_) => "Frame",
            CalculationItem::Slab(_) => "Slab",
        }
    }

    /// Run the matching analyzer
    pub fn calculate(&self) -> CalcResult<CalculationResult> {
        Ok(match self {
            CalculationItem::Beam(input) => CalculationResult::Beam(beam::calculate(input)?),
            CalculationItem::Frame(input) => CalculationResult::Frame(frame::calculate(input)?),
            CalculationItem::Slab(input) => CalculationResult::Slab(slab::calculate(input)?),
        })
    }
}

/// Enum wrapper for all calculation results.
///
/// Report and export code matches on this type exhaustively instead of
/// inspecting result types at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationResult {
    /// Beam result
    Beam(BeamResult),
    /// Portal frame result
    Frame(FrameResult),
    /// Slab result
    Slab(SlabResult),
}

impl CalculationResult {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationResult::Beam(_) => "Beam",
            CalculationResult::Frame(_) => "Frame",
            CalculationResult::Slab(_) => "Slab",
        }
    }

    /// Deflection utilization in percent
    pub fn utilization_pct(&self) -> f64 {
        match self {
            CalculationResult::Beam(r) => r.utilization_pct,
            CalculationResult::Frame(r) => r.utilization_pct,
            CalculationResult::Slab(r) => r.utilization_pct,
        }
    }

    /// Serviceability classification of the utilization
    pub fn status(&self) -> ServiceabilityStatus {
        ServiceabilityStatus::from_utilization(self.utilization_pct())
    }

    /// Flat mapping of the wrapped record's declared fields
    pub fn to_field_map(&self) -> FieldMap {
        match self {
            CalculationResult::Beam(r) => r.to_field_map(),
            CalculationResult::Frame(r) => r.to_field_map(),
            CalculationResult::Slab(r) => r.to_field_map(),
        }
    }

    /// Pretty JSON for persistence or transmission
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<BeamResult> for CalculationResult {
    fn from(r: BeamResult) -> Self {
        CalculationResult::Beam(r)
    }
}

impl From<FrameResult> for CalculationResult {
    fn from(r: FrameResult) -> Self {
        CalculationResult::Frame(r)
    }
}

impl From<SlabResult> for CalculationResult {
    fn from(r: SlabResult) -> Self {
        CalculationResult::Slab(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundaries() {
        assert_eq!(ServiceabilityStatus::from_utilization(100.0), ServiceabilityStatus::Passes);
        assert_eq!(
            ServiceabilityStatus::from_utilization(100.5),
            ServiceabilityStatus::SlightlyExceeded
        );
        assert_eq!(
            ServiceabilityStatus::from_utilization(120.0),
            ServiceabilityStatus::SlightlyExceeded
        );
        assert_eq!(ServiceabilityStatus::from_utilization(120.1), ServiceabilityStatus::Exceeded);
    }

    #[test]
    fn test_item_dispatch() {
        let item = CalculationItem::Beam(BeamInput::simple(6.0, 5.0, 210_000.0, 1940e-8));
        let result = item.calculate().unwrap();
        assert_eq!(result.calc_type(), "Beam");
        assert_eq!(result.status(), ServiceabilityStatus::SlightlyExceeded);
    }

    #[test]
    fn test_item_json() {
        let json = r#"{
            "type": "Slab",
            "slab_type": "single",
            "lx_m": 6.0,
            "ly_m": 4.0,
            "load_kn_per_m2": 5.0,
            "e_mpa": 33000.0,
            "thickness_m": 0.2
        }"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.calc_type(), "Slab");
        let result = item.calculate().unwrap();
        assert!(result.to_field_map().contains_key("reinforcement_x_cm2_per_m"));
    }

    #[test]
    fn test_result_json_roundtrip() {
        let result: CalculationResult =
            frame::calculate_single_story(8.0, 4.0, 5.0, 210_000.0, 1940e-8)
                .unwrap()
                .into();
        let json = result.to_json().unwrap();
        assert!(json.contains("\"type\": \"Frame\""));
        let roundtrip: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.calc_type(), "Frame");
    }
}
