//! # Portal Frame Analysis
//!
//! Simplified single-story and two-story rigid portal frames with a uniform
//! load on the horizontal member (lintel).
//!
//! ## Assumptions
//!
//! - Coarse closed-form coefficients stand in for a rigid-frame analysis;
//!   results are approximate and intended for orientation only
//! - Single story: horizontal thrust from a fixed 30° roof pitch
//! - Two story: vertical reaction covers both levels (2 × qB/2)
//! - Lintel deflection uses the simple-span formula on the frame width
//! - Deflection limit: B/300
//!
//! ## Example
//!
//! ```rust
//! use statik_core::calculations::frame::calculate_single_story;
//!
//! let result = calculate_single_story(8.0, 4.0, 5.0, 210_000.0, 1940e-8).unwrap();
//! assert!((result.vertical_reaction_kn - 20.0).abs() < 1e-9);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::calculations::beam::bending_modulus;
use crate::calculations::fields::{ensure_finite, FieldMap, FieldValue};
use crate::calculations::ServiceabilityStatus;
use crate::equations::beam::{deflection_limit, uniform_load_max_deflection, utilization_pct};
use crate::equations::frame::{
    single_story_beam_moment, single_story_column_moment, single_story_horizontal_reaction,
    single_story_vertical_reaction, two_story_beam_moment, two_story_column_moment,
    two_story_horizontal_reaction, two_story_vertical_reaction,
};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::units::{Meters, Millimeters};

/// Lintel deflection limit divisor (B/300)
const FRAME_LIMIT_DIVISOR: f64 = 300.0;

/// Number of stories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameType {
    /// Single-story frame with pitched roof
    #[serde(rename = "single")]
    SingleStory,
    /// Two-story frame
    #[serde(rename = "double")]
    TwoStory,
}

impl FrameType {
    /// All frame types for selection lists
    pub const ALL: [FrameType; 2] = [FrameType::SingleStory, FrameType::TwoStory];

    /// Short type tag used in reports and exports
    pub fn code(&self) -> &'static str {
        match self {
            FrameType::SingleStory => "single",
            FrameType::TwoStory => "double",
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            FrameType::SingleStory => "Single-story frame with pitched roof",
            FrameType::TwoStory => "Two-story frame",
        }
    }

    /// Number of story heights this frame type takes
    pub fn story_count(&self) -> usize {
        match self {
            FrameType::SingleStory => 1,
            FrameType::TwoStory => 2,
        }
    }
}

impl std::fmt::Display for FrameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Input parameters for a portal frame.
///
/// ## JSON Example
///
/// ```json
/// {
///   "frame_type": "double",
///   "width_m": 8.0,
///   "story_heights_m": [3.5, 3.0],
///   "load_kn_per_m": 5.0,
///   "e_mpa": 210000.0,
///   "i_m4": 1.94e-5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Number of stories
    pub frame_type: FrameType,

    /// Span width B in meters
    pub width_m: f64,

    /// Story heights in meters, bottom to top
    pub story_heights_m: Vec<f64>,

    /// Uniform load on the lintel in kN/m
    pub load_kn_per_m: f64,

    /// Elastic modulus in MPa
    pub e_mpa: f64,

    /// Second moment of area of the lintel in m⁴
    pub i_m4: f64,
}

/// Results from a portal frame calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameResult {
    // === Input Echo ===
    /// Number of stories
    pub frame_type: FrameType,

    /// Span width B in meters
    pub width_m: f64,

    /// Story heights in meters
    pub story_heights_m: Vec<f64>,

    /// Total height in meters
    pub height_m: f64,

    /// Uniform load on the lintel in kN/m
    pub load_kn_per_m: f64,

    /// Elastic modulus in MPa
    pub e_mpa: f64,

    /// Second moment of area in m⁴
    pub i_m4: f64,

    // === Internal Forces ===
    /// Column (support) moment in kNm
    pub column_moment_knm: f64,

    /// Lintel (beam) moment in kNm
    pub beam_moment_knm: f64,

    /// Vertical reaction in kN
    pub vertical_reaction_kn: f64,

    /// Horizontal reaction in kN
    pub horizontal_reaction_kn: f64,

    // === Serviceability ===
    /// Lintel deflection in mm
    pub beam_deflection_mm: f64,

    /// Deflection limit B/300 in mm
    pub deflection_limit_mm: f64,

    /// Deflection as a percentage of the limit
    pub utilization_pct: f64,
}

impl FrameResult {
    /// Serviceability classification of the utilization
    pub fn status(&self) -> ServiceabilityStatus {
        ServiceabilityStatus::from_utilization(self.utilization_pct)
    }

    /// Check if the lintel deflection is within B/300
    pub fn passes(&self) -> bool {
        self.utilization_pct <= 100.0
    }

    /// Flat mapping of every declared field
    pub fn to_field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        map.insert("frame_type", FieldValue::from(self.frame_type.code()));
        map.insert("width_m", self.width_m.into());
        map.insert("story_heights_m", self.story_heights_m.as_slice().into());
        map.insert("height_m", self.height_m.into());
        map.insert("load_kn_per_m", self.load_kn_per_m.into());
        map.insert("e_mpa", self.e_mpa.into());
        map.insert("i_m4", self.i_m4.into());
        map.insert("column_moment_knm", self.column_moment_knm.into());
        map.insert("beam_moment_knm", self.beam_moment_knm.into());
        map.insert("vertical_reaction_kn", self.vertical_reaction_kn.into());
        map.insert("horizontal_reaction_kn", self.horizontal_reaction_kn.into());
        map.insert("beam_deflection_mm", self.beam_deflection_mm.into());
        map.insert("deflection_limit_mm", self.deflection_limit_mm.into());
        map.insert("utilization_pct", self.utilization_pct.into());
        map
    }
}

/// Internal forces of one frame variant
struct FrameForces {
    column_moment_knm: f64,
    beam_moment_knm: f64,
    vertical_reaction_kn: f64,
    horizontal_reaction_kn: f64,
}

fn validate_lintel(width_m: f64, load_kn_per_m: f64, e_mpa: f64, i_m4: f64) -> CalcResult<()> {
    require_positive("width_m", width_m)?;
    require_positive("load_kn_per_m", load_kn_per_m)?;
    require_positive("e_mpa", e_mpa)?;
    require_positive("i_m4", i_m4)?;
    Ok(())
}

/// Assemble the result; lintel serviceability is shared by both variants.
///
/// Fails with `CalculationFailed` when any quantity overflows.
fn build_result(
    frame_type: FrameType,
    width_m: f64,
    story_heights_m: Vec<f64>,
    load_kn_per_m: f64,
    e_mpa: f64,
    i_m4: f64,
    forces: FrameForces,
) -> CalcResult<FrameResult> {
    let calculation = format!("{} frame", frame_type.code());
    let e = bending_modulus(&calculation, e_mpa, i_m4)?;
    let delta = Meters(uniform_load_max_deflection(load_kn_per_m, width_m, e, i_m4));
    let beam_deflection_mm = Millimeters::from(delta).value();
    let deflection_limit_mm =
        deflection_limit(Millimeters::from(Meters(width_m)).value(), FRAME_LIMIT_DIVISOR);
    let utilization = utilization_pct(beam_deflection_mm, deflection_limit_mm);

    debug!(
        "{} frame B={} m q={} kN/m: M_col={:.2} kNm, M_beam={:.2} kNm, δ={:.2} mm ({:.1}%)",
        frame_type.code(),
        width_m,
        load_kn_per_m,
        forces.column_moment_knm,
        forces.beam_moment_knm,
        beam_deflection_mm,
        utilization
    );

    let result = FrameResult {
        frame_type,
        width_m,
        height_m: story_heights_m.iter().sum(),
        story_heights_m,
        load_kn_per_m,
        e_mpa,
        i_m4,
        column_moment_knm: forces.column_moment_knm,
        beam_moment_knm: forces.beam_moment_knm,
        vertical_reaction_kn: forces.vertical_reaction_kn,
        horizontal_reaction_kn: forces.horizontal_reaction_kn,
        beam_deflection_mm,
        deflection_limit_mm,
        utilization_pct: utilization,
    };
    ensure_finite(&calculation, &result.to_field_map())?;
    Ok(result)
}

/// Analyze a single-story portal frame.
///
/// # Arguments
///
/// * `width_m` - Span width B in meters
/// * `height_m` - Eave height H in meters
/// * `load_kn_per_m` - Uniform load on the lintel in kN/m
/// * `e_mpa` - Elastic modulus in MPa
/// * `i_m4` - Second moment of area in m⁴
///
/// # Errors
///
/// - `InvalidParameter` if any input is not strictly positive
/// - `CalculationFailed` if a quantity overflows the f64 range
pub fn calculate_single_story(
    width_m: f64,
    height_m: f64,
    load_kn_per_m: f64,
    e_mpa: f64,
    i_m4: f64,
) -> CalcResult<FrameResult> {
    validate_lintel(width_m, load_kn_per_m, e_mpa, i_m4)?;
    require_positive("height_m", height_m)?;

    let forces = FrameForces {
        column_moment_knm: single_story_column_moment(load_kn_per_m, width_m),
        beam_moment_knm: single_story_beam_moment(load_kn_per_m, width_m),
        vertical_reaction_kn: single_story_vertical_reaction(load_kn_per_m, width_m),
        horizontal_reaction_kn: single_story_horizontal_reaction(load_kn_per_m, width_m),
    };

    build_result(
        FrameType::SingleStory,
        width_m,
        vec![height_m],
        load_kn_per_m,
        e_mpa,
        i_m4,
        forces,
    )
}

/// Analyze a two-story portal frame.
///
/// # Errors
///
/// - `InvalidParameter` if any input is not strictly positive
/// - `CalculationFailed` if a quantity overflows the f64 range
pub fn calculate_two_story(
    width_m: f64,
    lower_height_m: f64,
    upper_height_m: f64,
    load_kn_per_m: f64,
    e_mpa: f64,
    i_m4: f64,
) -> CalcResult<FrameResult> {
    validate_lintel(width_m, load_kn_per_m, e_mpa, i_m4)?;
    require_positive("lower_height_m", lower_height_m)?;
    require_positive("upper_height_m", upper_height_m)?;

    let forces = FrameForces {
        column_moment_knm: two_story_column_moment(load_kn_per_m, width_m),
        beam_moment_knm: two_story_beam_moment(load_kn_per_m, width_m),
        vertical_reaction_kn: two_story_vertical_reaction(load_kn_per_m, width_m),
        horizontal_reaction_kn: two_story_horizontal_reaction(load_kn_per_m, width_m),
    };

    build_result(
        FrameType::TwoStory,
        width_m,
        vec![lower_height_m, upper_height_m],
        load_kn_per_m,
        e_mpa,
        i_m4,
        forces,
    )
}

/// Analyze a frame described by a [`FrameInput`].
///
/// # Errors
///
/// `InvalidParameter` if the number of story heights does not match the frame
/// type, or any input is not strictly positive.
pub fn calculate(input: &FrameInput) -> CalcResult<FrameResult> {
    match (input.frame_type, input.story_heights_m.as_slice()) {
        (FrameType::SingleStory, [height_m]) => calculate_single_story(
            input.width_m,
            *height_m,
            input.load_kn_per_m,
            input.e_mpa,
            input.i_m4,
        ),
        (FrameType::TwoStory, [lower_m, upper_m]) => calculate_two_story(
            input.width_m,
            *lower_m,
            *upper_m,
            input.load_kn_per_m,
            input.e_mpa,
            input.i_m4,
        ),
        (frame_type, heights) => Err(CalcError::invalid_parameter(
            "story_heights_m",
            format!("{:?}", heights),
            format!(
                "A {} frame needs exactly {} story height(s)",
                frame_type.code(),
                frame_type.story_count()
            ),
        )),
    }
}
