//! # Slab Analysis
//!
//! Rectangular concrete slabs supported on all edges, under a uniform area
//! load, using a simplified isotropic plate approximation.
//!
//! ## Method
//!
//! - Flexural rigidity D = E'h³ / (12(1-ν²)) with ν = 0.2 and E' in kN/m²
//! - The direction with Ly/Lx ≥ 1 decides the governing strip (qL²/8); the
//!   other direction carries half of that moment
//! - Deflection w = 0.00406·q·Lx⁴/D, limit Lx/250
//! - Reinforcement A_s = M / (0.9h · f_yk/γ_s) with B500 steel, γ_s = 1.15
//! - Continuous slabs (2-4 spans) scale the single-span moments and
//!   deflection by 0.70 / 0.65 / 0.60
//!
//! ## Example
//!
//! ```rust
//! use statik_core::calculations::slab::calculate_single_span;
//!
//! // 6 m x 4 m, 200 mm C30/37 slab under 5 kN/m²
//! let result = calculate_single_span(6.0, 4.0, 5.0, 33_000.0, 0.20).unwrap();
//! assert!((result.moment_y_knm_per_m - 10.0).abs() < 1e-9);
//! assert!(result.passes());
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::calculations::fields::{ensure_finite, FieldMap, FieldValue};
use crate::calculations::ServiceabilityStatus;
use crate::equations::beam::{continuity_reduction_factor, deflection_limit, utilization_pct};
use crate::equations::plate::{
    design_yield_strength, flexural_rigidity, lever_arm, plate_max_deflection,
    principal_moments, required_reinforcement, POISSON_RATIO_CONCRETE, REBAR_SAFETY_FACTOR,
    REBAR_YIELD_STRENGTH_MPA,
};
use crate::errors::{require_finite, require_positive, CalcError, CalcResult};
use crate::units::{KnM, KnPerSqM, Megapascals, Meters, Millimeters, NMm, SqCm, SqMm};

/// Span counts accepted by [`calculate_continuous`]
pub const SUPPORTED_CONTINUOUS_SPANS: [usize; 3] = [2, 3, 4];

/// Slab deflection limit divisor (Lx/250)
const SLAB_LIMIT_DIVISOR: f64 = 250.0;

/// Span configuration of a slab.
///
/// Serialized as its [`code`](SlabType::code) tag: `"single"` or
/// `"continuous-<n>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SlabType {
    /// Single field supported on all edges
    Single,
    /// Continuous over the given number of spans
    Continuous(usize),
}

impl SlabType {
    /// Short type tag used in reports and exports ("single", "continuous-3")
    pub fn code(&self) -> String {
        match self {
            SlabType::Single => "single".to_string(),
            SlabType::Continuous(spans) => format!("continuous-{}", spans),
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> String {
        match self {
            SlabType::Single => "Single-span slab (all edges supported)".to_string(),
            SlabType::Continuous(spans) => format!("Continuous slab ({} spans)", spans),
        }
    }

    /// Number of spans (1 for a single field)
    pub fn span_count(&self) -> usize {
        match self {
            SlabType::Single => 1,
            SlabType::Continuous(spans) => *spans,
        }
    }
}

impl std::fmt::Display for SlabType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<SlabType> for String {
    fn from(slab_type: SlabType) -> Self {
        slab_type.code()
    }
}

impl TryFrom<String> for SlabType {
    type Error = CalcError;

    /// Parse a `code()` tag. The span count itself is checked by the analyzer.
    fn try_from(code: String) -> Result<Self, Self::Error> {
        if code == "single" {
            return Ok(SlabType::Single);
        }
        code.strip_prefix("continuous-")
            .and_then(|spans| spans.parse::<usize>().ok())
            .map(SlabType::Continuous)
            .ok_or_else(|| {
                CalcError::invalid_parameter(
                    "slab_type",
                    code.as_str(),
                    "Expected \"single\" or \"continuous-<spans>\"",
                )
            })
    }
}

/// Input parameters for a slab.
///
/// ## JSON Example
///
/// ```json
/// {
///   "slab_type": "continuous-3",
///   "lx_m": 5.0,
///   "ly_m": 4.0,
///   "load_kn_per_m2": 5.0,
///   "e_mpa": 33000.0,
///   "thickness_m": 0.2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabInput {
    /// Span configuration
    pub slab_type: SlabType,

    /// Dimension in x in meters (deflection and limit are based on Lx)
    pub lx_m: f64,

    /// Dimension in y in meters
    pub ly_m: f64,

    /// Uniform area load in kN/m²
    pub load_kn_per_m2: f64,

    /// Elastic modulus in MPa
    pub e_mpa: f64,

    /// Slab thickness in meters
    pub thickness_m: f64,
}

/// Results from a slab calculation.
///
/// Moments and reinforcement are per meter width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabResult {
    // === Input Echo ===
    /// Span configuration
    pub slab_type: SlabType,

    /// Dimension in x in meters
    pub lx_m: f64,

    /// Dimension in y in meters
    pub ly_m: f64,

    /// Uniform area load in kN/m²
    pub load_kn_per_m2: f64,

    /// Elastic modulus in MPa
    pub e_mpa: f64,

    /// Slab thickness in meters
    pub thickness_m: f64,

    // === Demand ===
    /// Maximum moment in x in kNm/m
    pub moment_x_knm_per_m: f64,

    /// Maximum moment in y in kNm/m
    pub moment_y_knm_per_m: f64,

    /// Maximum deflection in mm
    pub max_deflection_mm: f64,

    // === Reinforcement ===
    /// Required reinforcement in x in cm²/m
    pub reinforcement_x_cm2_per_m: f64,

    /// Required reinforcement in y in cm²/m
    pub reinforcement_y_cm2_per_m: f64,

    // === Serviceability ===
    /// Deflection limit Lx/250 in mm
    pub deflection_limit_mm: f64,

    /// Deflection as a percentage of the limit
    pub utilization_pct: f64,
}

impl SlabResult {
    /// Serviceability classification of the utilization
    pub fn status(&self) -> ServiceabilityStatus {
        ServiceabilityStatus::from_utilization(self.utilization_pct)
    }

    /// Check if the deflection is within Lx/250
    pub fn passes(&self) -> bool {
        self.utilization_pct <= 100.0
    }

    /// Flat mapping of every declared field
    pub fn to_field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        map.insert("slab_type", FieldValue::from(self.slab_type.code()));
        map.insert("lx_m", self.lx_m.into());
        map.insert("ly_m", self.ly_m.into());
        map.insert("load_kn_per_m2", self.load_kn_per_m2.into());
        map.insert("e_mpa", self.e_mpa.into());
        map.insert("thickness_m", self.thickness_m.into());
        map.insert("moment_x_knm_per_m", self.moment_x_knm_per_m.into());
        map.insert("moment_y_knm_per_m", self.moment_y_knm_per_m.into());
        map.insert("max_deflection_mm", self.max_deflection_mm.into());
        map.insert("reinforcement_x_cm2_per_m", self.reinforcement_x_cm2_per_m.into());
        map.insert("reinforcement_y_cm2_per_m", self.reinforcement_y_cm2_per_m.into());
        map.insert("deflection_limit_mm", self.deflection_limit_mm.into());
        map.insert("utilization_pct", self.utilization_pct.into());
        map
    }
}

/// Single-field plate response before any continuity reduction
struct PlateResponse {
    moment_x_knm_per_m: f64,
    moment_y_knm_per_m: f64,
    deflection_mm: f64,
}

fn validate(
    lx_m: f64,
    ly_m: f64,
    load_kn_per_m2: f64,
    e_mpa: f64,
    thickness_m: f64,
) -> CalcResult<()> {
    require_positive("lx_m", lx_m)?;
    require_positive("ly_m", ly_m)?;
    require_positive("load_kn_per_m2", load_kn_per_m2)?;
    require_positive("e_mpa", e_mpa)?;
    require_positive("thickness_m", thickness_m)?;
    Ok(())
}

/// Fails when E or the plate rigidity D overflows; an infinite D would report
/// a zero deflection for any load.
fn plate_response(
    calculation: &str,
    lx_m: f64,
    ly_m: f64,
    load_kn_per_m2: f64,
    e_mpa: f64,
    thickness_m: f64,
) -> CalcResult<PlateResponse> {
    let e = require_finite(calculation, "E [kN/m²]", KnPerSqM::from(Megapascals(e_mpa)).value())?;
    let d = require_finite(
        calculation,
        "D [kNm]",
        flexural_rigidity(e, thickness_m, POISSON_RATIO_CONCRETE),
    )?;
    let (moment_x_knm_per_m, moment_y_knm_per_m) = principal_moments(load_kn_per_m2, lx_m, ly_m);
    let deflection = Meters(plate_max_deflection(load_kn_per_m2, lx_m, d));

    Ok(PlateResponse {
        moment_x_knm_per_m,
        moment_y_knm_per_m,
        deflection_mm: Millimeters::from(deflection).value(),
    })
}

/// Reinforcement in cm²/m for a moment in kNm/m and thickness in m
fn reinforcement_cm2_per_m(moment_knm_per_m: f64, thickness_m: f64) -> f64 {
    let moment = NMm::from(KnM(moment_knm_per_m));
    let z_mm = lever_arm(Millimeters::from(Meters(thickness_m)).value());
    let f_yd = design_yield_strength(REBAR_YIELD_STRENGTH_MPA, REBAR_SAFETY_FACTOR);
    SqCm::from(SqMm(required_reinforcement(moment.value(), z_mm, f_yd))).value()
}

fn build_result(
    slab_type: SlabType,
    lx_m: f64,
    ly_m: f64,
    load_kn_per_m2: f64,
    e_mpa: f64,
    thickness_m: f64,
    response: PlateResponse,
) -> CalcResult<SlabResult> {
    let deflection_limit_mm =
        deflection_limit(Millimeters::from(Meters(lx_m)).value(), SLAB_LIMIT_DIVISOR);
    let utilization = utilization_pct(response.deflection_mm, deflection_limit_mm);

    debug!(
        "{} slab {}x{} m q={} kN/m² h={} m: m_x={:.2}, m_y={:.2} kNm/m, δ={:.2} mm ({:.1}%)",
        slab_type.code(),
        lx_m,
        ly_m,
        load_kn_per_m2,
        thickness_m,
        response.moment_x_knm_per_m,
        response.moment_y_knm_per_m,
        response.deflection_mm,
        utilization
    );

    let result = SlabResult {
        slab_type,
        lx_m,
        ly_m,
        load_kn_per_m2,
        e_mpa,
        thickness_m,
        moment_x_knm_per_m: response.moment_x_knm_per_m,
        moment_y_knm_per_m: response.moment_y_knm_per_m,
        max_deflection_mm: response.deflection_mm,
        reinforcement_x_cm2_per_m: reinforcement_cm2_per_m(
            response.moment_x_knm_per_m,
            thickness_m,
        ),
        reinforcement_y_cm2_per_m: reinforcement_cm2_per_m(
            response.moment_y_knm_per_m,
            thickness_m,
        ),
        deflection_limit_mm,
        utilization_pct: utilization,
    };
    ensure_finite(&format!("{} slab", slab_type.code()), &result.to_field_map())?;
    Ok(result)
}

/// Analyze a single-span slab supported on all edges.
///
/// # Arguments
///
/// * `lx_m`, `ly_m` - In-plane dimensions in meters
/// * `load_kn_per_m2` - Uniform area load in kN/m²
/// * `e_mpa` - Elastic modulus in MPa
/// * `thickness_m` - Slab thickness in meters
///
/// # Errors
///
/// - `InvalidParameter` if any input is not strictly positive
/// - `CalculationFailed` if a quantity overflows the f64 range
pub fn calculate_single_span(
    lx_m: f64,
    ly_m: f64,
    load_kn_per_m2: f64,
    e_mpa: f64,
    thickness_m: f64,
) -> CalcResult<SlabResult> {
    validate(lx_m, ly_m, load_kn_per_m2, e_mpa, thickness_m)?;
    let response = plate_response("single slab", lx_m, ly_m, load_kn_per_m2, e_mpa, thickness_m)?;
    build_result(
        SlabType::Single,
        lx_m,
        ly_m,
        load_kn_per_m2,
        e_mpa,
        thickness_m,
        response,
    )
}

/// Analyze a slab continuous over `span_count` spans (2, 3 or 4).
///
/// The single-span moments and deflection are scaled by the continuity factor
/// and the reinforcement is recomputed from the reduced moments.
///
/// # Errors
///
/// - `UnsupportedSpanCount` unless `span_count` is 2, 3 or 4
/// - `InvalidParameter` if any input is not strictly positive
/// - `CalculationFailed` if a quantity overflows the f64 range
pub fn calculate_continuous(
    lx_m: f64,
    ly_m: f64,
    load_kn_per_m2: f64,
    e_mpa: f64,
    thickness_m: f64,
    span_count: usize,
) -> CalcResult<SlabResult> {
    let reduction = continuity_reduction_factor(span_count)
        .filter(|_| SUPPORTED_CONTINUOUS_SPANS.contains(&span_count))
        .ok_or_else(|| {
            CalcError::unsupported_span_count(
                "continuous slab",
                span_count,
                &SUPPORTED_CONTINUOUS_SPANS,
            )
        })?;
    validate(lx_m, ly_m, load_kn_per_m2, e_mpa, thickness_m)?;

    let single = plate_response(
        "continuous slab",
        lx_m,
        ly_m,
        load_kn_per_m2,
        e_mpa,
        thickness_m,
    )?;
    let reduced = PlateResponse {
        moment_x_knm_per_m: single.moment_x_knm_per_m * reduction,
        moment_y_knm_per_m: single.moment_y_knm_per_m * reduction,
        deflection_mm: single.deflection_mm * reduction,
    };

    build_result(
        SlabType::Continuous(span_count),
        lx_m,
        ly_m,
        load_kn_per_m2,
        e_mpa,
        thickness_m,
        reduced,
    )
}

/// Analyze a slab described by a [`SlabInput`].
pub fn calculate(input: &SlabInput) -> CalcResult<SlabResult> {
    match input.slab_type {
        SlabType::Single => calculate_single_span(
            input.lx_m,
            input.ly_m,
            input.load_kn_per_m2,
            input.e_mpa,
            input.thickness_m,
        ),
        SlabType::Continuous(span_count) => calculate_continuous(
            input.lx_m,
            input.ly_m,
            input.load_kn_per_m2,
            input.e_mpa,
            input.thickness_m,
            span_count,
        ),
    }
}
