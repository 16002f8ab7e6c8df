//! # Beam Analysis
//!
//! Closed-form analysis of beams under a uniform load over the full length:
//!
//! - **Simple span**: pin-roller, M = qL²/8, V = qL/2, δ = 5qL⁴/(384EI)
//! - **Cantilever**: fixed-free, M = qL²/2, V = qL, δ = qL⁴/(8EI)
//! - **Continuous** (2 or 3 spans): simple-span formulas on the longest span,
//!   with the deflection reduced by an empirical continuity factor
//!   (0.70 for 2 spans, 0.65 for 3 spans)
//!
//! ## Units
//!
//! Inputs are meters, kN/m, MPa and m⁴. The modulus is converted to kN/m² for
//! the deflection formulas and deflections are reported in millimeters.
//!
//! ## Serviceability
//!
//! Limits are reported at L/300 and L/250 (L/300 and L/200 for cantilevers).
//! Utilization is measured against the dominant limit: L/300 for simple and
//! continuous beams, the stricter L/200 for cantilevers.
//!
//! ## Example
//!
//! ```rust
//! use statik_core::calculations::beam::calculate_simple;
//!
//! // 6 m IPE 200 in S235 under 5 kN/m
//! let result = calculate_simple(6.0, 5.0, 210_000.0, 1940e-8).unwrap();
//!
//! assert!((result.max_moment_knm - 22.5).abs() < 1e-9);
//! assert!((result.max_shear_kn - 15.0).abs() < 1e-9);
//! assert!((result.limit_l300_mm - 20.0).abs() < 1e-9);
//! assert!(!result.passes()); // δ ≈ 20.7 mm > 20 mm
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::calculations::fields::{ensure_finite, FieldMap, FieldValue};
use crate::calculations::ServiceabilityStatus;
use crate::equations::beam::{
    cantilever_uniform_fixed_moment, cantilever_uniform_max_deflection,
    cantilever_uniform_max_shear, continuity_reduction_factor, deflection_limit,
    uniform_load_max_deflection, uniform_load_max_moment, uniform_load_max_shear,
    utilization_pct,
};
use crate::errors::{require_finite, require_positive, CalcError, CalcResult};
use crate::units::{KnPerSqM, Megapascals, Meters, Millimeters};

/// Span counts accepted by [`calculate_continuous`]
pub const SUPPORTED_CONTINUOUS_SPANS: [usize; 2] = [2, 3];

/// Beam support configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeamType {
    /// Single span on two supports
    Simple,
    /// Fixed at one end, free at the other
    Cantilever,
    /// Two or three spans over intermediate supports
    Continuous,
}

impl BeamType {
    /// All beam types for selection lists
    pub const ALL: [BeamType; 3] = [BeamType::Simple, BeamType::Cantilever, BeamType::Continuous];

    /// Short type tag used in reports and exports
    pub fn code(&self) -> &'static str {
        match self {
            BeamType::Simple => "simple",
            BeamType::Cantilever => "cantilever",
            BeamType::Continuous => "continuous",
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            BeamType::Simple => "Simple span (2 supports)",
            BeamType::Cantilever => "Cantilever (fixed one end)",
            BeamType::Continuous => "Continuous beam (2-3 spans)",
        }
    }

    /// Divisor n of the L/n limit utilization is measured against
    pub fn dominant_limit_divisor(&self) -> f64 {
        match self {
            BeamType::Cantilever => 200.0,
            BeamType::Simple | BeamType::Continuous => 300.0,
        }
    }
}

impl std::fmt::Display for BeamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Input parameters for a beam calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "beam_type": "continuous",
///   "spans_m": [4.0, 5.0],
///   "load_kn_per_m": 5.0,
///   "e_mpa": 210000.0,
///   "i_m4": 1.94e-5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// Support configuration
    pub beam_type: BeamType,

    /// Span lengths in meters, in order (one entry unless continuous)
    pub spans_m: Vec<f64>,

    /// Uniform load in kN/m
    pub load_kn_per_m: f64,

    /// Elastic modulus in MPa
    pub e_mpa: f64,

    /// Second moment of area in m⁴
    pub i_m4: f64,
}

impl BeamInput {
    /// Simple-span beam of length `length_m`
    pub fn simple(length_m: f64, load_kn_per_m: f64, e_mpa: f64, i_m4: f64) -> Self {
        BeamInput {
            beam_type: BeamType::Simple,
            spans_m: vec![length_m],
            load_kn_per_m,
            e_mpa,
            i_m4,
        }
    }

    /// Cantilever of length `length_m`
    pub fn cantilever(length_m: f64, load_kn_per_m: f64, e_mpa: f64, i_m4: f64) -> Self {
        BeamInput {
            beam_type: BeamType::Cantilever,
            spans_m: vec![length_m],
            load_kn_per_m,
            e_mpa,
            i_m4,
        }
    }

    /// Continuous beam over the given spans
    pub fn continuous(spans_m: Vec<f64>, load_kn_per_m: f64, e_mpa: f64, i_m4: f64) -> Self {
        BeamInput {
            beam_type: BeamType::Continuous,
            spans_m,
            load_kn_per_m,
            e_mpa,
            i_m4,
        }
    }
}

/// Results from a beam calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "beam_type": "simple",
///   "length_m": 6.0,
///   "spans_m": [6.0],
///   "load_kn_per_m": 5.0,
///   "e_mpa": 210000.0,
///   "i_m4": 1.94e-5,
///   "max_moment_knm": 22.5,
///   "max_shear_kn": 15.0,
///   "max_deflection_mm": 20.71,
///   "governing_span_index": 0,
///   "limit_l300_mm": 20.0,
///   "limit_l250_mm": 24.0,
///   "limit_l200_mm": null,
///   "utilization_pct": 103.56
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    // === Input Echo ===
    /// Support configuration
    pub beam_type: BeamType,

    /// Total length in meters (sum of spans for continuous beams)
    pub length_m: f64,

    /// Span lengths in meters
    pub spans_m: Vec<f64>,

    /// Uniform load in kN/m
    pub load_kn_per_m: f64,

    /// Elastic modulus in MPa
    pub e_mpa: f64,

    /// Second moment of area in m⁴
    pub i_m4: f64,

    // === Demand ===
    /// Maximum bending moment in kNm
    pub max_moment_knm: f64,

    /// Maximum shear force in kN
    pub max_shear_kn: f64,

    /// Maximum deflection in mm
    pub max_deflection_mm: f64,

    /// Index of the governing (longest) span; 0 for single-span types
    pub governing_span_index: usize,

    // === Serviceability ===
    /// Deflection limit L/300 in mm
    pub limit_l300_mm: f64,

    /// Deflection limit L/250 in mm (simple and continuous beams)
    pub limit_l250_mm: Option<f64>,

    /// Deflection limit L/200 in mm (cantilevers)
    pub limit_l200_mm: Option<f64>,

    /// Deflection as a percentage of the dominant limit
    pub utilization_pct: f64,
}

impl BeamResult {
    /// The limit utilization is measured against (L/300, or L/200 for cantilevers)
    pub fn governing_limit_mm(&self) -> f64 {
        match self.beam_type {
            BeamType::Cantilever => self.limit_l200_mm.unwrap_or(self.limit_l300_mm),
            BeamType::Simple | BeamType::Continuous => self.limit_l300_mm,
        }
    }

    /// Length of the governing span in meters
    pub fn governing_span_m(&self) -> f64 {
        self.spans_m
            .get(self.governing_span_index)
            .copied()
            .unwrap_or(self.length_m)
    }

    /// Serviceability classification of the utilization
    pub fn status(&self) -> ServiceabilityStatus {
        ServiceabilityStatus::from_utilization(self.utilization_pct)
    }

    /// Check if the deflection is within the dominant limit
    pub fn passes(&self) -> bool {
        self.utilization_pct <= 100.0
    }

    /// Flat mapping of every declared field
    pub fn to_field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        map.insert("beam_type", FieldValue::from(self.beam_type.code()));
        map.insert("length_m", self.length_m.into());
        map.insert("spans_m", self.spans_m.as_slice().into());
        map.insert("load_kn_per_m", self.load_kn_per_m.into());
        map.insert("e_mpa", self.e_mpa.into());
        map.insert("i_m4", self.i_m4.into());
        map.insert("max_moment_knm", self.max_moment_knm.into());
        map.insert("max_shear_kn", self.max_shear_kn.into());
        map.insert("max_deflection_mm", self.max_deflection_mm.into());
        map.insert("governing_span_index", self.governing_span_index.into());
        map.insert("limit_l300_mm", self.limit_l300_mm.into());
        map.insert("limit_l250_mm", self.limit_l250_mm.into());
        map.insert("limit_l200_mm", self.limit_l200_mm.into());
        map.insert("utilization_pct", self.utilization_pct.into());
        map
    }
}

fn validate_section(load_kn_per_m: f64, e_mpa: f64, i_m4: f64) -> CalcResult<()> {
    require_positive("load_kn_per_m", load_kn_per_m)?;
    require_positive("e_mpa", e_mpa)?;
    require_positive("i_m4", i_m4)?;
    Ok(())
}

/// E in kN/m² for the deflection formulas.
///
/// Fails when E or 384·E·I overflows; an infinite stiffness would report a
/// zero deflection for any load.
pub(crate) fn bending_modulus(calculation: &str, e_mpa: f64, i_m4: f64) -> CalcResult<f64> {
    let e = KnPerSqM::from(Megapascals(e_mpa)).value();
    require_finite(calculation, "E [kN/m²]", e)?;
    require_finite(calculation, "384·E·I", 384.0 * e * i_m4)?;
    Ok(e)
}

/// Simple-span deflection in mm with E given in kN/m²
fn simple_span_deflection_mm(length_m: f64, load_kn_per_m: f64, e: f64, i_m4: f64) -> f64 {
    let delta = Meters(uniform_load_max_deflection(load_kn_per_m, length_m, e, i_m4));
    Millimeters::from(delta).value()
}

/// Reject results whose quantities overflowed
fn checked(result: BeamResult) -> CalcResult<BeamResult> {
    ensure_finite(&format!("{} beam", result.beam_type.code()), &result.to_field_map())?;
    Ok(result)
}

/// L/n in mm for a length in m
fn limit_mm(length_m: f64, divisor: f64) -> f64 {
    deflection_limit(Millimeters::from(Meters(length_m)).value(), divisor)
}

/// Analyze a simple-span beam under uniform load.
///
/// # Arguments
///
/// * `length_m` - Span in meters
/// * `load_kn_per_m` - Uniform load in kN/m
/// * `e_mpa` - Elastic modulus in MPa
/// * `i_m4` - Second moment of area in m⁴
///
/// # Errors
///
/// - `InvalidParameter` if any input is not strictly positive
/// - `CalculationFailed` if a quantity overflows the f64 range
pub fn calculate_simple(
    length_m: f64,
    load_kn_per_m: f64,
    e_mpa: f64,
    i_m4: f64,
) -> CalcResult<BeamResult> {
    require_positive("length_m", length_m)?;
    validate_section(load_kn_per_m, e_mpa, i_m4)?;
    let e = bending_modulus("simple beam", e_mpa, i_m4)?;

    let max_moment_knm = uniform_load_max_moment(load_kn_per_m, length_m);
    let max_shear_kn = uniform_load_max_shear(load_kn_per_m, length_m);
    let max_deflection_mm = simple_span_deflection_mm(length_m, load_kn_per_m, e, i_m4);

    let limit_l300_mm = limit_mm(length_m, 300.0);
    let limit_l250_mm = limit_mm(length_m, 250.0);
    let utilization = utilization_pct(max_deflection_mm, limit_l300_mm);

    debug!(
        "simple beam L={} m q={} kN/m: M={:.2} kNm, V={:.2} kN, δ={:.2} mm ({:.1}% of L/300)",
        length_m, load_kn_per_m, max_moment_knm, max_shear_kn, max_deflection_mm, utilization
    );

    checked(BeamResult {
        beam_type: BeamType::Simple,
        length_m,
        spans_m: vec![length_m],
        load_kn_per_m,
        e_mpa,
        i_m4,
        max_moment_knm,
        max_shear_kn,
        max_deflection_mm,
        governing_span_index: 0,
        limit_l300_mm,
        limit_l250_mm: Some(limit_l250_mm),
        limit_l200_mm: None,
        utilization_pct: utilization,
    })
}

/// Analyze a cantilever under uniform load.
///
/// Utilization is measured against L/200, the tighter bound for cantilevers.
///
/// # Errors
///
/// - `InvalidParameter` if any input is not strictly positive
/// - `CalculationFailed` if a quantity overflows the f64 range
pub fn calculate_cantilever(
    length_m: f64,
    load_kn_per_m: f64,
    e_mpa: f64,
    i_m4: f64,
) -> CalcResult<BeamResult> {
    require_positive("length_m", length_m)?;
    validate_section(load_kn_per_m, e_mpa, i_m4)?;
    let e = bending_modulus("cantilever beam", e_mpa, i_m4)?;

    let max_moment_knm = cantilever_uniform_fixed_moment(load_kn_per_m, length_m);
    let max_shear_kn = cantilever_uniform_max_shear(load_kn_per_m, length_m);

    let delta = Meters(cantilever_uniform_max_deflection(load_kn_per_m, length_m, e, i_m4));
    let max_deflection_mm = Millimeters::from(delta).value();

    let limit_l300_mm = limit_mm(length_m, 300.0);
    let limit_l200_mm = limit_mm(length_m, BeamType::Cantilever.dominant_limit_divisor());
    let utilization = utilization_pct(max_deflection_mm, limit_l200_mm);

    debug!(
        "cantilever L={} m q={} kN/m: M={:.2} kNm, V={:.2} kN, δ={:.2} mm ({:.1}% of L/200)",
        length_m, load_kn_per_m, max_moment_knm, max_shear_kn, max_deflection_mm, utilization
    );

    checked(BeamResult {
        beam_type: BeamType::Cantilever,
        length_m,
        spans_m: vec![length_m],
        load_kn_per_m,
        e_mpa,
        i_m4,
        max_moment_knm,
        max_shear_kn,
        max_deflection_mm,
        governing_span_index: 0,
        limit_l300_mm,
        limit_l250_mm: None,
        limit_l200_mm: Some(limit_l200_mm),
        utilization_pct: utilization,
    })
}

/// Analyze a continuous beam with 2 or 3 spans.
///
/// The longest span governs (first occurrence on ties). The moment is the
/// simple-span value of the governing span, used as an approximation of the
/// support moment magnitude, and the deflection is the simple-span deflection
/// of the governing span times the continuity factor.
///
/// # Errors
///
/// - `UnsupportedSpanCount` unless `spans_m` has 2 or 3 entries
/// - `InvalidParameter` if any span or other input is not strictly positive
/// - `CalculationFailed` if a quantity overflows the f64 range
///
/// # Example
///
/// ```rust
/// use statik_core::calculations::beam::calculate_continuous;
///
/// let result = calculate_continuous(&[4.0, 5.0], 5.0, 210_000.0, 1940e-8).unwrap();
/// assert_eq!(result.governing_span_index, 1);
/// assert!((result.max_moment_knm - 15.625).abs() < 1e-9);
/// ```
pub fn calculate_continuous(
    spans_m: &[f64],
    load_kn_per_m: f64,
    e_mpa: f64,
    i_m4: f64,
) -> CalcResult<BeamResult> {
    if !SUPPORTED_CONTINUOUS_SPANS.contains(&spans_m.len()) {
        return Err(CalcError::unsupported_span_count(
            "continuous beam",
            spans_m.len(),
            &SUPPORTED_CONTINUOUS_SPANS,
        ));
    }
    for (index, span) in spans_m.iter().enumerate() {
        require_positive(&format!("spans_m[{}]", index), *span)?;
    }
    validate_section(load_kn_per_m, e_mpa, i_m4)?;
    let e = bending_modulus("continuous beam", e_mpa, i_m4)?;

    let (governing_span_index, governing_span_m) = spans_m
        .iter()
        .copied()
        .enumerate()
        .fold((0, spans_m[0]), |(best_index, best), (index, span)| {
            if span > best {
                (index, span)
            } else {
                (best_index, best)
            }
        });

    let reduction = continuity_reduction_factor(spans_m.len()).ok_or_else(|| {
        CalcError::unsupported_span_count(
            "continuous beam",
            spans_m.len(),
            &SUPPORTED_CONTINUOUS_SPANS,
        )
    })?;

    let max_moment_knm = uniform_load_max_moment(load_kn_per_m, governing_span_m);
    let max_shear_kn = spans_m
        .iter()
        .map(|span| uniform_load_max_shear(load_kn_per_m, *span))
        .fold(0.0, f64::max);
    let max_deflection_mm =
        simple_span_deflection_mm(governing_span_m, load_kn_per_m, e, i_m4) * reduction;

    let limit_l300_mm = limit_mm(governing_span_m, 300.0);
    let limit_l250_mm = limit_mm(governing_span_m, 250.0);
    let utilization = utilization_pct(max_deflection_mm, limit_l300_mm);

    debug!(
        "continuous beam {:?} m q={} kN/m: span {} governs, reduction {}, δ={:.2} mm ({:.1}%)",
        spans_m, load_kn_per_m, governing_span_index, reduction, max_deflection_mm, utilization
    );

    checked(BeamResult {
        beam_type: BeamType::Continuous,
        length_m: spans_m.iter().sum(),
        spans_m: spans_m.to_vec(),
        load_kn_per_m,
        e_mpa,
        i_m4,
        max_moment_knm,
        max_shear_kn,
        max_deflection_mm,
        governing_span_index,
        limit_l300_mm,
        limit_l250_mm: Some(limit_l250_mm),
        limit_l200_mm: None,
        utilization_pct: utilization,
    })
}

/// Analyze a beam described by a [`BeamInput`].
///
/// Simple spans and cantilevers take exactly one entry in `spans_m`.
pub fn calculate(input: &BeamInput) -> CalcResult<BeamResult> {
    match input.beam_type {
        BeamType::Simple | BeamType::Cantilever => {
            let length_m = match input.spans_m.as_slice() {
                [length_m] => *length_m,
                spans => {
                    return Err(CalcError::unsupported_span_count(
                        format!("{} beam", input.beam_type.code()),
                        spans.len(),
                        &[1],
                    ))
                }
            };
            if input.beam_type == BeamType::Simple {
                calculate_simple(length_m, input.load_kn_per_m, input.e_mpa, input.i_m4)
            } else {
                calculate_cantilever(length_m, input.load_kn_per_m, input.e_mpa, input.i_m4)
            }
        }
        BeamType::Continuous => {
            calculate_continuous(&input.spans_m, input.load_kn_per_m, input.e_mpa, input.i_m4)
        }
    }
}

/// Second moment of area (m⁴) at which a simple span just reaches L/300.
///
/// Feed the result to [`crate::materials::suggest_sections`] to find a
/// section that satisfies the limit.
///
/// # Errors
///
/// - `InvalidParameter` if any input is not strictly positive
/// - `CalculationFailed` if the required inertia overflows the f64 range
pub fn required_inertia_m4(length_m: f64, load_kn_per_m: f64, e_mpa: f64) -> CalcResult<f64> {
    require_positive("length_m", length_m)?;
    require_positive("load_kn_per_m", load_kn_per_m)?;
    require_positive("e_mpa", e_mpa)?;

    // δ is inversely proportional to I, so δ(I = 1) / limit is the required I.
    let e = bending_modulus("required inertia", e_mpa, 1.0)?;
    let deflection_per_unit_i = uniform_load_max_deflection(load_kn_per_m, length_m, e, 1.0);
    require_finite(
        "required inertia",
        "I_req [m⁴]",
        deflection_per_unit_i / deflection_limit(length_m, 300.0),
    )
}
