//! # Simple Beam Diagrams
//!
//! Chart data for a simple-span beam under uniform load:
//!
//! - [`SimpleBeamDiagram`] samples shear V(x), moment M(x) and deflection δ(x)
//!   along the span
//! - [`compare_sections`] evaluates the midspan deflection of every IPE
//!   section in the table against L/300
//!
//! Rendering is left to the caller; this module only produces the numbers.
//!
//! ## Example
//!
//! ```rust
//! use statik_core::calculations::beam_diagram::SimpleBeamDiagram;
//!
//! let diagram = SimpleBeamDiagram::new(6.0, 5.0, 210_000.0, 1940e-8)
//!     .with_sample_points(21)
//!     .analyze()
//!     .unwrap();
//!
//! assert_eq!(diagram.moment_diagram.len(), 21);
//! assert!((diagram.max_moment_knm - 22.5).abs() < 1e-9);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::calculations::beam::bending_modulus;
use crate::equations::beam::{
    deflection_limit, uniform_load_deflection_at, uniform_load_max_deflection,
    uniform_load_moment_at, uniform_load_shear_at, utilization_pct,
};
use crate::errors::{require_finite, require_positive, CalcResult};
use crate::materials::sections::{section_inertia, section_names};
use crate::units::{Meters, Millimeters};

/// Default number of sample points (every 1 % of the span)
pub const DEFAULT_SAMPLE_POINTS: usize = 101;

/// Fewest sample points a diagram is drawn with
pub const MIN_SAMPLE_POINTS: usize = 11;

/// Sections within this inertia of the current one are flagged as current (1 cm⁴)
const CURRENT_SECTION_TOLERANCE_M4: f64 = 1.0e-8;

/// Sampled diagrams of a simple-span beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramResult {
    /// Span in meters
    pub length_m: f64,

    /// Shear force (x in m, V in kN)
    pub shear_diagram: Vec<(f64, f64)>,

    /// Bending moment (x in m, M in kNm)
    pub moment_diagram: Vec<(f64, f64)>,

    /// Deflection (x in m, δ in mm)
    pub deflection_diagram: Vec<(f64, f64)>,

    /// Largest sampled moment in kNm
    pub max_moment_knm: f64,

    /// Largest sampled deflection in mm
    pub max_deflection_mm: f64,

    /// Position of the largest sampled deflection in m
    pub max_deflection_position_m: f64,
}

/// Diagram builder for a simple-span beam under uniform load
#[derive(Debug, Clone)]
pub struct SimpleBeamDiagram {
    /// Span in meters
    pub length_m: f64,
    /// Uniform load in kN/m
    pub load_kn_per_m: f64,
    /// Elastic modulus in MPa
    pub e_mpa: f64,
    /// Second moment of area in m⁴
    pub i_m4: f64,
    /// Number of evenly spaced sample points
    pub sample_points: usize,
}

impl SimpleBeamDiagram {
    /// Create a diagram with [`DEFAULT_SAMPLE_POINTS`] samples
    pub fn new(length_m: f64, load_kn_per_m: f64, e_mpa: f64, i_m4: f64) -> Self {
        SimpleBeamDiagram {
            length_m,
            load_kn_per_m,
            e_mpa,
            i_m4,
            sample_points: DEFAULT_SAMPLE_POINTS,
        }
    }

    /// Set the number of sample points (at least [`MIN_SAMPLE_POINTS`])
    pub fn with_sample_points(mut self, points: usize) -> Self {
        self.sample_points = points.max(MIN_SAMPLE_POINTS);
        self
    }

    /// Evenly spaced positions plus midspan, where M and δ peak
    fn sample_positions(&self) -> Vec<f64> {
        let last = (self.sample_points - 1) as f64;
        let mut positions: Vec<f64> = (0..self.sample_points)
            .map(|i| self.length_m * i as f64 / last)
            .collect();
        positions.push(self.length_m / 2.0);

        let epsilon = self.length_m * 1.0e-9;
        positions.sort_by(f64::total_cmp);
        positions.dedup_by(|a, b| (*a - *b).abs() < epsilon);
        positions
    }

    /// Sample V(x), M(x) and δ(x).
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if any input is not strictly positive
    /// - `CalculationFailed` if a quantity overflows the f64 range
    pub fn analyze(&self) -> CalcResult<DiagramResult> {
        require_positive("length_m", self.length_m)?;
        require_positive("load_kn_per_m", self.load_kn_per_m)?;
        require_positive("e_mpa", self.e_mpa)?;
        require_positive("i_m4", self.i_m4)?;
        let e = bending_modulus("simple beam diagram", self.e_mpa, self.i_m4)?;

        let (w, l) = (self.load_kn_per_m, self.length_m);
        let positions = self.sample_positions();

        let mut shear_diagram = Vec::with_capacity(positions.len());
        let mut moment_diagram = Vec::with_capacity(positions.len());
        let mut deflection_diagram = Vec::with_capacity(positions.len());
        let mut max_moment_knm = 0.0f64;
        let mut max_deflection_mm = 0.0f64;
        let mut max_deflection_position_m = 0.0;

        for x in positions {
            let v = uniform_load_shear_at(w, l, x);
            let m = uniform_load_moment_at(w, l, x);
            let d = Millimeters::from(Meters(uniform_load_deflection_at(w, l, x, e, self.i_m4)));

            shear_diagram.push((x, v));
            moment_diagram.push((x, m));
            deflection_diagram.push((x, d.value()));

            max_moment_knm = max_moment_knm.max(m);
            if d.value() > max_deflection_mm {
                max_deflection_mm = d.value();
                max_deflection_position_m = x;
            }
        }

        require_finite("simple beam diagram", "M_max [kNm]", max_moment_knm)?;
        require_finite("simple beam diagram", "δ_max [mm]", max_deflection_mm)?;

        debug!(
            "simple beam diagram L={} m: {} samples, M_max={:.2} kNm, δ_max={:.2} mm at x={:.2} m",
            l,
            moment_diagram.len(),
            max_moment_knm,
            max_deflection_mm,
            max_deflection_position_m
        );

        Ok(DiagramResult {
            length_m: l,
            shear_diagram,
            moment_diagram,
            deflection_diagram,
            max_moment_knm,
            max_deflection_mm,
            max_deflection_position_m,
        })
    }
}

/// Midspan deflection of one table section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionComparison {
    /// Section label, e.g. "IPE 220"
    pub label: String,

    /// Second moment of area in m⁴
    pub inertia_m4: f64,

    /// Midspan deflection in mm
    pub deflection_mm: f64,

    /// Deflection as a percentage of L/300
    pub utilization_pct: f64,

    /// Whether this is the section currently selected
    pub is_current: bool,
}

impl SectionComparison {
    /// Check if the deflection is within L/300
    pub fn passes(&self) -> bool {
        self.utilization_pct <= 100.0
    }
}

/// Deflection of every IPE section for the given span, load and material.
///
/// Entries follow the table order (ascending stiffness). The one whose inertia
/// matches `current_i_m4` to within 1 cm⁴ is flagged as current.
///
/// # Errors
///
/// - `InvalidParameter` if any input is not strictly positive
/// - `CalculationFailed` if a deflection overflows the f64 range
pub fn compare_sections(
    length_m: f64,
    load_kn_per_m: f64,
    e_mpa: f64,
    current_i_m4: f64,
) -> CalcResult<Vec<SectionComparison>> {
    require_positive("length_m", length_m)?;
    require_positive("load_kn_per_m", load_kn_per_m)?;
    require_positive("e_mpa", e_mpa)?;
    require_positive("current_i_m4", current_i_m4)?;

    let limit_mm = deflection_limit(Millimeters::from(Meters(length_m)).value(), 300.0);

    section_names()
        .into_iter()
        .map(|label| -> CalcResult<SectionComparison> {
            let inertia_m4 = section_inertia(label);
            let e = bending_modulus("section comparison", e_mpa, inertia_m4)?;
            let delta = Meters(uniform_load_max_deflection(load_kn_per_m, length_m, e, inertia_m4));
            let deflection_mm =
                require_finite("section comparison", label, Millimeters::from(delta).value())?;
            Ok(SectionComparison {
                label: label.to_string(),
                inertia_m4,
                deflection_mm,
                utilization_pct: utilization_pct(deflection_mm, limit_mm),
                is_current: (inertia_m4 - current_i_m4).abs() < CURRENT_SECTION_TOLERANCE_M4,
            })
        })
        .collect()
}
