//! IPE Section Table
//!
//! Second moment of area (strong axis, Iy) for European IPE I-beams.
//! Values are stored in cm⁴ as published in section tables and exposed in m⁴.
//!
//! ## Example
//!
//! ```rust
//! use statik_core::materials::sections::{section_inertia, suggest_sections};
//!
//! let i = section_inertia("IPE 200");
//! assert!((i - 1940e-8).abs() < 1e-12);
//!
//! // Sections stiff enough for a required I of 2500 cm⁴
//! let candidates = suggest_sections(2500e-8);
//! assert_eq!(candidates[0].label, "IPE 220");
//! ```

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::normalize_key;

/// Section used when a name is not found in the table
pub const DEFAULT_SECTION: &str = "IPE 200";

/// Inertia returned for unknown section names (IPE 200), m⁴
pub const DEFAULT_SECTION_INERTIA_M4: f64 = 1940.0e-8;

/// cm⁴ → m⁴
const CM4_TO_M4: f64 = 1.0e-8;

/// Suggested sections may be up to 10 % below the required inertia
const SUGGESTION_TOLERANCE: f64 = 0.9;

/// Maximum number of sections returned by [`suggest_sections`]
const MAX_SUGGESTIONS: usize = 3;

/// IPE table in ascending stiffness order: (label, Iy in cm⁴)
const IPE_TABLE: [(&str, f64); 18] = [
    ("IPE 80", 80.1),
    ("IPE 100", 171.0),
    ("IPE 120", 318.0),
    ("IPE 140", 541.0),
    ("IPE 160", 869.0),
    ("IPE 180", 1320.0),
    ("IPE 200", 1940.0),
    ("IPE 220", 2770.0),
    ("IPE 240", 3890.0),
    ("IPE 270", 5790.0),
    ("IPE 300", 8360.0),
    ("IPE 330", 11770.0),
    ("IPE 360", 16270.0),
    ("IPE 400", 23130.0),
    ("IPE 450", 33740.0),
    ("IPE 500", 48200.0),
    ("IPE 550", 67120.0),
    ("IPE 600", 92080.0),
];

/// Sections indexed by normalized label ("IPE200")
static SECTIONS: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    IPE_TABLE
        .iter()
        .map(|(label, i_cm4)| (normalize_key(label), i_cm4 * CM4_TO_M4))
        .collect()
});

/// A named section with its second moment of area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpeSection {
    /// Table label, e.g. "IPE 240"
    pub label: String,
    /// Second moment of area Iy (m⁴)
    pub inertia_m4: f64,
}

impl IpeSection {
    /// Second moment of area in cm⁴ (the unit section tables print)
    pub fn inertia_cm4(&self) -> f64 {
        self.inertia_m4 / CM4_TO_M4
    }
}

/// Second moment of area in m⁴ for a section name.
///
/// Matching ignores case and whitespace ("ipe200" finds "IPE 200").
/// Unknown names fall back to [`DEFAULT_SECTION_INERTIA_M4`].
pub fn section_inertia(name: &str) -> f64 {
    match SECTIONS.get(&normalize_key(name)) {
        Some(i_m4) => *i_m4,
        None => {
            debug!(
                "unknown section '{}', using {} (I = {:e} m4)",
                name, DEFAULT_SECTION, DEFAULT_SECTION_INERTIA_M4
            );
            DEFAULT_SECTION_INERTIA_M4
        }
    }
}

/// All section labels in ascending stiffness order
pub fn section_names() -> Vec<&'static str> {
    IPE_TABLE.iter().map(|(label, _)| *label).collect()
}

/// Up to three sections, smallest first, whose inertia reaches at least 90 %
/// of `required_inertia_m4`.
///
/// An empty result means no table section is stiff enough.
pub fn suggest_sections(required_inertia_m4: f64) -> Vec<IpeSection> {
    IPE_TABLE
        .iter()
        .map(|(label, i_cm4)| IpeSection {
            label: (*label).to_string(),
            inertia_m4: i_cm4 * CM4_TO_M4,
        })
        .filter(|section| section.inertia_m4 >= required_inertia_m4 * SUGGESTION_TOLERANCE)
        .take(MAX_SUGGESTIONS)
        .collect()
}
