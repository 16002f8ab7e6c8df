//! # Materials Database
//!
//! Fixed lookup tables used to resolve user selections into the numbers the
//! analyzers need:
//!
//! - **Materials**: material name → elastic modulus E (MPa)
//! - **Sections**: standardized IPE section name → second moment of area I (m⁴),
//!   see [`sections`]
//!
//! Both lookups are total functions. An unknown name is not an error: it
//! resolves to a documented default (E = 210000 MPa, I of an IPE 200) so a
//! form can always produce a calculation.
//!
//! ## Example
//!
//! ```rust
//! use statik_core::materials::{material_modulus, DEFAULT_MODULUS_MPA};
//!
//! assert_eq!(material_modulus("Beton C30/37"), 33_000.0);
//! assert_eq!(material_modulus("Unobtainium"), DEFAULT_MODULUS_MPA);
//! ```

pub mod sections;

pub use sections::{
    section_inertia, section_names, suggest_sections, IpeSection, DEFAULT_SECTION,
    DEFAULT_SECTION_INERTIA_M4,
};

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

/// Modulus returned for material names not found in the table (structural steel)
pub const DEFAULT_MODULUS_MPA: f64 = 210_000.0;

/// Material table in display order: (name, E in MPa)
const MATERIAL_TABLE: [(&str, f64); 10] = [
    ("Stahl (S235)", 210_000.0),
    ("Stahl (S355)", 210_000.0),
    ("Beton C20/25", 30_000.0),
    ("Beton C30/37", 33_000.0),
    ("Beton C35/45", 34_000.0),
    ("Holz (Fichte)", 11_000.0),
    ("Holz (Tanne)", 11_000.0),
    ("Holz (Eiche)", 12_000.0),
    ("Holz (BSH)", 14_000.0),
    ("Aluminium", 70_000.0),
];

/// Materials indexed by normalized name
static MATERIALS: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    MATERIAL_TABLE
        .iter()
        .map(|(name, e_mpa)| (normalize_key(name), *e_mpa))
        .collect()
});

/// Lookup key: uppercase with whitespace removed, so "beton c30/37" and
/// "Beton C30/37" resolve to the same entry.
pub(crate) fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Elastic modulus in MPa for a material name.
///
/// Unknown names fall back to [`DEFAULT_MODULUS_MPA`].
pub fn material_modulus(name: &str) -> f64 {
    match MATERIALS.get(&normalize_key(name)) {
        Some(e_mpa) => *e_mpa,
        None => {
            debug!(
                "unknown material '{}', using default E = {} MPa",
                name, DEFAULT_MODULUS_MPA
            );
            DEFAULT_MODULUS_MPA
        }
    }
}

/// All material names in display order (for selection lists)
pub fn material_names() -> Vec<&'static str> {
    MATERIAL_TABLE.iter().map(|(name, _)| *name).collect()
}
