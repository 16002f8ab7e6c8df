//! # Unit Types
//!
//! Type-safe wrappers for the metric units the analyzers work in. These are
//! simple f64 newtypes so JSON stays clean (just numbers).
//!
//! ## SI Units (Primary)
//!
//! - Length: meters (m) for geometry, millimeters (mm) for deflections
//! - Stress / modulus: megapascals (MPa = N/mm²), kilonewtons per square meter (kN/m²)
//! - Moment: kilonewton-meters (kNm), newton-millimeters (Nmm)
//! - Reinforcement area: square millimeters (mm²), square centimeters (cm²)
//!
//! The closed-form beam and plate formulas are evaluated with lengths in
//! meters, loads in kN and moduli in kN/m², so an input modulus in MPa is
//! scaled by 1000 first and a resulting deflection in meters is scaled by
//! 1000 to millimeters.
//!
//! ## Example
//!
//! ```rust
//! use statik_core::units::{KnPerSqM, Megapascals, Meters, Millimeters};
//!
//! let e: KnPerSqM = Megapascals(210_000.0).into();
//! assert_eq!(e.0, 210_000_000.0);
//!
//! let deflection: Millimeters = Meters(0.02).into();
//! assert_eq!(deflection.0, 20.0);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress or elastic modulus in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Stress or area load in kilonewtons per square meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerSqM(pub f64);

impl From<Megapascals> for KnPerSqM {
    fn from(mpa: Megapascals) -> Self {
        KnPerSqM(mpa.0 * 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-meters (or kNm per meter width for slabs)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

/// Moment in newton-millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NMm(pub f64);

impl From<KnM> for NMm {
    fn from(knm: KnM) -> Self {
        NMm(knm.0 * 1.0e6)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Area in square centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqCm(pub f64);

impl From<SqMm> for SqCm {
    fn from(mm2: SqMm) -> Self {
        SqCm(mm2.0 / 100.0)
    }
}

// ============================================================================
// Raw Value Access
// ============================================================================

macro_rules! impl_value {
    ($($type:ty),+) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )+
    };
}

impl_value!(Meters, Millimeters, Megapascals, KnPerSqM, KnM, NMm, SqMm, SqCm);
