//! # statik_core - Structural Engineering Calculation Engine
//!
//! `statik_core` computes internal forces, deflections and serviceability
//! utilization for beams, portal frames and slabs using closed-form beam and
//! plate theory. All inputs and outputs are JSON-serializable.
//!
//! Results are orientation-grade estimates: continuity is handled by fixed
//! reduction factors, frames by coarse coefficients, and no partial safety
//! factors are applied to loads.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Total Lookups**: Unknown material/section names resolve to documented defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use statik_core::calculations::beam::calculate_simple;
//! use statik_core::materials::{material_modulus, section_inertia};
//! use statik_core::report::format_result;
//!
//! let e = material_modulus("Stahl (S235)");
//! let i = section_inertia("IPE 200");
//! let result = calculate_simple(6.0, 5.0, e, i).unwrap();
//!
//! println!("{}", format_result(&result.into()));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Beam, frame and slab analyzers and their result records
//! - [`equations`] - Closed-form formulas used by the analyzers
//! - [`materials`] - Material and section lookup tables
//! - [`report`] - Fixed-order plain-text rendering of results
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationResult, ServiceabilityStatus};
pub use errors::{CalcError, CalcResult};
pub use materials::{material_modulus, section_inertia};
pub use report::format_result;
