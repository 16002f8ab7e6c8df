//! # Structural Engineering Equations
//!
//! This module contains the closed-form mechanics used by the analyzers.
//! Keeping equations in one place enables:
//! - Easy verification against reference tables
//! - Documentation of assumptions
//! - Consistent implementation across calculation types
//!
//! ## Modules
//!
//! - [`beam`] - Simple-span and cantilever formulas, values along the span,
//!   continuity factors, serviceability
//! - [`plate`] - Plate rigidity, deflection and reinforcement estimate
//! - [`frame`] - Portal frame approximations
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment, shear, reactions**: Reported as magnitudes
//! - **Deflection**: Positive downward

pub mod beam;
pub mod frame;
pub mod plate;

// Re-export commonly used items
pub use beam::{
    cantilever_uniform_fixed_moment,
    cantilever_uniform_max_deflection,
    cantilever_uniform_max_shear,
    continuity_reduction_factor,
    deflection_limit,
    uniform_load_deflection_at,
    uniform_load_max_deflection,
    uniform_load_max_moment,
    uniform_load_max_shear,
    uniform_load_moment_at,
    uniform_load_shear_at,
    utilization_pct,
};

pub use plate::{
    design_yield_strength,
    flexural_rigidity,
    lever_arm,
    plate_max_deflection,
    principal_moments,
    required_reinforcement,
};
