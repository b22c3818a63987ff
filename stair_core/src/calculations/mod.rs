//! # Stair Calculations
//!
//! This module contains the geometry calculators. Each calculator follows
//! the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable), with a `validate()`
//!   method returning human-readable messages for out-of-range values
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure `compute` function that never fails on finite numeric input
//!
//! ## Available Calculators
//!
//! - [`stair`] - Standard rise/run stringer layout from target step
//!   proportions
//! - [`multi_stringer`] - Job-level variant: landing-thickness adjustment,
//!   kerf-inclusive blank length, and stringer spacing across the stair width
//!
//! The two calculators are policy variants of the same domain, not
//! refinements of one another; both are part of the public API.

pub mod multi_stringer;
pub mod stair;

// Re-export commonly used types
pub use multi_stringer::{compute_job, StringerJobInput, StringerJobResult, TopTreadMode};
pub use stair::{compute, StairInput, StairResult};
