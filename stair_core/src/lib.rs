//! # stair_core - Stair Stringer Cut-Geometry Engine
//!
//! `stair_core` is the computational heart of StairCut. It turns a total
//! rise/run and a carpenter's step preferences into a complete dimensional
//! breakdown: riser and tread counts, per-step dimensions, cut angles,
//! tape-measure layout marks, and a blueprint polygon for the stringer
//! profile. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Infallible core**: the calculators never fail on finite numeric
//!   input; range validation happens up front and reports plain-language
//!   messages, not typed errors
//! - **JSON-First**: All types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use stair_core::calculations::stair::{compute, StairInput};
//! use stair_core::format::format_dimension;
//!
//! let input = StairInput {
//!     total_rise_in: 108.0,
//!     ..StairInput::default()
//! };
//!
//! let issues = input.validate();
//! assert!(issues.is_empty());
//!
//! let result = compute(&input);
//! assert_eq!(result.number_of_steps, 14);
//! println!("Rise per step: {}", format_dimension(result.rise_per_step_in));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Stair geometry calculators (standard and multi-stringer)
//! - [`format`] - Fractional-inch dimension formatting
//! - [`blueprint`] - Stringer profile polygon and SVG rendering
//! - [`report`] - Printable PDF cut-list summary
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod blueprint;
pub mod calculations;
pub mod errors;
pub mod format;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use blueprint::{build_blueprint_path, BlueprintPath};
pub use calculations::stair::{compute, StairInput, StairResult};
pub use errors::{CalcError, CalcResult};
pub use format::format_dimension;
