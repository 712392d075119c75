//! # section_core - Plated Column Section Engine
//!
//! `section_core` computes the elastic and plastic bending properties of a UK
//! universal column (UC) with a steel cover plate welded to its bottom flange.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use section_core::{calculate_builtin, CompositeInput, PlateDimensions};
//!
//! let input = CompositeInput {
//!     designation: "203 x 203 x 86".to_string(),
//!     plate: PlateDimensions::new(250.0, 10.0),
//!     ..CompositeInput::default()
//! };
//! let result = calculate_builtin(&input).unwrap();
//! println!("{}", section_core::report::render_text(&result));
//! ```
//!
//! ## Modules
//!
//! - [`materials`] - UC dimension tables and steel grades
//! - [`geometry`] - Rectangles of the plated section, SVG outline
//! - [`calculations`] - Elastic and plastic properties
//! - [`equations`] - Pure section formulas
//! - [`report`] - Plain-text report
//! - [`file_io`] - TOML case files, atomic results files
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod geometry;
pub mod materials;
pub mod report;
pub mod units;

pub use calculations::{calculate, calculate_builtin, CompositeInput, CompositeResult, SectionProperties};
pub use errors::{CalcError, CalcResult};
pub use geometry::{CompositeGeometry, PartKind, PlateDimensions};
pub use materials::{builtin_uc_sections, SteelGrade, UcSection, UcSectionTable};
