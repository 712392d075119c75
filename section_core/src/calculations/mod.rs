//! # Section Calculations
//!
//! The composite calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, table) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Modules
//!
//! - [`elastic`] - Elastic neutral axis, Ixx, Wel
//! - [`plastic`] - Plastic neutral axis, Wpl, Mpl,Rd
//! - [`composite`] - Lookup, assembly and both analyses in one call

pub mod composite;
pub mod elastic;
pub mod plastic;

pub use composite::{calculate, calculate_builtin, CompositeInput, CompositeResult, SectionProperties};
pub use elastic::{elastic_properties, ElasticProperties, PartContribution};
pub use plastic::{plastic_neutral_axis, plastic_properties, PlasticProperties, PnaLocation};
