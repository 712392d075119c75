//! # Structural Equations
//!
//! Fundamental section-property formulas used by the calculators. Keeping
//! them in one place makes them easy to check against the design references.
//!
//! ## Modules
//!
//! - [`section`] - Rectangle properties, parallel-axis shifts, moduli, resistance
//!
//! ## Sign Conventions
//!
//! - **Ordinates**: `y` measured upward from the bottom fiber of the plate
//! - **Depths from top**: measured downward from the top fiber of the top flange
//! - **Moment**: Positive sagging (compression in the top flange)

pub mod section;

pub use section::{
    area_weighted_centroid,
    elastic_section_modulus,
    first_moment_about,
    moment_resistance_knm,
    parallel_axis_shift,
    rectangular_area,
    rectangular_moment_of_inertia,
};
