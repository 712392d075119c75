//! # Cross-Section Property Formulas
//!
//! Formulas for the geometric properties of built-up steel cross-sections
//! assembled from rectangles.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Second moment of area
//! - `W` = Section modulus (elastic: I/z_max, plastic: Σ|A·z| about the PNA)
//! - `b` = Width of a rectangle
//! - `t` = Thickness (height) of a rectangle
//! - `y` = Ordinate measured upward from the bottom fiber
//!
//! ## References
//!
//! - EN 1993-1-1 Clause 6.2.5: Bending moment resistance
//! - SCI P363 "Steel Building Design: Design Data" (the Blue Book)
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3

use crate::units::{KnM, Millimeters, Mm3, Mm4, Mpa, NMm, SqMm};

// =============================================================================
// RECTANGULAR ELEMENT PROPERTIES
// Every part of a plated universal column is an axis-aligned rectangle
// =============================================================================

/// Calculate area of a rectangular element
///
/// ```text
///     ┌─────────┐
///   t │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × t
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_area;
///
/// // 250 x 10 mm cover plate
/// let area = rectangular_area(250.0, 10.0);
/// assert!((area - 2500.0).abs() < 1e-9);
/// ```
#[inline]
pub fn rectangular_area(b: f64, t: f64) -> f64 {
    (Millimeters(b) * Millimeters(t)).value()
}

/// Calculate second moment of area of a rectangle about its own centroid
///
/// ```text
///     ┌─────────┐
///   t │ ════════│ ← own centroidal axis at t/2
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I₀ = b·t³/12
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_moment_of_inertia;
///
/// // 209.1 x 20.5 mm flange of a 203 x 203 x 86 UC
/// let i = rectangular_moment_of_inertia(209.1, 20.5);
/// assert!((i - 150_118.55).abs() < 0.01);
/// ```
///
/// # Reference
/// - Roark's Formulas, Table 3.1
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, t: f64) -> f64 {
    let t = Millimeters(t);
    let i: Mm4 = Millimeters(b) * t * t * t / 12.0;
    i.value()
}

/// Shift a second moment of area to a parallel axis
///
/// # Formula (Parallel Axis Theorem)
/// I = I₀ + A·d²
///
/// where `d` is the distance between the element's own centroid and the new
/// axis. The sign of `d` does not matter.
///
/// # Example
/// ```rust
/// use section_core::equations::section::parallel_axis_shift;
///
/// let i = parallel_axis_shift(100.0, 10.0, -3.0);
/// assert!((i - 190.0).abs() < 1e-9);
/// ```
#[inline]
pub fn parallel_axis_shift(i_own: f64, area: f64, d: f64) -> f64 {
    let d = Millimeters(d);
    (Mm4(i_own) + SqMm(area) * d * d).value()
}

/// First moment of area of an element about a horizontal axis
///
/// # Formula
/// Q = A·|y_c − y_axis|
///
/// Used when summing the plastic modulus about the plastic neutral axis,
/// where tension and compression regions contribute with the same sign.
#[inline]
pub fn first_moment_about(area: f64, centroid_y: f64, axis_y: f64) -> f64 {
    let lever = Millimeters((centroid_y - axis_y).abs());
    (SqMm(area) * lever).value()
}

/// Area-weighted centroid of a set of elements
///
/// # Formula
/// ȳ = Σ(Aᵢ·yᵢ) / ΣAᵢ
///
/// Returns `None` when the total area is not positive.
///
/// # Example
/// ```rust
/// use section_core::equations::section::area_weighted_centroid;
///
/// let y = area_weighted_centroid(&[(100.0, 5.0), (100.0, 15.0)]).unwrap();
/// assert!((y - 10.0).abs() < 1e-12);
/// assert!(area_weighted_centroid(&[]).is_none());
/// ```
pub fn area_weighted_centroid(elements: &[(f64, f64)]) -> Option<f64> {
    let total_area: f64 = elements.iter().map(|(a, _)| a).sum();
    if total_area <= 0.0 {
        return None;
    }
    let first_moment: f64 = elements.iter().map(|(a, y)| a * y).sum();
    Some(first_moment / total_area)
}

// =============================================================================
// SECTION MODULI AND RESISTANCE
// =============================================================================

/// Elastic section modulus about the elastic neutral axis
///
/// The governing (minimum) modulus uses the extreme fiber furthest from the
/// neutral axis.
///
/// # Formula
/// W_el = I / z_max
///
/// # Reference
/// - EN 1993-1-1 Eq. 6.14: M_el,Rd = W_el,min · f_y / γ_M0
#[inline]
pub fn elastic_section_modulus(i: f64, z_max: f64) -> f64 {
    (Mm4(i) / Millimeters(z_max)).value()
}

/// Design moment resistance in kN·m from a modulus in mm³ and f_y in N/mm²
///
/// # Formula
/// M_Rd = W · f_y / γ_M0   (N·mm, then ÷ 10⁶ for kN·m)
///
/// # Example
/// ```rust
/// use section_core::equations::section::moment_resistance_knm;
///
/// // W = 1,000,000 mm³ of S355 steel, γ_M0 = 1.0
/// let m = moment_resistance_knm(1_000_000.0, 355.0, 1.0);
/// assert!((m - 355.0).abs() < 1e-9);
/// ```
///
/// # Reference
/// - EN 1993-1-1 Eq. 6.13: M_pl,Rd = W_pl · f_y / γ_M0
pub fn moment_resistance_knm(modulus_mm3: f64, fy_mpa: f64, gamma_m0: f64) -> f64 {
    let moment: NMm = Mm3(modulus_mm3) * Mpa(fy_mpa) / gamma_m0;
    KnM::from(moment).value()
}

// =============================================================================
// UNIT TESTS
// =============================================================================
