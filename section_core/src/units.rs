//! # Unit Types
//!
//! Type-safe wrappers for the metric units used in steel section design.
//! They are plain f64 newtypes, serialized transparently so JSON stays clean.
//!
//! ## SI Units (mm / N)
//!
//! Section tables and design codes quote geometry in millimetres and stresses
//! in N/mm², so those are the internal units:
//! - Length: millimetres (mm)
//! - Area: mm²
//! - Section modulus: mm³
//! - Second moment of area: mm⁴
//! - Stress: N/mm² (MPa)
//! - Moment: N·mm internally, kN·m for reporting
//!
//! ## Example
//!
//! ```rust
//! use section_core::units::{KnM, Mm3, Mpa, NMm};
//!
//! let moment = Mm3(1_000_000.0) * Mpa(355.0);
//! let reported: KnM = moment.into();
//! assert_eq!(reported.0, 355.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Geometric Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Area in mm²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Section modulus in mm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm3(pub f64);

/// Second moment of area in mm⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm4(pub f64);

impl Mul for Millimeters {
    type Output = SqMm;
    fn mul(self, rhs: Millimeters) -> SqMm {
        SqMm(self.0 * rhs.0)
    }
}

impl Mul<Millimeters> for SqMm {
    type Output = Mm3;
    fn mul(self, rhs: Millimeters) -> Mm3 {
        Mm3(self.0 * rhs.0)
    }
}

impl Mul<Millimeters> for Mm3 {
    type Output = Mm4;
    fn mul(self, rhs: Millimeters) -> Mm4 {
        Mm4(self.0 * rhs.0)
    }
}

impl Div<Millimeters> for Mm4 {
    type Output = Mm3;
    fn div(self, rhs: Millimeters) -> Mm3 {
        Mm3(self.0 / rhs.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in N/mm² (MPa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NMm(pub f64);

/// Moment in kilonewton-metres (1 kN·m = 1e6 N·mm)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

impl Mul<Mpa> for Mm3 {
    type Output = NMm;
    fn mul(self, rhs: Mpa) -> NMm {
        NMm(self.0 * rhs.0)
    }
}

impl From<NMm> for KnM {
    fn from(nmm: NMm) -> Self {
        KnM(nmm.0 / 1_000_000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(SqMm);
impl_arithmetic!(Mm3);
impl_arithmetic!(Mm4);
impl_arithmetic!(Mpa);
impl_arithmetic!(NMm);
impl_arithmetic!(KnM);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nmm_to_knm() {
        let m: KnM = NMm(403_561_247.0).into();
        assert!((m.0 - 403.561247).abs() < 1e-9);
    }

    #[test]
    fn test_dimensional_products() {
        let area = Millimeters(250.0) * Millimeters(10.0);
        assert_eq!(area, SqMm(2500.0));

        let first_moment = area * Millimeters(5.0);
        assert_eq!(first_moment, Mm3(12_500.0));

        let inertia = first_moment * Millimeters(4.0);
        assert_eq!(inertia, Mm4(50_000.0));

        let modulus = Mm4(1_000_000.0) / Millimeters(100.0);
        assert_eq!(modulus, Mm3(10_000.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimeters(10.0);
        let b = Millimeters(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let fy = Mpa(355.0);
        let json = serde_json::to_string(&fy).unwrap();
        assert_eq!(json, "355.0");

        let roundtrip: Mpa = serde_json::from_str(&json).unwrap();
        assert_eq!(fy, roundtrip);
    }
}
