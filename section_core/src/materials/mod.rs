//! # Materials Database
//!
//! Section dimension tables and structural steel grades.
//!
//! ## Contents
//!
//! - [`uc_sections`]: Universal column dimensions (built-in and CSV-loaded)
//! - [`SteelGrade`]: Hot-rolled structural steel grades per EN 10025-2
//!
//! ## Example
//!
//! ```rust
//! use section_core::materials::SteelGrade;
//!
//! let grade: SteelGrade = "S355".parse().unwrap();
//! assert_eq!(grade.nominal_fy_mpa(), 355.0);
//! ```

pub mod uc_sections;

pub use uc_sections::{builtin_uc_sections, UcSection, UcSectionTable};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CalcError;

/// Structural steel grade
///
/// Serializes as the grade name (e.g., `"S355"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    S235,
    S275,
    S355,
    S460,
}

impl SteelGrade {
    /// All grades for iteration
    pub const ALL: [SteelGrade; 4] = [SteelGrade::S235, SteelGrade::S275, SteelGrade::S355, SteelGrade::S460];

    /// Nominal yield strength f_y in N/mm² (elements up to 16 mm thick)
    pub fn nominal_fy_mpa(&self) -> f64 {
        match self {
            SteelGrade::S235 => 235.0,
            SteelGrade::S275 => 275.0,
            SteelGrade::S355 => 355.0,
            SteelGrade::S460 => 460.0,
        }
    }

    /// Grade name as written on drawings
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::S235 => "S235",
            SteelGrade::S275 => "S275",
            SteelGrade::S355 => "S355",
            SteelGrade::S460 => "S460",
        }
    }
}

impl Default for SteelGrade {
    fn default() -> Self {
        SteelGrade::S355
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SteelGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        SteelGrade::ALL
            .into_iter()
            .find(|g| g.display_name() == wanted)
            .ok_or_else(|| CalcError::invalid_input("grade", s, "Expected one of S235, S275, S355, S460"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_parsing() {
        assert_eq!("S275".parse::<SteelGrade>().unwrap(), SteelGrade::S275);
        assert_eq!(" s460 ".parse::<SteelGrade>().unwrap(), SteelGrade::S460);
        assert!("S999".parse::<SteelGrade>().is_err());
    }

    #[test]
    fn test_grade_strengths() {
        assert_eq!(SteelGrade::default().nominal_fy_mpa(), 355.0);
        assert_eq!(SteelGrade::S235.nominal_fy_mpa(), 235.0);
    }

    #[test]
    fn test_grade_serialization() {
        let json = serde_json::to_string(&SteelGrade::S355).unwrap();
        assert_eq!(json, "\"S355\"");
        let parsed: SteelGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SteelGrade::S355);
    }
}
