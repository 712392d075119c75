//! # Elastic Section Properties
//!
//! Centroid (elastic neutral axis), second moment of area and elastic section
//! modulus of a composite section, from first principles:
//!
//! 1. `ȳ = Σ(A·y) / ΣA` over the four parts
//! 2. `Ixx = Σ(I₀ + A·d²)` with `d` the distance from each part centroid to `ȳ`
//! 3. `Wel,y = Ixx / max(ybot, ytop)`
//!
//! `Ixx` depends only on distances to the centroid, so it does not change if
//! every ordinate is shifted by a constant.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::section::{area_weighted_centroid, elastic_section_modulus, parallel_axis_shift};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{CompositeGeometry, PartKind};

/// Contribution of one part to the elastic properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartContribution {
    pub kind: PartKind,

    /// Part area (mm²)
    pub area_mm2: f64,

    /// Part centroid ordinate, same datum as the geometry (mm)
    pub centroid_y_mm: f64,

    /// Second moment of area about the part's own centroid (mm⁴)
    pub own_inertia_mm4: f64,

    /// Second moment of area shifted to the elastic neutral axis (mm⁴)
    pub shifted_inertia_mm4: f64,
}

/// Elastic properties about the horizontal centroidal axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElasticProperties {
    /// Total area (mm²)
    pub area_mm2: f64,

    /// Elastic neutral axis ordinate in the geometry's datum (mm)
    pub centroid_y_mm: f64,

    /// Distance from bottom fiber to the elastic neutral axis (mm)
    pub ybot_mm: f64,

    /// Distance from top fiber to the elastic neutral axis (mm)
    pub ytop_mm: f64,

    /// Extreme fiber distance max(ybot, ytop) (mm)
    pub ymax_mm: f64,

    /// Second moment of area about the elastic neutral axis (mm⁴)
    pub ixx_mm4: f64,

    /// Elastic section modulus Ixx / ymax (mm³)
    pub wel_mm3: f64,

    /// Per-part breakdown, in geometry order
    pub contributions: Vec<PartContribution>,
}

/// Compute the elastic properties of a composite section.
///
/// # Errors
///
/// * `CalcError::UnsolvableGeometry` if the section has no area
pub fn elastic_properties(geometry: &CompositeGeometry) -> CalcResult<ElasticProperties> {
    let elements: Vec<(f64, f64)> = geometry
        .parts
        .iter()
        .map(|p| (p.area_mm2(), p.centroid_y_mm()))
        .collect();

    let centroid_y = area_weighted_centroid(&elements)
        .ok_or_else(|| CalcError::unsolvable("Section has no area; the elastic neutral axis is undefined"))?;

    let ybot = centroid_y - geometry.bottom_y_mm();
    let ytop = geometry.top_y_mm() - centroid_y;
    let ymax = ybot.max(ytop);

    let contributions: Vec<PartContribution> = geometry
        .parts
        .iter()
        .map(|p| {
            let own = p.own_inertia_mm4();
            PartContribution {
                kind: p.kind,
                area_mm2: p.area_mm2(),
                centroid_y_mm: p.centroid_y_mm(),
                own_inertia_mm4: own,
                shifted_inertia_mm4: parallel_axis_shift(own, p.area_mm2(), p.centroid_y_mm() - centroid_y),
            }
        })
        .collect();

    let ixx: f64 = contributions.iter().map(|c| c.shifted_inertia_mm4).sum();
    let wel = elastic_section_modulus(ixx, ymax);

    debug!(ybot, ytop, ixx, wel, "elastic properties");

    Ok(ElasticProperties {
        area_mm2: geometry.total_area_mm2(),
        centroid_y_mm: centroid_y,
        ybot_mm: ybot,
        ytop_mm: ytop,
        ymax_mm: ymax,
        ixx_mm4: ixx,
        wel_mm3: wel,
        contributions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PlateDimensions;
    use crate::materials::{builtin_uc_sections, UcSection};
    use approx::assert_relative_eq;

    fn uc(designation: &str) -> UcSection {
        builtin_uc_sections().lookup(designation).unwrap().clone()
    }

    #[test]
    fn test_golden_203_86_with_250x10_plate() {
        let geom = CompositeGeometry::assemble(&uc("203 x 203 x 86"), &PlateDimensions::new(250.0, 10.0));
        let el = elastic_properties(&geom).unwrap();

        assert_relative_eq!(el.area_mm2, 13374.34, epsilon = 1e-6);
        assert_relative_eq!(el.ybot_mm, 99.397995, epsilon = 1e-5);
        assert_relative_eq!(el.ytop_mm, 132.802005, epsilon = 1e-5);
        assert_relative_eq!(el.ymax_mm, el.ytop_mm);
        assert_relative_eq!(el.ixx_mm4, 121_211_178.20, epsilon = 0.01);
        assert_relative_eq!(el.wel_mm3, 912_720.99, epsilon = 0.01);
    }

    #[test]
    fn test_symmetric_without_plate() {
        let section = uc("203 x 203 x 86");
        let geom = CompositeGeometry::assemble(&section, &PlateDimensions::none());
        let el = elastic_properties(&geom).unwrap();

        assert_relative_eq!(el.ybot_mm, section.depth_mm / 2.0, epsilon = 1e-9);
        assert_relative_eq!(el.ytop_mm, section.depth_mm / 2.0, epsilon = 1e-9);

        // Closed form for a doubly symmetric I: (b·h³ - (b - tw)·hw³) / 12
        let b = section.width_mm;
        let h = section.depth_mm;
        let tw = section.web_thickness_mm;
        let hw = section.web_height_mm();
        let expected = (b * h.powi(3) - (b - tw) * hw.powi(3)) / 12.0;
        assert_relative_eq!(el.ixx_mm4, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_width_plate_matches_no_plate() {
        let section = uc("254 x 254 x 73");
        let thin = elastic_properties(&CompositeGeometry::assemble(&section, &PlateDimensions::new(0.0, 15.0))).unwrap();
        let none = elastic_properties(&CompositeGeometry::assemble(&section, &PlateDimensions::none())).unwrap();

        // A plate with no width is no plate at all
        assert_eq!(thin, none);
        assert_relative_eq!(thin.ybot_mm, section.depth_mm / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ixx_invariant_to_datum() {
        let geom = CompositeGeometry::assemble(&uc("305 x 305 x 137"), &PlateDimensions::new(300.0, 20.0));
        let base = elastic_properties(&geom).unwrap();

        for dy in [-1000.0, -12.5, 37.0, 5000.0] {
            let moved = elastic_properties(&geom.translated(dy)).unwrap();
            assert_relative_eq!(moved.centroid_y_mm, base.centroid_y_mm + dy, epsilon = 1e-8);
            assert_relative_eq!(moved.ybot_mm, base.ybot_mm, epsilon = 1e-8);
            assert_relative_eq!(moved.ytop_mm, base.ytop_mm, epsilon = 1e-8);
            assert_relative_eq!(moved.ixx_mm4, base.ixx_mm4, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_contributions_sum_to_totals() {
        let geom = CompositeGeometry::assemble(&uc("152 x 152 x 37"), &PlateDimensions::new(120.0, 12.0));
        let el = elastic_properties(&geom).unwrap();

        assert_eq!(el.contributions.len(), 4);
        assert_eq!(el.contributions[0].kind, PartKind::Plate);
        let area: f64 = el.contributions.iter().map(|c| c.area_mm2).sum();
        assert_eq!(area, el.area_mm2);
        for c in &el.contributions {
            assert!(c.shifted_inertia_mm4 >= c.own_inertia_mm4);
        }
    }

    #[test]
    fn test_plate_moves_neutral_axis_down() {
        let section = uc("203 x 203 x 60");
        let bare = elastic_properties(&CompositeGeometry::assemble(&section, &PlateDimensions::none())).unwrap();
        let plated = elastic_properties(&CompositeGeometry::assemble(&section, &PlateDimensions::new(200.0, 15.0))).unwrap();

        assert!(plated.ybot_mm < plated.ytop_mm);
        assert!(plated.ixx_mm4 > bare.ixx_mm4);
        assert_relative_eq!(plated.ybot_mm + plated.ytop_mm, section.depth_mm + 15.0, epsilon = 1e-9);
    }
}
