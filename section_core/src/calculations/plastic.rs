//! # Plastic Section Properties
//!
//! Plastic neutral axis (PNA), plastic section modulus and plastic moment
//! resistance of a composite section.
//!
//! ## Plastic neutral axis
//!
//! At full plasticity the tension and compression areas are equal, so the PNA
//! is the line that halves the area. Every part is a rectangle, so the area
//! above a depth `d` from the top fiber is piecewise linear in `d` and the
//! root is found directly, without iteration:
//!
//! - **Web** (usual case): the governing equation
//!   `Aft + tw·(PNAtop - tft) = (Afb + Ap) + tw·(H - PNAtop - tfb - tp)`
//!   rearranges to
//!   `PNAtop = (Afb + Ap - Aft) / (2·tw) + (H - tp - tfb + tft) / 2`.
//! - **Bottom flange / plate / top flange**: a heavy plate can pull the axis
//!   out of the web. The parts are walked from the top and the linear
//!   equation is solved inside the part that holds half the area.
//!
//! ## Plastic modulus
//!
//! `Wpl,y = Σ A·|z|` over all parts, where the part containing the PNA is
//! split into the sub-rectangles above and below it and `z` is the distance
//! from each sub-area centroid to the PNA.
//!
//! ## Reference
//!
//! - EN 1993-1-1 Eq. 6.13: `Mpl,Rd = Wpl · fy / γM0`

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::section::{first_moment_about, moment_resistance_knm, rectangular_area};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{CompositeGeometry, PartKind, SectionPart};

/// Relative slack when deciding which part holds half the area
const AREA_TOLERANCE: f64 = 1e-12;

/// Part of the section that holds the plastic neutral axis
pub type PnaLocation = PartKind;

/// Plastic properties about the plastic neutral axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlasticProperties {
    /// Depth of the PNA below the top fiber (mm)
    pub pna_top_mm: f64,

    /// Height of the PNA above the bottom fiber: H - PNAtop (mm)
    pub pna_bot_mm: f64,

    /// PNA ordinate in the geometry's datum (mm)
    pub pna_y_mm: f64,

    /// Part that contains the PNA
    pub pna_part: PnaLocation,

    /// Area above the PNA (compression for sagging) (mm²)
    pub area_above_mm2: f64,

    /// Area below the PNA (tension for sagging) (mm²)
    pub area_below_mm2: f64,

    /// Plastic section modulus (mm³)
    pub wpl_mm3: f64,

    /// Plastic moment resistance Wpl·fy/γM0 (kN·m)
    pub mpl_rd_knm: f64,
}

/// Closed-form PNA depth for an axis lying in the web.
///
/// Only meaningful when the result falls between the flanges; the caller
/// decides which branch applies.
pub fn web_branch_pna_top(geometry: &CompositeGeometry) -> f64 {
    let plate = geometry.part(PartKind::Plate);
    let bottom_flange = geometry.part(PartKind::BottomFlange);
    let web = geometry.part(PartKind::Web);
    let top_flange = geometry.part(PartKind::TopFlange);

    let h_total = geometry.overall_depth_mm();
    let tw = web.width_mm();
    let tp = plate.thickness_mm();
    let tfb = bottom_flange.thickness_mm();
    let tft = top_flange.thickness_mm();

    (bottom_flange.area_mm2() + plate.area_mm2() - top_flange.area_mm2()) / (2.0 * tw)
        + (h_total - tp - tfb + tft) / 2.0
}

/// Locate the plastic neutral axis.
///
/// Returns the depth below the top fiber and the part that contains it.
///
/// # Errors
///
/// * `CalcError::UnsolvableGeometry` if the section has no area or no part
///   can hold the axis
pub fn plastic_neutral_axis(geometry: &CompositeGeometry) -> CalcResult<(f64, PnaLocation)> {
    let total = geometry.total_area_mm2();
    if !(total.is_finite() && total > 0.0) {
        return Err(CalcError::unsolvable(format!(
            "Section area is {}; the plastic neutral axis is undefined",
            total
        )));
    }
    let half = total / 2.0;
    let top = geometry.top_y_mm();

    let mut top_down: Vec<&SectionPart> = geometry.parts.iter().collect();
    top_down.sort_by(|a, b| b.rect.y_max().total_cmp(&a.rect.y_max()));

    let mut above = 0.0;
    for part in top_down {
        let area = part.area_mm2();
        if area <= 0.0 {
            continue;
        }

        if above + area >= half * (1.0 - AREA_TOLERANCE) {
            let pna_top = match part.kind {
                PartKind::Web => web_branch_pna_top(geometry),
                _ => {
                    let into_part = ((half - above) / part.width_mm()).clamp(0.0, part.thickness_mm());
                    (top - part.rect.y_max()) + into_part
                }
            };

            if !pna_top.is_finite() {
                return Err(CalcError::unsolvable(format!(
                    "Plastic neutral axis in the {} is not finite",
                    part.kind
                )));
            }
            debug!(pna_top, part = %part.kind, "plastic neutral axis located");
            return Ok((pna_top, part.kind));
        }
        above += area;
    }

    Err(CalcError::unsolvable(
        "No part of the section holds half of the total area",
    ))
}

/// Compute the plastic properties of a composite section.
///
/// # Arguments
///
/// * `geometry` - Assembled composite section
/// * `fy_mpa` - Yield strength (N/mm²)
/// * `gamma_m0` - Partial factor γM0 (1.0 reproduces Wpl·fy)
pub fn plastic_properties(geometry: &CompositeGeometry, fy_mpa: f64, gamma_m0: f64) -> CalcResult<PlasticProperties> {
    let (pna_top, pna_part) = plastic_neutral_axis(geometry)?;
    let pna_y = geometry.top_y_mm() - pna_top;
    let pna_bot = geometry.overall_depth_mm() - pna_top;

    let mut area_above = 0.0;
    let mut area_below = 0.0;
    let mut wpl = 0.0;

    for part in geometry.parts.iter() {
        let y0 = part.rect.y_min;
        let y1 = part.rect.y_max();
        let width = part.width_mm();

        // Sub-rectangle below the axis
        let below_top = y1.min(pna_y);
        if below_top > y0 {
            let a = rectangular_area(width, below_top - y0);
            area_below += a;
            wpl += first_moment_about(a, (y0 + below_top) / 2.0, pna_y);
        }

        // Sub-rectangle above the axis
        let above_bottom = y0.max(pna_y);
        if y1 > above_bottom {
            let a = rectangular_area(width, y1 - above_bottom);
            area_above += a;
            wpl += first_moment_about(a, (above_bottom + y1) / 2.0, pna_y);
        }
    }

    let mpl_rd = moment_resistance_knm(wpl, fy_mpa, gamma_m0);

    debug!(pna_top, pna_bot, wpl, mpl_rd, "plastic properties");

    Ok(PlasticProperties {
        pna_top_mm: pna_top,
        pna_bot_mm: pna_bot,
        pna_y_mm: pna_y,
        pna_part,
        area_above_mm2: area_above,
        area_below_mm2: area_below,
        wpl_mm3: wpl,
        mpl_rd_knm: mpl_rd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::elastic::elastic_properties;
    use crate::geometry::{PlateDimensions, Rect};
    use crate::materials::{builtin_uc_sections, UcSection};
    use approx::assert_relative_eq;

    fn uc(designation: &str) -> UcSection {
        builtin_uc_sections().lookup(designation).unwrap().clone()
    }

    fn plated(designation: &str, bp: f64, tp: f64) -> CompositeGeometry {
        CompositeGeometry::assemble(&uc(designation), &PlateDimensions::new(bp, tp))
    }

    #[test]
    fn test_golden_203_86_axis_in_bottom_flange() {
        let pl = plastic_properties(&plated("203 x 203 x 86", 250.0, 10.0), 355.0, 1.0).unwrap();

        assert_eq!(pl.pna_part, PartKind::BottomFlange);
        assert_relative_eq!(pl.pna_top_mm, 202.175275, epsilon = 1e-5);
        assert_relative_eq!(pl.pna_bot_mm, 30.024725, epsilon = 1e-5);
        assert_relative_eq!(pl.wpl_mm3, 1_136_792.25, epsilon = 0.01);
        assert_relative_eq!(pl.mpl_rd_knm, 403.561247, epsilon = 1e-5);
    }

    #[test]
    fn test_web_branch_matches_closed_form() {
        // 150 x 10 plate keeps the axis in the web: PNAtop = Ap/(2·tw) + h/2
        let section = uc("203 x 203 x 86");
        let geom = plated("203 x 203 x 86", 150.0, 10.0);
        let (pna_top, part) = plastic_neutral_axis(&geom).unwrap();

        assert_eq!(part, PartKind::Web);
        let expected = 1500.0 / (2.0 * section.web_thickness_mm) + section.depth_mm / 2.0;
        assert_relative_eq!(pna_top, expected, epsilon = 1e-9);
        assert_relative_eq!(pna_top, 170.155118, epsilon = 1e-5);
    }

    #[test]
    fn test_web_branch_agrees_with_area_walk() {
        // Solving the linear equation inside the web by hand gives the same root
        let geom = plated("254 x 254 x 89", 180.0, 8.0);
        let (pna_top, part) = plastic_neutral_axis(&geom).unwrap();
        assert_eq!(part, PartKind::Web);

        let top_flange = geom.part(PartKind::TopFlange);
        let web = geom.part(PartKind::Web);
        let half = geom.total_area_mm2() / 2.0;
        let walked = top_flange.thickness_mm() + (half - top_flange.area_mm2()) / web.width_mm();
        assert_relative_eq!(pna_top, walked, epsilon = 1e-9);
    }

    #[test]
    fn test_no_plate_pna_coincides_with_ena() {
        let section = uc("203 x 203 x 86");
        let geom = CompositeGeometry::assemble(&section, &PlateDimensions::none());
        let el = elastic_properties(&geom).unwrap();
        let pl = plastic_properties(&geom, 355.0, 1.0).unwrap();

        assert_eq!(pl.pna_part, PartKind::Web);
        assert_relative_eq!(pl.pna_bot_mm, el.ybot_mm, epsilon = 1e-9);
        assert_relative_eq!(pl.pna_top_mm, el.ytop_mm, epsilon = 1e-9);

        // Wpl = b·tf·(h - tf) + tw·hw²/4
        let b = section.width_mm;
        let tf = section.flange_thickness_mm;
        let expected = b * tf * (section.depth_mm - tf)
            + section.web_thickness_mm * section.web_height_mm().powi(2) / 4.0;
        assert_relative_eq!(pl.wpl_mm3, expected, max_relative = 1e-12);
        assert_relative_eq!(pl.wpl_mm3, 968_843.307, epsilon = 1e-3);
    }

    #[test]
    fn test_heavy_plate_puts_axis_in_plate() {
        // 300 x 25 plate (7500 mm²) outweighs the whole 203 x 203 x 46 (5783.84 mm²)
        let geom = plated("203 x 203 x 46", 300.0, 25.0);
        let pl = plastic_properties(&geom, 275.0, 1.0).unwrap();

        assert_eq!(pl.pna_part, PartKind::Plate);
        assert_relative_eq!(pl.pna_top_mm, 206.060267, epsilon = 1e-5);
        assert!(pl.pna_bot_mm < 25.0);
    }

    #[test]
    fn test_equal_areas_about_pna() {
        let cases = [
            ("203 x 203 x 86", 250.0, 10.0),
            ("203 x 203 x 86", 150.0, 10.0),
            ("203 x 203 x 46", 300.0, 25.0),
            ("356 x 406 x 634", 500.0, 50.0),
            ("152 x 152 x 23", 100.0, 6.0),
            ("305 x 305 x 97", 0.0, 0.0),
        ];
        for (designation, bp, tp) in cases {
            let geom = plated(designation, bp, tp);
            let pl = plastic_properties(&geom, 355.0, 1.0).unwrap();
            let total = geom.total_area_mm2();
            assert_relative_eq!(pl.area_above_mm2, pl.area_below_mm2, max_relative = 1e-9);
            assert_relative_eq!(pl.area_above_mm2 + pl.area_below_mm2, total, max_relative = 1e-12);
            assert_relative_eq!(pl.pna_top_mm + pl.pna_bot_mm, geom.overall_depth_mm(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_plastic_modulus_exceeds_elastic() {
        let geom = plated("254 x 254 x 107", 260.0, 15.0);
        let el = elastic_properties(&geom).unwrap();
        let pl = plastic_properties(&geom, 355.0, 1.0).unwrap();
        let shape_factor = pl.wpl_mm3 / el.wel_mm3;
        assert!(shape_factor > 1.0 && shape_factor < 1.5, "shape factor {}", shape_factor);
    }

    #[test]
    fn test_partial_factor_reduces_resistance() {
        let geom = plated("203 x 203 x 86", 250.0, 10.0);
        let base = plastic_properties(&geom, 355.0, 1.0).unwrap();
        let factored = plastic_properties(&geom, 355.0, 1.05).unwrap();
        assert_relative_eq!(factored.wpl_mm3, base.wpl_mm3);
        assert_relative_eq!(factored.mpl_rd_knm * 1.05, base.mpl_rd_knm, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_section_is_unsolvable() {
        let empty = SectionPart {
            kind: PartKind::Web,
            rect: Rect { x_min: 0.0, y_min: 0.0, width: 0.0, height: 0.0 },
        };
        let geom = CompositeGeometry {
            parts: [
                SectionPart { kind: PartKind::Plate, ..empty },
                SectionPart { kind: PartKind::BottomFlange, ..empty },
                empty,
                SectionPart { kind: PartKind::TopFlange, ..empty },
            ],
        };
        let err = plastic_neutral_axis(&geom).unwrap_err();
        assert_eq!(err.error_code(), "UNSOLVABLE_GEOMETRY");
    }

    #[test]
    fn test_non_finite_geometry_is_unsolvable() {
        let mut geom = plated("203 x 203 x 86", 250.0, 10.0);
        geom.parts[2].rect.width = f64::NAN;
        assert!(matches!(
            plastic_neutral_axis(&geom),
            Err(CalcError::UnsolvableGeometry { .. })
        ));
    }
}
