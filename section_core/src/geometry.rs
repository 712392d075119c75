//! # Composite Section Geometry
//!
//! Builds the four rectangles of a plated universal column on a shared
//! vertical axis:
//!
//! ```text
//!            b
//!     ┌─────────────┐  ← y = H
//!     └─────┐ ┌─────┘    top flange
//!           │ │
//!           │ │          web (hw = h - 2·tf)
//!           │ │
//!     ┌─────┘ └─────┐
//!     └─────────────┘    bottom flange
//!   ┌─────────────────┐
//!   └─────────────────┘  ← y = 0, cover plate (bp x tp)
//! ```
//!
//! Ordinates are measured upward from the bottom fiber of the plate. The
//! overall depth is `H = h + tp`. Horizontally the flanges span `[0, b]`, the
//! plate and web are centred on the flanges.
//!
//! The geometry can be rendered as an SVG outline for checking by eye.

use serde::{Deserialize, Serialize};

use crate::equations::section::{rectangular_area, rectangular_moment_of_inertia};
use crate::errors::{CalcError, CalcResult};
use crate::materials::UcSection;

/// Cover plate welded to the bottom flange
///
/// A zero width or zero thickness means "no plate".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateDimensions {
    /// Plate width bp (mm)
    pub width_mm: f64,

    /// Plate thickness tp (mm)
    pub thickness_mm: f64,
}

impl PlateDimensions {
    /// Create plate dimensions
    pub fn new(width_mm: f64, thickness_mm: f64) -> Self {
        Self { width_mm, thickness_mm }
    }

    /// A zero-area plate
    pub fn none() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Plate area bp·tp (mm²)
    pub fn area_mm2(&self) -> f64 {
        rectangular_area(self.width_mm, self.thickness_mm)
    }

    /// Check the plate has no negative or non-finite dimension.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.width_mm.is_finite() || self.width_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "plate.width_mm",
                self.width_mm.to_string(),
                "Plate width must be zero (no plate) or positive",
            ));
        }
        if !self.thickness_mm.is_finite() || self.thickness_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "plate.thickness_mm",
                self.thickness_mm.to_string(),
                "Plate thickness must be zero (no plate) or positive",
            ));
        }
        Ok(())
    }
}

impl Default for PlateDimensions {
    fn default() -> Self {
        Self::new(250.0, 10.0)
    }
}

/// Which part of the composite section a rectangle represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartKind {
    Plate,
    BottomFlange,
    Web,
    TopFlange,
}

impl PartKind {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PartKind::Plate => "cover plate",
            PartKind::BottomFlange => "bottom flange",
            PartKind::Web => "web",
            PartKind::TopFlange => "top flange",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            PartKind::Plate => "plate",
            PartKind::BottomFlange | PartKind::TopFlange => "flange",
            PartKind::Web => "web",
        }
    }
}

impl std::fmt::Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Axis-aligned rectangle, lower-left corner plus size (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn x_max(&self) -> f64 {
        self.x_min + self.width
    }

    pub fn y_max(&self) -> f64 {
        self.y_min + self.height
    }
}

/// One rectangular part of the composite section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionPart {
    pub kind: PartKind,
    pub rect: Rect,
}

impl SectionPart {
    /// Width of the part (mm)
    pub fn width_mm(&self) -> f64 {
        self.rect.width
    }

    /// Thickness (vertical extent) of the part (mm)
    pub fn thickness_mm(&self) -> f64 {
        self.rect.height
    }

    /// Area (mm²)
    pub fn area_mm2(&self) -> f64 {
        rectangular_area(self.rect.width, self.rect.height)
    }

    /// Centroid ordinate (mm)
    pub fn centroid_y_mm(&self) -> f64 {
        self.rect.y_min + self.rect.height / 2.0
    }

    /// Second moment of area about the part's own centroid (mm⁴)
    pub fn own_inertia_mm4(&self) -> f64 {
        rectangular_moment_of_inertia(self.rect.width, self.rect.height)
    }
}

/// The four parts of a plated universal column
///
/// Parts are stored bottom-up: plate, bottom flange, web, top flange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeGeometry {
    pub parts: [SectionPart; 4],
}

impl CompositeGeometry {
    /// Stack the plate and the UC rectangles.
    ///
    /// A plate with zero area is normalised to 0 x 0 so it adds no depth.
    pub fn assemble(section: &UcSection, plate: &PlateDimensions) -> Self {
        let plate = if plate.area_mm2() > 0.0 { *plate } else { PlateDimensions::none() };
        let b = section.width_mm;
        let tf = section.flange_thickness_mm;
        let tw = section.web_thickness_mm;
        let hw = section.web_height_mm();
        let tp = plate.thickness_mm;

        // Horizontal offsets from width differences
        let plate_offset = (b - plate.width_mm) / 2.0;
        let web_offset = (b - tw) / 2.0;

        let part = |kind, x_min, y_min, width, height| SectionPart {
            kind,
            rect: Rect { x_min, y_min, width, height },
        };

        CompositeGeometry {
            parts: [
                part(PartKind::Plate, plate_offset, 0.0, plate.width_mm, tp),
                part(PartKind::BottomFlange, 0.0, tp, b, tf),
                part(PartKind::Web, web_offset, tp + tf, tw, hw),
                part(PartKind::TopFlange, 0.0, tp + tf + hw, b, tf),
            ],
        }
    }

    /// Get a part by kind
    pub fn part(&self, kind: PartKind) -> &SectionPart {
        match kind {
            PartKind::Plate => &self.parts[0],
            PartKind::BottomFlange => &self.parts[1],
            PartKind::Web => &self.parts[2],
            PartKind::TopFlange => &self.parts[3],
        }
    }

    /// Sum of the four part areas (mm²)
    pub fn total_area_mm2(&self) -> f64 {
        self.parts.iter().map(SectionPart::area_mm2).sum()
    }

    /// Ordinate of the bottom fiber
    pub fn bottom_y_mm(&self) -> f64 {
        self.parts
            .iter()
            .map(|p| p.rect.y_min)
            .fold(f64::INFINITY, f64::min)
    }

    /// Ordinate of the top fiber
    pub fn top_y_mm(&self) -> f64 {
        self.parts
            .iter()
            .map(|p| p.rect.y_max())
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Overall depth H = h + tp (mm)
    pub fn overall_depth_mm(&self) -> f64 {
        self.top_y_mm() - self.bottom_y_mm()
    }

    /// Copy of the geometry with every ordinate shifted by `dy`
    pub fn translated(&self, dy: f64) -> Self {
        let mut moved = self.clone();
        for part in moved.parts.iter_mut() {
            part.rect.y_min += dy;
        }
        moved
    }

    /// Render the outline as a standalone SVG document.
    ///
    /// `axes` are horizontal lines to overlay, given as (ordinate, label),
    /// e.g. the elastic and plastic neutral axes. Zero-area parts are omitted.
    pub fn to_svg(&self, axes: &[(f64, &str)]) -> String {
        const MARGIN: f64 = 20.0;
        const LABEL_SPACE: f64 = 60.0;

        let drawn: Vec<&SectionPart> = self.parts.iter().filter(|p| p.area_mm2() > 0.0).collect();
        let x_min = drawn.iter().map(|p| p.rect.x_min).fold(f64::INFINITY, f64::min);
        let x_max = drawn.iter().map(|p| p.rect.x_max()).fold(f64::NEG_INFINITY, f64::max);
        let top = self.top_y_mm();
        let depth = self.overall_depth_mm();

        let view_width = (x_max - x_min) + 2.0 * MARGIN + LABEL_SPACE;
        let view_height = depth + 2.0 * MARGIN;
        // SVG y grows downward
        let to_svg_x = |x: f64| x - x_min + MARGIN;
        let to_svg_y = |y: f64| top - y + MARGIN;

        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {:.2} {:.2}\" width=\"{:.0}\" height=\"{:.0}\">\n",
            view_width, view_height, view_width * 2.0, view_height * 2.0
        );
        svg.push_str(
            "  <style>.flange,.web{fill:#b0bec5;stroke:#263238;stroke-width:0.5}\
.plate{fill:#ffcc80;stroke:#263238;stroke-width:0.5}\
.axis{stroke:#c62828;stroke-width:0.4;stroke-dasharray:4 2}\
text{font-family:sans-serif;font-size:6px;fill:#c62828}</style>\n",
        );

        for part in drawn {
            svg.push_str(&format!(
                "  <rect class=\"{}\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"><title>{}</title></rect>\n",
                part.kind.css_class(),
                to_svg_x(part.rect.x_min),
                to_svg_y(part.rect.y_max()),
                part.rect.width,
                part.rect.height,
                part.kind
            ));
        }

        for (y, label) in axes {
            let sy = to_svg_y(*y);
            svg.push_str(&format!(
                "  <line class=\"axis\" x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>\n",
                MARGIN / 2.0,
                sy,
                to_svg_x(x_max) + MARGIN / 2.0,
                sy
            ));
            svg.push_str(&format!(
                "  <text x=\"{:.2}\" y=\"{:.2}\">{}</text>\n",
                to_svg_x(x_max) + MARGIN,
                sy + 2.0,
                label
            ));
        }

        svg.push_str("</svg>\n");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::builtin_uc_sections;
    use approx::assert_relative_eq;

    fn uc_203_86() -> UcSection {
        builtin_uc_sections().lookup("203 x 203 x 86").unwrap().clone()
    }

    #[test]
    fn test_parts_are_stacked_without_gaps() {
        let geom = CompositeGeometry::assemble(&uc_203_86(), &PlateDimensions::new(250.0, 10.0));

        for pair in geom.parts.windows(2) {
            assert_relative_eq!(pair[0].rect.y_max(), pair[1].rect.y_min, epsilon = 1e-9);
        }
        assert_relative_eq!(geom.bottom_y_mm(), 0.0);
        assert_relative_eq!(geom.overall_depth_mm(), 232.2, epsilon = 1e-9);
    }

    #[test]
    fn test_horizontal_centering() {
        let geom = CompositeGeometry::assemble(&uc_203_86(), &PlateDimensions::new(250.0, 10.0));
        let centre = 209.1 / 2.0;
        for part in geom.parts.iter() {
            let mid = (part.rect.x_min + part.rect.x_max()) / 2.0;
            assert_relative_eq!(mid, centre, epsilon = 1e-9);
        }
        // Plate overhangs the flange by (250 - 209.1) / 2 each side
        assert_relative_eq!(geom.part(PartKind::Plate).rect.x_min, -20.45, epsilon = 1e-9);
    }

    #[test]
    fn test_part_areas_sum_to_total() {
        let uc = uc_203_86();
        let plate = PlateDimensions::new(250.0, 10.0);
        let geom = CompositeGeometry::assemble(&uc, &plate);

        let sum: f64 = geom.parts.iter().map(|p| p.area_mm2()).sum();
        assert_eq!(sum, geom.total_area_mm2());
        assert_relative_eq!(geom.total_area_mm2(), uc.area_mm2() + plate.area_mm2(), epsilon = 1e-9);
        assert_relative_eq!(geom.total_area_mm2(), 13374.34, epsilon = 1e-6);
    }

    #[test]
    fn test_no_plate_keeps_four_parts() {
        let geom = CompositeGeometry::assemble(&uc_203_86(), &PlateDimensions::none());
        assert_eq!(geom.parts.len(), 4);
        assert_eq!(geom.part(PartKind::Plate).area_mm2(), 0.0);
        assert_relative_eq!(geom.overall_depth_mm(), 222.2, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_area_plate_adds_no_depth() {
        let geom = CompositeGeometry::assemble(&uc_203_86(), &PlateDimensions::new(0.0, 15.0));
        assert_eq!(geom, CompositeGeometry::assemble(&uc_203_86(), &PlateDimensions::none()));
        assert_relative_eq!(geom.overall_depth_mm(), 222.2, epsilon = 1e-9);
    }

    #[test]
    fn test_translated_moves_every_part() {
        let geom = CompositeGeometry::assemble(&uc_203_86(), &PlateDimensions::default());
        let moved = geom.translated(-500.0);
        assert_relative_eq!(moved.bottom_y_mm(), -500.0);
        assert_relative_eq!(moved.overall_depth_mm(), geom.overall_depth_mm(), epsilon = 1e-9);
    }

    #[test]
    fn test_plate_validation() {
        assert!(PlateDimensions::new(250.0, 10.0).validate().is_ok());
        assert!(PlateDimensions::none().validate().is_ok());
        assert!(PlateDimensions::new(-1.0, 10.0).validate().is_err());
        assert!(PlateDimensions::new(250.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_svg_outline() {
        let geom = CompositeGeometry::assemble(&uc_203_86(), &PlateDimensions::default());
        let svg = geom.to_svg(&[(99.4, "ENA"), (30.0, "PNA")]);

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<rect ").count(), 4);
        assert_eq!(svg.matches("<line ").count(), 2);
        assert!(svg.contains(">ENA</text>"));

        let bare = CompositeGeometry::assemble(&uc_203_86(), &PlateDimensions::none());
        assert_eq!(bare.to_svg(&[]).matches("<rect ").count(), 3);
    }
}
