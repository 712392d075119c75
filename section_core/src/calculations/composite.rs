//! # Composite Section Calculation
//!
//! Section properties of a universal column with a cover plate welded to its
//! bottom flange, bending about the major axis.
//!
//! ## Assumptions
//!
//! - Idealised rectangles (root fillets and weld fillets ignored)
//! - Single steel grade for UC and plate
//! - Full interaction between plate and flange
//! - Sagging moment (plate in tension)
//!
//! ## Example
//!
//! ```rust
//! use section_core::calculations::composite::{calculate_builtin, CompositeInput};
//!
//! let input = CompositeInput {
//!     designation: "203 x 203 x 86".to_string(),
//!     ..CompositeInput::default()
//! };
//! let result = calculate_builtin(&input).unwrap();
//! assert!((result.properties.mpl_rd_knm - 403.56).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::elastic::{elastic_properties, PartContribution};
use super::plastic::{plastic_properties, PnaLocation};
use crate::equations::section::moment_resistance_knm;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{CompositeGeometry, PlateDimensions};
use crate::materials::{builtin_uc_sections, UcSection, UcSectionTable};

/// Input parameters for a plated UC.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Transfer column TC-2",
///   "designation": "203 x 203 x 86",
///   "plate": { "width_mm": 250.0, "thickness_mm": 10.0 },
///   "fy_mpa": 355.0,
///   "gamma_m0": 1.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeInput {
    /// User label for this member
    pub label: String,

    /// UC serial size, matched exactly against the section table
    pub designation: String,

    /// Cover plate dimensions (0 x 0 for the bare UC)
    pub plate: PlateDimensions,

    /// Yield strength fy (N/mm²)
    pub fy_mpa: f64,

    /// Partial factor γM0
    pub gamma_m0: f64,
}

impl Default for CompositeInput {
    fn default() -> Self {
        Self {
            label: String::new(),
            designation: String::new(),
            plate: PlateDimensions::default(),
            fy_mpa: 355.0,
            gamma_m0: 1.0,
        }
    }
}

impl CompositeInput {
    /// Validate input parameters.
    ///
    /// Section dimensions are checked separately once the designation has
    /// been resolved.
    pub fn validate(&self) -> CalcResult<()> {
        if self.designation.trim().is_empty() {
            return Err(CalcError::invalid_input(
                "designation",
                self.designation.clone(),
                "Section designation is required",
            ));
        }
        if !self.fy_mpa.is_finite() || self.fy_mpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "fy_mpa",
                self.fy_mpa.to_string(),
                "Yield strength must be positive",
            ));
        }
        if !self.gamma_m0.is_finite() || self.gamma_m0 <= 0.0 {
            return Err(CalcError::invalid_input(
                "gamma_m0",
                self.gamma_m0.to_string(),
                "Partial factor must be positive",
            ));
        }
        self.plate.validate()
    }
}

/// Derived properties of the composite section.
///
/// Distances are in mm measured from the bottom fiber (`ybot`, `pna_bot`) or
/// the top fiber (`ytop`, `pna_top`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Total area (mm²)
    pub area_mm2: f64,

    /// Overall depth H = h + tp (mm)
    pub overall_depth_mm: f64,

    /// Bottom fiber to elastic neutral axis (mm)
    pub ybot_mm: f64,

    /// Top fiber to elastic neutral axis (mm)
    pub ytop_mm: f64,

    /// max(ybot, ytop) (mm)
    pub ymax_mm: f64,

    /// Second moment of area about the elastic neutral axis (mm⁴)
    pub ixx_mm4: f64,

    /// Elastic section modulus (mm³)
    pub wel_mm3: f64,

    /// Top fiber to plastic neutral axis (mm)
    pub pna_top_mm: f64,

    /// Bottom fiber to plastic neutral axis (mm)
    pub pna_bot_mm: f64,

    /// Part holding the plastic neutral axis
    pub pna_location: PnaLocation,

    /// Area above the plastic neutral axis (mm²)
    pub area_above_pna_mm2: f64,

    /// Area below the plastic neutral axis (mm²)
    pub area_below_pna_mm2: f64,

    /// Plastic section modulus (mm³)
    pub wpl_mm3: f64,

    /// Plastic moment resistance (kN·m)
    pub mpl_rd_knm: f64,

    /// Elastic moment resistance Wel·fy/γM0 (kN·m)
    pub mel_rd_knm: f64,
}

/// Results of a composite section calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeResult {
    /// The input that produced this result
    pub input: CompositeInput,

    /// Resolved UC dimensions
    pub section: UcSection,

    /// The four rectangles, bottom-up
    pub geometry: CompositeGeometry,

    pub properties: SectionProperties,

    /// Per-part elastic breakdown
    pub contributions: Vec<PartContribution>,
}

impl CompositeResult {
    /// Section outline with the elastic and plastic neutral axes drawn in
    pub fn to_svg(&self) -> String {
        let bottom = self.geometry.bottom_y_mm();
        let ena = bottom + self.properties.ybot_mm;
        let pna = bottom + self.properties.pna_bot_mm;
        self.geometry.to_svg(&[(ena, "ENA"), (pna, "PNA")])
    }
}

/// Calculate the properties of a plated UC.
///
/// # Arguments
///
/// * `input` - Designation, plate and material parameters
/// * `table` - Section table used to resolve the designation
///
/// # Returns
///
/// * `Ok(CompositeResult)` - Section properties
/// * `Err(CalcError)` - If input is invalid, the designation is unknown, or
///   the plastic axis cannot be located
pub fn calculate(input: &CompositeInput, table: &UcSectionTable) -> CalcResult<CompositeResult> {
    input.validate()?;

    let section = table.lookup(&input.designation)?.clone();
    section.validate()?;

    let geometry = CompositeGeometry::assemble(&section, &input.plate);
    debug!(
        designation = %section.designation,
        depth = geometry.overall_depth_mm(),
        area = geometry.total_area_mm2(),
        "assembled composite geometry"
    );

    let elastic = elastic_properties(&geometry)?;
    let plastic = plastic_properties(&geometry, input.fy_mpa, input.gamma_m0)?;

    let properties = SectionProperties {
        area_mm2: elastic.area_mm2,
        overall_depth_mm: geometry.overall_depth_mm(),
        ybot_mm: elastic.ybot_mm,
        ytop_mm: elastic.ytop_mm,
        ymax_mm: elastic.ymax_mm,
        ixx_mm4: elastic.ixx_mm4,
        wel_mm3: elastic.wel_mm3,
        pna_top_mm: plastic.pna_top_mm,
        pna_bot_mm: plastic.pna_bot_mm,
        pna_location: plastic.pna_part,
        area_above_pna_mm2: plastic.area_above_mm2,
        area_below_pna_mm2: plastic.area_below_mm2,
        wpl_mm3: plastic.wpl_mm3,
        mpl_rd_knm: plastic.mpl_rd_knm,
        mel_rd_knm: moment_resistance_knm(elastic.wel_mm3, input.fy_mpa, input.gamma_m0),
    };

    info!(
        designation = %section.designation,
        mpl_rd = properties.mpl_rd_knm,
        pna = %properties.pna_location,
        "section calculated"
    );

    Ok(CompositeResult {
        input: input.clone(),
        section,
        geometry,
        properties,
        contributions: elastic.contributions,
    })
}

/// [`calculate`] against the built-in UC table
pub fn calculate_builtin(input: &CompositeInput) -> CalcResult<CompositeResult> {
    calculate(input, builtin_uc_sections())
}
