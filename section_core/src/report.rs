//! Plain-text report of a composite section calculation.
//!
//! A short header identifies the member, followed by one `name = value unit`
//! line per property at two decimals.

use std::fmt;

use crate::calculations::composite::CompositeResult;

/// Report view of a result; `Display` writes the full text
pub struct TextReport<'a>(pub &'a CompositeResult);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let input = &result.input;
        let p = &result.properties;

        if !input.label.is_empty() {
            writeln!(f, "{}", input.label)?;
        }
        if input.plate.area_mm2() > 0.0 {
            writeln!(
                f,
                "UC {} + {:.1} x {:.1} plate",
                result.section.designation, input.plate.width_mm, input.plate.thickness_mm
            )?;
        } else {
            writeln!(f, "UC {} + no plate", result.section.designation)?;
        }
        writeln!(f, "fy = {:.0} N/mm2, gamma_M0 = {:.2}", input.fy_mpa, input.gamma_m0)?;
        writeln!(f, "Plastic neutral axis in the {}", p.pna_location)?;
        writeln!(f)?;

        writeln!(f, "ybot = {:.2} mm", p.ybot_mm)?;
        writeln!(f, "ytop = {:.2} mm", p.ytop_mm)?;
        writeln!(f, "ymax = {:.2} mm", p.ymax_mm)?;
        writeln!(f, "Second Moment of Area Ixx = {:.2} mm4", p.ixx_mm4)?;
        writeln!(f, "Elastic Modulus Wel,y = {:.2} mm3", p.wel_mm3)?;
        writeln!(f, "PNAtop = {:.2} mm", p.pna_top_mm)?;
        writeln!(f, "PNAbot = {:.2} mm", p.pna_bot_mm)?;
        writeln!(f, "Plastic Modulus Wpl,y = {:.2} mm3", p.wpl_mm3)?;
        writeln!(f, "Bending Resistance = {:.2} kNm", p.mpl_rd_knm)?;
        writeln!(f, "Elastic Resistance Mel,Rd = {:.2} kNm", p.mel_rd_knm)
    }
}

/// Render the report as a multi-line string ending in a newline
pub fn render_text(result: &CompositeResult) -> String {
    TextReport(result).to_string()
}
