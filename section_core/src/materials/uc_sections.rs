//! Universal Column Dimensions Table
//!
//! Dimensions of UK universal columns (UC) as tabulated in the SCI "Blue Book"
//! (BS 4-1 sections). Only the four dimensions needed to rebuild the section
//! from rectangles are held: depth `h`, flange width `b`, flange thickness `tf`
//! and web thickness `tw`. Root radii are ignored.
//!
//! ## Data Source
//!
//! A built-in table covers the 152x152 through 356x406 series. Larger or
//! project-specific tables can be loaded from a CSV export of the Blue Book
//! spreadsheet with these headers:
//!
//! ```text
//! Section designation,Depth of section h (mm),Width of section b (mm),Flange Thickness tf (mm),Web Thickness tw (mm)
//! 203 x 203 x 86,222.2,209.1,20.5,12.7
//! ```
//!
//! ## Example
//!
//! ```rust
//! use section_core::materials::uc_sections::builtin_uc_sections;
//!
//! let table = builtin_uc_sections();
//! let uc = table.lookup("203 x 203 x 86").unwrap();
//! assert_eq!(uc.depth_mm, 222.2);
//! assert!((uc.web_height_mm() - 181.2).abs() < 1e-9);
//! ```

use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{CalcError, CalcResult};

const COL_DESIGNATION: &str = "Section designation";
const COL_DEPTH: &str = "Depth of section h (mm)";
const COL_WIDTH: &str = "Width of section b (mm)";
const COL_FLANGE: &str = "Flange Thickness tf (mm)";
const COL_WEB: &str = "Web Thickness tw (mm)";

/// Tabulated dimensions of one universal column
///
/// All dimensions in millimetres. The section is doubly symmetric: both
/// flanges share `width_mm` and `flange_thickness_mm`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UcSection {
    /// Serial size designation (e.g., "203 x 203 x 86")
    pub designation: String,

    /// Overall depth of section h (mm)
    pub depth_mm: f64,

    /// Flange width b (mm)
    pub width_mm: f64,

    /// Flange thickness tf (mm)
    pub flange_thickness_mm: f64,

    /// Web thickness tw (mm)
    pub web_thickness_mm: f64,
}

impl UcSection {
    /// Clear height of the web between flanges: h - 2·tf
    pub fn web_height_mm(&self) -> f64 {
        self.depth_mm - 2.0 * self.flange_thickness_mm
    }

    /// Area of the idealised I-section (flanges + web, no root fillets)
    pub fn area_mm2(&self) -> f64 {
        2.0 * self.width_mm * self.flange_thickness_mm + self.web_thickness_mm * self.web_height_mm()
    }

    /// Check that the dimensions describe a real I-section.
    pub fn validate(&self) -> CalcResult<()> {
        let dims = [
            ("section.depth_mm", self.depth_mm),
            ("section.width_mm", self.width_mm),
            ("section.flange_thickness_mm", self.flange_thickness_mm),
            ("section.web_thickness_mm", self.web_thickness_mm),
        ];
        for (field, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    format!("Dimension of '{}' must be positive", self.designation),
                ));
            }
        }
        if self.web_height_mm() <= 0.0 {
            return Err(CalcError::invalid_input(
                "section.flange_thickness_mm",
                self.flange_thickness_mm.to_string(),
                format!(
                    "Flanges of '{}' leave no web (h - 2·tf = {:.2} mm)",
                    self.designation,
                    self.web_height_mm()
                ),
            ));
        }
        if self.web_thickness_mm > self.width_mm {
            return Err(CalcError::invalid_input(
                "section.web_thickness_mm",
                self.web_thickness_mm.to_string(),
                format!("Web of '{}' is wider than its flanges", self.designation),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for UcSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "UC {} (h={:.1}, b={:.1}, tf={:.1}, tw={:.1} mm)",
            self.designation, self.depth_mm, self.width_mm, self.flange_thickness_mm, self.web_thickness_mm
        )
    }
}

/// Ordered table of universal column dimensions
///
/// Rows keep their source order; lookups return the first exact match, so a
/// table with duplicate designations resolves to the earliest row.
#[derive(Debug, Clone, Default)]
pub struct UcSectionTable {
    rows: Vec<UcSection>,

    /// Table provenance (e.g., "builtin-bs4-1" or the CSV path)
    pub source: Option<String>,
}

impl UcSectionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a CSV file
    pub fn load_from_csv(path: &Path) -> CalcResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("open", path.display().to_string(), format!("Failed to read CSV: {}", e))
        })?;
        let mut table = Self::parse_csv(&contents, &path.display().to_string())?;
        table.source = Some(path.display().to_string());
        info!(path = %path.display(), rows = table.len(), "loaded section table");
        Ok(table)
    }

    /// Parse CSV text. `origin` is only used in error messages.
    pub fn parse_csv(contents: &str, origin: &str) -> CalcResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(contents.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| CalcError::file_error("parse", origin, format!("Invalid CSV header: {}", e)))?
            .clone();
        if headers.is_empty() {
            return Err(CalcError::file_error("read", origin, "CSV file is empty"));
        }

        let col_index = |name: &str| -> CalcResult<usize> {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| CalcError::file_error("parse", origin, format!("Missing '{}' column", name)))
        };

        let designation_idx = col_index(COL_DESIGNATION)?;
        let depth_idx = col_index(COL_DEPTH)?;
        let width_idx = col_index(COL_WIDTH)?;
        let flange_idx = col_index(COL_FLANGE)?;
        let web_idx = col_index(COL_WEB)?;

        let mut table = UcSectionTable::new();

        for record in reader.records() {
            let record = record.map_err(|e| CalcError::file_error("parse", origin, e.to_string()))?;
            let line_num = record.position().map(|p| p.line()).unwrap_or(0);

            let designation = record.get(designation_idx).unwrap_or("");
            if designation.is_empty() {
                continue; // Skip rows without a designation
            }

            let get_f64 = |idx: usize, name: &str| -> CalcResult<f64> {
                record
                    .get(idx)
                    .and_then(|v| v.parse::<f64>().ok())
                    .ok_or_else(|| {
                        CalcError::file_error(
                            "parse",
                            origin,
                            format!("Line {}: invalid or missing '{}' for '{}'", line_num, name, designation),
                        )
                    })
            };

            table.insert(UcSection {
                designation: designation.to_string(),
                depth_mm: get_f64(depth_idx, COL_DEPTH)?,
                width_mm: get_f64(width_idx, COL_WIDTH)?,
                flange_thickness_mm: get_f64(flange_idx, COL_FLANGE)?,
                web_thickness_mm: get_f64(web_idx, COL_WEB)?,
            });
        }

        Ok(table)
    }

    /// Append a row
    pub fn insert(&mut self, section: UcSection) {
        self.rows.push(section);
    }

    /// Look up a section by designation
    ///
    /// Matching is exact after trimming surrounding whitespace; the first
    /// matching row wins.
    pub fn lookup(&self, designation: &str) -> CalcResult<&UcSection> {
        let key = designation.trim();
        let found = self.rows.iter().find(|row| row.designation == key);
        match found {
            Some(section) => {
                debug!(designation = key, "resolved section dimensions");
                Ok(section)
            }
            None => Err(CalcError::section_not_found(designation)),
        }
    }

    /// All designations in table order
    pub fn designations(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.designation.as_str()).collect()
    }

    /// Sections whose designation starts with `prefix` (e.g., "203 x 203")
    pub fn search(&self, prefix: &str) -> Vec<&UcSection> {
        let prefix = prefix.trim();
        self.rows
            .iter()
            .filter(|r| r.designation.starts_with(prefix))
            .collect()
    }

    /// Number of rows in the table
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ============================================================================
// Built-in Universal Columns (for use without a CSV file)
// ============================================================================

static BUILTIN: Lazy<UcSectionTable> = Lazy::new(|| {
    // (designation, h, b, tw, tf) per BS 4-1 / SCI P363
    let rows: [(&str, f64, f64, f64, f64); 36] = [
        // 356 x 406 series
        ("356 x 406 x 634", 474.6, 424.0, 47.6, 77.0),
        ("356 x 406 x 551", 455.6, 418.5, 42.1, 67.5),
        ("356 x 406 x 467", 436.6, 412.2, 35.8, 58.0),
        ("356 x 406 x 393", 419.0, 407.0, 30.6, 49.2),
        ("356 x 406 x 340", 406.4, 403.0, 26.6, 42.9),
        ("356 x 406 x 287", 393.6, 399.0, 22.6, 36.5),
        ("356 x 406 x 235", 381.0, 394.8, 18.4, 30.2),
        // 356 x 368 series
        ("356 x 368 x 202", 374.6, 374.7, 16.5, 27.0),
        ("356 x 368 x 177", 368.2, 372.6, 14.4, 23.8),
        ("356 x 368 x 153", 362.0, 370.5, 12.3, 20.7),
        ("356 x 368 x 129", 355.6, 368.6, 10.4, 17.5),
        // 305 x 305 series
        ("305 x 305 x 283", 365.3, 322.2, 26.8, 44.1),
        ("305 x 305 x 240", 352.5, 318.4, 23.0, 37.7),
        ("305 x 305 x 198", 339.9, 314.5, 19.1, 31.4),
        ("305 x 305 x 158", 327.1, 310.6, 15.8, 25.0),
        ("305 x 305 x 137", 320.5, 308.7, 13.8, 21.7),
        ("305 x 305 x 118", 314.5, 306.8, 11.9, 18.7),
        ("305 x 305 x 97", 307.9, 304.8, 9.9, 15.4),
        // 254 x 254 series
        ("254 x 254 x 167", 289.1, 265.2, 19.2, 31.7),
        ("254 x 254 x 132", 276.3, 261.3, 15.3, 25.3),
        ("254 x 254 x 107", 266.7, 258.8, 12.8, 20.5),
        ("254 x 254 x 89", 260.3, 256.3, 10.3, 17.3),
        ("254 x 254 x 73", 254.1, 254.6, 8.6, 14.2),
        // 203 x 203 series
        ("203 x 203 x 127", 241.4, 213.9, 18.1, 30.1),
        ("203 x 203 x 113", 235.0, 212.1, 16.3, 26.9),
        ("203 x 203 x 100", 228.6, 210.3, 14.5, 23.7),
        ("203 x 203 x 86", 222.2, 209.1, 12.7, 20.5),
        ("203 x 203 x 71", 215.8, 206.4, 10.0, 17.3),
        ("203 x 203 x 60", 209.6, 205.8, 9.4, 14.2),
        ("203 x 203 x 52", 206.2, 204.3, 7.9, 12.5),
        ("203 x 203 x 46", 203.2, 203.6, 7.2, 11.0),
        // 152 x 152 series
        ("152 x 152 x 51", 170.2, 157.4, 11.0, 15.7),
        ("152 x 152 x 44", 166.0, 155.9, 9.5, 13.6),
        ("152 x 152 x 37", 161.8, 154.4, 8.0, 11.5),
        ("152 x 152 x 30", 157.6, 152.9, 6.5, 9.4),
        ("152 x 152 x 23", 152.4, 152.2, 5.8, 6.8),
    ];

    let mut table = UcSectionTable::new();
    for (designation, h, b, tw, tf) in rows {
        table.insert(UcSection {
            designation: designation.to_string(),
            depth_mm: h,
            width_mm: b,
            flange_thickness_mm: tf,
            web_thickness_mm: tw,
        });
    }
    table.source = Some("builtin-bs4-1".to_string());
    table
});

/// The built-in universal column table, initialised on first use
pub fn builtin_uc_sections() -> &'static UcSectionTable {
    &BUILTIN
}
