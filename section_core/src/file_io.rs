//! # File I/O Module
//!
//! Reads case files and writes calculation output:
//! - **Case files**: TOML description of one plated UC
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Schema stamp**: Results files carry a schema version and timestamp
//!
//! ## Case File Format
//!
//! Every key is optional; missing keys fall back to [`CompositeInput::default`].
//! `fy_mpa` takes precedence over `grade`. A relative `table` path is resolved
//! against the case file's directory.
//!
//! ```toml
//! label = "TC-2"
//! designation = "203 x 203 x 86"
//! grade = "S355"
//! gamma_m0 = 1.0
//! table = "blue_book_uc.csv"
//!
//! [plate]
//! width_mm = 250.0
//! thickness_mm = 10.0
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use section_core::calculations::calculate_builtin;
//! use section_core::file_io::{load_case, save_results};
//! use std::path::Path;
//!
//! let case = load_case(Path::new("tc2.toml"))?;
//! let result = calculate_builtin(&case.to_input())?;
//! save_results(&result, Path::new("tc2.json"))?;
//! # Ok::<(), section_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculations::composite::{CompositeInput, CompositeResult};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::PlateDimensions;
use crate::materials::SteelGrade;

/// Schema version written into results files
pub const RESULTS_SCHEMA_VERSION: &str = "0.1.0";

/// One calculation case as written in a TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseFile {
    pub label: Option<String>,
    pub designation: Option<String>,
    pub grade: Option<SteelGrade>,
    pub fy_mpa: Option<f64>,
    pub gamma_m0: Option<f64>,

    /// CSV section table to use instead of the built-in one
    pub table: Option<PathBuf>,

    pub plate: Option<PlateDimensions>,
}

impl CaseFile {
    /// Build calculation input, filling gaps with defaults
    pub fn to_input(&self) -> CompositeInput {
        let defaults = CompositeInput::default();
        let fy_mpa = self
            .fy_mpa
            .or_else(|| self.grade.map(|g| g.nominal_fy_mpa()))
            .unwrap_or(defaults.fy_mpa);

        CompositeInput {
            label: self.label.clone().unwrap_or(defaults.label),
            designation: self.designation.clone().unwrap_or(defaults.designation),
            plate: self.plate.unwrap_or(defaults.plate),
            fy_mpa,
            gamma_m0: self.gamma_m0.unwrap_or(defaults.gamma_m0),
        }
    }
}

/// Parse case file text. `origin` is only used in error messages.
pub fn parse_case(contents: &str, origin: &str) -> CalcResult<CaseFile> {
    toml::from_str(contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid case file {}: {}", origin, e),
    })
}

/// Load a TOML case file.
///
/// A relative `table` path is rewritten relative to the case file.
pub fn load_case(path: &Path) -> CalcResult<CaseFile> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut case = parse_case(&contents, &path.display().to_string())?;

    if let (Some(table), Some(dir)) = (case.table.as_ref(), path.parent()) {
        if table.is_relative() {
            case.table = Some(dir.join(table));
        }
    }

    info!(path = %path.display(), "loaded case file");
    Ok(case)
}

/// Results file contents
#[derive(Debug, Clone, Serialize)]
pub struct ResultsFile {
    /// Version of this file layout
    pub schema_version: String,

    /// When the results were written (UTC)
    pub generated_at: DateTime<Utc>,

    pub result: CompositeResult,
}

impl ResultsFile {
    /// Wrap a result with the current schema version and time
    pub fn new(result: CompositeResult) -> Self {
        Self {
            schema_version: RESULTS_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            result,
        }
    }
}

/// Write a calculation result as pretty JSON with atomic write semantics.
///
/// The save process:
/// 1. Serialize to JSON
/// 2. Write to `<path>.tmp`
/// 3. Sync to disk (fsync)
/// 4. Rename over `path`
pub fn save_results(result: &CompositeResult, path: &Path) -> CalcResult<()> {
    let file = ResultsFile::new(result.clone());
    let json = serde_json::to_string_pretty(&file).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;
    write_atomic(path, json.as_bytes())?;
    info!(path = %path.display(), "results written");
    Ok(())
}

/// Write the section outline as SVG, atomically
pub fn save_svg(result: &CompositeResult, path: &Path) -> CalcResult<()> {
    write_atomic(path, result.to_svg().as_bytes())?;
    info!(path = %path.display(), "outline written");
    Ok(())
}

/// Write `bytes` to `<path>.tmp`, sync, then rename over `path`.
///
/// The temp file is removed if any step fails.
fn write_atomic(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let written = write_synced(&tmp_path, bytes).and_then(|()| {
        fs::rename(&tmp_path, path)
            .map_err(|e| CalcError::file_error("rename to final", path.display().to_string(), e.to_string()))
    });

    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    written?;

    debug!(path = %path.display(), bytes = bytes.len(), "atomic write complete");
    Ok(())
}

fn write_synced(tmp_path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let tmp_display = tmp_path.display().to_string();

    let mut tmp_file = File::create(tmp_path)
        .map_err(|e| CalcError::file_error("create temp file", tmp_display.clone(), e.to_string()))?;

    tmp_file
        .write_all(bytes)
        .map_err(|e| CalcError::file_error("write temp file", tmp_display.clone(), e.to_string()))?;

    tmp_file
        .sync_all()
        .map_err(|e| CalcError::file_error("sync temp file", tmp_display, e.to_string()))
}

/// `out.json` -> `out.json.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
