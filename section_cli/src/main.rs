//! # Coverplate CLI
//!
//! Command-line front end for plated universal column properties.
//!
//! ```text
//! coverplate calc "203 x 203 x 86" --plate-width 250 --plate-thickness 10
//! coverplate calc --case tc2.toml --json --out tc2.json --svg tc2.svg
//! coverplate list "203 x 203"
//! ```
//!
//! Command-line values override case-file values, which override defaults.
//! Set `RUST_LOG=debug` to trace each calculation stage on stderr.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use section_core::file_io::{load_case, save_results, save_svg, CaseFile};
use section_core::report::render_text;
use section_core::{
    builtin_uc_sections, calculate, CalcError, CompositeInput, PlateDimensions, SteelGrade, UcSectionTable,
};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "coverplate")]
#[command(about = "Section properties of a universal column with a welded cover plate")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate elastic and plastic properties of a plated UC
    Calc(CalcArgs),
    /// List section designations
    List(ListArgs),
}

#[derive(Args)]
struct CalcArgs {
    /// UC serial size, e.g. "203 x 203 x 86"
    designation: Option<String>,

    /// Cover plate width bp (mm); 0 for no plate
    #[arg(long)]
    plate_width: Option<f64>,

    /// Cover plate thickness tp (mm); 0 for no plate
    #[arg(long)]
    plate_thickness: Option<f64>,

    /// Steel grade, sets fy to its nominal value
    #[arg(long)]
    grade: Option<SteelGrade>,

    /// Yield strength fy (N/mm²), overrides --grade
    #[arg(long)]
    fy: Option<f64>,

    /// Partial factor γM0
    #[arg(long)]
    gamma_m0: Option<f64>,

    /// Label printed at the top of the report
    #[arg(long)]
    label: Option<String>,

    /// TOML case file
    #[arg(long)]
    case: Option<PathBuf>,

    /// CSV section table to use instead of the built-in one
    #[arg(long)]
    table: Option<PathBuf>,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Write a results file (JSON)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write the section outline (SVG)
    #[arg(long)]
    svg: Option<PathBuf>,
}

#[derive(Args)]
struct ListArgs {
    /// Only list designations starting with this prefix
    prefix: Option<String>,

    /// CSV section table to use instead of the built-in one
    #[arg(long)]
    table: Option<PathBuf>,

    /// Also print the dimensions of each section
    #[arg(long)]
    dims: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Calc(args) => {
            let json = args.json;
            let outcome = run_calc(args);
            if let Err(err) = &outcome {
                if json {
                    print_error_json(err);
                }
            }
            outcome
        }
        Command::List(args) => run_list(args),
    }
}

fn run_calc(args: CalcArgs) -> Result<()> {
    let case = match &args.case {
        Some(path) => load_case(path).with_context(|| format!("failed to load case file {}", path.display()))?,
        None => CaseFile::default(),
    };

    let input = resolve_input(&args, &case);
    debug!(?input, "resolved calculation input");

    let table_path = args.table.or(case.table);
    let table = load_table(table_path.as_deref())?;
    let result = calculate(&input, &table).context("section calculation failed")?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("failed to serialize result")?;
        println!("{}", json);
    } else {
        print!("{}", render_text(&result));
    }

    if let Some(path) = &args.out {
        save_results(&result, path).with_context(|| format!("failed to write {}", path.display()))?;
    }
    if let Some(path) = &args.svg {
        save_svg(&result, path).with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}

/// Merge command-line flags over the case file over the defaults.
///
/// Each field takes the first value found in flag, case file, default order.
/// fy is the exception: an explicit `--fy` or `fy_mpa` beats any grade, and a
/// grade (flag first) only applies when neither gives fy.
fn resolve_input(args: &CalcArgs, case: &CaseFile) -> CompositeInput {
    let defaults = CompositeInput::default();
    let case_plate = case.plate.unwrap_or(defaults.plate);

    let fy_mpa = args
        .fy
        .or(case.fy_mpa)
        .or_else(|| args.grade.or(case.grade).map(|g| g.nominal_fy_mpa()))
        .unwrap_or(defaults.fy_mpa);

    CompositeInput {
        label: args.label.clone().or_else(|| case.label.clone()).unwrap_or(defaults.label),
        designation: args
            .designation
            .clone()
            .or_else(|| case.designation.clone())
            .unwrap_or(defaults.designation),
        plate: PlateDimensions::new(
            args.plate_width.unwrap_or(case_plate.width_mm),
            args.plate_thickness.unwrap_or(case_plate.thickness_mm),
        ),
        fy_mpa,
        gamma_m0: args.gamma_m0.or(case.gamma_m0).unwrap_or(defaults.gamma_m0),
    }
}

fn run_list(args: ListArgs) -> Result<()> {
    let table = load_table(args.table.as_deref())?;
    let prefix = args.prefix.unwrap_or_default();
    let sections = table.search(&prefix);
    if sections.is_empty() {
        bail!("no sections match '{}'", prefix);
    }

    for section in sections {
        if args.dims {
            println!("{}", section);
        } else {
            println!("{}", section.designation);
        }
    }
    Ok(())
}

fn load_table(path: Option<&Path>) -> Result<Cow<'static, UcSectionTable>> {
    match path {
        Some(path) => {
            let table = UcSectionTable::load_from_csv(path)
                .with_context(|| format!("failed to load section table {}", path.display()))?;
            if table.is_empty() {
                bail!("section table {} has no rows", path.display());
            }
            Ok(Cow::Owned(table))
        }
        None => {
            let table = builtin_uc_sections();
            info!(rows = table.len(), "using built-in section table");
            Ok(Cow::Borrowed(table))
        }
    }
}

fn print_error_json(err: &anyhow::Error) {
    let value = match err.downcast_ref::<CalcError>() {
        Some(calc_err) => serde_json::json!({
            "code": calc_err.error_code(),
            "error": calc_err,
            "message": format!("{:#}", err),
        }),
        None => serde_json::json!({ "code": "ERROR", "message": format!("{:#}", err) }),
    };
    if let Ok(json) = serde_json::to_string_pretty(&value) {
        eprintln!("{}", json);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use section_core::file_io::parse_case;

    fn calc_args(flags: &[&str]) -> CalcArgs {
        let argv = ["coverplate", "calc"].iter().chain(flags.iter());
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Calc(args) => args,
            Command::List(_) => panic!("expected calc"),
        }
    }

    fn case(toml: &str) -> CaseFile {
        parse_case(toml, "inline").unwrap()
    }

    const FULL_CASE: &str = r#"
label = "from case"
designation = "254 x 254 x 73"
fy_mpa = 240.0
gamma_m0 = 1.05

[plate]
width_mm = 300.0
thickness_mm = 15.0
"#;

    #[test]
    fn test_defaults_without_flags_or_case() {
        let input = resolve_input(&calc_args(&[]), &CaseFile::default());
        assert_eq!(input, CompositeInput::default());
    }

    #[test]
    fn test_case_values_override_defaults() {
        let input = resolve_input(&calc_args(&[]), &case(FULL_CASE));
        assert_eq!(input.label, "from case");
        assert_eq!(input.designation, "254 x 254 x 73");
        assert_eq!(input.plate, PlateDimensions::new(300.0, 15.0));
        assert_eq!(input.fy_mpa, 240.0);
        assert_eq!(input.gamma_m0, 1.05);
    }

    #[test]
    fn test_flags_override_case_values() {
        let args = calc_args(&[
            "203 x 203 x 86",
            "--label",
            "from flags",
            "--plate-width",
            "250",
            "--plate-thickness",
            "10",
            "--fy",
            "355",
            "--gamma-m0",
            "1.1",
        ]);
        let input = resolve_input(&args, &case(FULL_CASE));
        assert_eq!(input.label, "from flags");
        assert_eq!(input.designation, "203 x 203 x 86");
        assert_eq!(input.plate, PlateDimensions::new(250.0, 10.0));
        assert_eq!(input.fy_mpa, 355.0);
        assert_eq!(input.gamma_m0, 1.1);
    }

    #[test]
    fn test_single_plate_flag_keeps_other_dimension() {
        let input = resolve_input(&calc_args(&["--plate-width", "0"]), &case(FULL_CASE));
        assert_eq!(input.plate, PlateDimensions::new(0.0, 15.0));
        assert_eq!(input.plate.area_mm2(), 0.0);

        let input = resolve_input(&calc_args(&["--plate-thickness", "20"]), &CaseFile::default());
        assert_eq!(input.plate, PlateDimensions::new(250.0, 20.0));
    }

    #[test]
    fn test_explicit_fy_beats_any_grade() {
        // Case fy against a grade flag
        let input = resolve_input(&calc_args(&["--grade", "S460"]), &case("fy_mpa = 240.0\n"));
        assert_eq!(input.fy_mpa, 240.0);

        // fy flag against a case grade
        let input = resolve_input(&calc_args(&["--fy", "300"]), &case("grade = \"S235\"\n"));
        assert_eq!(input.fy_mpa, 300.0);
    }

    #[test]
    fn test_grade_flag_beats_case_grade() {
        let input = resolve_input(&calc_args(&["--grade", "S460"]), &case("grade = \"S235\"\n"));
        assert_eq!(input.fy_mpa, 460.0);

        let input = resolve_input(&calc_args(&[]), &case("grade = \"S275\"\n"));
        assert_eq!(input.fy_mpa, 275.0);
    }
}
