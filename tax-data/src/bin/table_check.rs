use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use rust_decimal::Decimal;
use tax_data::{BASE_TOLERANCE, CompiledRateTables, TableReport, parse_brackets};

/// Check a bracket table CSV before it is added to the compiled rate tables.
///
/// The CSV file should have the following columns:
/// - from: Lower bound of the bracket (inclusive)
/// - to: Upper bound (exclusive; empty for the unbounded top bracket)
/// - rate: Marginal rate in percent (e.g., 2.64)
/// - base: Tax owed at `from` (optional; empty or absent for tranche tables)
///
/// Without `--file`, every compiled-in table is checked instead.
#[derive(Parser, Debug)]
#[command(name = "tax-table-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing the bracket table
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Largest accepted difference between a declared and a derived base
    #[arg(short, long, default_value_t = BASE_TOLERANCE)]
    tolerance: Decimal,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match &args.file {
        Some(path) => check_file(path, args.tolerance),
        None => check_compiled(),
    }
}

fn check_file(
    path: &Path,
    tolerance: Decimal,
) -> Result<()> {
    println!("Checking bracket table: {}", path.display());

    let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;

    let brackets = parse_brackets(file)
        .with_context(|| format!("Failed to read bracket table: {}", path.display()))?;

    let report = TableReport::build(&brackets, tolerance).context("Failed to derive bases")?;

    println!("Parsed {} brackets ({:?})", brackets.len(), report.encoding);
    println!("{:>12} {:>12} {:>8} {:>12} {:>12}", "from", "to", "rate", "base", "derived");
    for row in &report.rows {
        let b = &row.bracket;
        println!(
            "{:>12} {:>12} {:>8} {:>12} {:>12}{}",
            b.from,
            b.to.map_or_else(|| "-".to_string(), |to| to.to_string()),
            b.rate,
            b.base.map_or_else(|| "-".to_string(), |base| base.to_string()),
            row.derived_base,
            if row.mismatch { "  MISMATCH" } else { "" }
        );
    }

    match report.mismatches() {
        0 => {
            println!("Table is valid.");
            Ok(())
        }
        n => bail!("{n} declared base(s) differ from tranche summation by more than {tolerance}"),
    }
}

fn check_compiled() -> Result<()> {
    let store = CompiledRateTables::new();
    let tables = store.bracket_tables();
    println!("Checking {} compiled tables", tables.len());

    if let Err(issues) = store.validate_all() {
        for issue in &issues {
            println!("  {issue}");
        }
        bail!("{} issue(s) found in the compiled tables", issues.len());
    }

    println!("All compiled tables are valid.");
    Ok(())
}
