use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tax_core::{CivilStatus, RateTableSource, TaxEngine};
use tax_data::CompiledRateTables;
use tracing::{debug, info, warn};

use tax_cli::config::{CliConfig, OutputFormat};
use tax_cli::report::{BatchLine, BatchTable, ComparisonTable, TextReport, to_json};
use tax_cli::{logging, profile_loader};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Swiss federal, cantonal and communal income tax calculator.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Tax year; overrides the configuration file.
    #[arg(long, global = true)]
    year: Option<i32>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Log filter directive, e.g. `debug` or `tax_core=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the tax for one profile.
    Compute {
        /// TOML taxpayer profile.
        #[arg(long)]
        profile: PathBuf,

        /// Compute for this canton instead of the profile's.
        #[arg(long)]
        canton: Option<String>,

        /// Civil-status code (S, M, RP, D, W) replacing the profile's.
        #[arg(long, value_parser = parse_civil_status)]
        civil_status: Option<CivilStatus>,
    },

    /// Compare the same profile across cantons, cheapest first.
    Compare {
        #[arg(long)]
        profile: PathBuf,

        /// Comma-separated canton codes; every canton when omitted.
        #[arg(long, value_delimiter = ',')]
        cantons: Vec<String>,
    },

    /// Compute every row of a CSV batch file.
    Batch {
        #[arg(long)]
        csv: PathBuf,
    },

    /// List the cantons and municipalities carried for the tax year.
    Cantons,
}

fn parse_civil_status(code: &str) -> Result<CivilStatus, String> {
    CivilStatus::parse(code).ok_or_else(|| format!("unknown civil status '{code}'"))
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load_or_default(cli.config.as_deref())?;
    if let Some(year) = cli.year {
        config.tax_year = year;
    }
    if cli.json {
        config.output = OutputFormat::Json;
    }
    if cli.log_level.is_some() {
        config.log_level = cli.log_level.clone();
    }

    logging::init(config.log_level.as_deref(), config.log_file.as_deref())?;
    debug!(?config, "configuration resolved");

    run(cli.command, &config)
}

fn run(
    command: Command,
    config: &CliConfig,
) -> Result<()> {
    let store = CompiledRateTables::new();
    let engine = TaxEngine::with_config(&store, config.engine.clone())?;
    let year = config.tax_year;
    let json = config.output == OutputFormat::Json;

    match command {
        Command::Compute {
            profile,
            canton,
            civil_status,
        } => {
            let profile = profile_loader::load_profile(&profile)?;
            let result = match (canton, civil_status) {
                (None, None) => engine.compute_tax(&profile, year),
                (canton, status) => engine.compute_tax_for(
                    &profile,
                    canton.as_deref().unwrap_or(profile.personal.canton.as_str()),
                    status.unwrap_or(profile.personal.civil_status),
                    year,
                ),
            }
            .context("tax computation failed")?;

            info!(
                canton = %result.canton,
                total = %result.total_tax,
                "computed"
            );
            if json {
                println!("{}", to_json(&result)?);
            } else {
                print!("{}", TextReport(&result));
            }
        }

        Command::Compare { profile, cantons } => {
            let profile = profile_loader::load_profile(&profile)?;
            let codes: Vec<&str> = if cantons.is_empty() {
                store.require_tax_year(year)?.canton_codes()
            } else {
                cantons.iter().map(String::as_str).collect()
            };

            let rows = engine
                .compare_cantons(&profile, year, &codes)
                .context("canton comparison failed")?;
            if json {
                println!("{}", to_json(&rows)?);
            } else {
                print!("{}", ComparisonTable(&rows));
            }
        }

        Command::Batch { csv } => {
            let entries = profile_loader::load_batch(&csv)?;
            let lines: Vec<BatchLine> = entries
                .into_iter()
                .map(|entry| match engine.compute_tax(&entry.profile, year) {
                    Ok(result) => BatchLine::ok(entry.label, result),
                    Err(err) => {
                        warn!(label = %entry.label, error = %err, "batch row failed");
                        BatchLine::failed(entry.label, err)
                    }
                })
                .collect();

            if json {
                println!("{}", to_json(&lines)?);
            } else {
                print!("{}", BatchTable(&lines));
            }
        }

        Command::Cantons => {
            let tables = store.require_tax_year(year)?;
            if json {
                let listing: Vec<_> = tables
                    .cantons
                    .iter()
                    .map(|canton| {
                        serde_json::json!({
                            "code": canton.code,
                            "name": canton.name,
                            "cantonal_rate": canton.cantonal_rate,
                            "municipalities": canton
                                .municipalities
                                .iter()
                                .map(|m| {
                                    serde_json::json!({
                                        "name": m.name,
                                        "multiplier": m.multiplier
                                    })
                                })
                                .collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                println!("{}", to_json(&listing)?);
            } else {
                for canton in tables.cantons {
                    println!(
                        "{} {} (cantonal multiplier {} %)",
                        canton.code, canton.name, canton.cantonal_rate
                    );
                    for municipality in canton.municipalities {
                        println!("    {:<24}{:>8} %", municipality.name, municipality.multiplier);
                    }
                }
            }
        }
    }

    Ok(())
}
