//! Rate Converter CLI
//!
//! Command-line front end for the rate matrix and future value projection
//!
//! ```bash
//! rate_converter convert nominal_Monthly 6
//! rate_converter project --principal 2500 --time 18 --unit months --rate-id effective_Annual --rate 4
//! rate_converter interactive
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rate_converter::{
    Calculator, CalculatorConfig, CalculatorView, CompoundingPeriod, EditEvent, RateKind,
    RateRepresentation, TimeUnit,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Interest rate equivalence calculator
#[derive(Parser)]
#[command(name = "rate_converter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,

    /// JSON file overriding the startup defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive all eight rate representations from one
    Convert {
        /// Representation id, e.g. nominal_Monthly or effective_period_Daily
        representation: RateRepresentation,

        /// Rate in percent
        value: String,
    },

    /// Project a future value
    Project {
        /// Starting amount (blank uses the configured default)
        #[arg(long)]
        principal: Option<String>,

        /// Horizon length
        #[arg(long)]
        time: Option<String>,

        /// Horizon unit: days, months or years
        #[arg(long)]
        unit: Option<String>,

        /// Representation of --rate
        #[arg(long, requires = "rate")]
        rate_id: Option<RateRepresentation>,

        /// Rate in percent
        #[arg(long)]
        rate: Option<String>,
    },

    /// Read `<field>=<value>` edits from stdin and print the view after each
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON
    Json,
    /// CSV (rate matrix rows)
    Csv,
}

#[derive(serde::Serialize)]
struct CsvRow<'a> {
    representation: String,
    kind: String,
    period: String,
    frequency: u32,
    value: &'a str,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CalculatorConfig::from_json_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    let mut calc = Calculator::with_config(config)?;

    match cli.command {
        Commands::Convert { representation, value } => {
            let view = calc.apply(EditEvent::Rate { representation, raw: value });
            write_view(&mut io::stdout().lock(), &view, cli.format)?;
        }
        Commands::Project { principal, time, unit, rate_id, rate } => {
            let mut events = Vec::new();
            if let Some(raw) = principal {
                events.push(EditEvent::Principal(raw));
            }
            if let Some(raw) = time {
                events.push(EditEvent::TimeValue(raw));
            }
            if let Some(raw) = unit {
                events.push(EditEvent::TimeUnit(raw.parse::<TimeUnit>().unwrap_or_default()));
            }
            if let Some(raw) = rate {
                let representation = rate_id.unwrap_or_else(|| calc.active());
                events.push(EditEvent::Rate { representation, raw });
            }

            let view = calc.apply_all(events);
            write_view(&mut io::stdout().lock(), &view, cli.format)?;
        }
        Commands::Interactive => run_interactive(&mut calc, cli.format)?,
    }

    Ok(())
}

fn run_interactive(calc: &mut Calculator, format: OutputFormat) -> Result<()> {
    log::info!("interactive session started");
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    write_view(&mut out, &calc.view(), format)?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        match EditEvent::parse_line(line) {
            Ok(event) => {
                let view = calc.apply(event);
                write_view(&mut out, &view, format)?;
            }
            Err(e) => writeln!(out, "error: {}", e)?,
        }
    }

    log::info!("interactive session ended");
    Ok(())
}

fn write_view<W: Write>(out: &mut W, view: &CalculatorView, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, view)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, view)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for cell in view.matrix.cells() {
                writer.serialize(CsvRow {
                    representation: cell.representation.id(),
                    kind: cell.representation.kind.to_string(),
                    period: cell.representation.period.to_string(),
                    frequency: cell.representation.periods_per_year(),
                    value: cell.value.as_deref().unwrap_or(""),
                })?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, view: &CalculatorView) -> io::Result<()> {
    let matrix = &view.matrix;

    writeln!(out, "{:<10} {:>16} {:>18}", "Period", "Nominal (%)", "Effective (%)")?;
    writeln!(out, "{}", "-".repeat(46))?;
    for period in CompoundingPeriod::ALL {
        let nominal = matrix.value(RateKind::Nominal, period).unwrap_or("");
        let effective = matrix.value(RateKind::EffectivePeriod, period).unwrap_or("");
        writeln!(out, "{:<10} {:>16} {:>18}", period.to_string(), nominal, effective)?;
    }

    match matrix.ear {
        Some(ear) => writeln!(out, "\nEAR: {:.6}%  (active: {})", ear * 100.0, matrix.active)?,
        None => writeln!(out, "\nEAR: -  (active: {})", matrix.active)?,
    }

    let inputs = &view.inputs;
    writeln!(
        out,
        "Future value of {} over {} {}: {}\n",
        display_or(&inputs.principal, "default principal"),
        display_or(&inputs.time_value, "default"),
        inputs.time_unit,
        view.future_value
    )
}

fn display_or<'a>(raw: &'a str, fallback: &'a str) -> &'a str {
    if raw.trim().is_empty() { fallback } else { raw }
}
