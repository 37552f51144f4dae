//! Phone Validator - Main entry point
//!
//! Command-line interface over the validation pipeline: a single-number
//! mode, a batch mode over a column of a tabular file, and a listing of
//! the advertised default-region codes.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use phone_validator::{
    validate_batch, Config, PhonenumberPlan, RecordOutcome, RecordValidator, RegionCode,
    TabularSource,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Default territory for numbers without an explicit country code
    /// (overrides PHONE_VALIDATOR_DEFAULT_REGION).
    #[arg(long, value_name = "CODE", global = true)]
    region: Option<RegionCode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a single phone number.
    Validate {
        /// The phone number, with or without a country code.
        number: String,

        /// Emit the result as JSON on stdout.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Validate every number in one column of a tabular file.
    Batch {
        /// Input table (.csv, .tsv, or .xlsx).
        file: PathBuf,

        /// Name of the column holding phone numbers.
        #[arg(long, value_name = "NAME")]
        column: String,

        /// Where to write the results CSV (defaults to stdout).
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// List the advertised default-region codes.
    Regions,
}

fn main() -> Result<()> {
    // Initialize logging (stderr only so stdout stays clean for data output)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let region = args.region.unwrap_or_else(|| config.default_region.clone());
    let validator = RecordValidator::new(PhonenumberPlan::new(), config.locale.clone());

    match args.command {
        Command::Validate { number, json } => run_validate(&validator, &number, &region, json),
        Command::Batch {
            file,
            column,
            output,
        } => run_batch(&validator, &file, &column, &region, output.as_deref()),
        Command::Regions => {
            for code in RegionCode::SUPPORTED {
                println!("{}", code);
            }
            Ok(())
        }
    }
}

fn run_validate(
    validator: &RecordValidator<PhonenumberPlan>,
    number: &str,
    region: &RegionCode,
    json: bool,
) -> Result<()> {
    let outcome = validator.validate_record(number, region);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        RecordOutcome::Report(report) => {
            println!("Formatted Number: {}", report.formatted_number);
            println!("Valid: {}", if report.is_valid { "yes" } else { "no" });
            println!("Possible: {}", if report.is_possible { "yes" } else { "no" });
            println!("Line Type: {}", report.line_type);
            println!("Carrier: {}", report.carrier);
            println!("Location: {}", report.location);
            println!("Timezone: {}", report.timezone);
            Ok(())
        }
        RecordOutcome::Failure { error } => anyhow::bail!("{}", error),
    }
}

fn run_batch(
    validator: &RecordValidator<PhonenumberPlan>,
    file: &Path,
    column: &str,
    region: &RegionCode,
    output: Option<&Path>,
) -> Result<()> {
    let source = TabularSource::open(file)?;
    let rows = source.column(column)?;
    info!(
        rows = rows.len(),
        column = column,
        region = region.as_str(),
        "validating batch"
    );

    let records = validate_batch(validator, &rows, region, |fraction| {
        eprint!("\rValidating... {:>3.0}%", fraction * 100.0);
        let _ = std::io::stderr().flush();
    });
    if !records.is_empty() {
        eprintln!();
    }

    match output {
        Some(path) => {
            phone_validator::write_csv_file(&records, path)?;
            info!(path = %path.display(), "results written");
        }
        None => {
            phone_validator::write_csv(&records, std::io::stdout().lock())?;
        }
    }

    let failures = records.iter().filter(|r| r.outcome.is_failure()).count();
    info!(
        total = records.len(),
        failures = failures,
        "batch complete"
    );

    Ok(())
}
