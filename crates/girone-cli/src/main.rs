use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use girone_core::{ChartConfig, FacilityRecord, Region, Theme};
use girone_export::svg_document;
use girone_layout::{render, CharAdvanceMeasure};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;

use error::{CliError, ErrorCode};

/// Approximate glyph advance of the chart's label font at its base size;
/// good enough for legend wrapping without loading real font metrics.
const CHAR_ADVANCE: f64 = 3.3;

#[derive(Parser, Debug)]
#[command(version, about = "Render the dual annular prison chart from JSON data")]
struct Cli {
    /// Facility records (JSON array)
    #[arg(value_name = "RECORDS")]
    records: PathBuf,

    /// Region definitions (JSON array)
    #[arg(value_name = "REGIONS")]
    regions: PathBuf,

    /// Output SVG file
    #[arg(short, long, value_name = "FILE", default_value = "chart.svg")]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Exit code for a failed parse: usage errors get their own code, while
/// --help and --version exit cleanly.
fn parse_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        ErrorCode::Usage as u8
    } else {
        0
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_exit_code(&err));
        }
    };

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.code as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let records: Vec<FacilityRecord> = read_json(&cli.records)?;
    let regions: Vec<Region> = read_json(&cli.regions)?;
    info!(
        records = records.len(),
        regions = regions.len(),
        "loaded chart inputs"
    );

    let cfg = ChartConfig::default();
    let measure = CharAdvanceMeasure {
        advance: CHAR_ADVANCE,
    };
    let chart = render(&records, &regions, &cfg, &measure)
        .map_err(|e| CliError::input(e.to_string()))?;
    if !chart.excluded.is_empty() {
        info!(excluded = chart.excluded.len(), "some record groups had no region definition");
    }

    let svg = svg_document(&chart, &Theme::default(), &cfg)
        .map_err(|e| CliError::processing(e.to_string()))?;
    std::fs::write(&cli.output, svg).map_err(|e| {
        CliError::processing(format!("could not write {}: {e}", cli.output.display()))
    })?;
    info!(output = %cli.output.display(), "chart written");
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| CliError::input(format!("could not read {}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| CliError::input(format!("invalid JSON in {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn missing_arguments_exit_with_the_usage_code() {
        let err = Cli::try_parse_from(["girone"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 1);
    }

    #[test]
    fn help_and_version_exit_cleanly() {
        let help = Cli::try_parse_from(["girone", "--help"]).unwrap_err();
        assert_eq!(parse_exit_code(&help), 0);
        let version = Cli::try_parse_from(["girone", "--version"]).unwrap_err();
        assert_eq!(parse_exit_code(&version), 0);
    }
}
