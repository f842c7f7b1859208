//! topsis CLI: rank the alternatives of a delimited table with TOPSIS.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;

use topsis_rank::adapters::CsvTableStore;
use topsis_rank::application::{RunTopsisCommand, RunTopsisHandler};
use topsis_rank::config::{AppConfig, LogFormat, LoggingConfig};
use topsis_rank::domain::analysis::InputValidator;

#[derive(Parser)]
#[command(name = "topsis")]
#[command(about = "Rank alternatives by similarity to the ideal solution (TOPSIS)")]
#[command(version)]
struct Cli {
    /// Input table: identifier column followed by numeric criteria
    input_file: PathBuf,

    /// Comma-separated weights, one per criterion (e.g. "1,1,1,2")
    #[arg(allow_hyphen_values = true)]
    weights: String,

    /// Comma-separated impacts, '+' to maximize or '-' to minimize (e.g. "+,+,-,+")
    #[arg(allow_hyphen_values = true)]
    impacts: String,

    /// Output table with "Topsis Score" and "Rank" appended
    output_file: PathBuf,
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn run(cli: Cli, config: &AppConfig) -> Result<(), String> {
    let delimiter = config.csv.delimiter_byte().map_err(|e| e.to_string())?;
    let policy = config
        .analysis
        .validation_policy()
        .map_err(|e| e.to_string())?;

    let reader = CsvTableStore::new(&cli.input_file).with_delimiter(delimiter);
    let writer = CsvTableStore::new(&cli.output_file).with_delimiter(delimiter);

    debug!(
        input = %cli.input_file.display(),
        output = %cli.output_file.display(),
        "Starting TOPSIS run"
    );

    let handler = RunTopsisHandler::new(Arc::new(reader), Arc::new(writer))
        .with_validator(InputValidator::new(policy))
        .with_columns(config.analysis.output_columns());

    handler
        .handle(RunTopsisCommand::new(cli.weights, cli.impacts))
        .map(|_| ())
        .map_err(|e| {
            debug!(code = %e.code, details = ?e.details, "TOPSIS run failed");
            e.message
        })
}

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    init_tracing(&config.logging);

    match run(cli, &config) {
        Ok(()) => println!("TOPSIS analysis completed successfully."),
        Err(message) => {
            eprintln!("Error: {message}");
            process::exit(1);
        }
    }
}
