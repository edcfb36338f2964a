//! Exemplar Code Generator
//!
//! Generates typed Rust client bindings from an example request collection.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use exemplar_gen::config::{DEFAULT_INPUT, DEFAULT_OUTPUT, GeneratorConfig};
use exemplar_gen::errors::GeneratorError;
use exemplar_gen::naming::NamingTables;
use exemplar_gen::output::{GenerationSummary, generate_and_write};

/// Exemplar code generator - turns example request collections into typed Rust clients
#[derive(Parser, Debug)]
#[command(name = "exemplar-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Collection document to read
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Bindings file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<&Cli> for GeneratorConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            input: cli.input.clone(),
            output: cli.output.clone(),
            dry_run: cli.dry_run,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(summary) => {
            if cli.dry_run {
                // The code already ends with a newline; stdout matches the file.
                print!("{}", summary.code);
                eprintln!("{}", "Dry run - no files were written".yellow());
            } else {
                println!(
                    "generated {} with {} operations across {} services",
                    summary.path.display(),
                    summary.operations,
                    summary.services
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins when set; otherwise `-v` flags pick the level.
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<GenerationSummary, GeneratorError> {
    let config = GeneratorConfig::from(cli);
    let tables = NamingTables::default();
    generate_and_write(&config, &tables)
}
