//! CLI entry point for the givens minimizer.
//!
//! Usage:
//!   givens-minimizer <LEVELS> [options]
//!
//! Options:
//!   --givens <n>            Budget of the first attempt (default: 81)
//!   --timeout <seconds>     Time the generator may spend per attempt (default: 5)
//!   --generator <program>   Generator executable (default: sudoku-generator)
//!   --generator-arg <arg>   Extra argument placed before the budget flags (repeatable)
//!   --json                  Print the report as JSON
//!   -v, --verbose           Log every attempt to stderr
//!
//! Environment:
//!   MINIMIZER_GENERATOR     Generator executable when --generator is absent
//!   MINIMIZER_TIMEOUT_SECS  Timeout when --timeout is absent
//!   RUST_LOG                Log filter for stderr (overrides --verbose)

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use givens_minimizer::{
    format_result, render_text, run, DriverSettings, MinimizerConfig, ProcessGenerator,
    DEFAULT_INITIAL_GIVENS,
};

#[derive(Parser)]
#[command(name = "givens-minimizer")]
#[command(about = "Find the fewest givens a sudoku generator can still produce at a fixed difficulty")]
#[command(version)]
struct Cli {
    /// Maximum inference levels (difficulty ceiling) passed to the generator
    #[arg(value_name = "LEVELS", value_parser = clap::value_parser!(u32).range(1..))]
    levels: u32,

    /// Budget of the first attempt
    #[arg(long, default_value_t = DEFAULT_INITIAL_GIVENS, allow_negative_numbers = true)]
    givens: i64,

    /// Seconds the generator may spend on each attempt
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Generator executable
    #[arg(long, value_name = "PROGRAM")]
    generator: Option<String>,

    /// Extra argument passed to the generator before the budget flags
    #[arg(long = "generator-arg", value_name = "ARG", allow_hyphen_values = true)]
    generator_args: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log every attempt to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1; --help and --version exit 0.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    init_tracing(cli.verbose);

    match minimize(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    // RUST_LOG, when set, replaces the default level entirely.
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn minimize(cli: Cli) -> Result<i32> {
    let settings = DriverSettings::from_env(cli.generator, cli.timeout);
    let config = MinimizerConfig {
        initial_givens: cli.givens,
        inference_levels: cli.levels,
        timeout: settings.timeout(),
    };

    let mut generator = ProcessGenerator::new(&settings.generator).with_args(cli.generator_args);

    let result = match run(&mut generator, &config) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Error: {}", err);
            return Ok(1);
        }
    };

    let rendered = if cli.json {
        let mut json = serde_json::to_string_pretty(&format_result(&result))
            .context("failed to serialize report")?;
        json.push('\n');
        json
    } else {
        render_text(&result)
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write report")?;

    Ok(0)
}
