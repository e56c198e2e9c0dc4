#![allow(clippy::doc_markdown)]
//! `rangeval` CLI - build and compare range evaluators
//!
//! Usage:
//!   `rangeval run --size 100000 --distribution "EXP(0.01)"`
//!   `rangeval run --evaluator inverted-index --min 10 --max 20 --format json`
//!   `rangeval config`

mod output;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use rangeval_core::config::LoggingConfig;
use rangeval_core::{Distribution, EvaluatorKind, RangeQuery, RangevalConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "rangeval")]
#[command(author, version, about = "rangeval CLI - compare range predicate evaluators")]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "rangeval.toml", env = "RANGEVAL_CONFIG")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// CLI evaluator option
#[derive(Debug, Clone, Copy, ValueEnum)]
enum EvaluatorArg {
    Scan,
    BinarySearch,
    Intervals,
    InvertedIndex,
    PermutedIndex,
}

impl From<EvaluatorArg> for EvaluatorKind {
    fn from(arg: EvaluatorArg) -> Self {
        match arg {
            EvaluatorArg::Scan => EvaluatorKind::Scan,
            EvaluatorArg::BinarySearch => EvaluatorKind::BinarySearch,
            EvaluatorArg::Intervals => EvaluatorKind::Intervals,
            EvaluatorArg::InvertedIndex => EvaluatorKind::InvertedIndex,
            EvaluatorArg::PermutedIndex => EvaluatorKind::PermutedIndex,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a column, build evaluators and run a range query
    Run {
        /// Number of rows
        #[arg(long)]
        size: Option<usize>,

        /// Value distribution, e.g. "EXP(0.01)" or "UNIFORM(0,1000)"
        #[arg(long)]
        distribution: Option<Distribution>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Evaluators to compare (repeatable, default: all)
        #[arg(short, long = "evaluator", value_enum)]
        evaluators: Vec<EvaluatorArg>,

        /// Lower bound of the range (default: from query quantiles)
        #[arg(long, requires = "max", allow_negative_numbers = true)]
        min: Option<i64>,

        /// Upper bound of the range (default: from query quantiles)
        #[arg(long, requires = "min", allow_negative_numbers = true)]
        max: Option<i64>,

        /// Timed repetitions per evaluator
        #[arg(long)]
        iterations: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = RangevalConfig::load_from_path(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    match cli.command {
        Commands::Run {
            size,
            distribution,
            seed,
            evaluators,
            min,
            max,
            iterations,
            format,
        } => {
            if let Some(size) = size {
                config.column.size = size;
            }
            if let Some(distribution) = distribution {
                config.column.distribution = distribution;
            }
            if let Some(seed) = seed {
                config.column.seed = seed;
            }
            if !evaluators.is_empty() {
                config.evaluators.enabled = evaluators.into_iter().map(Into::into).collect();
            }
            if let Some(iterations) = iterations {
                config.query.iterations = iterations;
            }
            config.validate()?;
            init_logging(&config.logging);

            let query = match (min, max) {
                (Some(min), Some(max)) => Some(RangeQuery::new(min, max)?),
                _ => None,
            };

            let report = report::run(&config, query)?;
            output::print_report(&report, format)?;

            let disagreeing = report.disagreeing();
            if !disagreeing.is_empty() {
                anyhow::bail!(
                    "evaluators disagree with the scan baseline: {}",
                    disagreeing.join(", ")
                );
            }
        }
        Commands::Config => {
            config.validate()?;
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` overrides the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    // logs go to stderr so stdout stays machine-readable
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
