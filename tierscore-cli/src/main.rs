//! tierscore CLI - command-line interface for investment tier classification

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output
// - Diagnostics go to stderr, results to stdout

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tierscore_core::config::{self, ResolvedConfig};
use tierscore_core::{
    classify_matrix, classify_report, render_document, render_json, render_text, CategoryMode,
    MatrixOptions, ScoringInput, Tier,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tierscore")]
#[command(about = "Deterministic investment tier classifier")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single industry / size / risk triple
    Classify {
        /// Industry (manufacturing, technology, logistics, finance, healthcare, energy)
        #[arg(long)]
        industry: String,

        /// Investment size (small, medium, large, enterprise)
        #[arg(long)]
        size: String,

        /// Risk tolerance (low, medium, high)
        #[arg(long)]
        risk: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: ClassifyFormat,

        /// Map unknown categories to the default multiplier instead of failing
        #[arg(long)]
        lenient: bool,

        /// Path to config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Classify every valid input triple
    Matrix {
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Show only top N results
        #[arg(long)]
        top: Option<NonZeroUsize>,

        /// Minimum composite score
        #[arg(long)]
        min_score: Option<u32>,

        /// Only show this tier
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
        tier: Option<u8>,

        /// Path to config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate and print the resolved configuration
    Config {
        /// Path to config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ClassifyFormat {
    Text,
    Json,
    Document,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Classify {
            industry,
            size,
            risk,
            format,
            lenient,
            config,
        } => {
            let resolved = load_config(&cwd, config.as_deref())?;
            let mode = if lenient {
                CategoryMode::Lenient
            } else {
                resolved.category_mode
            };

            let input = ScoringInput::parse(&industry, &size, &risk, mode)
                .context("failed to parse scoring input")?;
            let report = classify_report(input, &resolved.model());
            tracing::info!(
                industry = %input.industry,
                size = %input.investment_size,
                risk = %input.risk_tolerance,
                score = report.result.composite_score,
                tier = report.result.tier.as_str(),
                "classified"
            );

            match format {
                ClassifyFormat::Text => {
                    print!("{}", render_text(std::slice::from_ref(&report)));
                }
                ClassifyFormat::Json => {
                    println!("{}", render_json(std::slice::from_ref(&report)));
                }
                ClassifyFormat::Document => {
                    print!("{}", render_document(&report));
                }
            }
        }
        Commands::Matrix {
            format,
            top,
            min_score,
            tier,
            config,
        } => {
            let resolved = load_config(&cwd, config.as_deref())?;

            let options = MatrixOptions {
                min_score,
                tier: tier.and_then(Tier::from_number),
                top_n: top.map(NonZeroUsize::get),
            }
            .merge(&resolved);

            let reports = classify_matrix(&resolved.model(), &options);
            tracing::info!(count = reports.len(), "matrix classified");

            match format {
                OutputFormat::Text => {
                    print!("{}", render_text(&reports));
                }
                OutputFormat::Json => {
                    println!("{}", render_json(&reports));
                }
            }
        }
        Commands::Config { config } => {
            let resolved = load_config(&cwd, config.as_deref())?;
            if resolved.config_path.is_none() {
                eprintln!("No config file found, showing defaults");
            }
            println!("{}", resolved.to_json()?);
        }
    }

    Ok(())
}

/// Initialize tracing on stderr; RUST_LOG overrides the verbosity flag
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load config from an explicit path or discover it in `dir`
fn load_config(dir: &Path, config_path: Option<&Path>) -> anyhow::Result<ResolvedConfig> {
    if let Some(path) = config_path {
        if !path.exists() {
            anyhow::bail!("Config file does not exist: {}", path.display());
        }
    }
    config::load_and_resolve(dir, config_path).context("failed to load configuration")
}
