//! Competitive analysis CLI
//!
//! Operational entry point for the competitive analysis engine.
//!
//! # Commands
//!
//! - `compete analyze --input <file>` - Analyse a product against its competitors
//! - `compete report --input <file>` - Generate the Markdown report
//! - `compete sensitivity --input <file>` - Cost, price and sales sensitivity
//! - `compete check --input <file>` - Validate a scenario file

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use service_cli::commands;
use service_cli::config::{build_config, CliArgs, CliConfig};
use service_cli::input::ScenarioFile;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Competitive analysis CLI
#[derive(Parser)]
#[command(name = "compete")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "COMPETE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Display currency (USD, CNY, EUR)
    #[arg(long, global = true)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse the product against every competitor in the scenario
    Analyze {
        /// Path to the scenario file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Role view (retail, manufacturing)
        #[arg(short, long)]
        role: Option<String>,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Generate the complete Markdown report
    Report {
        /// Path to the scenario file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Role view (retail, manufacturing)
        #[arg(short, long)]
        role: Option<String>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print cost, price and sales sensitivity tables
    Sensitivity {
        /// Path to the scenario file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output format (table, csv, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Validate a scenario file without analysing it
    Check {
        /// Path to the scenario file (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config_file: cli.config.clone(),
        log_level: if cli.verbose {
            Some("debug".to_string())
        } else {
            cli.log_level.clone()
        },
        currency: cli.currency.clone(),
    };
    let config = build_config(&args).context("failed to load configuration")?;

    init_tracing(&config);
    debug!(?config, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Analyze { input, role, format } => {
            let scenario = ScenarioFile::load(&input)?;
            let role = config.role_or_default(role.as_deref())?;
            let format = config.format_or_default(format.as_deref())?;
            commands::analyze::run(&scenario, role, format, &config, &mut out)?;
        }
        Commands::Report { input, role, output } => {
            let scenario = ScenarioFile::load(&input)?;
            let role = config.role_or_default(role.as_deref())?;
            commands::report::run(&scenario, role, &config, output.as_deref(), &mut out)?;
        }
        Commands::Sensitivity { input, format } => {
            let scenario = ScenarioFile::load(&input)?;
            let format = config.format_or_default(format.as_deref())?;
            commands::sensitivity::run(&scenario, format, &mut out)?;
        }
        Commands::Check { input } => {
            let scenario = ScenarioFile::load(&input)?;
            commands::check::run(&scenario, &mut out)?;
        }
    }

    out.flush()?;
    info!("Done");
    Ok(())
}
