mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kunai_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kunai")]
#[command(about = "Check and normalise iCalendar events and to-dos", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode every VEVENT/VTODO and report mapping or validation problems
    Check {
        /// iCalendar file, or "-" for stdin
        file: PathBuf,
    },
    /// Decode, validate and re-encode a calendar to stdout
    Normalize {
        /// iCalendar file, or "-" for stdin
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    // stdout carries normalised output, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    tracing::debug!(config = ?config, "Configuration loaded");

    match cli.command {
        Commands::Check { file } => {
            let input = commands::read_input(&file)?;
            let report = commands::check::run(&input)?;
            print!("{report}");
            Ok(if report.is_clean() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Normalize { file } => {
            let input = commands::read_input(&file)?;
            print!("{}", commands::normalize::run(&input, &config.codec)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
