//! ACTES drop transmitter binary.
//!
//! Run with: `actes-drop --config config.yaml transmit ...`
//!
//! Stands in for the upstream form handler: reads the act documents from
//! disk and drives one synchronous transmission or cancellation.

use actes_drop::{ActSubmission, CancellationRequest, DropConfig, DropService};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// File-drop transmitter for ACTES legal-act teletransmission.
///
/// Assembles the business document, webservice envelope, and attachments
/// under the staging root, then publishes the set into the watched drop
/// directory with a completion sentinel.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML)
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transmit one act with its signed deliberation and annexes
    Transmit {
        /// Deliberation number (e.g. ODS000000000074)
        #[arg(long)]
        number: String,

        /// Object text of the act
        #[arg(long)]
        object: String,

        /// Path to the signed final deliberation
        #[arg(long)]
        main_document: PathBuf,

        /// Annex file, repeatable; order drives the on-disk numbering
        #[arg(long = "annex")]
        annexes: Vec<PathBuf>,

        /// First classification code
        #[arg(long)]
        matiere1: u32,

        /// Second classification code
        #[arg(long)]
        matiere2: u32,

        /// Use the municipal organization profile
        #[arg(long)]
        municipal: bool,

        /// Decision timestamp (RFC 3339, e.g. 2009-07-07T00:00:00Z)
        #[arg(long)]
        decision_date: DateTime<Utc>,
    },

    /// Transmit a cancellation notice for a previously sent act
    Cancel {
        /// Deliberation number of the act to cancel
        #[arg(long)]
        number: String,

        /// Use the municipal organization profile
        #[arg(long)]
        municipal: bool,

        /// Decision timestamp of the original act (RFC 3339)
        #[arg(long)]
        decision_date: DateTime<Utc>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = args.log_level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = if args.config.exists() {
        let content = fs::read_to_string(&args.config).context("Failed to read config file")?;
        serde_yaml::from_str(&content).context("Failed to parse config file")?
    } else {
        info!("Config file not found, using defaults");
        DropConfig::default()
    };

    let service = DropService::new(config);

    let sent = match args.command {
        Command::Transmit {
            number,
            object,
            main_document,
            annexes,
            matiere1,
            matiere2,
            municipal,
            decision_date,
        } => {
            let main_bytes = fs::read(&main_document)
                .with_context(|| format!("Failed to read {}", main_document.display()))?;
            let mut annex_bytes = Vec::with_capacity(annexes.len());
            for path in &annexes {
                annex_bytes.push(
                    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?,
                );
            }

            service.send_act(&ActSubmission {
                internal_number: number,
                object_text: object,
                matiere1,
                matiere2,
                is_municipal: municipal,
                decision_date,
                main_document: main_bytes,
                annexes: annex_bytes,
            })?
        }
        Command::Cancel {
            number,
            municipal,
            decision_date,
        } => service.send_cancellation(&CancellationRequest {
            internal_number: number,
            is_municipal: municipal,
            decision_date,
        })?,
    };

    if !sent {
        bail!("staging directory could not be created, nothing was transmitted");
    }

    Ok(())
}
