//! bulk-import - batch import of catalog products
//!
//! Reads product records from a JSON array or JSON Lines file and writes them
//! to the database in batches. Prints a JSON report on stdout.

#![allow(missing_docs)]

use anyhow::Context;
use bulk_ops::config::Config;
use bulk_ops::import::{ImportMode, ProductImporter, load_records};
use bulk_ops::storage::Database;
use bulk_ops::utils::LoggingUtils;
use bulk_ops::{BatchProcessor, ProcessorConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "bulk-import", version, about = "Import catalog products in batches")]
struct Cli {
    /// JSON array or JSON Lines file of product records
    #[arg(short, long)]
    input: PathBuf,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database URL, e.g. sqlite://catalog.db?mode=rwc
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Items per batch
    #[arg(long)]
    batch_size: Option<usize>,

    /// Batches running at once (each mode only)
    #[arg(long)]
    max_concurrent: Option<usize>,

    /// atomic: one transaction per batch; each: every record on its own
    #[arg(long, value_enum, default_value_t = ImportMode::Atomic)]
    mode: ImportMode,

    /// Log filter directive, e.g. info or bulk_ops=debug
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    /// Apply flags over file and environment values, then validate
    fn resolve(&self, mut config: Config) -> bulk_ops::Result<Config> {
        self.apply(&mut config);
        config.finish()
    }

    fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.database_url {
            config.database.url = url.clone();
        }
        if let Some(batch_size) = self.batch_size {
            config.processor.batch_size = batch_size;
        }
        if let Some(max_concurrent) = self.max_concurrent {
            config.processor.max_concurrent = max_concurrent;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.json_logs {
            config.logging.json = true;
        }
    }
}

async fn load_config(cli: &Cli) -> bulk_ops::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::default(),
    };
    config.apply_env()?;
    cli.resolve(config)
}

/// Returns whether every record was imported
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = load_config(&cli).await.context("Invalid configuration")?;
    LoggingUtils::init_logger(&config.logging)?;
    match &cli.config {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => info!("Using default configuration"),
    }
    debug!(?config, "Effective configuration");

    let started = Instant::now();
    let records = load_records(&cli.input)
        .await
        .with_context(|| format!("Failed to load records from {}", cli.input.display()))?;

    let db = Database::open(&config.database)
        .await
        .context("Failed to open database")?;

    let processor = BatchProcessor::new(
        ProcessorConfig::from_settings(&config.processor).on_batch_complete(|batch| {
            info!(
                "Batch {} done: {} imported, {} failed",
                batch.batch_number, batch.succeeded, batch.failed
            );
        }),
    )?;

    let report = ProductImporter::new(db, processor)
        .import(records, cli.mode)
        .await;

    info!(
        "Import took {}",
        LoggingUtils::format_duration(started.elapsed())
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(report.is_success())
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
