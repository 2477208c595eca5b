use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use tokio::io::BufReader;
use tracing::Instrument;
use tracing_subscriber::EnvFilter;

use aftercare_cli::{aws, config, repl};
use aftercare_engine::engine::AssessmentEngine;

/// Guided post-incident check-in, run in the terminal.
#[derive(Debug, Parser)]
#[command(name = "aftercare", version)]
struct Args {
    /// Config file (defaults to the platform config directory).
    #[arg(long, env = "AFTERCARE_CONFIG")]
    config: Option<PathBuf>,

    /// Write a default config file and exit.
    #[arg(long)]
    init_config: bool,

    /// Emit logs as JSON.
    #[arg(long, env = "AFTERCARE_LOG_JSON")]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.log_json);

    if args.init_config {
        let path = match args.config {
            Some(path) => path,
            None => config::default_config_path()?,
        };
        config::save_config(&config::AftercareConfig::default(), &path)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let config = config::load_config(args.config.as_deref())?;
    tracing::info!(config = %config::describe(&config), "config loaded");

    let phraser = aws::build_phraser(&config).await;
    let engine = AssessmentEngine::new(phraser).with_phrasing_timeout(config.phrasing_timeout());

    let session_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("session", id = %session_id);

    let input = BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();
    let report = repl::run_conversation(&engine, input, output)
        .instrument(span)
        .await?;

    match report {
        Some(report) => tracing::info!(profile = ?report.profile, "session finished"),
        None => tracing::info!("input closed before the assessment finished"),
    }
    Ok(())
}
