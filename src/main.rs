//! Headless board driver
//!
//! Reads UI events as JSON lines on stdin and prints the resulting render
//! instructions as JSON lines on stdout. Logs go to stderr.

use anyhow::Context;
use clap::Parser;
use project_board::{driver, App, AppConfig};
use std::path::PathBuf;
use tokio::io::{self, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "project-board")]
#[command(version)]
#[command(about = "Drive the project board with JSON events on stdin")]
struct Cli {
    /// JSON config file (missing file means defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .await
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    let mut app = App::new(config);
    let summary = driver::run_session(&mut app, BufReader::new(io::stdin()), &mut io::stdout())
        .await
        .context("board session failed")?;
    tracing::debug!(?summary, "Session finished");
    Ok(())
}
