//! cubepeel - swipe and hit resolution for an AR rotating-cube puzzle
//!
//! Headless replay of scripted interactions: each scripted swipe and hit is
//! resolved to a face and classified as a peel or a rotation, and the result
//! is written as newline-delimited JSON.

mod config;
mod interaction_log;
mod replay;
mod script;

use anyhow::Result;
use clap::Parser;
use config::InteractionConfig;
use replay::ReplayConfig;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay cube swipe interactions headlessly", long_about = None)]
struct Args {
    /// Interaction script (JSON)
    #[arg(short, long)]
    script: PathBuf,

    /// Face layout (JSON); the standard six-face cube if omitted
    #[arg(long)]
    faces: Option<PathBuf>,

    /// Interaction settings (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective settings to this path (TOML)
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Output log (JSONL); stdout if omitted
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting cubepeel v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let interaction = match &args.config {
        Some(path) => InteractionConfig::load_from_path(path),
        None => InteractionConfig::load(),
    };

    if let Some(path) = &args.save_config {
        interaction.save_to_path(path)?;
        info!(path = %path.display(), "Saved interaction settings");
    }

    replay::run(ReplayConfig {
        interaction,
        faces: args.faces,
        script: args.script,
        out: args.out,
    })?;

    Ok(())
}
