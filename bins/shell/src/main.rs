//! Docflow scenario runner
//!
//! Replays a scripted wizard session and prints the resulting state.
//!
//! ```text
//! docflow <scenario.json>
//! ```

mod scenario;

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docflow_core::wizard::{SessionSnapshot, WizardSession};
use docflow_shared::{AppConfig, AppError};

use crate::scenario::{Scenario, StepReport};

#[derive(Serialize)]
struct RunReport {
    steps: Vec<StepReport>,
    session: SessionSnapshot,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().map_err(AppError::from)?;

    // Initialize tracing; RUST_LOG wins over the configured filter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: docflow <scenario.json>")?;
    let scenario = Scenario::load(&path).await?;

    let mut session = WizardSession::from_config(&config).map_err(AppError::from)?;
    info!(
        session_id = %session.id(),
        tiers = session.catalog().tiers().len(),
        latency_ms = config.gateway.latency_ms,
        "Wizard session started"
    );

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let steps = scenario.replay(&mut session, base_dir).await?;

    let report = RunReport {
        steps,
        session: session.snapshot(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
