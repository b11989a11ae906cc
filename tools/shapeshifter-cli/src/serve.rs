//! Serve command - browse a dump in a web browser

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::ViewerSettings;
use crate::dump;
use crate::viewer::{self, ViewerState};

/// Arguments for the serve command
#[derive(Args)]
pub struct ServeArgs {
    /// Dump file to serve
    pub dump: PathBuf,

    /// Viewer settings file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen address, overriding the settings file
    #[arg(long)]
    pub bind: Option<String>,
}

/// Execute the serve command
pub fn execute(args: ServeArgs) -> Result<()> {
    let mut settings = match &args.config {
        Some(path) => ViewerSettings::load(path)?,
        None => ViewerSettings::default(),
    };
    if let Some(bind) = args.bind {
        settings.bind = bind;
    }

    let config = dump::load(&args.dump)?;
    let state = ViewerState::new(config, settings.clone());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(run(state, &settings.bind))
}

async fn run(state: ViewerState, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    tracing::info!("Viewer listening on http://{}", listener.local_addr()?);

    axum::serve(listener, viewer::router(state))
        .await
        .context("Viewer server failed")
}
