//! Render command - draw one wave as a PNG

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::dump::{self, WaveSelector};

/// Arguments for the render command
#[derive(Args)]
pub struct RenderArgs {
    /// Dump file to read
    pub dump: PathBuf,

    #[command(flatten)]
    pub select: WaveSelector,

    /// Output PNG file
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    args.select.validate()?;
    let config = dump::load(&args.dump)?;
    let wave = args.select.get(&config)?;

    let png = shapeshifter::encode_png(wave).context("Failed to render wave")?;
    fs::write(&args.output, png)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    tracing::info!(
        "Rendered bank {} wave {} to {}",
        args.select.bank,
        args.select.wave,
        args.output.display()
    );
    Ok(())
}
