//! Play command - export one wave as a looping WAV preview

use anyhow::{Context, Result, bail};
use clap::Args;
use shapeshifter::{DEFAULT_SAMPLE_RATE, MAX_PREVIEW_SAMPLES, PlaybackSpec};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Duration;

use crate::dump::{self, WaveSelector};

/// Arguments for the play command
#[derive(Args)]
pub struct PlayArgs {
    /// Dump file to read
    pub dump: PathBuf,

    #[command(flatten)]
    pub select: WaveSelector,

    /// Preview length in seconds
    #[arg(long, default_value_t = 5.0)]
    pub duration: f32,

    /// Playback sample rate in Hz
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    pub sample_rate: u32,

    /// Output WAV file
    #[arg(short, long, default_value = "preview.wav")]
    pub output: PathBuf,
}

/// Execute the play command
pub fn execute(args: PlayArgs) -> Result<()> {
    args.select.validate()?;
    if args.duration <= 0.0 {
        bail!("Duration must be a positive number of seconds");
    }
    let duration = Duration::try_from_secs_f32(args.duration)
        .with_context(|| format!("Invalid duration: {}", args.duration))?;
    if args.sample_rate == 0 {
        bail!("Sample rate must be greater than zero");
    }

    let config = dump::load(&args.dump)?;
    let wave = args.select.get(&config)?;

    let spec = PlaybackSpec {
        sample_rate: args.sample_rate,
        duration,
    };
    let samples = shapeshifter::sample_count(&spec);
    if samples > MAX_PREVIEW_SAMPLES {
        bail!(
            "Preview of {} samples is longer than a WAV file can hold ({} max)",
            samples,
            MAX_PREVIEW_SAMPLES
        );
    }

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    shapeshifter::write_wav(BufWriter::new(file), wave, &spec)
        .context("Failed to write WAV preview")?;

    tracing::info!(
        "Wrote {} samples at {} Hz to {}",
        samples,
        spec.sample_rate,
        args.output.display()
    );
    Ok(())
}
