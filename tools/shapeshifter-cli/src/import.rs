//! Import command - replace one wave with samples from a WAV file
//!
//! The WAV must be mono 16-bit integer PCM. Its first 512 samples become the
//! new wave; shorter files are padded with silence.

use anyhow::{Context, Result, bail};
use clap::Args;
use shapeshifter::{SAMPLES_PER_WAVE, Wave};
use std::path::{Path, PathBuf};

use crate::dump::{self, WaveSelector};

/// Arguments for the import command
#[derive(Args)]
pub struct ImportArgs {
    /// Dump file to edit
    pub dump: PathBuf,

    #[command(flatten)]
    pub select: WaveSelector,

    /// WAV file holding the new wave (mono, 16-bit)
    pub wav: PathBuf,

    /// Write the edited dump here instead of editing in place
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the import command
pub fn execute(args: ImportArgs) -> Result<()> {
    args.select.validate()?;
    let wave = load_wave(&args.wav)?;

    let mut config = dump::load(&args.dump)?;
    *args.select.get_mut(&mut config)? = wave;
    dump::save(&args.dump, args.output.as_deref(), &config)?;

    tracing::info!(
        "Imported {} into bank {} wave {}",
        args.wav.display(),
        args.select.bank,
        args.select.wave
    );
    Ok(())
}

/// Read a single-cycle wave from a mono 16-bit WAV file
fn load_wave(path: &Path) -> Result<Wave> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open WAV: {}", path.display()))?;
    let spec = reader.spec();

    if spec.channels != 1
        || spec.bits_per_sample != 16
        || spec.sample_format != hound::SampleFormat::Int
    {
        bail!(
            "Unsupported WAV format: {} bit {:?}, {} channels (expected 16 bit Int, mono)",
            spec.bits_per_sample,
            spec.sample_format,
            spec.channels
        );
    }

    let samples = reader
        .samples::<i16>()
        .take(SAMPLES_PER_WAVE)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to read samples: {}", path.display()))?;

    let total = reader.duration() as usize;
    if total < SAMPLES_PER_WAVE {
        tracing::warn!(
            "{} has {} samples, padding to {} with silence",
            path.display(),
            total,
            SAMPLES_PER_WAVE
        );
    } else if total > SAMPLES_PER_WAVE {
        tracing::warn!(
            "{} has {} samples, keeping the first {}",
            path.display(),
            total,
            SAMPLES_PER_WAVE
        );
    }

    Ok(Wave::from_samples(&samples))
}
