//! Loading and saving dump files
//!
//! Shared by every command that reads or edits a dump.

use anyhow::{Context, Result, bail};
use clap::Args;
use shapeshifter::{Config, NUM_BANKS, WAVES_PER_BANK, Wave, read_config, write_config};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Selects one wave slot in a dump
#[derive(Args, Debug, Clone, Copy)]
pub struct WaveSelector {
    /// Bank index (0-127)
    #[arg(short, long)]
    pub bank: usize,

    /// Wave index within the bank (0-7)
    #[arg(short, long)]
    pub wave: usize,
}

impl WaveSelector {
    /// Check both indices against the format's fixed counts
    pub fn validate(&self) -> Result<()> {
        check_bank(self.bank)?;
        if self.wave >= WAVES_PER_BANK {
            bail!(
                "Wave index {} out of range (0-{})",
                self.wave,
                WAVES_PER_BANK - 1
            );
        }
        Ok(())
    }

    /// Look up the selected wave
    pub fn get<'a>(&self, config: &'a Config) -> Result<&'a Wave> {
        self.validate()?;
        config
            .wave(self.bank, self.wave)
            .with_context(|| format!("No wave {} in bank {}", self.wave, self.bank))
    }

    pub fn get_mut<'a>(&self, config: &'a mut Config) -> Result<&'a mut Wave> {
        self.validate()?;
        config
            .bank_mut(self.bank)
            .and_then(|b| b.wave_mut(self.wave))
            .with_context(|| format!("No wave {} in bank {}", self.wave, self.bank))
    }
}

/// Check a bank index against the format's bank count
pub fn check_bank(bank: usize) -> Result<()> {
    if bank >= NUM_BANKS {
        bail!("Bank index {} out of range (0-{})", bank, NUM_BANKS - 1);
    }
    Ok(())
}

/// Decode a dump file
pub fn load(path: &Path) -> Result<Config> {
    let file =
        File::open(path).with_context(|| format!("Failed to open dump: {}", path.display()))?;
    let config = read_config(BufReader::new(file))
        .with_context(|| format!("Failed to decode dump: {}", path.display()))?;
    tracing::debug!("Loaded {} banks from {}", config.banks().len(), path.display());
    Ok(config)
}

/// Write an edited config back out
///
/// With no `output` the input dump is patched in place. Otherwise the input
/// is copied first so everything outside the codec's regions is preserved.
pub fn save(input: &Path, output: Option<&Path>, config: &Config) -> Result<PathBuf> {
    let target = match output {
        Some(out) if out != input => {
            fs::copy(input, out).with_context(|| {
                format!("Failed to copy {} to {}", input.display(), out.display())
            })?;
            out.to_path_buf()
        }
        _ => input.to_path_buf(),
    };

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(&target)
        .with_context(|| format!("Failed to open {} for writing", target.display()))?;
    write_config(BufWriter::new(file), config)
        .with_context(|| format!("Failed to write dump: {}", target.display()))?;

    tracing::info!("Wrote {}", target.display());
    Ok(target)
}
