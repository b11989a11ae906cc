//! Rename command - change a bank name
//!
//! Names are stored as exactly 8 raw bytes. Shorter names are padded with
//! spaces here; the codec never pads or truncates on its own.

use anyhow::{Result, bail};
use clap::Args;
use shapeshifter::{NAME_LENGTH, Name};
use std::path::PathBuf;

use crate::dump;

/// Arguments for the rename command
#[derive(Args)]
pub struct RenameArgs {
    /// Dump file to edit
    pub dump: PathBuf,

    /// Bank index (0-127)
    #[arg(short, long)]
    pub bank: usize,

    /// New name, at most 8 bytes
    pub name: String,

    /// Write the edited dump here instead of editing in place
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the rename command
pub fn execute(args: RenameArgs) -> Result<()> {
    dump::check_bank(args.bank)?;
    let name = pad_name(&args.name)?;

    let mut config = dump::load(&args.dump)?;
    let Some(bank) = config.bank_mut(args.bank) else {
        bail!("No bank {}", args.bank);
    };
    let old = bank.name_lossy().into_owned();
    bank.name = name;
    dump::save(&args.dump, args.output.as_deref(), &config)?;

    tracing::info!("Renamed bank {} from {:?} to {:?}", args.bank, old, args.name);
    Ok(())
}

/// Space-pad a name to the record length
fn pad_name(name: &str) -> Result<Name> {
    let bytes = name.as_bytes();
    if bytes.len() > NAME_LENGTH {
        bail!(
            "Name {:?} is {} bytes, the limit is {}",
            name,
            bytes.len(),
            NAME_LENGTH
        );
    }
    let mut record = [b' '; NAME_LENGTH];
    record[..bytes.len()].copy_from_slice(bytes);
    Ok(record)
}
