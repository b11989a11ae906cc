//! Banks command - list the bank names in a dump

use anyhow::Result;
use clap::Args;
use shapeshifter::Config;
use std::path::PathBuf;

use crate::dump;

/// Arguments for the banks command
#[derive(Args)]
pub struct BanksArgs {
    /// Dump file to read
    pub dump: PathBuf,
}

/// Execute the banks command
pub fn execute(args: BanksArgs) -> Result<()> {
    let config = dump::load(&args.dump)?;
    for line in listing(&config) {
        println!("{line}");
    }
    Ok(())
}

/// One `index: name` line per bank
fn listing(config: &Config) -> Vec<String> {
    config
        .iter()
        .enumerate()
        .map(|(i, bank)| format!("{:3}: {}", i, bank.name_lossy()))
        .collect()
}
