//! Dump encoding

use std::io::{Seek, SeekFrom, Write};

use crate::bitrev::BitReversing;
use crate::error::Result;
use crate::layout::Layout;
use crate::model::{Config, Wave};
use crate::WAVE_BYTES;

/// Encode a config into a dump using the production layout
///
/// Only the names and waveform regions are written; every other byte of
/// `sink` is left as it was. To patch an existing dump, open it for writing
/// without truncating.
///
/// On error the sink's contents are unspecified. No rollback is attempted.
pub fn write_config<W: Write + Seek>(sink: W, config: &Config) -> Result<()> {
    write_config_with(&Layout::SHAPESHIFTER, sink, config)
}

/// Encode a config into a dump laid out according to `layout`
pub fn write_config_with<W: Write + Seek>(layout: &Layout, sink: W, config: &Config) -> Result<()> {
    let mut sink = BitReversing::new(sink);

    tracing::debug!(
        names_offset = layout.names_offset,
        waves_offset = layout.waves_offset,
        "encoding dump"
    );

    sink.seek(SeekFrom::Start(layout.names_offset))?;
    for bank in config {
        sink.write_all(&bank.name)?;
    }

    sink.seek(SeekFrom::Start(layout.waves_offset))?;
    for bank in config {
        for wave in &bank.waves {
            write_wave(&mut sink, wave)?;
        }
    }

    sink.flush()?;
    tracing::debug!(banks = config.banks().len(), "encoded dump");
    Ok(())
}

/// Write 512 samples little-endian
pub(crate) fn write_wave<W: Write>(sink: &mut W, wave: &Wave) -> Result<()> {
    let mut bytes = [0u8; WAVE_BYTES];
    for (chunk, sample) in bytes.chunks_exact_mut(2).zip(wave.samples()) {
        chunk.copy_from_slice(&sample.to_le_bytes());
    }
    sink.write_all(&bytes)?;
    Ok(())
}
