//! Dump decoding

use std::io::{Read, Seek, SeekFrom};

use crate::bitrev::BitReversing;
use crate::error::Result;
use crate::layout::Layout;
use crate::model::{Bank, Config, Name, Wave};
use crate::{NAME_LENGTH, NUM_BANKS, SAMPLES_PER_WAVE, WAVE_BYTES};

/// Decode a dump using the production layout
///
/// # Arguments
/// * `source` - Seekable dump; pass `&mut file` to keep ownership
///
/// # Returns
/// * `Ok(Config)` - All 128 banks, names verbatim
/// * `Err(ShapeshifterError::Io)` - Seek or read failure, including a dump
///   that ends before the waveform region is fully consumed
///
/// # Example
/// ```ignore
/// let config = read_config(std::io::BufReader::new(File::open("dump.bin")?))?;
/// ```
pub fn read_config<R: Read + Seek>(source: R) -> Result<Config> {
    read_config_with(&Layout::SHAPESHIFTER, source)
}

/// Decode a dump laid out according to `layout`
///
/// Nothing is returned unless every name and every wave was read.
pub fn read_config_with<R: Read + Seek>(layout: &Layout, source: R) -> Result<Config> {
    let mut source = BitReversing::new(source);

    tracing::debug!(
        names_offset = layout.names_offset,
        waves_offset = layout.waves_offset,
        "decoding dump"
    );

    source.seek(SeekFrom::Start(layout.names_offset))?;
    let mut banks = Vec::with_capacity(NUM_BANKS);
    for _ in 0..NUM_BANKS {
        banks.push(Bank::new(read_name(&mut source)?, Default::default()));
    }

    source.seek(SeekFrom::Start(layout.waves_offset))?;
    for bank in &mut banks {
        for wave in &mut bank.waves {
            *wave = read_wave(&mut source)?;
        }
    }

    tracing::debug!(banks = banks.len(), "decoded dump");

    Ok(Config::from_decoded(banks))
}

/// Read one 8-byte name record verbatim
fn read_name<R: Read>(source: &mut R) -> Result<Name> {
    let mut name = [0u8; NAME_LENGTH];
    source.read_exact(&mut name)?;
    Ok(name)
}

/// Read 512 little-endian samples
pub(crate) fn read_wave<R: Read>(source: &mut R) -> Result<Wave> {
    let mut bytes = [0u8; WAVE_BYTES];
    source.read_exact(&mut bytes)?;

    let mut samples = [0i16; SAMPLES_PER_WAVE];
    for (sample, chunk) in samples.iter_mut().zip(bytes.chunks_exact(2)) {
        *sample = i16::from_le_bytes([chunk[0], chunk[1]]);
    }
    Ok(Wave::new(samples))
}
