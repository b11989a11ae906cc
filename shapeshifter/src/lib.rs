//! Shapeshifter: reader and writer for the wavetable module's memory dump
//!
//! The module stores 128 named banks of 8 single-cycle waveforms in a raw
//! memory dump. This crate decodes that dump into a [`Config`], lets callers
//! edit it in memory, and encodes it back so that an unmodified config
//! reproduces the original bytes exactly.
//!
//! # Dump Layout
//!
//! ```text
//! 0x0F00AB  bank names     128 x 8 bytes, raw
//! 0x1000AB  waveform data  128 banks x 8 waves x 512 samples, i16 little-endian
//! ```
//!
//! Every byte in both regions is stored with its bit order reversed
//! (bit 7 <-> bit 0). Nothing else in the dump is touched.
//!
//! # Usage
//!
//! ```ignore
//! use std::fs::File;
//! use shapeshifter::{read_config, write_config};
//!
//! let mut config = read_config(File::open("dump.bin")?)?;
//! println!("Bank 0: {}", config.banks()[0].name_lossy());
//!
//! config.bank_mut(0).unwrap().wave_mut(3).unwrap().samples_mut().fill(0);
//!
//! let out = std::fs::OpenOptions::new().read(true).write(true).open("dump.bin")?;
//! write_config(out, &config)?;
//! ```

mod bitrev;
mod codec;
mod error;
mod layout;
mod model;
mod pcm;
mod render;

pub use bitrev::{BitReversing, REVERSE_BITS, reverse_byte};
pub use codec::{read_config, read_config_with, write_config, write_config_with};
pub use error::{Result, ShapeshifterError};
pub use layout::Layout;
pub use model::{Bank, Config, Name, Wave};
pub use pcm::{
    DEFAULT_PLAY_DURATION, DEFAULT_SAMPLE_RATE, MAX_PREVIEW_SAMPLES, PlaybackSpec, sample_count,
    tile_wave, wav_bytes, write_wav,
};
pub use render::{IMAGE_HEIGHT, IMAGE_WIDTH, draw_wave, encode_png, sample_to_y};

// =============================================================================
// Format Constants
// =============================================================================

/// Number of banks in a dump
pub const NUM_BANKS: usize = 128;

/// Number of waves in each bank
pub const WAVES_PER_BANK: usize = 8;

/// Number of samples in each wave
pub const SAMPLES_PER_WAVE: usize = 512;

/// Length of a bank name record in bytes
pub const NAME_LENGTH: usize = 8;

/// Encoded size of one wave in bytes
pub const WAVE_BYTES: usize = SAMPLES_PER_WAVE * 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(NUM_BANKS * WAVES_PER_BANK, 1024);
        assert_eq!(WAVE_BYTES, 1024);
        assert_eq!(NAME_LENGTH, 8);
    }
}
