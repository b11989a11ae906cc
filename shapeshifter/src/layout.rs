//! Fixed region layout of a dump

use crate::{NAME_LENGTH, NUM_BANKS, WAVE_BYTES, WAVES_PER_BANK};

/// Where the name and waveform regions start in a dump
///
/// Counts and record sizes are format constants shared by every layout;
/// only the region offsets vary between device variants. The counts are
/// fixed on purpose: [`Config`](crate::Config), [`Bank`](crate::Bank) and
/// [`Wave`](crate::Wave) are sized by them, so a layout cannot change them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Absolute offset of the first bank name record
    pub names_offset: u64,
    /// Absolute offset of the first sample of bank 0, wave 0
    pub waves_offset: u64,
}

impl Layout {
    /// Layout of the production module's memory dump
    pub const SHAPESHIFTER: Layout = Layout {
        names_offset: 0x0F00AB,
        waves_offset: 0x1000AB,
    };

    /// Size of the names region in bytes
    pub const fn names_len(&self) -> u64 {
        (NUM_BANKS * NAME_LENGTH) as u64
    }

    /// Size of the waveform region in bytes
    pub const fn waves_len(&self) -> u64 {
        (NUM_BANKS * WAVES_PER_BANK * WAVE_BYTES) as u64
    }

    /// Absolute offset of a bank's name record
    pub const fn name_offset(&self, bank: usize) -> u64 {
        self.names_offset + (bank * NAME_LENGTH) as u64
    }

    /// Absolute offset of one wave's first sample
    pub const fn wave_offset(&self, bank: usize, wave: usize) -> u64 {
        self.waves_offset + ((bank * WAVES_PER_BANK + wave) * WAVE_BYTES) as u64
    }

    /// Smallest dump size that contains both regions
    pub const fn min_dump_len(&self) -> u64 {
        let names_end = self.names_offset + self.names_len();
        let waves_end = self.waves_offset + self.waves_len();
        if names_end > waves_end {
            names_end
        } else {
            waves_end
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::SHAPESHIFTER
    }
}
