//! In-memory representation of a decoded dump

use std::borrow::Cow;

use crate::{NAME_LENGTH, NUM_BANKS, SAMPLES_PER_WAVE, WAVES_PER_BANK};

/// Raw bank name record
///
/// Stored verbatim; it is not required to be valid text.
pub type Name = [u8; NAME_LENGTH];

/// A single-cycle waveform of 512 signed 16-bit samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wave([i16; SAMPLES_PER_WAVE]);

impl Wave {
    /// A wave of all-zero samples
    pub const SILENT: Wave = Wave([0; SAMPLES_PER_WAVE]);

    pub fn new(samples: [i16; SAMPLES_PER_WAVE]) -> Self {
        Self(samples)
    }

    /// Build a wave from the first 512 samples of a slice, zero-padding short input
    pub fn from_samples(samples: &[i16]) -> Self {
        let mut wave = Self::SILENT;
        let len = samples.len().min(SAMPLES_PER_WAVE);
        wave.0[..len].copy_from_slice(&samples[..len]);
        wave
    }

    pub fn samples(&self) -> &[i16; SAMPLES_PER_WAVE] {
        &self.0
    }

    pub fn samples_mut(&mut self) -> &mut [i16; SAMPLES_PER_WAVE] {
        &mut self.0
    }
}

impl Default for Wave {
    fn default() -> Self {
        Self::SILENT
    }
}

impl From<[i16; SAMPLES_PER_WAVE]> for Wave {
    fn from(samples: [i16; SAMPLES_PER_WAVE]) -> Self {
        Self(samples)
    }
}

/// A named group of 8 waves
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bank {
    /// Raw 8-byte name record
    pub name: Name,
    /// Waves in slot order
    pub waves: [Wave; WAVES_PER_BANK],
}

impl Bank {
    pub fn new(name: Name, waves: [Wave; WAVES_PER_BANK]) -> Self {
        Self { name, waves }
    }

    /// Name rendered as text, with invalid UTF-8 replaced
    pub fn name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    pub fn wave(&self, index: usize) -> Option<&Wave> {
        self.waves.get(index)
    }

    pub fn wave_mut(&mut self, index: usize) -> Option<&mut Wave> {
        self.waves.get_mut(index)
    }
}

/// All 128 banks of a dump
///
/// A `Config` is always fully populated: it can only be built with exactly
/// [`NUM_BANKS`] banks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    banks: Vec<Bank>,
}

impl Config {
    /// A config of zeroed names and silent waves
    pub fn blank() -> Self {
        Self {
            banks: vec![Bank::default(); NUM_BANKS],
        }
    }

    /// Wrap banks produced by the decoder, which always reads all 128
    pub(crate) fn from_decoded(banks: Vec<Bank>) -> Self {
        debug_assert_eq!(banks.len(), NUM_BANKS);
        Self { banks }
    }

    pub fn banks(&self) -> &[Bank] {
        &self.banks
    }

    pub fn bank(&self, index: usize) -> Option<&Bank> {
        self.banks.get(index)
    }

    pub fn bank_mut(&mut self, index: usize) -> Option<&mut Bank> {
        self.banks.get_mut(index)
    }

    /// Look up one wave by bank and slot
    pub fn wave(&self, bank: usize, wave: usize) -> Option<&Wave> {
        self.bank(bank).and_then(|b| b.wave(wave))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bank> {
        self.banks.iter()
    }

    pub fn into_banks(self) -> Vec<Bank> {
        self.banks
    }
}

impl TryFrom<Vec<Bank>> for Config {
    type Error = Vec<Bank>;

    /// Fails, handing the banks back, unless exactly 128 are given
    fn try_from(banks: Vec<Bank>) -> Result<Self, Self::Error> {
        if banks.len() == NUM_BANKS {
            Ok(Self { banks })
        } else {
            Err(banks)
        }
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = &'a Bank;
    type IntoIter = std::slice::Iter<'a, Bank>;

    fn into_iter(self) -> Self::IntoIter {
        self.banks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_config_is_fully_populated() {
        let config = Config::blank();
        assert_eq!(config.banks().len(), NUM_BANKS);
        assert!(config.iter().all(|b| b.name == [0; NAME_LENGTH]));
        assert!(
            config
                .iter()
                .flat_map(|b| b.waves.iter())
                .all(|w| *w == Wave::SILENT)
        );
    }

    #[test]
    fn test_try_from_rejects_wrong_bank_count() {
        let err = Config::try_from(vec![Bank::default(); 127]).unwrap_err();
        assert_eq!(err.len(), 127);
        assert!(Config::try_from(vec![Bank::default(); NUM_BANKS]).is_ok());
    }

    #[test]
    fn test_out_of_range_lookups() {
        let config = Config::blank();
        assert!(config.bank(NUM_BANKS).is_none());
        assert!(config.wave(0, WAVES_PER_BANK).is_none());
        assert!(config.wave(NUM_BANKS - 1, WAVES_PER_BANK - 1).is_some());
    }

    #[test]
    fn test_wave_from_samples_pads_and_truncates() {
        let short = Wave::from_samples(&[1, 2, 3]);
        assert_eq!(&short.samples()[..4], &[1, 2, 3, 0]);

        let long: Vec<i16> = (0..600).map(|i| i as i16).collect();
        let wave = Wave::from_samples(&long);
        assert_eq!(wave.samples()[SAMPLES_PER_WAVE - 1], 511);
    }

    #[test]
    fn test_name_lossy() {
        let mut bank = Bank::default();
        bank.name = *b"SAW \xFFTRI";
        assert_eq!(bank.name_lossy(), "SAW \u{FFFD}TRI");
    }
}
