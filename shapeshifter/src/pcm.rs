//! PCM preview of a single wave
//!
//! A wave is one cycle; previews repeat it until the requested duration is
//! filled and play every sample directly as a 16-bit amplitude.

use std::io::{Cursor, Seek, Write};
use std::time::Duration;

use crate::error::{Result, ShapeshifterError};
use crate::model::Wave;

/// Preview sample rate in Hz
pub const DEFAULT_SAMPLE_RATE: u32 = 44000;

/// Preview length when none is requested
pub const DEFAULT_PLAY_DURATION: Duration = Duration::from_secs(5);

/// Most 16-bit mono samples a WAV data chunk can hold
pub const MAX_PREVIEW_SAMPLES: usize = (u32::MAX / 2) as usize;

/// Sample rate and length of a preview
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpec {
    pub sample_rate: u32,
    pub duration: Duration,
}

impl Default for PlaybackSpec {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration: DEFAULT_PLAY_DURATION,
        }
    }
}

/// Number of samples needed to fill the preview
pub fn sample_count(spec: &PlaybackSpec) -> usize {
    (spec.sample_rate as f64 * spec.duration.as_secs_f64()) as usize
}

/// Repeat the wave cyclically into `len` samples
pub fn tile_wave(wave: &Wave, len: usize) -> Vec<i16> {
    wave.samples().iter().copied().cycle().take(len).collect()
}

/// Write a mono 16-bit WAV preview
///
/// Fails with [`ShapeshifterError::PreviewTooLong`] before touching the sink
/// when the preview would not fit in a WAV file.
pub fn write_wav<W: Write + Seek>(sink: W, wave: &Wave, spec: &PlaybackSpec) -> Result<()> {
    let len = sample_count(spec);
    if len > MAX_PREVIEW_SAMPLES {
        return Err(ShapeshifterError::PreviewTooLong(len));
    }

    let wav_spec = hound::WavSpec {
        channels: 1,
        sample_rate: spec.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::new(sink, wav_spec)?;
    for &sample in wave.samples().iter().cycle().take(len) {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Build a WAV preview in memory
pub fn wav_bytes(wave: &Wave, spec: &PlaybackSpec) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_wav(Cursor::new(&mut bytes), wave, spec)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SAMPLES_PER_WAVE;

    fn ramp() -> Wave {
        let samples: Vec<i16> = (0..SAMPLES_PER_WAVE as i16).collect();
        Wave::from_samples(&samples)
    }

    #[test]
    fn test_tile_wave_repeats_cycle() {
        let tiled = tile_wave(&ramp(), 1300);
        assert_eq!(tiled.len(), 1300);
        assert_eq!(tiled[0], 0);
        assert_eq!(tiled[511], 511);
        assert_eq!(tiled[512], 0);
        assert_eq!(tiled[1299], (1299 % 512) as i16);
    }

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_count(&PlaybackSpec::default()), 220_000);
        let half = PlaybackSpec {
            sample_rate: 1000,
            duration: Duration::from_millis(500),
        };
        assert_eq!(sample_count(&half), 500);
    }

    #[test]
    fn test_wav_preview_decodes() {
        let spec = PlaybackSpec {
            sample_rate: 8000,
            duration: Duration::from_millis(100),
        };
        let bytes = wav_bytes(&ramp(), &spec).unwrap();

        let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.spec().sample_rate, 8000);
        assert_eq!(reader.spec().bits_per_sample, 16);
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples.len(), 800);
        assert_eq!(samples[513], 1);
    }

    #[test]
    fn test_oversized_preview_is_rejected() {
        let spec = PlaybackSpec {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration: Duration::from_secs_f32(1e15),
        };
        let mut bytes = Vec::new();
        let err = write_wav(Cursor::new(&mut bytes), &Wave::SILENT, &spec).unwrap_err();
        assert!(matches!(err, ShapeshifterError::PreviewTooLong(_)));
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_preview_just_over_wav_limit_is_rejected() {
        let spec = PlaybackSpec {
            sample_rate: 1,
            duration: Duration::from_secs(MAX_PREVIEW_SAMPLES as u64 + 1),
        };
        assert!(matches!(
            wav_bytes(&Wave::SILENT, &spec),
            Err(ShapeshifterError::PreviewTooLong(n)) if n == MAX_PREVIEW_SAMPLES + 1
        ));
    }
}
