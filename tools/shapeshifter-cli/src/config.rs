//! Viewer settings file parsing
//!
//! ```toml
//! bind = "0.0.0.0:8080"
//! sample_rate = 44000
//! default_duration_secs = 5.0
//! max_duration_secs = 60.0
//! ```
//!
//! Every field is optional.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use shapeshifter::PlaybackSpec;
use std::path::Path;
use std::time::Duration;

/// Settings for the web viewer
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewerSettings {
    /// Address the HTTP server listens on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Sample rate of audio previews in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Preview length when a request does not give one
    #[serde(default = "default_duration_secs")]
    pub default_duration_secs: f32,

    /// Longest preview a request may ask for
    #[serde(default = "default_max_duration_secs")]
    pub max_duration_secs: f32,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_sample_rate() -> u32 {
    shapeshifter::DEFAULT_SAMPLE_RATE
}

fn default_duration_secs() -> f32 {
    shapeshifter::DEFAULT_PLAY_DURATION.as_secs_f32()
}

fn default_max_duration_secs() -> f32 {
    60.0
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            sample_rate: default_sample_rate(),
            default_duration_secs: default_duration_secs(),
            max_duration_secs: default_max_duration_secs(),
        }
    }
}

impl ViewerSettings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        let settings: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            bail!("sample_rate must be greater than zero");
        }
        if !(self.default_duration_secs > 0.0 && self.default_duration_secs.is_finite()) {
            bail!("default_duration_secs must be a positive number");
        }
        if !(self.max_duration_secs >= self.default_duration_secs
            && self.max_duration_secs.is_finite())
        {
            bail!("max_duration_secs must be at least default_duration_secs");
        }
        Ok(())
    }

    /// Playback parameters for a requested duration
    ///
    /// Missing, non-positive or non-numeric requests fall back to the
    /// default; long ones are clamped to the maximum.
    pub fn playback(&self, requested_secs: Option<f32>) -> PlaybackSpec {
        let secs = requested_secs
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(self.default_duration_secs)
            .min(self.max_duration_secs);
        PlaybackSpec {
            sample_rate: self.sample_rate,
            duration: Duration::from_secs_f32(secs),
        }
    }
}
