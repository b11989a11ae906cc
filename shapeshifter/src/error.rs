//! Error types for dump decoding, encoding and previews

use thiserror::Error;

/// Errors produced by this crate
///
/// The codec itself only ever returns [`ShapeshifterError::Io`]: the format
/// has no structure to validate beyond its fixed size, so a truncated or
/// unreadable dump surfaces as the medium's own error.
#[derive(Error, Debug)]
pub enum ShapeshifterError {
    /// Seek, read or write failure on the underlying medium
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// PNG encoding failure while rendering a wave
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    /// WAV encoding failure while building a preview
    #[error("WAV encoding error: {0}")]
    Wav(#[from] hound::Error),
    /// Requested preview holds more samples than a WAV file can store
    #[error("Preview of {0} samples exceeds the WAV size limit")]
    PreviewTooLong(usize),
}

impl ShapeshifterError {
    /// Whether this error means the dump ended before all data was consumed
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ShapeshifterError>;
