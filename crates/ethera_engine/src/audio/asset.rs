//! Encoded sound data

use crate::assets::{Asset, AssetError};

/// Sound file bytes, kept encoded and decoded by the backend on playback
#[derive(Debug, Clone)]
pub struct AudioAsset {
    data: Vec<u8>,
    format: AudioFormat,
}

/// Audio container formats recognised from their magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// RIFF/WAVE
    Wav,
    /// Ogg Vorbis
    Ogg,
    /// MPEG layer 3
    Mp3,
    /// FLAC
    Flac,
    /// Anything else
    Unknown,
}

impl AudioAsset {
    /// Wrap already validated bytes
    pub fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// Encoded bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Detected container format
    pub fn format(&self) -> AudioFormat {
        self.format
    }

    /// Detect the container format from the first bytes of a file
    pub fn detect_format(bytes: &[u8]) -> AudioFormat {
        if bytes.len() < 4 {
            return AudioFormat::Unknown;
        }

        match &bytes[0..4] {
            b"RIFF" => AudioFormat::Wav,
            b"OggS" => AudioFormat::Ogg,
            b"fLaC" => AudioFormat::Flac,
            [0xFF, 0xFB, _, _] | [0xFF, 0xFA, _, _] | [b'I', b'D', b'3', _] => AudioFormat::Mp3,
            _ => AudioFormat::Unknown,
        }
    }
}

impl Asset for AudioAsset {
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        if bytes.is_empty() {
            return Err(AssetError::InvalidData("Empty audio file".to_string()));
        }

        match Self::detect_format(bytes) {
            AudioFormat::Unknown => Err(AssetError::UnsupportedFormat("Unknown audio format".to_string())),
            format => Ok(Self::new(bytes.to_vec(), format)),
        }
    }
}
