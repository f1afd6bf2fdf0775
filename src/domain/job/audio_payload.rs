//! Audio payload value object

use std::fmt;
use std::path::Path;

/// Content type used when the audio format cannot be recognised
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Audio formats recognised from file extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioMimeType {
    Flac,
    Mp3,
    Wav,
    Ogg,
    Webm,
    Mp4,
    M4a,
}

impl AudioMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flac => "audio/flac",
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::Ogg => "audio/ogg",
            Self::Webm => "audio/webm",
            Self::Mp4 => "audio/mp4",
            Self::M4a => "audio/x-m4a",
        }
    }

    /// Look up a format by file extension (case-insensitive, without the dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "flac" => Some(Self::Flac),
            "mp3" | "mpeg" | "mpga" => Some(Self::Mp3),
            "wav" | "wave" => Some(Self::Wav),
            "ogg" | "oga" | "opus" => Some(Self::Ogg),
            "webm" => Some(Self::Webm),
            "mp4" => Some(Self::Mp4),
            "m4a" => Some(Self::M4a),
            _ => None,
        }
    }

    /// Guess the format of a file from its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for AudioMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw audio bytes plus the content type declared by the caller.
/// The orchestrator only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    data: Vec<u8>,
    content_type: String,
}

impl AudioPayload {
    /// Create a payload with an explicit content type
    pub fn new(data: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            data,
            content_type: content_type.into(),
        }
    }

    /// Create a payload for a recognised audio format
    pub fn with_mime(data: Vec<u8>, mime_type: AudioMimeType) -> Self {
        Self::new(data, mime_type.as_str())
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
