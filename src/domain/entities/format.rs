use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Attachment format carried by multimedia messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileFormat {
    Mp3,
    #[default]
    Mp4,
    Pdf,
    Jpg,
    Png,
}

impl FileFormat {
    pub const ALL: [FileFormat; 5] = [
        FileFormat::Mp3,
        FileFormat::Mp4,
        FileFormat::Pdf,
        FileFormat::Jpg,
        FileFormat::Png,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Mp3 => "mp3",
            FileFormat::Mp4 => "mp4",
            FileFormat::Pdf => "pdf",
            FileFormat::Jpg => "jpg",
            FileFormat::Png => "png",
        }
    }

    /// Long form, e.g. `video-mp4`
    pub fn descriptive_name(&self) -> &'static str {
        match self {
            FileFormat::Mp3 => "audio-mp3",
            FileFormat::Mp4 => "video-mp4",
            FileFormat::Pdf => "document-pdf",
            FileFormat::Jpg => "image-jpg",
            FileFormat::Png => "image-png",
        }
    }

    /// Parse a format, falling back to [`FileFormat::default`] (mp4).
    pub fn parse_or_default(raw: &str) -> FileFormat {
        raw.parse().unwrap_or_default()
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raised when text names no known format
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown file format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for FileFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == needle || f.descriptive_name() == needle)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}
