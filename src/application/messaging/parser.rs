//! Input parser - Turns raw console lines into typed choices

use crate::domain::entities::{ChannelKind, FileFormat, MessageType};

/// Parses raw input lines
#[derive(Debug, Clone, Copy, Default)]
pub struct InputParser;

impl InputParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a channel menu choice (1-4)
    pub fn channel(&self, raw: &str) -> Option<ChannelKind> {
        parse_number(raw).and_then(ChannelKind::from_position)
    }

    /// Parse a message type menu choice (1-2)
    pub fn message_type(&self, raw: &str) -> Option<MessageType> {
        parse_number(raw).and_then(MessageType::from_position)
    }

    /// Parse a duration in minutes. `None` for non-numeric or non-positive input.
    pub fn duration(&self, raw: &str) -> Option<u32> {
        parse_number(raw)
            .filter(|minutes| *minutes > 0)
            .and_then(|minutes| u32::try_from(minutes).ok())
    }

    /// Parse a file format. The flag is false when mp4 was substituted.
    pub fn format(&self, raw: &str) -> (FileFormat, bool) {
        match raw.parse::<FileFormat>() {
            Ok(format) => (format, true),
            Err(_) => (FileFormat::default(), false),
        }
    }
}

/// Signed 32-bit integer, surrounding whitespace allowed
pub fn parse_number(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}
