use super::FileFormat;
use chrono::{DateTime, Local};

/// Type of message, as offered in the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Text,
    Video,
}

impl MessageType {
    /// Menu order, position 1 first
    pub const MENU: [MessageType; 2] = [MessageType::Text, MessageType::Video];

    pub fn label(&self) -> &str {
        match self {
            MessageType::Text => "Text",
            MessageType::Video => "Video",
        }
    }

    /// Map a 1-based menu position to a message type
    pub fn from_position(position: i32) -> Option<Self> {
        usize::try_from(position)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .and_then(|i| Self::MENU.get(i).copied())
    }
}

/// File attached to a multimedia message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file: String,
    pub format: FileFormat,
}

impl Attachment {
    pub fn new(file: impl Into<String>, format: FileFormat) -> Self {
        Self {
            file: file.into(),
            format,
        }
    }
}

/// Kind-specific payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    Multimedia(Attachment),
    Video {
        attachment: Attachment,
        duration_minutes: u32,
    },
}

/// A message handed to a channel for sending.
///
/// Content and send time are fixed at construction; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    content: String,
    sent_at: DateTime<Local>,
    kind: MessageKind,
}

impl Message {
    pub fn text(content: impl Into<String>, sent_at: DateTime<Local>) -> Self {
        Self {
            content: content.into(),
            sent_at,
            kind: MessageKind::Text,
        }
    }

    pub fn multimedia(
        content: impl Into<String>,
        sent_at: DateTime<Local>,
        file: impl Into<String>,
        format: FileFormat,
    ) -> Self {
        Self {
            content: content.into(),
            sent_at,
            kind: MessageKind::Multimedia(Attachment::new(file, format)),
        }
    }

    /// Build a video message. A non-positive duration is stored as 0.
    pub fn video(
        content: impl Into<String>,
        sent_at: DateTime<Local>,
        file: impl Into<String>,
        format: FileFormat,
        duration_minutes: i64,
    ) -> Self {
        Self {
            content: content.into(),
            sent_at,
            kind: MessageKind::Video {
                attachment: Attachment::new(file, format),
                duration_minutes: normalize_duration(duration_minutes),
            },
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sent_at(&self) -> DateTime<Local> {
        self.sent_at
    }

    pub fn kind(&self) -> &MessageKind {
        &self.kind
    }

    /// Attachment of multimedia and video messages
    pub fn attachment(&self) -> Option<&Attachment> {
        match &self.kind {
            MessageKind::Text => None,
            MessageKind::Multimedia(attachment) => Some(attachment),
            MessageKind::Video { attachment, .. } => Some(attachment),
        }
    }

    pub fn duration_minutes(&self) -> Option<u32> {
        match &self.kind {
            MessageKind::Video { duration_minutes, .. } => Some(*duration_minutes),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            MessageKind::Text => "text",
            MessageKind::Multimedia(_) => "multimedia",
            MessageKind::Video { .. } => "video",
        }
    }
}

/// Positive values that fit are kept, everything else becomes 0.
pub fn normalize_duration(minutes: i64) -> u32 {
    if minutes <= 0 {
        return 0;
    }
    u32::try_from(minutes).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_text_message_has_no_attachment() {
        let msg = Message::text("Hello", fixed_time());
        assert_eq!(msg.content(), "Hello");
        assert_eq!(msg.sent_at(), fixed_time());
        assert_eq!(msg.kind(), &MessageKind::Text);
        assert!(msg.attachment().is_none());
        assert!(msg.duration_minutes().is_none());
    }

    #[test]
    fn test_multimedia_message_keeps_attachment() {
        let msg = Message::multimedia("look", fixed_time(), "cat.png", FileFormat::Png);
        let attachment = msg.attachment().unwrap();
        assert_eq!(attachment.file, "cat.png");
        assert_eq!(attachment.format, FileFormat::Png);
        assert_eq!(msg.kind_name(), "multimedia");
    }

    #[test]
    fn test_video_duration_is_normalized() {
        let msg = Message::video("clip", fixed_time(), "clip.mp4", FileFormat::Mp4, 10);
        assert_eq!(msg.duration_minutes(), Some(10));

        let msg = Message::video("clip", fixed_time(), "clip.mp4", FileFormat::Mp4, -5);
        assert_eq!(msg.duration_minutes(), Some(0));

        let msg = Message::video("clip", fixed_time(), "clip.mp4", FileFormat::Mp4, 0);
        assert_eq!(msg.duration_minutes(), Some(0));
    }

    #[test]
    fn test_normalize_duration() {
        assert_eq!(normalize_duration(1), 1);
        assert_eq!(normalize_duration(90), 90);
        assert_eq!(normalize_duration(0), 0);
        assert_eq!(normalize_duration(i64::MIN), 0);
        assert_eq!(normalize_duration(i64::MAX), 0);
    }

    #[test]
    fn test_message_type_from_position() {
        assert_eq!(MessageType::from_position(1), Some(MessageType::Text));
        assert_eq!(MessageType::from_position(2), Some(MessageType::Video));
        assert_eq!(MessageType::from_position(0), None);
        assert_eq!(MessageType::from_position(3), None);
        assert_eq!(MessageType::from_position(-1), None);
    }
}
