//! Console adapter - channels that print instead of transmitting

use std::io::Write;
use chrono::format::{Item, StrftimeItems};
use crate::domain::entities::{ChannelKind, Message, MessageKind};
use crate::domain::traits::Channel;
use crate::application::errors::ChannelError;

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// True when chrono can render every specifier in `format`
pub fn is_valid_timestamp_format(format: &str) -> bool {
    !format.trim().is_empty() && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Console stand-in for a messaging platform
#[derive(Debug, Clone)]
pub struct ConsoleChannel {
    kind: ChannelKind,
    timestamp_format: String,
}

impl ConsoleChannel {
    pub fn new(kind: ChannelKind) -> Self {
        Self {
            kind,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Use `format` for the "Sent at" line. An unusable pattern keeps the default.
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        let format = format.into();
        if is_valid_timestamp_format(&format) {
            self.timestamp_format = format;
        } else {
            tracing::warn!("Invalid timestamp format {:?}, keeping {:?}", format, self.timestamp_format);
        }
        self
    }

    /// Render the notice printed for a send
    pub fn render(&self, recipient: &str, message: &Message) -> String {
        let mut notice = format!(
            "Sending message via {} to {}\nContent: {}\nSent at: {}\n",
            self.kind.label(),
            recipient,
            message.content(),
            message.sent_at().format(&self.timestamp_format),
        );

        if let Some(attachment) = message.attachment() {
            notice.push_str(&format!("Attachment: {} ({})\n", attachment.file, attachment.format));
        }
        if let MessageKind::Video { duration_minutes, .. } = message.kind() {
            notice.push_str(&format!("Duration: {} min\n", duration_minutes));
        }
        notice
    }
}

impl Channel for ConsoleChannel {
    fn kind(&self) -> ChannelKind {
        self.kind
    }

    fn send(&self, recipient: &str, message: &Message, out: &mut dyn Write) -> Result<(), ChannelError> {
        tracing::info!("Sending {} message via {}", message.kind_name(), self.kind.label());
        out.write_all(self.render(recipient, message).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
