use std::io::Write;
use chrono::{DateTime, Local};
use crate::application::errors::ChannelError;
use crate::application::messaging::parser::{is_blank, InputParser};
use crate::domain::entities::{normalize_duration, Message};
use super::ChannelFactory;

/// A single send described up front instead of prompted for
#[derive(Debug, Clone)]
pub struct SendRequest {
    pub channel: String,
    pub recipient: String,
    pub content: String,
    pub video: Option<VideoRequest>,
}

#[derive(Debug, Clone)]
pub struct VideoRequest {
    pub file: String,
    pub format: String,
    pub duration_minutes: i64,
}

/// Resolves a channel by name and sends a message through it
pub struct DispatchService {
    factory: ChannelFactory,
}

impl DispatchService {
    pub fn new(factory: ChannelFactory) -> Self {
        Self { factory }
    }

    pub fn dispatch(
        &self,
        channel_name: &str,
        recipient: &str,
        message: &Message,
        out: &mut dyn Write,
    ) -> Result<(), ChannelError> {
        let channel = self.factory.create(channel_name)?;
        tracing::debug!("Dispatching to {} via {}", recipient, channel.label());
        channel.send(recipient, message, out)
    }

    /// Build the requested message and send it.
    ///
    /// Fallback notices go to `out` ahead of the send notice. Returns `None`
    /// when a video lacks its file or format; nothing is sent then.
    pub fn send_request(
        &self,
        request: SendRequest,
        sent_at: DateTime<Local>,
        out: &mut dyn Write,
    ) -> Result<Option<Message>, ChannelError> {
        let message = match request.video {
            None => Message::text(request.content, sent_at),
            Some(video) => {
                if is_blank(&video.file) || is_blank(&video.format) {
                    tracing::warn!("Video message creation aborted: file and format are required");
                    writeln!(out, "File and format are required. Aborting video message creation.")?;
                    return Ok(None);
                }

                let minutes = normalize_duration(video.duration_minutes);
                if i64::from(minutes) != video.duration_minutes {
                    tracing::debug!("Invalid duration {}, using 0", video.duration_minutes);
                    writeln!(out, "Invalid duration. Using default duration of 0 minutes.")?;
                }

                let (format, recognized) = InputParser::new().format(&video.format);
                if !recognized {
                    writeln!(out, "Format '{}' not recognized. Using default format.", video.format)?;
                }

                Message::video(request.content, sent_at, video.file, format, i64::from(minutes))
            }
        };

        self.dispatch(&request.channel, &request.recipient, &message, out)?;
        Ok(Some(message))
    }
}

impl Default for DispatchService {
    fn default() -> Self {
        Self::new(ChannelFactory::default())
    }
}
