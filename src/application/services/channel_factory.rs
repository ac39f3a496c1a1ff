use crate::application::errors::ChannelError;
use crate::domain::entities::ChannelKind;
use crate::domain::traits::Channel;
use crate::infrastructure::adapters::ConsoleChannel;
use crate::infrastructure::adapters::console::DEFAULT_TIMESTAMP_FORMAT;

/// Builds channels from their names
#[derive(Debug, Clone)]
pub struct ChannelFactory {
    timestamp_format: String,
}

impl ChannelFactory {
    pub fn new() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Create a channel by case-insensitive name.
    ///
    /// Fails with [`ChannelError::UnrecognizedChannel`] for names outside
    /// whatsapp, telegram, facebook and instagram.
    pub fn create(&self, name: &str) -> Result<Box<dyn Channel>, ChannelError> {
        let kind = ChannelKind::from_name(name)
            .ok_or_else(|| ChannelError::UnrecognizedChannel(name.to_string()))?;
        Ok(self.create_kind(kind))
    }

    pub fn create_kind(&self, kind: ChannelKind) -> Box<dyn Channel> {
        Box::new(ConsoleChannel::new(kind).with_timestamp_format(self.timestamp_format.clone()))
    }
}

impl Default for ChannelFactory {
    fn default() -> Self {
        Self::new()
    }
}
