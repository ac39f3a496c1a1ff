use std::io::Write;
use crate::domain::entities::{ChannelKind, Message};
use crate::application::errors::ChannelError;

/// Channel trait - abstraction for messaging platform adapters
pub trait Channel {
    /// Which platform this channel stands in for
    fn kind(&self) -> ChannelKind;

    /// Send a message to a recipient, writing the notice to `out`
    fn send(&self, recipient: &str, message: &Message, out: &mut dyn Write) -> Result<(), ChannelError>;

    /// Display label
    fn label(&self) -> &'static str {
        self.kind().label()
    }
}
