//! Domain entities - Core business objects with no external dependencies

pub mod channel;
pub mod format;
pub mod message;

pub use channel::ChannelKind;
pub use format::{FileFormat, UnknownFormat};
pub use message::{normalize_duration, Attachment, Message, MessageKind, MessageType};
