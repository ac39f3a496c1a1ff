//! channel-dispatch - send a message through a chosen channel from the console

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::errors::{ChannelError, ConfigError, SessionError};
pub use application::messaging::{InputParser, Outcome, Session};
pub use application::services::{ChannelFactory, DispatchService, SendRequest, VideoRequest};
pub use domain::entities::{ChannelKind, FileFormat, Message, MessageKind, MessageType};
pub use domain::traits::Channel;
pub use infrastructure::config::Config;
