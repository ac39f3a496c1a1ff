//! Application layer errors

use thiserror::Error;

/// Channel creation and sending errors
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Channel '{0}' not recognized")]
    UnrecognizedChannel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that end an interactive session abnormally.
///
/// Invalid user input is not one of them.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
