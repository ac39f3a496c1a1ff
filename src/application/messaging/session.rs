//! Interactive session - Prompts for a channel and a message, then sends it
//!
//! The session is a small state machine over an injected input source and
//! output sink:
//!
//! ```text
//! SelectChannel -> CollectMessage -> SelectMessageType
//!     -> [CollectVideoDetails] -> Dispatch -> Terminal
//! ```
//!
//! Invalid menu choices end the run early with a diagnostic. A video whose
//! file or format is blank produces no message, and dispatch is skipped.

use std::io::{BufRead, Write};
use chrono::{DateTime, Local};
use crate::application::errors::SessionError;
use crate::application::services::DispatchService;
use crate::domain::entities::{ChannelKind, Message, MessageType};
use super::parser::{is_blank, InputParser};

/// Source of send timestamps
pub type Clock = Box<dyn Fn() -> DateTime<Local>>;

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sent {
        channel: ChannelKind,
        recipient: String,
        message: Message,
    },
    InvalidChannel,
    InvalidMessageType,
    VideoAborted,
}

impl Outcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Outcome::Sent { .. })
    }
}

#[derive(Debug)]
enum State {
    SelectChannel,
    CollectMessage {
        channel: ChannelKind,
    },
    SelectMessageType {
        channel: ChannelKind,
        recipient: String,
        content: String,
    },
    CollectVideoDetails {
        channel: ChannelKind,
        recipient: String,
        content: String,
    },
    Dispatch {
        channel: ChannelKind,
        recipient: String,
        message: Option<Message>,
    },
    Terminal(Outcome),
}

/// One interactive run
pub struct Session<R, W> {
    input: R,
    output: W,
    parser: InputParser,
    dispatcher: DispatchService,
    clock: Clock,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            parser: InputParser::new(),
            dispatcher: DispatchService::default(),
            clock: Box::new(Local::now),
        }
    }

    pub fn with_dispatcher(mut self, dispatcher: DispatchService) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Local> + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    /// Drive the session to its terminal state
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        tracing::debug!("Session started");
        let mut state = State::SelectChannel;
        loop {
            state = match self.step(state)? {
                State::Terminal(outcome) => {
                    tracing::debug!("Session ended: {:?}", outcome);
                    return Ok(outcome);
                }
                next => next,
            };
        }
    }

    fn step(&mut self, state: State) -> Result<State, SessionError> {
        match state {
            State::SelectChannel => self.select_channel(),
            State::CollectMessage { channel } => {
                let recipient = self.prompt("Enter the recipient: ")?;
                let content = self.prompt("Enter the message: ")?;
                Ok(State::SelectMessageType {
                    channel,
                    recipient,
                    content,
                })
            }
            State::SelectMessageType {
                channel,
                recipient,
                content,
            } => self.select_message_type(channel, recipient, content),
            State::CollectVideoDetails {
                channel,
                recipient,
                content,
            } => {
                let message = self.collect_video(content)?;
                Ok(State::Dispatch {
                    channel,
                    recipient,
                    message,
                })
            }
            State::Dispatch {
                channel,
                recipient,
                message,
            } => self.dispatch(channel, recipient, message),
            State::Terminal(outcome) => Ok(State::Terminal(outcome)),
        }
    }

    fn select_channel(&mut self) -> Result<State, SessionError> {
        self.say("Choose the communication channel:")?;
        for kind in ChannelKind::ALL {
            self.say(&format!("{}. {}", kind.position(), kind.label()))?;
        }

        let raw = self.read_line()?;
        match self.parser.channel(&raw) {
            Some(channel) => {
                tracing::debug!("Channel selected: {}", channel);
                Ok(State::CollectMessage { channel })
            }
            None => {
                tracing::debug!("Invalid channel selection: {:?}", raw);
                self.say("Invalid channel selection.")?;
                Ok(State::Terminal(Outcome::InvalidChannel))
            }
        }
    }

    fn select_message_type(
        &mut self,
        channel: ChannelKind,
        recipient: String,
        content: String,
    ) -> Result<State, SessionError> {
        self.say("Choose the message type:")?;
        for (i, message_type) in MessageType::MENU.iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, message_type.label()))?;
        }

        let raw = self.read_line()?;
        match self.parser.message_type(&raw) {
            Some(MessageType::Text) => Ok(State::Dispatch {
                channel,
                recipient,
                message: Some(Message::text(content, (self.clock)())),
            }),
            Some(MessageType::Video) => Ok(State::CollectVideoDetails {
                channel,
                recipient,
                content,
            }),
            None => {
                tracing::debug!("Invalid message type selection: {:?}", raw);
                self.say("Invalid message type selection.")?;
                Ok(State::Terminal(Outcome::InvalidMessageType))
            }
        }
    }

    /// Returns `None` when the file or format is blank.
    fn collect_video(&mut self, content: String) -> Result<Option<Message>, SessionError> {
        let file = self.prompt("Enter the file: ")?;
        let raw_format = self.prompt("Enter the format: ")?;

        if is_blank(&file) || is_blank(&raw_format) {
            tracing::warn!("Video message creation aborted: file and format are required");
            self.say("File and format are required. Aborting video message creation.")?;
            return Ok(None);
        }

        let raw_duration = self.prompt("Enter the duration (in minutes): ")?;
        let duration = match self.parser.duration(&raw_duration) {
            Some(minutes) => minutes,
            None => {
                tracing::debug!("Invalid duration {:?}, using 0", raw_duration);
                self.say("Invalid duration. Using default duration of 0 minutes.")?;
                0
            }
        };

        let (format, recognized) = self.parser.format(&raw_format);
        if !recognized {
            tracing::debug!("Unrecognized format {:?}, using {}", raw_format, format);
            self.say(&format!("Format '{}' not recognized. Using default format.", raw_format))?;
        }

        Ok(Some(Message::video(content, (self.clock)(), file, format, i64::from(duration))))
    }

    fn dispatch(
        &mut self,
        channel: ChannelKind,
        recipient: String,
        message: Option<Message>,
    ) -> Result<State, SessionError> {
        let Some(message) = message else {
            return Ok(State::Terminal(Outcome::VideoAborted));
        };

        self.dispatcher
            .dispatch(channel.name(), &recipient, &message, &mut self.output)?;

        Ok(State::Terminal(Outcome::Sent {
            channel,
            recipient,
            message,
        }))
    }

    fn say(&mut self, line: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", text)?;
        self.read_line()
    }

    /// Read one line without its terminator. End of input reads as empty,
    /// bytes that are not UTF-8 become U+FFFD.
    fn read_line(&mut self) -> Result<String, SessionError> {
        self.output.flush()?;
        let mut buf = Vec::new();
        self.input.read_until(b'\n', &mut buf)?;
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
