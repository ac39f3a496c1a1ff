//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (Message, FileFormat, ChannelKind)
//! - Traits: Abstractions for infrastructure (Channel)

pub mod entities;
pub mod traits;
