//! Application services - Business logic orchestration

pub mod channel_factory;
pub mod dispatch_service;

pub use channel_factory::ChannelFactory;
pub use dispatch_service::{DispatchService, SendRequest, VideoRequest};
