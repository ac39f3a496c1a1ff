//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Platform stand-ins (console)

pub mod config;
pub mod adapters;
