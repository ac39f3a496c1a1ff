//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: Channel factory and dispatch
//! - Errors: Domain-specific errors
//! - Messaging: Input parsing and the interactive session

pub mod errors;
pub mod services;
pub mod messaging;
