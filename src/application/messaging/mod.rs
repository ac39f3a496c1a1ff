//! Message handling - Console input parsing and the interactive session

pub mod parser;
pub mod session;

pub use parser::InputParser;
pub use session::{Outcome, Session};
