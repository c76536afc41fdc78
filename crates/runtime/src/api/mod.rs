//! Types shared with clients: parsed commands and runtime errors.
mod command;
mod errors;

pub use command::{Command, CommandError};
pub use errors::{Result, RuntimeError};
