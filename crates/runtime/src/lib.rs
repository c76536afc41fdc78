//! Round lifecycle for the maze game.
//!
//! This crate owns the board between commands. [`Session`] builds each round
//! (construct, carve, place gates, reveal the start), turns parsed
//! [`Command`]s into engine actions, and discards the board wholesale when a
//! new round begins. Everything is synchronous: a command's board mutation is
//! complete before [`Session::submit`] returns.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the command and error types clients interact with
//! - [`config`] reads session parameters from the environment
//! - [`session`] hosts the round owner
pub mod api;
pub mod config;
pub mod session;

pub use api::{Command, CommandError, Result, RuntimeError};
pub use config::RuntimeConfig;
pub use session::{CommandReport, RoundInfo, Session};
