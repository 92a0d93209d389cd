//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`adsh status`, `adsh bootstrap`)
//! - One registry collection built at startup and shared by every command
//! - Consistent global flag handling

pub mod bootstrap;
pub mod completions;
pub mod dispatcher;
pub mod list_sites;
pub mod resolve;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
