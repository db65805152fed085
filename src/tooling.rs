//! Tooling & Integration Layer
//!
//! The command line front end.

pub mod cli;

pub use cli::{AccountCommands, Cli, CliContext, Commands, NoteCommands};
