//! Command-line front end for creator-boost.
//!
//! The binary is the composition root: it loads [`config::CliConfig`],
//! builds the backend handle once from the API key, and dispatches one
//! subcommand.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command};
pub use config::CliConfig;
pub use error::CliError;
