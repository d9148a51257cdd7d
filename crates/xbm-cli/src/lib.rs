//! `xbm` command-line adapter.
//!
//! `bootstrap` is the composition root; handlers only talk to `AppCore`.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by the binary target
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use bootstrap::{
    Backend, CliConfig, CliContext, bootstrap, bootstrap_with_database, open_session,
};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
