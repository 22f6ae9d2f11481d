//! Startup error taxonomy.
//!
//! Only startup can fail: config loading, address parsing, and the listener
//! bind. Per-request handlers never produce an error response, so there is
//! no `IntoResponse` error path; everything here propagates out of `main`
//! and terminates the process with a non-zero exit.

use std::io;
use std::net::AddrParseError;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid listen address: {0}")]
    Addr(#[from] AddrParseError),

    #[error("Server error: {0}")]
    Io(#[from] io::Error),
}
