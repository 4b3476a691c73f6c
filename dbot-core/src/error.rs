//! Error types for the bot core.
//!
//! [`DbotError`] is the top-level error; [`HandlerError`] covers conditions raised inside handlers.

use thiserror::Error;

/// Top-level error for dbot (bot transport, file lookup, handler).
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    /// The platform could not resolve a file handle to a downloadable path.
    #[error("File lookup failed: {0}")]
    FileLookup(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Errors produced by handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// A required setting is unset; carries the setting's env var name.
    #[error("{0} is not configured")]
    MissingSetting(&'static str),

    /// A command this bot does not answer (unknown, or addressed to another bot).
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
