//! Error types for Segee
//!
//! Uses `thiserror` for library errors. Command errors are never fatal: the
//! session turns every one of them into a single history entry.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Segee operations
pub type SegeeResult<T> = Result<T, SegeeError>;

/// Errors that can stop the program before a session starts
#[derive(Error, Debug)]
pub enum SegeeError {
    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A rejected input line.
///
/// The `Display` text is exactly what the history panel shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Malformed number or token
    #[error("Invalid format: '{token}' is not an integer (ensure all numbers are integers)")]
    Parse { token: String },

    /// Index outside `[0, len)`
    #[error("Index Error: {index} is out of range [0, {max}] (size={len})", max = .len.saturating_sub(1))]
    Index { index: i128, len: usize },

    /// Invalid half-open range
    #[error("Range Error: [{left}, {right}) is invalid for size {len} (valid: 0 <= left < right <= {len})")]
    Range { left: i128, right: i128, len: usize },

    /// Recognized command with the wrong number of arguments
    #[error("Usage: {command} {signature} (need exactly 2 arguments, got {got})")]
    Usage {
        command: String,
        signature: &'static str,
        got: usize,
    },

    /// Unrecognized command keyword
    #[error("Unknown command: '{0}'. Type '/help' for available commands.")]
    UnknownCommand(String),

    /// Unrecognized `/` command
    #[error("Unknown slash command: '{0}'. Try /help for available commands.")]
    UnknownSlashCommand(String),

    /// The structure refused the update
    #[error(transparent)]
    Structure(#[from] StructureError),
}

/// Errors reported by an aggregate structure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("Index Error: {index} is out of range [0, {max}] (size={len})", max = .len.saturating_sub(1))]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Range Error: [{left}, {right}) is invalid for size {len} (valid: 0 <= left < right <= {len})")]
    InvalidRange { left: usize, right: usize, len: usize },

    /// Point add left the 64-bit element range
    #[error("Overflow Error: {value} + {delta} exceeds the 64-bit range")]
    Overflow { value: String, delta: String },
}
