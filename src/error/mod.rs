//! Error module for the points trie shell.
//!
//! Each concern has its own `thiserror` enum; [`TrieShellError`] gathers the
//! ones that can stop the program. Trie operations themselves never fail, and
//! key validation errors surface to users as [`CommandError`]s.

use thiserror::Error;

pub mod command;
pub mod config;

pub use command::CommandError;
pub use config::ConfigError;

/// Result type alias used throughout the points trie shell.
pub type TrieShellResult<T> = Result<T, TrieShellError>;

/// Core error enum for the points trie shell.
#[derive(Error, Debug)]
pub enum TrieShellError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors on the shell's input or output streams, or on files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
