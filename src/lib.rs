//! Points Trie Library
//!
//! This library contains the components of the points trie shell: the trie
//! itself, the command interpreter that drives it, configuration and error
//! types. The library is designed to be used by the binary crate, but can
//! also be used as a dependency by other projects that only need the trie.
//!
//! # Architecture
//!
//! - [`trie`]: arena-backed prefix tree from lowercase keys to `i32` points
//! - [`shell`]: line-oriented interpreter generic over its input and output
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`error`]: error enums for every concern

pub mod config;
pub mod error;
pub mod shell;
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the points trie shell.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
