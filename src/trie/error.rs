// Copyright (c) 2025 Points Trie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Error types for trie keys.
//!
//! The trie itself never fails: mutations report success as `bool` and
//! lookups as `Option`. The only fallible step is turning raw text into a
//! [`Key`](super::Key).

/// Errors that can occur when parsing a key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// Error when an empty key is provided.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// Error when a key contains something other than `a`..=`z`.
    #[error("Invalid character {ch:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Character index within the key.
        position: usize,
    },
}

/// Result type for key parsing.
pub type KeyResult<T> = Result<T, KeyError>;
