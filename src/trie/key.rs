// Copyright (c) 2025 Points Trie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Validated keys and the letters they are made of.
//!
//! A [`Key`] is a non-empty run of lowercase ASCII letters. Parsing is the
//! only place validation happens, so every key that reaches the trie is
//! already well formed.

use std::fmt;
use std::str::FromStr;

use super::error::{KeyError, KeyResult};

/// Number of distinct letters, and therefore child slots per node.
pub const ALPHABET_SIZE: usize = 26;

/// A single lowercase ASCII letter, stored as its offset from `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Converts a character into a letter, or `None` if it is not `a`..=`z`.
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_lowercase() {
            Some(Self(ch as u8 - b'a'))
        } else {
            None
        }
    }

    /// Returns the letter at `index` in alphabetical order.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < ALPHABET_SIZE);
        Self(index as u8)
    }

    /// Slot index of this letter (`a` is 0).
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The letter as a character.
    pub fn as_char(self) -> char {
        char::from(b'a' + self.0)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A non-empty key made only of lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(String);

impl Key {
    /// Parses and validates a key.
    ///
    /// # Arguments
    ///
    /// * `raw` - The candidate key text.
    ///
    /// # Returns
    ///
    /// * `Ok(Key)` - If `raw` matches `[a-z]+`.
    /// * `Err(KeyError)` - If `raw` is empty or contains any other character.
    pub fn parse(raw: &str) -> KeyResult<Self> {
        if raw.is_empty() {
            return Err(KeyError::EmptyKey);
        }

        if let Some((position, ch)) = raw
            .chars()
            .enumerate()
            .find(|(_, ch)| !ch.is_ascii_lowercase())
        {
            return Err(KeyError::InvalidCharacter { ch, position });
        }

        Ok(Self(raw.to_owned()))
    }

    /// Iterates over the letters of the key, first to last.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        // Validated on construction, every byte is a lowercase letter.
        self.0.bytes().map(|b| Letter(b - b'a'))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Key {
    type Error = KeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
