//! Test modules for the points trie shell.
//!
//! This module contains crate-level test suites:
//! - Configuration loading and validation
//! - Error display and conversion
//! - Property-based tests of the trie using proptest
//! - Shared strategies and helpers

pub mod test_utils;
