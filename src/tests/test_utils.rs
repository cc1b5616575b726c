//! Test utilities for the points trie shell.
//!
//! This module provides reusable proptest strategies for keys, key/value
//! batches and shell scripts.

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;

use crate::trie::Key;

/// Maximum key length for generated test data.
const MAX_KEY_LENGTH: usize = 8;

/// Maximum number of entries in a generated batch.
const MAX_ENTRIES: usize = 40;

/// Generate valid keys over a small alphabet so that shared prefixes are common.
pub fn key_strategy() -> BoxedStrategy<Key> {
    proptest::string::string_regex(&format!("[a-d]{{1,{MAX_KEY_LENGTH}}}"))
        .expect("valid key regex")
        .prop_map(|raw| Key::parse(&raw).expect("regex only yields valid keys"))
        .boxed()
}

/// Generate a batch of `(key, points)` pairs.
pub fn entries_strategy() -> BoxedStrategy<Vec<(Key, i32)>> {
    proptest::collection::vec((key_strategy(), any::<i32>()), 0..MAX_ENTRIES).boxed()
}

/// Generate shell scripts mixing valid and malformed commands.
pub fn script_strategy() -> BoxedStrategy<Vec<String>> {
    let line = prop_oneof![
        (key_strategy(), any::<i32>()).prop_map(|(k, v)| format!("add {k} {v}")),
        (key_strategy(), any::<i32>()).prop_map(|(k, v)| format!("change {k} {v}")),
        key_strategy().prop_map(|k| format!("delete {k}")),
        key_strategy().prop_map(|k| format!("points {k}")),
        Just("trie".to_string()),
        Just("new".to_string()),
        "[A-Za-z0-9 ]{0,12}",
    ];
    proptest::collection::vec(line, 0..30).boxed()
}
