// Copyright (c) 2025 Points Trie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Points Trie Implementation
//!
//! This module provides a prefix tree mapping lowercase keys to integer points.
//! Removing a key prunes every node that no longer leads to a stored value, so
//! the structure never holds dead branches.
//!
//! # Example
//!
//! ```
//! use points_trie_lib::trie::{Key, PointsTrie};
//!
//! let mut trie = PointsTrie::new();
//! let cat = Key::parse("cat").unwrap();
//! let car = Key::parse("car").unwrap();
//!
//! assert!(trie.add(&cat, 5));
//! assert!(trie.add(&car, 3));
//! assert_eq!(trie.to_string(), "+(c(a(r[3]t[5])))");
//!
//! assert!(trie.remove(&cat));
//! assert_eq!(trie.to_string(), "+(c(a(r[3])))");
//! assert_eq!(trie.lookup(&car), Some(3));
//! ```

mod error;
mod key;
mod node;

use std::fmt;

use tracing::debug;

pub use error::{KeyError, KeyResult};
pub use key::{Key, Letter, ALPHABET_SIZE};
pub use node::ROOT_LETTER;
use node::NodeArena;

/// Prefix tree from [`Key`]s to `i32` points.
///
/// Key features:
/// * `add` never overwrites: it only succeeds for keys whose path does not
///   end in an existing node
/// * `change` and `remove` only act on keys that currently hold a value
/// * removal prunes childless, valueless nodes up to the first ancestor still
///   in use
///
/// The trie is not internally synchronized. Mutation takes `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct PointsTrie {
    /// Every node, the root first
    nodes: NodeArena,
}

impl PointsTrie {
    /// Creates a new empty `PointsTrie`.
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
        }
    }

    /// Inserts a key with its points.
    ///
    /// Missing nodes along the path are created. The insertion is rejected if
    /// the node for the last letter already exists, whether or not it holds a
    /// value; in that case nothing is modified.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `value` - The points to store.
    ///
    /// # Returns
    ///
    /// `true` if the key was inserted, `false` if its node already existed.
    pub fn add(&mut self, key: &Key, value: i32) -> bool {
        let mut current = NodeArena::ROOT;
        let mut letters = key.letters().peekable();

        while let Some(letter) = letters.next() {
            let is_last = letters.peek().is_none();
            current = match self.nodes.child(current, letter) {
                // An existing last edge means the key already has a node.
                Some(_) if is_last => {
                    debug!(key = %key, "add rejected, node already exists");
                    return false;
                }
                Some(next) => next,
                None => self.nodes.attach_child(current, letter),
            };
        }

        self.nodes.set_value(current, Some(value));
        true
    }

    /// Removes the points stored under `key` and prunes unused nodes.
    ///
    /// # Returns
    ///
    /// `true` if the key held a value, `false` if it is absent or valueless.
    pub fn remove(&mut self, key: &Key) -> bool {
        match self.valued_node(key) {
            Some(id) => {
                self.nodes.remove(id);
                true
            }
            None => false,
        }
    }

    /// Replaces the points stored under `key`.
    ///
    /// # Returns
    ///
    /// `true` if the key held a value, `false` if it is absent or valueless.
    pub fn change(&mut self, key: &Key, value: i32) -> bool {
        match self.valued_node(key) {
            Some(id) => {
                self.nodes.set_value(id, Some(value));
                true
            }
            None => false,
        }
    }

    /// Returns the points stored under `key`.
    ///
    /// `None` covers both a missing path and a path whose node holds no value.
    pub fn lookup(&self, key: &Key) -> Option<i32> {
        self.nodes
            .find(NodeArena::ROOT, key.letters())
            .and_then(|id| self.nodes.node(id).value())
    }

    /// Discards every entry, leaving only an empty root.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of keys currently holding a value.
    ///
    /// This scans every node slot, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.nodes.value_count()
    }

    /// Whether no key holds a value.
    pub fn is_empty(&self) -> bool {
        // Pruning guarantees a root without children means no values.
        self.nodes.live_count() == 1
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.live_count()
    }

    /// All `(key, points)` pairs in ascending key order.
    pub fn entries(&self) -> Vec<(String, i32)> {
        let mut out = Vec::new();
        self.nodes
            .collect_entries(NodeArena::ROOT, &mut String::new(), &mut out);
        out
    }

    fn valued_node(&self, key: &Key) -> Option<node::NodeId> {
        self.nodes
            .find(NodeArena::ROOT, key.letters())
            .filter(|&id| self.nodes.node(id).value().is_some())
    }
}

impl fmt::Display for PointsTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.render(NodeArena::ROOT))
    }
}
