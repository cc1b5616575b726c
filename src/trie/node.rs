// Copyright (c) 2025 Points Trie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Node storage for the points trie.
//!
//! Nodes live in a [`NodeArena`] and refer to each other by [`NodeId`].
//! Children are owned through the 26 child slots; the link back to the parent
//! is a plain index that is only followed while pruning. Detached slots go on
//! a free list and are reused by later insertions.

use std::fmt;

use tracing::trace;

use super::key::{Letter, ALPHABET_SIZE};

/// Letter printed for the root node, which is reached by no edge.
pub const ROOT_LETTER: char = '+';

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// The edge that leads into a non-root node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    parent: NodeId,
    letter: Letter,
}

/// A single trie vertex.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Incoming edge; `None` only for the root
    edge: Option<Edge>,

    /// One slot per letter, `None` where no edge exists
    children: [Option<NodeId>; ALPHABET_SIZE],

    /// Points stored under the key spelled by the path to this node
    value: Option<i32>,
}

impl TrieNode {
    fn new(edge: Option<Edge>) -> Self {
        Self {
            edge,
            children: [None; ALPHABET_SIZE],
            value: None,
        }
    }

    /// The character this node is rendered with.
    pub fn letter(&self) -> char {
        self.edge.map_or(ROOT_LETTER, |edge| edge.letter.as_char())
    }

    /// The stored value, if any.
    pub fn value(&self) -> Option<i32> {
        self.value
    }

    fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// First present child at slot `from` or later.
    fn next_child(&self, from: usize) -> Option<(Letter, NodeId)> {
        self.children
            .iter()
            .enumerate()
            .skip(from)
            .find_map(|(index, slot)| slot.map(|id| (Letter::from_index(index), id)))
    }
}

/// Depth-first walk position: a node and the next child slot to visit.
type Frame = (NodeId, usize);

/// Arena owning every node of one trie, root included.
#[derive(Debug, Clone)]
pub struct NodeArena {
    nodes: Vec<TrieNode>,
    free_list: Vec<NodeId>,
}

impl NodeArena {
    /// The root is always the first slot and is never recycled.
    pub const ROOT: NodeId = NodeId(0);

    /// Creates an arena holding only an empty root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(None)],
            free_list: Vec::new(),
        }
    }

    /// Returns the node behind `id`.
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    /// Number of live nodes, root included.
    pub fn live_count(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Number of nodes holding a value. Recycled slots never do.
    pub fn value_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.value.is_some()).count()
    }

    /// Follows the single edge labelled `letter` out of `id`.
    pub fn child(&self, id: NodeId, letter: Letter) -> Option<NodeId> {
        self.nodes[id.0].children[letter.index()]
    }

    /// Follows `path` letter by letter starting at `from`.
    ///
    /// Returns the node reached, or `None` as soon as an edge is missing.
    pub fn find<I>(&self, from: NodeId, path: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = Letter>,
    {
        path.into_iter()
            .try_fold(from, |current, letter| self.child(current, letter))
    }

    /// Creates a new childless, valueless node under `parent`.
    ///
    /// The caller must have checked that the slot for `letter` is empty.
    pub fn attach_child(&mut self, parent: NodeId, letter: Letter) -> NodeId {
        debug_assert!(self.child(parent, letter).is_none());

        let node = TrieNode::new(Some(Edge { parent, letter }));
        let id = match self.free_list.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        };

        self.nodes[parent.0].children[letter.index()] = Some(id);
        id
    }

    /// Overwrites the stored value. No pruning happens here.
    pub fn set_value(&mut self, id: NodeId, value: Option<i32>) {
        self.nodes[id.0].value = value;
    }

    /// Clears the value of `id`, then prunes every node that became useless.
    pub fn remove(&mut self, id: NodeId) {
        self.nodes[id.0].value = None;
        self.cleanup(id);
    }

    /// Detaches `id` if it has neither children nor a value, then repeats the
    /// check on its parent. Stops at the first node still in use or at the root.
    fn cleanup(&mut self, mut id: NodeId) {
        while let Some(edge) = self.nodes[id.0].edge {
            let node = &self.nodes[id.0];
            if node.value.is_some() || node.has_children() {
                break;
            }

            trace!(letter = %edge.letter, slot = id.0, "pruning node");
            self.nodes[edge.parent.0].children[edge.letter.index()] = None;
            self.recycle(id);
            id = edge.parent;
        }
    }

    fn recycle(&mut self, id: NodeId) {
        self.nodes[id.0] = TrieNode::new(None);
        self.free_list.push(id);
    }

    /// Appends every `(key, value)` below `id` to `out`, in key order.
    ///
    /// `prefix` holds the key spelled by the path to `id` and is restored
    /// before returning. The walk keeps its own stack, so key length is not
    /// limited by the thread stack.
    pub fn collect_entries(&self, id: NodeId, prefix: &mut String, out: &mut Vec<(String, i32)>) {
        if let Some(value) = self.node(id).value {
            out.push((prefix.clone(), value));
        }

        let mut stack: Vec<Frame> = vec![(id, 0)];
        while let Some((current, cursor)) = stack.last_mut() {
            match self.node(*current).next_child(*cursor) {
                Some((letter, child)) => {
                    *cursor = letter.index() + 1;
                    prefix.push(letter.as_char());
                    if let Some(value) = self.node(child).value {
                        out.push((prefix.clone(), value));
                    }
                    stack.push((child, 0));
                }
                None => {
                    stack.pop();
                    if !stack.is_empty() {
                        prefix.pop();
                    }
                }
            }
        }
    }

    /// One-line rendering of the subtree rooted at `id`.
    pub fn render(&self, id: NodeId) -> Render<'_> {
        Render { arena: self, id }
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

/// Display adapter produced by [`NodeArena::render`].
///
/// Format: `letter[value](child child ...)`, where the value bracket appears
/// only when a value is stored and the parentheses only when children exist.
/// Children are emitted in alphabetical order.
#[derive(Debug, Clone, Copy)]
pub struct Render<'a> {
    arena: &'a NodeArena,
    id: NodeId,
}

impl Render<'_> {
    /// Writes `letter[value]` and, if the node has children, the opening
    /// parenthesis. Returns whether children follow.
    fn open(&self, f: &mut fmt::Formatter<'_>, id: NodeId) -> Result<bool, fmt::Error> {
        let node = self.arena.node(id);
        write!(f, "{}", node.letter())?;
        if let Some(value) = node.value {
            write!(f, "[{value}]")?;
        }
        let has_children = node.has_children();
        if has_children {
            f.write_str("(")?;
        }
        Ok(has_children)
    }
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.open(f, self.id)? {
            return Ok(());
        }

        let mut stack: Vec<Frame> = vec![(self.id, 0)];
        while let Some((current, cursor)) = stack.last_mut() {
            match self.arena.node(*current).next_child(*cursor) {
                Some((letter, child)) => {
                    *cursor = letter.index() + 1;
                    if self.open(f, child)? {
                        stack.push((child, 0));
                    }
                }
                None => {
                    f.write_str(")")?;
                    stack.pop();
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    fn path(word: &str) -> Vec<Letter> {
        word.chars().map(letter).collect()
    }

    /// Builds the chain for `word` below the root and returns its last node.
    fn build(arena: &mut NodeArena, word: &str) -> NodeId {
        let mut current = NodeArena::ROOT;
        for l in path(word) {
            current = match arena.child(current, l) {
                Some(id) => id,
                None => arena.attach_child(current, l),
            };
        }
        current
    }

    #[test]
    fn test_new_arena_is_root_only() {
        let arena = NodeArena::new();
        let root = arena.node(NodeArena::ROOT);
        assert_eq!(root.letter(), ROOT_LETTER);
        assert_eq!(root.value(), None);
        assert_eq!(arena.live_count(), 1);
        assert_eq!(arena.render(NodeArena::ROOT).to_string(), "+");
    }

    #[test]
    fn test_find_follows_edges() {
        let mut arena = NodeArena::new();
        let end = build(&mut arena, "dog");

        assert_eq!(arena.find(NodeArena::ROOT, path("dog")), Some(end));
        assert!(arena.find(NodeArena::ROOT, path("do")).is_some());
        assert_eq!(arena.find(NodeArena::ROOT, path("dot")), None);
        assert_eq!(arena.find(NodeArena::ROOT, path("dogs")), None);
        assert_eq!(arena.node(end).letter(), 'g');
    }

    #[test]
    fn test_remove_prunes_whole_chain() {
        let mut arena = NodeArena::new();
        let end = build(&mut arena, "dog");
        arena.set_value(end, Some(1));
        assert_eq!(arena.live_count(), 4);

        arena.remove(end);

        assert_eq!(arena.live_count(), 1);
        assert_eq!(arena.render(NodeArena::ROOT).to_string(), "+");
    }

    #[test]
    fn test_cleanup_stops_at_valued_ancestor() {
        let mut arena = NodeArena::new();
        let mid = build(&mut arena, "do");
        arena.set_value(mid, Some(7));
        let end = build(&mut arena, "dogs");
        arena.set_value(end, Some(9));

        arena.remove(end);

        assert_eq!(arena.find(NodeArena::ROOT, path("dog")), None);
        assert_eq!(arena.find(NodeArena::ROOT, path("do")), Some(mid));
        assert_eq!(arena.render(NodeArena::ROOT).to_string(), "+(d(o[7]))");
    }

    #[test]
    fn test_cleanup_stops_at_branching_ancestor() {
        let mut arena = NodeArena::new();
        let dog = build(&mut arena, "dog");
        arena.set_value(dog, Some(1));
        let dot = build(&mut arena, "dot");
        arena.set_value(dot, Some(2));

        arena.remove(dog);

        assert_eq!(arena.render(NodeArena::ROOT).to_string(), "+(d(o(t[2])))");
        assert_eq!(arena.live_count(), 4);
    }

    #[test]
    fn test_remove_keeps_node_with_children() {
        let mut arena = NodeArena::new();
        let mid = build(&mut arena, "ab");
        arena.set_value(mid, Some(1));
        let end = build(&mut arena, "abc");
        arena.set_value(end, Some(2));

        arena.remove(mid);

        assert_eq!(arena.find(NodeArena::ROOT, path("ab")), Some(mid));
        assert_eq!(arena.node(mid).value(), None);
        assert_eq!(arena.render(NodeArena::ROOT).to_string(), "+(a(b(c[2])))");
    }

    #[test]
    fn test_detached_slots_are_reused() {
        let mut arena = NodeArena::new();
        let end = build(&mut arena, "xyz");
        arena.set_value(end, Some(1));
        arena.remove(end);

        let end = build(&mut arena, "abc");
        arena.set_value(end, Some(2));

        assert_eq!(arena.nodes.len(), 4);
        assert_eq!(arena.live_count(), 4);
        assert_eq!(arena.render(NodeArena::ROOT).to_string(), "+(a(b(c[2])))");
    }

    #[test]
    fn test_collect_entries_in_key_order() {
        let mut arena = NodeArena::new();
        for (word, value) in [("b", 2), ("ab", 1), ("a", 0), ("ba", 3)] {
            let id = build(&mut arena, word);
            arena.set_value(id, Some(value));
        }

        let mut out = Vec::new();
        arena.collect_entries(NodeArena::ROOT, &mut String::new(), &mut out);

        let expected: Vec<(String, i32)> = [("a", 0), ("ab", 1), ("b", 2), ("ba", 3)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_concatenates_siblings() {
        let mut arena = NodeArena::new();
        for (word, value) in [("cat", 5), ("car", 3), ("co", 1)] {
            let id = build(&mut arena, word);
            arena.set_value(id, Some(value));
        }
        assert_eq!(
            arena.render(NodeArena::ROOT).to_string(),
            "+(c(a(r[3]t[5])o[1]))"
        );
        assert_eq!(arena.value_count(), 3);
    }

    #[test]
    fn test_very_long_key_walks_without_recursion() {
        const DEPTH: usize = 200_000;
        let mut arena = NodeArena::new();
        let end = build(&mut arena, &"a".repeat(DEPTH));
        arena.set_value(end, Some(1));

        let rendered = arena.render(NodeArena::ROOT).to_string();
        assert_eq!(rendered.len(), 1 + DEPTH + "[1]".len() + 2 * (DEPTH - 1) + 2);
        assert!(rendered.starts_with("+(a(a"));
        assert!(rendered.ends_with("a[1]))"));

        let mut out = Vec::new();
        arena.collect_entries(NodeArena::ROOT, &mut String::new(), &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].0.len(), DEPTH);
        assert_eq!(out[0].1, 1);

        arena.remove(end);
        assert_eq!(arena.live_count(), 1);
        assert_eq!(arena.render(NodeArena::ROOT).to_string(), "+");
    }

    #[test]
    fn test_render_negative_values() {
        let mut arena = NodeArena::new();
        let id = build(&mut arena, "z");
        arena.set_value(id, Some(-42));
        assert_eq!(arena.render(NodeArena::ROOT).to_string(), "+(z[-42])");
    }
}
