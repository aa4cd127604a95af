//! Minimal inclusion trie
//!
//! Transient structure used while compiling a spec. A `Leaf` means "include
//! everything below"; once a leaf exists, longer paths through it are
//! subsumed. Marking a node as a leaf drops its children, so the resulting
//! trie is the same whichever order overlapping paths are inserted in.

use hashbrown::HashMap;

use crate::paths::{self, PathSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TrieNode {
    Leaf,
    Branch(HashMap<String, TrieNode>),
}

impl TrieNode {
    fn branch() -> Self {
        TrieNode::Branch(HashMap::new())
    }
}

/// Inclusion trie built from path specs, consumed by the filter compiler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionTrie {
    pub(crate) root: TrieNode,
    path_count: usize,
}

impl Default for InclusionTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl InclusionTrie {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: TrieNode::branch(),
            path_count: 0,
        }
    }

    /// Build a trie from a comma-separated spec
    #[must_use]
    pub fn from_spec(spec: &str) -> Self {
        let mut trie = Self::new();
        for path in paths::parse_spec(spec) {
            trie.insert(&path);
        }
        trie
    }

    /// Build a trie from an explicit list of dotted paths
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for path in paths::parse_paths(paths) {
            trie.insert(&path);
        }
        trie
    }

    /// Insert one path, returning whether the trie changed.
    ///
    /// Stops early when a prefix of `path` is already a leaf.
    pub fn insert(&mut self, path: &PathSpec) -> bool {
        self.path_count += 1;
        let mut current = &mut self.root;
        for segment in path.segments() {
            current = match current {
                TrieNode::Leaf => return false,
                TrieNode::Branch(children) => children
                    .entry_ref(segment)
                    .or_insert_with(TrieNode::branch),
            };
        }
        if matches!(current, TrieNode::Leaf) {
            return false;
        }
        *current = TrieNode::Leaf;
        true
    }

    /// True when no path has reached the trie
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(&self.root, TrieNode::Branch(children) if children.is_empty())
    }

    /// Number of non-empty paths inserted, including subsumed ones
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.path_count
    }
}
