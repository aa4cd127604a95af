//! Filter tree compiler
//!
//! Converts an inclusion trie into filter nodes. Single-child branches get the
//! dedicated `SingleSegment` variant, which avoids a map for the common case
//! of one path through an object.

use super::{node::FilterNode, tree::FilterTree};
use crate::trie::{InclusionTrie, TrieNode};

/// Inclusion trie compiler
pub struct FilterCompiler;

impl FilterCompiler {
    /// Compile a trie, consuming it. An empty trie yields the include-nothing
    /// filter.
    #[must_use]
    pub fn compile(trie: InclusionTrie) -> FilterTree {
        if trie.is_empty() {
            tracing::debug!(
                target: "jsonsift::filter",
                "no non-empty paths supplied, filter includes nothing"
            );
            return FilterTree::empty();
        }
        let path_count = trie.path_count();
        let tree = FilterTree::new(compile_node(trie.root));
        tracing::debug!(
            target: "jsonsift::filter",
            path_count = path_count,
            effective = %tree,
            "compiled path filter"
        );
        tree
    }
}

fn compile_node(node: TrieNode) -> FilterNode {
    match node {
        TrieNode::Leaf => FilterNode::IncludeAll,
        TrieNode::Branch(children) if children.len() > 1 => FilterNode::MultiSegment(
            children
                .into_iter()
                .map(|(segment, child)| (segment.into_boxed_str(), compile_node(child)))
                .collect(),
        ),
        TrieNode::Branch(children) => match children.into_iter().next() {
            Some((segment, child)) => FilterNode::SingleSegment {
                segment: segment.into_boxed_str(),
                next: Box::new(compile_node(child)),
            },
            None => FilterNode::IncludeNothing,
        },
    }
}

/// Compile a comma-separated spec such as `"a.b, a.x"`.
///
/// Never fails: malformed or empty specs produce a filter that includes
/// nothing.
///
/// # Examples
/// ```
/// use jsonsift_engine::filter::compile;
///
/// let tree = compile("a.b, a.x, a.b.c");
/// assert_eq!(tree.effective_paths(), ["a.b", "a.x"]);
/// assert!(compile(" , ").is_empty());
/// ```
#[must_use]
pub fn compile(spec: &str) -> FilterTree {
    FilterCompiler::compile(InclusionTrie::from_spec(spec))
}

/// Compile an explicit list of dotted paths
pub fn compile_paths<I, S>(paths: I) -> FilterTree
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    FilterCompiler::compile(InclusionTrie::from_paths(paths))
}
