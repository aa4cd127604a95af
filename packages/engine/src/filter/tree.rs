//! Immutable compiled filter

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::node::FilterNode;
use crate::paths::PATH_SEPARATOR;

static INCLUDE_NOTHING: Lazy<Arc<FilterNode>> = Lazy::new(|| Arc::new(FilterNode::IncludeNothing));

/// Compiled filter for one extraction configuration.
///
/// Never mutated after construction; cloning is cheap and clones may be used
/// from any number of threads at once.
#[derive(Debug, Clone)]
pub struct FilterTree {
    root: Arc<FilterNode>,
}

impl FilterTree {
    /// Tree rooted at `root`; an `IncludeNothing` root shares the singleton
    #[must_use]
    pub fn new(root: FilterNode) -> Self {
        if root.is_include_nothing() {
            return Self::empty();
        }
        Self {
            root: Arc::new(root),
        }
    }

    /// Filter that includes nothing
    #[must_use]
    pub fn empty() -> Self {
        Self {
            root: Arc::clone(&INCLUDE_NOTHING),
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &FilterNode {
        &self.root
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_include_nothing()
    }

    /// Minimal set of dotted paths this filter includes, sorted
    #[must_use]
    pub fn effective_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.root.collect_paths(&mut Vec::new(), &mut out);
        out.sort_unstable();
        out
    }
}

impl PartialEq for FilterTree {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root, &other.root) || self.root == other.root
    }
}

impl Eq for FilterTree {}

impl fmt::Display for FilterTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let paths = self.effective_paths();
        f.write_str(&paths.join(&PATH_SEPARATOR.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_trees_share_the_singleton() {
        let first = FilterTree::empty();
        let second = FilterTree::new(FilterNode::IncludeNothing);
        assert!(Arc::ptr_eq(&first.root, &second.root));
        assert!(first.is_empty());
        assert!(first.effective_paths().is_empty());
        assert_eq!(first.to_string(), "");
    }
}
