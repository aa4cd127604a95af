//! Filter node variants
//!
//! Leaves (`IncludeAll`) include everything beneath them, scalars included.
//! Branches (`SingleSegment`, `MultiSegment`) only lead somewhere through
//! named children; scalars sitting directly at a branch are excluded, so the
//! path `a.x.y` never matches a bare value at `a.x`.

use hashbrown::HashMap;

/// Immutable compiled filter node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterNode {
    /// Everything below is included
    IncludeAll,
    /// Nothing is included
    IncludeNothing,
    /// Exactly one named child leads to inclusion
    SingleSegment {
        segment: Box<str>,
        next: Box<FilterNode>,
    },
    /// Several named children lead to inclusion
    MultiSegment(HashMap<Box<str>, FilterNode>),
}

impl FilterNode {
    /// Filter applying to the value of property `name`, `None` if excluded
    #[inline]
    #[must_use]
    pub fn lookup_child(&self, name: &str) -> Option<&FilterNode> {
        match self {
            FilterNode::IncludeAll => Some(self),
            FilterNode::IncludeNothing => None,
            FilterNode::SingleSegment { segment, next } => {
                (segment.as_ref() == name).then_some(next.as_ref())
            }
            FilterNode::MultiSegment(children) => children.get(name),
        }
    }

    /// Whether scalar values positioned at this node are included
    #[inline]
    #[must_use]
    pub fn includes_scalars(&self) -> bool {
        matches!(self, FilterNode::IncludeAll)
    }

    #[inline]
    #[must_use]
    pub fn is_include_all(&self) -> bool {
        matches!(self, FilterNode::IncludeAll)
    }

    #[inline]
    #[must_use]
    pub fn is_include_nothing(&self) -> bool {
        matches!(self, FilterNode::IncludeNothing)
    }

    /// Collect the dotted leaf paths below this node into `out`
    pub(crate) fn collect_paths(&self, prefix: &mut Vec<String>, out: &mut Vec<String>) {
        match self {
            FilterNode::IncludeAll => out.push(prefix.join(".")),
            FilterNode::IncludeNothing => {}
            FilterNode::SingleSegment { segment, next } => {
                prefix.push(segment.to_string());
                next.collect_paths(prefix, out);
                prefix.pop();
            }
            FilterNode::MultiSegment(children) => {
                for (segment, child) in children {
                    prefix.push(segment.to_string());
                    child.collect_paths(prefix, out);
                    prefix.pop();
                }
            }
        }
    }
}
