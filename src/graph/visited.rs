//! Visited sets for graph traversals.
//!
//! A `VisitedSet` is scoped to whoever owns it: BFS creates one per call,
//! DFS borrows one from the caller so several calls can share (or not share)
//! the same notion of "already seen".

use std::collections::hash_set;
use std::collections::HashSet;

use super::NodeId;

/// The set of node identifiers a traversal has already emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet {
    nodes: HashSet<NodeId>,
}

impl VisitedSet {
    /// Creates an empty visited set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty visited set able to hold `capacity` nodes without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: HashSet::with_capacity(capacity),
        }
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and
    /// marked it visited.
    #[inline]
    pub fn try_visit(&mut self, node: NodeId) -> bool {
        self.nodes.insert(node)
    }

    /// Returns `true` if `node` has been visited.
    #[inline]
    pub fn is_visited(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Number of visited nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing has been visited yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Forgets every visited node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterates the visited nodes in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, NodeId> {
        self.nodes.iter()
    }
}

impl FromIterator<NodeId> for VisitedSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl Extend<NodeId> for VisitedSet {
    fn extend<I: IntoIterator<Item = NodeId>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl<'a> IntoIterator for &'a VisitedSet {
    type Item = &'a NodeId;
    type IntoIter = hash_set::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_visit_reports_first_sighting_only() {
        let mut visited = VisitedSet::new();
        assert!(visited.try_visit(3));
        assert!(!visited.try_visit(3));
        assert!(visited.is_visited(3));
        assert!(!visited.is_visited(4));
        assert_eq!(visited.len(), 1);

        visited.clear();
        assert!(visited.is_empty());
        assert!(visited.try_visit(3));
    }

    #[test]
    fn collects_from_iterator() {
        let visited: VisitedSet = [1, 2, 2, 5].into_iter().collect();
        assert_eq!(visited.len(), 3);
        let mut seen: Vec<_> = visited.iter().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 5]);
    }
}
