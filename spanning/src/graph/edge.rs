//! This module defines [Edge].

use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

/// Edge leading from a start node to an end node, optionally carrying a label
///
/// Two edges are considered equal if they connect the same (ordered) pair of nodes,
/// regardless of their labels.
#[derive(Debug, Clone, Copy)]
pub struct Edge<V, L> {
    start: V,
    end: V,
    label: Option<L>,
}

impl<V, L> Edge<V, L> {
    /// Create a new [Edge].
    pub fn new(start: V, end: V, label: Option<L>) -> Self {
        Self { start, end, label }
    }

    /// Return the node this edge starts at.
    pub fn start(&self) -> &V {
        &self.start
    }

    /// Return the node this edge leads to.
    pub fn end(&self) -> &V {
        &self.end
    }

    /// Return the label, if any.
    pub fn label(&self) -> Option<&L> {
        self.label.as_ref()
    }

    /// Split the edge into its components.
    pub fn into_parts(self) -> (V, V, Option<L>) {
        (self.start, self.end, self.label)
    }
}

impl<V: Clone, L: Clone> Edge<V, L> {
    /// Return the edge with the same label pointing in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.end.clone(), self.start.clone(), self.label.clone())
    }
}

impl<V: PartialEq, L> PartialEq for Edge<V, L> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<V: Eq, L> Eq for Edge<V, L> {}

impl<V: Hash, L> Hash for Edge<V, L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl<V: Display, L: Display> Display for Edge<V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "[{}]--({label})--[{}]", self.start, self.end),
            None => write!(f, "[{}]--[{}]", self.start, self.end),
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::Edge;
    use test_log::test;

    #[test]
    fn equality_ignores_label() {
        let edge = Edge::new(1, 2, Some("a"));

        assert_eq!(edge, Edge::new(1, 2, Some("b")));
        assert_eq!(edge, Edge::new(1, 2, None));
        assert_ne!(edge, Edge::new(2, 1, Some("a")));

        let set: HashSet<_> = [edge, Edge::new(1, 2, Some("c"))].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn reversed_keeps_label() {
        let edge = Edge::new("a", "b", Some(3)).reversed();

        assert_eq!(edge.start(), &"b");
        assert_eq!(edge.end(), &"a");
        assert_eq!(edge.label(), Some(&3));
    }

    #[test]
    fn display() {
        assert_eq!(
            Edge::new("torino", "milano", Some(125.5)).to_string(),
            "[torino]--(125.5)--[milano]"
        );
        assert_eq!(Edge::<_, u32>::new(1, 2, None).to_string(), "[1]--[2]");
    }
}
