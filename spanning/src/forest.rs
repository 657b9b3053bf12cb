//! This module defines [Forest] and the computation of minimum spanning forests.

pub(crate) mod prim;

pub use prim::{minimum_spanning_forest, minimum_spanning_forest_with};

use std::slice;

use num::{CheckedAdd, Zero};

use crate::{error::Error, graph::Edge};

/// Edges selected by [minimum_spanning_forest], in the order they were selected
///
/// The edges of each tree appear consecutively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forest<V, L> {
    edges: Vec<Edge<V, L>>,
    trees: usize,
}

impl<V, L> Forest<V, L> {
    pub(crate) fn new(edges: Vec<Edge<V, L>>, trees: usize) -> Self {
        Self { edges, trees }
    }

    /// Return the number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Return `true` if the forest contains no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Return the number of trees.
    /// A node without any selected edge forms a tree on its own.
    pub fn num_trees(&self) -> usize {
        self.trees
    }

    /// Return the selected edges.
    pub fn edges(&self) -> &[Edge<V, L>] {
        &self.edges
    }

    /// Return an iterator over the selected edges.
    pub fn iter(&self) -> slice::Iter<'_, Edge<V, L>> {
        self.edges.iter()
    }
}

impl<V, L> Forest<V, L>
where
    L: Zero + CheckedAdd,
{
    /// Return the sum of all edge labels.
    ///
    /// # Errors
    /// Returns [Error::WeightOverflow] if the sum is not representable.
    pub fn total_weight(&self) -> Result<L, Error> {
        self.edges
            .iter()
            .filter_map(Edge::label)
            .try_fold(L::zero(), |total, label| total.checked_add(label))
            .ok_or(Error::WeightOverflow)
    }
}

impl<V, L> IntoIterator for Forest<V, L> {
    type Item = Edge<V, L>;
    type IntoIter = std::vec::IntoIter<Edge<V, L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<'a, V, L> IntoIterator for &'a Forest<V, L> {
    type Item = &'a Edge<V, L>;
    type IntoIter = slice::Iter<'a, Edge<V, L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
