//! This module defines the [Graph] abstraction and its sparse implementation.

pub(crate) mod edge;
pub(crate) mod sparse;

pub use edge::Edge;
pub use sparse::SparseGraph;

use crate::error::Error;

/// Capabilities of a graph over nodes of type `V` with edge labels of type `L`.
///
/// Whether the graph is directed or labelled is fixed when it is created.
/// Mutating operations report "nothing to do" (duplicates, missing elements)
/// through their boolean result and reserve [Error] for contract violations.
pub trait Graph<V, L> {
    /// Return `true` if edges of this graph have a direction.
    fn is_directed(&self) -> bool;

    /// Return `true` if every edge of this graph carries a label.
    fn is_labelled(&self) -> bool;

    /// Add a node to the graph.
    ///
    /// Returns `false` if the node was already present.
    fn add_node(&mut self, node: V) -> bool;

    /// Add an edge from `start` to `end`.
    ///
    /// In an undirected graph the mirrored edge is added as well.
    /// Returns `Ok(false)` without changing the graph
    /// if one of the endpoints is missing or an edge between them already exists.
    /// The label of an existing edge is never replaced.
    ///
    /// # Errors
    /// Returns [Error::InvalidArgument] if the graph is labelled and `label` is `None`.
    fn add_edge(&mut self, start: V, end: V, label: Option<L>) -> Result<bool, Error>;

    /// Return `true` if `node` is part of the graph.
    fn contains_node(&self, node: &V) -> bool;

    /// Return `true` if there is an edge from `start` to `end`.
    fn contains_edge(&self, start: &V, end: &V) -> bool;

    /// Remove `node` together with every edge that starts or ends in it.
    ///
    /// Returns `false` if the node was not present.
    fn remove_node(&mut self, node: &V) -> bool;

    /// Remove the edge from `start` to `end` (and its mirror in an undirected graph).
    ///
    /// Returns `false` if there is no such edge.
    fn remove_edge(&mut self, start: &V, end: &V) -> bool;

    /// Return the number of nodes.
    fn num_nodes(&self) -> usize;

    /// Return the number of edges, counting an undirected edge once.
    fn num_edges(&self) -> usize;

    /// Return an iterator over all nodes.
    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a;

    /// Return an iterator over all stored edge records.
    ///
    /// An undirected edge is stored in both directions,
    /// so both records are returned.
    fn edges<'a>(&'a self) -> impl Iterator<Item = &'a Edge<V, L>>
    where
        V: 'a,
        L: 'a;

    /// Return an iterator over the nodes reachable from `node` via one edge.
    ///
    /// # Errors
    /// Returns [Error::InvalidState] if `node` is not part of the graph.
    fn neighbours<'a>(&'a self, node: &V) -> Result<impl Iterator<Item = &'a V>, Error>
    where
        V: 'a;

    /// Return the label of the edge from `start` to `end`,
    /// or `None` if there is no such edge.
    ///
    /// # Errors
    /// Returns [Error::InvalidState] if the graph is unlabelled.
    fn label(&self, start: &V, end: &V) -> Result<Option<&L>, Error>;
}
