//! This module defines [SparseGraph].

use std::{
    collections::{hash_map::Entry, HashMap},
    fmt::Debug,
    hash::Hash,
};

use crate::error::Error;

use super::{Edge, Graph};

/// Graph optimized for sparse data
///
/// Every node is associated with the set of edges that start in it,
/// indexed by their end node.
/// In an undirected graph, each edge between two distinct nodes
/// is stored in the adjacency of each endpoint.
#[derive(Debug, Clone)]
pub struct SparseGraph<V, L> {
    adjacency: HashMap<V, HashMap<V, Edge<V, L>>>,
    num_edges: usize,

    directed: bool,
    labelled: bool,
}

impl<V, L> SparseGraph<V, L>
where
    V: Clone + Eq + Hash + Debug,
    L: Clone,
{
    /// Create a new empty [SparseGraph].
    pub fn new(directed: bool, labelled: bool) -> Self {
        Self::with_capacity(directed, labelled, 0)
    }

    /// Create a new empty [SparseGraph] with space for at least `nodes` nodes.
    pub fn with_capacity(directed: bool, labelled: bool, nodes: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(nodes),
            num_edges: 0,
            directed,
            labelled,
        }
    }

    /// Return the number of edges starting in `node`,
    /// or `None` if the node is not part of the graph.
    pub fn degree(&self, node: &V) -> Option<usize> {
        self.adjacency.get(node).map(HashMap::len)
    }

    /// Store a single edge record in the adjacency of its start node.
    fn insert_record(&mut self, edge: Edge<V, L>) {
        let outgoing = self
            .adjacency
            .get_mut(edge.start())
            .expect("endpoints are checked before inserting an edge");
        outgoing.insert(edge.end().clone(), edge);
    }
}

impl<V, L> Graph<V, L> for SparseGraph<V, L>
where
    V: Clone + Eq + Hash + Debug,
    L: Clone,
{
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_labelled(&self) -> bool {
        self.labelled
    }

    fn add_node(&mut self, node: V) -> bool {
        match self.adjacency.entry(node) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(HashMap::new());
                true
            }
        }
    }

    fn add_edge(&mut self, start: V, end: V, label: Option<L>) -> Result<bool, Error> {
        if self.labelled && label.is_none() {
            return Err(Error::invalid_argument(
                "add_edge",
                format!("edge ({start:?}, {end:?}) has no label but the graph is labelled"),
            ));
        }

        if !self.contains_node(&start)
            || !self.contains_node(&end)
            || self.contains_edge(&start, &end)
        {
            return Ok(false);
        }

        let label = if self.labelled { label } else { None };
        let edge = Edge::new(start, end, label);

        if !self.directed && edge.start() != edge.end() {
            self.insert_record(edge.reversed());
        }
        self.insert_record(edge);
        self.num_edges += 1;

        Ok(true)
    }

    fn contains_node(&self, node: &V) -> bool {
        self.adjacency.contains_key(node)
    }

    fn contains_edge(&self, start: &V, end: &V) -> bool {
        self.adjacency
            .get(start)
            .is_some_and(|outgoing| outgoing.contains_key(end))
    }

    fn remove_node(&mut self, node: &V) -> bool {
        let Some(outgoing) = self.adjacency.remove(node) else {
            return false;
        };

        // In an undirected graph, incoming records mirror the outgoing ones.
        let mut removed = outgoing.len();
        let directed = self.directed;
        for incoming in self.adjacency.values_mut() {
            if incoming.remove(node).is_some() && directed {
                removed += 1;
            }
        }

        log::trace!("removed node {node:?} together with {removed} edges");
        self.num_edges -= removed;

        true
    }

    fn remove_edge(&mut self, start: &V, end: &V) -> bool {
        let removed = self
            .adjacency
            .get_mut(start)
            .and_then(|outgoing| outgoing.remove(end))
            .is_some();
        if !removed {
            return false;
        }

        if !self.directed && start != end {
            if let Some(outgoing) = self.adjacency.get_mut(end) {
                outgoing.remove(start);
            }
        }
        self.num_edges -= 1;

        true
    }

    fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.adjacency.keys()
    }

    fn edges<'a>(&'a self) -> impl Iterator<Item = &'a Edge<V, L>>
    where
        V: 'a,
        L: 'a,
    {
        self.adjacency.values().flat_map(HashMap::values)
    }

    fn neighbours<'a>(&'a self, node: &V) -> Result<impl Iterator<Item = &'a V>, Error>
    where
        V: 'a,
    {
        self.adjacency
            .get(node)
            .map(HashMap::keys)
            .ok_or_else(|| {
                Error::invalid_state(
                    "neighbours",
                    format!("node {node:?} is not part of the graph"),
                )
            })
    }

    fn label(&self, start: &V, end: &V) -> Result<Option<&L>, Error> {
        if !self.labelled {
            return Err(Error::invalid_state("label", "the graph is unlabelled"));
        }

        Ok(self
            .adjacency
            .get(start)
            .and_then(|outgoing| outgoing.get(end))
            .and_then(Edge::label))
    }
}
