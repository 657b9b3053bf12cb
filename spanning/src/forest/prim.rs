//! Minimum spanning forest via Prim's algorithm.
//!
//! Each connected component is handled by growing a tree from its first node.
//! Candidate edges are kept in a [PriorityQueue] ordered by label.
//! Instead of updating entries when a cheaper edge to a node is found,
//! edges whose end node has already been reached are discarded when they reach the top.

use std::{cmp::Ordering, collections::HashSet, fmt::Debug, hash::Hash};

use crate::{
    error::Error,
    graph::{Edge, Graph},
    queue::{PriorityQueue, Queue},
};

use super::Forest;

/// Compute a minimum spanning forest of `graph`, using edge labels as weights.
///
/// Time: O(E log E).
///
/// # Errors
/// Returns [Error::InvalidState] if the graph is unlabelled.
pub fn minimum_spanning_forest<G, V, L>(graph: &G) -> Result<Forest<V, L>, Error>
where
    G: Graph<V, L>,
    V: Clone + Eq + Hash + Debug,
    L: Clone + Ord,
{
    let mut visited = HashSet::with_capacity(graph.num_nodes());
    minimum_spanning_forest_with(graph, &mut visited)
}

/// Compute a minimum spanning forest of `graph`,
/// recording reached nodes in the caller-provided set `visited`.
///
/// After a successful run, `visited` contains every node of the graph.
///
/// # Errors
/// Returns [Error::InvalidState] if the graph is unlabelled
/// and [Error::InvalidArgument] if `visited` is not empty.
pub fn minimum_spanning_forest_with<G, V, L>(
    graph: &G,
    visited: &mut HashSet<V>,
) -> Result<Forest<V, L>, Error>
where
    G: Graph<V, L>,
    V: Clone + Eq + Hash + Debug,
    L: Clone + Ord,
{
    if !graph.is_labelled() {
        return Err(Error::invalid_state(
            "minimum_spanning_forest",
            "edge labels are required as weights",
        ));
    }
    if !visited.is_empty() {
        return Err(Error::invalid_argument(
            "minimum_spanning_forest",
            format!("the visited set must be empty, found {} nodes", visited.len()),
        ));
    }

    let num_nodes = graph.num_nodes();
    let mut edges = Vec::with_capacity(num_nodes.saturating_sub(1));
    let mut trees = 0;

    for root in graph.nodes() {
        if !visited.insert(root.clone()) {
            continue;
        }

        trees += 1;
        let first_edge = edges.len();
        log::debug!("growing tree {trees} from {root:?}");

        let mut queue = PriorityQueue::new(compare_labels::<V, L>, true);
        let mut current = root.clone();

        while visited.len() < num_nodes {
            for neighbour in graph.neighbours(&current)? {
                if visited.contains(neighbour) {
                    continue;
                }

                let label = graph.label(&current, neighbour)?.cloned();
                queue.push(Edge::new(current.clone(), neighbour.clone(), label));
            }

            while queue.top().is_some_and(|edge| visited.contains(edge.end())) {
                let stale = queue.pop()?;
                log::trace!("discarding edge {:?} -> {:?}", stale.start(), stale.end());
            }

            // No edge leaves the tree, so its component is complete.
            let Ok(edge) = queue.pop() else {
                break;
            };

            visited.insert(edge.end().clone());
            current = edge.end().clone();
            edges.push(edge);
        }

        log::debug!(
            "tree {trees} rooted at {root:?} has {} edges",
            edges.len() - first_edge
        );

        if visited.len() == num_nodes {
            break;
        }
    }

    Ok(Forest::new(edges, trees))
}

/// Order edges by their labels.
fn compare_labels<V, L: Ord>(first: &Edge<V, L>, second: &Edge<V, L>) -> Ordering {
    first.label().cmp(&second.label())
}

#[cfg(test)]
mod test {
    use std::collections::{HashMap, HashSet};

    use petgraph::{
        algo::{connected_components, min_spanning_tree},
        data::Element,
        graph::UnGraph,
    };
    use quickcheck_macros::quickcheck;
    use test_log::test;

    use super::{minimum_spanning_forest, minimum_spanning_forest_with};
    use crate::{
        datatypes::Weight,
        error::Error,
        graph::{Edge, Graph, SparseGraph},
    };

    fn weight(value: f64) -> Weight {
        Weight::new(value).expect("test weights are finite")
    }

    fn weighted_graph(
        edges: &[(&'static str, &'static str, f64)],
    ) -> SparseGraph<&'static str, Weight> {
        let mut graph = SparseGraph::new(false, true);
        for &(start, end, value) in edges {
            graph.add_node(start);
            graph.add_node(end);
            graph
                .add_edge(start, end, Some(weight(value)))
                .expect("edge has a label");
        }

        graph
    }

    #[test]
    fn connected_graph() {
        let graph = weighted_graph(&[
            ("a", "b", 1.0),
            ("b", "c", 4.0),
            ("a", "c", 3.0),
            ("c", "d", 2.0),
            ("d", "e", 5.0),
            ("b", "e", 7.0),
            ("c", "e", 6.0),
        ]);

        let forest = minimum_spanning_forest(&graph).expect("graph is labelled");

        assert_eq!(forest.len(), 4);
        assert_eq!(forest.num_trees(), 1);
        assert_eq!(forest.total_weight(), Ok(weight(11.0)));

        let selected: HashSet<_> = forest
            .iter()
            .map(|edge| {
                let (start, end) = (*edge.start(), *edge.end());
                (start.min(end), start.max(end))
            })
            .collect();
        assert_eq!(
            selected,
            HashSet::from([("a", "b"), ("c", "d"), ("a", "c"), ("d", "e")])
        );
    }

    #[test]
    fn disconnected_graph() {
        let graph = weighted_graph(&[("A", "B", 1.0), ("C", "D", 2.0)]);

        let forest = minimum_spanning_forest(&graph).expect("graph is labelled");

        assert_eq!(forest.len(), 2);
        assert_eq!(forest.num_trees(), 2);
        assert_eq!(forest.total_weight(), Ok(weight(3.0)));
    }

    #[test]
    fn isolated_nodes_form_trees() {
        let mut graph = weighted_graph(&[("a", "b", 2.0)]);
        graph.add_node("c");
        graph.add_node("d");

        let mut visited = HashSet::new();
        let forest =
            minimum_spanning_forest_with(&graph, &mut visited).expect("graph is labelled");

        assert_eq!(forest.len(), 1);
        assert_eq!(forest.num_trees(), 3);
        assert_eq!(visited, HashSet::from(["a", "b", "c", "d"]));
    }

    #[test]
    fn edges_of_a_tree_are_consecutive() {
        let graph = weighted_graph(&[
            ("a", "b", 1.0),
            ("b", "c", 1.0),
            ("x", "y", 5.0),
            ("y", "z", 1.0),
        ]);

        let forest = minimum_spanning_forest(&graph).expect("graph is labelled");
        let component = |edge: &Edge<&str, Weight>| ["a", "b", "c"].contains(edge.start());

        let changes = forest
            .edges()
            .windows(2)
            .filter(|pair| component(&pair[0]) != component(&pair[1]))
            .count();
        assert_eq!(changes, 1);
        assert_eq!(forest.total_weight(), Ok(weight(8.0)));
    }

    #[test]
    fn empty_graph() {
        let graph = SparseGraph::<u32, Weight>::new(false, true);

        let forest = minimum_spanning_forest(&graph).expect("graph is labelled");
        assert!(forest.is_empty());
        assert_eq!(forest.num_trees(), 0);
    }

    #[test]
    fn self_loops_are_ignored() {
        let mut graph = weighted_graph(&[("a", "b", 4.0)]);
        graph
            .add_edge("a", "a", Some(weight(0.5)))
            .expect("edge has a label");

        let forest = minimum_spanning_forest(&graph).expect("graph is labelled");
        assert_eq!(forest.len(), 1);
        assert_eq!(forest.total_weight(), Ok(weight(4.0)));
    }

    #[test]
    fn unlabelled_graph() {
        let mut graph = SparseGraph::<u32, Weight>::new(false, false);
        graph.add_node(1);

        assert!(matches!(
            minimum_spanning_forest(&graph),
            Err(Error::InvalidState { .. })
        ));
    }

    #[test]
    fn visited_set_must_be_empty() {
        let graph = weighted_graph(&[("a", "b", 1.0)]);
        let mut visited = HashSet::from(["a"]);

        assert!(matches!(
            minimum_spanning_forest_with(&graph, &mut visited),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[quickcheck]
    #[cfg_attr(miri, ignore)]
    fn agrees_with_kruskal(num_nodes: u8, edges: Vec<(u8, u8, u8)>) -> bool {
        let num_nodes = num_nodes % 12;

        let mut graph = SparseGraph::<u8, Weight>::new(false, true);
        let mut reference = UnGraph::<u8, u32>::new_undirected();
        let mut indices = HashMap::new();

        for node in 0..num_nodes {
            graph.add_node(node);
            indices.insert(node, reference.add_node(node));
        }

        if num_nodes > 0 {
            for (start, end, value) in edges {
                let (start, end) = (start % num_nodes, end % num_nodes);
                let label = weight(f64::from(value));

                if graph.add_edge(start, end, Some(label)) == Ok(true) {
                    reference.add_edge(indices[&start], indices[&end], u32::from(value));
                }
            }
        }

        let Ok(forest) = minimum_spanning_forest(&graph) else {
            return false;
        };

        let expected = min_spanning_tree(&reference)
            .filter_map(|element| match element {
                Element::Edge { weight, .. } => Some(weight),
                Element::Node { .. } => None,
            })
            .collect::<Vec<_>>();

        forest.len() == expected.len()
            && forest.num_trees() == connected_components(&reference)
            && forest.total_weight().map(Weight::value)
                == Ok(f64::from(expected.iter().sum::<u32>()))
    }
}
