//! This crate provides a sparse graph, an indexed priority queue,
//! and the computation of minimum spanning forests with Prim's algorithm,
//! which combines the two.
//!
//! # Example
//! ```
//! use spanning::{
//!     datatypes::Weight,
//!     forest::minimum_spanning_forest,
//!     graph::{Graph, SparseGraph},
//! };
//!
//! # fn main() -> Result<(), spanning::error::Error> {
//! let mut graph = SparseGraph::new(false, true);
//! for node in ["torino", "milano", "genova"] {
//!     graph.add_node(node);
//! }
//! graph.add_edge("torino", "milano", Some(Weight::new(125.0)?))?;
//! graph.add_edge("milano", "genova", Some(Weight::new(119.0)?))?;
//! graph.add_edge("genova", "torino", Some(Weight::new(122.0)?))?;
//!
//! let forest = minimum_spanning_forest(&graph)?;
//! assert_eq!(forest.len(), 2);
//! assert_eq!(forest.total_weight()?, Weight::new(241.0)?);
//! # Ok(())
//! # }
//! ```

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

pub mod datatypes;
pub mod error;
pub mod forest;
pub mod graph;
pub mod queue;
