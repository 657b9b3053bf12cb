//! This module collects the data types used as edge labels.

pub(crate) mod weight;
pub use weight::Weight;
