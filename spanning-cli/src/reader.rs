//! Reading of weighted edge lists
//!
//! Every record of the input consists of exactly three fields `from`, `to` and `weight`,
//! describing an undirected edge between two nodes.
//! Node names are taken verbatim, the weight is parsed as a floating point number.

use std::{fs::File, io::Read, path::Path};

use csv::ReaderBuilder;
use spanning::{
    datatypes::Weight,
    graph::{Graph, SparseGraph},
};

use crate::error::CliError;

/// Graph built from an edge list
pub(crate) type EdgeListGraph = SparseGraph<String, Weight>;

/// Read the edge list stored at `path`, using `delimiter` to separate fields.
pub(crate) fn read_graph_from_file(path: &Path, delimiter: u8) -> Result<EdgeListGraph, CliError> {
    let filename = path.display().to_string();
    let file = File::open(path).map_err(|error| CliError::IoReading {
        error,
        filename: filename.clone(),
    })?;

    read_graph(file, delimiter, &filename)
}

/// Read an edge list from `input`.
///
/// Edges that connect already connected nodes are ignored.
/// `filename` is only used for error messages.
pub(crate) fn read_graph<R: Read>(
    input: R,
    delimiter: u8,
    filename: &str,
) -> Result<EdgeListGraph, CliError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(input);

    let mut graph = SparseGraph::new(false, true);

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map_or(index as u64 + 1, |position| position.line());
        let malformed = |reason: String| CliError::MalformedRecord {
            filename: filename.to_owned(),
            line,
            reason,
        };

        if record.len() != 3 {
            return Err(malformed(format!(
                "expected 3 fields, found {}",
                record.len()
            )));
        }
        let (from, to, weight) = (&record[0], &record[1], &record[2]);

        let weight = weight
            .trim()
            .parse::<Weight>()
            .map_err(|error| malformed(format!("invalid weight \"{weight}\": {error}")))?;

        graph.add_node(from.to_owned());
        graph.add_node(to.to_owned());
        if !graph.add_edge(from.to_owned(), to.to_owned(), Some(weight))? {
            log::debug!("line {line}: ignoring repeated edge between \"{from}\" and \"{to}\"");
        }
    }

    log::info!(
        "read {} nodes and {} edges from \"{filename}\"",
        graph.num_nodes(),
        graph.num_edges()
    );

    Ok(graph)
}
