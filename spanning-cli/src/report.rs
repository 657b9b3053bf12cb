//! Printing of computed forests

use std::{fmt::Display, io::Write};

use spanning::{datatypes::Weight, forest::Forest};

use crate::{cli::ReportArgs, error::CliError};

/// Write a summary of `forest` to `summary` and its edges to `listing`.
pub(crate) fn write_report<V, S, E>(
    forest: &Forest<V, Weight>,
    settings: &ReportArgs,
    summary: &mut S,
    listing: &mut E,
) -> Result<(), CliError>
where
    V: Display,
    S: Write,
    E: Write,
{
    let total = forest.total_weight()?.value();

    writeln!(summary, "Number of edges: {}", forest.len())?;
    if settings.unit.is_empty() {
        writeln!(summary, "Total weight: {total:.0$}", settings.precision)?;
    } else {
        writeln!(
            summary,
            "Total weight: {total:.0$} {1}",
            settings.precision, settings.unit
        )?;
    }

    if !settings.summary_only {
        for edge in forest {
            writeln!(listing, "{edge}")?;
        }
    }
    listing.flush()?;

    Ok(())
}

#[cfg(test)]
mod test {
    use spanning::{
        datatypes::Weight,
        error::Error,
        forest::minimum_spanning_forest,
        graph::{Graph, SparseGraph},
    };
    use test_log::test;

    use super::write_report;
    use crate::{cli::ReportArgs, error::CliError};

    fn settings(unit: &str, precision: usize, summary_only: bool) -> ReportArgs {
        ReportArgs {
            unit: unit.to_owned(),
            precision,
            summary_only,
        }
    }

    fn report(settings: &ReportArgs) -> (String, String) {
        let mut graph = SparseGraph::new(false, true);
        graph.add_node("A");
        graph.add_node("B");
        graph
            .add_edge("A", "B", Weight::new(1.26).ok())
            .expect("edge has a label");

        let forest = minimum_spanning_forest(&graph).expect("graph is labelled");

        let mut summary = Vec::new();
        let mut listing = Vec::new();
        write_report(&forest, settings, &mut summary, &mut listing).expect("writing to memory");

        (
            String::from_utf8(summary).expect("report is valid utf8"),
            String::from_utf8(listing).expect("report is valid utf8"),
        )
    }

    #[test]
    fn summary_and_listing() {
        let (summary, listing) = report(&settings("km", 0, false));

        assert_eq!(summary, "Number of edges: 1\nTotal weight: 1 km\n");
        assert!(listing == "[A]--(1.26)--[B]\n" || listing == "[B]--(1.26)--[A]\n");
    }

    #[test]
    fn precision_and_unit() {
        let (summary, _) = report(&settings("", 2, false));
        assert_eq!(summary, "Number of edges: 1\nTotal weight: 1.26\n");

        let (summary, listing) = report(&settings("mi", 1, true));
        assert_eq!(summary, "Number of edges: 1\nTotal weight: 1.3 mi\n");
        assert!(listing.is_empty());
    }

    #[test]
    fn overflowing_total_weight() {
        let mut graph = SparseGraph::new(false, true);
        for node in ["A", "B", "C"] {
            graph.add_node(node);
        }
        for (start, end) in [("A", "B"), ("B", "C")] {
            graph
                .add_edge(start, end, Weight::new(1e308).ok())
                .expect("edge has a label");
        }
        let forest = minimum_spanning_forest(&graph).expect("graph is labelled");

        let mut summary = Vec::new();
        let mut listing = Vec::new();
        let result = write_report(&forest, &settings("km", 0, false), &mut summary, &mut listing);

        assert!(matches!(
            result,
            Err(CliError::Spanning(Error::WeightOverflow))
        ));
        assert!(summary.is_empty());
        assert!(listing.is_empty());
    }
}
