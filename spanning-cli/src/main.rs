/*!
  Binary for the CLI of spanning
*/

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

pub mod cli;
pub mod error;
pub(crate) mod reader;
pub(crate) mod report;

use std::io::{self, BufWriter};

use clap::Parser;
use cli::CliApp;
use colored::Colorize;
use error::CliError;
use spanning::{forest::minimum_spanning_forest, graph::Graph};

fn run(cli: CliApp) -> Result<(), CliError> {
    log::info!("Reading edge list ...");
    let graph = reader::read_graph_from_file(&cli.input, cli.delimiter)?;

    log::info!("Computing minimum spanning forest ...");
    let forest = minimum_spanning_forest(&graph)?;
    log::info!(
        "Selected {} edges forming {} trees over {} nodes",
        forest.len(),
        forest.num_trees(),
        graph.num_nodes()
    );

    let mut summary = io::stderr().lock();
    let mut listing = BufWriter::new(io::stdout().lock());
    report::write_report(&forest, &cli.report, &mut summary, &mut listing)
}

fn main() {
    let cli = CliApp::parse();

    cli.logging.initialize_logging();
    log::info!("Version: {}", clap::crate_version!());
    log::debug!("Input file: {:?}", cli.input);

    run(cli).unwrap_or_else(|err| {
        log::error!("{} {err}", "error:".red().bold());
        std::process::exit(1)
    })
}
