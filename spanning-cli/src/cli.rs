//! Contains structures and functionality for the binary
use std::path::PathBuf;

/// Cli Arguments related to logging
#[derive(clap::Args, Debug)]
pub(crate) struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::builder::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Reduce log verbosity to show only errors (equivalent to --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
    /// Set log verbosity (default is "warn")
    #[arg(long = "log", value_parser=clap::builder::PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]), group = "verbosity")]
    log_level: Option<String>,
}

impl LoggingArgs {
    /// Initialising Logging
    ///
    /// Sets the logging verbosity to the given log-level in the following order:
    ///  * `Info`, `Debug`, `Trace`; depending on the count of `-v`
    ///  * `Error` when `-q` is used
    ///  * The `SPANNING_LOG` environment variable value
    ///  * `Warn` otherwise
    pub(crate) fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();

        // Default log level
        builder.filter_level(log::LevelFilter::Warn);

        builder.parse_env("SPANNING_LOG");
        if let Some(ref level) = self.log_level {
            builder.parse_filters(level);
        } else if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                3 => log::LevelFilter::Trace,
                _ => log::LevelFilter::Warn,
            });
        }
        builder.init();
    }
}

/// Cli arguments related to the printed report
#[derive(clap::Args, Debug)]
pub(crate) struct ReportArgs {
    /// Unit printed after the total weight
    #[arg(long = "unit", default_value = "km")]
    pub(crate) unit: String,
    /// Number of decimal places of the total weight
    #[arg(long = "precision", default_value_t = 0)]
    pub(crate) precision: usize,
    /// Only print the summary, not the selected edges
    #[arg(long = "summary-only", default_value = "false")]
    pub(crate) summary_only: bool,
}

/// Compute the minimum spanning forest of a weighted graph
#[derive(clap::Parser, Debug)]
#[command(name = "spanning", author, version, about)]
pub struct CliApp {
    /// Edge list with one `from,to,weight` record per line
    #[arg(value_parser, required = true)]
    pub(crate) input: PathBuf,
    /// Character separating the fields of a record
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub(crate) delimiter: u8,
    /// Arguments related to the report
    #[command(flatten)]
    pub(crate) report: ReportArgs,
    /// Arguments related to logging
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
}

/// Parse a field delimiter, which has to be a single ASCII character.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [delimiter] if delimiter.is_ascii() => Ok(*delimiter),
        _ => Err(format!("delimiter must be a single ASCII character: {s}")),
    }
}
