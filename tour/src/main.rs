//! `tour`: runs each unit of `rudiments` on a small input and prints the
//! results, as text or as JSON.
//!
//! Library events are emitted through `tracing`; raise the level with `-v`
//! or set `RUST_LOG` (for example `RUST_LOG=rudiments=trace`).

use anyhow::Result;
use clap::{Parser, Subcommand};
use rudiments::graph::NodeId;
use rudiments::sort::Algorithm;
use tracing_subscriber::{fmt, EnvFilter};

mod report;
mod units;

#[derive(Parser)]
#[command(name = "tour")]
#[command(about = "A guided tour of the rudiments data structures and algorithms", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a graph and traverse it breadth- and depth-first
    Graph(units::GraphArgs),
    /// Push, pop, enqueue and dequeue, including on empty containers
    StackQueue,
    /// Singly, doubly and circular linked lists
    Lists,
    /// Binary tree traversals and a binary search tree
    Trees,
    /// Linear, binary, jump and interpolation search
    Search {
        /// Value to look for
        #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
        target: i64,

        /// Values to search (sorted before searching)
        #[arg(value_delimiter = ',', allow_negative_numbers = true, default_values_t = [1, 2, 3, 4, 5])]
        values: Vec<i64>,
    },
    /// Bubble, insertion, selection and quick sort
    Sort {
        /// Run only this algorithm
        #[arg(long, value_parser = units::parse_algorithm)]
        algorithm: Option<Algorithm>,

        /// Values to sort
        #[arg(value_delimiter = ',', allow_negative_numbers = true, default_values_t = [64, 25, 12, 22, 11])]
        values: Vec<i64>,
    },
    /// Scans, two pointers, sliding windows and matrices
    Arrays,
    /// Character-aware string helpers
    Strings {
        /// Text to work on
        #[arg(default_value = "Hello, World!")]
        text: String,
    },
    /// Factorial, Fibonacci and N-Queens
    Recursion {
        /// Argument for factorial and Fibonacci
        #[arg(short, default_value_t = 10)]
        n: u32,

        /// Board size for N-Queens
        #[arg(long, default_value_t = 4)]
        queens: usize,
    },
    /// Shapes, vehicles, a bank account and an employee
    Models,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let section = match &cli.command {
        Commands::Graph(args) => units::graph(args)?,
        Commands::StackQueue => units::stacks_and_queues()?,
        Commands::Lists => units::linked_lists()?,
        Commands::Trees => units::trees()?,
        Commands::Search { target, values } => units::searching(values, *target)?,
        Commands::Sort { algorithm, values } => units::sorting(values, *algorithm)?,
        Commands::Arrays => units::array_techniques()?,
        Commands::Strings { text } => units::string_helpers(text)?,
        Commands::Recursion { n, queens } => units::recursion_demos(*n, *queens)?,
        Commands::Models => units::models()?,
    };
    tracing::debug!(unit = section.unit, entries = section.entries.len(), "unit finished");
    report::emit(&section, cli.json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn graph_flags_parse() {
        let cli = Cli::try_parse_from(["tour", "graph", "--start", "2", "--edges", "1:2,2:3"]).unwrap();
        match cli.command {
            Commands::Graph(args) => {
                assert_eq!(args.start, 2);
                assert_eq!(args.edges, vec![(1, 2), (2, 3)]);
            }
            _ => panic!("expected graph subcommand"),
        }
    }

    #[test]
    fn unknown_start_node_is_an_error() {
        let cli = Cli::try_parse_from(["tour", "graph", "--start", "9"]).unwrap();
        let Commands::Graph(args) = cli.command else {
            panic!("expected graph subcommand");
        };
        let err = units::graph(&args).unwrap_err();
        assert!(format!("{err:#}").contains("unknown node 9"));
    }

    #[test]
    fn huge_matrix_ids_are_an_error() {
        let cli = Cli::try_parse_from([
            "tour",
            "graph",
            "--repr",
            "matrix",
            "--start",
            "0",
            "--edges",
            "0:4294967296",
        ])
        .unwrap();
        let Commands::Graph(args) = cli.command else {
            panic!("expected graph subcommand");
        };
        let err = units::graph(&args).unwrap_err();
        assert!(format!("{err:#}").contains("must be below 4096"));
    }

    #[test]
    fn every_unit_reports() {
        assert!(!units::stacks_and_queues().unwrap().entries.is_empty());
        assert!(!units::linked_lists().unwrap().entries.is_empty());
        assert!(!units::trees().unwrap().entries.is_empty());
        assert!(!units::array_techniques().unwrap().entries.is_empty());
        assert!(!units::models().unwrap().entries.is_empty());
        let sorted = units::sorting(&[3, 1, 2], Some(Algorithm::Quick)).unwrap();
        assert_eq!(sorted.entries[1].value, serde_json::json!([1, 2, 3]));
        let found = units::searching(&[5, 1, 3], 3).unwrap();
        assert!(found
            .entries
            .iter()
            .filter(|e| e.label != "input (sorted)" && e.label != "target")
            .all(|e| e.value == serde_json::json!(1)));
    }

    #[test]
    fn parses_algorithm_names() {
        assert_eq!(units::parse_algorithm("Quick"), Ok(Algorithm::Quick));
        assert!(units::parse_algorithm("bogo").is_err());
    }
}
