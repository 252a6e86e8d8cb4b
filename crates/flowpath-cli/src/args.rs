//! Command-line argument definitions for the Flowpath CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Output format and logging verbosity are global; each
//! subcommand names the model file it queries.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Flowpath diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print results as JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the edges visited by a set of completed shapes
    VisitedEdges {
        /// Path to the diagram model file (JSON)
        model: String,

        /// Ids of the completed shapes
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Reconstruct the path of a case from its completed element ids
    CasePaths {
        /// Path to the diagram model file (JSON)
        model: String,

        /// Ids of the completed elements, shapes and edges mixed
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Find the first element with the given name
    Search {
        /// Path to the diagram model file (JSON)
        model: String,

        /// Element name to look for
        name: String,

        /// Restrict the search to these kinds (comma separated)
        #[arg(long, value_delimiter = ',')]
        kinds: Vec<String>,
    },
}
