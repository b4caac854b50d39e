//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `promptlog`.
#[derive(Debug, Parser)]
#[command(name = "promptlog", version, about = "Export and import prompt logs as JSON")]
pub struct Cli {
    /// Serve every port from this cassette instead of the live system.
    #[arg(long, global = true, value_name = "CASSETTE")]
    pub replay: Option<PathBuf>,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask where to save an export and print the chosen path.
    SelectSave {
        /// Prefix of the suggested filename.
        #[arg(default_value = "")]
        prefix: String,
    },
    /// Pretty-print JSON into a file.
    Export {
        /// File to write, replaced if it exists.
        path: PathBuf,
        /// JSON to export. Read from stdin when omitted.
        #[arg(long)]
        data: Option<String>,
    },
    /// Ask for a JSON file to import and print the chosen path.
    SelectFile,
    /// Print the raw contents of a log file.
    Import {
        /// File to read.
        path: PathBuf,
    },
    /// Answer JSON bridge requests on stdin, one per line.
    Serve,
}
