//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cidr-converter")]
#[command(author, version, about = "Normalise, merge and aggregate IPv4 CIDR blocks")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose mode (debug output on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Number of parse workers (overrides CIDR_WORKERS)
    #[arg(short, long, global = true)]
    pub workers: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge and aggregate blocks from stdin, a .csv or a .json file
    Merge {
        /// Input file (.csv or .json); stdin when omitted or "-"
        input: Option<String>,

        /// Output JSON file (overrides CIDR_OUTPUT_FILE)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the JSON result to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Also print a CSV table of the resulting blocks
        #[arg(long)]
        table: bool,
    },

    /// Check which block of the normalised input contains an address
    Check {
        /// IPv4 address to look up
        address: String,

        /// Input file (.csv or .json); stdin when omitted or "-"
        input: Option<String>,
    },
}
