//! Defines the command-line arguments and subcommands for the tcdoc CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "tcdoc",
    version,
    about = "Generates one formatted document per test case from a CSV export."
)]
pub struct TcdocArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Full pipeline: parse the export and write one document per test case.
    Generate {
        /// The path to the CSV export to read.
        #[arg(required = true)]
        source: PathBuf,
        /// The directory to write the generated documents into.
        #[arg(required = true)]
        dest: PathBuf,
    },
    /// Parse the export and print the test cases without writing documents.
    List {
        /// The path to the CSV export to read.
        #[arg(required = true)]
        source: PathBuf,
        /// Emit the summary as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },
}
