//! The tcdoc Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::path::Path;
use std::process;

use clap::Parser;
use miette::Report;

use crate::aggregator::ColumnLayout;
use crate::cli::args::{Command, TcdocArgs};
use crate::errors::Result;
use crate::pipeline;
use crate::render::MarkdownSink;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = TcdocArgs::parse();

    let result = match args.command {
        Command::Generate { source, dest } => handle_generate(&source, &dest),
        Command::List { source, json } => handle_list(&source, json),
    };

    if let Err(e) = result {
        if e.is_graceful() {
            output::print_warning(&e.to_string());
            return;
        }
        eprintln!("{:?}", Report::new(e));
        process::exit(1);
    }
}

/// Handles the `generate` subcommand.
fn handle_generate(source: &Path, dest: &Path) -> Result<()> {
    let report = pipeline::generate(source, dest, &MarkdownSink)?;
    if report.records == 0 {
        output::print_warning("No test cases were read from the CSV file.");
        return Ok(());
    }
    output::print_summary(&report);
    Ok(())
}

/// Handles the `list` subcommand.
fn handle_list(source: &Path, json: bool) -> Result<()> {
    let records = pipeline::collect_records(source, ColumnLayout::default())?;
    if json {
        output::print_records_json(&records);
    } else {
        output::print_records(&records);
    }
    Ok(())
}
