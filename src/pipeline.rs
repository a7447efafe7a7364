//! End-to-end generation pipeline.
//!
//! One synchronous pass: open the source, discard the header, fold the
//! logical lines into records, then render every record through a document
//! sink. The read handle lives for the duration of the parse and is released
//! on every exit path.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use serde::Serialize;

use crate::aggregator::{Aggregator, ColumnLayout};
use crate::errors::{Result, TcdocError};
use crate::reader::{split_fields, LogicalLineReader, DELIMITER};
use crate::record::TestCaseRecord;
use crate::render::DocumentSink;

/// Summary of one generation run, serializable for the `--json` surface.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub records: usize,
    pub files: Vec<String>,
}

/// Parses and aggregates the source file without rendering anything.
///
/// The first logical line is the header and is discarded unconditionally; a
/// source with no lines at all is `EmptyInput`. Zero records from a
/// header-only file is not an error here.
pub fn collect_records(source: &Path, layout: ColumnLayout) -> Result<Vec<TestCaseRecord>> {
    let file = File::open(source).map_err(|err| TcdocError::InputUnreadable {
        path: source.to_path_buf(),
        source: err,
    })?;
    let mut lines = LogicalLineReader::new(BufReader::new(file));

    let read_err = |err| TcdocError::InputUnreadable {
        path: source.to_path_buf(),
        source: err,
    };

    match lines.next_logical_line().map_err(read_err)? {
        Some(_header) => {}
        None => {
            return Err(TcdocError::EmptyInput {
                path: source.to_path_buf(),
            })
        }
    }

    let mut aggregator = Aggregator::new(layout);
    while let Some(line) = lines.next_logical_line().map_err(read_err)? {
        aggregator.push_row(&split_fields(&line, DELIMITER));
    }
    Ok(aggregator.finish())
}

/// Runs the full pipeline: aggregate `source`, then render one document per
/// record into `dest_dir` through `sink`.
///
/// The destination directory is created (and thereby proven writable) before
/// any document is generated.
pub fn generate(source: &Path, dest_dir: &Path, sink: &dyn DocumentSink) -> Result<RunReport> {
    fs::create_dir_all(dest_dir).map_err(|err| TcdocError::OutputUnwritable {
        path: dest_dir.to_path_buf(),
        source: err,
    })?;

    let records = collect_records(source, ColumnLayout::default())?;

    let mut files = Vec::with_capacity(records.len());
    for record in &records {
        files.push(sink.render(record, dest_dir)?);
    }
    Ok(RunReport {
        records: records.len(),
        files,
    })
}
