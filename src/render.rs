//! Document rendering.
//!
//! Rendering is a fixed template fill and is kept behind the `DocumentSink`
//! trait so the parsing and aggregation core can be tested without any
//! document-format dependency. The shipped sink writes Markdown.

use std::fs;
use std::path::Path;

use crate::errors::{Result, TcdocError};
use crate::record::TestCaseRecord;

/// Renders one completed record into one file under `dest_dir`.
pub trait DocumentSink {
    /// Returns the name of the file written.
    fn render(&self, record: &TestCaseRecord, dest_dir: &Path) -> Result<String>;
}

/// Markdown renderer: title, metadata fields, and an enumerated design-steps
/// section, one `.md` file per record named after the record.
pub struct MarkdownSink;

impl DocumentSink for MarkdownSink {
    fn render(&self, record: &TestCaseRecord, dest_dir: &Path) -> Result<String> {
        let file_name = format!("{}.md", record.name());
        let path = dest_dir.join(&file_name);
        fs::write(&path, render_markdown(record)).map_err(|source| {
            TcdocError::OutputUnwritable { path, source }
        })?;
        Ok(file_name)
    }
}

fn render_markdown(record: &TestCaseRecord) -> String {
    let mut doc = String::new();
    doc.push_str(&format!("# Test Case: {}\n\n", record.name()));
    doc.push_str(&format!("Test Case Number: {}\n\n", record.case_number()));
    doc.push_str(&format!("**User Story Number:** {}\n\n", record.story_reference));
    doc.push_str(&format!("Description: {}\n\n", record.description));
    doc.push_str(&format!("Pre-condition: {}\n\n", record.pre_condition));
    doc.push_str("## Test Data\n\n");
    if !record.steps().is_empty() {
        doc.push_str("## Design Steps\n\n");
        for step in record.steps() {
            doc.push_str(step);
            doc.push('\n');
        }
    }
    doc
}
