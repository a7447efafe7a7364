//! Grouping of CSV rows into test-case records.
//!
//! Each row carries at most one design step; a test case is the run of rows
//! sharing a case-number prefix. The aggregator is an explicit fold over the
//! row stream, carrying the tracked case-number and the output list.

use crate::record::{derive_case_number, TestCaseRecord, CASE_TAG};

// ============================================================================
// COLUMN LAYOUT - fixed 0-indexed mapping of the export format
// ============================================================================

/// Which column holds which field. Defaults match the observed export:
/// story reference in column 0, name in 1, description in 2, precondition in
/// 10, step number in 11, step description in 12.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    pub story_reference: usize,
    pub name: usize,
    pub description: usize,
    pub pre_condition: usize,
    pub step_number: usize,
    pub step_description: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            story_reference: 0,
            name: 1,
            description: 2,
            pre_condition: 10,
            step_number: 11,
            step_description: 12,
        }
    }
}

// ============================================================================
// AGGREGATOR - one pass, one mutable accumulator
// ============================================================================

/// Accumulates field-sequences into an ordered list of records.
pub struct Aggregator {
    layout: ColumnLayout,
    tracked_case_number: Option<String>,
    records: Vec<TestCaseRecord>,
}

impl Aggregator {
    pub fn new(layout: ColumnLayout) -> Self {
        Self {
            layout,
            tracked_case_number: None,
            records: Vec::new(),
        }
    }

    /// Consumes one field-sequence. Rows with a recognized identifier whose
    /// case-number differs from the tracked one open a new record; every row
    /// may contribute a step to the current record. Short rows degrade to
    /// "field absent" and are never an error.
    pub fn push_row(&mut self, fields: &[String]) {
        let name = field_at(fields, self.layout.name).trim();

        if !name.is_empty() && name.starts_with(CASE_TAG) {
            let case_number = derive_case_number(name);
            if self.tracked_case_number.as_deref() != Some(case_number) {
                let mut record = TestCaseRecord::new(name);
                record.story_reference =
                    field_at(fields, self.layout.story_reference).trim().to_string();
                record.description = field_at(fields, self.layout.description).trim().to_string();
                record.pre_condition =
                    field_at(fields, self.layout.pre_condition).trim().to_string();
                self.tracked_case_number = Some(record.case_number().to_string());
                self.records.push(record);
            }
        }

        // Step columns apply to whichever record is current, whether or not
        // this row opened it. No current record means the row is ignored.
        if fields.len() > self.layout.step_description.max(self.layout.step_number) {
            if let Some(current) = self.records.last_mut() {
                current.push_step(
                    &fields[self.layout.step_number],
                    &fields[self.layout.step_description],
                );
            }
        }
    }

    /// Yields the completed records in the order their defining rows were
    /// first seen.
    pub fn finish(self) -> Vec<TestCaseRecord> {
        self.records
    }
}

fn field_at(fields: &[String], index: usize) -> &str {
    fields.get(index).map(String::as_str).unwrap_or("")
}

/// Folds an entire row stream into records with the given layout.
pub fn aggregate<'a, I>(rows: I, layout: ColumnLayout) -> Vec<TestCaseRecord>
where
    I: IntoIterator<Item = &'a Vec<String>>,
{
    let mut aggregator = Aggregator::new(layout);
    for row in rows {
        aggregator.push_row(row);
    }
    aggregator.finish()
}
