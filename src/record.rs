//! The aggregated representation of one test case.
//!
//! A `TestCaseRecord` collects the header fields of a test case together with
//! its ordered design steps. Several CSV rows (one per step) contribute to a
//! single record; the grouping key is the case-number prefix of the name.

/// The literal tag an identifier must start with to be recognized as a
/// test-case name.
pub const CASE_TAG: &str = "TC";

/// One logical test case: header fields fixed at creation, steps appended as
/// subsequent rows arrive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCaseRecord {
    name: String,
    case_number: String,
    pub story_reference: String,
    pub description: String,
    pub pre_condition: String,
    steps: Vec<String>,
}

impl TestCaseRecord {
    /// Creates a record for `name`, deriving the case-number at construction.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let case_number = derive_case_number(&name).to_string();
        Self {
            name,
            case_number,
            story_reference: String::new(),
            description: String::new(),
            pre_condition: String::new(),
            steps: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The grouping prefix: `name` up to the first underscore. Never set
    /// directly; always recomputed from `name`.
    pub fn case_number(&self) -> &str {
        &self.case_number
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Appends a `"<number> - <description>"` step. Both parts must be
    /// non-empty after trimming, otherwise the step is dropped.
    pub fn push_step(&mut self, number: &str, description: &str) {
        let number = number.trim();
        let description = description.trim();
        if number.is_empty() || description.is_empty() {
            return;
        }
        self.steps.push(format!("{} - {}", number, description));
    }
}

/// Derives the case-number from a test-case name: the substring up to (not
/// including) the first underscore, or the entire name when there is none.
pub fn derive_case_number(name: &str) -> &str {
    match name.find('_') {
        Some(idx) => &name[..idx],
        None => name,
    }
}
