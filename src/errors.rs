//! Error taxonomy for a generation run.
//!
//! Only two conditions are terminal: an unreadable source and an unwritable
//! destination. Malformed rows are never errors; they degrade per the reader
//! and aggregator rules. All variants carry enough context to render a
//! useful `miette` diagnostic at the CLI boundary.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TcdocError>;

#[derive(Debug, Error)]
pub enum TcdocError {
    #[error("cannot read source file `{path}`")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("nothing to process in `{path}`")]
    EmptyInput { path: PathBuf },

    #[error("cannot write to destination `{path}`")]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TcdocError {
    /// True for the conditions the CLI reports as a warning and exits zero,
    /// rather than as a terminal failure.
    pub fn is_graceful(&self) -> bool {
        matches!(self, TcdocError::EmptyInput { .. })
    }
}

impl Diagnostic for TcdocError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self {
            TcdocError::InputUnreadable { .. } => "tcdoc::input",
            TcdocError::EmptyInput { .. } => "tcdoc::empty",
            TcdocError::OutputUnwritable { .. } => "tcdoc::output",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let help = match self {
            TcdocError::InputUnreadable { .. } => {
                "check that the CSV export exists and is readable"
            }
            TcdocError::EmptyInput { .. } => {
                "the file has no rows beyond the header; nothing was generated"
            }
            TcdocError::OutputUnwritable { .. } => {
                "check that the destination directory can be created and written"
            }
        };
        Some(Box::new(help))
    }
}
