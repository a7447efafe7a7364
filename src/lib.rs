pub use crate::errors::{Result, TcdocError};
pub use crate::record::{derive_case_number, TestCaseRecord};

pub mod aggregator;
pub mod cli;
pub mod errors;
pub mod pipeline;
pub mod reader;
pub mod record;
pub mod render;
