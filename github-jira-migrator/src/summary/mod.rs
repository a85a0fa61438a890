//! Run summary types and helpers.

mod result;
mod run_summary;

pub use result::{FailureStage, MigrationResult};
pub use run_summary::RunSummary;
