//! Run summary types.

use super::result::MigrationResult;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of issues returned by the listing calls.
    pub issues_found: usize,

    /// Number of issues migrated and closed.
    pub migrated: usize,

    /// Number of issues skipped.
    pub skipped: usize,

    /// Number of issues whose migration failed.
    pub failed: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Per-issue outcomes in processing order.
    pub results: Vec<MigrationResult>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: MigrationResult) {
        match &result {
            MigrationResult::Migrated { .. } => self.migrated += 1,
            MigrationResult::Skipped { .. } => self.skipped += 1,
            MigrationResult::Failed { .. } => self.failed += 1,
        }
        self.results.push(result);
    }

    /// Iterates over failed results.
    pub fn failures(&self) -> impl Iterator<Item = &MigrationResult> {
        self.results.iter().filter(|result| result.is_failure())
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Returns true if all operations were successful.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::FailureStage;

    #[test]
    fn can_record_result() {
        let mut summary = RunSummary::new(false);

        summary.record_result(MigrationResult::Migrated {
            issue_number: 1,
            issue_url: "https://example.com/1".to_string(),
            ticket_key: "PROJ-1".to_string(),
        });
        summary.record_result(MigrationResult::Failed {
            issue_number: 2,
            issue_url: "https://example.com/2".to_string(),
            stage: FailureStage::Submit,
            ticket_key: None,
            error: "rejected".to_string(),
        });

        assert_eq!(summary.migrated, 1);
        assert_eq!(summary.failed, 1);
        assert!(summary.has_failures());
        assert!(!summary.all_success());

        let failed: Vec<_> = summary.failures().map(MigrationResult::issue_url).collect();
        assert_eq!(failed, vec!["https://example.com/2"]);
    }

    #[test]
    fn empty_summary_is_success() {
        let summary = RunSummary::new(true);

        assert!(summary.all_success());
        assert!(summary.dry_run);
        assert!(summary.results.is_empty());
    }
}
