//! Cleanup result types

use crate::domain::ports::SkipReason;

/// How a cleanup run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// No candidates; nothing was asked or attempted
    NothingToDo,
    /// Simulate-only; candidates reported, nothing attempted
    Simulated,
    /// Batch confirmation was not `yes`
    Declined,
    /// Every candidate was visited
    Completed,
    /// Operator quit at this zero-based candidate index
    Quit { at: usize },
}

/// A candidate that could not be deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDeletion {
    pub id: String,
    pub name: String,
    pub error: String,
}

/// A candidate the operator skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCertificate {
    pub id: String,
    pub reason: SkipReason,
}

/// Result of a cleanup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOutcome {
    /// Number of candidates the run was given
    pub candidates: usize,
    /// Ids deleted successfully, in attempt order
    pub deleted: Vec<String>,
    pub skipped: Vec<SkippedCertificate>,
    pub failed: Vec<FailedDeletion>,
    pub termination: Termination,
}

impl CleanupOutcome {
    pub fn new(candidates: usize) -> Self {
        Self {
            candidates,
            deleted: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
            termination: Termination::Completed,
        }
    }

    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    pub fn add_deleted(&mut self, id: impl Into<String>) {
        self.deleted.push(id.into());
    }

    pub fn add_skipped(&mut self, id: impl Into<String>, reason: SkipReason) {
        self.skipped.push(SkippedCertificate {
            id: id.into(),
            reason,
        });
    }

    pub fn add_failed(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        error: impl Into<String>,
    ) {
        self.failed.push(FailedDeletion {
            id: id.into(),
            name: name.into(),
            error: error.into(),
        });
    }

    pub fn succeeded_count(&self) -> usize {
        self.deleted.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Delete attempts made
    pub fn attempted_count(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    /// Candidates that reached a final outcome
    pub fn processed_count(&self) -> usize {
        self.attempted_count() + self.skipped.len()
    }

    /// Run succeeds when no deletion failed
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
