//! Run Event Port
//!
//! Observable interface for console narration and prompts. Records for the
//! operational log go through `RecordSink` instead.

use crate::domain::entities::Certificate;

/// Why a candidate was not deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Operator answered `n`
    Declined,
    /// Operator answer matched no option
    InvalidAnswer,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Declined => write!(f, "declined"),
            SkipReason::InvalidAnswer => write!(f, "invalid answer"),
        }
    }
}

/// Event emitted during a run
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// Certificate list fetched
    CertificatesFetched { count: usize },

    /// Domain list fetched, binding lookups about to start
    DomainsFetched { count: usize },

    /// Binding lookups finished
    UsageResolved {
        in_use: usize,
        failed_lookups: usize,
        foreign_bindings: usize,
    },

    /// Waiting for the single batch `yes`
    BatchConfirmationRequested { count: usize },

    /// Batch confirmation was not `yes`
    BatchDeclined,

    /// Non-interactive deletion is starting
    DeletionStarted { count: usize },

    /// Waiting for a per-item answer
    CandidatePrompt {
        index: usize,
        total: usize,
        certificate: Certificate,
        days_expired: Option<i64>,
    },

    /// Operator chose `all`; the rest are deleted without prompts
    DeletingRemaining { remaining: usize },

    /// Candidate deleted
    Deleted { certificate: Certificate },

    /// Candidate deletion failed
    DeleteFailed {
        certificate: Certificate,
        error: String,
    },

    /// Candidate skipped
    Skipped {
        certificate: Certificate,
        reason: SkipReason,
    },

    /// Operator chose `quit`
    Aborted,
}

impl RunEvent {
    /// Per-item narration that quiet mode suppresses
    pub fn is_narration(&self) -> bool {
        matches!(
            self,
            RunEvent::CertificatesFetched { .. }
                | RunEvent::DomainsFetched { .. }
                | RunEvent::UsageResolved { .. }
                | RunEvent::DeletionStarted { .. }
                | RunEvent::Deleted { .. }
                | RunEvent::DeleteFailed { .. }
                | RunEvent::Skipped { .. }
        )
    }
}

/// Trait for receiving run events
pub trait RunEventSink: Send + Sync {
    fn on_event(&self, event: RunEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RunEventSink for NoopEventSink {
    fn on_event(&self, _event: RunEvent) {}
}
