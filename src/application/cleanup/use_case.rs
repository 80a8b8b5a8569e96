//! Cleanup Use Case
//!
//! Drives confirmation and deletion over a frozen candidate list.
//! Candidates are handled one at a time in list order; a failed deletion
//! is final for the run and never stops the remaining candidates.

use crate::application::narrator::Narrator;
use crate::domain::entities::Certificate;
use crate::domain::ports::{
    CertificateRepository, OperatorInput, RecordSink, RunEvent, RunEventSink,
};
use crate::domain::services::CandidateList;
use crate::domain::value_objects::{ConfirmationPolicy, RunMode};

use super::prompt::{PromptAction, PromptAnswer, PromptState};
use super::result::{CleanupOutcome, Termination};

/// The only batch confirmation answer that proceeds
pub const BATCH_CONFIRMATION: &str = "yes";

/// Cleanup use case - deletes candidates according to the run mode
pub struct CleanupUseCase<CR, OI>
where
    CR: CertificateRepository,
    OI: OperatorInput,
{
    repository: CR,
    input: OI,
}

impl<CR, OI> CleanupUseCase<CR, OI>
where
    CR: CertificateRepository,
    OI: OperatorInput,
{
    pub fn new(repository: CR, input: OI) -> Self {
        Self { repository, input }
    }

    /// Run confirmation and deletion for `candidates`.
    pub fn execute(
        &self,
        candidates: &CandidateList,
        mode: &RunMode,
        records: &dyn RecordSink,
        events: &dyn RunEventSink,
    ) -> CleanupOutcome {
        let total = candidates.len();
        let narrator = Narrator::new(events, mode.quiet);

        if candidates.is_empty() {
            records.info("check complete, no certificates to clean up");
            return CleanupOutcome::new(0).with_termination(Termination::NothingToDo);
        }

        if mode.simulate {
            records.info(&format!(
                "simulate-only run, {} unused expired certificates would be deleted",
                total
            ));
            return CleanupOutcome::new(total).with_termination(Termination::Simulated);
        }

        if mode.confirmation == ConfirmationPolicy::Batch && !self.confirm_batch(total, &narrator) {
            records.info("cleanup declined by operator");
            return CleanupOutcome::new(total).with_termination(Termination::Declined);
        }

        records.info(&format!(
            "starting cleanup of {} unused expired certificates",
            total
        ));

        let mut outcome = CleanupOutcome::new(total);
        if mode.is_interactive() {
            self.run_per_item(candidates, &mut outcome, records, &narrator);
        } else {
            narrator.emit(RunEvent::DeletionStarted { count: total });
            for cert in candidates {
                self.delete_one(cert, &mut outcome, records, &narrator);
            }
        }

        match outcome.termination {
            Termination::Quit { .. } => records.info(&format!(
                "cleanup aborted by operator: succeeded {}, skipped {}, failed {}",
                outcome.succeeded_count(),
                outcome.skipped_count(),
                outcome.failed_count()
            )),
            _ if mode.is_interactive() => records.info(&format!(
                "cleanup finished: succeeded {}, skipped {}, failed {}",
                outcome.succeeded_count(),
                outcome.skipped_count(),
                outcome.failed_count()
            )),
            _ => records.info(&format!(
                "cleanup finished: succeeded {}, failed {}",
                outcome.succeeded_count(),
                outcome.failed_count()
            )),
        }

        outcome
    }

    fn confirm_batch(&self, total: usize, narrator: &Narrator<'_>) -> bool {
        narrator.emit(RunEvent::BatchConfirmationRequested { count: total });
        let confirmed = self.input.read_line().trim() == BATCH_CONFIRMATION;
        if !confirmed {
            narrator.emit(RunEvent::BatchDeclined);
        }
        confirmed
    }

    fn run_per_item(
        &self,
        candidates: &CandidateList,
        outcome: &mut CleanupOutcome,
        records: &dyn RecordSink,
        narrator: &Narrator<'_>,
    ) {
        let total = candidates.len();
        let now = candidates.evaluated_at();
        let mut state = PromptState::default();

        for (index, cert) in candidates.iter().enumerate() {
            let answer = if state.needs_answer() {
                narrator.emit(RunEvent::CandidatePrompt {
                    index,
                    total,
                    certificate: cert.clone(),
                    days_expired: cert.days_past_expiry(now),
                });
                Some(PromptAnswer::parse(&self.input.read_line()))
            } else {
                None
            };

            let (next, action) = state.transition(answer);
            match action {
                PromptAction::Delete => self.delete_one(cert, outcome, records, narrator),
                PromptAction::Skip(reason) => {
                    records.info(&format!("skipped certificate: {} ({})", cert.label(), reason));
                    narrator.emit(RunEvent::Skipped {
                        certificate: cert.clone(),
                        reason,
                    });
                    outcome.add_skipped(cert.id(), reason);
                }
                PromptAction::Stop => {
                    narrator.emit(RunEvent::Aborted);
                    outcome.termination = Termination::Quit { at: index };
                    return;
                }
            }

            if state.needs_answer() && next == PromptState::ApplyAllRemaining {
                narrator.emit(RunEvent::DeletingRemaining {
                    remaining: total - index - 1,
                });
            }
            state = next;
        }
    }

    fn delete_one(
        &self,
        cert: &Certificate,
        outcome: &mut CleanupOutcome,
        records: &dyn RecordSink,
        narrator: &Narrator<'_>,
    ) {
        match self.repository.delete_certificate(cert.id()) {
            Ok(()) => {
                records.info(&format!("deleted certificate: {}", cert.label()));
                narrator.emit(RunEvent::Deleted {
                    certificate: cert.clone(),
                });
                outcome.add_deleted(cert.id());
            }
            Err(e) => {
                let error = e.to_string();
                records.error(&format!(
                    "failed to delete certificate: {} - {}",
                    cert.label(),
                    error
                ));
                narrator.emit(RunEvent::DeleteFailed {
                    certificate: cert.clone(),
                    error: error.clone(),
                });
                outcome.add_failed(cert.id(), cert.name(), error);
            }
        }
    }
}
