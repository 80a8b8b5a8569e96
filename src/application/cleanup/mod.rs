//! Cleanup Use Case
//!
//! Executes deletion of candidate certificates.
//!
//! This module handles:
//! - Simulate-only short circuit
//! - Batch confirmation, per-item confirmation, or none
//! - Independent per-candidate deletion with outcome accounting

mod prompt;
mod result;
mod use_case;

pub use prompt::{PromptAction, PromptAnswer, PromptState};
pub use result::{CleanupOutcome, FailedDeletion, SkippedCertificate, Termination};
pub use use_case::{CleanupUseCase, BATCH_CONFIRMATION};
