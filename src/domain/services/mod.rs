//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod eligibility;
mod inventory_stats;
mod usage_classifier;

pub use eligibility::{is_candidate, CandidateList};
pub use inventory_stats::InventoryStats;
pub use usage_classifier::{classify_usage, mark_usage};
