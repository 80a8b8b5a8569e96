//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `InventoryUseCase` - Fetches certificates and marks the ones CDN domains use
//! - `CleanupUseCase` - Confirms and deletes candidates, accounting for each outcome

pub mod cleanup;
pub mod inventory;
mod narrator;

pub use cleanup::{CleanupOutcome, CleanupUseCase, PromptAnswer, PromptState, Termination};
pub use inventory::{Inventory, InventoryUseCase};
