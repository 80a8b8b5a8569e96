//! Inventory Use Case
//!
//! Loads the certificate set and resolves which certificates CDN domains use.

mod use_case;

pub use use_case::{Inventory, InventoryUseCase};
