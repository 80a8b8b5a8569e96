//! Domain Layer
//!
//! Pure logic for deciding which certificates are safe to remove.
//!
//! ## Structure
//!
//! - `entities/` - Certificates and usage lookups
//! - `value_objects/` - Timestamps and run modes
//! - `services/` - Usage classification, eligibility, statistics
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the network or terminal directly
//! 2. **Frozen clock** - Every time comparison takes an explicit `now`
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
