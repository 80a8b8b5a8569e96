//! Common test utilities for bce-cert-cleaner integration tests.
//!
//! This module provides:
//! - Fakes for the provider ports, operator input and sinks
//! - `TestEnv`: isolated config/home directories for CLI runs
//! - Fixtures: certificate records relative to a fixed instant

#![allow(dead_code)]

pub mod env;
pub mod fakes;
pub mod fixtures;

pub use env::*;
pub use fakes::*;
pub use fixtures::*;
