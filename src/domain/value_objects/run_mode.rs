//! Run Mode Value Object
//!
//! Folds the four operator switches into one validated value.

use crate::error::{CleanerError, CleanerResult};

/// How deletions are confirmed before they happen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmationPolicy {
    /// One `yes` for the whole batch (default)
    #[default]
    Batch,
    /// One prompt per candidate
    PerItem,
    /// No confirmation at all
    Automatic,
}

/// Validated operator mode for a cleanup run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunMode {
    pub confirmation: ConfirmationPolicy,
    /// Report candidates only, never delete
    pub simulate: bool,
    /// Suppress per-item console narration
    pub quiet: bool,
}

impl RunMode {
    /// Build a mode from raw switches.
    ///
    /// `auto` together with `interactive` is rejected.
    pub fn from_flags(
        simulate: bool,
        auto: bool,
        interactive: bool,
        quiet: bool,
    ) -> CleanerResult<Self> {
        let confirmation = match (auto, interactive) {
            (true, true) => return Err(CleanerError::ConflictingModes),
            (true, false) => ConfirmationPolicy::Automatic,
            (false, true) => ConfirmationPolicy::PerItem,
            (false, false) => ConfirmationPolicy::Batch,
        };

        Ok(Self {
            confirmation,
            simulate,
            quiet,
        })
    }

    pub fn is_interactive(&self) -> bool {
        self.confirmation == ConfirmationPolicy::PerItem
    }

    pub fn with_simulate(mut self, simulate: bool) -> Self {
        self.simulate = simulate;
        self
    }
}
