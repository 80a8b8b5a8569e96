//! Per-item confirmation state machine
//!
//! One transition per candidate: the current state plus the operator's
//! answer decide what happens to that candidate and which state the next
//! candidate starts in.

use crate::domain::ports::SkipReason;

/// Parsed per-item answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAnswer {
    Yes,
    No,
    All,
    Quit,
    Unrecognized,
}

impl PromptAnswer {
    /// Parse a raw line. Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "y" | "yes" => PromptAnswer::Yes,
            "n" | "no" => PromptAnswer::No,
            "a" | "all" => PromptAnswer::All,
            "q" | "quit" => PromptAnswer::Quit,
            _ => PromptAnswer::Unrecognized,
        }
    }
}

/// State the loop is in when it reaches a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptState {
    /// Ask the operator about this candidate
    #[default]
    AwaitingAnswer,
    /// `all` was chosen; delete without asking
    ApplyAllRemaining,
    /// `quit` was chosen; touch nothing further
    Aborted,
}

/// What to do with the current candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    Delete,
    Skip(SkipReason),
    Stop,
}

impl PromptState {
    /// Whether reaching a candidate in this state requires an answer
    pub fn needs_answer(self) -> bool {
        self == PromptState::AwaitingAnswer
    }

    /// Advance to the next candidate's state.
    ///
    /// `answer` is the operator's reply when one was read; only
    /// `AwaitingAnswer` consumes it, and a missing reply there counts as
    /// unrecognized.
    pub fn transition(self, answer: Option<PromptAnswer>) -> (PromptState, PromptAction) {
        match self {
            PromptState::AwaitingAnswer => match answer.unwrap_or(PromptAnswer::Unrecognized) {
                PromptAnswer::Yes => (PromptState::AwaitingAnswer, PromptAction::Delete),
                PromptAnswer::No => (
                    PromptState::AwaitingAnswer,
                    PromptAction::Skip(SkipReason::Declined),
                ),
                PromptAnswer::All => (PromptState::ApplyAllRemaining, PromptAction::Delete),
                PromptAnswer::Quit => (PromptState::Aborted, PromptAction::Stop),
                PromptAnswer::Unrecognized => (
                    PromptState::AwaitingAnswer,
                    PromptAction::Skip(SkipReason::InvalidAnswer),
                ),
            },
            PromptState::ApplyAllRemaining => {
                (PromptState::ApplyAllRemaining, PromptAction::Delete)
            }
            PromptState::Aborted => (PromptState::Aborted, PromptAction::Stop),
        }
    }
}
