//! Polling state machine
//!
//! The observer's lifecycle as a pure, separately testable transition
//! function; the async driver only feeds it events and acts on the
//! resulting state.
//!
//! State Machine:
//! ```text
//! [SUBMITTED] ──first status check──→ [POLLING]
//!                                         │
//!                                         ├── 404 / transient error ──→ [POLLING]
//!                                         │
//!                                         ├── confirmed execute/deploy ──→ [ACCEPTED]
//!                                         │
//!                                         ├── confirmed fee-only ──→ [REJECTED]
//!                                         │
//!                                         ├── wall-clock budget spent ──→ [TIMED_OUT]
//!                                         │
//!                                         └── attempt budget spent ──→ [EXHAUSTED]
//! ```
//!
//! Accepted, Rejected, TimedOut, and Exhausted are terminal: no event moves
//! a terminal state anywhere else.

use serde::{Deserialize, Serialize};

/// Observation state for one transaction id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PollState {
    /// Submitted but not yet checked.
    #[default]
    Submitted,
    /// Actively polling the confirmed-transaction endpoint.
    Polling,
    /// Confirmed as an execution or deployment.
    Accepted,
    /// Confirmed fee-only: the execution failed, the fee was consumed.
    Rejected,
    /// Wall-clock budget spent; the outcome remains unknown.
    TimedOut,
    /// Attempt budget spent; the outcome remains unknown.
    Exhausted,
}

/// Events that drive poll-state transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollEvent {
    /// First status check issued.
    CheckStarted,
    /// The endpoint answered 404: not yet confirmed.
    NotYetConfirmed,
    /// Confirmed with an execution or deployment type.
    ConfirmedExecution,
    /// Confirmed with a fee-only type.
    ConfirmedFeeOnly,
    /// A poll failed unexpectedly; retry without changing state.
    TransientError,
    /// The wall-clock budget ran out.
    TimeoutExceeded,
    /// The attempt budget ran out.
    AttemptsExhausted,
}

impl PollState {
    /// Whether this state can never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PollState::Accepted | PollState::Rejected | PollState::TimedOut | PollState::Exhausted
        )
    }

    /// Deterministic transition function.
    pub fn next(self, event: PollEvent) -> PollState {
        if self.is_terminal() {
            return self;
        }
        match (self, event) {
            (PollState::Submitted, PollEvent::CheckStarted) => PollState::Polling,
            (PollState::Submitted, _) => PollState::Submitted,
            (PollState::Polling, PollEvent::NotYetConfirmed) => PollState::Polling,
            (PollState::Polling, PollEvent::TransientError) => PollState::Polling,
            (PollState::Polling, PollEvent::ConfirmedExecution) => PollState::Accepted,
            (PollState::Polling, PollEvent::ConfirmedFeeOnly) => PollState::Rejected,
            (PollState::Polling, PollEvent::TimeoutExceeded) => PollState::TimedOut,
            (PollState::Polling, PollEvent::AttemptsExhausted) => PollState::Exhausted,
            (PollState::Polling, PollEvent::CheckStarted) => PollState::Polling,
            (terminal, _) => terminal,
        }
    }
}

/// Map a confirmed transaction's reported type onto a poll event.
///
/// Executions and deployments are acceptances; a fee-only record means the
/// execution was rejected and only the fee survived. Anything else is
/// treated as a transient condition and re-polled inside the budgets.
pub fn classify_confirmed(tx_type: &str) -> PollEvent {
    match tx_type {
        "execute" | "deploy" => PollEvent::ConfirmedExecution,
        "fee" => PollEvent::ConfirmedFeeOnly,
        _ => PollEvent::TransientError,
    }
}
