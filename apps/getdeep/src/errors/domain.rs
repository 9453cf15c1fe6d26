//! Domain-level error type.
//!
//! Storage- and CLI-agnostic. Callers that also touch storage return
//! `Result<T, crate::error::AppError>` and convert via `From<DomainError>`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::{GameEvent, Phase, Tier};

/// What kind of transition was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionKind {
    /// Event fired in a phase that does not accept it.
    EventNotAllowed { event: GameEvent, phase: Phase },
    /// Round counters asked to advance a tier that is not the active one.
    TierNotActive(Tier),
    /// Round counters asked to advance a tier already at its target.
    TierAtTarget(Tier),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Question index outside the tier's pool.
    IndexOutOfRange { tier: Tier, index: usize, len: usize },
    /// State machine or round counters refused a transition.
    InvalidTransition(TransitionKind, String),
    /// A tier's question pool has no entries.
    EmptyPool(Tier),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::IndexOutOfRange { tier, index, len } => {
                write!(f, "question index {index} out of range for {tier} (len {len})")
            }
            DomainError::InvalidTransition(kind, d) => {
                write!(f, "invalid transition {kind:?}: {d}")
            }
            DomainError::EmptyPool(tier) => write!(f, "question pool for {tier} is empty"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn index_out_of_range(tier: Tier, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { tier, index, len }
    }

    pub fn invalid_transition(kind: TransitionKind, detail: impl Into<String>) -> Self {
        Self::InvalidTransition(kind, detail.into())
    }

    pub fn event_not_allowed(event: GameEvent, phase: Phase) -> Self {
        Self::invalid_transition(
            TransitionKind::EventNotAllowed { event, phase },
            format!("{event:?} is not accepted while {phase:?}"),
        )
    }
}
