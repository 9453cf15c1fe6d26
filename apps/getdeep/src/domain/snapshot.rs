//! Pull-based read model of the running game.
//!
//! The UI calls an event method, then reads a fresh [`GameSnapshot`]; there
//! is no push channel.

use serde::{Deserialize, Serialize};

use crate::domain::phase::Phase;
use crate::domain::round::RoundStage;
use crate::domain::tier::Tier;

/// Question currently on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnQuestion {
    pub tier: Tier,
    pub index: usize,
    pub text: String,
}

/// Everything a screen needs to render after an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub round_number: u32,
    pub stage: RoundStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<DrawnQuestion>,
    /// e.g. `Deep 2/2`
    pub phase_progress: String,
    /// e.g. `Round 3 • 12 questions played`
    pub progress_summary: String,
    pub completed_in_round: u32,
    pub total_in_round: u32,
    /// Questions marked used across all tiers.
    pub questions_used: usize,
    /// No tier has an unused question left.
    pub pool_exhausted: bool,
}
