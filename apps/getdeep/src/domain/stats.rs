use serde::Serialize;

use crate::domain::tier::{Tier, TierMap};

/// Used vs. available questions for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierUsage {
    pub used: usize,
    pub total: usize,
}

/// Lifetime usage statistics across all tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressStats {
    pub tiers: TierMap<TierUsage>,
    pub total_used: usize,
    pub total_questions: usize,
    /// Whole-number percentage, rounded down.
    pub percentage: usize,
    pub current_round: u32,
}

impl ProgressStats {
    pub fn new(tiers: TierMap<TierUsage>, current_round: u32) -> Self {
        let total_used = Tier::ALL.into_iter().map(|t| tiers.get(t).used).sum();
        let total_questions: usize = Tier::ALL.into_iter().map(|t| tiers.get(t).total).sum();
        let percentage = if total_questions > 0 {
            total_used * 100 / total_questions
        } else {
            0
        };
        Self {
            tiers,
            total_used,
            total_questions,
            percentage,
            current_round,
        }
    }
}

/// One-line menu subtitle, e.g. `Round 2 • 7 questions played`.
pub fn progress_summary(round_number: u32, total_used: usize) -> String {
    let noun = if total_used == 1 { "question" } else { "questions" };
    format!("Round {round_number} • {total_used} {noun} played")
}
