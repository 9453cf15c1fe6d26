//! Edge-triggered transitions derived by diffing two snapshots.

use serde::Serialize;

use crate::domain::phase::Phase;
use crate::domain::round::RoundStage;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::tier::Tier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameTransition {
    /// Used questions and counters were wiped.
    ProgressReset,

    /// A new round began.
    RoundStarted { round_number: u32 },

    /// The active tier moved forward within a round.
    TierChanged { from: Tier, to: Tier },

    /// Every target for the round was met.
    RoundCompleted { round_number: u32 },

    /// A (new) candidate question is on the table.
    QuestionDrawn { tier: Tier, index: usize },
}

/// Derive transitions from before/after snapshots.
pub fn derive_game_transitions(before: &GameSnapshot, after: &GameSnapshot) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    let reset = after.round_number < before.round_number
        || after.questions_used < before.questions_used;
    if reset {
        transitions.push(GameTransition::ProgressReset);
    }

    if after.round_number > before.round_number {
        transitions.push(GameTransition::RoundStarted {
            round_number: after.round_number,
        });
    }

    if after.round_number == before.round_number {
        if let (RoundStage::Playing(from), RoundStage::Playing(to)) = (before.stage, after.stage) {
            if from != to {
                transitions.push(GameTransition::TierChanged { from, to });
            }
        }
    }

    if before.phase != Phase::RoundComplete && after.phase == Phase::RoundComplete {
        transitions.push(GameTransition::RoundCompleted {
            round_number: after.round_number,
        });
    }

    if after.phase == Phase::QuestionDrawn {
        if let Some(q) = &after.question {
            let same = before.phase == Phase::QuestionDrawn && before.question.as_ref() == Some(q);
            if !same {
                transitions.push(GameTransition::QuestionDrawn {
                    tier: q.tier,
                    index: q.index,
                });
            }
        }
    }

    transitions
}
