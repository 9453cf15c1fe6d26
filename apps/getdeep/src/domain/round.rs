//! Round counters: how many questions of each tier were played this round.

use serde::{Deserialize, Serialize};

use crate::domain::tier::{Tier, TierMap};
use crate::errors::domain::{DomainError, TransitionKind};

/// Default per-tier targets for a round: 2 ice breakers, 2 deep, 1 deeper.
pub const DEFAULT_TARGETS: TierMap<u32> = TierMap::new(2, 2, 1);

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "stage", content = "tier", rename_all = "snake_case")]
pub enum RoundStage {
    /// Questions of this tier are still owed.
    Playing(Tier),
    /// Every tier has met its target.
    Completed,
}

impl RoundStage {
    pub fn tier(self) -> Option<Tier> {
        match self {
            RoundStage::Playing(t) => Some(t),
            RoundStage::Completed => None,
        }
    }
}

/// Pure value type; every mutation returns a new tracker.
///
/// Invariant: `played[t] <= targets[t]` for every tier, `round_number >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTracker {
    round_number: u32,
    targets: TierMap<u32>,
    played: TierMap<u32>,
}

impl RoundTracker {
    /// Round 1 with the default targets.
    pub fn new() -> Self {
        Self::with_targets(DEFAULT_TARGETS)
    }

    /// Round 1 with custom targets.
    pub fn with_targets(targets: TierMap<u32>) -> Self {
        Self {
            round_number: 1,
            targets,
            played: TierMap::default(),
        }
    }

    /// Rebuild from stored counters, clamping anything that would break the
    /// invariant. Returns the tracker and whether clamping happened.
    pub fn from_persisted(
        round_number: i64,
        targets: TierMap<u32>,
        played: TierMap<i64>,
    ) -> (Self, bool) {
        let mut clamped = false;
        let round_number = if round_number < 1 {
            clamped = true;
            1
        } else {
            u32::try_from(round_number).unwrap_or_else(|_| {
                clamped = true;
                u32::MAX
            })
        };
        let played = TierMap::from_fn(|t| {
            let raw = *played.get(t);
            let target = *targets.get(t);
            let v = raw.clamp(0, i64::from(target));
            if v != raw {
                clamped = true;
            }
            // In range of u32 after the clamp.
            v as u32
        });
        (
            Self {
                round_number,
                targets,
                played,
            },
            clamped,
        )
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn target(&self, tier: Tier) -> u32 {
        *self.targets.get(tier)
    }

    pub fn played(&self, tier: Tier) -> u32 {
        *self.played.get(tier)
    }

    pub fn targets(&self) -> TierMap<u32> {
        self.targets
    }

    pub fn played_counts(&self) -> TierMap<u32> {
        self.played
    }

    /// First tier (in play order) still below target, else `Completed`.
    pub fn current_stage(&self) -> RoundStage {
        Tier::ALL
            .into_iter()
            .find(|&t| self.played(t) < self.target(t))
            .map_or(RoundStage::Completed, RoundStage::Playing)
    }

    pub fn current_tier(&self) -> Option<Tier> {
        self.current_stage().tier()
    }

    pub fn is_completed(&self) -> bool {
        self.current_stage() == RoundStage::Completed
    }

    pub fn total_target(&self) -> u32 {
        self.targets.sum()
    }

    pub fn completed_count(&self) -> u32 {
        self.played.sum()
    }

    /// Record one played question of `tier`.
    ///
    /// `tier` must be the active tier; anything else would let counters drift
    /// away from the question that was actually accepted.
    pub fn advance(&self, tier: Tier) -> Result<Self, DomainError> {
        self.require_active(tier)?;
        let mut next = *self;
        *next.played.get_mut(tier) += 1;
        Ok(next)
    }

    /// Mark the active tier as satisfied without playing it (pool exhausted).
    pub fn skip_tier(&self, tier: Tier) -> Result<Self, DomainError> {
        self.require_active(tier)?;
        let mut next = *self;
        *next.played.get_mut(tier) = self.target(tier);
        Ok(next)
    }

    /// Next round: number + 1, same targets, nothing played.
    pub fn next_round(&self) -> Self {
        Self {
            round_number: self.round_number.saturating_add(1),
            targets: self.targets,
            played: TierMap::default(),
        }
    }

    /// Short label such as `Ice Breaker 1/2` for the question about to be played.
    pub fn phase_progress(&self) -> String {
        match self.current_stage() {
            RoundStage::Playing(t) => format!(
                "{} {}/{}",
                t.display_name(),
                self.played(t) + 1,
                self.target(t)
            ),
            RoundStage::Completed => "Round Complete!".to_string(),
        }
    }

    fn require_active(&self, tier: Tier) -> Result<(), DomainError> {
        if self.played(tier) >= self.target(tier) {
            return Err(DomainError::invalid_transition(
                TransitionKind::TierAtTarget(tier),
                format!(
                    "{tier} already at target {} in round {}",
                    self.target(tier),
                    self.round_number
                ),
            ));
        }
        match self.current_stage() {
            RoundStage::Playing(active) if active == tier => Ok(()),
            stage => Err(DomainError::invalid_transition(
                TransitionKind::TierNotActive(tier),
                format!("{tier} is not the active tier ({stage:?})"),
            )),
        }
    }
}

impl Default for RoundTracker {
    fn default() -> Self {
        Self::new()
    }
}
