//! Persisted game progress: used question indices per tier and round counters.
//!
//! Every mutating call writes through to the backend before it returns and
//! only then updates the in-memory view, so a failed write leaves both sides
//! on the previous state.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::adapters::{PrefsBackend, PrefsEdit};
use crate::domain::{
    progress_summary, ProgressStats, QuestionBank, RoundTracker, Tier, TierMap, TierUsage,
};
use crate::error::AppError;
use crate::errors::domain::DomainError;

pub const KEY_ROUND_NUMBER: &str = "round_number";

/// Key holding the used-index set for `tier`.
pub const fn used_key(tier: Tier) -> &'static str {
    match tier {
        Tier::IceBreaker => "used_ice_breakers",
        Tier::Deep => "used_deep",
        Tier::Deeper => "used_deeper",
    }
}

/// Key holding this round's played counter for `tier`.
pub const fn played_key(tier: Tier) -> &'static str {
    match tier {
        Tier::IceBreaker => "ice_breakers_played",
        Tier::Deep => "deep_played",
        Tier::Deeper => "deeper_played",
    }
}

/// Backup/debug dump of everything persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressExport {
    pub used: TierMap<Vec<usize>>,
    pub round: RoundTracker,
    pub exported_at: String,
}

pub struct ProgressStore<B> {
    backend: B,
    pool_sizes: TierMap<usize>,
    used: TierMap<BTreeSet<usize>>,
    round: RoundTracker,
}

impl<B: PrefsBackend> ProgressStore<B> {
    /// Load persisted progress. Stored indices that are not numbers or fall
    /// outside the current pools are dropped.
    pub fn load(backend: B, pool_sizes: TierMap<usize>, targets: TierMap<u32>) -> Self {
        let used = TierMap::from_fn(|tier| {
            let raw = backend.get_string_set(used_key(tier)).unwrap_or_default();
            let size = *pool_sizes.get(tier);
            let parsed: BTreeSet<usize> = raw
                .iter()
                .filter_map(|s| s.parse::<usize>().ok())
                .filter(|&i| i < size)
                .collect();
            if parsed.len() != raw.len() {
                warn!(
                    tier = %tier,
                    stored = raw.len(),
                    kept = parsed.len(),
                    "Dropped invalid used-question entries"
                );
            }
            parsed
        });

        let played = TierMap::from_fn(|tier| backend.get_int(played_key(tier)).unwrap_or(0));
        let round_number = backend.get_int(KEY_ROUND_NUMBER).unwrap_or(1);
        let (round, clamped) = RoundTracker::from_persisted(round_number, targets, played);
        if clamped {
            warn!(round_number, "Clamped out-of-range round counters on load");
        }

        debug!(
            round = round.round_number(),
            used_total = used.iter().map(|(_, s)| s.len()).sum::<usize>(),
            "Progress loaded"
        );

        Self {
            backend,
            pool_sizes,
            used,
            round,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn used_indices(&self, tier: Tier) -> &BTreeSet<usize> {
        self.used.get(tier)
    }

    /// Mark `index` as used. Returns whether it was newly added; an index
    /// already present is a no-op with no write.
    pub fn mark_used(&mut self, tier: Tier, index: usize) -> Result<bool, AppError> {
        let size = *self.pool_sizes.get(tier);
        if index >= size {
            return Err(DomainError::index_out_of_range(tier, index, size).into());
        }
        if self.used.get(tier).contains(&index) {
            return Ok(false);
        }

        let mut next = self.used.get(tier).clone();
        next.insert(index);
        self.backend
            .apply(PrefsEdit::new().put_string_set(used_key(tier), encode_indices(&next)))?;
        *self.used.get_mut(tier) = next;
        debug!(tier = %tier, index, "Question marked used");
        Ok(true)
    }

    /// Unused indices in pool order.
    pub fn available_indices(&self, tier: Tier) -> Vec<usize> {
        let used = self.used.get(tier);
        (0..*self.pool_sizes.get(tier))
            .filter(|i| !used.contains(i))
            .collect()
    }

    pub fn round_state(&self) -> RoundTracker {
        self.round
    }

    pub fn save_round_state(&mut self, round: &RoundTracker) -> Result<(), AppError> {
        let mut edit = PrefsEdit::new().put_int(KEY_ROUND_NUMBER, i64::from(round.round_number()));
        for tier in Tier::ALL {
            edit = edit.put_int(played_key(tier), i64::from(round.played(tier)));
        }
        self.backend.apply(edit)?;
        self.round = *round;
        Ok(())
    }

    /// Clear every used set and the round counters in a single write.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.backend.apply(PrefsEdit::new().clear())?;
        self.used = TierMap::default();
        self.round = RoundTracker::with_targets(self.round.targets());
        info!("Progress reset");
        Ok(())
    }

    pub fn has_progress(&self) -> bool {
        self.round.round_number() > 1
            || self.round.completed_count() > 0
            || self.used.iter().any(|(_, s)| !s.is_empty())
    }

    pub fn used_count(&self, tier: Tier) -> usize {
        self.used.get(tier).len()
    }

    pub fn total_count(&self, tier: Tier) -> usize {
        *self.pool_sizes.get(tier)
    }

    pub fn total_used(&self) -> usize {
        Tier::ALL.into_iter().map(|t| self.used_count(t)).sum()
    }

    pub fn is_used(&self, tier: Tier, index: usize) -> bool {
        self.used.get(tier).contains(&index)
    }

    /// Used indices for `tier`, ascending.
    pub fn used_questions(&self, tier: Tier) -> Vec<usize> {
        self.used.get(tier).iter().copied().collect()
    }

    /// True when no tier has an unused question left.
    pub fn is_pool_exhausted(&self) -> bool {
        Tier::ALL
            .into_iter()
            .all(|t| self.used_count(t) >= self.total_count(t))
    }

    /// Texts of used questions per tier, omitting tiers with none used.
    pub fn used_question_texts(
        &self,
        bank: &QuestionBank,
    ) -> Result<BTreeMap<Tier, Vec<String>>, AppError> {
        let mut out = BTreeMap::new();
        for tier in Tier::ALL {
            let texts = self
                .used
                .get(tier)
                .iter()
                .map(|&i| bank.text_at(tier, i).map(str::to_string))
                .collect::<Result<Vec<_>, _>>()?;
            if !texts.is_empty() {
                out.insert(tier, texts);
            }
        }
        Ok(out)
    }

    pub fn stats(&self) -> ProgressStats {
        let tiers = TierMap::from_fn(|t| TierUsage {
            used: self.used_count(t),
            total: self.total_count(t),
        });
        ProgressStats::new(tiers, self.round.round_number())
    }

    /// e.g. `Round 2 • 7 questions played`
    pub fn progress_summary(&self) -> String {
        progress_summary(self.round.round_number(), self.total_used())
    }

    pub fn export(&self) -> ProgressExport {
        ProgressExport {
            used: TierMap::from_fn(|t| self.used_questions(t)),
            round: self.round,
            exported_at: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_default(),
        }
    }
}

fn encode_indices(set: &BTreeSet<usize>) -> BTreeSet<String> {
    set.iter().map(usize::to_string).collect()
}
