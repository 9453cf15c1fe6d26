//! Read-only question pools, one ordered list per tier.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::question_data;
use crate::domain::tier::{Tier, TierMap};
use crate::error::AppError;
use crate::errors::domain::DomainError;

/// Immutable question pools. A question's position in its tier's list is its
/// persisted identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    pools: TierMap<Vec<String>>,
}

#[derive(Deserialize)]
struct PoolFile {
    ice_breaker: Vec<String>,
    deep: Vec<String>,
    deeper: Vec<String>,
}

impl QuestionBank {
    /// Validate pools; every tier must have at least one question.
    pub fn from_pools(pools: TierMap<Vec<String>>) -> Result<Self, DomainError> {
        if let Some((tier, _)) = pools.iter().find(|(_, p)| p.is_empty()) {
            return Err(DomainError::EmptyPool(tier));
        }
        Ok(Self { pools })
    }

    /// Pools compiled into the binary.
    pub fn builtin() -> Self {
        let to_owned = |qs: &[&str]| qs.iter().map(|q| q.to_string()).collect::<Vec<_>>();
        Self {
            pools: TierMap::new(
                to_owned(question_data::ICE_BREAKER),
                to_owned(question_data::DEEP),
                to_owned(question_data::DEEPER),
            ),
        }
    }

    /// Load pools from a JSON document keyed by tier storage name.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("cannot read question file {}: {e}", path.display()))
        })?;
        let file: PoolFile = serde_json::from_str(&raw).map_err(|e| {
            AppError::config(format!("invalid question file {}: {e}", path.display()))
        })?;
        let bank = Self::from_pools(TierMap::new(file.ice_breaker, file.deep, file.deeper))?;
        info!(
            path = %path.display(),
            ice_breaker = bank.len(Tier::IceBreaker),
            deep = bank.len(Tier::Deep),
            deeper = bank.len(Tier::Deeper),
            "Loaded question pools"
        );
        Ok(bank)
    }

    pub fn questions_for(&self, tier: Tier) -> &[String] {
        self.pools.get(tier)
    }

    pub fn text_at(&self, tier: Tier, index: usize) -> Result<&str, DomainError> {
        let pool = self.pools.get(tier);
        pool.get(index)
            .map(String::as_str)
            .ok_or_else(|| DomainError::index_out_of_range(tier, index, pool.len()))
    }

    pub fn len(&self, tier: Tier) -> usize {
        self.pools.get(tier).len()
    }

    pub fn total_len(&self) -> usize {
        Tier::ALL.into_iter().map(|t| self.len(t)).sum()
    }

    /// Per-tier pool sizes.
    pub fn sizes(&self) -> TierMap<usize> {
        self.pools.map(|_, p| p.len())
    }
}
