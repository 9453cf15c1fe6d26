use std::fmt;

use serde::{Deserialize, Serialize};

/// Question intimacy tier. Declaration order is play order within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    IceBreaker,
    Deep,
    Deeper,
}

impl Tier {
    /// All tiers in fixed play order.
    pub const ALL: [Tier; 3] = [Tier::IceBreaker, Tier::Deep, Tier::Deeper];

    /// Stable name used in persisted keys and JSON pools.
    pub const fn storage_name(self) -> &'static str {
        match self {
            Tier::IceBreaker => "ice_breaker",
            Tier::Deep => "deep",
            Tier::Deeper => "deeper",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Tier::IceBreaker => "Ice Breaker",
            Tier::Deep => "Deep",
            Tier::Deeper => "Deeper",
        }
    }

    /// The tier that follows this one, if any.
    pub const fn next(self) -> Option<Tier> {
        match self {
            Tier::IceBreaker => Some(Tier::Deep),
            Tier::Deep => Some(Tier::Deeper),
            Tier::Deeper => None,
        }
    }

    pub fn from_storage_name(name: &str) -> Option<Tier> {
        Tier::ALL.into_iter().find(|t| t.storage_name() == name)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_name())
    }
}

/// One value per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TierMap<T> {
    pub ice_breaker: T,
    pub deep: T,
    pub deeper: T,
}

impl<T> TierMap<T> {
    pub const fn new(ice_breaker: T, deep: T, deeper: T) -> Self {
        Self {
            ice_breaker,
            deep,
            deeper,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Tier) -> T) -> Self {
        Self {
            ice_breaker: f(Tier::IceBreaker),
            deep: f(Tier::Deep),
            deeper: f(Tier::Deeper),
        }
    }

    pub fn get(&self, tier: Tier) -> &T {
        match tier {
            Tier::IceBreaker => &self.ice_breaker,
            Tier::Deep => &self.deep,
            Tier::Deeper => &self.deeper,
        }
    }

    pub fn get_mut(&mut self, tier: Tier) -> &mut T {
        match tier {
            Tier::IceBreaker => &mut self.ice_breaker,
            Tier::Deep => &mut self.deep,
            Tier::Deeper => &mut self.deeper,
        }
    }

    /// Iterate `(tier, value)` pairs in play order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &T)> {
        Tier::ALL.into_iter().map(move |t| (t, self.get(t)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Tier, &T) -> U) -> TierMap<U> {
        TierMap::from_fn(|t| f(t, self.get(t)))
    }
}

impl TierMap<u32> {
    /// Total across tiers, or `None` if it does not fit in a `u32`.
    pub fn checked_sum(&self) -> Option<u32> {
        self.ice_breaker
            .checked_add(self.deep)?
            .checked_add(self.deeper)
    }

    /// Total across tiers, saturating at `u32::MAX`.
    pub fn sum(&self) -> u32 {
        self.checked_sum().unwrap_or(u32::MAX)
    }
}
