// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::{RoundTracker, Tier, TierMap};

pub fn tier() -> impl Strategy<Value = Tier> {
    prop_oneof![Just(Tier::IceBreaker), Just(Tier::Deep), Just(Tier::Deeper)]
}

/// Per-tier targets, small enough that rounds finish quickly.
pub fn targets() -> impl Strategy<Value = TierMap<u32>> {
    (0u32..=4, 0u32..=4, 0u32..=4).prop_map(|(a, b, c)| TierMap::new(a, b, c))
}

/// A tracker part-way through some round, reached only through legal advances.
pub fn tracker_in_progress() -> impl Strategy<Value = RoundTracker> {
    (targets(), 0usize..=12, 0u32..=3).prop_map(|(targets, steps, extra_rounds)| {
        let mut t = RoundTracker::with_targets(targets);
        for _ in 0..extra_rounds {
            t = t.next_round();
        }
        for _ in 0..steps {
            match t.current_tier() {
                Some(active) => match t.advance(active) {
                    Ok(next) => t = next,
                    Err(_) => break,
                },
                None => break,
            }
        }
        t
    })
}
