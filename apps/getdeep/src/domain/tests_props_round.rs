//! Property-based tests for round tracker invariants.

use proptest::prelude::*;

use crate::domain::{test_gens, test_prelude, RoundStage, Tier};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: played never exceeds target, whatever advances are attempted.
    #[test]
    fn prop_played_bounded_by_target(
        t in test_gens::tracker_in_progress(),
        attempts in proptest::collection::vec(test_gens::tier(), 0..16),
    ) {
        let mut t = t;
        for tier in attempts {
            if let Ok(next) = t.advance(tier) {
                t = next;
            }
            for check in Tier::ALL {
                prop_assert!(t.played(check) <= t.target(check));
            }
        }
    }

    /// Property: completed_count == total_target iff is_completed.
    #[test]
    fn prop_completion_matches_counts(t in test_gens::tracker_in_progress()) {
        prop_assert_eq!(t.completed_count() == t.total_target(), t.is_completed());
    }

    /// Property: the active tier never moves backwards within a round.
    #[test]
    fn prop_stage_monotonic(
        t in test_gens::tracker_in_progress(),
        attempts in proptest::collection::vec(test_gens::tier(), 0..16),
    ) {
        let mut t = t;
        let mut stage = t.current_stage();
        for tier in attempts {
            if let Ok(next) = t.advance(tier) {
                prop_assert_eq!(next.round_number(), t.round_number());
                t = next;
            }
            let now = t.current_stage();
            prop_assert!(now >= stage, "stage went from {:?} to {:?}", stage, now);
            stage = now;
        }
    }

    /// Property: only the active tier can advance.
    #[test]
    fn prop_only_active_tier_advances(
        t in test_gens::tracker_in_progress(),
        tier in test_gens::tier(),
    ) {
        let allowed = t.current_stage() == RoundStage::Playing(tier);
        prop_assert_eq!(t.advance(tier).is_ok(), allowed);
    }

    /// Property: persisting counters and reloading them is lossless.
    #[test]
    fn prop_persisted_round_trip(t in test_gens::tracker_in_progress()) {
        let (back, clamped) = crate::domain::RoundTracker::from_persisted(
            i64::from(t.round_number()),
            t.targets(),
            t.played_counts().map(|_, v| i64::from(*v)),
        );
        prop_assert!(!clamped);
        prop_assert_eq!(back, t);
    }

    /// Property: next_round bumps the number by one and clears played.
    #[test]
    fn prop_next_round_resets(t in test_gens::tracker_in_progress()) {
        let next = t.next_round();
        prop_assert_eq!(next.round_number(), t.round_number() + 1);
        prop_assert_eq!(next.completed_count(), 0);
        prop_assert_eq!(next.targets(), t.targets());
    }
}
