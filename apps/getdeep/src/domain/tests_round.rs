use crate::domain::{RoundStage, RoundTracker, Tier, TierMap, DEFAULT_TARGETS};
use crate::errors::domain::{DomainError, TransitionKind};

fn play(mut t: RoundTracker, n: usize) -> RoundTracker {
    for _ in 0..n {
        let tier = t.current_tier().expect("round still in progress");
        t = t.advance(tier).unwrap();
    }
    t
}

#[test]
fn fresh_tracker_starts_on_ice_breakers() {
    let t = RoundTracker::new();
    assert_eq!(t.round_number(), 1);
    assert_eq!(t.targets(), DEFAULT_TARGETS);
    assert_eq!(t.current_stage(), RoundStage::Playing(Tier::IceBreaker));
    assert_eq!(t.total_target(), 5);
    assert_eq!(t.completed_count(), 0);
    assert!(!t.is_completed());
}

#[test]
fn tiers_unlock_in_order() {
    let t = play(RoundTracker::new(), 1);
    assert_eq!(t.current_tier(), Some(Tier::IceBreaker));
    let t = play(t, 1);
    assert_eq!(t.current_tier(), Some(Tier::Deep));
    let t = play(t, 2);
    assert_eq!(t.current_tier(), Some(Tier::Deeper));
    let t = play(t, 1);
    assert_eq!(t.current_stage(), RoundStage::Completed);
    assert_eq!(t.completed_count(), t.total_target());
}

#[test]
fn advance_rejects_inactive_tier() {
    let t = RoundTracker::new();
    let err = t.advance(Tier::Deep).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidTransition(TransitionKind::TierNotActive(Tier::Deep), _)
    ));
}

#[test]
fn advance_rejects_tier_at_target() {
    let t = play(RoundTracker::new(), 2);
    let err = t.advance(Tier::IceBreaker).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidTransition(TransitionKind::TierAtTarget(Tier::IceBreaker), _)
    ));
}

#[test]
fn advance_leaves_receiver_untouched() {
    let t = RoundTracker::new();
    let next = t.advance(Tier::IceBreaker).unwrap();
    assert_eq!(t.played(Tier::IceBreaker), 0);
    assert_eq!(next.played(Tier::IceBreaker), 1);
}

#[test]
fn skip_tier_fills_only_active_tier() {
    let t = play(RoundTracker::new(), 1);
    let skipped = t.skip_tier(Tier::IceBreaker).unwrap();
    assert_eq!(skipped.played(Tier::IceBreaker), 2);
    assert_eq!(skipped.played(Tier::Deep), 0);
    assert_eq!(skipped.current_tier(), Some(Tier::Deep));
    assert!(t.skip_tier(Tier::Deeper).is_err());
}

#[test]
fn next_round_keeps_targets_and_clears_played() {
    let targets = TierMap::new(1, 3, 2);
    let done = play(RoundTracker::with_targets(targets), 6);
    assert!(done.is_completed());
    let next = done.next_round();
    assert_eq!(next.round_number(), 2);
    assert_eq!(next.targets(), targets);
    assert_eq!(next.played_counts(), TierMap::default());
}

#[test]
fn zero_target_tier_is_skipped() {
    let t = RoundTracker::with_targets(TierMap::new(0, 1, 0));
    assert_eq!(t.current_tier(), Some(Tier::Deep));
    let t = play(t, 1);
    assert!(t.is_completed());
}

#[test]
fn all_zero_targets_complete_immediately() {
    let t = RoundTracker::with_targets(TierMap::new(0, 0, 0));
    assert!(t.is_completed());
    assert_eq!(t.total_target(), 0);
}

#[test]
fn phase_progress_labels() {
    let t = RoundTracker::new();
    assert_eq!(t.phase_progress(), "Ice Breaker 1/2");
    assert_eq!(play(t, 1).phase_progress(), "Ice Breaker 2/2");
    assert_eq!(play(t, 2).phase_progress(), "Deep 1/2");
    assert_eq!(play(t, 4).phase_progress(), "Deeper 1/1");
    assert_eq!(play(t, 5).phase_progress(), "Round Complete!");
}

#[test]
fn from_persisted_clamps_corrupt_values() {
    let (t, clamped) =
        RoundTracker::from_persisted(0, DEFAULT_TARGETS, TierMap::new(7, -2, 1));
    assert!(clamped);
    assert_eq!(t.round_number(), 1);
    assert_eq!(t.played_counts(), TierMap::new(2, 0, 1));

    let (t, clamped) = RoundTracker::from_persisted(3, DEFAULT_TARGETS, TierMap::new(2, 1, 0));
    assert!(!clamped);
    assert_eq!(t.round_number(), 3);
    assert_eq!(t.current_tier(), Some(Tier::Deep));
}

#[test]
fn tracker_serializes_structurally() {
    let t = play(RoundTracker::new(), 3);
    let json = serde_json::to_string(&t).unwrap();
    let back: RoundTracker = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}
