//! Builders for services over small, predictable question pools.

use std::sync::Arc;

use getdeep::adapters::AnyPrefs;
use getdeep::domain::{Phase, QuestionBank, Tier, TierMap};
use getdeep::{build_game, GameConfig, GameFlowService, StoreProfile, TransitionPolicy};
use getdeep_test_support::numbered_pool;

pub type GameUnderTest = GameFlowService<AnyPrefs>;

/// Pools named after their tier, e.g. `deep 0`.
pub fn small_bank(sizes: TierMap<usize>) -> Arc<QuestionBank> {
    let pools = TierMap::from_fn(|tier: Tier| numbered_pool(tier.storage_name(), *sizes.get(tier)));
    Arc::new(QuestionBank::from_pools(pools).expect("pools are non-empty"))
}

/// Strict, seeded service with default targets over `store`.
pub fn game_with_pools(sizes: TierMap<usize>, store: StoreProfile, seed: u64) -> GameUnderTest {
    let config = GameConfig {
        store,
        transitions: TransitionPolicy::Strict,
        seed: Some(seed),
        ..GameConfig::default()
    };
    build_game()
        .with_config(config)
        .with_bank(small_bank(sizes))
        .build()
        .expect("build game")
}

/// Drive the current round to `RoundComplete`, accepting every draw.
/// Returns the phases observed after each `finish`.
pub fn play_round(game: &mut GameUnderTest) -> Vec<Phase> {
    let mut phases = Vec::new();
    loop {
        match game.phase() {
            Phase::AwaitingDraw => {
                game.draw().expect("draw");
            }
            Phase::QuestionDrawn => {
                game.accept().expect("accept");
            }
            Phase::QuestionPlaying => phases.push(game.finish().expect("finish")),
            Phase::CategoryTransition => {
                game.proceed().expect("proceed");
            }
            Phase::RoundComplete => return phases,
        }
    }
}
