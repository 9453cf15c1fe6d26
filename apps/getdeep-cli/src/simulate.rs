//! Automatic play-through used by `getdeep simulate`.

use getdeep::domain::{derive_game_transitions, GameSnapshot, GameTransition};
use getdeep::{AppError, GameFlowService, Phase, PrefsBackend};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

/// Consecutive rejections after which the draw is accepted regardless.
const MAX_REJECT_STREAK: u32 = 16;

/// Keeps reject decisions off the draw sequence when both come from one seed.
const REJECT_STREAM: u64 = 0x5eed_0f_4e1ec7;

#[derive(Debug, Default, Serialize)]
pub struct SimulationReport {
    pub rounds_completed: u32,
    pub questions_played: u32,
    /// Every question put on the table, redraws of a just-rejected one included.
    pub draws: u32,
    pub rejections: u32,
    pub tier_changes: u32,
    pub pool_exhausted: bool,
    pub final_snapshot: Option<GameSnapshot>,
}

impl SimulationReport {
    /// Every step that ends on `QuestionDrawn` put a question on the table,
    /// even when a reject redrew the identical one.
    fn count_draw<B: PrefsBackend>(&mut self, game: &GameFlowService<B>) {
        if game.phase() == Phase::QuestionDrawn {
            self.draws += 1;
        }
    }

    fn tally(&mut self, before: &GameSnapshot, after: &GameSnapshot) {
        for t in derive_game_transitions(before, after) {
            debug!(transition = ?t, "Simulation transition");
            match t {
                GameTransition::RoundCompleted { .. } => self.rounds_completed += 1,
                GameTransition::TierChanged { .. } => self.tier_changes += 1,
                GameTransition::QuestionDrawn { .. }
                | GameTransition::RoundStarted { .. }
                | GameTransition::ProgressReset => {}
            }
        }
    }
}

/// Play until `rounds` rounds complete or no question is left.
pub fn run<B: PrefsBackend>(
    game: &mut GameFlowService<B>,
    rounds: u32,
    reject_rate: f64,
    seed: Option<u64>,
) -> Result<SimulationReport, AppError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed ^ REJECT_STREAM),
        None => StdRng::from_os_rng(),
    };
    let mut report = SimulationReport::default();
    let mut streak = 0;

    let mut before = game.snapshot();
    game.initialize_game()?;
    // A round finished in an earlier session is not ours to count.
    if game.phase() != Phase::RoundComplete {
        report.tally(&before, &game.snapshot());
    }
    report.count_draw(game);

    while report.rounds_completed < rounds {
        before = game.snapshot();
        match game.phase() {
            Phase::AwaitingDraw => {
                game.draw()?;
            }
            Phase::QuestionDrawn => {
                if streak < MAX_REJECT_STREAK && rng.random_bool(reject_rate) {
                    streak += 1;
                    report.rejections += 1;
                    game.reject()?;
                } else {
                    streak = 0;
                    game.accept()?;
                }
            }
            Phase::QuestionPlaying => {
                report.questions_played += 1;
                game.finish()?;
            }
            Phase::CategoryTransition => {
                game.proceed()?;
            }
            Phase::RoundComplete => {
                if before.pool_exhausted {
                    break;
                }
                game.start_next_round()?;
            }
        }
        report.tally(&before, &game.snapshot());
        report.count_draw(game);
    }

    let last = game.snapshot();
    report.pool_exhausted = last.pool_exhausted;
    report.final_snapshot = Some(last);
    info!(
        rounds = report.rounds_completed,
        played = report.questions_played,
        rejected = report.rejections,
        "Simulation finished"
    );
    Ok(report)
}
