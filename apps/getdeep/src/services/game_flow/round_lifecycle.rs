use tracing::info;

use super::GameFlowService;
use crate::adapters::PrefsBackend;
use crate::domain::{GameEvent, Phase};
use crate::error::AppError;

impl<B: PrefsBackend> GameFlowService<B> {
    /// Rebuild the session from persisted progress. A finished round lands on
    /// `RoundComplete`; anything else draws for the active tier.
    pub fn initialize_game(&mut self) -> Result<Phase, AppError> {
        let round = self.store.round_state();
        info!(
            round = round.round_number(),
            used = self.store.total_used(),
            resumed = self.store.has_progress(),
            "Initializing game session"
        );
        self.drawn = None;
        if round.is_completed() {
            return Ok(self.enter_round_complete());
        }
        self.draw_next()
    }

    /// Bump the round number, zero the played counters and draw.
    /// Used questions stay used across rounds.
    pub fn start_next_round(&mut self) -> Result<Phase, AppError> {
        if !self.guard(GameEvent::StartNextRound)? {
            return Ok(self.phase);
        }
        let next = self.store.round_state().next_round();
        self.store.save_round_state(&next)?;
        info!(round = next.round_number(), "Round started");
        self.draw_next()
    }

    /// Forget all progress. Allowed from every phase.
    pub fn reset(&mut self) -> Result<Phase, AppError> {
        if !self.guard(GameEvent::Reset)? {
            return Ok(self.phase);
        }
        self.store.reset()?;
        self.drawn = None;
        self.phase = Phase::AwaitingDraw;
        info!("Game progress reset");
        Ok(self.phase)
    }
}
