//! Game flow service: the question/round state machine over persisted progress.
//!
//! Every event method runs to completion synchronously and returns the new
//! [`Phase`]. Persistence is delegated to [`ProgressStore`] (write-through),
//! pool lookups to [`QuestionBank`]. The session itself (phase and drawn
//! question) is ephemeral and rebuilt by [`GameFlowService::initialize_game`].

mod player_actions;
mod round_lifecycle;

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, error, info, warn};

use crate::adapters::PrefsBackend;
use crate::config::TransitionPolicy;
use crate::domain::{
    DrawnQuestion, GameEvent, GameSnapshot, Phase, ProgressStats, QuestionBank, RoundStage,
    RoundTracker, Tier,
};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::ProgressStore;

pub struct GameFlowService<B> {
    bank: Arc<QuestionBank>,
    store: ProgressStore<B>,
    rng: StdRng,
    policy: TransitionPolicy,
    phase: Phase,
    drawn: Option<DrawnQuestion>,
}

impl<B: PrefsBackend> GameFlowService<B> {
    /// New session in `AwaitingDraw`; call [`Self::initialize_game`] to draw.
    pub fn new(
        bank: Arc<QuestionBank>,
        store: ProgressStore<B>,
        rng: StdRng,
        policy: TransitionPolicy,
    ) -> Self {
        Self {
            bank,
            store,
            rng,
            policy,
            phase: Phase::AwaitingDraw,
            drawn: None,
        }
    }

    /// Dispatch an event by value.
    pub fn apply_event(&mut self, event: GameEvent) -> Result<Phase, AppError> {
        match event {
            GameEvent::Draw => self.draw(),
            GameEvent::Accept => self.accept(),
            GameEvent::Reject => self.reject(),
            GameEvent::Finish => self.finish(),
            GameEvent::Proceed => self.proceed(),
            GameEvent::StartNextRound => self.start_next_round(),
            GameEvent::Reset => self.reset(),
        }
    }

    /// Draw a question for the active tier.
    pub fn draw(&mut self) -> Result<Phase, AppError> {
        if !self.guard(GameEvent::Draw)? {
            return Ok(self.phase);
        }
        self.draw_next()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_question(&self) -> Option<&DrawnQuestion> {
        self.drawn.as_ref()
    }

    pub fn current_question_text(&self) -> Option<&str> {
        self.drawn.as_ref().map(|q| q.text.as_str())
    }

    pub fn current_tier(&self) -> RoundStage {
        self.store.round_state().current_stage()
    }

    pub fn round(&self) -> RoundTracker {
        self.store.round_state()
    }

    pub fn round_number(&self) -> u32 {
        self.store.round_state().round_number()
    }

    pub fn progress_summary(&self) -> String {
        self.store.progress_summary()
    }

    pub fn phase_progress(&self) -> String {
        self.store.round_state().phase_progress()
    }

    pub fn has_game_in_progress(&self) -> bool {
        self.store.has_progress()
    }

    pub fn stats(&self) -> ProgressStats {
        self.store.stats()
    }

    pub fn store(&self) -> &ProgressStore<B> {
        &self.store
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Consistent read-after-write view for the UI.
    pub fn snapshot(&self) -> GameSnapshot {
        let round = self.store.round_state();
        GameSnapshot {
            phase: self.phase,
            round_number: round.round_number(),
            stage: round.current_stage(),
            question: self.drawn.clone(),
            phase_progress: round.phase_progress(),
            progress_summary: self.store.progress_summary(),
            completed_in_round: round.completed_count(),
            total_in_round: round.total_target(),
            questions_used: self.store.total_used(),
            pool_exhausted: self.store.is_pool_exhausted(),
        }
    }

    /// Whether `event` may run now. `Ok(false)` means it was ignored.
    fn guard(&self, event: GameEvent) -> Result<bool, AppError> {
        if self.phase.accepts(event) {
            return Ok(true);
        }
        match self.policy {
            TransitionPolicy::Strict => Err(DomainError::event_not_allowed(event, self.phase).into()),
            TransitionPolicy::Lenient => {
                warn!(?event, phase = ?self.phase, "Ignoring event not accepted in current phase");
                Ok(false)
            }
        }
    }

    /// Pick a random unused question for the active tier, skipping exhausted
    /// tiers. Each pass either draws or fills one tier, so the loop settles
    /// within one pass per tier plus the final check.
    fn draw_next(&mut self) -> Result<Phase, AppError> {
        for _ in 0..=Tier::ALL.len() {
            let round = self.store.round_state();
            let tier = match round.current_stage() {
                RoundStage::Completed => return Ok(self.enter_round_complete()),
                RoundStage::Playing(tier) => tier,
            };

            let available = self.store.available_indices(tier);
            if let Some(&index) = available.choose(&mut self.rng) {
                let text = self.bank.text_at(tier, index)?.to_string();
                debug!(
                    round = round.round_number(),
                    tier = %tier,
                    index,
                    remaining = available.len() - 1,
                    "Question drawn"
                );
                self.drawn = Some(DrawnQuestion { tier, index, text });
                self.phase = Phase::QuestionDrawn;
                return Ok(self.phase);
            }

            warn!(
                round = round.round_number(),
                tier = %tier,
                next = ?tier.next(),
                "Tier has no unused questions, skipping to next tier"
            );
            let skipped = round.skip_tier(tier)?;
            self.store.save_round_state(&skipped)?;
        }

        error!(
            round = self.round_number(),
            "Round counters did not settle while drawing"
        );
        Ok(self.enter_round_complete())
    }

    fn enter_round_complete(&mut self) -> Phase {
        if self.store.is_pool_exhausted() {
            info!(
                round = self.round_number(),
                "Every question has been used; round ends without a draw"
            );
        }
        self.drawn = None;
        self.phase = Phase::RoundComplete;
        info!(round = self.round_number(), "Round complete");
        self.phase
    }

    /// Session state disagrees with itself. Strict policy surfaces the error;
    /// lenient policy snaps to `RoundComplete`.
    fn inconsistent(&mut self, err: DomainError) -> Result<Phase, AppError> {
        error!(error = %err, phase = ?self.phase, "Inconsistent game session");
        match self.policy {
            TransitionPolicy::Strict => Err(err.into()),
            TransitionPolicy::Lenient => Ok(self.enter_round_complete()),
        }
    }
}
