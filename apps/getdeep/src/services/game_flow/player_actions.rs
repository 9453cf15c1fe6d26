use tracing::{debug, info};

use super::GameFlowService;
use crate::adapters::PrefsBackend;
use crate::domain::{GameEvent, Phase, RoundStage};
use crate::error::AppError;
use crate::errors::domain::{DomainError, TransitionKind};

impl<B: PrefsBackend> GameFlowService<B> {
    /// Commit to the drawn question: it is marked used and will not be drawn
    /// again until reset.
    pub fn accept(&mut self) -> Result<Phase, AppError> {
        if !self.guard(GameEvent::Accept)? {
            return Ok(self.phase);
        }
        let Some(question) = self.drawn.clone() else {
            return self.inconsistent(missing_question(GameEvent::Accept, self.phase));
        };

        self.store.mark_used(question.tier, question.index)?;
        self.phase = Phase::QuestionPlaying;
        debug!(tier = %question.tier, index = question.index, "Question accepted");
        Ok(self.phase)
    }

    /// Discard the drawn question without marking it used and draw again.
    pub fn reject(&mut self) -> Result<Phase, AppError> {
        if !self.guard(GameEvent::Reject)? {
            return Ok(self.phase);
        }
        if let Some(question) = &self.drawn {
            debug!(tier = %question.tier, index = question.index, "Question rejected");
        }
        self.draw_next()
    }

    /// Count the playing question toward its tier, then either draw the next
    /// one, pause at a tier boundary, or complete the round.
    pub fn finish(&mut self) -> Result<Phase, AppError> {
        if !self.guard(GameEvent::Finish)? {
            return Ok(self.phase);
        }
        let Some(question) = self.drawn.clone() else {
            return self.inconsistent(missing_question(GameEvent::Finish, self.phase));
        };

        let advanced = match self.store.round_state().advance(question.tier) {
            Ok(round) => round,
            Err(err) => return self.inconsistent(err),
        };
        self.store.save_round_state(&advanced)?;

        match advanced.current_stage() {
            RoundStage::Completed => Ok(self.enter_round_complete()),
            RoundStage::Playing(next) if next != question.tier => {
                self.drawn = None;
                self.phase = Phase::CategoryTransition;
                info!(
                    round = advanced.round_number(),
                    from = %question.tier,
                    to = %next,
                    "Tier complete"
                );
                Ok(self.phase)
            }
            RoundStage::Playing(_) => self.draw_next(),
        }
    }

    /// Leave the tier-boundary pause and draw from the new tier.
    pub fn proceed(&mut self) -> Result<Phase, AppError> {
        if !self.guard(GameEvent::Proceed)? {
            return Ok(self.phase);
        }
        self.draw_next()
    }
}

fn missing_question(event: GameEvent, phase: Phase) -> DomainError {
    DomainError::invalid_transition(
        TransitionKind::EventNotAllowed { event, phase },
        "no drawn question in session",
    )
}
