use serde::{Deserialize, Serialize};

/// State of the in-flight question interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing drawn yet (fresh mount or after reset).
    AwaitingDraw,
    /// A candidate question is shown; the couple may accept or reject it.
    QuestionDrawn,
    /// Accepted question is being discussed.
    QuestionPlaying,
    /// The active tier just changed; an interstitial is shown.
    CategoryTransition,
    /// Every tier target for the round is met.
    RoundComplete,
}

/// User-driven events forwarded by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEvent {
    Draw,
    Accept,
    Reject,
    Finish,
    Proceed,
    StartNextRound,
    Reset,
}

impl Phase {
    /// Transition table: whether `event` is meaningful in this phase.
    pub fn accepts(self, event: GameEvent) -> bool {
        use GameEvent as E;
        use Phase as P;
        matches!(
            (self, event),
            (_, E::Reset)
                | (P::AwaitingDraw, E::Draw)
                | (P::QuestionDrawn, E::Accept | E::Reject)
                | (P::QuestionPlaying, E::Finish)
                | (P::CategoryTransition, E::Proceed)
                | (P::RoundComplete, E::StartNextRound)
        )
    }
}
