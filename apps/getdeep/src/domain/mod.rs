//! Domain layer: pure game logic types and helpers.

pub mod game_transition;
pub mod phase;
pub mod question_data;
pub mod questions;
pub mod round;
pub mod snapshot;
pub mod stats;
pub mod tier;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_round;
#[cfg(test)]
mod tests_round;

// Re-exports for ergonomics
pub use game_transition::{derive_game_transitions, GameTransition};
pub use phase::{GameEvent, Phase};
pub use questions::QuestionBank;
pub use round::{RoundStage, RoundTracker, DEFAULT_TARGETS};
pub use snapshot::{DrawnQuestion, GameSnapshot};
pub use stats::{progress_summary, ProgressStats, TierUsage};
pub use tier::{Tier, TierMap};
