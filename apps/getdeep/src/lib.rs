#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use adapters::{AnyPrefs, FilePrefs, MemoryPrefs, PrefsBackend, StoreError};
pub use config::{GameConfig, StoreProfile, TransitionPolicy};
pub use domain::{GameEvent, GameSnapshot, Phase, QuestionBank, RoundStage, Tier};
pub use error::AppError;
pub use errors::error_code::ErrorCode;
pub use infra::state::{build_game, GameBuilder};
pub use repos::ProgressStore;
pub use services::GameFlowService;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
