//! Runtime configuration.

pub mod game;

pub use game::{GameConfig, StoreProfile, TransitionPolicy};
