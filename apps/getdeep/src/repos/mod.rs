//! Repositories: domain-facing persistence over a [`crate::adapters::PrefsBackend`].

pub mod progress;

pub use progress::{ProgressExport, ProgressStore};
