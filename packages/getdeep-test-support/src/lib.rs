//! Test support utilities shared by the getdeep integration tests.

pub mod fixtures;
pub mod logging;

pub use fixtures::{numbered_pool, TempStore};
