#![allow(dead_code)]

pub mod game_setup;

pub use game_setup::{game_with_pools, play_round, small_bank, GameUnderTest};
