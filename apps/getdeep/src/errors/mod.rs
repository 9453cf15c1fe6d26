//! Error types shared across the crate.

pub mod domain;
pub mod error_code;

#[cfg(test)]
mod tests_error_mapping;
