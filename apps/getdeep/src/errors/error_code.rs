//! Error codes surfaced by the CLI and logs.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Domain
    /// Question index outside the pool
    IndexOutOfRange,
    /// Event fired in a phase that does not accept it
    InvalidTransition,
    /// A tier has no questions configured
    EmptyPool,

    // Storage
    /// Preference file could not be read or written
    StoreIo,
    /// Preference file is not valid JSON
    StoreCorrupt,
    /// Another process holds the preference file
    StoreLocked,

    // Configuration
    /// Invalid or missing configuration value
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IndexOutOfRange => "INDEX_OUT_OF_RANGE",
            Self::InvalidTransition => "INVALID_TRANSITION",
            Self::EmptyPool => "EMPTY_POOL",
            Self::StoreIo => "STORE_IO",
            Self::StoreCorrupt => "STORE_CORRUPT",
            Self::StoreLocked => "STORE_LOCKED",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
