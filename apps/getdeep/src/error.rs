use thiserror::Error;

use crate::adapters::StoreError;
use crate::errors::domain::DomainError;
use crate::errors::error_code::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Stable code for this error, as printed by the CLI.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(DomainError::IndexOutOfRange { .. }) => ErrorCode::IndexOutOfRange,
            AppError::Domain(DomainError::InvalidTransition(..)) => ErrorCode::InvalidTransition,
            AppError::Domain(DomainError::EmptyPool(_)) => ErrorCode::EmptyPool,
            AppError::Store(StoreError::Io { .. }) => ErrorCode::StoreIo,
            AppError::Store(StoreError::Corrupt { .. }) => ErrorCode::StoreCorrupt,
            AppError::Store(StoreError::Locked { .. }) => ErrorCode::StoreLocked,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// True for refused state-machine events (UI bugs rather than failures).
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::InvalidTransition(..)))
    }
}
