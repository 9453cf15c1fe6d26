// Unit tests for error mapping - no storage or CLI involved
use std::io;
use std::path::PathBuf;

use crate::adapters::StoreError;
use crate::domain::{GameEvent, Phase, Tier};
use crate::errors::domain::{DomainError, TransitionKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_domain_errors() {
    let app: AppError = DomainError::index_out_of_range(Tier::Deep, 9, 3).into();
    assert_eq!(app.code(), ErrorCode::IndexOutOfRange);
    assert!(!app.is_invalid_transition());

    let app: AppError = DomainError::EmptyPool(Tier::Deeper).into();
    assert_eq!(app.code().as_str(), "EMPTY_POOL");
}

#[test]
fn maps_invalid_transitions() {
    let app: AppError = DomainError::event_not_allowed(GameEvent::Finish, Phase::AwaitingDraw).into();
    assert_eq!(app.code(), ErrorCode::InvalidTransition);
    assert!(app.is_invalid_transition());

    let app: AppError = DomainError::invalid_transition(
        TransitionKind::TierAtTarget(Tier::IceBreaker),
        "ice breaker already complete",
    )
    .into();
    assert_eq!(app.code().as_str(), "INVALID_TRANSITION");
}

#[test]
fn maps_store_errors() {
    let path = PathBuf::from("/tmp/progress.json");

    let app: AppError = StoreError::Io {
        path: path.clone(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    }
    .into();
    assert_eq!(app.code(), ErrorCode::StoreIo);

    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let app: AppError = StoreError::Corrupt {
        path: path.clone(),
        source,
    }
    .into();
    assert_eq!(app.code(), ErrorCode::StoreCorrupt);

    let app: AppError = StoreError::Locked { path }.into();
    assert_eq!(app.code().as_str(), "STORE_LOCKED");
    assert!(app.to_string().contains("locked"));
}

#[test]
fn maps_config_errors() {
    let app = AppError::config("GETDEEP_TARGETS must have three parts");
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert!(app.to_string().contains("GETDEEP_TARGETS"));
}

#[test]
fn display_names_the_event_and_phase() {
    let err = DomainError::event_not_allowed(GameEvent::Proceed, Phase::QuestionDrawn);
    let text = err.to_string();
    assert!(text.contains("Proceed"), "{text}");
    assert!(text.contains("QuestionDrawn"), "{text}");
}
