use std::env;
use std::path::PathBuf;

use crate::domain::{TierMap, DEFAULT_TARGETS};
use crate::error::AppError;

pub const ENV_STORE: &str = "GETDEEP_STORE";
pub const ENV_QUESTIONS: &str = "GETDEEP_QUESTIONS";
pub const ENV_TARGETS: &str = "GETDEEP_TARGETS";
pub const ENV_TRANSITIONS: &str = "GETDEEP_TRANSITIONS";
pub const ENV_SEED: &str = "GETDEEP_SEED";

/// Value of `GETDEEP_STORE` that selects the in-memory backend.
pub const MEMORY_STORE: &str = ":memory:";
pub const DEFAULT_STORE_FILE: &str = "getdeep-progress.json";

/// Where progress is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreProfile {
    /// Lost on exit; tests and dry runs.
    InMemory,
    /// JSON document on disk.
    File(PathBuf),
}

impl StoreProfile {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::config(format!("{ENV_STORE} must not be empty")));
        }
        if raw == MEMORY_STORE {
            return Ok(Self::InMemory);
        }
        Ok(Self::File(PathBuf::from(raw)))
    }
}

/// How events fired in the wrong phase are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Return `InvalidTransition`.
    Strict,
    /// Log a warning and leave the phase unchanged.
    Lenient,
}

impl TransitionPolicy {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(AppError::config(format!(
                "{ENV_TRANSITIONS} must be 'strict' or 'lenient', got '{other}'"
            ))),
        }
    }
}

impl Default for TransitionPolicy {
    /// Strict in debug builds, lenient in release builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub store: StoreProfile,
    pub questions_path: Option<PathBuf>,
    pub targets: TierMap<u32>,
    pub transitions: TransitionPolicy,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            store: StoreProfile::File(PathBuf::from(DEFAULT_STORE_FILE)),
            questions_path: None,
            targets: DEFAULT_TARGETS,
            transitions: TransitionPolicy::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Build from `GETDEEP_*` environment variables; unset ones keep defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let mut cfg = Self::default();
        if let Some(raw) = opt_var(ENV_STORE) {
            cfg.store = StoreProfile::parse(&raw)?;
        }
        cfg.questions_path = opt_var(ENV_QUESTIONS).map(PathBuf::from);
        if let Some(raw) = opt_var(ENV_TARGETS) {
            cfg.targets = parse_targets(&raw)?;
        }
        if let Some(raw) = opt_var(ENV_TRANSITIONS) {
            cfg.transitions = TransitionPolicy::parse(&raw)?;
        }
        if let Some(raw) = opt_var(ENV_SEED) {
            cfg.seed = Some(raw.trim().parse().map_err(|_| {
                AppError::config(format!("{ENV_SEED} must be an unsigned integer, got '{raw}'"))
            })?);
        }
        Ok(cfg)
    }

    pub fn in_memory() -> Self {
        Self {
            store: StoreProfile::InMemory,
            ..Self::default()
        }
    }

    pub fn with_targets(mut self, targets: TierMap<u32>) -> Result<Self, AppError> {
        validate_targets(&targets)?;
        self.targets = targets;
        Ok(self)
    }
}

/// Parse `"ice,deep,deeper"` targets, e.g. `"2,2,1"`.
pub fn parse_targets(raw: &str) -> Result<TierMap<u32>, AppError> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [a, b, c] = parts.as_slice() else {
        return Err(AppError::config(format!(
            "{ENV_TARGETS} needs three comma-separated counts, got '{raw}'"
        )));
    };
    let num = |s: &str| {
        s.parse::<u32>()
            .map_err(|_| AppError::config(format!("{ENV_TARGETS}: '{s}' is not a count")))
    };
    let targets = TierMap::new(num(*a)?, num(*b)?, num(*c)?);
    validate_targets(&targets)?;
    Ok(targets)
}

pub(crate) fn validate_targets(targets: &TierMap<u32>) -> Result<(), AppError> {
    match targets.checked_sum() {
        None => Err(AppError::config("round targets overflow")),
        Some(0) => Err(AppError::config("round targets must not all be zero")),
        Some(_) => Ok(()),
    }
}

fn opt_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
