use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::adapters::{AnyPrefs, FilePrefs, MemoryPrefs};
use crate::config::game::validate_targets;
use crate::config::{GameConfig, StoreProfile};
use crate::domain::QuestionBank;
use crate::error::AppError;
use crate::repos::ProgressStore;
use crate::services::GameFlowService;

/// Builder for game services (used in both tests and the CLI)
pub struct GameBuilder {
    config: GameConfig,
    bank: Option<Arc<QuestionBank>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            bank: None,
        }
    }
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }
    pub fn with_store(mut self, store: StoreProfile) -> Self {
        self.config.store = store;
        self
    }
    /// Use `bank` instead of loading one from the configured path.
    pub fn with_bank(mut self, bank: Arc<QuestionBank>) -> Self {
        self.bank = Some(bank);
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Open the store and wire up the service. The session starts in
    /// `AwaitingDraw`; callers run `initialize_game` when ready.
    pub fn build(self) -> Result<GameFlowService<AnyPrefs>, AppError> {
        let GameConfig {
            store,
            questions_path,
            targets,
            transitions,
            seed,
        } = self.config;
        validate_targets(&targets)?;

        let bank = match (self.bank, questions_path) {
            (Some(bank), _) => bank,
            (None, Some(path)) => Arc::new(QuestionBank::from_json_file(path)?),
            (None, None) => Arc::new(QuestionBank::builtin()),
        };

        let backend = match &store {
            StoreProfile::InMemory => AnyPrefs::Memory(MemoryPrefs::new()),
            StoreProfile::File(path) => AnyPrefs::File(FilePrefs::open(path)?),
        };
        let progress = ProgressStore::load(backend, bank.sizes(), targets);

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!(
            store = ?store,
            questions = bank.total_len(),
            seeded = seed.is_some(),
            policy = ?transitions,
            "Game service ready"
        );
        Ok(GameFlowService::new(bank, progress, rng, transitions))
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
pub fn build_game() -> GameBuilder {
    GameBuilder::new()
}
