use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::analysis::local::LocalAnalyzer;
use crate::analysis::orchestrator::Analyzer;
use crate::analysis::remote::{LlmScorer, RemoteScorer};
use crate::analysis::scorer::{JitterSource, NoJitter, RandomJitter};
use crate::analysis::vocabulary::SkillVocabulary;
use crate::auth::{JwtTokenService, PasswordHasher, TokenService};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::store::{AnalysisRepository, UserRepository};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Remote-first analyzer with local fallback.
    pub analyzer: Analyzer,
    pub users: Arc<dyn UserRepository>,
    /// Append-only history of completed analyses.
    pub analyses: Arc<dyn AnalysisRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: PasswordHasher,
}

impl AppState {
    /// Wires the analyzer, token service and password hasher from `config`
    /// around the given repositories.
    pub fn new(
        config: Config,
        users: Arc<dyn UserRepository>,
        analyses: Arc<dyn AnalysisRepository>,
    ) -> Result<Self> {
        let jitter: Arc<dyn JitterSource> = if config.score_jitter {
            Arc::new(RandomJitter)
        } else {
            Arc::new(NoJitter)
        };
        let vocabulary = SkillVocabulary::default();
        info!("Skill vocabulary loaded ({} skills)", vocabulary.skills().len());
        let local = LocalAnalyzer::new(vocabulary, jitter);

        let remote: Option<Arc<dyn RemoteScorer>> = match &config.llm_api_key {
            Some(key) => {
                let llm = LlmClient::new(
                    config.llm_api_url.clone(),
                    key.clone(),
                    config.llm_model.clone(),
                    Duration::from_secs(config.llm_timeout_secs),
                )?;
                info!("Remote scorer enabled (model: {})", llm.model());
                Some(Arc::new(LlmScorer(llm)))
            }
            None => {
                info!("No DEEPSEEK_API_KEY set; using local analysis only");
                None
            }
        };

        Ok(AppState {
            analyzer: Analyzer::new(remote, local),
            users,
            analyses,
            tokens: Arc::new(JwtTokenService::new(
                &config.jwt_secret,
                config.token_ttl_hours,
            )),
            passwords: PasswordHasher::new(config.bcrypt_cost),
            config,
        })
    }
}

#[cfg(test)]
impl AppState {
    /// In-memory state built from `Config::for_tests()` with the given tweaks.
    pub fn for_tests(configure: impl FnOnce(&mut Config)) -> Self {
        let mut config = Config::for_tests();
        configure(&mut config);
        let store = Arc::new(crate::store::MemoryStore::new());
        AppState::new(config, store.clone(), store).unwrap()
    }
}
