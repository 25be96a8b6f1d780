//! Remote scoring: delegates the whole analysis to a chat-completion model.
//!
//! `Analyzer` holds an `Option<Arc<dyn RemoteScorer>>`; any error returned here
//! sends the request down the local heuristic path instead.

use async_trait::async_trait;
use serde::Deserialize;

use crate::analysis::prompts::{analysis_system_prompt, build_analysis_prompt};
use crate::analysis::vocabulary::skills_overlap;
use crate::analysis::{AnalysisResult, AnalysisSource};
use crate::llm_client::{LlmClient, LlmError};

/// Score reported when the model omits `atsScore` or returns 0.
const DEFAULT_REMOTE_SCORE: u32 = 50;

#[async_trait]
pub trait RemoteScorer: Send + Sync {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, LlmError>;

    /// Backend label for logs.
    fn name(&self) -> &str;
}

/// JSON object the model is asked to produce. Every field is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteAnalysis {
    ats_score: Option<f64>,
    matched_skills: Option<Vec<String>>,
    missing_skills: Option<Vec<String>>,
    suggestions: Option<Vec<String>>,
    improvements: Option<Vec<String>>,
}

impl From<RemoteAnalysis> for AnalysisResult {
    fn from(remote: RemoteAnalysis) -> Self {
        let score = match remote.ats_score {
            Some(s) if s != 0.0 => s.round().clamp(0.0, 100.0) as u32,
            _ => DEFAULT_REMOTE_SCORE,
        };
        let matched_skills = remote.matched_skills.unwrap_or_default();
        let mut missing_skills = remote.missing_skills.unwrap_or_default();
        // A skill the model reports as matched is never also missing.
        missing_skills.retain(|s| !matched_skills.iter().any(|m| skills_overlap(m, s)));

        AnalysisResult {
            score,
            matched_skills,
            missing_skills,
            suggestions: remote.suggestions.unwrap_or_default(),
            improvements: remote.improvements.unwrap_or_default(),
            source: AnalysisSource::Remote,
        }
        .capped()
    }
}

pub struct LlmScorer(pub LlmClient);

#[async_trait]
impl RemoteScorer for LlmScorer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, LlmError> {
        let prompt = build_analysis_prompt(resume_text, job_description);
        let remote: RemoteAnalysis = self
            .0
            .call_json(&prompt, &analysis_system_prompt())
            .await?;
        Ok(remote.into())
    }

    fn name(&self) -> &str {
        self.0.model()
    }
}
