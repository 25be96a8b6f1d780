//! Analysis Orchestrator: remote model first, local heuristic on any failure.
//!
//! RECEIVE → TRY_REMOTE (only when configured) → RETURN_REMOTE
//!                                    ↘ any error → FALLBACK_LOCAL → RETURN_LOCAL
//!
//! Remote errors are logged and swallowed; callers always get a result.

use std::sync::Arc;

use tracing::{info, warn};

use crate::analysis::local::LocalAnalyzer;
use crate::analysis::remote::RemoteScorer;
use crate::analysis::AnalysisResult;

#[derive(Clone)]
pub struct Analyzer {
    remote: Option<Arc<dyn RemoteScorer>>,
    local: LocalAnalyzer,
}

impl Analyzer {
    pub fn new(remote: Option<Arc<dyn RemoteScorer>>, local: LocalAnalyzer) -> Self {
        Self { remote, local }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn analyze(&self, resume_text: &str, job_description: &str) -> AnalysisResult {
        if let Some(remote) = &self.remote {
            match remote.analyze(resume_text, job_description).await {
                Ok(result) => {
                    info!("Analysis served by remote scorer '{}'", remote.name());
                    return result;
                }
                Err(e) => {
                    warn!(
                        "Remote scorer '{}' failed, falling back to local analysis: {e}",
                        remote.name()
                    );
                }
            }
        }

        self.local.analyze(resume_text, job_description)
    }
}
