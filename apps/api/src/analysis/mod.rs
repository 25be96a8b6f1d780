// Resume analysis: skill extraction, scoring, suggestions, and the
// remote-first / local-fallback orchestrator.
// All chat-completion calls go through llm_client.

pub mod handlers;
pub mod local;
pub mod orchestrator;
pub mod prompts;
pub mod remote;
pub mod scorer;
pub mod suggestions;
pub mod vocabulary;

use crate::analysis::suggestions::{MAX_IMPROVEMENTS, MAX_SUGGESTIONS};

pub const MAX_MISSING_SKILLS: usize = 5;
/// Matched skills shown to the user. The score is computed before this cap.
pub const MAX_MATCHED_SKILLS: usize = 8;

/// Which backend produced an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    Remote,
    Local,
}

#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub score: u32, // 0 – 100
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub improvements: Vec<String>,
    pub source: AnalysisSource,
}

impl AnalysisResult {
    /// Enforces the score range and every list cap.
    pub fn capped(mut self) -> Self {
        self.score = self.score.min(100);
        self.matched_skills.truncate(MAX_MATCHED_SKILLS);
        self.missing_skills.truncate(MAX_MISSING_SKILLS);
        self.suggestions.truncate(MAX_SUGGESTIONS);
        self.improvements.truncate(MAX_IMPROVEMENTS);
        self
    }
}
