use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::analysis::AnalysisResult;

/// One completed analysis, as stored in history and returned to clients.
/// Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub file_name: String,
    pub job_description: String,
    pub ats_score: i32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub improvements: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn new(
        user_id: Uuid,
        file_name: String,
        job_description: String,
        result: AnalysisResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            file_name,
            job_description,
            ats_score: result.score as i32,
            matched_skills: result.matched_skills,
            missing_skills: result.missing_skills,
            suggestions: result.suggestions,
            improvements: result.improvements,
            created_at: Utc::now(),
        }
    }
}
