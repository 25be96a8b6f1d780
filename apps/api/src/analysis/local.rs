//! Local Analyzer: the deterministic-given-jitter keyword heuristic.
//!
//! 1. Extract vocabulary skills from the job description and from the resume.
//! 2. A resume skill is matched when it overlaps some job skill.
//! 3. A job skill is covered when it overlaps some matched skill; the rest are
//!    missing (first 5 kept).
//! 4. Score from covered / job skill counts, then suggestions and improvements.

use std::sync::Arc;

use crate::analysis::scorer::{compute_score, JitterSource};
use crate::analysis::suggestions::{generate_improvements, generate_suggestions};
use crate::analysis::vocabulary::{skills_overlap, SkillVocabulary};
use crate::analysis::{AnalysisResult, AnalysisSource, MAX_MISSING_SKILLS};

/// Skill comparison between a resume and a job description, before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub job_skills: Vec<String>,
    pub matched: Vec<String>,
    /// Job skills overlapped by at least one matched skill.
    pub covered: usize,
    pub missing: Vec<String>,
}

pub fn match_skills(vocabulary: &SkillVocabulary, resume_text: &str, job_description: &str) -> SkillMatch {
    let job_skills = vocabulary.extract(job_description);
    let resume_skills = vocabulary.extract(resume_text);

    let matched: Vec<String> = resume_skills
        .into_iter()
        .filter(|skill| job_skills.iter().any(|job| skills_overlap(job, skill)))
        .collect();

    let uncovered: Vec<&String> = job_skills
        .iter()
        .filter(|job| !matched.iter().any(|m| skills_overlap(m, job)))
        .collect();
    let covered = job_skills.len() - uncovered.len();
    let missing: Vec<String> = uncovered
        .into_iter()
        .take(MAX_MISSING_SKILLS)
        .cloned()
        .collect();

    SkillMatch {
        job_skills,
        matched,
        covered,
        missing,
    }
}

#[derive(Clone)]
pub struct LocalAnalyzer {
    vocabulary: SkillVocabulary,
    jitter: Arc<dyn JitterSource>,
}

impl LocalAnalyzer {
    pub fn new(vocabulary: SkillVocabulary, jitter: Arc<dyn JitterSource>) -> Self {
        Self { vocabulary, jitter }
    }

    pub fn analyze(&self, resume_text: &str, job_description: &str) -> AnalysisResult {
        let SkillMatch {
            job_skills,
            matched,
            covered,
            missing,
        } = match_skills(&self.vocabulary, resume_text, job_description);

        let score = compute_score(covered, job_skills.len(), self.jitter.as_ref());
        let suggestions = generate_suggestions(score, &missing, resume_text);
        let improvements = generate_improvements(score);

        AnalysisResult {
            score,
            matched_skills: matched,
            missing_skills: missing,
            suggestions,
            improvements,
            source: AnalysisSource::Local,
        }
        .capped()
    }
}
