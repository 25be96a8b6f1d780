//! Suggestion Generator: deterministic advice derived from the score and skill gaps.

pub const MAX_SUGGESTIONS: usize = 5;
pub const MAX_IMPROVEMENTS: usize = 4;

/// Missing skills named in the "consider adding" suggestion.
const NAMED_MISSING_SKILLS: usize = 3;
/// Resumes shorter than this (in words) get an expand-detail suggestion.
const MIN_RESUME_WORDS: usize = 200;

const LOW_SCORE_SUGGESTIONS: [&str; 2] = [
    "Add more relevant keywords from the job description to your resume",
    "Include specific technical skills mentioned in the job posting",
];
const ACHIEVEMENTS_SUGGESTION: &str =
    "Include quantifiable achievements and results in your experience";
const EXPAND_SUGGESTION: &str =
    "Expand your resume with more detailed descriptions of your experience";
const BOILERPLATE_SUGGESTIONS: [&str; 2] = [
    "Use action verbs to start each bullet point in your experience section",
    "Ensure your resume format is ATS-friendly with clear section headers",
];

const MAJOR_REVISION_IMPROVEMENTS: [&str; 2] = [
    "Major revision needed - align skills and experience with job requirements",
    "Add relevant certifications or training mentioned in the job posting",
];
const GOOD_FOUNDATION_IMPROVEMENTS: [&str; 2] = [
    "Good foundation - focus on adding missing keywords and skills",
    "Enhance experience descriptions with more specific technical details",
];
const STRONG_MATCH_IMPROVEMENTS: [&str; 2] = [
    "Strong match - fine-tune formatting and keyword placement",
    "Consider adding any remaining relevant skills or technologies",
];
const BOILERPLATE_IMPROVEMENTS: [&str; 2] = [
    "Review and optimize your resume summary/objective section",
    "Ensure consistent formatting and clear section organization",
];

pub fn generate_suggestions(score: u32, missing_skills: &[String], resume_text: &str) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();

    if score < 60 {
        suggestions.extend(LOW_SCORE_SUGGESTIONS.iter().map(|s| s.to_string()));
    }

    if !missing_skills.is_empty() {
        let named: Vec<&str> = missing_skills
            .iter()
            .take(NAMED_MISSING_SKILLS)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Consider adding experience with: {}",
            named.join(", ")
        ));
    }

    if !resume_text.to_lowercase().contains("achieve") {
        suggestions.push(ACHIEVEMENTS_SUGGESTION.to_string());
    }

    if word_count(resume_text) < MIN_RESUME_WORDS {
        suggestions.push(EXPAND_SUGGESTION.to_string());
    }

    suggestions.extend(BOILERPLATE_SUGGESTIONS.iter().map(|s| s.to_string()));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

pub fn generate_improvements(score: u32) -> Vec<String> {
    let tier = if score < 40 {
        MAJOR_REVISION_IMPROVEMENTS
    } else if score < 70 {
        GOOD_FOUNDATION_IMPROVEMENTS
    } else {
        STRONG_MATCH_IMPROVEMENTS
    };

    let mut improvements: Vec<String> = tier
        .iter()
        .chain(BOILERPLATE_IMPROVEMENTS.iter())
        .map(|s| s.to_string())
        .collect();
    improvements.truncate(MAX_IMPROVEMENTS);
    improvements
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
