// LLM prompt constants for resume analysis.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Role description for the ATS analysis system prompt.
pub const ANALYSIS_SYSTEM_ROLE: &str = "You are an expert ATS (Applicant Tracking System) \
    analyzer and career coach. Provide detailed, actionable feedback on resume optimization.";

/// Analysis prompt template. Replace `{job_description}` and `{resume_text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume against the job description and provide an ATS compatibility score and recommendations.

Job Description:
{job_description}

Resume:
{resume_text}

Return a JSON object with this EXACT schema (no extra fields):
{
  "atsScore": 85,
  "matchedSkills": ["JavaScript", "React", "Node.js"],
  "missingSkills": ["Python", "AWS", "Docker"],
  "suggestions": ["Add more specific examples of your JavaScript experience", "Include metrics and quantifiable achievements"],
  "improvements": ["Optimize keyword placement for ATS scanning", "Add relevant certifications"]
}

Focus on:
1. Keyword matching between resume and job description
2. ATS compatibility and formatting
3. Skill alignment
4. Specific, actionable recommendations
5. atsScore must be an integer 0-100 based on how well the resume matches the job requirements

Limits: at most 5 missingSkills, 5 suggestions and 4 improvements."#;

pub fn analysis_system_prompt() -> String {
    format!("{ANALYSIS_SYSTEM_ROLE} {JSON_ONLY_INSTRUCTION}")
}

pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_texts() {
        let prompt = build_analysis_prompt("RESUME BODY", "JOB BODY");
        assert!(prompt.contains("Job Description:\nJOB BODY"));
        assert!(prompt.contains("Resume:\nRESUME BODY"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_system_prompt_demands_json() {
        let system = analysis_system_prompt();
        assert!(system.contains("ATS"));
        assert!(system.contains("valid JSON only"));
    }
}
