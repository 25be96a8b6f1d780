//! Skill Vocabulary: fixed keyword list and case-insensitive substring extraction.
//!
//! No stemming, no tokenization, no word boundaries. The lowercase text is
//! scanned leftmost-longest, so a span is credited to the longest skill that
//! starts there: "JavaScript" yields JavaScript but not Java, while a
//! standalone "Java" elsewhere still yields Java.

use aho_corasick::{AhoCorasick, BuildError, MatchKind};

/// Canonical skills, in the order extraction reports them.
pub const DEFAULT_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "SQL",
    "AWS",
    "Docker",
    "Git",
    "TypeScript",
    "MongoDB",
    "Express",
    "REST API",
    "GraphQL",
    "Redux",
    "Vue.js",
    "Angular",
    "Java",
    "C++",
    "Machine Learning",
    "Data Analysis",
    "Project Management",
    "Agile",
    "Scrum",
    "Leadership",
    "Communication",
    "Problem Solving",
    "Teamwork",
];

/// Ordered, deduplicated set of canonical skill strings.
///
/// Matching is leftmost-longest: where one skill is embedded in a longer one
/// ("Java" in "JavaScript"), only the longer skill is reported for that span.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<String>,
    matcher: AhoCorasick,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied()).expect("default skill vocabulary is valid")
    }
}

impl SkillVocabulary {
    /// Builds a vocabulary, dropping case-insensitive duplicates while keeping first-seen order.
    pub fn new<I, S>(skills: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: Vec<String> = Vec::new();
        let mut ordered = Vec::new();
        for skill in skills {
            let skill: String = skill.into();
            let lower = skill.to_lowercase();
            if lower.trim().is_empty() || seen.contains(&lower) {
                continue;
            }
            seen.push(lower);
            ordered.push(skill);
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&seen)?;

        Ok(Self {
            skills: ordered,
            matcher,
        })
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    #[cfg(test)]
    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Returns every vocabulary term occurring in `text`, in vocabulary order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return vec![];
        }
        let text_lower = text.to_lowercase();
        let mut found = vec![false; self.skills.len()];
        for m in self.matcher.find_iter(&text_lower) {
            found[m.pattern().as_usize()] = true;
        }
        self.skills
            .iter()
            .zip(found)
            .filter_map(|(skill, hit)| hit.then(|| skill.clone()))
            .collect()
    }
}

/// Two skills are related when either one contains the other, ignoring case.
pub fn skills_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}
