use std::collections::BTreeMap;

use serde::Serialize;

use crate::skills::courses::recommend;
use crate::skills::extractor::SkillMatcher;

/// Resume skills compared against a job's skills.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillGapReport {
    pub resume_skills: Vec<String>,
    pub job_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub course_recommendations: BTreeMap<String, Vec<String>>,
}

/// `job_text` is the description to compare against, if any. Without one the
/// job side and the gap are empty.
pub fn analyze(matcher: &SkillMatcher, resume_text: &str, job_text: Option<&str>) -> SkillGapReport {
    let resume_skills = matcher.extract_skills(resume_text);
    let job_skills = job_text
        .map(|t| matcher.extract_skills(t))
        .unwrap_or_default();

    let missing_skills: Vec<String> = job_skills
        .iter()
        .filter(|s| !resume_skills.contains(s))
        .cloned()
        .collect();
    let course_recommendations = recommend(&missing_skills);

    SkillGapReport {
        resume_skills,
        job_skills,
        missing_skills,
        course_recommendations,
    }
}
