//! Skill extraction — pluggable strategies behind the `SkillExtractor` trait.
//!
//! `LinguisticSkillExtractor` matches tokens, noun chunks, and entities against
//! the vocabulary. `RegexSkillExtractor` does whole-word matching and is always
//! available as the fallback. `SkillMatcher` picks the strategy once at startup.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::warn;

use crate::skills::chunker::analyze;
use crate::skills::vocabulary::SKILLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorMode {
    Linguistic,
    Basic,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Text of {len} characters exceeds the linguistic limit of {max}")]
    InputTooLong { len: usize, max: usize },
}

/// A skill detection strategy. Implementations return canonical vocabulary labels.
pub trait SkillExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract(&self, text: &str) -> Result<BTreeSet<&'static str>, ExtractError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Linguistic strategy
// ────────────────────────────────────────────────────────────────────────────

/// Token / noun-chunk / entity matching.
///
/// A token hits a skill when either string contains the other, so `reactive`
/// reports `react` and the pronoun `I` reports every skill spelled with an `i`.
/// Chunks and entities only hit skills they contain.
pub struct LinguisticSkillExtractor {
    max_chars: usize,
}

impl LinguisticSkillExtractor {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl SkillExtractor for LinguisticSkillExtractor {
    fn name(&self) -> &'static str {
        "linguistic"
    }

    fn extract(&self, text: &str) -> Result<BTreeSet<&'static str>, ExtractError> {
        let len = text.chars().count();
        if len > self.max_chars {
            return Err(ExtractError::InputTooLong {
                len,
                max: self.max_chars,
            });
        }

        let analysis = analyze(text);
        let mut found = BTreeSet::new();

        for token in &analysis.tokens {
            let tok = token.text.to_lowercase();
            for skill in SKILLS {
                if skill.contains(tok.as_str()) || tok.contains(skill) {
                    found.insert(*skill);
                }
            }
        }

        for span in analysis.noun_chunks.iter().chain(&analysis.entities) {
            let span = span.to_lowercase();
            found.extend(SKILLS.iter().copied().filter(|s| span.contains(s)));
        }

        Ok(found)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Regex strategy
// ────────────────────────────────────────────────────────────────────────────

/// One case-insensitive pattern per skill. A skill matches when it is not
/// glued to a word character on either side, which also works for `c++`/`c#`.
static SKILL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    SKILLS
        .iter()
        .map(|skill| {
            let pattern = format!(r"(?i)(?:^|\W){}(?:\W|$)", regex::escape(skill));
            (
                *skill,
                Regex::new(&pattern).expect("escaped skill pattern is valid"),
            )
        })
        .collect()
});

/// Whole-word / whole-phrase vocabulary matching.
pub struct RegexSkillExtractor;

impl SkillExtractor for RegexSkillExtractor {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn extract(&self, text: &str) -> Result<BTreeSet<&'static str>, ExtractError> {
        Ok(SKILL_PATTERNS
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(skill, _)| *skill)
            .collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Strategy selection
// ────────────────────────────────────────────────────────────────────────────

/// Primary strategy plus the regex fallback, chosen once at startup.
pub struct SkillMatcher {
    primary: Option<Box<dyn SkillExtractor>>,
    fallback: RegexSkillExtractor,
}

impl SkillMatcher {
    pub fn from_config(mode: ExtractorMode, max_chars: usize) -> Self {
        match mode {
            ExtractorMode::Linguistic => {
                Self::with_primary(Box::new(LinguisticSkillExtractor::new(max_chars)))
            }
            ExtractorMode::Basic => Self::basic(),
        }
    }

    pub fn with_primary(primary: Box<dyn SkillExtractor>) -> Self {
        Self {
            primary: Some(primary),
            fallback: RegexSkillExtractor,
        }
    }

    pub fn basic() -> Self {
        Self {
            primary: None,
            fallback: RegexSkillExtractor,
        }
    }

    pub fn backend(&self) -> &'static str {
        self.primary
            .as_ref()
            .map(|p| p.name())
            .unwrap_or_else(|| self.fallback.name())
    }

    /// Sorted, deduplicated skill labels found in `text`. Never fails.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        if let Some(primary) = &self.primary {
            match primary.extract(text) {
                Ok(found) => return found.into_iter().map(str::to_string).collect(),
                Err(e) => warn!("{} skill extractor failed, using regex: {e}", primary.name()),
            }
        }

        self.fallback
            .extract(text)
            .map(|found| found.into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linguistic() -> SkillMatcher {
        SkillMatcher::from_config(ExtractorMode::Linguistic, 1_000_000)
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(linguistic().extract_skills("").is_empty());
        assert!(SkillMatcher::basic().extract_skills("  \n").is_empty());
    }

    #[test]
    fn test_regex_whole_words_only() {
        let m = SkillMatcher::basic();
        assert_eq!(
            m.extract_skills("Built REST API services in Python; deployed to AWS."),
            vec!["aws", "python", "rest api"]
        );
        // "javascript" must not report "java"; "reactive" must not report "react"
        assert_eq!(
            m.extract_skills("JavaScript and reactive streams"),
            vec!["javascript"]
        );
    }

    #[test]
    fn test_regex_handles_symbol_skills() {
        let m = SkillMatcher::basic();
        assert_eq!(
            m.extract_skills("Wrote C++, C# and scikit-learn code"),
            vec!["c#", "c++", "scikit-learn"]
        );
    }

    #[test]
    fn test_linguistic_bidirectional_substring_quirk() {
        let m = linguistic();
        let found = m.extract_skills("Reactive systems");
        assert!(found.contains(&"react".to_string()));

        let found = m.extract_skills("MySQL");
        assert!(found.contains(&"sql".to_string()));
        assert!(found.contains(&"mysql".to_string()));
    }

    #[test]
    fn test_linguistic_hyphenated_tokens() {
        let m = linguistic();
        assert!(m
            .extract_skills("Trained models with scikit-learn")
            .contains(&"scikit-learn".to_string()));
        // a hyphen inside an unrelated word is not a standalone token
        assert!(!m
            .extract_skills("front-end work")
            .contains(&"scikit-learn".to_string()));
    }

    #[test]
    fn test_linguistic_matches_multiword_skills_in_chunks() {
        let found = linguistic().extract_skills("Strong problem solving and data analysis");
        assert!(found.contains(&"problem solving".to_string()));
        assert!(found.contains(&"data analysis".to_string()));
    }

    #[test]
    fn test_job_description_skills() {
        // "and" sits inside "pandas"
        assert_eq!(
            linguistic().extract_skills("Need Python, AWS, and NLP skills"),
            vec!["aws", "nlp", "pandas", "python"]
        );
        assert_eq!(
            SkillMatcher::basic().extract_skills("Need Python, AWS, and NLP skills"),
            vec!["aws", "nlp", "python"]
        );
    }

    #[test]
    fn test_output_is_sorted_and_unique() {
        let found = linguistic().extract_skills("python Python PYTHON docker Docker");
        let mut expected = found.clone();
        expected.sort();
        expected.dedup();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_reextracting_output_returns_subset() {
        // `sql` re-extracted alone also hits `mysql` linguistically, so keep it out here.
        let cases = [
            (linguistic(), "Docker, Kubernetes and Flask on GCP with pandas"),
            (
                SkillMatcher::basic(),
                "Docker, Kubernetes and PostgreSQL on GCP with pandas",
            ),
        ];
        for (m, text) in cases {
            let first = m.extract_skills(text);
            let again = m.extract_skills(&first.join(" "));
            assert!(again.iter().all(|s| first.contains(s)), "{again:?} vs {first:?}");
        }
    }

    #[test]
    fn test_too_long_input_falls_back_to_regex() {
        let m = SkillMatcher::from_config(ExtractorMode::Linguistic, 10);
        // linguistic would report "react" for "reactive"
        assert_eq!(
            m.extract_skills("reactive python services"),
            vec!["python"]
        );
    }

    #[test]
    fn test_linguistic_length_error() {
        let err = LinguisticSkillExtractor::new(3).extract("abcd").unwrap_err();
        assert_eq!(err, ExtractError::InputTooLong { len: 4, max: 3 });
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(linguistic().backend(), "linguistic");
        assert_eq!(SkillMatcher::basic().backend(), "basic");
    }
}
