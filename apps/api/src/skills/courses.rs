use std::collections::BTreeMap;

use crate::skills::vocabulary::COURSE_TABLE;

/// Courses for each skill in `missing`. Every queried skill becomes a key;
/// skills without an entry map to an empty list.
pub fn recommend<S: AsRef<str>>(missing: &[S]) -> BTreeMap<String, Vec<String>> {
    missing
        .iter()
        .map(|skill| {
            let skill = skill.as_ref();
            let courses = COURSE_TABLE
                .iter()
                .find(|(s, _)| *s == skill)
                .map(|(_, courses)| courses.iter().map(|c| c.to_string()).collect())
                .unwrap_or_default();
            (skill.to_string(), courses)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_keys_equal_input_set() {
        let missing = ["aws", "kubernetes", "nlp", "cobol"];
        let recs = recommend(&missing);
        let keys: BTreeSet<&str> = recs.keys().map(String::as_str).collect();
        assert_eq!(keys, missing.into_iter().collect());
    }

    #[test]
    fn test_known_and_unknown_skills() {
        let recs = recommend(&["docker", "excel"]);
        assert_eq!(recs["docker"], vec!["Docker Mastery (Udemy)"]);
        assert!(recs["excel"].is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(recommend::<&str>(&[]).is_empty());
    }
}
