use thiserror::Error;
use tracing::debug;

use crate::matching::tfidf::{cosine_similarity, TfIdfSpace};
use crate::models::job::{Job, MatchResult};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    #[error("No jobs available for matching")]
    EmptyCorpus,

    #[error("Missing resume text")]
    EmptyResume,
}

/// Ranks `jobs` by TF-IDF cosine similarity to `resume_text`.
///
/// The vector space is fitted over every job description plus the resume.
/// Results keep job-store order on equal scores.
pub fn rank(resume_text: &str, jobs: &[Job]) -> Result<Vec<MatchResult>, RankError> {
    if resume_text.is_empty() {
        return Err(RankError::EmptyResume);
    }
    if jobs.is_empty() {
        return Err(RankError::EmptyCorpus);
    }

    let mut corpus: Vec<&str> = jobs.iter().map(|j| j.description.as_str()).collect();
    corpus.push(resume_text);
    let space = TfIdfSpace::fit_transform(&corpus);
    let resume_vec = space.vector(jobs.len());

    debug!(
        "Ranking {} jobs over a vocabulary of {} terms",
        jobs.len(),
        space.vocabulary_len()
    );

    let mut results: Vec<MatchResult> = jobs
        .iter()
        .enumerate()
        .map(|(i, job)| MatchResult {
            id: job.id,
            title: job.title.clone(),
            score: cosine_similarity(space.vector(i), resume_vec),
        })
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: u64, description: &str) -> Job {
        Job {
            id,
            title: format!("Job {id}"),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_python_docker_resume_matches_job() {
        let jobs = vec![job(
            1,
            "Looking for a Python developer with Docker and AWS experience",
        )];
        let results = rank("I have 3 years of Python and Docker experience", &jobs).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);
        assert!(results[0].score > 0.0);
    }

    #[test]
    fn test_results_sorted_and_bounded() {
        let jobs = vec![
            job(1, "Frontend engineer React TypeScript CSS"),
            job(2, "Backend engineer Python Django PostgreSQL"),
            job(3, "Data scientist Python pandas numpy"),
        ];
        let results = rank("Python developer using pandas and numpy daily", &jobs).unwrap();
        assert_eq!(results.len(), jobs.len());
        assert!(results.iter().all(|r| (0.0..=1.0).contains(&r.score)));
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(results[0].id, 3);
        assert_eq!(results[2].id, 1);
    }

    #[test]
    fn test_ties_keep_store_order() {
        let jobs = vec![job(1, "welding"), job(2, "plumbing"), job(3, "carpentry")];
        let results = rank("rust programmer", &jobs).unwrap();
        let ids: Vec<u64> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(results.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn test_all_stop_word_input_scores_zero() {
        let jobs = vec![job(1, "the and of"), job(2, "with a the")];
        let results = rank("I am the one", &jobs).unwrap();
        assert!(results.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn test_preconditions() {
        assert_eq!(rank("python", &[]), Err(RankError::EmptyCorpus));
        assert_eq!(rank("", &[job(1, "python")]), Err(RankError::EmptyResume));
    }

    #[test]
    fn test_whitespace_resume_scores_zero() {
        let results = rank("   ", &[job(1, "python"), job(2, "docker")]).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.score == 0.0));
    }
}
