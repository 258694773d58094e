use serde::{Deserialize, Serialize};

/// A stored job posting. Ids are assigned as `previous_count + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    pub title: String,
    pub description: String,
}

impl Job {
    /// Builds the job that would be appended to a store currently holding `count` jobs.
    /// A missing title becomes `Job {id}`; a given one is kept as-is, even if blank.
    pub fn next(count: usize, title: Option<String>, description: String) -> Self {
        let id = count as u64 + 1;
        let title = title.unwrap_or_else(|| format!("Job {id}"));
        Job {
            id,
            title,
            description,
        }
    }
}

/// One ranked job for a resume. `score` lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: u64,
    pub title: String,
    pub score: f64,
}
