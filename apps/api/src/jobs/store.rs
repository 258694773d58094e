use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::sync::Mutex;
use tracing::debug;

use crate::models::job::Job;

/// Ordered job list persisted as a single JSON file.
///
/// Every read-modify-write cycle holds `lock`, and writes replace the file
/// atomically through a temp file in the same directory, so concurrent
/// submissions within one process cannot lose updates or reuse ids.
pub struct JobStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JobStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns all jobs in insertion order. A missing file is an empty store.
    pub async fn list(&self) -> Result<Vec<Job>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    pub async fn get(&self, id: u64) -> Result<Option<Job>> {
        Ok(self.list().await?.into_iter().find(|j| j.id == id))
    }

    /// Appends a job with id `count + 1` and rewrites the whole file.
    pub async fn add(&self, title: Option<String>, description: String) -> Result<Job> {
        let _guard = self.lock.lock().await;
        let mut jobs = self.load().await?;
        let job = Job::next(jobs.len(), title, description);
        jobs.push(job.clone());
        self.save(jobs).await?;
        debug!("Stored job {} ({})", job.id, job.title);
        Ok(job)
    }

    async fn load(&self) -> Result<Vec<Job>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("Corrupt job store at {}", self.path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read job store at {}", self.path.display())),
        }
    }

    async fn save(&self, jobs: Vec<Job>) -> Result<()> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, &jobs))
            .await
            .context("Job store writer task failed")?
    }
}

fn write_atomically(path: &Path, jobs: &[Job]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {}", dir.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
    serde_json::to_writer_pretty(&mut tmp, jobs)?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("Failed to replace job store at {}", path.display()))?;
    Ok(())
}
