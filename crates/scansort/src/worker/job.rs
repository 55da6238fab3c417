use std::path::PathBuf;

use serde::Serialize;

use crate::document::Category;
use crate::storage::FilingDecision;

/// One document to run through the pipeline.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: String,
    pub source_path: PathBuf,
}

impl Job {
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            source_path,
        }
    }
}

/// Outcome of one job. Every pipeline run produces exactly one.
#[derive(Debug, Clone, Serialize)]
pub struct JobResult {
    pub job_id: String,
    pub source_path: PathBuf,
    pub success: bool,
    pub category: Option<Category>,
    pub destination: Option<PathBuf>,
    /// The classifier fell back to the placeholder name.
    pub degraded: bool,
    pub error: Option<String>,
}

impl JobResult {
    pub fn success(job: &Job, decision: &FilingDecision, degraded: bool) -> Self {
        Self {
            job_id: job.id.clone(),
            source_path: job.source_path.clone(),
            success: true,
            category: Some(decision.category),
            destination: Some(decision.destination.clone()),
            degraded,
            error: None,
        }
    }

    pub fn failure(job: &Job, error: String) -> Self {
        Self {
            job_id: job.id.clone(),
            source_path: job.source_path.clone(),
            success: false,
            category: None,
            destination: None,
            degraded: false,
            error: Some(error),
        }
    }
}
