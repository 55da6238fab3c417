use crate::classifier::Classification;
use crate::storage::FilingDecision;
use crate::worker::job::Job;

/// State threaded through the steps of one pipeline run. Each field is
/// filled by the step of the same name and stays `None` if that step never ran.
pub struct PipelineContext {
    pub job: Job,
    pub text: Option<String>,
    pub classification: Option<Classification>,
    pub decision: Option<FilingDecision>,
}

impl PipelineContext {
    pub fn new(job: Job) -> Self {
        Self {
            job,
            text: None,
            classification: None,
            decision: None,
        }
    }
}
