use thiserror::Error;

/// Why a job failed. Classification never fails, so only the two
/// effectful steps appear here.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Text extraction failed: {0}")]
    Extraction(#[from] crate::error::ProcessError),

    #[error("Filing failed: {0}")]
    Filing(#[from] crate::error::StorageError),
}
