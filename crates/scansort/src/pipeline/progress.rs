use std::fmt;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::document::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Extracting,
    Classifying,
    Filing,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extracting => write!(f, "Extracting text"),
            Self::Classifying => write!(f, "Classifying"),
            Self::Filing => write!(f, "Filing"),
        }
    }
}

/// Events emitted by the pipeline while processing one document.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    Phase {
        phase: Phase,
        message: String,
    },
    Completed {
        destination: PathBuf,
        category: Category,
        degraded: bool,
    },
    Failed {
        error: String,
    },
}

pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: ProgressEvent);
}

/// Discards every event.
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn report(&self, _event: ProgressEvent) {}
}

/// Writes completion and failure events to the log; phases at debug level.
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::Phase { phase, message } => {
                tracing::debug!(%phase, "{}", message);
            }
            ProgressEvent::Completed {
                destination,
                category,
                degraded,
            } => {
                let name = crate::sanitize::redact_path(&destination);
                if degraded {
                    warn!("Filed as {} under placeholder name: {}", category, name);
                } else {
                    info!("Filed as {}: {}", category, name);
                }
            }
            ProgressEvent::Failed { error } => {
                warn!("Processing failed: {}", error);
            }
        }
    }
}
