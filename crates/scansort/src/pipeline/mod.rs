pub mod config;
pub mod context;
pub mod error;
pub mod progress;
pub mod runner;

pub use config::PipelineConfig;
pub use context::PipelineContext;
pub use error::PipelineError;
pub use progress::{LogProgress, NoopProgress, Phase, ProgressEvent, ProgressReporter};
pub use runner::Pipeline;
