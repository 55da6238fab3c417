pub mod job;
pub mod scanner;

pub use job::{Job, JobResult};
pub use scanner::DirectoryScanner;
