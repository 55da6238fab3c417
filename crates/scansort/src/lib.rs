//! Classifies scanned documents by their text and files them into category
//! folders under descriptive, collision-free names.
//!
//! The flow for one file is [`processor`] (text) → [`classifier`]
//! (category and name) → [`storage`] (move), orchestrated by [`pipeline`].

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod processor;
pub mod sanitize;
pub mod storage;
pub mod worker;

pub use catalog::PatternCatalog;
pub use classifier::{Classification, ClassifiedDocument, Classifier, RuleClassifier};
pub use config::{load_config, Config};
pub use document::{Category, DocumentType, ExtractedFields};
pub use error::{ConfigError, ProcessError, Result, ScansortError, StorageError, WorkerError};
pub use extract::FieldExtractor;
pub use pipeline::{Pipeline, PipelineConfig, PipelineContext};
pub use processor::{ProcessorRegistry, TextExtractor};
pub use storage::{FilingDecision, FilingEngine};
pub use worker::{DirectoryScanner, Job, JobResult};
