use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info_span};

use crate::catalog::PatternCatalog;
use crate::classifier::{Classifier, RuleClassifier};
use crate::error::ConfigError;
use crate::processor::{ProcessorRegistry, TextExtractor};
use crate::sanitize;
use crate::storage::FilingEngine;
use crate::worker::job::{Job, JobResult};

use super::config::PipelineConfig;
use super::context::PipelineContext;
use super::error::PipelineError;
use super::progress::{LogProgress, Phase, ProgressEvent, ProgressReporter};

/// Extract, classify, file: one document at a time.
pub struct Pipeline {
    extractor: Box<dyn TextExtractor>,
    classifier: Box<dyn Classifier>,
    filing: FilingEngine,
}

impl Pipeline {
    /// Production constructor, builds all sub-components from config.
    pub fn from_config(config: Arc<PipelineConfig>) -> Result<Self, ConfigError> {
        let extractor =
            ProcessorRegistry::new(config.ocr_enabled, &config.ocr_languages, config.ocr_dpi);
        let catalog = PatternCatalog::with_extra_senders(
            config
                .senders
                .iter()
                .map(|s| (s.label.as_str(), s.pattern.as_str())),
        )?;
        let classifier = RuleClassifier::new(Arc::new(catalog));
        let filing = FilingEngine::new(&config.output_directory);

        Ok(Self::with_components(
            Box::new(extractor),
            Box::new(classifier),
            filing,
        ))
    }

    /// Assembles a pipeline from explicit parts, e.g. a stub extractor in tests.
    pub fn with_components(
        extractor: Box<dyn TextExtractor>,
        classifier: Box<dyn Classifier>,
        filing: FilingEngine,
    ) -> Self {
        Self {
            extractor,
            classifier,
            filing,
        }
    }

    pub fn filing(&self) -> &FilingEngine {
        &self.filing
    }

    /// Runs the pipeline for a single file and logs the outcome.
    pub fn process_document(&self, path: &Path) -> JobResult {
        let ctx = PipelineContext::new(Job::new(path.to_path_buf()));
        self.run(ctx, &LogProgress).0
    }

    /// Runs every step on `ctx`. Failures end the run early and are turned
    /// into a failed [`JobResult`]; nothing propagates out of here.
    pub fn run(
        &self,
        mut ctx: PipelineContext,
        progress: &dyn ProgressReporter,
    ) -> (JobResult, PipelineContext) {
        let filename = sanitize::redact_path(&ctx.job.source_path);
        let _pipeline_span = info_span!("pipeline",
            job_id = %ctx.job.id,
            filename = %filename,
            path_hash = %sanitize::hash_path(&ctx.job.source_path),
        )
        .entered();

        {
            let _step = info_span!("extract_text").entered();
            progress.report(ProgressEvent::Phase {
                phase: Phase::Extracting,
                message: "Running OCR and text extraction...".to_string(),
            });
            if let Err(e) = self.step_extract_text(&mut ctx) {
                return Self::fail(ctx, e, progress);
            }
        }

        {
            let _step = info_span!("classify").entered();
            progress.report(ProgressEvent::Phase {
                phase: Phase::Classifying,
                message: "Classifying document...".to_string(),
            });
            self.step_classify(&mut ctx);
        }

        {
            let _step = info_span!("file_document").entered();
            progress.report(ProgressEvent::Phase {
                phase: Phase::Filing,
                message: "Moving document into its category...".to_string(),
            });
            if let Err(e) = self.step_file(&mut ctx) {
                return Self::fail(ctx, e, progress);
            }
        }

        let degraded = ctx
            .classification
            .as_ref()
            .is_some_and(|c| c.is_degraded());
        let result = match &ctx.decision {
            Some(decision) => {
                progress.report(ProgressEvent::Completed {
                    destination: decision.destination.clone(),
                    category: decision.category,
                    degraded,
                });
                JobResult::success(&ctx.job, decision, degraded)
            }
            None => JobResult::failure(&ctx.job, "document was not filed".to_string()),
        };
        (result, ctx)
    }

    fn fail(
        ctx: PipelineContext,
        error: PipelineError,
        progress: &dyn ProgressReporter,
    ) -> (JobResult, PipelineContext) {
        let message = error.to_string();
        progress.report(ProgressEvent::Failed {
            error: message.clone(),
        });
        (JobResult::failure(&ctx.job, message), ctx)
    }

    fn step_extract_text(&self, ctx: &mut PipelineContext) -> Result<(), PipelineError> {
        let text = self.extractor.extract_text(&ctx.job.source_path)?;
        debug!("Extracted {} characters", text.chars().count());
        ctx.text = Some(text);
        Ok(())
    }

    fn step_classify(&self, ctx: &mut PipelineContext) {
        let text = ctx.text.as_deref().unwrap_or_default();
        ctx.classification = Some(self.classifier.classify(text));
    }

    fn step_file(&self, ctx: &mut PipelineContext) -> Result<(), PipelineError> {
        let Some(classification) = ctx.classification.as_ref() else {
            return Ok(());
        };
        let decision = self.filing.file_document(
            &ctx.job.source_path,
            classification.category(),
            classification.suggested_filename(),
        )?;
        ctx.decision = Some(decision);
        Ok(())
    }
}
