//! Classify command: a dry run over a text file.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;

use scansort::{Classifier, RuleClassifier};

use super::Settings;

#[derive(Args)]
pub struct ClassifyArgs {
    /// UTF-8 text file, e.g. exported OCR output
    text_file: PathBuf,
}

pub fn run(args: ClassifyArgs, settings: &Settings) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.text_file)
        .with_context(|| format!("Failed to read {}", args.text_file.display()))?;

    let classifier = RuleClassifier::new(Arc::new(settings.catalog()?));
    let classification = classifier.classify(&text);
    let document = classification.document();

    println!("Category:  {}", document.category);
    if let Some(fields) = &document.fields {
        println!("Sender:    {}", fields.sender);
        println!("Date:      {}", fields.date);
        println!("Amount:    {}", fields.amount.as_deref().unwrap_or("-"));
        println!("Type:      {}", fields.document_type);
    }
    println!("Filename:  {}", document.suggested_filename);
    if let Some(reason) = classification.degradation_reason() {
        println!("Degraded:  {}", reason);
    }
    Ok(())
}
