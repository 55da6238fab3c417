use std::path::PathBuf;

use crate::config::{Config, SenderConfig};

/// The settings a pipeline is built from.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_directory: PathBuf,
    pub output_directory: PathBuf,
    pub ocr_enabled: bool,
    pub ocr_languages: Vec<String>,
    pub ocr_dpi: u32,
    pub senders: Vec<SenderConfig>,
}

impl PipelineConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            input_directory: config.input_directory.clone(),
            output_directory: config.output_directory.clone(),
            ocr_enabled: config.ocr.enabled,
            ocr_languages: config.ocr.languages.clone(),
            ocr_dpi: config.ocr.dpi,
            senders: config.senders.clone(),
        }
    }
}
