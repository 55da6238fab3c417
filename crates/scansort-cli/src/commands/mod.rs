pub mod classify;
pub mod process;
pub mod refile;
pub mod watch;

use std::sync::Arc;

use anyhow::Context;
use tracing::debug;

use scansort::catalog::PatternCatalog;
use scansort::{load_config, Config, Pipeline, PipelineConfig};

use crate::Cli;

/// Configuration after applying command line overrides.
pub struct Settings {
    pub config: Config,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(input) = &cli.input {
            config.input_directory = input.clone();
        }
        if let Some(output) = &cli.output {
            config.output_directory = output.clone();
        }

        debug!(
            "Input: {}, output: {}",
            config.input_directory.display(),
            config.output_directory.display()
        );
        Ok(Self { config })
    }

    pub fn pipeline(&self) -> anyhow::Result<Pipeline> {
        let pipeline_config = Arc::new(PipelineConfig::from_config(&self.config));
        Ok(Pipeline::from_config(pipeline_config)?)
    }

    pub fn catalog(&self) -> anyhow::Result<PatternCatalog> {
        let catalog = PatternCatalog::with_extra_senders(
            self.config
                .senders
                .iter()
                .map(|s| (s.label.as_str(), s.pattern.as_str())),
        )?;
        Ok(catalog)
    }
}
