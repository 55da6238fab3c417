//! Isolated input/output directories and a pipeline wired to them.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use scansort::config::{Config, SenderConfig};
use scansort::{FilingEngine, Pipeline, PipelineConfig};

pub struct TestHarness {
    temp_dir: TempDir,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let input_dir = temp_dir.path().join("Scan");
        let output_dir = temp_dir.path().join("Sortierte_Dokumente");
        std::fs::create_dir_all(&input_dir).expect("Failed to create input dir");

        Self {
            temp_dir,
            input_dir,
            output_dir,
        }
    }

    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_input(&self, filename: &str, content: &[u8]) -> PathBuf {
        let path = self.input_dir.join(filename);
        std::fs::write(&path, content).expect("Failed to write input file");
        path
    }

    pub fn write_text_input(&self, filename: &str, content: &str) -> PathBuf {
        self.write_input(filename, content.as_bytes())
    }

    /// Config pointing at the harness directories, OCR off so only `.txt`
    /// inputs are readable.
    pub fn config(&self) -> Config {
        let mut config = Config {
            input_directory: self.input_dir.clone(),
            output_directory: self.output_dir.clone(),
            ..Config::default()
        };
        config.ocr.enabled = false;
        config
    }

    pub fn config_with_senders(&self, senders: &[(&str, &str)]) -> Config {
        let mut config = self.config();
        config.senders = senders
            .iter()
            .map(|(label, pattern)| SenderConfig {
                label: label.to_string(),
                pattern: pattern.to_string(),
            })
            .collect();
        config
    }

    pub fn write_config(&self, config: &Config) -> PathBuf {
        let path = self.temp_dir.path().join("config.json");
        let json = serde_json::to_string_pretty(config).expect("Failed to serialize config");
        std::fs::write(&path, json).expect("Failed to write config file");
        path
    }

    pub fn pipeline(&self) -> Pipeline {
        self.pipeline_from(&self.config())
    }

    pub fn pipeline_from(&self, config: &Config) -> Pipeline {
        Pipeline::from_config(Arc::new(PipelineConfig::from_config(config)))
            .expect("Failed to build pipeline")
    }

    pub fn filing(&self) -> FilingEngine {
        FilingEngine::new(&self.output_dir)
    }

    /// File names inside one category directory, sorted.
    pub fn filed_names(&self, category: &str) -> Vec<String> {
        let dir = self.output_dir.join(category);
        let Ok(entries) = std::fs::read_dir(&dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
