use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: &str = "1.0";

/// Directory scans are picked up from, below the user's documents folder.
pub const DEFAULT_INPUT_DIR: &str = "Scan";

/// Directory the category folders live in, below the user's documents folder.
pub const DEFAULT_OUTPUT_DIR: &str = "Sortierte_Dokumente";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    #[serde(default = "default_input_directory")]
    pub input_directory: PathBuf,
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,
    #[serde(default)]
    pub ocr: OcrConfig,
    /// Extra senders, tested before the built-in vocabulary.
    #[serde(default)]
    pub senders: Vec<SenderConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            input_directory: default_input_directory(),
            output_directory: default_output_directory(),
            ocr: OcrConfig::default(),
            senders: Vec::new(),
        }
    }
}

fn documents_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_input_directory() -> PathBuf {
    documents_dir().join(DEFAULT_INPUT_DIR)
}

fn default_output_directory() -> PathBuf {
    documents_dir().join(DEFAULT_OUTPUT_DIR)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
}

fn default_true() -> bool {
    true
}

fn default_languages() -> Vec<String> {
    vec!["deu".to_string()]
}

fn default_dpi() -> u32 {
    300
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            languages: default_languages(),
            dpi: default_dpi(),
        }
    }
}

/// A user-defined sender: `pattern` is a case-insensitive regex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderConfig {
    pub label: String,
    pub pattern: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_share_documents_dir() {
        let config = Config::default();
        assert!(config.input_directory.ends_with(DEFAULT_INPUT_DIR));
        assert!(config.output_directory.ends_with(DEFAULT_OUTPUT_DIR));
        assert_eq!(
            config.input_directory.parent(),
            config.output_directory.parent()
        );
    }

    #[test]
    fn test_ocr_defaults() {
        let ocr = OcrConfig::default();
        assert!(ocr.enabled);
        assert_eq!(ocr.languages, vec!["deu"]);
        assert_eq!(ocr.dpi, 300);
    }

    #[test]
    fn test_partial_ocr_section_uses_field_defaults() {
        let ocr: OcrConfig = serde_json::from_str(r#"{"dpi": 150}"#).unwrap();
        assert!(ocr.enabled);
        assert_eq!(ocr.languages, vec!["deu"]);
        assert_eq!(ocr.dpi, 150);
    }
}
