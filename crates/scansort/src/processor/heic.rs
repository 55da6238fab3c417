use std::path::Path;
use std::process::Command;

use crate::error::ProcessError;
use crate::processor::ocr::OcrProcessor;
use crate::processor::{DocumentFormat, DocumentProcessor};

/// HEIC photos (as produced by phone cameras). Converted to PNG with
/// libheif's `heif-convert`, then read through OCR.
pub struct HeicProcessor {
    ocr: Option<OcrProcessor>,
}

impl HeicProcessor {
    pub fn new(ocr: OcrProcessor) -> Self {
        Self { ocr: Some(ocr) }
    }

    pub fn new_without_ocr() -> Self {
        Self { ocr: None }
    }
}

impl DocumentProcessor for HeicProcessor {
    fn process(&self, path: &Path) -> Result<String, ProcessError> {
        let _span = tracing::info_span!("processor.heic").entered();

        let ocr = self.ocr.as_ref().ok_or_else(|| {
            ProcessError::OcrFailed("OCR is disabled, images carry no text".to_string())
        })?;

        if !path.is_file() {
            return Err(ProcessError::ReadDocument {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            });
        }

        let png_data = convert_to_png(path)?;
        ocr.recognize(&png_data)
    }

    fn supports(&self, format: DocumentFormat) -> bool {
        matches!(format, DocumentFormat::Heic)
    }
}

fn convert_to_png(path: &Path) -> Result<Vec<u8>, ProcessError> {
    let png_path =
        std::env::temp_dir().join(format!("scansort_heic_{}.png", uuid::Uuid::new_v4()));

    let output = Command::new("heif-convert")
        .arg(path)
        .arg(&png_path)
        .output()
        .map_err(|e| {
            ProcessError::ImageProcessing(format!(
                "Failed to run heif-convert: {}. Make sure libheif is installed.",
                e
            ))
        })?;

    if !output.status.success() {
        let _ = std::fs::remove_file(&png_path);
        return Err(ProcessError::ImageProcessing(format!(
            "heif-convert failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )));
    }

    let data = std::fs::read(&png_path).map_err(|e| {
        ProcessError::ImageProcessing(format!("Failed to read converted image: {}", e))
    });
    let _ = std::fs::remove_file(&png_path);
    data
}
