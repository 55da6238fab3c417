use std::path::Path;

use crate::error::ProcessError;
use crate::processor::ocr::OcrProcessor;
use crate::processor::{DocumentFormat, DocumentProcessor};

/// JPEG and PNG scans, read through OCR.
pub struct ImageProcessor {
    ocr: Option<OcrProcessor>,
}

impl ImageProcessor {
    pub fn new(ocr: OcrProcessor) -> Self {
        Self { ocr: Some(ocr) }
    }

    pub fn new_without_ocr() -> Self {
        Self { ocr: None }
    }
}

impl DocumentProcessor for ImageProcessor {
    fn process(&self, path: &Path) -> Result<String, ProcessError> {
        let _span = tracing::info_span!("processor.image").entered();

        let ocr = self.ocr.as_ref().ok_or_else(|| {
            ProcessError::OcrFailed("OCR is disabled, images carry no text".to_string())
        })?;

        ocr.recognize_file(path)
    }

    fn supports(&self, format: DocumentFormat) -> bool {
        matches!(format, DocumentFormat::Image)
    }
}
