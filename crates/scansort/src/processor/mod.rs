pub mod heic;
pub mod image;
pub mod ocr;
pub mod pdf;
pub mod text;

use std::path::Path;

use crate::error::ProcessError;

/// Turns a document file into plain text.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, path: &Path) -> Result<String, ProcessError>;
}

/// File formats text can be extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Image,
    Heic,
    Text,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "jpg" | "jpeg" | "png" => Some(Self::Image),
            "heic" => Some(Self::Heic),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

pub trait DocumentProcessor: Send + Sync {
    fn process(&self, path: &Path) -> Result<String, ProcessError>;
    fn supports(&self, format: DocumentFormat) -> bool;
}

/// Dispatches a file to the processor for its format.
pub struct ProcessorRegistry {
    processors: Vec<Box<dyn DocumentProcessor>>,
}

impl ProcessorRegistry {
    pub fn new(ocr_enabled: bool, ocr_languages: &[String], ocr_dpi: u32) -> Self {
        let mut processors: Vec<Box<dyn DocumentProcessor>> =
            vec![Box::new(text::TextProcessor::new())];

        if ocr_enabled {
            let ocr = ocr::OcrProcessor::new(ocr_languages, ocr_dpi);
            processors.push(Box::new(image::ImageProcessor::new(ocr.clone())));
            processors.push(Box::new(heic::HeicProcessor::new(ocr.clone())));
            processors.push(Box::new(pdf::PdfProcessor::new(Some(ocr))));
        } else {
            processors.push(Box::new(image::ImageProcessor::new_without_ocr()));
            processors.push(Box::new(heic::HeicProcessor::new_without_ocr()));
            processors.push(Box::new(pdf::PdfProcessor::new(None)));
        }

        Self { processors }
    }
}

impl TextExtractor for ProcessorRegistry {
    fn extract_text(&self, path: &Path) -> Result<String, ProcessError> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let format = DocumentFormat::from_extension(extension)
            .ok_or_else(|| ProcessError::UnsupportedFormat(extension.to_string()))?;

        self.processors
            .iter()
            .find(|p| p.supports(format))
            .ok_or_else(|| ProcessError::UnsupportedFormat(extension.to_string()))?
            .process(path)
    }
}
