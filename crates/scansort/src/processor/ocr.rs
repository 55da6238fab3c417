use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use crate::error::ProcessError;

/// Tesseract language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "deu";

/// Shared Tesseract settings. Cloning is cheap; a fresh engine is created
/// per image since `LepTess` is not `Sync`.
#[derive(Clone)]
pub struct OcrProcessor {
    inner: Arc<OcrSettings>,
}

struct OcrSettings {
    languages: String,
    dpi: u32,
}

impl OcrProcessor {
    pub fn new(languages: &[String], dpi: u32) -> Self {
        let languages = if languages.is_empty() {
            DEFAULT_LANGUAGE.to_string()
        } else {
            languages.join("+")
        };

        Self {
            inner: Arc::new(OcrSettings { languages, dpi }),
        }
    }

    pub fn languages(&self) -> &str {
        &self.inner.languages
    }

    pub fn dpi(&self) -> u32 {
        self.inner.dpi
    }

    pub fn recognize_file(&self, image_path: &Path) -> Result<String, ProcessError> {
        let data = std::fs::read(image_path).map_err(|e| ProcessError::ReadDocument {
            path: image_path.to_path_buf(),
            source: e,
        })?;
        self.recognize(&data)
    }

    pub fn recognize(&self, image_data: &[u8]) -> Result<String, ProcessError> {
        let _span = tracing::info_span!("processor.ocr", languages = %self.inner.languages)
            .entered();

        let img = image::load_from_memory(image_data)
            .map_err(|e| ProcessError::OcrFailed(format!("Failed to load image: {}", e)))?;

        // leptess wants an encoded image; normalise everything to PNG.
        let mut png_data = Vec::new();
        img.write_to(&mut Cursor::new(&mut png_data), image::ImageFormat::Png)
            .map_err(|e| ProcessError::OcrFailed(format!("Failed to convert image: {}", e)))?;

        let mut lt = leptess::LepTess::new(None, &self.inner.languages).map_err(|e| {
            ProcessError::OcrFailed(format!("Failed to initialize Tesseract: {}", e))
        })?;

        lt.set_image_from_mem(&png_data)
            .map_err(|e| ProcessError::OcrFailed(format!("Failed to set image for OCR: {}", e)))?;
        lt.set_source_resolution(self.inner.dpi as i32);

        lt.get_utf8_text()
            .map_err(|e| ProcessError::OcrFailed(format!("Text recognition failed: {}", e)))
    }
}
