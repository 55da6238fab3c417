use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::ProcessError;
use crate::processor::ocr::OcrProcessor;
use crate::processor::{DocumentFormat, DocumentProcessor};

/// Embedded PDF text via lopdf, with an OCR pass over rendered pages when the
/// embedded text is missing or garbled.
pub struct PdfProcessor {
    ocr: Option<OcrProcessor>,
}

impl PdfProcessor {
    pub fn new(ocr: Option<OcrProcessor>) -> Self {
        Self { ocr }
    }
}

impl DocumentProcessor for PdfProcessor {
    fn process(&self, path: &Path) -> Result<String, ProcessError> {
        let _span = tracing::info_span!("processor.pdf").entered();

        let pdf_bytes = std::fs::read(path).map_err(|e| ProcessError::ReadDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

        match lopdf::Document::load_mem(&pdf_bytes) {
            Ok(doc) => {
                let text = embedded_text(&doc);
                match &self.ocr {
                    Some(ocr) if should_use_ocr(&text) => {
                        let _ocr_span =
                            tracing::info_span!("processor.ocr_fallback", reason = "text_quality")
                                .entered();
                        ocr_pages(&pdf_bytes, doc.get_pages().len(), ocr)
                    }
                    _ => Ok(text),
                }
            }
            Err(e) => {
                // Poppler copes with PDFs lopdf rejects (broken xref tables etc).
                tracing::warn!(
                    "lopdf failed to parse {}: {}. Falling back to OCR.",
                    crate::sanitize::redact_path(path),
                    e
                );
                let ocr = self.ocr.as_ref().ok_or_else(|| {
                    ProcessError::PdfProcessing(format!(
                        "Failed to load PDF: {}. OCR fallback unavailable.",
                        e
                    ))
                })?;
                let _ocr_span =
                    tracing::info_span!("processor.ocr_fallback", reason = "lopdf_parse_failed")
                        .entered();
                let page_count = count_pdf_pages(&pdf_bytes)?;
                ocr_pages(&pdf_bytes, page_count, ocr)
            }
        }
    }

    fn supports(&self, format: DocumentFormat) -> bool {
        matches!(format, DocumentFormat::Pdf)
    }
}

/// Page texts in page order, joined with newlines. Pages whose text cannot
/// be decoded contribute an empty string.
fn embedded_text(doc: &lopdf::Document) -> String {
    doc.get_pages()
        .keys()
        .map(|page_num| doc.extract_text(&[*page_num]).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
}

fn ocr_pages(
    pdf_bytes: &[u8],
    page_count: usize,
    ocr: &OcrProcessor,
) -> Result<String, ProcessError> {
    let pdf_file = TempPdf::write(pdf_bytes)?;

    let mut pages = Vec::with_capacity(page_count);
    for page_num in 1..=page_count as u32 {
        let page_text = render_page(pdf_file.path(), page_num, ocr.dpi())
            .and_then(|png| ocr.recognize(&png));
        match page_text {
            Ok(text) => pages.push(text),
            Err(e) => {
                tracing::warn!("OCR of page {} failed: {}", page_num, e);
                pages.push(String::new());
            }
        }
    }

    Ok(pages.join("\n"))
}

/// Pattern for Identity-H Unimplemented errors (common with CID fonts).
const IDENTITY_H_PATTERN: &str = "?Identity-H Unimplemented?";

/// Below this length, text is accepted regardless of its composition.
const MIN_TOTAL_CHARS: usize = 50;

/// Minimum share of alphanumeric characters for embedded text to count as real.
const MIN_ALPHANUMERIC_PERCENT: usize = 10;

/// True when embedded text is empty, only font-encoding error markers, or
/// mostly non-alphanumeric noise.
fn should_use_ocr(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }

    let cleaned = trimmed
        .replace(IDENTITY_H_PATTERN, "")
        .replace(['\n', ' '], "");
    if cleaned.is_empty() {
        return true;
    }

    let total_chars = trimmed.chars().count();
    let alphanumeric_chars = trimmed.chars().filter(|c| c.is_alphanumeric()).count();

    total_chars > MIN_TOTAL_CHARS
        && alphanumeric_chars * 100 < total_chars * MIN_ALPHANUMERIC_PERCENT
}

/// A copy of the PDF on disk for the poppler tools, removed on drop.
struct TempPdf(PathBuf);

impl TempPdf {
    fn write(pdf_bytes: &[u8]) -> Result<Self, ProcessError> {
        let path = std::env::temp_dir().join(format!("scansort_{}.pdf", uuid::Uuid::new_v4()));
        std::fs::write(&path, pdf_bytes)
            .map_err(|e| ProcessError::PdfProcessing(format!("Failed to write temp PDF: {}", e)))?;
        Ok(Self(path))
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempPdf {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

/// Page count through `pdfinfo`, for PDFs lopdf cannot open.
fn count_pdf_pages(pdf_bytes: &[u8]) -> Result<usize, ProcessError> {
    let pdf_file = TempPdf::write(pdf_bytes)?;

    let output = Command::new("pdfinfo")
        .arg(pdf_file.path())
        .output()
        .map_err(|e| {
            ProcessError::PdfProcessing(format!(
                "Failed to run pdfinfo: {}. Make sure poppler-utils is installed.",
                e
            ))
        })?;

    if !output.status.success() {
        return Err(ProcessError::PdfProcessing(format!(
            "pdfinfo failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )));
    }

    Ok(parse_page_count(&String::from_utf8_lossy(&output.stdout)).unwrap_or(1))
}

fn parse_page_count(pdfinfo_output: &str) -> Option<usize> {
    pdfinfo_output
        .lines()
        .find_map(|line| line.strip_prefix("Pages:"))
        .and_then(|count| count.trim().parse().ok())
}

/// Renders one page to PNG with `pdftoppm`.
fn render_page(pdf_path: &Path, page_num: u32, dpi: u32) -> Result<Vec<u8>, ProcessError> {
    let output_prefix =
        std::env::temp_dir().join(format!("scansort_page_{}", uuid::Uuid::new_v4()));
    let page = page_num.to_string();

    let output = Command::new("pdftoppm")
        .args(["-png", "-r", &dpi.to_string(), "-f", &page, "-l", &page])
        .arg(pdf_path)
        .arg(&output_prefix)
        .output()
        .map_err(|e| {
            ProcessError::PdfProcessing(format!(
                "Failed to run pdftoppm: {}. Make sure poppler-utils is installed.",
                e
            ))
        })?;

    if !output.status.success() {
        return Err(ProcessError::PdfProcessing(format!(
            "pdftoppm failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )));
    }

    // pdftoppm zero-pads the page number depending on the page count.
    let prefix = output_prefix.display().to_string();
    let image_path = [
        format!("{}-{}.png", prefix, page_num),
        format!("{}-{:02}.png", prefix, page_num),
        format!("{}-{:03}.png", prefix, page_num),
    ]
    .into_iter()
    .map(PathBuf::from)
    .find(|p| p.exists())
    .ok_or_else(|| ProcessError::PdfProcessing("Failed to find rendered page image".to_string()))?;

    let image_data = std::fs::read(&image_path).map_err(|e| {
        ProcessError::PdfProcessing(format!("Failed to read rendered image: {}", e))
    });
    let _ = std::fs::remove_file(&image_path);
    image_data
}
