use chrono::{Local, NaiveDate};

use crate::catalog::PatternCatalog;
use crate::document::{DocumentType, ExtractedFields};

/// Label reported when no sender pattern matches.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// Output format of every detected date.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Pulls sender, date, amount and document type out of lowercased text.
///
/// Every detector is total: it never fails and falls back to a fixed value
/// when nothing matches. Detectors do not depend on one another.
pub struct FieldExtractor<'a> {
    catalog: &'a PatternCatalog,
}

impl<'a> FieldExtractor<'a> {
    pub fn new(catalog: &'a PatternCatalog) -> Self {
        Self { catalog }
    }

    pub fn extract(&self, text: &str) -> ExtractedFields {
        ExtractedFields {
            sender: self.detect_sender(text),
            date: self.detect_date(text),
            amount: self.detect_amount(text),
            document_type: self.detect_document_type(text),
        }
    }

    /// Returns the label of the first sender (in catalog order) whose pattern
    /// occurs anywhere in `text`.
    pub fn detect_sender(&self, text: &str) -> String {
        self.catalog
            .senders()
            .iter()
            .find(|rule| rule.pattern.is_match(text))
            .map(|rule| rule.label.clone())
            .unwrap_or_else(|| UNKNOWN_SENDER.to_string())
    }

    /// Returns the first date found in `text` as `DD.MM.YYYY`, or today's date.
    pub fn detect_date(&self, text: &str) -> String {
        self.detect_date_on(text, Local::now().date_naive())
    }

    /// Like [`detect_date`](Self::detect_date) with an explicit fallback day.
    pub fn detect_date_on(&self, text: &str, today: NaiveDate) -> String {
        let matched = self
            .catalog
            .date_patterns()
            .iter()
            .find_map(|pattern| pattern.find(text));

        let date = matched
            .and_then(|m| self.normalize_date(m.as_str()))
            .unwrap_or(today);

        date.format(DATE_FORMAT).to_string()
    }

    fn normalize_date(&self, raw: &str) -> Option<NaiveDate> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        self.catalog
            .date_formats()
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(&compact, format).ok())
    }

    /// Returns the numeric part of the first monetary expression, exactly as
    /// written (decimal separator preserved).
    pub fn detect_amount(&self, text: &str) -> Option<String> {
        self.catalog
            .amount_patterns()
            .iter()
            .find_map(|pattern| pattern.captures(text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn detect_document_type(&self, text: &str) -> DocumentType {
        self.catalog
            .document_types()
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| p.is_match(text)))
            .map(|(doc_type, _)| *doc_type)
            .unwrap_or(DocumentType::Other)
    }
}
