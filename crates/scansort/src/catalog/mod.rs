//! Ordered pattern tables consulted by the field extractor and the classifier.
//!
//! The catalog is built once and shared by reference; nothing mutates it
//! after construction.

pub mod senders;

use regex::{Regex, RegexBuilder};

use crate::document::{Category, DocumentType};
use crate::error::ConfigError;

use senders::BUILTIN_SENDERS;

/// Category keyword lists in priority order. Matching is plain substring
/// containment on lowercased text.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Invoices,
        &["rechnung", "betrag", "zahlung", "euro", "€", "summe", "preis"],
    ),
    (
        Category::Contracts,
        &["vertrag", "vereinbarung", "bedingungen", "laufzeit", "kündigung"],
    ),
    (
        Category::Certificates,
        &["bescheinigung", "bestätigung", "nachweis", "zertifikat"],
    ),
];

/// Date-shaped patterns, tried in order.
const DATE_PATTERNS: &[&str] = &[
    r"\b\d{2}\.\d{2}\.\d{4}\b",          // DD.MM.YYYY
    r"\b\d{2}/\d{2}/\d{4}\b",            // DD/MM/YYYY
    r"\b\d{2}-\d{2}-\d{4}\b",            // DD-MM-YYYY
    r"\b\d{1,2}\.\s*\d{1,2}\.\s*\d{4}\b", // D.M.YYYY, spaces allowed
    r"\b\d{1,2}\.\d{1,2}\.\d{2}\b",      // D.M.YY
    r"\b\d{4}-\d{2}-\d{2}\b",            // YYYY-MM-DD
];

/// Formats a matched date may be written in. `%y` precedes `%Y` because
/// chrono's `%Y` also accepts two digits and would read `23` as year 23.
const DATE_FORMATS: &[&str] = &["%d.%m.%y", "%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"];

const AMOUNT_NUMBER: &str = r"(\d+(?:[.,]\d{3})*[.,]\d{2})";

const DOCUMENT_TYPE_PATTERNS: &[(DocumentType, &[&str])] = &[
    (
        DocumentType::Reminder,
        &[r"mahnung", r"zahlungserinnerung", r"payment\s+reminder"],
    ),
    (DocumentType::Invoice, &[r"rechnung", r"invoice"]),
    (DocumentType::Contract, &[r"vertrag", r"vereinbarung", r"contract"]),
    (
        DocumentType::Certificate,
        &[r"bescheinigung", r"zertifikat", r"bestätigung", r"certificate"],
    ),
];

/// A sender label and the pattern that identifies it.
#[derive(Debug, Clone)]
pub struct SenderRule {
    pub label: String,
    pub pattern: Regex,
}

#[derive(Debug, Clone)]
pub struct PatternCatalog {
    senders: Vec<SenderRule>,
    date_patterns: Vec<Regex>,
    amount_patterns: Vec<Regex>,
    document_types: Vec<(DocumentType, Vec<Regex>)>,
}

impl PatternCatalog {
    /// Catalog with the built-in vocabulary only.
    pub fn standard() -> Self {
        Self::with_extra_senders(std::iter::empty::<(&str, &str)>())
            .expect("built-in catalog patterns are valid")
    }

    /// Catalog whose sender table starts with `extra` (in the given order),
    /// followed by the built-in vocabulary.
    pub fn with_extra_senders<'a, I>(extra: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut senders = Vec::new();
        for (label, pattern) in extra.into_iter().chain(BUILTIN_SENDERS.iter().copied()) {
            senders.push(SenderRule {
                label: label.to_string(),
                pattern: compile_sender(label, pattern)?,
            });
        }

        let date_patterns = DATE_PATTERNS
            .iter()
            .map(|p| compile("date", p))
            .collect::<Result<Vec<_>, _>>()?;

        let amount_patterns = [
            format!(r"{}\s*(?:€|eur\b)", AMOUNT_NUMBER),
            format!(r"(?:€|\beur\b)\s*{}(?:\D|$)", AMOUNT_NUMBER),
            format!(r"{}\s*euro\b", AMOUNT_NUMBER),
            format!(r"\beuro\s*{}(?:\D|$)", AMOUNT_NUMBER),
        ]
        .iter()
        .map(|p| compile("amount", p))
        .collect::<Result<Vec<_>, _>>()?;

        let mut document_types = Vec::with_capacity(DOCUMENT_TYPE_PATTERNS.len());
        for (doc_type, patterns) in DOCUMENT_TYPE_PATTERNS {
            let compiled = patterns
                .iter()
                .map(|p| compile(doc_type.label(), p))
                .collect::<Result<Vec<_>, _>>()?;
            document_types.push((*doc_type, compiled));
        }

        Ok(Self {
            senders,
            date_patterns,
            amount_patterns,
            document_types,
        })
    }

    pub fn senders(&self) -> &[SenderRule] {
        &self.senders
    }

    pub fn category_keywords(&self) -> &'static [(Category, &'static [&'static str])] {
        CATEGORY_KEYWORDS
    }

    pub fn date_patterns(&self) -> &[Regex] {
        &self.date_patterns
    }

    pub fn date_formats(&self) -> &'static [&'static str] {
        DATE_FORMATS
    }

    pub fn amount_patterns(&self) -> &[Regex] {
        &self.amount_patterns
    }

    pub fn document_types(&self) -> &[(DocumentType, Vec<Regex>)] {
        &self.document_types
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Sender patterns ignore case so configured patterns written with capitals
/// still match the lowercased text.
fn compile_sender(label: &str, pattern: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ConfigError::InvalidPattern {
            name: label.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_compiles() {
        let catalog = PatternCatalog::standard();
        assert_eq!(catalog.senders().len(), BUILTIN_SENDERS.len());
        assert_eq!(catalog.date_patterns().len(), DATE_PATTERNS.len());
        assert_eq!(catalog.amount_patterns().len(), 4);
        assert_eq!(catalog.document_types().len(), 4);
    }

    #[test]
    fn test_sender_order_follows_declaration() {
        let catalog = PatternCatalog::standard();
        let labels: Vec<&str> = catalog.senders().iter().map(|s| s.label.as_str()).collect();
        let expected: Vec<&str> = BUILTIN_SENDERS.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_extra_senders_come_first() {
        let catalog =
            PatternCatalog::with_extra_senders([("Hausverwaltung Meier", r"hausverwaltung\s+meier")])
                .unwrap();
        assert_eq!(catalog.senders()[0].label, "Hausverwaltung Meier");
        assert_eq!(catalog.senders()[1].label, "Telekom");
        assert_eq!(catalog.senders().len(), BUILTIN_SENDERS.len() + 1);
    }

    #[test]
    fn test_extra_sender_pattern_ignores_case() {
        let catalog = PatternCatalog::with_extra_senders([("Meier", r"Meier GmbH")]).unwrap();
        assert!(catalog.senders()[0].pattern.is_match("hausverwaltung meier gmbh"));
    }

    #[test]
    fn test_invalid_extra_sender_pattern() {
        let result = PatternCatalog::with_extra_senders([("Broken", r"(unclosed")]);
        match result {
            Err(ConfigError::InvalidPattern { name, .. }) => assert_eq!(name, "Broken"),
            other => panic!("Expected InvalidPattern error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_category_priority_order() {
        let catalog = PatternCatalog::standard();
        let order: Vec<Category> = catalog
            .category_keywords()
            .iter()
            .map(|(c, _)| *c)
            .collect();
        assert_eq!(
            order,
            vec![Category::Invoices, Category::Contracts, Category::Certificates]
        );
    }

    #[test]
    fn test_short_abbreviations_are_word_bounded() {
        let catalog = PatternCatalog::standard();
        let ing = catalog
            .senders()
            .iter()
            .find(|s| s.label == "ING")
            .unwrap();
        assert!(ing.pattern.is_match("ihre ing kontoauszüge"));
        assert!(!ing.pattern.is_match("zahlungseingang"));
    }
}
