use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::PatternCatalog;
use crate::document::Category;
use crate::extract::FieldExtractor;

use super::filename::build_filename;
use super::{Classification, ClassifiedDocument, Classifier};

/// Keyword-driven classifier backed by a [`PatternCatalog`].
///
/// Category lists are checked in catalog priority order; the first list with
/// any keyword present decides. This is a coarse heuristic, not a score.
pub struct RuleClassifier {
    catalog: Arc<PatternCatalog>,
}

impl RuleClassifier {
    pub fn new(catalog: Arc<PatternCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Category from keyword containment alone. Expects lowercased text.
    pub fn categorize(&self, text: &str) -> Category {
        self.catalog
            .category_keywords()
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }
}

impl Default for RuleClassifier {
    fn default() -> Self {
        Self::new(Arc::new(PatternCatalog::standard()))
    }
}

impl Classifier for RuleClassifier {
    fn classify(&self, text: &str) -> Classification {
        let text = text.to_lowercase();

        let category = self.categorize(&text);
        let fields = FieldExtractor::new(&self.catalog).extract(&text);

        match build_filename(&fields, category) {
            Ok(suggested_filename) => {
                debug!(
                    "Classified as {} (sender: {}, type: {})",
                    category, fields.sender, fields.document_type
                );
                Classification::Confident(ClassifiedDocument {
                    category,
                    suggested_filename,
                    fields: Some(fields),
                })
            }
            Err(e) => {
                warn!("Classification degraded to placeholder: {}", e);
                Classification::Degraded {
                    document: ClassifiedDocument::placeholder(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
