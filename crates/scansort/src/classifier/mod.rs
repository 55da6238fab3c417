pub mod filename;
pub mod rules;

use crate::document::{Category, ExtractedFields};

pub use filename::{build_filename, sanitize_sender, FilenameError, PLACEHOLDER_FILENAME};
pub use rules::RuleClassifier;

/// Decides a document's category and suggested filename from its text.
///
/// Implementations are total: they never fail, they degrade.
pub trait Classifier: Send + Sync {
    fn classify(&self, text: &str) -> Classification;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedDocument {
    pub category: Category,
    pub suggested_filename: String,
    /// `None` when classification degraded before fields were available.
    pub fields: Option<ExtractedFields>,
}

impl ClassifiedDocument {
    /// The fixed fallback: `Other` with the placeholder name.
    pub fn placeholder() -> Self {
        Self {
            category: Category::Other,
            suggested_filename: PLACEHOLDER_FILENAME.to_string(),
            fields: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Confident(ClassifiedDocument),
    Degraded {
        document: ClassifiedDocument,
        reason: String,
    },
}

impl Classification {
    pub fn document(&self) -> &ClassifiedDocument {
        match self {
            Self::Confident(document) => document,
            Self::Degraded { document, .. } => document,
        }
    }

    pub fn into_document(self) -> ClassifiedDocument {
        match self {
            Self::Confident(document) => document,
            Self::Degraded { document, .. } => document,
        }
    }

    pub fn category(&self) -> Category {
        self.document().category
    }

    pub fn suggested_filename(&self) -> &str {
        &self.document().suggested_filename
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub fn degradation_reason(&self) -> Option<&str> {
        match self {
            Self::Confident(_) => None,
            Self::Degraded { reason, .. } => Some(reason),
        }
    }
}
