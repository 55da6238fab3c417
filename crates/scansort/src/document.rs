use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level filing bucket. The set is closed; unmatched documents land in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Invoices,
    Contracts,
    Certificates,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Invoices,
        Category::Contracts,
        Category::Certificates,
        Category::Other,
    ];

    /// Label used both in filenames and as the category's directory name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Invoices => "Invoices",
            Self::Contracts => "Contracts",
            Self::Certificates => "Certificates",
            Self::Other => "Other",
        }
    }

    /// Parses an English label (any case) or one of the German folder names.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "invoices" | "rechnungen" => Some(Self::Invoices),
            "contracts" | "verträge" => Some(Self::Contracts),
            "certificates" | "bescheinigungen" => Some(Self::Certificates),
            "other" | "sonstiges" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Finer-grained label that only feeds the filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    Invoice,
    Reminder,
    Contract,
    Certificate,
    Other,
}

impl DocumentType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Invoice => "Invoice",
            Self::Reminder => "Reminder",
            Self::Contract => "Contract",
            Self::Certificate => "Certificate",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metadata pulled out of a document's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    /// Label from the sender vocabulary, or `Unknown`.
    pub sender: String,
    /// Always `DD.MM.YYYY`.
    pub date: String,
    /// Numeric part as written in the document, e.g. `54,00`.
    pub amount: Option<String>,
    pub document_type: DocumentType,
}
