use thiserror::Error;

use crate::document::{Category, DocumentType, ExtractedFields};
use crate::extract::UNKNOWN_SENDER;

/// Name used when a descriptive filename cannot be produced.
pub const PLACEHOLDER_FILENAME: &str = "Unbenannt";

pub const SEPARATOR: &str = " - ";

/// Upper bound for a suggested name, leaving room for the collision suffix
/// and extension within the usual 255-byte filename limit.
pub const MAX_FILENAME_BYTES: usize = 200;

/// Characters reserved by common filesystems.
const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilenameError {
    #[error("assembled filename is empty")]
    Empty,

    #[error("assembled filename is {len} bytes, limit is {max}", max = MAX_FILENAME_BYTES)]
    TooLong { len: usize },

    #[error("assembled filename contains forbidden character {0:?}")]
    ForbiddenCharacter(char),
}

/// Removes filesystem-reserved characters from a sender label.
pub fn sanitize_sender(sender: &str) -> String {
    sender
        .chars()
        .filter(|c| !RESERVED_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Joins `date - sender [- amountEUR] [- type] - category`.
///
/// The amount is left out when absent and the document type when it is
/// `Other`; omitted components leave no empty slot behind.
pub fn build_filename(fields: &ExtractedFields, category: Category) -> Result<String, FilenameError> {
    let mut sender = sanitize_sender(&fields.sender);
    if sender.is_empty() {
        sender = UNKNOWN_SENDER.to_string();
    }

    let mut parts = vec![fields.date.clone(), sender];
    if let Some(amount) = &fields.amount {
        parts.push(format!("{}EUR", amount));
    }
    if fields.document_type != DocumentType::Other {
        parts.push(fields.document_type.label().to_string());
    }
    parts.push(category.label().to_string());

    let filename = parts.join(SEPARATOR).trim().to_string();
    validate(&filename)?;
    Ok(filename)
}

fn validate(filename: &str) -> Result<(), FilenameError> {
    if filename.is_empty() {
        return Err(FilenameError::Empty);
    }
    if filename.len() > MAX_FILENAME_BYTES {
        return Err(FilenameError::TooLong {
            len: filename.len(),
        });
    }
    if let Some(c) = filename
        .chars()
        .find(|c| c.is_control() || RESERVED_CHARS.contains(c))
    {
        return Err(FilenameError::ForbiddenCharacter(c));
    }
    Ok(())
}
