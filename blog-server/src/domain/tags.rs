//! Storage encoding for post tags.
//!
//! Tags are persisted in a single TEXT column as a JSON array of strings.
//! A NULL or empty column reads back as no tags.

use crate::domain::error::DomainError;

pub fn encode(tags: &[String]) -> Result<String, DomainError> {
    serde_json::to_string(tags)
        .map_err(|e| DomainError::Internal(format!("failed to encode tags: {}", e)))
}

pub fn decode(stored: Option<&str>) -> Result<Vec<String>, DomainError> {
    match stored {
        None => Ok(Vec::new()),
        Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| DomainError::Internal(format!("malformed stored tags: {}", e))),
    }
}
