//! Catalog loading errors.

use thiserror::Error;

/// A seed collection could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse {collection}: {source}")]
    Parse {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {collection} record '{id}': {reason}")]
    InvalidRecord {
        collection: &'static str,
        id: String,
        reason: String,
    },

    #[error("Duplicate {collection} id '{id}'")]
    DuplicateId { collection: &'static str, id: String },
}

impl CatalogError {
    pub(crate) fn invalid(
        collection: &'static str,
        id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CatalogError::InvalidRecord {
            collection,
            id: id.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_record_message() {
        let err = CatalogError::invalid("bookings", "book9", "unknown status");
        assert_eq!(err.to_string(), "Invalid bookings record 'book9': unknown status");
    }

    #[test]
    fn test_duplicate_id_message() {
        let err = CatalogError::DuplicateId {
            collection: "pets",
            id: "1".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate pets id '1'");
    }
}
