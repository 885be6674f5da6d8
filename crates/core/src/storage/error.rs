use thiserror::Error;

/// Errors that can occur during repository and signing operations.
///
/// Backends map their native errors into these variants one-to-one and keep
/// the native message. Nothing is retried or recovered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Presign failed: {0}")]
    Presign(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Todo",
            id: "u1/t1".to_string(),
        };
        assert_eq!(error.to_string(), "Todo not found: u1/t1");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("Table not found".to_string());
        assert_eq!(error.to_string(), "Query failed: Table not found");
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("Missing or invalid field: name".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid data: Missing or invalid field: name"
        );
    }

    #[test]
    fn test_repository_error_presign_display() {
        let error = RepositoryError::Presign("expiration too long".to_string());
        assert_eq!(error.to_string(), "Presign failed: expiration too long");
    }
}
