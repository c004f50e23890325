//! services/site/src/error.rs
//!
//! Errors that end a `site` or `openapi` process. Request-level failures never
//! reach this type; handlers turn them into pages or status codes.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pool creation failed at startup.
    #[error("Database Error: {0}")]
    Database(#[from] sqlx::Error),

    /// Socket binding, serving, or writing the OpenAPI document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not serialize the OpenAPI document: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_keeps_variable_name() {
        let err = ApiError::from(ConfigError::MissingVar("DATABASE_URL".to_string()));
        assert!(matches!(err, ApiError::Config(_)));
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_io_error_converts() {
        let err = ApiError::from(std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken"));
        assert_eq!(err.to_string(), "IO error: port taken");
    }
}
