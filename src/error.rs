use thiserror::Error;

/// Unified error type for version-info operations
#[derive(Error, Debug)]
pub enum VersionInfoError {
    #[error("Invalid version: {input}")]
    InvalidVersion { input: String },

    #[error("Catalog load error: {0}")]
    CatalogLoad(String),

    #[error("Release catalog is empty")]
    EmptyCatalog,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-info
pub type Result<T> = std::result::Result<T, VersionInfoError>;

impl VersionInfoError {
    /// Create an invalid version error carrying the offending input
    pub fn invalid_version(input: impl Into<String>) -> Self {
        VersionInfoError::InvalidVersion {
            input: input.into(),
        }
    }

    /// Create a catalog load error with context
    pub fn catalog_load(msg: impl Into<String>) -> Self {
        VersionInfoError::CatalogLoad(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionInfoError::Config(msg.into())
    }

    /// Whether the error was caused by user input rather than operator data
    pub fn is_user_error(&self) -> bool {
        matches!(self, VersionInfoError::InvalidVersion { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VersionInfoError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_invalid_version_carries_input() {
        let err = VersionInfoError::invalid_version("1.2.x");
        assert_eq!(err.to_string(), "Invalid version: 1.2.x");
        match err {
            VersionInfoError::InvalidVersion { input } => assert_eq!(input, "1.2.x"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VersionInfoError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_is_user_error() {
        assert!(VersionInfoError::invalid_version("a.b").is_user_error());
        assert!(!VersionInfoError::catalog_load("bad json").is_user_error());
        assert!(!VersionInfoError::EmptyCatalog.is_user_error());
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (VersionInfoError::invalid_version("x"), "Invalid version"),
            (VersionInfoError::catalog_load("x"), "Catalog load error"),
            (VersionInfoError::EmptyCatalog, "Release catalog is empty"),
            (VersionInfoError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            VersionInfoError::config(""),
            VersionInfoError::catalog_load(""),
            VersionInfoError::invalid_version(""),
        ];

        for err in errors {
            // Even with empty message, the error type prefix should be present
            assert!(!err.to_string().is_empty());
        }
    }
}
