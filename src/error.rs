//! Error types for pageable
//!
//! Errors raised by a [`DataSource`](crate::DataSource) are never converted
//! into this type: `paginate` hands them back exactly as the source produced
//! them. The variants here cover the crate's own surface, which is loading
//! configuration, opt-in parameter validation and parsing.

use thiserror::Error;

/// The main error type for pageable
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Parameter Errors
    // ============================================================================
    #[error("Invalid pagination parameter '{param}': {message}")]
    InvalidParam { param: String, message: String },

    #[error("Invalid sort direction '{value}', expected 'asc' or 'desc'")]
    InvalidSortDirection { value: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an invalid config value error
    pub fn invalid_config_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_param(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParam {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create an invalid sort direction error
    pub fn invalid_sort_direction(value: impl Into<String>) -> Self {
        Self::InvalidSortDirection {
            value: value.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

/// Result type alias for pageable
pub type Result<T> = std::result::Result<T, Error>;
