//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Company category name must not be empty")]
    EmptyCategoryName,

    #[error("Company listed in more than one category: {0}")]
    DuplicateCompany(String),

    #[error("Insight preview limit must be greater than zero")]
    InvalidPreviewLimit,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
