//! Error types for observability crate

use thiserror::Error;

/// Errors that can occur during observability initialization
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Failed to build an exporter or install the subscriber
    #[error("Failed to initialize observability: {0}")]
    InitFailed(String),

    /// Invalid filter directive or other configuration problem
    #[error("Configuration error: {0}")]
    Config(String),
}
