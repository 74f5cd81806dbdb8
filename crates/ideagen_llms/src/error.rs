//! Error types for provider calls

use thiserror::Error;

/// Errors raised while talking to a completion provider.
#[derive(Error, Debug)]
pub enum Error {
    /// No credential was configured for the provider
    #[error("Missing API key for provider '{provider}': set {env_var} or pass an explicit key")]
    MissingApiKey { provider: String, env_var: String },

    /// Transport-level failure (connect, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("{provider} API error {status}: {body}")]
    Api {
        provider: String,
        status: u16,
        body: String,
    },

    /// The response envelope did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A header name or value could not be encoded
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl Error {
    pub fn missing_api_key(provider: impl Into<String>, env_var: impl Into<String>) -> Self {
        Self::MissingApiKey {
            provider: provider.into(),
            env_var: env_var.into(),
        }
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// True when the failure happened before any request left the process.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingApiKey { .. } | Self::InvalidHeader(_))
    }
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, Error>;
