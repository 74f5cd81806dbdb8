//! Error types for generation and session handling

use thiserror::Error;

use crate::request::OptionError;

/// Failure of a generation call. Only provider failures end up here;
/// short or malformed model output is handled by parsing and padding.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Llm(#[from] ideagen_llms::Error),
}

impl GenerateError {
    /// True when no request was sent because the setup is incomplete (e.g. no API key).
    pub fn is_configuration(&self) -> bool {
        match self {
            GenerateError::Llm(e) => e.is_configuration(),
        }
    }
}

/// Failure of a session action
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Please enter a topic before generating ideas.")]
    EmptyTopic,

    #[error("No previous topic. Generate ideas for a topic first.")]
    NoPreviousTopic,

    #[error(transparent)]
    InvalidOption(#[from] OptionError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl SessionError {
    /// Input problems the user can fix by retyping, as opposed to remote failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SessionError::EmptyTopic | SessionError::NoPreviousTopic | SessionError::InvalidOption(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
