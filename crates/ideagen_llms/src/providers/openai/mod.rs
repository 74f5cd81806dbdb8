//! OpenAI provider module
//!
//! Implements the Provider trait for the OpenAI Chat Completions API and any
//! endpoint that speaks the same wire format.
//! API docs: https://platform.openai.com/docs/api-reference/chat/create

mod convert;
mod provider;
mod types;

pub use provider::OpenAiProvider;
pub use types::{OpenAiConfig, OpenAiRequest, OpenAiResponse};
