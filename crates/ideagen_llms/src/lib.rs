//! ideagen_llms — chat-completion provider abstraction.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │             Arc<dyn Provider>                │
//! │                     │                        │
//! │          ┌──────────┴──────────┐             │
//! │          ▼                     ▼             │
//! │   ┌─────────────┐       ┌─────────────┐      │
//! │   │   OpenAI    │       │ test doubles│      │
//! │   │  Provider   │       │             │      │
//! │   └─────────────┘       └─────────────┘      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ideagen_llms::{GenerateRequest, Message, OpenAiProvider, Provider};
//!
//! # async fn run() -> ideagen_llms::Result<()> {
//! let provider = OpenAiProvider::from_env()?;
//! let request = GenerateRequest::new("gpt-3.5-turbo", vec![Message::user("hello")])
//!     .with_temperature(0.7);
//! let response = provider.generate(request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod provider;
pub mod providers;
pub mod types;


pub use error::{Error, Result};
pub use provider::Provider;

#[cfg(feature = "openai")]
pub use providers::OpenAiProvider;
#[cfg(feature = "openai")]
pub use providers::openai::OpenAiConfig;

pub use types::{
    FinishReason, FinishReasonKind, GenerateOptions, GenerateRequest, GenerateResponse, Headers,
    Message, ResponseContent, Role, Usage,
};
