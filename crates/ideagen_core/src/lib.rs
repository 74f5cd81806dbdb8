//! ideagen_core — turns a topic into a fixed-size list of content ideas.
//!
//! A [`IdeaGenerator`] asks the completion provider once, asks again with a
//! stricter prompt if the reply parsed into too few ideas, and pads whatever
//! is still missing with placeholders. [`IdeaSession`] keeps the running list
//! for Generate / Generate More / Clear and renders it for export.
//!
//! ```rust,no_run
//! use ideagen_core::{ApiCredential, GeneratorSettings, IdeaGenerator, IdeaOptions, IdeaSession};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = IdeaGenerator::openai(GeneratorSettings::from_env()?, ApiCredential::from_env(None))?;
//! let mut session = IdeaSession::new();
//! session.generate(&generator, "home espresso", &IdeaOptions::default()).await?;
//! println!("{}", session.to_text());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod generator;
pub mod parser;
pub mod prompt;
pub mod request;
pub mod session;
pub mod settings;

#[cfg(test)]
mod tests;

pub use error::{GenerateError, Result, SessionError};
pub use export::{to_csv, to_text, write_export, ExportFormat};
pub use generator::{placeholder, IdeaGenerator};
pub use parser::extract_ideas;
pub use request::{GenerationRequest, IdeaOptions, OptionError, Style, Tone};
pub use session::{IdeaSession, SessionId};
pub use settings::{
    mask_key, ApiCredential, ApiKeySource, GeneratorSettings, SettingsError, API_KEY_ENV,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_NUM_IDEAS, DEFAULT_TEMPERATURE, MAX_NUM_IDEAS,
};
