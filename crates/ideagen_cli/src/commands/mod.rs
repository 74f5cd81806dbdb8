//! Command dispatch.

pub mod config;
pub mod generate;
pub mod session;
pub mod styles;

use anyhow::Result;
use ideagen_core::{ApiCredential, GeneratorSettings, IdeaGenerator};

use crate::cli::{Cli, Command, IdeaArgs};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            topic,
            args,
            format,
            out,
        } => generate::handle(topic, args, format, out).await,
        Command::Session { args } => session::handle(args).await,
        Command::Styles => styles::handle(),
        Command::Config { action } => config::handle(action).await,
    }
}

/// Settings from the environment with command-line overrides applied.
pub(crate) fn effective_settings(model: Option<&str>) -> Result<GeneratorSettings> {
    let mut settings = GeneratorSettings::from_env()?;
    if let Some(model) = model.map(str::trim).filter(|m| !m.is_empty()) {
        settings = settings.with_model(model);
    }
    Ok(settings)
}

/// OpenAI-backed generator for the given arguments. A missing key is not an
/// error yet; it surfaces on the first generation.
pub(crate) fn build_generator(args: &IdeaArgs) -> Result<IdeaGenerator> {
    let settings = effective_settings(args.model.as_deref())?;
    let credential = ApiCredential::from_env(args.api_key.as_deref());
    tracing::debug!(
        model = %settings.model,
        key_source = credential.source().describe(),
        "building generator"
    );
    Ok(IdeaGenerator::openai(settings, credential)?)
}
