//! Defaults, environment-driven settings and API credential resolution.

use std::time::Duration;

use ideagen_llms::OpenAiConfig;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 600;
pub const DEFAULT_NUM_IDEAS: usize = 5;
pub const MAX_NUM_IDEAS: usize = 20;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const MODEL_ENV: &str = "IDEAGEN_MODEL";
pub const MAX_TOKENS_ENV: &str = "IDEAGEN_MAX_TOKENS";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const TIMEOUT_ENV: &str = "IDEAGEN_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

/// Fixed parameters of every remote call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorSettings {
    pub model: String,
    pub max_tokens: u32,
    /// Alternate OpenAI-compatible endpoint; `None` uses api.openai.com
    pub base_url: Option<String>,
    /// Whole-request timeout; `None` keeps the HTTP client default
    pub timeout_secs: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            base_url: None,
            timeout_secs: None,
        }
    }
}

impl GeneratorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `IDEAGEN_MODEL`, `IDEAGEN_MAX_TOKENS`, `OPENAI_BASE_URL` and
    /// `IDEAGEN_TIMEOUT_SECS`, falling back to the defaults.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`GeneratorSettings::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut settings = Self::default();
        if let Some(model) = non_empty(MODEL_ENV) {
            settings.model = model.trim().to_string();
        }
        if let Some(raw) = non_empty(MAX_TOKENS_ENV) {
            settings.max_tokens = parse_positive(MAX_TOKENS_ENV, &raw)?;
        }
        settings.base_url = non_empty(BASE_URL_ENV).map(|v| v.trim().to_string());
        if let Some(raw) = non_empty(TIMEOUT_ENV) {
            settings.timeout_secs = Some(parse_positive(TIMEOUT_ENV, &raw)?);
        }
        Ok(settings)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Endpoint calls go to: the configured override or the OpenAI default.
    pub fn endpoint(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(OpenAiConfig::DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn parse_positive<T>(var: &'static str, raw: &str) -> Result<T, SettingsError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match raw.trim().parse::<T>() {
        Ok(v) if v > T::default() => Ok(v),
        _ => Err(SettingsError::InvalidNumber {
            var,
            value: raw.to_string(),
        }),
    }
}

/// Where the API key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKeySource {
    /// Passed explicitly for this run, not persisted
    Override,
    /// Read from `OPENAI_API_KEY`
    Environment,
    /// Neither is set; calls will fail with a configuration error
    Missing,
}

impl ApiKeySource {
    pub fn describe(&self) -> &'static str {
        match self {
            ApiKeySource::Override => "Using API key from --api-key (not persisted).",
            ApiKeySource::Environment => "Using OPENAI_API_KEY from environment.",
            ApiKeySource::Missing => {
                "No OpenAI API key found. Set OPENAI_API_KEY or pass --api-key."
            }
        }
    }
}

/// Resolved API key plus its provenance.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential {
    key: Option<String>,
    source: ApiKeySource,
}

impl ApiCredential {
    /// An explicit override wins over the environment value. Blank values count as absent.
    pub fn resolve(override_key: Option<&str>, env_key: Option<&str>) -> Self {
        let usable = |k: Option<&str>| k.map(str::trim).filter(|k| !k.is_empty()).map(str::to_string);

        if let Some(key) = usable(override_key) {
            return Self {
                key: Some(key),
                source: ApiKeySource::Override,
            };
        }
        if let Some(key) = usable(env_key) {
            return Self {
                key: Some(key),
                source: ApiKeySource::Environment,
            };
        }
        Self {
            key: None,
            source: ApiKeySource::Missing,
        }
    }

    pub fn from_env(override_key: Option<&str>) -> Self {
        let env_key = std::env::var(API_KEY_ENV).ok();
        Self::resolve(override_key, env_key.as_deref())
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn source(&self) -> ApiKeySource {
        self.source
    }

    pub fn into_key(self) -> Option<String> {
        self.key
    }

    /// Key with everything but the first and last four characters hidden.
    pub fn masked(&self) -> Option<String> {
        self.key.as_deref().map(mask_key)
    }
}

impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredential")
            .field("key", &self.masked())
            .field("source", &self.source)
            .finish()
    }
}

pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
