//! Idea generation: one call, at most one reinforced retry, then padding.

use std::sync::Arc;
use std::time::Instant;

use ideagen_llms::{GenerateRequest, Message, OpenAiConfig, OpenAiProvider, Provider};
use ideagen_observability::{generation_span, llm_call_span, record_duration};
use tracing::Instrument;

use crate::error::Result;
use crate::parser::extract_ideas;
use crate::prompt::{primary_prompt, reinforced_prompt, SYSTEM_INSTRUCTION};
use crate::request::GenerationRequest;
use crate::settings::{ApiCredential, GeneratorSettings};

/// Produces `count` ideas for a request using a completion provider.
pub struct IdeaGenerator {
    provider: Arc<dyn Provider>,
    settings: GeneratorSettings,
}

impl IdeaGenerator {
    pub fn new(provider: Arc<dyn Provider>, settings: GeneratorSettings) -> Self {
        Self { provider, settings }
    }

    /// Generator backed by the OpenAI Chat Completions API.
    ///
    /// A missing key does not fail here; the first `generate` call reports it.
    pub fn openai(settings: GeneratorSettings, credential: ApiCredential) -> Result<Self> {
        let mut config = OpenAiConfig::new(credential.into_key());
        if let Some(base_url) = &settings.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(timeout) = settings.timeout() {
            config = config.with_timeout(timeout);
        }
        let provider = OpenAiProvider::new(config)?;
        Ok(Self::new(Arc::new(provider), settings))
    }

    /// Generate exactly `req.count` ideas.
    ///
    /// Issues one call; if it yields fewer than `req.count` ideas, issues one
    /// more with a stricter prompt. If both fall short, the distinct real ideas
    /// from both replies are padded with `"{topic} - idea {position}"`
    /// placeholders. Provider failures are returned as-is and never retried.
    pub async fn generate(&self, req: &GenerationRequest) -> Result<Vec<String>> {
        let span = generation_span!(req.topic, req.count);
        self.generate_in_span(req).instrument(span).await
    }

    async fn generate_in_span(&self, req: &GenerationRequest) -> Result<Vec<String>> {
        let started = Instant::now();
        let span = tracing::Span::current();

        let first = self.attempt(primary_prompt(req), req, 1).await?;
        if first.len() >= req.count {
            span.record("llm.calls", 1);
            span.record("ideas.real", req.count);
            record_duration("duration_ms", started.elapsed());
            return Ok(take(first, req.count));
        }

        tracing::info!(
            parsed = first.len(),
            wanted = req.count,
            "first reply came up short, retrying once"
        );
        let second = self.attempt(reinforced_prompt(req), req, 2).await?;
        span.record("llm.calls", 2);
        if second.len() >= req.count {
            span.record("ideas.real", req.count);
            record_duration("duration_ms", started.elapsed());
            return Ok(take(second, req.count));
        }

        let real = merge_distinct(first, second, req.count);
        span.record("ideas.real", real.len());
        tracing::warn!(
            real = real.len(),
            wanted = req.count,
            "model under-delivered twice, padding with placeholders"
        );
        record_duration("duration_ms", started.elapsed());
        Ok(pad_with_placeholders(&req.topic, req.count, real))
    }

    async fn attempt(&self, prompt: String, req: &GenerationRequest, attempt: u32) -> Result<Vec<String>> {
        let request = GenerateRequest::new(
            self.settings.model.clone(),
            vec![Message::system(SYSTEM_INSTRUCTION), Message::user(prompt)],
        )
        .with_temperature(req.temperature)
        .with_max_tokens(self.settings.max_tokens);

        let span = llm_call_span!(self.provider.provider_id(), self.settings.model, attempt);
        let response = self.provider.generate(request).instrument(span).await?;

        if let Some(reason) = response.refusal() {
            tracing::warn!(attempt, reason, "model refused the request");
        }

        let ideas = extract_ideas(&response.text());
        tracing::debug!(attempt, parsed = ideas.len(), "parsed model reply");
        Ok(ideas)
    }
}

fn take(mut ideas: Vec<String>, count: usize) -> Vec<String> {
    ideas.truncate(count);
    ideas
}

/// Ideas from `first`, then ideas from `second` not already present, capped at `limit`.
pub(crate) fn merge_distinct(first: Vec<String>, second: Vec<String>, limit: usize) -> Vec<String> {
    let mut merged = first;
    for idea in second {
        if merged.len() >= limit {
            break;
        }
        if !merged.contains(&idea) {
            merged.push(idea);
        }
    }
    merged.truncate(limit);
    merged
}

/// Placeholder for the idea at 1-based `position` in the final list.
pub fn placeholder(topic: &str, position: usize) -> String {
    format!("{} - idea {}", topic.trim(), position)
}

/// Extend `ideas` to exactly `count` entries with positional placeholders.
pub(crate) fn pad_with_placeholders(topic: &str, count: usize, mut ideas: Vec<String>) -> Vec<String> {
    while ideas.len() < count {
        let position = ideas.len() + 1;
        ideas.push(placeholder(topic, position));
    }
    ideas
}
