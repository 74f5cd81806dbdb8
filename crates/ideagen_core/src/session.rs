//! Per-session idea list and last-used topic.

use serde::Serialize;
use uuid::Uuid;

use crate::error::SessionError;
use crate::export::{to_csv, to_text};
use crate::generator::IdeaGenerator;
use crate::request::{GenerationRequest, IdeaOptions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accumulated ideas for one interactive session.
///
/// Generate replaces the list, Generate More appends, clear resets both the
/// list and the remembered topic.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IdeaSession {
    id: SessionId,
    ideas: Vec<String>,
    topic: Option<String>,
}

impl IdeaSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn ideas(&self) -> &[String] {
        &self.ideas
    }

    /// Topic of the last successful Generate.
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    /// Generate ideas for `topic` and replace the current list.
    ///
    /// A blank topic is rejected before any remote call. On failure the list
    /// and topic are left untouched. Returns the new ideas.
    pub async fn generate(
        &mut self,
        generator: &IdeaGenerator,
        topic: &str,
        options: &IdeaOptions,
    ) -> Result<&[String], SessionError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(SessionError::EmptyTopic);
        }
        options.validate()?;

        let request = GenerationRequest::new(topic, options);
        let ideas = generator.generate(&request).await?;
        tracing::info!(session = %self.id, topic, count = ideas.len(), "generated ideas");

        self.ideas = ideas;
        self.topic = Some(topic.to_string());
        Ok(&self.ideas)
    }

    /// Generate more ideas for the remembered topic and append them.
    ///
    /// Returns only the newly appended ideas.
    pub async fn generate_more(
        &mut self,
        generator: &IdeaGenerator,
        options: &IdeaOptions,
    ) -> Result<&[String], SessionError> {
        let topic = self.topic.clone().ok_or(SessionError::NoPreviousTopic)?;
        options.validate()?;

        let request = GenerationRequest::new(topic, options);
        let more = generator.generate(&request).await?;
        tracing::info!(
            session = %self.id,
            appended = more.len(),
            total = self.ideas.len() + more.len(),
            "appended ideas"
        );

        let start = self.ideas.len();
        self.ideas.extend(more);
        Ok(&self.ideas[start..])
    }

    pub fn clear(&mut self) {
        self.ideas.clear();
        self.topic = None;
    }

    pub fn to_csv(&self) -> String {
        to_csv(&self.ideas)
    }

    pub fn to_text(&self) -> String {
        to_text(&self.ideas)
    }
}
