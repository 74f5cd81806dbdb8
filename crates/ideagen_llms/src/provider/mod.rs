//! Provider trait

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{GenerateRequest, GenerateResponse, Headers};

/// A chat-completion backend.
///
/// One call to [`Provider::generate`] is one remote request; implementations do
/// not retry on their own.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable identifier used in logs and error messages (e.g. `"openai"`).
    fn provider_id(&self) -> &str;

    /// Headers sent with every request, merged with per-request overrides.
    fn build_headers(&self, custom_headers: Option<&Headers>) -> Headers;

    /// Run a single non-streaming completion.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}
