use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ideagen_llms::{
    Error, FinishReason, FinishReasonKind, GenerateRequest, GenerateResponse, Headers, Provider,
    ResponseContent,
};

use crate::generator::IdeaGenerator;
use crate::settings::GeneratorSettings;

pub enum Reply {
    Text(&'static str),
    Refusal(&'static str),
    Fail(Error),
}

/// Provider that plays back canned replies and records every request.
#[derive(Clone, Default)]
pub struct ScriptedProvider {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            requests: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn generator(&self) -> IdeaGenerator {
        IdeaGenerator::new(Arc::new(self.clone()), GeneratorSettings::default())
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    fn provider_id(&self) -> &str {
        "scripted"
    }

    fn build_headers(&self, _custom_headers: Option<&Headers>) -> Headers {
        Headers::new()
    }

    async fn generate(&self, request: GenerateRequest) -> ideagen_llms::Result<GenerateResponse> {
        self.requests.lock().unwrap().push(request);
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("provider called more often than scripted");

        let content = match reply {
            Reply::Text(text) => ResponseContent::Text {
                text: text.to_string(),
            },
            Reply::Refusal(reason) => ResponseContent::Refusal {
                reason: reason.to_string(),
            },
            Reply::Fail(err) => return Err(err),
        };
        Ok(GenerateResponse {
            content: vec![content],
            usage: Default::default(),
            finish_reason: FinishReason::with_raw(FinishReasonKind::Stop, "stop"),
            model: None,
        })
    }
}

pub fn api_error(status: u16) -> Error {
    Error::Api {
        provider: "openai".to_string(),
        status,
        body: "{\"error\":{\"message\":\"quota\"}}".to_string(),
    }
}
