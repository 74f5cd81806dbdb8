//! Conversion between unified types and OpenAI types

use super::types::{OpenAiMessage, OpenAiRequest, OpenAiResponse};
use crate::error::{Error, Result};
use crate::types::{
    FinishReason, FinishReasonKind, GenerateRequest, GenerateResponse, ResponseContent, Usage,
};

/// Convert unified request to OpenAI request
pub fn to_openai_request(req: &GenerateRequest) -> OpenAiRequest {
    let messages = req
        .messages
        .iter()
        .map(|m| OpenAiMessage {
            role: m.role.as_str().to_string(),
            content: m.content.clone(),
        })
        .collect();

    OpenAiRequest {
        model: req.model.clone(),
        messages,
        temperature: req.options.temperature,
        max_tokens: req.options.max_tokens,
    }
}

/// Convert OpenAI response to unified response.
///
/// Only a missing `choices` entry is an error; an empty or absent message body
/// yields a response whose [`GenerateResponse::text`] is empty.
pub fn from_openai_response(resp: OpenAiResponse) -> Result<GenerateResponse> {
    let choice = resp
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::invalid_response("No choices in OpenAI response"))?;

    let mut content = Vec::new();

    if let Some(reason) = choice.message.refusal.filter(|r| !r.is_empty()) {
        content.push(ResponseContent::Refusal { reason });
    }

    if let Some(text) = choice.message.content.filter(|t| !t.is_empty()) {
        content.push(ResponseContent::Text { text });
    }

    let usage = resp
        .usage
        .map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        })
        .unwrap_or_default();

    Ok(GenerateResponse {
        content,
        usage,
        finish_reason: parse_finish_reason(choice.finish_reason.as_deref()),
        model: resp.model,
    })
}

/// Parse OpenAI finish reason to unified finish reason
pub fn parse_finish_reason(reason: Option<&str>) -> FinishReason {
    match reason {
        Some("stop") => FinishReason::with_raw(FinishReasonKind::Stop, "stop"),
        Some("length") => FinishReason::with_raw(FinishReasonKind::Length, "length"),
        Some("content_filter") => {
            FinishReason::with_raw(FinishReasonKind::ContentFilter, "content_filter")
        }
        Some(raw) => FinishReason::with_raw(FinishReasonKind::Other, raw),
        None => FinishReason::other(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Message;

    #[test]
    fn test_parse_finish_reason() {
        assert_eq!(
            parse_finish_reason(Some("stop")).unified,
            FinishReasonKind::Stop
        );
        assert_eq!(
            parse_finish_reason(Some("length")).unified,
            FinishReasonKind::Length
        );
        assert_eq!(
            parse_finish_reason(Some("tool_calls")).raw.as_deref(),
            Some("tool_calls")
        );
        assert_eq!(parse_finish_reason(None).unified, FinishReasonKind::Other);
    }

    #[test]
    fn test_request_omits_unset_options() {
        let req = GenerateRequest::new("gpt-3.5-turbo", vec![Message::system("s"), Message::user("u")]);
        let body = serde_json::to_value(to_openai_request(&req)).unwrap();
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "u");
        assert!(body.get("temperature").is_none());
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn test_empty_choices_is_invalid() {
        let resp: OpenAiResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            from_openai_response(resp),
            Err(Error::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_null_content_gives_empty_text() {
        let resp: OpenAiResponse = serde_json::from_str(
            r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": null}, "finish_reason": "stop"}]}"#,
        )
        .unwrap();
        let unified = from_openai_response(resp).unwrap();
        assert_eq!(unified.text(), "");
        assert_eq!(unified.usage, Usage::default());
    }
}
