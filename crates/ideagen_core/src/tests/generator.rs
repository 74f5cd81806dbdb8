use ideagen_llms::{Error, Role};

use super::support::{api_error, Reply, ScriptedProvider};
use crate::error::GenerateError;
use crate::generator::{merge_distinct, pad_with_placeholders, placeholder};
use crate::prompt::SYSTEM_INSTRUCTION;
use crate::request::{GenerationRequest, IdeaOptions};
use crate::settings::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};

fn request(topic: &str, count: usize) -> GenerationRequest {
    let options = IdeaOptions {
        count,
        ..IdeaOptions::default()
    };
    GenerationRequest::new(topic, &options)
}

#[tokio::test]
async fn test_single_call_when_first_reply_is_enough() {
    let provider = ScriptedProvider::new(vec![Reply::Text(
        r#"["A", "B", "C", "D", "E", "F", "G"]"#,
    )]);

    let ideas = provider
        .generator()
        .generate(&request("remote work", 5))
        .await
        .unwrap();

    assert_eq!(ideas, vec!["A", "B", "C", "D", "E"]);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_request_carries_prompt_and_settings() {
    let provider = ScriptedProvider::new(vec![Reply::Text(r#"["only one"]"#)]);
    let options = IdeaOptions {
        count: 1,
        temperature: 0.3,
        ..IdeaOptions::default()
    };

    provider
        .generator()
        .generate(&GenerationRequest::new("sourdough", &options))
        .await
        .unwrap();

    let sent = &provider.requests()[0];
    assert_eq!(sent.model, DEFAULT_MODEL);
    assert_eq!(sent.options.temperature, Some(0.3));
    assert_eq!(sent.options.max_tokens, Some(DEFAULT_MAX_TOKENS));
    assert_eq!(sent.messages.len(), 2);
    assert_eq!(sent.messages[0].role, Role::System);
    assert_eq!(sent.messages[0].content, SYSTEM_INSTRUCTION);
    assert_eq!(sent.messages[1].role, Role::User);
    assert!(sent.messages[1].content.contains("Topic: sourdough"));
    assert!(sent.messages[1].content.contains("Number of ideas: 1"));
}

#[tokio::test]
async fn test_short_first_reply_triggers_reinforced_retry() {
    let provider = ScriptedProvider::new(vec![
        Reply::Text("Sure! Here are some ideas:\n1. Only idea"),
        Reply::Text(r#"["One", "Two", "Three"]"#),
    ]);

    let ideas = provider
        .generator()
        .generate(&request("budget travel", 3))
        .await
        .unwrap();

    assert_eq!(ideas, vec!["One", "Two", "Three"]);
    assert_eq!(provider.calls(), 2);
    let retry_prompt = &provider.requests()[1].messages[1].content;
    assert!(retry_prompt.contains("exactly 3 ideas"));
    assert!(retry_prompt.contains("No numbering, no commentary."));
}

#[tokio::test]
async fn test_pads_with_placeholders_after_two_short_replies() {
    let provider = ScriptedProvider::new(vec![
        Reply::Text(r#"["Idea 1", "Idea 2"]"#),
        Reply::Text(r#"["Idea 2", "Idea 3"]"#),
    ]);

    let ideas = provider
        .generator()
        .generate(&request("  urban gardening ", 5))
        .await
        .unwrap();

    assert_eq!(
        ideas,
        vec![
            "Idea 1",
            "Idea 2",
            "Idea 3",
            "urban gardening - idea 4",
            "urban gardening - idea 5",
        ]
    );
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_unparseable_and_empty_replies_become_all_placeholders() {
    let provider = ScriptedProvider::new(vec![Reply::Text(""), Reply::Text("   \n  ")]);

    let ideas = provider
        .generator()
        .generate(&request("cats", 2))
        .await
        .unwrap();

    assert_eq!(ideas, vec!["cats - idea 1", "cats - idea 2"]);
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_refusal_degrades_to_padding() {
    let provider = ScriptedProvider::new(vec![
        Reply::Refusal("I can't help with that."),
        Reply::Text("- Bullet idea"),
    ]);

    let ideas = provider
        .generator()
        .generate(&request("chess", 2))
        .await
        .unwrap();

    assert_eq!(ideas, vec!["Bullet idea", "chess - idea 2"]);
}

#[tokio::test]
async fn test_provider_error_on_first_call_is_not_retried() {
    let provider = ScriptedProvider::new(vec![Reply::Fail(api_error(429))]);

    let err = provider
        .generator()
        .generate(&request("finance", 5))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GenerateError::Llm(Error::Api { status: 429, .. })
    ));
    assert!(!err.is_configuration());
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_provider_error_on_retry_discards_first_reply() {
    let provider = ScriptedProvider::new(vec![
        Reply::Text(r#"["Half"]"#),
        Reply::Fail(api_error(500)),
    ]);

    let err = provider
        .generator()
        .generate(&request("finance", 2))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("500"));
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_missing_key_reports_configuration_error() {
    let provider = ScriptedProvider::new(vec![Reply::Fail(Error::missing_api_key(
        "openai",
        "OPENAI_API_KEY",
    ))]);

    let err = provider
        .generator()
        .generate(&request("finance", 2))
        .await
        .unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("OPENAI_API_KEY"));
}

#[test]
fn test_merge_distinct_keeps_order_and_caps() {
    let first = vec!["a".to_string(), "b".to_string()];
    let second = vec!["b".to_string(), "c".to_string(), "d".to_string()];
    assert_eq!(merge_distinct(first, second, 3), vec!["a", "b", "c"]);
}

#[test]
fn test_padding_uses_final_positions() {
    let padded = pad_with_placeholders("tea", 3, vec!["real".to_string()]);
    assert_eq!(padded, vec!["real", "tea - idea 2", "tea - idea 3"]);
    assert_eq!(placeholder(" tea ", 7), "tea - idea 7");
}
