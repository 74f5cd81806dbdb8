//! Span helpers shared by the ideagen crates

/// Create a span covering one idea-generation invocation
///
/// Declares `llm.calls`, `ideas.real` and `duration_ms` as empty fields so
/// they can be filled in with `Span::record` once known.
///
/// # Example
///
/// ```rust
/// use ideagen_observability::generation_span;
///
/// let span = generation_span!("vegan breakfast", 5);
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! generation_span {
    ($topic:expr, $count:expr) => {
        tracing::info_span!(
            "ideas.generate",
            ideas.topic = %$topic,
            ideas.count = $count,
            ideas.real = tracing::field::Empty,
            llm.calls = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        )
    };
}

/// Create a span for one remote completion call
///
/// # Example
///
/// ```rust
/// use ideagen_observability::llm_call_span;
///
/// let span = llm_call_span!("openai", "gpt-3.5-turbo", 1);
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! llm_call_span {
    ($provider:expr, $model:expr, $attempt:expr) => {
        tracing::debug_span!(
            "llm.call",
            llm.provider = $provider,
            llm.model = %$model,
            llm.attempt = $attempt,
        )
    };
}

/// Record a duration in milliseconds on the current span.
///
/// The field must have been declared on the span (see [`generation_span!`]).
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
