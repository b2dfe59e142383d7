//! LLM Call primitive.
//!
//! The fundamental AI operation: single-shot inference with optional
//! structured output. Every consulting operation is an `LlmCall` with a
//! specialized prompt and, for most of them, a response schema.

use crate::backend::{LlmBackend, LlmMessage, LlmRequest, LlmResponse, TextStream, TokenUsage};
use crate::error::LlmError;
use crate::schema::ResponseSchema;
use chrono::{DateTime, Utc};
use creator_boost_core::InvocationId;
use rootcause::prelude::Report;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// The result of an LLM Call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmCallResult {
    /// Unique identifier for this invocation.
    pub id: InvocationId,
    /// The raw text output.
    pub content: String,
    /// Parsed and validated output (if a schema was provided).
    pub structured_output: Option<JsonValue>,
    /// Token usage statistics.
    pub usage: TokenUsage,
    /// Model that generated the response.
    pub model: String,
    /// When the call completed.
    pub timestamp: DateTime<Utc>,
    /// Latency in milliseconds.
    pub latency_ms: u64,
}

impl LlmCallResult {
    /// Creates a result from an LLM response.
    #[must_use]
    pub fn from_response(
        id: InvocationId,
        response: LlmResponse,
        structured_output: Option<JsonValue>,
        latency_ms: u64,
    ) -> Self {
        Self {
            id,
            content: response.content,
            structured_output,
            usage: response.usage,
            model: response.model,
            timestamp: Utc::now(),
            latency_ms,
        }
    }

    /// Deserializes the structured output into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call had no schema or the output does not
    /// deserialize into `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, Report<LlmError>> {
        let value = self
            .structured_output
            .clone()
            .ok_or_else(|| LlmError::ResponseParseFailed {
                reason: "call was made without an output schema".to_string(),
            })?;

        serde_json::from_value(value).map_err(|e| {
            LlmError::ResponseParseFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// An LLM Call executor.
///
/// This is a builder for executing LLM calls with various configurations.
#[derive(Debug, Clone)]
pub struct LlmCall {
    prompt: String,
    system_prompt: Option<String>,
    history: Vec<LlmMessage>,
    output_schema: Option<ResponseSchema>,
}

impl LlmCall {
    /// Creates a new LLM Call with the given prompt.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            history: Vec::new(),
            output_schema: None,
        }
    }

    /// Adds a system prompt.
    #[must_use]
    pub fn with_system_prompt(mut self, system: impl Into<String>) -> Self {
        self.system_prompt = Some(system.into());
        self
    }

    /// Adds an output schema for structured output.
    #[must_use]
    pub fn with_output_schema(mut self, schema: ResponseSchema) -> Self {
        self.output_schema = Some(schema);
        self
    }

    /// Replays earlier conversation turns before the prompt.
    #[must_use]
    pub fn with_history(mut self, history: Vec<LlmMessage>) -> Self {
        self.history = history;
        self
    }

    /// Builds an LLM request from this configuration.
    #[must_use]
    pub fn build_request(&self) -> LlmRequest {
        let mut request = LlmRequest::new(self.prompt.clone()).with_context(self.history.clone());

        if let Some(ref system) = self.system_prompt {
            request = request.with_system(system.clone());
        }

        if let Some(ref schema) = self.output_schema {
            request = request.with_output_schema(schema.clone());
        }

        request
    }

    /// Sends the call and waits for the complete response.
    ///
    /// With an output schema, the response text is trimmed, parsed as JSON
    /// and validated against the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails, the text is not JSON, or the
    /// JSON does not match the schema. Nothing is retried.
    pub async fn execute(&self, backend: &dyn LlmBackend) -> Result<LlmCallResult, Report<LlmError>> {
        self.execute_as(InvocationId::new(), backend).await
    }

    #[instrument(skip_all, fields(invocation_id = %id, model = backend.model()))]
    async fn execute_as(
        &self,
        id: InvocationId,
        backend: &dyn LlmBackend,
    ) -> Result<LlmCallResult, Report<LlmError>> {
        let request = self.build_request();
        let started = Instant::now();
        let response = backend.generate(&request).await?;
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(
            latency_ms,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            response_chars = response.content.len(),
            "LLM call completed"
        );

        let structured_output = match &self.output_schema {
            Some(schema) => Some(parse_structured(&response.content, schema)?),
            None => None,
        };

        Ok(LlmCallResult::from_response(
            id,
            response,
            structured_output,
            latency_ms,
        ))
    }

    /// Starts the call as a token stream.
    ///
    /// Output schemas do not apply to streamed calls.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the request.
    #[instrument(skip_all, fields(invocation_id = %InvocationId::new(), model = backend.model()))]
    pub async fn stream(&self, backend: &dyn LlmBackend) -> Result<TextStream, Report<LlmError>> {
        let request = self.build_request();
        debug!(history_turns = request.context.len(), "starting LLM stream");
        backend.stream(&request).await
    }
}

/// Parses response text as JSON and validates it against `schema`.
fn parse_structured(
    text: &str,
    schema: &ResponseSchema,
) -> Result<JsonValue, Report<LlmError>> {
    let value: JsonValue =
        serde_json::from_str(text.trim()).map_err(|e| LlmError::ResponseParseFailed {
            reason: e.to_string(),
        })?;

    if let Err(violations) = schema.validate(&value) {
        warn!(
            violation_count = violations.len(),
            "LLM response rejected by schema"
        );
        return Err(LlmError::SchemaViolation { violations }.into());
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{ImageRequest, ImageResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CannedBackend {
        reply: String,
        seen: Mutex<Vec<LlmRequest>>,
    }

    impl CannedBackend {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmBackend for CannedBackend {
        async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, Report<LlmError>> {
            self.seen.lock().expect("lock").push(request.clone());
            Ok(LlmResponse {
                content: self.reply.clone(),
                usage: TokenUsage {
                    input_tokens: 12,
                    output_tokens: 8,
                },
                model: "canned".to_string(),
            })
        }

        async fn stream(&self, _request: &LlmRequest) -> Result<TextStream, Report<LlmError>> {
            Err(LlmError::RequestFailed {
                reason: "not streaming".to_string(),
            }
            .into())
        }

        async fn generate_images(
            &self,
            _request: &ImageRequest,
        ) -> Result<ImageResponse, Report<LlmError>> {
            Ok(ImageResponse::default())
        }

        fn model(&self) -> &str {
            "canned"
        }
    }

    fn titles_schema() -> ResponseSchema {
        ResponseSchema::object().field("titles", ResponseSchema::array(ResponseSchema::string()))
    }

    #[test]
    fn llm_call_builder() {
        let call = LlmCall::new("Suggest a title")
            .with_system_prompt("You are a YouTube strategist.")
            .with_history(vec![LlmMessage::user("hi"), LlmMessage::assistant("hello")])
            .with_output_schema(titles_schema());

        let request = call.build_request();
        assert_eq!(request.prompt, "Suggest a title");
        assert_eq!(
            request.system,
            Some("You are a YouTube strategist.".to_string())
        );
        assert_eq!(request.context.len(), 2);
        assert_eq!(request.output_schema, Some(titles_schema()));
    }

    #[tokio::test]
    async fn execute_parses_trimmed_structured_output() {
        let backend = CannedBackend::new("\n  {\"titles\": [\"One\", \"Two\"]}  \n");
        let result = LlmCall::new("prompt")
            .with_output_schema(titles_schema())
            .execute(&backend)
            .await
            .expect("call should succeed");

        assert_eq!(result.usage.total(), 20);
        assert_eq!(result.model, "canned");
        assert!(result.id.to_string().starts_with("llm_"));

        #[derive(Deserialize)]
        struct Titles {
            titles: Vec<String>,
        }
        let titles: Titles = result.deserialize().expect("deserialize");
        assert_eq!(titles.titles, vec!["One", "Two"]);

        let seen = backend.seen.lock().expect("lock");
        assert_eq!(seen.len(), 1);
        assert!(seen[0].output_schema.is_some());
    }

    #[tokio::test]
    async fn execute_without_schema_keeps_raw_text() {
        let backend = CannedBackend::new("  Scene one: a close-up.  ");
        let result = LlmCall::new("prompt").execute(&backend).await.expect("call");
        assert_eq!(result.content, "  Scene one: a close-up.  ");
        assert!(result.structured_output.is_none());
        assert!(result.deserialize::<JsonValue>().is_err());
    }

    #[tokio::test]
    async fn execute_rejects_malformed_json() {
        let backend = CannedBackend::new("{\"titles\": [");
        let err = LlmCall::new("prompt")
            .with_output_schema(titles_schema())
            .execute(&backend)
            .await
            .expect_err("should fail");
        assert!(matches!(
            err.current_context(),
            LlmError::ResponseParseFailed { .. }
        ));
    }

    #[tokio::test]
    async fn execute_rejects_schema_violations() {
        let backend = CannedBackend::new("{\"headline\": \"One\"}");
        let err = LlmCall::new("prompt")
            .with_output_schema(titles_schema())
            .execute(&backend)
            .await
            .expect_err("should fail");
        match err.current_context() {
            LlmError::SchemaViolation { violations } => {
                assert_eq!(violations, &vec!["$.titles: missing required field".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn stream_propagates_backend_rejection() {
        let backend = CannedBackend::new("");
        let result = LlmCall::new("hello").stream(&backend).await;
        assert!(result.is_err());
    }
}
