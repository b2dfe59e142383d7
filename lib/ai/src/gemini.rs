//! Gemini REST backend.
//!
//! Text goes through `generateContent` / `streamGenerateContent` and images
//! through the Imagen `predict` endpoint, all authenticated with the
//! `x-goog-api-key` header.

use crate::backend::{
    GeneratedImage, ImageRequest, ImageResponse, LlmBackend, LlmMessage, LlmRequest, LlmResponse,
    MessageRole, TextStream, TokenUsage,
};
use crate::error::LlmError;
use crate::schema::ResponseSchema;
use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::BoxStream;
use reqwest::StatusCode;
use reqwest::header::RETRY_AFTER;
use rootcause::prelude::Report;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Configuration for the Gemini backend.
///
/// Every field has a default, so an empty config source is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Base URL of the Generative Language API.
    /// Default: "https://generativelanguage.googleapis.com/v1beta"
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used for text and chat.
    /// Default: "gemini-2.5-flash"
    #[serde(default = "default_text_model")]
    pub text_model: String,
    /// Model used for image generation.
    /// Default: "imagen-4.0-generate-001"
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Sampling temperature sent with every text request.
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Output token limit sent with every text request.
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "imagen-4.0-generate-001".to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl GeminiConfig {
    /// Points the backend at a different API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{model}:{method}",
            self.base_url.trim_end_matches('/')
        )
    }
}

/// Generative backend backed by the Gemini REST API.
#[derive(Clone)]
pub struct GeminiBackend {
    http: reqwest::Client,
    api_key: String,
    config: GeminiConfig,
}

impl std::fmt::Debug for GeminiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiBackend")
            .field("api_key", &"<redacted>")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GeminiBackend {
    /// Creates a backend for the given API key.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredential` if the key is empty or cannot be sent as a
    /// header, and `InvalidConfig` if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, config: GeminiConfig) -> Result<Self, Report<LlmError>> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(LlmError::InvalidCredential {
                reason: "API key is empty".to_string(),
            }
            .into());
        }
        if !api_key.chars().all(|c| c.is_ascii_graphic()) {
            return Err(LlmError::InvalidCredential {
                reason: "API key contains whitespace or non-ASCII characters".to_string(),
            }
            .into());
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::InvalidConfig {
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            api_key,
            config,
        })
    }

    fn content_request(&self, request: &LlmRequest) -> GenerateContentRequest {
        let mut contents: Vec<Content> = request.context.iter().map(Content::from_message).collect();
        contents.push(Content::user(&request.prompt));

        let generation_config = GenerationConfig {
            response_mime_type: request
                .output_schema
                .as_ref()
                .map(|_| "application/json".to_string()),
            response_schema: request.output_schema.clone(),
            temperature: self.config.temperature,
            max_output_tokens: self.config.max_output_tokens,
        };

        GenerateContentRequest {
            contents,
            system_instruction: request.system.as_deref().map(Content::system),
            generation_config: (!generation_config.is_empty()).then_some(generation_config),
        }
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<reqwest::Response, Report<LlmError>> {
        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed {
                reason: e.to_string(),
            })?;

        check_status(response).await
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, Report<LlmError>> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok());
        return Err(LlmError::RateLimited { retry_after_secs }.into());
    }

    let body = response.text().await.unwrap_or_default();
    Err(LlmError::HttpStatus {
        status: status.as_u16(),
        body,
    }
    .into())
}

#[async_trait]
impl LlmBackend for GeminiBackend {
    #[instrument(skip_all, fields(model = %self.config.text_model))]
    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, Report<LlmError>> {
        let url = self.config.endpoint(&self.config.text_model, "generateContent");
        let body = self.content_request(request);
        debug!(
            turns = body.contents.len(),
            structured = request.output_schema.is_some(),
            "sending generateContent request"
        );

        let response: GenerateContentResponse = self
            .post(&url, &body)
            .await?
            .json()
            .await
            .map_err(|e| LlmError::ResponseParseFailed {
                reason: e.to_string(),
            })?;

        if response.candidates.is_empty()
            && let Some(reason) = response
                .prompt_feedback
                .as_ref()
                .and_then(|feedback| feedback.block_reason.clone())
        {
            return Err(LlmError::Blocked { reason }.into());
        }

        let usage = response.usage();
        Ok(LlmResponse {
            content: response.text(),
            usage,
            model: response
                .model_version
                .unwrap_or_else(|| self.config.text_model.clone()),
        })
    }

    #[instrument(skip_all, fields(model = %self.config.text_model))]
    async fn stream(&self, request: &LlmRequest) -> Result<TextStream, Report<LlmError>> {
        let url = format!(
            "{}?alt=sse",
            self.config
                .endpoint(&self.config.text_model, "streamGenerateContent")
        );
        let body = self.content_request(request);
        debug!(turns = body.contents.len(), "opening streamGenerateContent");

        let response = self.post(&url, &body).await?;
        let chunks = response
            .bytes_stream()
            .map(|chunk| chunk.map(|bytes| bytes.to_vec()))
            .boxed();

        Ok(sse_text_stream(chunks))
    }

    #[instrument(skip_all, fields(model = %self.config.image_model))]
    async fn generate_images(
        &self,
        request: &ImageRequest,
    ) -> Result<ImageResponse, Report<LlmError>> {
        let url = self.config.endpoint(&self.config.image_model, "predict");
        let body = PredictRequest::from(request);

        let response: PredictResponse = self
            .post(&url, &body)
            .await?
            .json()
            .await
            .map_err(|e| LlmError::ResponseParseFailed {
                reason: e.to_string(),
            })?;

        let images: Vec<GeneratedImage> = response
            .predictions
            .into_iter()
            .filter_map(|prediction| {
                let image_bytes = prediction.bytes_base64_encoded?;
                Some(GeneratedImage {
                    image_bytes,
                    mime_type: prediction
                        .mime_type
                        .unwrap_or_else(|| request.output_mime_type.clone()),
                })
            })
            .collect();
        debug!(image_count = images.len(), "predict returned");

        Ok(ImageResponse {
            images,
            model: self.config.image_model.clone(),
        })
    }

    fn model(&self) -> &str {
        &self.config.text_model
    }
}

type ByteChunks = BoxStream<'static, Result<Vec<u8>, reqwest::Error>>;

struct SseState {
    chunks: ByteChunks,
    buffer: Vec<u8>,
    pending: VecDeque<Result<String, Report<LlmError>>>,
    finished: bool,
}

impl SseState {
    fn drain_lines(&mut self) {
        while let Some(end) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=end).collect();
            self.push_line(&String::from_utf8_lossy(&line));
        }
    }

    fn push_line(&mut self, line: &str) {
        if let Some(item) = parse_sse_line(line) {
            self.pending.push_back(item);
        }
    }
}

/// Turns an SSE byte stream into text increments.
fn sse_text_stream(chunks: ByteChunks) -> TextStream {
    let state = SseState {
        chunks,
        buffer: Vec::new(),
        pending: VecDeque::new(),
        finished: false,
    };

    futures::stream::unfold(state, |mut state| async move {
        loop {
            if let Some(item) = state.pending.pop_front() {
                return Some((item, state));
            }
            if state.finished {
                return None;
            }
            match state.chunks.next().await {
                Some(Ok(chunk)) => {
                    state.buffer.extend_from_slice(&chunk);
                    state.drain_lines();
                }
                Some(Err(e)) => {
                    state.finished = true;
                    state.pending.push_back(Err(LlmError::StreamFailed {
                        reason: e.to_string(),
                    }
                    .into()));
                }
                None => {
                    state.finished = true;
                    let rest = std::mem::take(&mut state.buffer);
                    state.push_line(&String::from_utf8_lossy(&rest));
                }
            }
        }
    })
    .boxed()
}

/// Extracts the text increment carried by one SSE line.
///
/// Returns `None` for blank lines, comments, non-data fields and events
/// without text.
fn parse_sse_line(line: &str) -> Option<Result<String, Report<LlmError>>> {
    let payload = line.trim_end_matches(['\r', '\n']).strip_prefix("data:")?.trim();
    if payload.is_empty() || payload == "[DONE]" {
        return None;
    }

    match serde_json::from_str::<GenerateContentResponse>(payload) {
        Ok(event) => {
            let text = event.text();
            (!text.is_empty()).then_some(Ok(text))
        }
        Err(e) => Some(Err(LlmError::StreamFailed {
            reason: format!("malformed stream event: {e}"),
        }
        .into())),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn user(text: &str) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::text(text)],
        }
    }

    fn system(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }

    fn from_message(message: &LlmMessage) -> Self {
        let role = match message.role {
            MessageRole::User => "user",
            MessageRole::Assistant => "model",
        };
        Self {
            role: Some(role.to_string()),
            parts: vec![Part::text(&message.content)],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing)]
    thought: bool,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            thought: false,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<ResponseSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    fn is_empty(&self) -> bool {
        self.response_mime_type.is_none()
            && self.response_schema.is_none()
            && self.temperature.is_none()
            && self.max_output_tokens.is_none()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, skipping thought parts.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter(|part| !part.thought)
                    .filter_map(|part| part.text.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn usage(&self) -> TokenUsage {
        self.usage_metadata
            .as_ref()
            .map(|usage| TokenUsage {
                input_tokens: usage.prompt_token_count,
                output_tokens: usage.candidates_token_count,
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<PredictInstance>,
    parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
    aspect_ratio: String,
    output_options: OutputOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputOptions {
    mime_type: String,
}

impl From<&ImageRequest> for PredictRequest {
    fn from(request: &ImageRequest) -> Self {
        Self {
            instances: vec![PredictInstance {
                prompt: request.prompt.clone(),
            }],
            parameters: PredictParameters {
                sample_count: request.number_of_images.max(1),
                aspect_ratio: request.aspect_ratio.clone(),
                output_options: OutputOptions {
                    mime_type: request.output_mime_type.clone(),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
}
