//! Generative backend abstraction.
//!
//! Every consulting operation talks to the remote model through
//! [`LlmBackend`], so tests can substitute a scripted backend for the real
//! Gemini client.

use crate::error::LlmError;
use crate::schema::ResponseSchema;
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use futures::stream::BoxStream;
use rootcause::prelude::Report;
use serde::{Deserialize, Serialize};

/// A live stream of text increments from the remote model.
///
/// Dropping the stream cancels the underlying request.
pub type TextStream = BoxStream<'static, Result<String, Report<LlmError>>>;

/// A text generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    /// The prompt to send as the final user turn.
    pub prompt: String,
    /// System instruction, if any.
    pub system: Option<String>,
    /// Earlier conversation turns, replayed before the prompt.
    pub context: Vec<LlmMessage>,
    /// Response shape the model must produce.
    pub output_schema: Option<ResponseSchema>,
}

impl LlmRequest {
    /// Creates a new simple request with just a prompt.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
            context: Vec::new(),
            output_schema: None,
        }
    }

    /// Adds a system instruction.
    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Adds earlier conversation turns.
    #[must_use]
    pub fn with_context(mut self, context: Vec<LlmMessage>) -> Self {
        self.context = context;
        self
    }

    /// Adds a response schema for structured output.
    #[must_use]
    pub fn with_output_schema(mut self, schema: ResponseSchema) -> Self {
        self.output_schema = Some(schema);
        self
    }
}

/// A turn in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmMessage {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The text of the turn.
    pub content: String,
}

impl LlmMessage {
    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// The role of a message sender.
///
/// Gemini calls the assistant side `model`; both spellings are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// User/human turn.
    User,
    /// Model turn.
    #[serde(alias = "model")]
    Assistant,
}

/// A text generation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    /// The generated text.
    pub content: String,
    /// Token usage statistics.
    pub usage: TokenUsage,
    /// Model that generated the response.
    pub model: String,
}

/// Token usage statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of input tokens.
    pub input_tokens: u32,
    /// Number of output tokens.
    pub output_tokens: u32,
}

impl TokenUsage {
    /// Returns the total number of tokens.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// An image generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    /// Full prompt describing the image.
    pub prompt: String,
    /// How many images to ask for.
    pub number_of_images: u32,
    /// Encoding of the returned images.
    pub output_mime_type: String,
    /// Aspect ratio such as `16:9`.
    pub aspect_ratio: String,
}

impl ImageRequest {
    /// Creates a request for a single JPEG image in 1:1.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            number_of_images: 1,
            output_mime_type: "image/jpeg".to_string(),
            aspect_ratio: "1:1".to_string(),
        }
    }

    /// Sets the aspect ratio.
    #[must_use]
    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = aspect_ratio.into();
        self
    }

    /// Sets the output encoding.
    #[must_use]
    pub fn with_output_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.output_mime_type = mime_type.into();
        self
    }
}

/// Images returned by the remote service, in the order produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageResponse {
    /// Generated images. May be empty when every candidate was filtered.
    pub images: Vec<GeneratedImage>,
    /// Model that generated the images.
    pub model: String,
}

/// A single generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Base64-encoded image bytes, exactly as returned by the service.
    pub image_bytes: String,
    /// Encoding of the image.
    pub mime_type: String,
}

impl GeneratedImage {
    /// Decodes the base64 payload into raw image bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, Report<LlmError>> {
        BASE64.decode(self.image_bytes.as_bytes()).map_err(|e| {
            LlmError::ResponseParseFailed {
                reason: format!("image payload is not valid base64: {e}"),
            }
            .into()
        })
    }
}

/// Trait for generative backends.
///
/// Implementations are shared across concurrent callers behind an `Arc`
/// and must not hold per-request state.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Generates a single, complete text response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is unusable.
    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, Report<LlmError>>;

    /// Starts a streamed text response.
    ///
    /// Resolves once the remote service has accepted the request; text
    /// increments are delivered through the returned stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is rejected before streaming starts.
    async fn stream(&self, request: &LlmRequest) -> Result<TextStream, Report<LlmError>>;

    /// Generates images from a prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn generate_images(
        &self,
        request: &ImageRequest,
    ) -> Result<ImageResponse, Report<LlmError>>;

    /// Returns the text model name.
    fn model(&self) -> &str;
}
