//! The consulting operations.
//!
//! Each operation is a single stateless round trip: build the prompt, attach
//! the response schema, call the backend, decode the reply. Nothing is
//! retried or cached.

use crate::contract;
use crate::error::{ConsultingError, Operation};
use crate::language::Language;
use crate::model::{
    BenchmarkVideoAnalysis, ChannelAnalysis, ChannelMetadata, ConsultingResult,
    OneMillionAnalysis, ScriptOutline, StoryboardScene, VideoIdea, VideoMetadata,
};
use crate::prompt::{self, ConsultingMode};
use creator_boost_ai::{
    BackendHandle, GeneratedImage, ImageRequest, LlmBackend, LlmCall, LlmCallResult, LlmError,
    LlmMessage, TextStream,
};
use rootcause::prelude::{Report, ResultExt};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Runs consulting operations against a shared generative backend.
#[derive(Clone)]
pub struct Consultant {
    backend: Arc<dyn LlmBackend>,
}

impl Consultant {
    #[must_use]
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self { backend }
    }

    /// Takes the backend from `handle`, constructing it from `credential` on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns `BackendUnavailable` if the backend cannot be constructed.
    pub fn from_handle(
        handle: &BackendHandle,
        credential: &str,
    ) -> Result<Self, Report<ConsultingError>> {
        let backend = handle
            .get_or_init(credential)
            .context(ConsultingError::BackendUnavailable)?;
        Ok(Self::new(backend))
    }

    /// Proposes video ideas for a free-text topic.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the reply is not a list of ideas.
    #[instrument(skip_all, fields(operation = %Operation::KeywordIdeas))]
    pub async fn keyword_ideas(
        &self,
        keyword: &str,
    ) -> Result<Vec<VideoIdea>, Report<ConsultingError>> {
        let call = LlmCall::new(prompt::keyword_ideas(keyword))
            .with_output_schema(contract::video_ideas());
        let result = self.run(Operation::KeywordIdeas, &call).await?;
        decode(Operation::KeywordIdeas, &result)
    }

    /// Analyzes a channel from its counts and recent video titles.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the reply is not an analysis.
    #[instrument(skip_all, fields(operation = %Operation::ChannelAnalysis, channel = %channel.title))]
    pub async fn channel_analysis(
        &self,
        channel: &ChannelMetadata,
    ) -> Result<ChannelAnalysis, Report<ConsultingError>> {
        let call = LlmCall::new(prompt::channel_analysis(channel))
            .with_output_schema(contract::channel_analysis());
        let result = self.run(Operation::ChannelAnalysis, &call).await?;
        decode(Operation::ChannelAnalysis, &result)
    }

    /// Consults on a benchmark video.
    ///
    /// Without `user_video` the result is a blueprint for a new video; with it,
    /// a comparison of the two.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the reply does not match the
    /// requested variant.
    #[instrument(skip_all, fields(operation = %Operation::BenchmarkConsulting, %language))]
    pub async fn benchmark_consulting(
        &self,
        benchmark: &VideoMetadata,
        language: Language,
        user_video: Option<&VideoMetadata>,
    ) -> Result<OneMillionAnalysis, Report<ConsultingError>> {
        const OPERATION: Operation = Operation::BenchmarkConsulting;

        let mode = ConsultingMode::for_user_video(user_video);
        debug!(?mode, "selected consulting mode");

        let call = LlmCall::new(prompt::consulting(benchmark, user_video, language.bundle()))
            .with_output_schema(contract::consulting(mode));
        let result = self.run(OPERATION, &call).await?;

        let raw: RawOneMillionAnalysis = decode(OPERATION, &result)?;
        let consulting_result = match mode {
            ConsultingMode::Blueprint => {
                ConsultingResult::Blueprint(from_json(OPERATION, raw.consulting_result)?)
            }
            ConsultingMode::Comparative => {
                ConsultingResult::Comparative(from_json(OPERATION, raw.consulting_result)?)
            }
        };

        Ok(OneMillionAnalysis {
            benchmark_video_analysis: raw.benchmark_video_analysis,
            consulting_result,
        })
    }

    /// Expands an outline into a complete script.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    #[instrument(skip_all, fields(operation = %Operation::FullScript, %language))]
    pub async fn full_script(
        &self,
        outline: &ScriptOutline,
        title: &str,
        language: Language,
    ) -> Result<String, Report<ConsultingError>> {
        let call = LlmCall::new(prompt::full_script(outline, title, language.bundle()));
        let result = self.run(Operation::FullScript, &call).await?;
        Ok(result.content)
    }

    /// Splits an outline into four storyboard scenes.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the reply is not exactly four
    /// scenes with non-empty text.
    #[instrument(skip_all, fields(operation = %Operation::Storyboard, %language))]
    pub async fn storyboard(
        &self,
        title: &str,
        outline: &ScriptOutline,
        language: Language,
    ) -> Result<Vec<StoryboardScene>, Report<ConsultingError>> {
        let call = LlmCall::new(prompt::storyboard(title, outline, language.bundle()))
            .with_output_schema(contract::storyboard());
        let result = self.run(Operation::Storyboard, &call).await?;
        decode(Operation::Storyboard, &result)
    }

    /// Generates a 16:9 thumbnail for a concept.
    ///
    /// Returns the first image with its base64 payload unmodified.
    ///
    /// # Errors
    ///
    /// Returns `NoImageGenerated` if the service returned no image, or an
    /// error if the call fails.
    #[instrument(skip_all, fields(operation = %Operation::ThumbnailImage))]
    pub async fn thumbnail_image(
        &self,
        concept: &str,
    ) -> Result<GeneratedImage, Report<ConsultingError>> {
        let request = ImageRequest::new(prompt::thumbnail(concept))
            .with_aspect_ratio(prompt::THUMBNAIL_ASPECT_RATIO)
            .with_output_mime_type(prompt::THUMBNAIL_MIME_TYPE);

        let response = lift(
            Operation::ThumbnailImage,
            self.backend.generate_images(&request).await,
        )?;
        debug!(images = response.images.len(), model = %response.model, "image generation completed");

        response
            .images
            .into_iter()
            .next()
            .ok_or_else(|| ConsultingError::NoImageGenerated.into())
    }

    /// Sends `message` after replaying `history` and returns the reply as a
    /// live stream.
    ///
    /// The history is owned by the caller and is not modified.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be started. Failures after that
    /// arrive as items of the stream.
    #[instrument(skip_all, fields(operation = %Operation::Chat, history_turns = history.len()))]
    pub async fn chat(
        &self,
        history: &[LlmMessage],
        message: &str,
    ) -> Result<TextStream, Report<ConsultingError>> {
        let call = LlmCall::new(message)
            .with_system_prompt(prompt::CHAT_SYSTEM_INSTRUCTION)
            .with_history(history.to_vec());
        lift(Operation::Chat, call.stream(self.backend.as_ref()).await)
    }

    async fn run(
        &self,
        operation: Operation,
        call: &LlmCall,
    ) -> Result<LlmCallResult, Report<ConsultingError>> {
        lift(operation, call.execute(self.backend.as_ref()).await)
    }
}

impl std::fmt::Debug for Consultant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Consultant")
            .field("model", &self.backend.model())
            .finish()
    }
}

/// The consulting reply before its result variant is resolved.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOneMillionAnalysis {
    benchmark_video_analysis: BenchmarkVideoAnalysis,
    consulting_result: JsonValue,
}

/// Adds the consulting context matching the backend failure.
fn lift<T>(
    operation: Operation,
    result: Result<T, Report<LlmError>>,
) -> Result<T, Report<ConsultingError>> {
    match result {
        Ok(value) => Ok(value),
        Err(report) => {
            let context = ConsultingError::from_llm(operation, report.current_context());
            Err(report).context(context)
        }
    }
}

fn decode<T: DeserializeOwned>(
    operation: Operation,
    result: &LlmCallResult,
) -> Result<T, Report<ConsultingError>> {
    lift(operation, result.deserialize())
}

fn from_json<T: DeserializeOwned>(
    operation: Operation,
    value: JsonValue,
) -> Result<T, Report<ConsultingError>> {
    lift(
        operation,
        serde_json::from_value(value).map_err(|e| {
            LlmError::ResponseParseFailed {
                reason: e.to_string(),
            }
            .into()
        }),
    )
}
