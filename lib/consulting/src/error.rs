//! Error types for the consulting crate.
//!
//! `ConsultingError` wraps a `Report<LlmError>` from the ai crate, naming the
//! operation that failed:
//! - `BackendUnavailable`: the backend could not be constructed
//! - `RequestFailed`: the remote call failed or refused the prompt
//! - `InvalidResponse`: the reply did not parse or match its schema
//! - `NoImageGenerated`: image generation returned nothing

use creator_boost_ai::LlmError;
use std::fmt;

/// The consulting operation an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    KeywordIdeas,
    ChannelAnalysis,
    BenchmarkConsulting,
    FullScript,
    Storyboard,
    ThumbnailImage,
    Chat,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::KeywordIdeas => "keyword ideas",
            Self::ChannelAnalysis => "channel analysis",
            Self::BenchmarkConsulting => "benchmark consulting",
            Self::FullScript => "full script",
            Self::Storyboard => "storyboard",
            Self::ThumbnailImage => "thumbnail image",
            Self::Chat => "chat",
        };
        f.write_str(name)
    }
}

/// Errors from consulting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsultingError {
    /// The generative backend could not be constructed.
    BackendUnavailable,
    /// The remote call failed.
    RequestFailed { operation: Operation },
    /// The reply was not the declared structure.
    InvalidResponse { operation: Operation },
    /// Image generation succeeded but produced no image.
    NoImageGenerated,
}

impl ConsultingError {
    /// Classifies a backend failure for `operation`.
    #[must_use]
    pub fn from_llm(operation: Operation, error: &LlmError) -> Self {
        match error {
            LlmError::ResponseParseFailed { .. } | LlmError::SchemaViolation { .. } => {
                Self::InvalidResponse { operation }
            }
            _ => Self::RequestFailed { operation },
        }
    }
}

impl fmt::Display for ConsultingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BackendUnavailable => write!(f, "generative backend unavailable"),
            Self::RequestFailed { operation } => write!(f, "{operation} request failed"),
            Self::InvalidResponse { operation } => {
                write!(f, "{operation} returned an invalid response")
            }
            Self::NoImageGenerated => write!(f, "Image generation failed to produce an image."),
        }
    }
}

impl std::error::Error for ConsultingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_shape_failures() {
        let parse = LlmError::ResponseParseFailed {
            reason: "eof".to_string(),
        };
        let schema = LlmError::SchemaViolation {
            violations: vec!["$.titles: missing required field".to_string()],
        };
        let status = LlmError::HttpStatus {
            status: 500,
            body: String::new(),
        };

        assert_eq!(
            ConsultingError::from_llm(Operation::Storyboard, &parse),
            ConsultingError::InvalidResponse {
                operation: Operation::Storyboard
            }
        );
        assert_eq!(
            ConsultingError::from_llm(Operation::Storyboard, &schema),
            ConsultingError::InvalidResponse {
                operation: Operation::Storyboard
            }
        );
        assert_eq!(
            ConsultingError::from_llm(Operation::Chat, &status),
            ConsultingError::RequestFailed {
                operation: Operation::Chat
            }
        );
    }

    #[test]
    fn error_display() {
        let err = ConsultingError::InvalidResponse {
            operation: Operation::ChannelAnalysis,
        };
        assert_eq!(err.to_string(), "channel analysis returned an invalid response");
        assert_eq!(
            ConsultingError::NoImageGenerated.to_string(),
            "Image generation failed to produce an image."
        );
    }
}
