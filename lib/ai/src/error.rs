//! Error types for the AI crate.
//!
//! `LlmError` is the lowest layer of the rootcause chain. Backends return
//! `Report<LlmError>` and callers add their own context with `.context()`.

use std::fmt;

/// Errors from generative backend operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// The credential could not be used to build a client.
    InvalidCredential { reason: String },
    /// Invalid configuration.
    InvalidConfig { reason: String },
    /// The request could not be sent or the transport failed.
    RequestFailed { reason: String },
    /// The remote service answered with a non-success status.
    HttpStatus { status: u16, body: String },
    /// Rate limit or quota exceeded.
    RateLimited { retry_after_secs: Option<u64> },
    /// The remote service refused to answer the prompt.
    Blocked { reason: String },
    /// Response text could not be parsed.
    ResponseParseFailed { reason: String },
    /// Parsed response does not match the declared schema.
    SchemaViolation { violations: Vec<String> },
    /// The token stream broke off mid-response.
    StreamFailed { reason: String },
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredential { reason } => {
                write!(f, "invalid credential: {reason}")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid LLM configuration: {reason}")
            }
            Self::RequestFailed { reason } => {
                write!(f, "LLM request failed: {reason}")
            }
            Self::HttpStatus { status, body } => {
                write!(f, "LLM service returned HTTP {status}: {body}")
            }
            Self::RateLimited { retry_after_secs } => {
                if let Some(secs) = retry_after_secs {
                    write!(f, "rate limited, retry after {secs}s")
                } else {
                    write!(f, "rate limited")
                }
            }
            Self::Blocked { reason } => {
                write!(f, "prompt blocked by the LLM service: {reason}")
            }
            Self::ResponseParseFailed { reason } => {
                write!(f, "failed to parse LLM response: {reason}")
            }
            Self::SchemaViolation { violations } => {
                write!(
                    f,
                    "LLM response does not match the declared schema: {}",
                    violations.join("; ")
                )
            }
            Self::StreamFailed { reason } => {
                write!(f, "LLM response stream failed: {reason}")
            }
        }
    }
}

impl std::error::Error for LlmError {}
