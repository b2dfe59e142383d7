//! Generative backend primitives for creator-boost.
//!
//! This crate provides the pieces every consulting operation is built on:
//!
//! - **Backend**: the [`LlmBackend`] trait and its request/response types
//! - **Gemini**: the REST implementation talking to Gemini and Imagen
//! - **Schema**: declarative response shapes, sent to the model and checked
//!   against what comes back
//! - **LLM Call**: single-shot inference with optional structured output
//! - **Handle**: construct-once backend access shared by every caller

pub mod backend;
pub mod error;
pub mod gemini;
pub mod handle;
pub mod llm_call;
pub mod schema;

pub use backend::{
    GeneratedImage, ImageRequest, ImageResponse, LlmBackend, LlmMessage, LlmRequest,
    LlmResponse, MessageRole, TextStream, TokenUsage,
};
pub use error::LlmError;
pub use gemini::{GeminiBackend, GeminiConfig};
pub use handle::BackendHandle;
pub use llm_call::{LlmCall, LlmCallResult};
pub use schema::{ResponseSchema, SchemaType};
