//! Consulting operations for YouTube creators.
//!
//! This crate turns creator inputs into language-specific prompts, declares
//! the structured reply each operation expects, and decodes the reply:
//!
//! - [`language`]: supported languages and their prompt bundles
//! - [`prompt`]: prompt assembly
//! - [`contract`]: response schemas
//! - [`model`]: input and result types
//! - [`consultant`]: the operations themselves

pub mod consultant;
pub mod contract;
pub mod error;
pub mod format;
pub mod language;
pub mod model;
pub mod prompt;

pub use consultant::Consultant;
pub use error::{ConsultingError, Operation};
pub use language::{Language, PromptBundle};
pub use model::{
    BenchmarkVideoAnalysis, BenchmarkVideoAssessment, ChannelAnalysis, ChannelMetadata,
    ChannelStats, ChannelVideoIdea, ComparativeAnalysis, ConsultingResult, ImprovementAreas,
    OneMillionAnalysis, ScriptOutline, StoryboardScene, UserVideoAssessment, VideoIdea,
    VideoMetadata, VideoProposal, VideoStats,
};
pub use prompt::ConsultingMode;
