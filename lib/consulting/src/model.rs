//! Inputs supplied by the caller and the structured results returned by the
//! model.
//!
//! Field names serialize in camelCase, matching the keys declared in the
//! response schemas.

use serde::{Deserialize, Serialize};

// Inputs

/// A video as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stats: Option<VideoStats>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Counts arrive as decimal strings and may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStats {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
}

/// A channel with its aggregate counts and recent uploads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMetadata {
    pub title: String,
    #[serde(default)]
    pub stats: ChannelStats,
    #[serde(default)]
    pub videos: Vec<VideoMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    #[serde(default)]
    pub subscriber_count: Option<String>,
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub video_count: Option<String>,
}

/// A script skeleton for a video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptOutline {
    pub hook: String,
    pub introduction: String,
    pub main_points: Vec<String>,
    pub call_to_action: String,
    pub outro: String,
}

// Results

/// A proposed video for a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoIdea {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Strengths, weaknesses, opportunities and ideas for a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub video_ideas: Vec<ChannelVideoIdea>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelVideoIdea {
    pub title: String,
    pub description: String,
}

/// Why the benchmark video works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkVideoAnalysis {
    pub title_hook: String,
    pub content_strategy: String,
    pub target_audience: String,
    pub monetization_potential: String,
}

/// A blueprint for a new video modeled on the benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProposal {
    pub titles: Vec<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub script: ScriptOutline,
    pub thumbnail_concepts: Vec<String>,
}

/// The user's video measured against the benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparativeAnalysis {
    pub user_video: UserVideoAssessment,
    pub benchmark_video: BenchmarkVideoAssessment,
    pub improvement_areas: ImprovementAreas,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserVideoAssessment {
    pub strength: String,
    pub weakness: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkVideoAssessment {
    pub strength: String,
    pub tactic_to_adopt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementAreas {
    pub title: String,
    pub thumbnail: String,
    pub content: String,
}

/// Which consulting variant was produced.
///
/// The variant is decided by the request, never inferred from the reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConsultingResult {
    Blueprint(VideoProposal),
    Comparative(ComparativeAnalysis),
}

/// Result of one-million benchmark consulting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneMillionAnalysis {
    pub benchmark_video_analysis: BenchmarkVideoAnalysis,
    pub consulting_result: ConsultingResult,
}

/// One storyboard frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryboardScene {
    /// Short scene label.
    pub scene: String,
    /// Image-generation prompt for the scene.
    pub prompt: String,
}
