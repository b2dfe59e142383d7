//! Response schemas for the structured operations.
//!
//! Counts stated in prose (three titles, ten to fifteen tags) are guidance
//! for the model only. The storyboard scene count is enforced.

use crate::prompt::ConsultingMode;
use creator_boost_ai::ResponseSchema;

/// Number of scenes in a storyboard.
pub const STORYBOARD_SCENES: u32 = 4;

fn text(description: &str) -> ResponseSchema {
    ResponseSchema::string().with_description(description)
}

fn text_list(description: &str) -> ResponseSchema {
    ResponseSchema::array(ResponseSchema::string()).with_description(description)
}

/// Array of `{title, description, tags[]}`.
#[must_use]
pub fn video_ideas() -> ResponseSchema {
    ResponseSchema::array(
        ResponseSchema::object()
            .field("title", text("A catchy, SEO-optimized video title."))
            .field(
                "description",
                text("A brief, engaging description for the video concept."),
            )
            .field(
                "tags",
                text_list("An array of 3-5 relevant keywords or tags for the video."),
            ),
    )
}

/// `{strengths[], weaknesses[], opportunities[], videoIdeas[{title, description}]}`.
#[must_use]
pub fn channel_analysis() -> ResponseSchema {
    ResponseSchema::object()
        .field(
            "strengths",
            text_list("A list of perceived strengths of the channel based on the provided data."),
        )
        .field(
            "weaknesses",
            text_list("A list of potential weaknesses or areas for improvement based on the provided data."),
        )
        .field(
            "opportunities",
            text_list("A list of key growth opportunities for the channel based on the provided data."),
        )
        .field(
            "videoIdeas",
            ResponseSchema::array(
                ResponseSchema::object()
                    .field("title", ResponseSchema::string())
                    .field("description", ResponseSchema::string()),
            )
            .with_description("Three concrete video ideas to capitalize on the opportunities, relevant to the channel's recent content."),
        )
}

fn benchmark_video_analysis() -> ResponseSchema {
    ResponseSchema::object()
        .field(
            "titleHook",
            text("Analysis of what makes the benchmark video's title effective."),
        )
        .field(
            "contentStrategy",
            text("Analysis of the video's content structure and pacing."),
        )
        .field(
            "targetAudience",
            text("A profile of the likely target audience for this video."),
        )
        .field(
            "monetizationPotential",
            text("Analysis of how this video format could be monetized."),
        )
}

fn script_outline() -> ResponseSchema {
    ResponseSchema::object()
        .field("hook", text("A powerful, 15-second opening hook script."))
        .field(
            "introduction",
            text("A brief introduction to the video's topic and value."),
        )
        .field(
            "mainPoints",
            text_list("3-5 bullet points covering the main sections of the video content."),
        )
        .field(
            "callToAction",
            text("A clear call to action (e.g., subscribe, comment, check link)."),
        )
        .field("outro", text("A concluding summary and outro for the video."))
}

fn video_proposal() -> ResponseSchema {
    ResponseSchema::object()
        .field(
            "titles",
            text_list("3 catchy, SEO-optimized alternative video titles."),
        )
        .field(
            "description",
            text("A complete, SEO-optimized YouTube video description using insights from the benchmark video."),
        )
        .field(
            "tags",
            text_list("An array of 10-15 relevant keywords and tags for the video."),
        )
        .field("script", script_outline())
        .field(
            "thumbnailConcepts",
            text_list("2 distinct thumbnail concepts, described in detail including visual elements, text overlays, and emotional tone to maximize click-through rate."),
        )
}

fn comparative_analysis() -> ResponseSchema {
    ResponseSchema::object()
        .field(
            "userVideo",
            ResponseSchema::object()
                .field("strength", text("The single biggest strength of the user's video."))
                .field("weakness", text("The single biggest weakness of the user's video.")),
        )
        .field(
            "benchmarkVideo",
            ResponseSchema::object()
                .field("strength", text("The single biggest strength of the benchmark video."))
                .field(
                    "tacticToAdopt",
                    text("The key strategy from the benchmark video that the user should adopt."),
                ),
        )
        .field(
            "improvementAreas",
            ResponseSchema::object()
                .field("title", text("Specific advice to improve the user's video title."))
                .field(
                    "thumbnail",
                    text("Specific advice to improve the user's thumbnail."),
                )
                .field(
                    "content",
                    text("Specific advice to improve the user's video content/script."),
                ),
        )
}

/// `{benchmarkVideoAnalysis, consultingResult}` with the result shape fixed by
/// `mode`.
#[must_use]
pub fn consulting(mode: ConsultingMode) -> ResponseSchema {
    let consulting_result = match mode {
        ConsultingMode::Blueprint => video_proposal(),
        ConsultingMode::Comparative => comparative_analysis(),
    };

    ResponseSchema::object()
        .field("benchmarkVideoAnalysis", benchmark_video_analysis())
        .field("consultingResult", consulting_result)
}

/// Array of exactly four `{scene, prompt}` with non-empty text.
#[must_use]
pub fn storyboard() -> ResponseSchema {
    ResponseSchema::array(
        ResponseSchema::object()
            .field(
                "scene",
                text("A short title for the key visual scene (e.g., 'Opening Hook', 'Core Concept Demo').")
                    .with_min_length(1),
            )
            .field(
                "prompt",
                text("A detailed, descriptive prompt for an AI image generator to create this scene's visual. It should describe the setting, characters, mood, and camera angle.")
                    .with_min_length(1),
            ),
    )
    .with_exact_items(STORYBOARD_SCENES)
}
