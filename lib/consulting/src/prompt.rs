//! Prompt assembly for every consulting operation.
//!
//! Keyword, channel, thumbnail and chat prompts are fixed English text.
//! Consulting, script and storyboard prompts are assembled from the selected
//! language's [`PromptBundle`].

use crate::format::{display_count, outline_block, video_details};
use crate::language::PromptBundle;
use crate::model::{ChannelMetadata, ScriptOutline, VideoMetadata};
use std::fmt::Write as _;

/// System instruction sent with every chat turn.
pub const CHAT_SYSTEM_INSTRUCTION: &str = "You are 'Creator Boost AI', an expert YouTube consultant. Your goal is to provide actionable, data-driven advice to help content creators grow their channels and monetize their content. Be encouraging, specific, and professional. Use markdown for formatting like lists, bolding, and italics to make your responses easy to read.";

/// Aspect ratio requested for thumbnails.
pub const THUMBNAIL_ASPECT_RATIO: &str = "16:9";

/// Encoding requested for thumbnails.
pub const THUMBNAIL_MIME_TYPE: &str = "image/jpeg";

/// Which benchmark consulting variant to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsultingMode {
    /// Benchmark only: design a new video modeled on it.
    Blueprint,
    /// Benchmark and the user's video: compare and advise.
    Comparative,
}

impl ConsultingMode {
    /// Comparative exactly when a user video is present.
    #[must_use]
    pub fn for_user_video(user_video: Option<&VideoMetadata>) -> Self {
        if user_video.is_some() {
            Self::Comparative
        } else {
            Self::Blueprint
        }
    }
}

#[must_use]
pub fn keyword_ideas(keyword: &str) -> String {
    format!(
        "You are an expert YouTube growth strategist. A user wants to create content about \"{keyword}\". Generate 5 creative, high-engagement video ideas. For each idea, provide a catchy, SEO-optimized title, a brief description, and 3-5 relevant keywords/tags."
    )
}

/// Builds the channel analysis prompt. Only the titles of recent videos are
/// included.
#[must_use]
pub fn channel_analysis(channel: &ChannelMetadata) -> String {
    let stats = &channel.stats;
    let titles = channel
        .videos
        .iter()
        .map(|video| format!("- \"{}\"", video.title))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\nYou are a professional YouTube channel analyst. I will provide you with data fetched directly from the YouTube API.\n\
         Analyze the following channel:\n\
         \n\
         **Channel Name:** {title}\n\
         **Subscribers:** {subscribers}\n\
         **Total Views:** {views}\n\
         **Total Videos:** {videos}\n\
         \n\
         **Recent Video Titles:**\n\
         {titles}\n\
         \n\
         Based *only* on this provided data, perform an expert analysis. Provide:\n\
         {CHANNEL_TASKS}\n",
        title = channel.title,
        subscribers = display_count(stats.subscriber_count.as_deref()),
        views = display_count(stats.view_count.as_deref()),
        videos = display_count(stats.video_count.as_deref()),
    )
}

const CHANNEL_TASKS: &str = "1.  **Perceived Strengths:** At least 3 strengths suggested by the data (e.g., \"Strong subscriber base indicates loyal audience\", \"Consistent uploads based on recent videos\").\n\
2.  **Potential Weaknesses:** At least 3 potential weaknesses (e.g., \"Video titles may lack a clear SEO focus\", \"View count to subscriber ratio could be improved\").\n\
3.  **Key Opportunities for Growth:** At least 3 actionable opportunities (e.g., \"Create a series based on the most popular recent video topics\", \"Collaborate with channels of similar size\").\n\
4.  **Three Concrete Video Ideas:** Provide titles and descriptions for three video ideas that directly capitalize on the opportunities you've identified and are relevant to the recent video titles.";

/// Builds the benchmark consulting prompt.
///
/// The task list is the comparative one exactly when `user_video` is given.
#[must_use]
pub fn consulting(
    benchmark: &VideoMetadata,
    user_video: Option<&VideoMetadata>,
    bundle: &PromptBundle,
) -> String {
    let mut prompt = format!(
        "{}\n\n{}\n\n{}\n",
        bundle.persona,
        bundle.request,
        video_details(benchmark, bundle.benchmark_label, bundle)
    );

    match user_video {
        Some(user_video) => {
            let task = &bundle.comparative_task;
            prompt.push_str(&video_details(user_video, bundle.user_label, bundle));
            let _ = write!(
                prompt,
                "\n{}\n{}\n{}\n{}\n",
                task.heading, task.analyze, task.compare, task.advise
            );
        }
        None => {
            let task = &bundle.blueprint_task;
            let _ = write!(
                prompt,
                "\n{}\n{}\n{}\n",
                task.heading, task.analyze, task.blueprint
            );
        }
    }

    prompt
}

#[must_use]
pub fn full_script(outline: &ScriptOutline, title: &str, bundle: &PromptBundle) -> String {
    format!(
        "\n{}\n\n{}",
        bundle.full_script,
        outline_block(title, outline)
    )
}

#[must_use]
pub fn storyboard(title: &str, outline: &ScriptOutline, bundle: &PromptBundle) -> String {
    format!(
        "\n{}\n\n{}",
        bundle.storyboard,
        outline_block(title, outline)
    )
}

#[must_use]
pub fn thumbnail(concept: &str) -> String {
    format!(
        "Create a cinematic, high-impact YouTube thumbnail based on this concept: \"{concept}\". Ensure it is visually striking, easy to read, and evokes curiosity. Aspect ratio 16:9."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::model::{ChannelStats, VideoStats};

    fn benchmark() -> VideoMetadata {
        VideoMetadata {
            title: "I Tried Every Phone of 2025".to_string(),
            description: Some("Twelve phones, one winner.".to_string()),
            stats: Some(VideoStats {
                view_count: Some("1500000".to_string()),
                like_count: Some("42000".to_string()),
            }),
            tags: Some(vec!["phones".to_string()]),
        }
    }

    fn user_video() -> VideoMetadata {
        VideoMetadata {
            title: "My Phone Thoughts".to_string(),
            ..VideoMetadata::default()
        }
    }

    fn outline() -> ScriptOutline {
        ScriptOutline {
            hook: "Which phone wins?".to_string(),
            introduction: "Twelve phones tested".to_string(),
            main_points: vec!["Camera".to_string(), "Battery".to_string(), "Price".to_string()],
            call_to_action: "Subscribe".to_string(),
            outro: "See you".to_string(),
        }
    }

    #[test]
    fn keyword_prompt_quotes_topic() {
        let prompt = keyword_ideas("home espresso");
        assert!(prompt.contains("content about \"home espresso\""));
        assert!(prompt.contains("Generate 5 creative"));
    }

    #[test]
    fn channel_prompt_embeds_formatted_counts_and_titles() {
        let channel = ChannelMetadata {
            title: "Tech Reviews".to_string(),
            stats: ChannelStats {
                subscriber_count: Some("15000".to_string()),
                view_count: Some("2000000".to_string()),
                video_count: Some("42".to_string()),
            },
            videos: vec![
                VideoMetadata {
                    title: "Phone Review".to_string(),
                    description: Some("never included".to_string()),
                    ..VideoMetadata::default()
                },
                VideoMetadata {
                    title: "Laptop Review".to_string(),
                    ..VideoMetadata::default()
                },
            ],
        };
        let prompt = channel_analysis(&channel);

        assert!(prompt.contains(
            "Analyze the following channel:\n\n\
             **Channel Name:** Tech Reviews\n\
             **Subscribers:** 15,000\n\
             **Total Views:** 2,000,000\n\
             **Total Videos:** 42\n\n\
             **Recent Video Titles:**\n\
             - \"Phone Review\"\n\
             - \"Laptop Review\"\n\n\
             Based *only* on this provided data"
        ));
        assert!(!prompt.contains("never included"));
    }

    #[test]
    fn channel_prompt_lists_labelled_tasks() {
        let prompt = channel_analysis(&ChannelMetadata {
            title: "Tech Reviews".to_string(),
            ..ChannelMetadata::default()
        });

        let labels = [
            "1.  **Perceived Strengths:** At least 3 strengths",
            "2.  **Potential Weaknesses:** At least 3 potential weaknesses",
            "3.  **Key Opportunities for Growth:** At least 3 actionable opportunities",
            "4.  **Three Concrete Video Ideas:** Provide titles and descriptions",
        ];
        let mut previous = 0;
        for label in labels {
            let at = prompt.find(label).expect(label);
            assert!(at > previous, "{label} out of order");
            previous = at;
        }
        assert!(prompt.contains("(e.g., \"Collaborate with channels of similar size\")"));
        assert!(prompt.ends_with(
            "directly capitalize on the opportunities you've identified and are relevant to the recent video titles.\n"
        ));
    }

    #[test]
    fn channel_prompt_with_missing_counts() {
        let channel = ChannelMetadata {
            title: "New Channel".to_string(),
            ..ChannelMetadata::default()
        };
        let prompt = channel_analysis(&channel);
        assert!(prompt.contains("**Subscribers:** 0\n"));
        assert!(prompt.contains("**Recent Video Titles:**\n\n\nBased"));
    }

    #[test]
    fn blueprint_prompt_has_only_blueprint_tasks() {
        let bundle = Language::En.bundle();
        let prompt = consulting(&benchmark(), None, bundle);

        assert!(prompt.starts_with(bundle.persona));
        assert!(prompt.contains("**Benchmark Video Video Details:**"));
        assert!(prompt.contains("- **Views:** 1,500,000"));
        assert!(prompt.contains(bundle.blueprint_task.blueprint));
        assert!(!prompt.contains(bundle.comparative_task.compare));
        assert!(!prompt.contains(bundle.comparative_task.advise));
        assert!(!prompt.contains(bundle.user_label));
    }

    #[test]
    fn comparative_prompt_has_only_comparative_tasks() {
        let bundle = Language::En.bundle();
        let user = user_video();
        let prompt = consulting(&benchmark(), Some(&user), bundle);

        assert!(prompt.contains("**User's Video Video Details:**"));
        assert!(prompt.contains("- **Title:** My Phone Thoughts"));
        assert!(prompt.contains(bundle.comparative_task.compare));
        assert!(prompt.contains(bundle.comparative_task.advise));
        assert!(!prompt.contains(bundle.blueprint_task.blueprint));

        let benchmark_at = prompt.find("Benchmark Video Video Details").expect("benchmark");
        let user_at = prompt.find("User's Video Video Details").expect("user");
        assert!(benchmark_at < user_at);
    }

    #[test]
    fn consulting_prompt_follows_language() {
        for (code, marker) in [
            ("en", "Your response must be in English."),
            ("ko", "응답은 반드시 한국어로"),
            ("ja", "応答は必ず日本語"),
            ("zh", "您的回复必须使用简体中文"),
            ("es", "Tu respuesta debe estar en español."),
            ("fr", "Your response must be in English."),
        ] {
            let bundle = Language::from_code(code).bundle();
            let prompt = consulting(&benchmark(), None, bundle);
            assert!(prompt.contains(marker), "code {code}");
        }
    }

    #[test]
    fn korean_prompt_uses_korean_labels() {
        let bundle = Language::Ko.bundle();
        let user = user_video();
        let prompt = consulting(&benchmark(), Some(&user), bundle);
        assert!(prompt.contains("**벤치마크 영상 상세 정보:**"));
        assert!(prompt.contains("- **조회수:** 1,500,000"));
        assert!(prompt.contains("**과제:**"));
    }

    #[test]
    fn script_and_storyboard_prompts_embed_outline() {
        let bundle = Language::Ja.bundle();
        let script = full_script(&outline(), "Phone Review", bundle);
        let board = storyboard("Phone Review", &outline(), bundle);

        for prompt in [&script, &board] {
            assert!(prompt.contains("**Video Title:** Phone Review"));
            assert!(prompt.contains("  - Battery\n"));
            assert!(prompt.contains("- **Outro:** See you\n"));
        }
        assert!(script.starts_with(&format!("\n{}\n\n", bundle.full_script)));
        assert!(board.starts_with(&format!("\n{}\n\n", bundle.storyboard)));
    }

    #[test]
    fn thumbnail_prompt_wraps_concept() {
        let prompt = thumbnail("shocked face holding two phones");
        assert!(prompt.contains("concept: \"shocked face holding two phones\""));
        assert!(prompt.ends_with("Aspect ratio 16:9."));
    }

    #[test]
    fn mode_follows_user_video_presence() {
        assert_eq!(ConsultingMode::for_user_video(None), ConsultingMode::Blueprint);
        let user = user_video();
        assert_eq!(
            ConsultingMode::for_user_video(Some(&user)),
            ConsultingMode::Comparative
        );
    }
}
