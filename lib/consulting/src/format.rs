//! Text fragments shared by several prompts.

use crate::language::PromptBundle;
use crate::model::{ScriptOutline, VideoMetadata};
use std::fmt::Write as _;

/// Characters of a video description kept in a detail block.
pub const DESCRIPTION_LIMIT: usize = 300;

/// Tags kept in a detail block.
pub const TAG_LIMIT: usize = 10;

/// Parses a count string; absent or malformed input yields zero.
#[must_use]
pub fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}

/// Formats a count with `,` between groups of three digits.
#[must_use]
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Parses then formats a count string.
#[must_use]
pub fn display_count(raw: Option<&str>) -> String {
    format_count(parse_count(raw))
}

/// Renders the labelled detail block for one video.
#[must_use]
pub fn video_details(video: &VideoMetadata, role_label: &str, bundle: &PromptBundle) -> String {
    let labels = &bundle.labels;
    let stats = video.stats.as_ref();

    let description = match video.description.as_deref() {
        Some(text) if !text.is_empty() => text.chars().take(DESCRIPTION_LIMIT).collect(),
        _ => "No description".to_string(),
    };

    let tags = match video.tags.as_deref() {
        Some(tags) if !tags.is_empty() => tags
            .iter()
            .take(TAG_LIMIT)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        _ => "No tags".to_string(),
    };

    format!(
        "\n**{role_label} {details}:**\n\
         - **{title_label}:** {title}\n\
         - **{views_label}:** {views}\n\
         - **{likes_label}:** {likes}\n\
         - **{description_label}:** {description}...\n\
         - **{tags_label}:** {tags}\n",
        details = bundle.details_label,
        title_label = labels.title,
        title = video.title,
        views_label = labels.views,
        views = display_count(stats.and_then(|s| s.view_count.as_deref())),
        likes_label = labels.likes,
        likes = display_count(stats.and_then(|s| s.like_count.as_deref())),
        description_label = labels.description,
        tags_label = labels.tags,
    )
}

/// Renders a title and outline for script and storyboard prompts.
#[must_use]
pub fn outline_block(title: &str, outline: &ScriptOutline) -> String {
    let mut out = format!(
        "**Video Title:** {title}\n\n\
         **Script Outline:**\n\
         - **Hook:** {}\n\
         - **Introduction:** {}\n\
         - **Main Points:** \n",
        outline.hook, outline.introduction
    );
    for point in &outline.main_points {
        let _ = writeln!(out, "  - {point}");
    }
    let _ = write!(
        out,
        "- **Call to Action:** {}\n- **Outro:** {}\n",
        outline.call_to_action, outline.outro
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::model::VideoStats;

    fn video() -> VideoMetadata {
        VideoMetadata {
            title: "Phone Review".to_string(),
            description: Some("Unboxing and first impressions.".to_string()),
            stats: Some(VideoStats {
                view_count: Some("1234567".to_string()),
                like_count: Some("890".to_string()),
            }),
            tags: Some(vec!["phone".to_string(), "review".to_string()]),
        }
    }

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(15000), "15,000");
        assert_eq!(format_count(2_000_000), "2,000,000");
        assert_eq!(format_count(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn malformed_counts_are_zero() {
        assert_eq!(parse_count(None), 0);
        assert_eq!(parse_count(Some("")), 0);
        assert_eq!(parse_count(Some("lots")), 0);
        assert_eq!(parse_count(Some("-5")), 0);
        assert_eq!(parse_count(Some("1.5")), 0);
        assert_eq!(parse_count(Some(" 42 ")), 42);
    }

    #[test]
    fn detail_block_lists_every_field() {
        let block = video_details(&video(), "Benchmark Video", Language::En.bundle());
        assert_eq!(
            block,
            "\n**Benchmark Video Video Details:**\n\
             - **Title:** Phone Review\n\
             - **Views:** 1,234,567\n\
             - **Likes:** 890\n\
             - **Description:** Unboxing and first impressions....\n\
             - **Tags:** phone, review\n"
        );
    }

    #[test]
    fn detail_block_defaults_missing_values() {
        let bare = VideoMetadata {
            title: "Bare".to_string(),
            ..VideoMetadata::default()
        };
        let block = video_details(&bare, "Benchmark Video", Language::En.bundle());
        assert!(block.contains("- **Views:** 0\n"));
        assert!(block.contains("- **Likes:** 0\n"));
        assert!(block.contains("- **Description:** No description...\n"));
        assert!(block.contains("- **Tags:** No tags\n"));

        let empty = VideoMetadata {
            description: Some(String::new()),
            tags: Some(Vec::new()),
            ..bare
        };
        let block = video_details(&empty, "Benchmark Video", Language::En.bundle());
        assert!(block.contains("No description..."));
        assert!(block.contains("No tags"));
    }

    #[test]
    fn detail_block_keeps_description_whitespace() {
        let padded = VideoMetadata {
            description: Some("  Unboxing \n".to_string()),
            ..video()
        };
        let block = video_details(&padded, "Benchmark Video", Language::En.bundle());
        assert!(block.contains("- **Description:**   Unboxing \n...\n"));

        let blank = VideoMetadata {
            description: Some("   ".to_string()),
            ..video()
        };
        let block = video_details(&blank, "Benchmark Video", Language::En.bundle());
        assert!(block.contains("- **Description:**    ...\n"));
    }

    #[test]
    fn detail_block_truncates_description_and_tags() {
        let long = VideoMetadata {
            description: Some("가".repeat(DESCRIPTION_LIMIT + 50)),
            tags: Some((0..15).map(|i| format!("t{i}")).collect()),
            ..video()
        };
        let block = video_details(&long, "벤치마크 영상", Language::Ko.bundle());

        let expected = format!("- **설명:** {}...\n", "가".repeat(DESCRIPTION_LIMIT));
        assert!(block.contains(&expected));
        assert!(block.contains("t9\n"));
        assert!(!block.contains("t10"));
    }

    #[test]
    fn outline_block_bullets_main_points() {
        let outline = ScriptOutline {
            hook: "Is this the best phone?".to_string(),
            introduction: "Who I am".to_string(),
            main_points: vec!["Camera".to_string(), "Battery".to_string()],
            call_to_action: "Subscribe".to_string(),
            outro: "Bye".to_string(),
        };
        let block = outline_block("Phone Review", &outline);
        assert_eq!(
            block,
            "**Video Title:** Phone Review\n\n\
             **Script Outline:**\n\
             - **Hook:** Is this the best phone?\n\
             - **Introduction:** Who I am\n\
             - **Main Points:** \n\
             \x20 - Camera\n\
             \x20 - Battery\n\
             - **Call to Action:** Subscribe\n\
             - **Outro:** Bye\n"
        );
    }
}
