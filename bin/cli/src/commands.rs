//! Command execution.

use crate::cli::{Command, LanguageArg, OutlineArgs};
use crate::error::CliError;
use creator_boost_ai::LlmMessage;
use creator_boost_consulting::{
    ChannelMetadata, Consultant, Language, ScriptOutline, VideoMetadata,
};
use futures::StreamExt;
use rootcause::prelude::{Report, ResultExt};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Runs `command`, writing its result to `out`.
///
/// Structured results are printed as pretty JSON, scripts as plain text, and
/// chat replies increment by increment. Thumbnails are written to their
/// output path.
///
/// # Errors
///
/// Returns an error if an input file is unreadable, the operation fails, or
/// output cannot be written.
pub async fn run<W: Write>(
    command: Command,
    consultant: &Consultant,
    out: &mut W,
) -> Result<(), Report<CliError>> {
    match command {
        Command::Ideas { keyword } => {
            let ideas = consultant
                .keyword_ideas(&keyword)
                .await
                .context(CliError::Command { name: "ideas" })?;
            print_json(out, &ideas)
        }
        Command::Channel { input } => {
            let channel: ChannelMetadata = read_json(&input)?;
            let analysis = consultant
                .channel_analysis(&channel)
                .await
                .context(CliError::Command { name: "channel" })?;
            print_json(out, &analysis)
        }
        Command::Consult {
            benchmark,
            user,
            language,
        } => {
            let benchmark: VideoMetadata = read_json(&benchmark)?;
            let user: Option<VideoMetadata> = user.as_deref().map(read_json).transpose()?;
            let analysis = consultant
                .benchmark_consulting(&benchmark, resolve(&language), user.as_ref())
                .await
                .context(CliError::Command { name: "consult" })?;
            print_json(out, &analysis)
        }
        Command::Script(OutlineArgs {
            outline,
            title,
            language,
        }) => {
            let outline: ScriptOutline = read_json(&outline)?;
            let script = consultant
                .full_script(&outline, &title, resolve(&language))
                .await
                .context(CliError::Command { name: "script" })?;
            writeln!(out, "{script}").map_err(|e| stdout_error(&e))?;
            Ok(())
        }
        Command::Storyboard(OutlineArgs {
            outline,
            title,
            language,
        }) => {
            let outline: ScriptOutline = read_json(&outline)?;
            let scenes = consultant
                .storyboard(&title, &outline, resolve(&language))
                .await
                .context(CliError::Command { name: "storyboard" })?;
            print_json(out, &scenes)
        }
        Command::Thumbnail { concept, out: path } => {
            let image = consultant
                .thumbnail_image(&concept)
                .await
                .context(CliError::Command { name: "thumbnail" })?;
            let bytes = image.decode().context(CliError::DecodeImage)?;
            std::fs::write(&path, &bytes).map_err(|e| CliError::WriteOutput {
                target: path.display().to_string(),
                reason: e.to_string(),
            })?;
            info!(path = %path.display(), bytes = bytes.len(), mime_type = %image.mime_type, "thumbnail written");
            writeln!(out, "{}", path.display()).map_err(|e| stdout_error(&e))?;
            Ok(())
        }
        Command::Chat { message, history } => {
            let history: Vec<LlmMessage> = match history {
                Some(path) => read_json(&path)?,
                None => Vec::new(),
            };
            let mut stream = consultant
                .chat(&history, &message)
                .await
                .context(CliError::Command { name: "chat" })?;
            while let Some(chunk) = stream.next().await {
                let text = chunk.context(CliError::Stream)?;
                write!(out, "{text}").map_err(|e| stdout_error(&e))?;
                out.flush().map_err(|e| stdout_error(&e))?;
            }
            writeln!(out).map_err(|e| stdout_error(&e))?;
            Ok(())
        }
    }
}

fn resolve(arg: &LanguageArg) -> Language {
    let language = Language::from_code(&arg.code);
    if language.code() != arg.code {
        warn!(requested = %arg.code, "unsupported language, using English");
    }
    language
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Report<CliError>> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::ReadInput {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|e| {
        CliError::ParseInput {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}

fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), Report<CliError>> {
    let text = serde_json::to_string_pretty(value).map_err(|e| CliError::WriteOutput {
        target: "stdout".to_string(),
        reason: e.to_string(),
    })?;
    writeln!(out, "{text}").map_err(|e| stdout_error(&e))?;
    Ok(())
}

fn stdout_error(error: &std::io::Error) -> CliError {
    CliError::WriteOutput {
        target: "stdout".to_string(),
        reason: error.to_string(),
    }
}
