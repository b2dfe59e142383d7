//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "creator-boost",
    version,
    about = "AI consulting for YouTube creators"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Propose video ideas for a topic.
    Ideas {
        /// Free-text topic, e.g. "home espresso".
        keyword: String,
    },
    /// Analyze a channel from a JSON file of its metadata.
    Channel {
        /// Path to the channel metadata JSON.
        #[arg(long)]
        input: PathBuf,
    },
    /// Consult on a benchmark video, optionally against your own video.
    Consult {
        /// Path to the benchmark video JSON.
        #[arg(long)]
        benchmark: PathBuf,
        /// Path to your video JSON; switches to comparative consulting.
        #[arg(long)]
        user: Option<PathBuf>,
        #[command(flatten)]
        language: LanguageArg,
    },
    /// Expand a script outline into a full script.
    Script(OutlineArgs),
    /// Split a script outline into four storyboard scenes.
    Storyboard(OutlineArgs),
    /// Generate a 16:9 thumbnail image for a concept.
    Thumbnail {
        /// Thumbnail concept.
        concept: String,
        /// Where to write the JPEG.
        #[arg(long, default_value = "thumbnail.jpg")]
        out: PathBuf,
    },
    /// Ask the assistant a question, streaming the reply.
    Chat {
        /// The message to send.
        message: String,
        /// Path to a JSON array of earlier turns.
        #[arg(long)]
        history: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct OutlineArgs {
    /// Path to the script outline JSON.
    #[arg(long)]
    pub outline: PathBuf,
    /// Video title.
    #[arg(long)]
    pub title: String,
    #[command(flatten)]
    pub language: LanguageArg,
}

#[derive(Args, Debug)]
pub struct LanguageArg {
    /// Response language code: en, ko, ja, zh or es.
    #[arg(long = "language", short = 'l', default_value = "en")]
    pub code: String,
}
