//! Error types for the command-line front end.

use std::fmt;
use std::path::PathBuf;

/// Errors from running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Configuration could not be loaded.
    Config { reason: String },
    /// The consultant could not be set up.
    Setup,
    /// An input file could not be read.
    ReadInput { path: PathBuf, reason: String },
    /// An input file did not contain the expected JSON.
    ParseInput { path: PathBuf, reason: String },
    /// A consulting operation failed.
    Command { name: &'static str },
    /// The generated image payload could not be decoded.
    DecodeImage,
    /// The chat reply broke off.
    Stream,
    /// Output could not be written.
    WriteOutput { target: String, reason: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { reason } => write!(f, "failed to load configuration: {reason}"),
            Self::Setup => write!(f, "failed to set up the consultant"),
            Self::ReadInput { path, reason } => {
                write!(f, "failed to read {}: {reason}", path.display())
            }
            Self::ParseInput { path, reason } => {
                write!(f, "invalid JSON in {}: {reason}", path.display())
            }
            Self::Command { name } => write!(f, "{name} command failed"),
            Self::DecodeImage => write!(f, "failed to decode the generated image"),
            Self::Stream => write!(f, "chat stream failed"),
            Self::WriteOutput { target, reason } => {
                write!(f, "failed to write {target}: {reason}")
            }
        }
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CliError::ParseInput {
            path: PathBuf::from("channel.json"),
            reason: "expected value".to_string(),
        };
        assert_eq!(err.to_string(), "invalid JSON in channel.json: expected value");
        assert_eq!(
            CliError::Command { name: "storyboard" }.to_string(),
            "storyboard command failed"
        );
    }
}
