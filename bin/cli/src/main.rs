use clap::Parser;
use creator_boost_ai::BackendHandle;
use creator_boost_cli::{Cli, CliConfig, CliError, commands};
use creator_boost_consulting::Consultant;
use creator_boost_core::Result;
use rootcause::prelude::ResultExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env()?;
    tracing::debug!(
        text_model = %config.gemini.text_model,
        image_model = %config.gemini.image_model,
        "loaded configuration"
    );

    let handle = BackendHandle::gemini(config.gemini);
    let consultant = Consultant::from_handle(&handle, &config.api_key).context(CliError::Setup)?;

    let mut stdout = std::io::stdout();
    commands::run(cli.command, &consultant, &mut stdout).await
}
