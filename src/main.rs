//! workers-preview - Cloudflare Workers preview deployments for CI.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use workers_preview::cli::output;
use workers_preview::cli::{execute, Cli};
use workers_preview::error::{CommandError, ConfigError, Error, SecretError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("WORKERS_PREVIEW_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("workers_preview=debug")
        } else {
            EnvFilter::new("workers_preview=warn")
        }
    });

    // Logs go to stderr so comment output on stdout stays clean
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::Secret(SecretError::NotFound(name)) => {
                Some(format!("export {} before running publish", name))
            }
            Error::Command(CommandError::NotInstalled { program }) => Some(format!(
                "install {} or point --runner at a package runner",
                program
            )),
            Error::Config(ConfigError::SectionMissing { .. }) => {
                Some("check that --environment names an [env.*] section".to_string())
            }
            Error::Config(ConfigError::NotFound(_)) => {
                Some("run from the project root or pass --working-directory".to_string())
            }
            _ => None,
        };

        output::error(error_msg.trim_end());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
