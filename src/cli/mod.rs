//! Command-line interface.

pub mod comment;
pub mod completions;
pub mod output;
pub mod publish;
pub mod teardown;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::Config;
use crate::core::manifest::Strategy;
use crate::core::namespace::NamespaceSource;
use crate::core::teardown::Mode;
use crate::core::wrangler::Credentials;
use crate::error::Result;

/// workers-preview - Cloudflare Workers preview deployments for CI.
#[derive(Parser)]
#[command(
    name = "workers-preview",
    about = "Publish and tear down Cloudflare Workers preview deployments",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a settings file (default: .workers-preview.toml in the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Register a preview environment, publish it and upload its secrets
    Publish(PublishArgs),

    /// Delete a preview's worker script and its assets namespace
    Teardown(TeardownArgs),

    /// Print pull-request comment fragments
    Comment {
        #[command(subcommand)]
        action: CommentAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Cloudflare account credentials.
#[derive(Args, Clone)]
pub struct CredentialArgs {
    /// Cloudflare account id
    #[arg(long, env = "CF_ACCOUNT_ID", hide_env_values = true)]
    pub account_id: String,

    /// Cloudflare API token
    #[arg(long, env = "CF_API_TOKEN", hide_env_values = true)]
    pub api_token: String,
}

impl From<CredentialArgs> for Credentials {
    fn from(args: CredentialArgs) -> Self {
        Self {
            account_id: args.account_id,
            api_token: args.api_token,
        }
    }
}

/// Overrides for how wrangler is launched.
#[derive(Args, Clone, Default)]
pub struct WranglerArgs {
    /// Package runner used to launch wrangler (default: npx)
    #[arg(long, env = "WORKERS_PREVIEW_RUNNER", value_name = "PROGRAM")]
    pub runner: Option<String>,

    /// Wrangler package spec (default: @cloudflare/wrangler)
    #[arg(long, env = "WORKERS_PREVIEW_PACKAGE", value_name = "SPEC")]
    pub package: Option<String>,
}

impl WranglerArgs {
    pub fn runner(&self, config: &Config) -> String {
        self.runner.clone().unwrap_or_else(|| config.runner())
    }

    pub fn package(&self, config: &Config) -> String {
        self.package.clone().unwrap_or_else(|| config.package())
    }
}

#[derive(Args)]
pub struct PublishArgs {
    /// Name to publish the preview under (e.g. pr-42)
    #[arg(long)]
    pub deploy_name: String,

    /// Existing [env.*] section used as the template (default: preview)
    #[arg(long)]
    pub environment: Option<String>,

    /// Directory containing wrangler.toml
    #[arg(long, default_value = ".")]
    pub working_directory: PathBuf,

    /// How the environment is registered in wrangler.toml
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Fail instead of warning when wrangler.toml is left unchanged
    #[arg(long)]
    pub strict_config: bool,

    /// Secret to upload, read from the environment variable of the same name
    #[arg(long = "secret", value_name = "NAME")]
    pub secrets: Vec<String>,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(flatten)]
    pub wrangler: WranglerArgs,
}

#[derive(Args)]
pub struct TeardownArgs {
    /// Name the preview was published under
    #[arg(long)]
    pub deploy_name: String,

    /// Directory wrangler runs in
    #[arg(long, default_value = ".")]
    pub working_directory: PathBuf,

    /// What to delete
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Where the namespace list comes from
    #[arg(long, value_enum)]
    pub namespace_source: Option<NamespaceSource>,

    /// Cloudflare API root
    #[arg(long, env = "CF_API_BASE", value_name = "URL")]
    pub api_base: Option<String>,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(flatten)]
    pub wrangler: WranglerArgs,
}

/// Comment subcommands.
#[derive(Subcommand)]
pub enum CommentAction {
    /// Preview screenshot linked to the build log
    Image {
        /// Link target
        #[arg(long)]
        building_log_url: String,
        /// Screenshot URL
        #[arg(long)]
        image_url: String,
    },

    /// Attribution footer
    Footer,
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = cli.config;

    match cli.command {
        Command::Publish(args) => publish::execute(args, config_path.as_deref()),
        Command::Teardown(args) => teardown::execute(args, config_path.as_deref()),
        Command::Comment { action } => match action {
            CommentAction::Image {
                building_log_url,
                image_url,
            } => comment::image(building_log_url, image_url),
            CommentAction::Footer => comment::footer(),
        },
        Command::Completions { shell } => completions::execute(shell),
    }
}
