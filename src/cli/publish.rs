//! Publish command.
//!
//! Resolves settings, reads requested secrets from the environment and runs
//! the publish sequence.

use std::path::Path;

use crate::cli::{output, PublishArgs};
use crate::core::config::Config;
use crate::core::constants::DEFAULT_ENVIRONMENT;
use crate::core::exec::SystemRunner;
use crate::core::manifest::Outcome;
use crate::core::publish::{self, PublishRequest};
use crate::core::secrets::SecretValues;
use crate::error::Result;

/// Publish a preview environment.
pub fn execute(args: PublishArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::discover(config_path, &args.working_directory)?;

    let secrets = if args.secrets.is_empty() {
        config.publish.secrets.clone()
    } else {
        args.secrets.clone()
    };

    let request = PublishRequest {
        config_file: config.config_file(),
        environment: args
            .environment
            .clone()
            .or_else(|| config.publish.environment.clone())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        deploy_name: args.deploy_name.clone(),
        strategy: args.strategy.or(config.publish.strategy).unwrap_or_default(),
        strict_config: args.strict_config || config.publish.strict_config.unwrap_or(false),
        runner_program: args.wrangler.runner(&config),
        wrangler_package: args.wrangler.package(&config),
        working_directory: args.working_directory,
        credentials: args.credentials.into(),
        secrets,
    };

    let values = SecretValues::from_env(&request.secrets);
    let report = publish::publish(&SystemRunner, &request, &values)?;

    let manifest_path = request.working_directory.join(&request.config_file);
    let manifest_path = manifest_path.display().to_string();
    match report.manifest {
        Outcome::Renamed => output::success(&format!(
            "renamed [env.{}] to [env.{}] in {}",
            request.environment,
            report.environment,
            output::path(&manifest_path)
        )),
        Outcome::Appended => output::success(&format!(
            "added [env.{}] to {}",
            report.environment,
            output::path(&manifest_path)
        )),
        Outcome::SectionMissing => output::warn(&format!(
            "[env.{}] not found in {}, left unchanged",
            request.environment,
            output::path(&manifest_path)
        )),
        Outcome::AlreadyPresent => output::warn(&format!(
            "[env.{}] already in {}, left unchanged",
            request.environment,
            output::path(&manifest_path)
        )),
    }
    if !report.manifest.changed() {
        output::hint("pass --strict-config to fail instead");
    }

    output::success(&format!("published {}", output::name(&report.environment)));
    if !report.secrets.is_empty() {
        output::success(&format!("uploaded {} secret(s)", report.secrets.len()));
        for name in &report.secrets {
            output::list_item(name);
        }
    }

    Ok(())
}
