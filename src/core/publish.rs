//! Preview publishing.
//!
//! Registers the environment in `wrangler.toml`, publishes it, then uploads
//! each requested secret in order. Nothing is rolled back on failure: steps
//! that already ran stay applied and the caller decides whether to tear down.

use std::path::PathBuf;
use tracing::{info, warn};

use crate::core::exec::CommandRunner;
use crate::core::manifest::{Manifest, Outcome, Strategy};
use crate::core::secrets::{self, SecretValues};
use crate::core::validation::validate_deploy_name;
use crate::core::wrangler::{Credentials, Wrangler};
use crate::error::{ConfigError, Result};

/// Everything needed for one publish run.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub working_directory: PathBuf,
    /// Path of `wrangler.toml`, relative to the working directory.
    pub config_file: PathBuf,
    /// Existing environment used as the template.
    pub environment: String,
    /// Name the preview is published under.
    pub deploy_name: String,
    pub strategy: Strategy,
    /// Treat a missing (replace) or existing (append) section as an error.
    pub strict_config: bool,
    /// Secret names, uploaded in this order.
    pub secrets: Vec<String>,
    pub credentials: Credentials,
    pub runner_program: String,
    pub wrangler_package: String,
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub manifest: Outcome,
    /// Environment name passed to wrangler.
    pub environment: String,
    pub secrets: Vec<String>,
}

/// Run the publish sequence.
pub fn publish(
    runner: &dyn CommandRunner,
    request: &PublishRequest,
    values: &SecretValues,
) -> Result<PublishReport> {
    validate_deploy_name(&request.deploy_name)?;
    validate_deploy_name(&request.environment)?;
    for name in &request.secrets {
        secrets::validate_name(name)?;
    }

    let manifest = Manifest::new(request.working_directory.join(&request.config_file));
    let outcome = manifest.register(request.strategy, &request.environment, &request.deploy_name)?;
    check_outcome(request, &manifest, outcome)?;

    // Append registers the template name itself; replace renames it.
    let target = match request.strategy {
        Strategy::Replace => request.deploy_name.as_str(),
        Strategy::Append => request.environment.as_str(),
    };

    let wrangler = Wrangler::new(runner, &request.working_directory, request.credentials.clone())
        .with_program(&request.runner_program)
        .with_package(&request.wrangler_package);

    wrangler.publish(target)?;
    info!(environment = target, "published");

    let mut uploaded = Vec::with_capacity(request.secrets.len());
    for name in &request.secrets {
        let value = values.require(name)?;
        wrangler.secret_put(name, value, target)?;
        uploaded.push(name.clone());
    }

    Ok(PublishReport {
        manifest: outcome,
        environment: target.to_string(),
        secrets: uploaded,
    })
}

fn check_outcome(request: &PublishRequest, manifest: &Manifest, outcome: Outcome) -> Result<()> {
    let path = manifest.path().to_path_buf();
    let environment = request.environment.clone();
    match outcome {
        Outcome::SectionMissing if request.strict_config => {
            Err(ConfigError::SectionMissing { path, environment }.into())
        }
        Outcome::AlreadyPresent if request.strict_config => {
            Err(ConfigError::SectionExists { path, environment }.into())
        }
        Outcome::SectionMissing => {
            warn!(
                environment = %environment,
                path = %path.display(),
                "section not found, manifest unchanged"
            );
            Ok(())
        }
        Outcome::AlreadyPresent => {
            warn!(
                environment = %environment,
                path = %path.display(),
                "section already present, manifest unchanged"
            );
            Ok(())
        }
        Outcome::Renamed | Outcome::Appended => Ok(()),
    }
}
