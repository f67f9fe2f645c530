//! Preview teardown.
//!
//! Deletes the worker script and, in the extended mode, the Workers Sites
//! assets namespace that belongs to it. Steps run in order and the first
//! failure aborts the rest.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use crate::core::api::{ApiResponse, CloudflareApi};
use crate::core::exec::CommandRunner;
use crate::core::namespace::{self, Namespace, NamespaceSource};
use crate::core::validation::validate_deploy_name;
use crate::core::wrangler::{Credentials, Wrangler};
use crate::error::Result;

/// What to delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Only the worker script.
    Script,
    /// The worker script and its assets namespace.
    #[default]
    ScriptAndNamespace,
}

/// Everything needed for one teardown run.
#[derive(Debug, Clone)]
pub struct TeardownRequest {
    pub working_directory: PathBuf,
    pub deploy_name: String,
    pub mode: Mode,
    pub namespace_source: NamespaceSource,
    pub credentials: Credentials,
    pub api_base: String,
    pub runner_program: String,
    pub wrangler_package: String,
}

/// Responses from the deletes that ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeardownReport {
    pub script: ApiResponse,
    pub namespace: Option<(Namespace, ApiResponse)>,
}

/// Run the teardown sequence.
pub fn teardown(runner: &dyn CommandRunner, request: &TeardownRequest) -> Result<TeardownReport> {
    validate_deploy_name(&request.deploy_name)?;

    let api = CloudflareApi::new(&request.api_base, &request.credentials)?;

    info!(deploy_name = %request.deploy_name, "deleting worker script");
    let script = api.delete_script(&request.deploy_name)?;

    if request.mode == Mode::Script {
        return Ok(TeardownReport {
            script,
            namespace: None,
        });
    }

    let namespaces = match request.namespace_source {
        NamespaceSource::Cli => {
            let wrangler = Wrangler::new(
                runner,
                &request.working_directory,
                request.credentials.clone(),
            )
            .with_program(&request.runner_program)
            .with_package(&request.wrangler_package);
            namespace::parse_cli_listing(&wrangler.kv_namespace_list()?)?
        }
        NamespaceSource::Api => api.list_namespaces()?,
    };

    let target = namespace::find_assets(&namespaces, &request.deploy_name)?;
    info!(id = %target.id, title = %target.title, "deleting assets namespace");
    let response = api.delete_namespace(&target.id)?;

    Ok(TeardownReport {
        script,
        namespace: Some((target, response)),
    })
}
