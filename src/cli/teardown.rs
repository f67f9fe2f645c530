//! Teardown command.

use std::path::Path;

use crate::cli::{output, TeardownArgs};
use crate::core::api::ApiResponse;
use crate::core::config::Config;
use crate::core::exec::SystemRunner;
use crate::core::teardown::{self, TeardownRequest};
use crate::error::Result;

/// Delete a preview deployment.
pub fn execute(args: TeardownArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::discover(config_path, &args.working_directory)?;

    let request = TeardownRequest {
        deploy_name: args.deploy_name.clone(),
        mode: args.mode.or(config.teardown.mode).unwrap_or_default(),
        namespace_source: args
            .namespace_source
            .or(config.teardown.namespace_source)
            .unwrap_or_default(),
        api_base: args.api_base.clone().unwrap_or_else(|| config.api_base()),
        runner_program: args.wrangler.runner(&config),
        wrangler_package: args.wrangler.package(&config),
        working_directory: args.working_directory,
        credentials: args.credentials.into(),
    };

    let report = teardown::teardown(&SystemRunner, &request)?;

    report_delete(&format!("script {}", output::name(&request.deploy_name)), &report.script);
    if let Some((namespace, response)) = &report.namespace {
        report_delete(
            &format!("namespace {} ({})", output::name(&namespace.title), namespace.id),
            response,
        );
    }

    Ok(())
}

fn report_delete(what: &str, response: &ApiResponse) {
    if response.is_success() {
        output::success(&format!("deleted {}", what));
    } else {
        output::warn(&format!("delete {} returned {}", what, response.status));
        if !response.body.is_empty() {
            output::kv("response:", response.body.trim());
        }
    }
}
