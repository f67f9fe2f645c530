//! Wrangler CLI invocations.
//!
//! Every call has the shape `<runner> -y <package> <subcommand...>`, runs in
//! the deployment's working directory and carries the account credentials in
//! its environment.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::constants::{ACCOUNT_ID_VAR, API_TOKEN_VAR, PACKAGE_RUNNER, WRANGLER_PACKAGE};
use crate::core::exec::{CommandRunner, Invocation};
use crate::error::Result;

/// Account id and API token.
#[derive(Clone)]
pub struct Credentials {
    pub account_id: String,
    pub api_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// Builds and runs wrangler commands through a [`CommandRunner`].
pub struct Wrangler<'a> {
    runner: &'a dyn CommandRunner,
    program: String,
    package: String,
    working_directory: PathBuf,
    credentials: Credentials,
}

impl<'a> Wrangler<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        working_directory: impl AsRef<Path>,
        credentials: Credentials,
    ) -> Self {
        Self {
            runner,
            program: PACKAGE_RUNNER.to_string(),
            package: WRANGLER_PACKAGE.to_string(),
            working_directory: working_directory.as_ref().to_path_buf(),
            credentials,
        }
    }

    /// Override the package runner (default `npx`).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Override the wrangler package spec.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Base invocation for a subcommand.
    pub fn invocation<I, S>(&self, subcommand: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::new(&self.program)
            .arg("-y")
            .arg(&self.package)
            .args(subcommand)
            .current_dir(&self.working_directory)
            .env(API_TOKEN_VAR, &self.credentials.api_token)
            .env(ACCOUNT_ID_VAR, &self.credentials.account_id)
    }

    /// `publish -e <environment>`
    pub fn publish(&self, environment: &str) -> Result<String> {
        info!(environment, "publishing");
        self.runner.run(&self.invocation(["publish", "-e", environment]))
    }

    /// `secret put <name> -e <environment>` with the value on stdin.
    pub fn secret_put(&self, name: &str, value: &str, environment: &str) -> Result<String> {
        info!(secret = name, environment, "uploading secret");
        let invocation = self
            .invocation(["secret", "put", name, "-e", environment])
            .input(value.as_bytes());
        self.runner.run(&invocation)
    }

    /// `kv:namespace list`, raw text output.
    pub fn kv_namespace_list(&self) -> Result<String> {
        self.runner.run(&self.invocation(["kv:namespace", "list"]))
    }
}
