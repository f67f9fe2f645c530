//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::path::Path;
use std::process::Output;

impl Test {
    /// Create a workers-preview command isolated from the caller's
    /// Cloudflare settings, running in the project directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("workers-preview").expect("failed to find workers-preview binary");
        for var in [
            "CF_ACCOUNT_ID",
            "CF_API_TOKEN",
            "CF_API_BASE",
            "WORKERS_PREVIEW_RUNNER",
            "WORKERS_PREVIEW_PACKAGE",
            "WORKERS_PREVIEW_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// `publish` against the fake wrangler with test credentials.
    pub fn publish(&self, runner: &Path, extra: &[&str]) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["publish", "--account-id", "acct-1", "--api-token", "tok-1"])
            .arg("--runner")
            .arg(runner)
            .args(extra);
        cmd
    }

    /// `teardown` against the fake wrangler and a mock API.
    pub fn teardown(&self, runner: &Path, api_base: &str, extra: &[&str]) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["teardown", "--account-id", "acct-1", "--api-token", "tok-1"])
            .arg("--runner")
            .arg(runner)
            .args(["--api-base", api_base])
            .args(extra);
        cmd
    }

    /// Run `comment` with the given args.
    pub fn comment(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("comment")
            .args(args)
            .output()
            .expect("failed to run workers-preview comment")
    }
}
