//! Test support utilities for workers-preview integration tests.
//!
//! Provides an isolated project directory and a fake wrangler that records
//! what it was asked to do.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// No process-global state is mutated; child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary project directory (holds wrangler.toml)
    pub dir: TempDir,
    /// Temporary directory for the fake wrangler and its call log
    pub tools: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let tools = TempDir::new().expect("failed to create tools dir");
        Self { dir, tools }
    }

    /// Create a test environment with a wrangler.toml.
    pub fn with_manifest(contents: &str) -> Self {
        let t = Self::new();
        t.write("wrangler.toml", contents);
        t
    }

    /// Write a file into the project directory.
    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.dir.path().join(name), contents).expect("failed to write file");
    }

    /// Read a file from the project directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("failed to read file")
    }

    /// Path of the fake wrangler's call log.
    pub fn log_path(&self) -> PathBuf {
        self.tools.path().join("calls.log")
    }

    /// Everything the fake wrangler recorded, or empty if it never ran.
    pub fn calls(&self) -> String {
        std::fs::read_to_string(self.log_path()).unwrap_or_default()
    }

    /// Install the fake wrangler and return its path.
    ///
    /// It logs `ARGS`, `ACCOUNT` and (for `secret put`) `STDIN` lines, then:
    /// - `publish` prints a success banner, or fails when `fail-publish`
    ///   exists in the tools dir
    /// - `secret put` prints a success banner and exits 1, as wrangler does
    /// - `kv:namespace list` prints `namespaces.txt` from the tools dir
    #[cfg(unix)]
    pub fn fake_wrangler(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let tools = self.tools.path();
        let script = format!(
            r#"#!/bin/sh
log="{log}"
shift 2
echo "ARGS $*" >> "$log"
echo "ACCOUNT $CF_ACCOUNT_ID" >> "$log"
case "$1" in
  publish)
    if [ -f "{tools}/fail-publish" ]; then
      echo "Error: Authentication error [code: 10000]"
      exit 1
    fi
    echo "Success! Published $3"
    ;;
  secret)
    value=$(cat)
    echo "STDIN $value" >> "$log"
    echo "Success! Uploaded secret $3"
    exit 1
    ;;
  kv:namespace)
    cat "{tools}/namespaces.txt"
    ;;
esac
"#,
            log = self.log_path().display(),
            tools = tools.display(),
        );

        let path = tools.join("fake-npx");
        std::fs::write(&path, script).expect("failed to write fake wrangler");
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    /// Make the fake wrangler's publish fail.
    pub fn fail_publish(&self) {
        std::fs::write(self.tools.path().join("fail-publish"), "").unwrap();
    }

    /// Set what `kv:namespace list` prints.
    pub fn namespace_listing(&self, text: &str) {
        std::fs::write(self.tools.path().join("namespaces.txt"), text).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
