//! `wrangler.toml` environment management.
//!
//! Registers the preview environment before publishing. The file is parsed
//! to decide whether the target `[env.*]` table exists, but edits are made on
//! the raw lines so comments and formatting elsewhere survive untouched.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ConfigError, Result};

/// How the environment section is registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Rename an existing `[env.<environment>]` table to the deployment name.
    #[default]
    Replace,
    /// Append a fresh `[env.<environment>]` table at the end of the file.
    Append,
}

/// What a mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The header line was rewritten to the deployment name.
    Renamed,
    /// A new section was appended.
    Appended,
    /// Replace found no `[env.<environment>]` header; file untouched.
    SectionMissing,
    /// Append found the section already present; file untouched.
    AlreadyPresent,
}

impl Outcome {
    /// Whether the file was written.
    pub fn changed(self) -> bool {
        matches!(self, Outcome::Renamed | Outcome::Appended)
    }
}

/// A wrangler project file on disk.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
}

impl Manifest {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `strategy` for `environment`, naming the result `deploy_name`.
    ///
    /// `deploy_name` is ignored by [`Strategy::Append`], which registers the
    /// environment under its own name.
    pub fn register(
        &self,
        strategy: Strategy,
        environment: &str,
        deploy_name: &str,
    ) -> Result<Outcome> {
        let contents = self.read()?;
        debug!(
            path = %self.path.display(),
            ?strategy,
            environment,
            deploy_name,
            "editing manifest"
        );

        let edit = match strategy {
            Strategy::Replace => rename_section(&contents, environment, deploy_name),
            Strategy::Append => {
                if has_section(&self.parse(&contents)?, environment) {
                    Edit::unchanged(Outcome::AlreadyPresent)
                } else {
                    append_section(&contents, environment)
                }
            }
        };

        if let Some(updated) = &edit.contents {
            updated.parse::<toml::Table>().map_err(|source| ConfigError::InvalidEdit {
                path: self.path.clone(),
                source,
            })?;
            std::fs::write(&self.path, updated).map_err(|source| ConfigError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        info!(outcome = ?edit.outcome, path = %self.path.display(), "manifest updated");
        Ok(edit.outcome)
    }

    fn read(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(ConfigError::NotFound(self.path.clone()).into());
        }
        std::fs::read_to_string(&self.path).map_err(|source| {
            ConfigError::Read {
                path: self.path.clone(),
                source,
            }
            .into()
        })
    }

    fn parse(&self, contents: &str) -> Result<toml::Table> {
        contents.parse::<toml::Table>().map_err(|source| {
            ConfigError::Parse {
                path: self.path.clone(),
                source,
            }
            .into()
        })
    }
}

struct Edit {
    outcome: Outcome,
    contents: Option<String>,
}

impl Edit {
    fn unchanged(outcome: Outcome) -> Self {
        Self {
            outcome,
            contents: None,
        }
    }
}

fn header(environment: &str) -> String {
    format!("[env.{}]", environment)
}

fn name_line(name: &str) -> String {
    format!("name = \"{}\"", name)
}

fn has_section(table: &toml::Table, environment: &str) -> bool {
    table
        .get("env")
        .and_then(toml::Value::as_table)
        .is_some_and(|envs| envs.contains_key(environment))
}

/// Replace every line that is exactly `[env.<environment>]` with the renamed
/// header plus a `name` line. Line endings of untouched lines are preserved.
fn rename_section(contents: &str, environment: &str, deploy_name: &str) -> Edit {
    let target = header(environment);
    let mut found = false;
    let mut out = String::with_capacity(contents.len() + 64);

    for line in contents.split_inclusive('\n') {
        let body = line.trim_end_matches(&['\n', '\r'][..]);
        if body.trim() == target {
            found = true;
            let ending = &line[body.len()..];
            let ending = if ending.is_empty() { "\n" } else { ending };
            out.push_str(&header(deploy_name));
            out.push_str(ending);
            out.push_str(&name_line(deploy_name));
            out.push_str(ending);
        } else {
            out.push_str(line);
        }
    }

    if found {
        Edit {
            outcome: Outcome::Renamed,
            contents: Some(out),
        }
    } else {
        Edit::unchanged(Outcome::SectionMissing)
    }
}

fn append_section(contents: &str, environment: &str) -> Edit {
    let mut out = contents.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&header(environment));
    out.push('\n');
    out.push_str(&name_line(environment));
    out.push('\n');
    Edit {
        outcome: Outcome::Appended,
        contents: Some(out),
    }
}
