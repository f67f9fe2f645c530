//! Error types for workers-preview.
//!
//! Each domain gets its own enum; [`Error`] wraps them so handlers can use `?`
//! across module boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Namespace(#[from] NamespaceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures running an external process.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` not found on PATH")]
    NotInstalled { program: String },

    #[error("i/o with `{program}` failed: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Non-zero exit with diagnostic output and no soft-success marker.
    /// Displays as the captured output, verbatim.
    #[error("{output}")]
    Failed { code: Option<i32>, output: String },
}

/// Secret resolution failures.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("Secret value for {0} not found")]
    NotFound(String),

    #[error("invalid secret name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

/// KV namespace discovery failures.
#[derive(Error, Debug)]
pub enum NamespaceError {
    #[error("No matching namespaces found")]
    NoList,

    #[error("could not parse namespace list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No KV namespace found")]
    NotFound { title: String },
}

/// Config file problems, both `wrangler.toml` and `.workers-preview.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("edit would leave {} invalid: {source}", .path.display())]
    InvalidEdit {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("section [env.{environment}] not found in {}", .path.display())]
    SectionMissing { path: PathBuf, environment: String },

    #[error("section [env.{environment}] already exists in {}", .path.display())]
    SectionExists { path: PathBuf, environment: String },
}

/// Cloudflare API failures.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}: {message}")]
    Unsuccessful {
        url: String,
        status: u16,
        message: String,
    },
}

/// Input validation failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("deployment name cannot be empty")]
    EmptyName,

    #[error("invalid deployment name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
