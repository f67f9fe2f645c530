//! Helper configuration.
//!
//! Handles reading the optional `.workers-preview.toml` file. Every field is
//! optional; command-line flags override it and built-in defaults fill the
//! rest.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::manifest::Strategy;
use crate::core::namespace::NamespaceSource;
use crate::core::teardown::Mode;
use crate::error::{ConfigError, Result};

/// Contents of `.workers-preview.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub wrangler: WranglerConfig,
    #[serde(default)]
    pub publish: PublishConfig,
    #[serde(default)]
    pub teardown: TeardownConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// How wrangler is invoked.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WranglerConfig {
    /// Package runner, `npx` by default.
    pub runner: Option<String>,
    /// Wrangler package spec, `@cloudflare/wrangler` by default.
    pub package: Option<String>,
    /// Project file relative to the working directory.
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublishConfig {
    pub environment: Option<String>,
    pub strategy: Option<Strategy>,
    pub strict_config: Option<bool>,
    #[serde(default)]
    pub secrets: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeardownConfig {
    pub mode: Option<Mode>,
    pub namespace_source: Option<NamespaceSource>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

impl Config {
    /// Default location inside a working directory.
    pub fn default_path(working_directory: &Path) -> PathBuf {
        working_directory.join(constants::SETTINGS_FILE)
    }

    /// Load from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed or has unknown keys.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(secrets = config.publish.secrets.len(), "config loaded");
        Ok(config)
    }

    /// Load an explicitly requested file, or the default one if present.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn discover(explicit: Option<&Path>, working_directory: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Self::default_path(working_directory);
                if path.exists() {
                    Self::load(&path)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn runner(&self) -> String {
        self.wrangler
            .runner
            .clone()
            .unwrap_or_else(|| constants::PACKAGE_RUNNER.to_string())
    }

    pub fn package(&self) -> String {
        self.wrangler
            .package
            .clone()
            .unwrap_or_else(|| constants::WRANGLER_PACKAGE.to_string())
    }

    pub fn config_file(&self) -> PathBuf {
        self.wrangler
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::WRANGLER_CONFIG))
    }

    pub fn api_base(&self) -> String {
        self.api
            .base_url
            .clone()
            .unwrap_or_else(|| constants::API_BASE.to_string())
    }
}
